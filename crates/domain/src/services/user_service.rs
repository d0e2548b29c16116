use crate::entities::{NewUser, User};
use crate::errors::DomainError;
use crate::repositories::UserRepository;
use crate::validation;
use std::sync::Arc;
use tracing::{debug, info};

/// User Service - registry business rules over a `UserRepository`
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Create a new user after validating the email
    pub async fn create_user(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Result<User, DomainError> {
        let new_user = NewUser::new(name, email, role);

        if !self.is_valid_email(Some(new_user.email.as_str())) {
            debug!(email = %new_user.email, "rejected user with invalid email");
            return Err(DomainError::InvalidArgument("Invalid email format".to_string()));
        }

        let user = self.user_repository.insert(new_user).await?;
        info!(user_id = user.id, "user created");
        Ok(user)
    }

    /// Get all users in creation order
    pub async fn get_all_users(&self) -> Result<Vec<User>, DomainError> {
        self.user_repository.find_all().await
    }

    /// Find user by ID; absence is `Ok(None)`
    pub async fn find_user_by_id(&self, id: u64) -> Result<Option<User>, DomainError> {
        let user = self.user_repository.find_by_id(id).await?;
        debug!(user_id = id, found = user.is_some(), "user lookup");
        Ok(user)
    }

    /// Delete user; returns whether anything was removed
    pub async fn delete_user(&self, id: u64) -> Result<bool, DomainError> {
        let removed = self.user_repository.delete(id).await?;
        if removed {
            info!(user_id = id, "user deleted");
        } else {
            debug!(user_id = id, "delete requested for unknown user");
        }
        Ok(removed)
    }

    pub fn is_admin(&self, user: &User) -> bool {
        user.is_admin()
    }

    pub fn is_valid_email(&self, email: Option<&str>) -> bool {
        validation::is_valid_email(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio::sync::Mutex;
    use tracing_test::traced_test;

    #[derive(Default)]
    struct VecUserRepository {
        users: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserRepository for VecUserRepository {
        async fn insert(&self, user: NewUser) -> Result<User, DomainError> {
            let mut users = self.users.lock().await;
            let user = user.with_id(users.len() as u64 + 1);
            users.push(user.clone());
            Ok(user)
        }

        async fn find_by_id(&self, id: u64) -> Result<Option<User>, DomainError> {
            Ok(self.users.lock().await.iter().find(|u| u.id == id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<User>, DomainError> {
            Ok(self.users.lock().await.clone())
        }

        async fn delete(&self, id: u64) -> Result<bool, DomainError> {
            let mut users = self.users.lock().await;
            let before = users.len();
            users.retain(|u| u.id != id);
            Ok(users.len() != before)
        }
    }

    struct FailingUserRepository;

    #[async_trait]
    impl UserRepository for FailingUserRepository {
        async fn insert(&self, _user: NewUser) -> Result<User, DomainError> {
            Err(DomainError::Repository("storage offline".to_string()))
        }

        async fn find_by_id(&self, _id: u64) -> Result<Option<User>, DomainError> {
            Err(DomainError::Repository("storage offline".to_string()))
        }

        async fn find_all(&self) -> Result<Vec<User>, DomainError> {
            Err(DomainError::Repository("storage offline".to_string()))
        }

        async fn delete(&self, _id: u64) -> Result<bool, DomainError> {
            Err(DomainError::Repository("storage offline".to_string()))
        }
    }

    fn service() -> UserService {
        UserService::new(Arc::new(VecUserRepository::default()))
    }

    #[tokio::test]
    async fn create_user_returns_input_fields() {
        let service = service();
        let user = service
            .create_user("John Doe", "john@example.com", "user")
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "john@example.com");
        assert_eq!(user.role, "user");
    }

    #[tokio::test]
    async fn create_user_rejects_invalid_email() {
        let service = service();
        let err = service
            .create_user("John Doe", "invalid-email", "user")
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::InvalidArgument("Invalid email format".to_string()));
        assert!(service.get_all_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_all_users_preserves_creation_order() {
        let service = service();
        service.create_user("A", "a@example.com", "user").await.unwrap();
        service.create_user("B", "b@example.com", "admin").await.unwrap();

        let users = service.get_all_users().await.unwrap();
        let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[tokio::test]
    async fn find_user_by_id_hits_and_misses() {
        let service = service();
        let created = service.create_user("A", "a@example.com", "user").await.unwrap();

        assert_eq!(service.find_user_by_id(created.id).await.unwrap(), Some(created));
        assert_eq!(service.find_user_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_user_reports_removal() {
        let service = service();
        let created = service.create_user("A", "a@example.com", "user").await.unwrap();

        assert!(!service.delete_user(999).await.unwrap());
        assert_eq!(service.get_all_users().await.unwrap().len(), 1);

        assert!(service.delete_user(created.id).await.unwrap());
        assert!(service.get_all_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn is_admin_checks_role() {
        let service = service();
        let admin = service.create_user("Root", "root@example.com", "admin").await.unwrap();
        let user = service.create_user("Jane", "jane@example.com", "user").await.unwrap();

        assert!(service.is_admin(&admin));
        assert!(!service.is_admin(&user));
    }

    #[tokio::test]
    async fn repository_errors_propagate() {
        let service = UserService::new(Arc::new(FailingUserRepository));

        assert!(matches!(
            service.create_user("A", "a@example.com", "user").await,
            Err(DomainError::Repository(_))
        ));
        assert!(matches!(service.get_all_users().await, Err(DomainError::Repository(_))));
        assert!(matches!(service.find_user_by_id(1).await, Err(DomainError::Repository(_))));
        assert!(matches!(service.delete_user(1).await, Err(DomainError::Repository(_))));
    }

    #[traced_test]
    #[tokio::test]
    async fn create_and_delete_are_logged() {
        let service = service();
        let user = service.create_user("A", "a@example.com", "user").await.unwrap();
        service.delete_user(user.id).await.unwrap();

        assert!(logs_contain("user created"));
        assert!(logs_contain("user deleted"));
    }
}
