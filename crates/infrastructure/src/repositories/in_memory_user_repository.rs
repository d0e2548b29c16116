use async_trait::async_trait;
use config::UserIdStrategy;
use domain::{DomainError, NewUser, User, UserRepository};
use tokio::sync::RwLock;
use tracing::trace;

#[derive(Debug, Default)]
struct UserTable {
    rows: Vec<User>,
    last_id: u64,
}

impl UserTable {
    fn next_id(&mut self, strategy: UserIdStrategy) -> u64 {
        match strategy {
            UserIdStrategy::Sequential => {
                self.last_id += 1;
                self.last_id
            }
            UserIdStrategy::CountBased => self.rows.len() as u64 + 1,
        }
    }
}

/// Registry storage kept in process memory, in insertion order
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
    strategy: UserIdStrategy,
}

impl InMemoryUserRepository {
    pub fn new(strategy: UserIdStrategy) -> Self {
        Self {
            table: RwLock::new(UserTable::default()),
            strategy,
        }
    }

    pub fn strategy(&self) -> UserIdStrategy {
        self.strategy
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, DomainError> {
        let mut table = self.table.write().await;
        let id = table.next_id(self.strategy);
        let user = user.with_id(id);
        table.rows.push(user.clone());
        trace!(user_id = id, rows = table.rows.len(), "row inserted");
        Ok(user)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|user| user.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn delete(&self, id: u64) -> Result<bool, DomainError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|user| user.id != id);
        Ok(table.rows.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str) -> NewUser {
        NewUser::new(name, format!("{}@example.com", name.to_lowercase()), "user")
    }

    #[test]
    fn keeps_the_configured_strategy() {
        assert_eq!(
            InMemoryUserRepository::new(UserIdStrategy::CountBased).strategy(),
            UserIdStrategy::CountBased
        );
        assert_eq!(
            InMemoryUserRepository::default().strategy(),
            UserIdStrategy::Sequential
        );
    }

    #[tokio::test]
    async fn assigns_ids_from_one() {
        let repo = InMemoryUserRepository::new(UserIdStrategy::Sequential);
        let a = repo.insert(new_user("A")).await.unwrap();
        let b = repo.insert(new_user("B")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
    }

    #[tokio::test]
    async fn sequential_ids_are_never_reused() {
        let repo = InMemoryUserRepository::new(UserIdStrategy::Sequential);
        repo.insert(new_user("A")).await.unwrap();
        let b = repo.insert(new_user("B")).await.unwrap();
        assert!(repo.delete(1).await.unwrap());

        let c = repo.insert(new_user("C")).await.unwrap();
        assert_eq!(c.id, 3);

        let ids: Vec<u64> = repo.find_all().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, [b.id, c.id]);
    }

    #[tokio::test]
    async fn count_based_ids_can_collide_after_delete() {
        let repo = InMemoryUserRepository::new(UserIdStrategy::CountBased);
        repo.insert(new_user("A")).await.unwrap();
        repo.insert(new_user("B")).await.unwrap();
        assert!(repo.delete(1).await.unwrap());

        // one row left, so the next id is 2 again
        let c = repo.insert(new_user("C")).await.unwrap();
        assert_eq!(c.id, 2);

        let ids: Vec<u64> = repo.find_all().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, [2, 2]);

        // first match wins on lookup, delete removes every match
        assert_eq!(repo.find_by_id(2).await.unwrap().unwrap().name, "B");
        assert!(repo.delete(2).await.unwrap());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_all_returns_a_snapshot() {
        let repo = InMemoryUserRepository::default();
        repo.insert(new_user("A")).await.unwrap();

        let snapshot = repo.find_all().await.unwrap();
        repo.insert(new_user("B")).await.unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_leaves_rows_untouched() {
        let repo = InMemoryUserRepository::default();
        repo.insert(new_user("A")).await.unwrap();

        assert!(!repo.delete(42).await.unwrap());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
        assert_eq!(repo.find_by_id(42).await.unwrap(), None);
    }
}
