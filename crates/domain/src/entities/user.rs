use serde::{Deserialize, Serialize};

/// Role value granting administrative rights.
pub const ADMIN_ROLE: &str = "admin";

/// Core User entity held by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// User data before the registry assigns an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    pub fn with_id(self, id: u64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
        }
    }
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}
