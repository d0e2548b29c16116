use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("DAO error: {0}")]
    Dao(String),
}
