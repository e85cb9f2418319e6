pub mod identity;
pub mod request;

pub use identity::{CustomerId, IdentityError, CUSTOMER_ID_LEN};
pub use request::validate_request;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Identity verification failed: {0}")]
    IdentityError(#[from] IdentityError),
}

pub type CoreResult<T> = Result<T, CoreError>;
