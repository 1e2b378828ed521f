use thiserror::Error;

/// Errors from cart store operations.
///
/// Read-path failures never appear here: a missing key, a corrupt payload,
/// or a failed storage read all degrade to an empty cart. Only write-path
/// storage failures and empty-cart submission surface to the caller.
#[derive(Debug, Error)]
pub enum CartError {
    /// The storage backend failed while persisting the cart.
    #[error("storage error: {0}")]
    Storage(#[from] basket_storage::StorageError),

    /// Submission was requested for an empty cart.
    #[error("cannot submit an empty cart")]
    EmptyCart,
}

/// Result alias for cart operations.
pub type CartResult<T> = Result<T, CartError>;
