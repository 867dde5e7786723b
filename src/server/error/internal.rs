use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to hash a user password with bcrypt.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to hash password: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// A blocking task (password hashing) panicked or was cancelled.
    #[error("Blocking task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),
}
