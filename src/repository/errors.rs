use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Car with id {0} not found")]
    NotFound(i64),

    #[error("Car with id {0} already exists")]
    Conflict(i64),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Duplicate-key write error raised by the unique index on `id`.
pub fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    const DUPLICATE_KEY: i32 = 11000;

    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY,
        _ => false,
    }
}
