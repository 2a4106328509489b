use sea_orm::DbErr;
use thiserror::Error;

/// Failure reported by an operation store.
///
/// Storage backends translate their native errors into this type so the service layer
/// stays independent of the backend in use.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The storage medium could not be reached.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The storage medium was reached but rejected the statement.
    #[error(transparent)]
    Database(DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => Self::Unavailable(err.to_string()),
            err => Self::Database(err),
        }
    }
}
