use thiserror::Error;

/// Closed error set for the tool.
///
/// The sentinel variants carry the exact messages the CLI prints; engine
/// errors pass through the transparent wrappers with their own text.
#[derive(Debug, Error)]
pub enum Error {
    /// Usage text was already written to stderr; signals the usage exit status.
    #[error("usage")]
    Usage,
    #[error("unknown command")]
    UnknownCommand,

    #[error("path required")]
    PathRequired,
    #[error("bucket required")]
    BucketRequired,
    #[error("key required")]
    KeyRequired,
    #[error("value required")]
    ValueRequired,

    #[error("file not found")]
    FileNotFound,
    #[error("bucket not found")]
    BucketNotFound,

    // Engine errors, propagated verbatim.
    #[error(transparent)]
    Database(#[from] redb::DatabaseError),
    #[error(transparent)]
    Transaction(#[from] redb::TransactionError),
    #[error(transparent)]
    Table(#[from] redb::TableError),
    #[error(transparent)]
    Storage(#[from] redb::StorageError),
    #[error(transparent)]
    Commit(#[from] redb::CommitError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status: 2 for usage errors, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
