pub mod connection;
pub mod record;
pub mod worksheet;

pub use connection::Connection;
pub use record::{next_id, StoredRecord};
pub use worksheet::{MockWorksheet, Worksheet, WorksheetImpl};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("store configuration error: {0}")]
    Configuration(String),
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[source] sqlx::Error),
    #[error("store query failed: {0}")]
    Query(#[source] sqlx::Error),
    #[error("row has {found} cells, worksheet has {expected} columns")]
    RowWidth { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
