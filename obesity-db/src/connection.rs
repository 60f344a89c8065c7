use std::{env, sync::Arc};

use dotenv::dotenv;
use log::debug;
use sqlx::{Connection as SqlxConnection, Executor, SqliteConnection};
use tokio::sync::{Mutex, MutexGuard};

use crate::{Error, Result};

const SETUP_QUERY: &str = "PRAGMA cache_size = -1000;
PRAGMA page_size = 4096;
PRAGMA journal_mode = WAL;
PRAGMA synchronous = NORMAL;";

const CREATE_WORKSHEET_QUERY: &str = "CREATE TABLE IF NOT EXISTS obesity (
    row_key INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL,
    Age TEXT NOT NULL,
    Gender TEXT NOT NULL,
    Height TEXT NOT NULL,
    Weight TEXT NOT NULL,
    BMI TEXT NOT NULL,
    Category TEXT NOT NULL
);";

#[derive(Clone)]
pub struct Connection {
    inner: Arc<Mutex<SqliteConnection>>,
}

impl Connection {
    /// Connect to the store named by `DATABASE_URL`, read from the
    /// environment or a `.env` file.
    pub async fn establish() -> Result<Self> {
        dotenv().ok();
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| Error::Configuration("DATABASE_URL must be set".to_owned()))?;
        Self::open(&database_url).await
    }

    pub async fn open(database_url: &str) -> Result<Self> {
        debug!("Opening {}", database_url);
        let mut connection = SqliteConnection::connect(database_url)
            .await
            .map_err(Error::StoreUnavailable)?;

        connection
            .execute(SETUP_QUERY)
            .await
            .map_err(Error::StoreUnavailable)?;
        connection
            .execute(CREATE_WORKSHEET_QUERY)
            .await
            .map_err(Error::StoreUnavailable)?;

        Ok(Self {
            inner: Arc::new(Mutex::new(connection)),
        })
    }

    pub async fn lock(&self) -> MutexGuard<'_, SqliteConnection> {
        self.inner.lock().await
    }
}
