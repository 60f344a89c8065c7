use async_trait::async_trait;
use log::debug;
use obesity_model::table::columns;
use sqlx::Row;

use crate::{connection::Connection, Error, Result};

const SELECT_QUERY: &str = "SELECT id, Age, Gender, Height, Weight, BMI, Category
FROM obesity
ORDER BY row_key";

const INSERT_QUERY: &str = "INSERT INTO obesity (id, Age, Gender, Height, Weight, BMI, Category)
VALUES (?, ?, ?, ?, ?, ?, ?)";

/// Append-only table of text cells.
#[mockall::automock]
#[async_trait]
pub trait Worksheet: Send + Sync {
    /// All rows, header first.
    async fn read_all_rows(&self) -> Result<Vec<Vec<String>>>;
    async fn append_row(&self, values: Vec<String>) -> Result<()>;
}

pub struct WorksheetImpl {
    connection: Connection,
}

impl WorksheetImpl {
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl Worksheet for WorksheetImpl {
    async fn read_all_rows(&self) -> Result<Vec<Vec<String>>> {
        let mut conn = self.connection.lock().await;
        debug!("Fetching worksheet rows");
        let fetched = sqlx::query(SELECT_QUERY)
            .fetch_all(&mut *conn)
            .await
            .map_err(Error::Query)?;

        let mut rows = Vec::with_capacity(fetched.len() + 1);
        rows.push(columns::ALL.iter().map(|c| c.to_string()).collect());
        for row in fetched {
            let cells = (0..columns::ALL.len())
                .map(|i| row.try_get::<String, _>(i))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(Error::Query)?;
            rows.push(cells);
        }
        debug!("Fetched {} data rows", rows.len() - 1);
        Ok(rows)
    }

    async fn append_row(&self, values: Vec<String>) -> Result<()> {
        if values.len() != columns::ALL.len() {
            return Err(Error::RowWidth {
                expected: columns::ALL.len(),
                found: values.len(),
            });
        }

        debug!("Appending row {:?}", values);
        let query = values
            .into_iter()
            .fold(sqlx::query(INSERT_QUERY), |query, value| query.bind(value));

        let mut conn = self.connection.lock().await;
        query.execute(&mut *conn).await.map_err(Error::Query)?;
        Ok(())
    }
}
