// SqliteDatabase: rusqlite backend implementing the Database trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is !Sync.
// Trait methods lock the mutex, do synchronous rusqlite work, and return.
// The lock is never held across an .await on anything else.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::models::{Analysis, NewAnalysis};
use super::traits::Database;

pub struct SqliteDatabase {
    conn: Mutex<Connection>,
}

impl SqliteDatabase {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn insert_analysis(&self, analysis: &NewAnalysis) -> Result<Analysis> {
        let conn = self.conn.lock().await;
        super::queries::insert_analysis(&conn, analysis)
    }

    async fn get_analysis(&self, id: i64) -> Result<Option<Analysis>> {
        let conn = self.conn.lock().await;
        super::queries::get_analysis(&conn, id)
    }

    async fn search_analyses(&self, term: &str) -> Result<Vec<Analysis>> {
        let conn = self.conn.lock().await;
        super::queries::search_analyses(&conn, term)
    }

    async fn recent_analyses(&self, limit: u32) -> Result<Vec<Analysis>> {
        let conn = self.conn.lock().await;
        super::queries::recent_analyses(&conn, limit)
    }

    async fn analysis_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::analysis_count(&conn)
    }
}
