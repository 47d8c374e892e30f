// Database trait: backend-agnostic async interface for all DB operations.
//
// SqliteDatabase is the only implementor today. Methods are async so a
// native-async backend could slot in behind the same interface, and so
// callers in the web layer can hold an `Arc<dyn Database>`.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{Analysis, NewAnalysis};

#[async_trait]
pub trait Database: Send + Sync {
    // --- Lifecycle ---

    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    // --- Analyses ---

    /// Persist a new analysis and return it with its assigned id and timestamp.
    async fn insert_analysis(&self, analysis: &NewAnalysis) -> Result<Analysis>;

    /// Load a single analysis by id.
    async fn get_analysis(&self, id: i64) -> Result<Option<Analysis>>;

    /// Case-insensitive substring search over topics and keywords, newest first.
    async fn search_analyses(&self, term: &str) -> Result<Vec<Analysis>>;

    /// Most recent analyses, newest first.
    async fn recent_analyses(&self, limit: u32) -> Result<Vec<Analysis>>;

    /// Total number of stored analyses.
    async fn analysis_count(&self) -> Result<i64>;
}
