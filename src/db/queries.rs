// Database queries: CRUD operations for the analyses table.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust interfaces.

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use rusqlite::{params, Connection, Row};

use super::models::{Analysis, NewAnalysis};

const ANALYSIS_COLUMNS: &str =
    "id, title, summary, sentiment, topics, keywords, input_text, created_at";

/// Insert an analysis and return the stored row.
pub fn insert_analysis(conn: &Connection, new: &NewAnalysis) -> Result<Analysis> {
    let topics_json = serde_json::to_string(&new.topics)?;
    let keywords_json = serde_json::to_string(&new.keywords)?;
    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    conn.execute(
        "INSERT INTO analyses (title, summary, sentiment, topics, keywords, input_text, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            new.title,
            new.summary,
            new.sentiment,
            topics_json,
            keywords_json,
            new.input_text,
            created_at,
        ],
    )?;

    Ok(Analysis {
        id: conn.last_insert_rowid(),
        title: new.title.clone(),
        summary: new.summary.clone(),
        sentiment: new.sentiment.clone(),
        topics: new.topics.clone(),
        keywords: new.keywords.clone(),
        input_text: new.input_text.clone(),
        created_at,
    })
}

/// Look up a single analysis by id.
pub fn get_analysis(conn: &Connection, id: i64) -> Result<Option<Analysis>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ANALYSIS_COLUMNS} FROM analyses WHERE id = ?1"
    ))?;
    let result = stmt.query_row(params![id], row_to_analysis).optional()?;
    Ok(result)
}

/// Case-insensitive substring search over the serialized topic and keyword
/// lists, newest first.
///
/// `%` and `_` in the term are matched literally.
pub fn search_analyses(conn: &Connection, term: &str) -> Result<Vec<Analysis>> {
    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
    let mut stmt = conn.prepare(&format!(
        "SELECT {ANALYSIS_COLUMNS}
         FROM analyses
         WHERE lower(topics) LIKE ?1 ESCAPE '\\'
            OR lower(keywords) LIKE ?1 ESCAPE '\\'
         ORDER BY created_at DESC, id DESC"
    ))?;

    let rows = stmt.query_map(params![pattern], row_to_analysis)?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}

/// Most recent analyses, newest first.
pub fn recent_analyses(conn: &Connection, limit: u32) -> Result<Vec<Analysis>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ANALYSIS_COLUMNS}
         FROM analyses
         ORDER BY created_at DESC, id DESC
         LIMIT ?1"
    ))?;

    let rows = stmt.query_map(params![limit], row_to_analysis)?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}

/// Total number of stored analyses.
pub fn analysis_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM analyses", [], |row| row.get(0))?;
    Ok(count)
}

/// Map a row selected with `ANALYSIS_COLUMNS`. Malformed JSON lists decode
/// as empty rather than failing the whole query.
fn row_to_analysis(row: &Row<'_>) -> rusqlite::Result<Analysis> {
    let topics_json: Option<String> = row.get(4)?;
    let keywords_json: Option<String> = row.get(5)?;
    Ok(Analysis {
        id: row.get(0)?,
        title: row.get(1)?,
        summary: row.get(2)?,
        sentiment: row.get(3)?,
        topics: decode_list(topics_json.as_deref()),
        keywords: decode_list(keywords_json.as_deref()),
        input_text: row.get(6)?,
        created_at: row.get(7)?,
    })
}

fn decode_list(json: Option<&str>) -> Vec<String> {
    json.and_then(|j| serde_json::from_str(j).ok())
        .unwrap_or_default()
}

fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

// rusqlite's optional() helper: converts "no rows" into None
use rusqlite::OptionalExtension;
