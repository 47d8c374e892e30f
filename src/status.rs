// System status display: DB location, size, analysis count, latest entries.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::db::Database;
use crate::output::truncate_chars;

/// Display system status to the terminal.
pub async fn show(db: &Arc<dyn Database>, db_path: &str) -> Result<()> {
    let file_size = std::fs::metadata(db_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Database: {} ({})", db_path, file_size);

    let count = db.analysis_count().await?;
    println!("Stored analyses: {count}");

    let recent = db.recent_analyses(5).await?;
    if recent.is_empty() {
        println!("Recent analyses: none yet");
        println!("  Run `gleaner analyze \"some text\"` to add one");
    } else {
        println!("Recent analyses: {} most recent:", recent.len());
        for analysis in &recent {
            println!(
                "  #{} [{}] {} ({})",
                analysis.id,
                analysis.keywords.join(", "),
                truncate_chars(&analysis.input_text, 60),
                analysis.created_at
            );
        }
    }

    Ok(())
}

/// Whether a database file exists at `db_path`.
pub fn is_initialized(db_path: &str) -> bool {
    Path::new(db_path).exists()
}

pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
