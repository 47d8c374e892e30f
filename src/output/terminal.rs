// Colored terminal output for analyses and keyword lists.
//
// The CLI commands in main.rs delegate here for anything beyond a one-line
// status message.

use colored::Colorize;

use crate::db::models::AnalysisPayload;

/// Display a list of analyses, one block per entry.
pub fn display_analyses(title: &str, analyses: &[AnalysisPayload]) {
    if analyses.is_empty() {
        println!("No analyses found.");
        return;
    }

    println!(
        "\n{}",
        format!("=== {title} ({} results) ===", analyses.len()).bold()
    );

    for analysis in analyses {
        display_analysis(analysis);
    }
    println!();
}

/// Display a single analysis.
pub fn display_analysis(analysis: &AnalysisPayload) {
    println!();
    let heading = match &analysis.title {
        Some(title) => format!("#{} {}", analysis.id, title),
        None => format!("#{}", analysis.id),
    };
    println!("  {}", heading.bold());

    if let Some(summary) = analysis.summary.as_deref().filter(|s| !s.is_empty()) {
        println!("    {}", super::truncate_chars(summary, 160).dimmed());
    }

    println!("    Topics:     {}", join_or_dash(&analysis.topics).cyan());
    println!("    Keywords:   {}", join_or_dash(&analysis.keywords).green());
    if let Some(sentiment) = &analysis.sentiment {
        println!("    Sentiment:  {}", colorize_sentiment(sentiment));
    }
    println!(
        "    Confidence: {}",
        colorize_confidence(analysis.confidence)
    );
}

/// Print keywords as a numbered list.
pub fn display_keywords(keywords: &[String]) {
    if keywords.is_empty() {
        println!("{}", "No keywords found.".dimmed());
        return;
    }
    for (i, kw) in keywords.iter().enumerate() {
        println!("  {}. {}", i + 1, kw.green());
    }
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

fn colorize_sentiment(sentiment: &str) -> colored::ColoredString {
    match sentiment.to_lowercase().as_str() {
        "positive" => sentiment.green(),
        "negative" => sentiment.red(),
        "neutral" => sentiment.normal(),
        _ => sentiment.dimmed(),
    }
}

fn colorize_confidence(confidence: f64) -> colored::ColoredString {
    let text = format!("{confidence:.2}");
    match confidence {
        c if c >= 0.7 => text.green(),
        c if c >= 0.4 => text.yellow(),
        _ => text.red(),
    }
}
