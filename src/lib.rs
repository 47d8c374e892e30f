// Gleaner: structured insight extraction from free-form text.
//
// This is the library root. `keywords` is the self-contained extraction
// heuristic; the other modules are the service around it: an external text
// analyzer, SQLite storage, confidence scoring, the analysis pipeline, and
// the HTTP API.

pub mod analysis;
pub mod config;
pub mod db;
pub mod keywords;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod status;

#[cfg(feature = "web")]
pub mod web;
