// Scoring: derived signals computed from stored analyses.

pub mod confidence;
