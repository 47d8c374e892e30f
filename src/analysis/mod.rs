// Text analysis: trait-based abstraction for swappable providers.
//
// The TextAnalyzer trait defines the interface. OpenAiAnalyzer implements it
// against any OpenAI-compatible chat completions endpoint; MockAnalyzer is a
// deterministic stand-in used in tests and offline development.

pub mod mock;
pub mod openai;
pub mod traits;
