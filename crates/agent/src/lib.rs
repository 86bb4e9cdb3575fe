//! Generative-AI enrichment backends.
//!
//! Implements the core's [`stockpilot_core::InsightSource`] seam against
//! the Gemini text-generation API. Everything here is best effort: the
//! engine must behave identically when this crate is absent or failing.

mod gemini;
mod prompt;

pub use gemini::GeminiInsightClient;
