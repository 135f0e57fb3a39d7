//! Keyword extraction and matching engine shared by the ATS checker and the
//! interview planner.
//!
//! All functions here are pure and recompute from raw text on every call.

pub mod extractor;
pub mod matcher;
pub mod normalize;
pub mod suggestions;
pub mod vocabulary;

pub use extractor::{ExtractorConfig, KeywordExtractor};
pub use matcher::{score, AnalysisResult, KeywordEntry};
pub use normalize::normalize;
pub use suggestions::{format_suggestions, DEFAULT_SUGGESTION_LIMIT};
