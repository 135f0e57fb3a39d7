//! Résumé tooling core for the job site: keyword extraction, ATS scoring,
//! the checker run path with its backend fallback, interview prep and the
//! salary estimator.
//!
//! The engine in [`keywords`] is pure and synchronous. Everything that talks
//! to the optional backend goes through [`backend::AtsBackend`].

pub mod backend;
pub mod checker;
pub mod config;
pub mod errors;
pub mod interview;
pub mod keywords;
pub mod resume_builder;
pub mod salary;
pub mod verification;

pub use checker::{AnalysisSource, AtsChecker, AtsReport, CheckReport};
pub use config::Config;
pub use errors::{AppError, BackendError};
pub use keywords::{AnalysisResult, ExtractorConfig, KeywordEntry, KeywordExtractor};
