//! Analysis orchestration.
//!
//! - **Configuration** (`config`): loading and discovering [`AnalysisConfig`]
//! - **Analyzer** (`analyzer`): the [`Analyzer`] service that runs extraction
//!   and matching for one or many resume/job pairs

pub mod analyzer;
pub mod config;

pub use analyzer::{Analyzer, analyze_resume_against_job, default_analyzer, ensure_resources_available};
pub use config::AnalysisConfig;
