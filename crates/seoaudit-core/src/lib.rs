//! SEO Audit Core Library
//!
//! Fetches pages and derives simple SEO signals from their HTML:
//! keyword density over the visible text, title, meta description
//! and headings.

pub mod auditor;
pub mod config;
pub mod density;
pub mod error;
pub mod fetch;
pub mod html;
pub mod signals;

pub use auditor::Auditor;
pub use config::AnalyzerConfig;
pub use density::model::{AnalysisRequest, AnalysisResult, KeywordDensityEntry};
pub use error::{AuditError, AuditResult};
pub use signals::model::{Headings, PageSignals};
