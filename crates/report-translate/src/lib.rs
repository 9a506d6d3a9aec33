//! # report-translate
//!
//! Memoized multi-language translation for the consultation report.
//!
//! All textual artifacts of a report (config fields, argument texts, cluster
//! labels and takeaways, the overview) are fed through one
//! [`TranslationMemoizer`] in a fixed source order. The memoizer issues at
//! most one LLM call per (distinct text, language) pair: a string that
//! appears in several sources, or several times within one source, is
//! translated exactly once per language and every occurrence resolves to the
//! same translation list.

pub mod error;
pub mod memoizer;

pub use error::TranslateError;
pub use memoizer::TranslationMemoizer;
