//! # report-artifacts
//!
//! Typed read/write of the persisted artifacts that flow between pipeline
//! stages. Field names on disk (`arg-id`, `cluster-id`, ...) are the wire
//! contract with downstream consumers and are fixed by the serde attributes
//! on the record types in `report-types`.
//!
//! Every reader distinguishes "artifact not there yet" from I/O failure: a
//! missing upstream artifact produces [`ArtifactError::Missing`] naming the
//! stage that creates it, so the operator can re-run just that stage.
//!
//! Writers accumulate nothing: callers pass fully built tables, so a failed
//! stage never leaves a truncated artifact behind.

pub mod error;
pub mod layout;
pub mod store;

pub use error::ArtifactError;
pub use layout::ArtifactLayout;
pub use store::ArtifactStore;
