//! In-memory structured log event record: fixed capture-time fields plus
//! a name-keyed, insertion-ordered attribute set with upsert,
//! add-if-absent, and remove operations for enrichment pipelines.

pub mod severity;

pub mod attribute;
pub mod error;
pub mod event;
