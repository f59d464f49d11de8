//! Domain layer
//!
//! Entities, drafts and pure date logic. Nothing in here performs I/O.

pub mod dates;
pub mod phase;
