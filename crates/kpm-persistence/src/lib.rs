//! File-backed storage for exam protocol drafts and the identifier
//! sequence counter.
//!
//! All writes are atomic: data lands in a sibling temp file that is
//! synced and renamed over the target, never leaving a half-written
//! draft or counter behind.

mod atomic;
mod draft;
mod error;
mod sequence;

pub use draft::DraftSlot;
pub use error::{PersistenceError, Result};
pub use sequence::SequenceCounter;
