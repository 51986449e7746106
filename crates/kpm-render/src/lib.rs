//! Read-only projections of exam protocols.
//!
//! Neither projection mutates the protocol or allocates identifiers;
//! rendering twice yields identical output.

mod canonical;
mod markdown;

pub use canonical::to_canonical_json;
pub use markdown::to_markdown;
