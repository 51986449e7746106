//! KP Medizin exam protocol data model.
//!
//! A [`Protokoll`] is the document being assembled: exam metadata, three
//! content Teile, and questions inside Teil 1 and Teil 3. The model is
//! plain data mutated through whole-field replacement; derived state (the
//! identifier in [`ids`], the question tag sets) is recomputed by explicit
//! operations, never implicitly.

pub mod ids;
mod protokoll;

pub use ids::{SequenceSource, export_filename, format_protokoll_id};
pub use protokoll::{Frage, PROTOKOLL_VERSION, Protokoll, Teil};
