//! CLI library components for the protocol workbench.

pub mod logging;
