//! Command implementations.

mod explain;

pub use explain::{ExplainCommand, FormatArg};
