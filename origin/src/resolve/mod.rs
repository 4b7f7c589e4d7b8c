//! Command resolution.
//!
//! [`Resolver::resolve`] walks a token through the same lookups an
//! interactive shell performs, in the same order:
//!
//! 1. tokens containing `/` are inspected on the filesystem directly;
//! 2. aliases are expanded;
//! 3. builtins and reserved words are checked (`.` is always a builtin);
//! 4. functions are checked;
//! 5. the search path is scanned and the hit classified, following any
//!    symlink chain.
//!
//! Every observation is appended to the trace in the order it was made. A
//! resolution never fails: loops, unreadable directories and dangling links
//! all end up in the trace, and the verdict is [`Verdict::NotFound`] only
//! when nothing matched.

mod engine;
mod step;

pub use engine::Resolver;
pub use step::{ResolutionStep, Target, Token, Verdict};

use serde::Serialize;

/// The outcome of resolving one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The token as given.
    pub token: String,
    /// Everything observed, in discovery order.
    pub steps: Vec<ResolutionStep>,
    /// The final verdict.
    pub verdict: Verdict,
}

impl Resolution {
    /// Whether the token resolved to something.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self.verdict, Verdict::Found(_))
    }
}
