//! Filesystem inspection and search-path lookup.
//!
//! # Key Concepts
//!
//! ## Classification
//!
//! [`classify`] reports what a single path is (executable, regular file,
//! directory, symlink, special file or nothing) without following links.
//!
//! ## Symlink chains
//!
//! [`resolve_symlink_chain`] follows a link hop by hop, recording each hop,
//! until it reaches something that is not a link, a missing target, or a
//! link it has already followed.
//!
//! ## Search path
//!
//! [`search`] walks an ordered list of directories and returns the first one
//! holding an entry with the requested name, whatever its type.
//!
//! # Examples
//!
//! ```
//! use origin::path::{classify, resolve_symlink_chain, Classification};
//! use std::path::Path;
//!
//! assert_eq!(classify(Path::new("/")), Classification::Directory);
//!
//! let chain = resolve_symlink_chain(Path::new("/"));
//! assert!(chain.hops.is_empty());
//! ```

pub mod classify;
pub mod normalize;
pub mod search;
pub mod symlink;

pub use classify::{classify, Classification};
pub use normalize::expand_tilde;
pub use search::{search, PathHit};
pub use symlink::{resolve_symlink_chain, SymlinkChain, SymlinkHop};
