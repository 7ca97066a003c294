#![forbid(unsafe_code)]
//! seqkit: lazily-evaluated sequence operators over Rust iterators.
//!
//! Re-exports the operator crate at the root, plus the shared core modules
//! (`compare`, `config`, `cursor`, `error`).
//!
//! ```
//! use seqkit::SeqExt;
//!
//! let counts: Vec<(char, usize)> = "abacba".chars().count_by(|c| *c).collect();
//! assert_eq!(counts, vec![('a', 3), ('b', 2), ('c', 1)]);
//! ```

pub use seqkit_core::{compare, config, cursor, error};
pub use seqkit_core::prelude::{Comparer, EqualityComparer, Error, Natural, NaturalEq, Result};
pub use seqkit_operators::*;
