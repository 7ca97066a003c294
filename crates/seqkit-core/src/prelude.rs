//! Convenient re-exports for downstream crates.

pub use crate::compare::{
    equality_by, Comparer, EqualityComparer, FnEquality, Natural, NaturalEq, Reverse,
};
pub use crate::config::{exact_len, SeqConfig};
pub use crate::cursor::Cursor;
pub use crate::error::{Error, Result};
