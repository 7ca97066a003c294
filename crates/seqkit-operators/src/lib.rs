#![forbid(unsafe_code)]
//! seqkit-operators: deferred, pull-based sequence operators.
//!
//! Design intent:
//! - Every operator is a factory returning an iterator that does nothing
//!   until first pulled; sources are captured as `IntoIterator` and opened
//!   through `seqkit_core::cursor::Cursor`.
//! - Held cursors are released on exhaustion, on early drop and on unwind.
//! - Only Rank, CountBy and Permutations buffer their whole input, and only
//!   at the first pull; Backsert buffers at most `index_from_end` elements.

pub mod backsert;
pub mod count_by;
pub mod ends_with;
pub mod exclude;
pub mod permutations;
pub mod rank;
pub mod scan;
pub mod traits;
pub mod unfold;
pub mod zip;

pub use backsert::{backsert, insert, Backsert, Insert};
pub use count_by::{count_by, count_by_with, CountBy};
pub use ends_with::{ends_with, ends_with_by, starts_with, starts_with_by};
pub use exclude::{exclude, Exclude};
pub use permutations::{permutations, Permutations};
pub use rank::{rank, rank_by, rank_by_with, rank_with, Rank, RankBy};
pub use scan::{pre_scan, scan, PreScan, Scan};
pub use traits::SeqExt;
pub use unfold::{unfold, Unfold};
pub use zip::{
    zip_longest, zip_longest3, zip_longest4, zip_longest_with, zip_shortest, zip_shortest3,
    zip_shortest4, DefaultPad, Filler, Pad, ZipLongest, ZipLongest3, ZipLongest4, ZipPolicy,
    ZipShortest, ZipShortest3, ZipShortest4,
};
