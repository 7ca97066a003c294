#![forbid(unsafe_code)]
//! seqkit-core: the pieces every operator shares.
//!
//! - `cursor`: deferred, RAII-released handle over one source sequence.
//! - `compare`: caller-supplied ordering/equality, with natural defaults.
//! - `config`: allocation policy (size-hint trust, preallocation cap).
//! - `error`: the single error type operators surface.
//! - `trace`: optional `tracing` hooks (feature `tracing`).

pub mod compare;
pub mod config;
pub mod cursor;
pub mod error;
pub mod prelude;
pub mod trace;

pub use error::{Error, Result};
