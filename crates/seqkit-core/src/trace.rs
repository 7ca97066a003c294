//! Trace hooks for cursor lifecycle and eager materialization points.
//!
//! Events go to the `seqkit` target at TRACE level. Cursors report `open`
//! and `release` under their operator label; rank, count-by and
//! permutations report once they have buffered their source, with the
//! element count. Without the `tracing` feature every hook compiles away,
//! and installing a subscriber is left to the application.

#[cfg(feature = "tracing")]
pub fn emit(op: &'static str, event: &'static str, n: usize) {
    tracing::trace!(target: "seqkit", op, n, "{event}");
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub fn emit(_op: &'static str, _event: &'static str, _n: usize) { /* no-op */
}
