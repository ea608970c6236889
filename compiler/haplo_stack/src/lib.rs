//! Stack growth for deeply nested programs.
//!
//! The parser descends once per nested list and the evaluator once per
//! nested call, so source like `((((...))))` or a deeply recursive `defunc`
//! can exhaust the thread stack. Each recursive step runs inside
//! [`ensure_sufficient_stack`], which moves execution onto a freshly
//! allocated segment when the current one runs low.
//!
//! On `wasm32` there is no segment to switch to and the guard is a plain call.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
