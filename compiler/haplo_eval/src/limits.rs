//! Opt-in guards against runaway evaluation.
//!
//! Neither limit changes the result of a program that stays within it.

/// Evaluation limits. `None` means unlimited, the default for both.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalLimits {
    /// Maximum nesting of interpreted function calls. Exceeding it yields
    /// `E6005`.
    pub max_call_depth: Option<usize>,
    /// Maximum iterations of a single `while`. Exceeding it yields `E6006`.
    pub max_loop_iterations: Option<u64>,
}

impl EvalLimits {
    #[must_use]
    pub fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    #[must_use]
    pub fn with_max_loop_iterations(mut self, iterations: u64) -> Self {
        self.max_loop_iterations = Some(iterations);
        self
    }

    /// Returns `true` if a call at `depth` exceeds the call-depth limit.
    #[inline]
    pub fn call_depth_exceeded(&self, depth: usize) -> bool {
        self.max_call_depth.is_some_and(|max| depth > max)
    }

    /// Returns `true` if `iterations` exceeds the loop limit.
    #[inline]
    pub fn loop_iterations_exceeded(&self, iterations: u64) -> bool {
        self.max_loop_iterations.is_some_and(|max| iterations > max)
    }
}
