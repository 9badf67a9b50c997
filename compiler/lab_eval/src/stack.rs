//! Native stack growth for deeply nested scripts.
//!
//! Evaluation recursion depth equals the nesting depth of the parse tree.
//! Every recursive step runs through [`ensure_sufficient_stack`], which grows
//! the stack with `stacker` when it runs low. WASM manages its own stack, so
//! there the call is a passthrough and the evaluator caps nesting instead
//! (see [`EvaluatorBuilder::max_depth`](crate::EvaluatorBuilder::max_depth)).

/// Run `f`, growing the native stack first if less than the red zone is left.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Grow when less than this much stack remains (100KB).
    const RED_ZONE: usize = 100 * 1024;

    /// Size of each new stack segment (1MB).
    const GROWTH: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
