//! `EvaluatorBuilder` for configuring [`Evaluator`] instances.

use super::Evaluator;

/// Builder for [`Evaluator`].
///
/// The only policy knob is the nesting limit. Native builds default to no
/// limit (the stack grows on demand); WASM defaults to 200 because its stack
/// cannot grow.
#[derive(Clone, Debug)]
pub struct EvaluatorBuilder {
    max_depth: Option<usize>,
}

impl EvaluatorBuilder {
    pub fn new() -> Self {
        EvaluatorBuilder {
            max_depth: default_max_depth(),
        }
    }

    /// Cap evaluation nesting at `depth` levels (`None`: no cap).
    ///
    /// Exceeding the cap is a `StackOverflow` error.
    #[must_use]
    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn build(self) -> Evaluator {
        Evaluator {
            max_depth: self.max_depth,
            depth: 0,
        }
    }
}

impl Default for EvaluatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
const fn default_max_depth() -> Option<usize> {
    Some(200)
}

#[cfg(not(target_arch = "wasm32"))]
const fn default_max_depth() -> Option<usize> {
    None
}
