//! Control statements and the hooks enclosing constructs use to catch them.
//!
//! The evaluator only *produces* signals. Loops and function calls live in
//! the host; they catch what reaches them with [`to_loop_action`] and
//! [`catch_return`].

use lab_value::{unknown_keyword, ControlAction, EvalError, Value};

/// Leading keyword of a control statement.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ControlKeyword {
    Return,
    Break,
    Continue,
}

impl ControlKeyword {
    pub fn parse(token: &str) -> Result<Self, EvalError> {
        match token {
            "return" => Ok(ControlKeyword::Return),
            "break" => Ok(ControlKeyword::Break),
            "continue" => Ok(ControlKeyword::Continue),
            other => Err(unknown_keyword(other)),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ControlKeyword::Return => "return",
            ControlKeyword::Break => "break",
            ControlKeyword::Continue => "continue",
        }
    }
}

/// What a loop does with the outcome of one iteration of its body.
#[derive(Debug)]
pub enum LoopAction {
    /// Go on with the next iteration.
    Next,
    /// Leave the loop.
    Exit,
    /// Not for the loop: propagate to the enclosing construct.
    Pass(ControlAction),
}

/// Map a signal that unwound a loop body to the loop's reaction.
pub fn to_loop_action(action: ControlAction) -> LoopAction {
    match action {
        ControlAction::Continue => LoopAction::Next,
        ControlAction::Break => LoopAction::Exit,
        other => LoopAction::Pass(other),
    }
}

/// Resolve the outcome of a call body.
///
/// A `return` becomes the call's value; a body that finishes normally yields
/// its own value. `break`/`continue` cannot cross a call and pass on, as do
/// errors.
pub fn catch_return(result: Result<Value, ControlAction>) -> Result<Option<Value>, ControlAction> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ControlAction::Return(value)) => Ok(value),
        Err(other) => Err(other),
    }
}

#[cfg(test)]
mod tests;
