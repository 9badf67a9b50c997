//! Error types and control signals for evaluation.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` provides typed error categories for diagnostic conversion.
//! Factory functions (e.g., `malformed_literal()`) are the public API; they
//! populate both `kind` and `message`.
//!
//! # Control Signals
//!
//! `return`, `break` and `continue` travel up the evaluation as
//! [`ControlAction`] values in the `Err` channel of [`EvalResult`], next to
//! real errors, so `?` propagates all of them. The evaluator never catches its
//! own signals; the enclosing construct (a loop or a call) does.

use std::fmt;

use lab_ir::{BinaryOp, NodeKind, Span};
use lab_measure::MeasureError;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, ControlAction>;

// Structured error types

/// Typed error category for structured diagnostics.
///
/// Each variant carries structured data for the error condition and maps to
/// a stable `E6xxx` code via [`EvalErrorKind::code`].
#[derive(Clone, Debug, PartialEq)]
pub enum EvalErrorKind {
    // Literals
    MalformedLiteral {
        detail: String,
    },

    // Arithmetic
    Arithmetic(MeasureError),

    // Control flow
    UnresolvedControlSignal {
        keyword: &'static str,
    },
    UnknownKeyword {
        keyword: String,
    },

    // Access
    UndefinedVariable {
        name: String,
    },
    UndefinedFunction {
        name: String,
    },
    UnresolvedPackage {
        name: String,
    },

    // Type/Operator
    TypeMismatch {
        expected: String,
        got: String,
    },
    BinaryTypeMismatch {
        op: BinaryOp,
        left: String,
        right: String,
    },
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    // Tree shape
    MalformedNode {
        kind: NodeKind,
        detail: String,
    },

    // Resources
    StackOverflow {
        depth: usize,
    },
}

impl EvalErrorKind {
    /// Stable diagnostic code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedLiteral { .. } => "E6001",
            Self::Arithmetic(_) => "E6002",
            Self::UnresolvedControlSignal { .. } => "E6003",
            Self::UnknownKeyword { .. } => "E6004",
            Self::UndefinedVariable { .. } => "E6010",
            Self::UndefinedFunction { .. } => "E6011",
            Self::UnresolvedPackage { .. } => "E6012",
            Self::TypeMismatch { .. } => "E6020",
            Self::BinaryTypeMismatch { .. } => "E6021",
            Self::ArityMismatch { .. } => "E6022",
            Self::MalformedNode { .. } => "E6030",
            Self::StackOverflow { .. } => "E6031",
        }
    }

    /// Variant name, for machine-readable output.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::MalformedLiteral { .. } => "MalformedLiteral",
            Self::Arithmetic(_) => "Arithmetic",
            Self::UnresolvedControlSignal { .. } => "UnresolvedControlSignal",
            Self::UnknownKeyword { .. } => "UnknownKeyword",
            Self::UndefinedVariable { .. } => "UndefinedVariable",
            Self::UndefinedFunction { .. } => "UndefinedFunction",
            Self::UnresolvedPackage { .. } => "UnresolvedPackage",
            Self::TypeMismatch { .. } => "TypeMismatch",
            Self::BinaryTypeMismatch { .. } => "BinaryTypeMismatch",
            Self::ArityMismatch { .. } => "ArityMismatch",
            Self::MalformedNode { .. } => "MalformedNode",
            Self::StackOverflow { .. } => "StackOverflow",
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLiteral { detail } => write!(f, "malformed number literal: {detail}"),
            Self::Arithmetic(err) => write!(f, "{err}"),

            Self::UnresolvedControlSignal { keyword } => {
                write!(f, "`{keyword}` outside of a loop")
            }
            Self::UnknownKeyword { keyword } => {
                write!(f, "unknown control keyword `{keyword}`")
            }

            Self::UndefinedVariable { name } => write!(f, "undefined variable: {name}"),
            Self::UndefinedFunction { name } => write!(f, "undefined function: {name}"),
            Self::UnresolvedPackage { name } => write!(f, "unresolved package: @{name}"),

            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::BinaryTypeMismatch { op, left, right } => {
                write!(
                    f,
                    "cannot apply operator `{}` to `{left}` and `{right}`",
                    op.as_symbol()
                )
            }
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{name} expects {expected} {arg_word}, got {got}")
            }

            Self::MalformedNode { kind, detail } => write!(f, "malformed {kind} node: {detail}"),

            Self::StackOverflow { depth } => {
                write!(f, "maximum nesting depth exceeded (limit: {depth})")
            }

        }
    }
}

/// Additional context note attached to an error.
#[derive(Clone, Debug)]
pub struct EvalNote {
    pub message: String,
    pub span: Option<Span>,
}

impl EvalNote {
    /// Create a note with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: None,
        }
    }

    /// Create a note with a message and source location.
    pub fn with_span(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span: Some(span),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message. Equals `kind.to_string()` for
    /// factory-created errors.
    pub message: String,
    /// Source location where the error occurred.
    pub span: Option<Span>,
    /// Additional context notes.
    pub notes: Vec<EvalNote>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span: None,
            notes: Vec::new(),
        }
    }

    /// Diagnostic code of this error's kind.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Attach a source span to this error.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Add a context note to this error.
    #[must_use]
    pub fn with_note(mut self, note: EvalNote) -> Self {
        self.notes.push(note);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message)?;
        if let Some(span) = self.span {
            write!(f, " at {span}")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

impl From<MeasureError> for EvalError {
    #[cold]
    fn from(err: MeasureError) -> Self {
        EvalError::from_kind(EvalErrorKind::Arithmetic(err))
    }
}

// Control actions

/// What unwinds an evaluation: a real error or a control signal.
///
/// Signals are not errors. They are consumed by exactly one enclosing
/// construct of the matching kind: loops take `Break`/`Continue`, calls take
/// `Return`.
#[derive(Clone, Debug)]
pub enum ControlAction {
    Error(Box<EvalError>),
    /// `return` with its optional value.
    Return(Option<Value>),
    Break,
    Continue,
}

impl ControlAction {
    /// Source keyword of a signal, `None` for errors.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            ControlAction::Error(_) => None,
            ControlAction::Return(_) => Some("return"),
            ControlAction::Break => Some("break"),
            ControlAction::Continue => Some("continue"),
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, ControlAction::Error(_))
    }

    /// Collapse into an error, for contexts where no construct can catch
    /// the signal any more. A stray signal becomes
    /// `UnresolvedControlSignal`.
    pub fn into_eval_error(self) -> EvalError {
        match self {
            ControlAction::Error(err) => *err,
            ControlAction::Return(_) => unresolved_control_signal("return"),
            ControlAction::Break => unresolved_control_signal("break"),
            ControlAction::Continue => unresolved_control_signal("continue"),
        }
    }

    /// Attach `span` to an error that has none yet; signals pass through.
    #[must_use]
    pub fn with_span_if_error(self, span: Span) -> Self {
        match self {
            ControlAction::Error(mut err) => {
                if err.span.is_none() {
                    err.span = Some(span);
                }
                ControlAction::Error(err)
            }
            other => other,
        }
    }
}

impl From<EvalError> for ControlAction {
    fn from(err: EvalError) -> Self {
        ControlAction::Error(Box::new(err))
    }
}

impl From<MeasureError> for ControlAction {
    #[cold]
    fn from(err: MeasureError) -> Self {
        ControlAction::from(EvalError::from(err))
    }
}

// Literal Errors

/// Number literal that cannot be decoded.
#[cold]
pub fn malformed_literal(detail: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedLiteral {
        detail: detail.into(),
    })
}

// Control Flow Errors

/// `break`/`continue` (or `return`) with no construct left to catch it.
#[cold]
pub fn unresolved_control_signal(keyword: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnresolvedControlSignal { keyword })
}

/// Control node whose keyword is not `return`, `break` or `continue`.
#[cold]
pub fn unknown_keyword(keyword: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownKeyword {
        keyword: keyword.to_string(),
    })
}

// Access Errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn unresolved_package(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnresolvedPackage {
        name: name.to_string(),
    })
}

// Type Errors

/// Type mismatch error.
#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// Type mismatch in binary operation.
#[cold]
pub fn binary_type_mismatch(op: BinaryOp, left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch {
        op,
        left: left.to_string(),
        right: right.to_string(),
    })
}

/// Wrong number of arguments to an intrinsic.
#[cold]
pub fn wrong_arg_count(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

// Tree Errors

/// Parse node whose children do not fit its kind.
#[cold]
pub fn malformed_node(kind: NodeKind, detail: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedNode {
        kind,
        detail: detail.into(),
    })
}

// Resource Errors

#[cold]
pub fn stack_overflow(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
}
