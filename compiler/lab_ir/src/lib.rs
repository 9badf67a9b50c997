//! Lab IR - parse-tree interface for the Lab evaluator.
//!
//! The evaluator does not own a grammar. It reads whatever tree an external
//! parser hands it through the [`ParseNode`] trait: a kind tag, a child count
//! and indexed access to either a literal token or a nested node.
//!
//! This crate contains:
//! - [`NodeKind`]: the fixed set of node kinds the evaluator dispatches on
//! - [`ParseNode`]: the read-only collaborator interface
//! - [`SyntaxNode`]: an owned, in-memory tree implementing `ParseNode`
//! - [`BinaryOp`] / [`UnaryOp`]: operator tags decoded from operator tokens
//! - [`Span`]: source locations attached to errors

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod node;
mod operators;
mod span;
mod syntax;

pub use node::{NodeKind, ParseNode};
pub use operators::{BinaryOp, UnaryOp};
pub use span::Span;
pub use syntax::{SyntaxChild, SyntaxNode};
