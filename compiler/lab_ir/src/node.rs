//! The parse-node collaborator interface.
//!
//! Child layout per kind (tokens are raw source text, nodes are nested
//! expressions or statements):
//!
//! | Kind      | Children                                             |
//! |-----------|------------------------------------------------------|
//! | `Block`   | statement nodes, optionally interleaved with tokens  |
//! | `Control` | keyword token, optional expression node              |
//! | `Assign`  | name token, `=` token, expression node               |
//! | `Binary`  | node, operator token, node                           |
//! | `Unary`   | operator token, node                                 |
//! | `Group`   | `(` token, node, `)` token                           |
//! | `Call`    | name token, then argument nodes among separators     |
//! | `Name`    | identifier token                                     |
//! | `Number`  | one or two numeric tokens, optionally split by `±`   |
//! | `Text`    | quoted token                                         |
//! | `Symbol`  | symbol token                                         |
//! | `Package` | package token                                        |
//! | `List`    | element nodes among delimiter/separator tokens       |

use std::fmt;

use crate::Span;

/// Kind tag of a parse node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    // Statements
    Block,
    Control,
    Assign,

    // Expressions
    Binary,
    Unary,
    Group,
    Call,
    Name,

    // Literals
    Number,
    Text,
    Symbol,
    Package,
    List,
}

impl NodeKind {
    /// Lowercase name used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Control => "control statement",
            Self::Assign => "assignment",
            Self::Binary => "binary expression",
            Self::Unary => "unary expression",
            Self::Group => "parenthesized expression",
            Self::Call => "call",
            Self::Name => "name",
            Self::Number => "number literal",
            Self::Text => "text literal",
            Self::Symbol => "symbol literal",
            Self::Package => "package reference",
            Self::List => "list literal",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view of an externally supplied parse tree.
///
/// The evaluator never owns or mutates nodes. Implementations return `None`
/// from `child_token` when the child at `index` is a node (or absent), and
/// from `child_node` when it is a token (or absent).
pub trait ParseNode {
    fn kind(&self) -> NodeKind;

    fn child_count(&self) -> usize;

    fn child_token(&self, index: usize) -> Option<&str>;

    fn child_node(&self, index: usize) -> Option<&Self>;

    /// Source location of this node, when the parser tracked one.
    fn span(&self) -> Option<Span> {
        None
    }

    /// Nested node children in source order, skipping tokens.
    fn node_children(&self) -> impl Iterator<Item = &Self>
    where
        Self: Sized,
    {
        (0..self.child_count()).filter_map(|index| self.child_node(index))
    }

    /// Token children in source order, skipping nested nodes.
    fn token_children(&self) -> impl Iterator<Item = &str>
    where
        Self: Sized,
    {
        (0..self.child_count()).filter_map(|index| self.child_token(index))
    }
}
