//! Owned, in-memory parse tree.
//!
//! `SyntaxNode` is the reference implementation of [`ParseNode`]. Hosts that
//! already have a tree of their own implement the trait directly; everything
//! else (embedders building trees by hand, tests) uses these constructors,
//! which lay children out the way the table in `node.rs` describes.

use crate::{NodeKind, ParseNode, Span};

/// A child of a [`SyntaxNode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntaxChild {
    Token(String),
    Node(SyntaxNode),
}

impl From<&str> for SyntaxChild {
    fn from(token: &str) -> Self {
        SyntaxChild::Token(token.to_string())
    }
}

impl From<SyntaxNode> for SyntaxChild {
    fn from(node: SyntaxNode) -> Self {
        SyntaxChild::Node(node)
    }
}

/// Owned parse node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxNode {
    kind: NodeKind,
    children: Vec<SyntaxChild>,
    span: Option<Span>,
}

impl SyntaxNode {
    /// Create a node from raw children.
    pub fn new(kind: NodeKind, children: Vec<SyntaxChild>) -> Self {
        SyntaxNode {
            kind,
            children,
            span: None,
        }
    }

    /// Attach a source span.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn children(&self) -> &[SyntaxChild] {
        &self.children
    }

    fn leaf(kind: NodeKind, token: &str) -> Self {
        Self::new(kind, vec![token.into()])
    }

    /// Number literal from one (magnitude) or two (magnitude, uncertainty)
    /// numeric tokens, separated by `±` when there are two.
    pub fn number(tokens: &[&str]) -> Self {
        let mut children = Vec::with_capacity(tokens.len().saturating_mul(2));
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                children.push("±".into());
            }
            children.push((*token).into());
        }
        Self::new(NodeKind::Number, children)
    }

    /// Text literal. `quoted` includes its delimiting quote marks.
    pub fn text(quoted: &str) -> Self {
        Self::leaf(NodeKind::Text, quoted)
    }

    pub fn symbol(name: &str) -> Self {
        Self::leaf(NodeKind::Symbol, name)
    }

    pub fn package(name: &str) -> Self {
        Self::leaf(NodeKind::Package, name)
    }

    pub fn name(name: &str) -> Self {
        Self::leaf(NodeKind::Name, name)
    }

    /// List literal: `[` e `,` e `]`.
    pub fn list(elements: Vec<SyntaxNode>) -> Self {
        Self::new(NodeKind::List, delimited("[", elements, "]"))
    }

    /// Block of statements.
    pub fn block(statements: Vec<SyntaxNode>) -> Self {
        Self::new(
            NodeKind::Block,
            statements.into_iter().map(SyntaxChild::Node).collect(),
        )
    }

    /// Control statement: `return`, `return <expr>`, `break`, `continue`.
    pub fn control(keyword: &str, value: Option<SyntaxNode>) -> Self {
        let mut children = vec![keyword.into()];
        children.extend(value.map(SyntaxChild::Node));
        Self::new(NodeKind::Control, children)
    }

    pub fn ret(value: Option<SyntaxNode>) -> Self {
        Self::control("return", value)
    }

    pub fn brk() -> Self {
        Self::control("break", None)
    }

    pub fn cont() -> Self {
        Self::control("continue", None)
    }

    /// `name = value`
    pub fn assign(name: &str, value: SyntaxNode) -> Self {
        Self::new(
            NodeKind::Assign,
            vec![name.into(), "=".into(), value.into()],
        )
    }

    pub fn binary(lhs: SyntaxNode, op: &str, rhs: SyntaxNode) -> Self {
        Self::new(NodeKind::Binary, vec![lhs.into(), op.into(), rhs.into()])
    }

    pub fn unary(op: &str, operand: SyntaxNode) -> Self {
        Self::new(NodeKind::Unary, vec![op.into(), operand.into()])
    }

    pub fn group(inner: SyntaxNode) -> Self {
        Self::new(NodeKind::Group, vec!["(".into(), inner.into(), ")".into()])
    }

    /// `name(arg, arg)`
    pub fn call(name: &str, args: Vec<SyntaxNode>) -> Self {
        let mut children = vec![name.into()];
        children.extend(delimited("(", args, ")"));
        Self::new(NodeKind::Call, children)
    }
}

/// Interleave `items` with `,` separators between `open` and `close`.
fn delimited(open: &str, items: Vec<SyntaxNode>, close: &str) -> Vec<SyntaxChild> {
    let mut children = Vec::with_capacity(items.len().saturating_mul(2).saturating_add(2));
    children.push(open.into());
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            children.push(",".into());
        }
        children.push(item.into());
    }
    children.push(close.into());
    children
}

/// Tears the tree down through a heap worklist instead of recursing, so a
/// tree nested deeper than the native stack can still be freed.
impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let mut pending: Vec<SyntaxNode> = Vec::new();
        take_nested(&mut self.children, &mut pending);
        while let Some(mut node) = pending.pop() {
            // `node` is dropped childless at the end of this iteration.
            take_nested(&mut node.children, &mut pending);
        }
    }
}

fn take_nested(children: &mut Vec<SyntaxChild>, pending: &mut Vec<SyntaxNode>) {
    pending.extend(
        std::mem::take(children)
            .into_iter()
            .filter_map(|child| match child {
                SyntaxChild::Node(node) => Some(node),
                SyntaxChild::Token(_) => None,
            }),
    );
}

impl ParseNode for SyntaxNode {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_token(&self, index: usize) -> Option<&str> {
        match self.children.get(index)? {
            SyntaxChild::Token(token) => Some(token),
            SyntaxChild::Node(_) => None,
        }
    }

    fn child_node(&self, index: usize) -> Option<&Self> {
        match self.children.get(index)? {
            SyntaxChild::Node(node) => Some(node),
            SyntaxChild::Token(_) => None,
        }
    }

    fn span(&self) -> Option<Span> {
        self.span
    }
}

#[cfg(test)]
mod tests;
