use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_empty_list_has_only_delimiters() {
    let list = SyntaxNode::list(vec![]);
    assert_eq!(list.kind(), NodeKind::List);
    assert_eq!(list.child_count(), 2);
    assert_eq!(list.child_token(0), Some("["));
    assert_eq!(list.child_token(1), Some("]"));
    assert_eq!(list.node_children().count(), 0);
}

#[test]
fn test_list_interleaves_separators() {
    let list = SyntaxNode::list(vec![
        SyntaxNode::number(&["1"]),
        SyntaxNode::number(&["2"]),
        SyntaxNode::number(&["3"]),
    ]);
    let tokens: Vec<&str> = list.token_children().collect();
    assert_eq!(tokens, vec!["[", ",", ",", "]"]);
    assert_eq!(list.node_children().count(), 3);
    assert!(list.child_node(1).is_some());
    assert_eq!(list.child_token(2), Some(","));
}

#[test]
fn test_number_with_uncertainty() {
    let number = SyntaxNode::number(&["12.3", "4.5"]);
    let tokens: Vec<&str> = number.token_children().collect();
    assert_eq!(tokens, vec!["12.3", "±", "4.5"]);
}

#[test]
fn test_child_accessors_are_exclusive() {
    let assign = SyntaxNode::assign("x", SyntaxNode::number(&["1"]));
    assert_eq!(assign.child_token(0), Some("x"));
    assert!(assign.child_node(0).is_none());
    assert!(assign.child_token(2).is_none());
    assert!(assign.child_node(2).is_some());
    assert!(assign.child_token(3).is_none());
    assert!(assign.child_node(3).is_none());
}

#[test]
fn test_bare_return_has_one_child() {
    assert_eq!(SyntaxNode::ret(None).child_count(), 1);
    assert_eq!(
        SyntaxNode::ret(Some(SyntaxNode::name("x"))).child_count(),
        2
    );
}

#[test]
fn test_span_is_reported() {
    let node = SyntaxNode::name("x").with_span(Span::new(4, 5));
    assert_eq!(node.span(), Some(Span::new(4, 5)));
    assert_eq!(SyntaxNode::name("y").span(), None);
}

#[test]
fn test_call_layout() {
    let call = SyntaxNode::call("sin", vec![SyntaxNode::name("x")]);
    assert_eq!(call.child_token(0), Some("sin"));
    assert_eq!(call.child_token(1), Some("("));
    assert_eq!(call.node_children().count(), 1);
}

#[test]
fn test_deeply_nested_tree_drops() {
    let mut node = SyntaxNode::number(&["1"]);
    for _ in 0..200_000 {
        node = SyntaxNode::unary("-", node);
    }
    assert_eq!(node.kind(), NodeKind::Unary);
    drop(node);
}

#[test]
fn test_drop_releases_wide_and_deep_children() {
    let mut node = SyntaxNode::list(vec![]);
    for i in 0..50_000 {
        node = if i % 2 == 0 {
            SyntaxNode::list(vec![node, SyntaxNode::name("x")])
        } else {
            SyntaxNode::call("f", vec![SyntaxNode::number(&["2", "0.1"]), node])
        };
    }
    assert_eq!(node.node_children().count(), 2);
    drop(node);
}
