//! Leaf expression evaluation: literals and names.
//!
//! These helpers never recurse into child nodes, so they take tokens rather
//! than the evaluator.

use lab_ir::{NodeKind, ParseNode};
use lab_value::{malformed_node, undefined_variable, EvalError, Value};
use smallvec::SmallVec;

use crate::literal::{decode_number, is_separator};
use crate::Environment;

/// Number literal: decode the node's numeric tokens, skipping `±`.
pub fn eval_number<N: ParseNode>(node: &N) -> Result<Value, EvalError> {
    if node.node_children().next().is_some() {
        return Err(malformed_node(
            NodeKind::Number,
            "number literals hold tokens only",
        ));
    }
    let tokens: SmallVec<[&str; 2]> = node
        .token_children()
        .filter(|token| !is_separator(token))
        .collect();
    Ok(Value::number(decode_number(&tokens)?))
}

/// Text literal: the token minus its first and last character.
pub fn eval_text(token: &str) -> Result<Value, EvalError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next_back()) {
        (Some(_), Some(_)) => Ok(Value::text(chars.as_str())),
        _ => Err(malformed_node(
            NodeKind::Text,
            format!("`{token}` is too short to carry delimiters"),
        )),
    }
}

/// Symbol literal, stored unresolved.
pub fn eval_symbol(token: &str) -> Value {
    Value::symbol(token)
}

/// Package reference, stored by name. See [`crate::resolve_package`].
pub fn eval_package(token: &str) -> Value {
    Value::package(token)
}

/// Identifier lookup.
pub fn eval_ident<E: Environment>(name: &str, env: &E) -> Result<Value, EvalError> {
    env.lookup(name).ok_or_else(|| undefined_variable(name))
}
