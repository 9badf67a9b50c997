//! The tree-walking evaluator.
//!
//! # Signals
//!
//! Every evaluation returns [`EvalResult`]: `Ok(value)`, or `Err` with a
//! [`ControlAction`]. `return`, `break` and `continue` ride the `Err` channel
//! next to real errors, so `?` unwinds through nested expressions and the
//! remaining statements of a block without any extra bookkeeping. The
//! evaluator never catches its own signals. Only [`Evaluator::run`], at the
//! top of a script, resolves what is left.
//!
//! # Environment
//!
//! The environment is threaded through every call as `&mut E`. The evaluator
//! itself only tracks nesting depth.

mod builder;

pub use builder::EvaluatorBuilder;

use lab_ir::{BinaryOp, NodeKind, ParseNode, UnaryOp};
use lab_value::{
    malformed_node, stack_overflow, ControlAction, EvalError, EvalResult, Value,
};
use smallvec::SmallVec;
use tracing::debug;

use crate::exec::control::ControlKeyword;
use crate::exec::expr;
use crate::intrinsics::call_intrinsic;
use crate::{ensure_sufficient_stack, evaluate_binary, evaluate_unary, Environment};

/// Tree-walking evaluator over any [`ParseNode`] tree.
#[derive(Clone, Debug)]
pub struct Evaluator {
    max_depth: Option<usize>,
    depth: usize,
}

impl Evaluator {
    /// Evaluator with default settings; see [`EvaluatorBuilder`].
    pub fn new() -> Self {
        EvaluatorBuilder::new().build()
    }

    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Evaluate `node` to a value, or unwind with a signal or error.
    ///
    /// Errors raised inside `node` without a location get `node`'s span.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = %node.kind()))]
    pub fn evaluate<N: ParseNode, E: Environment>(&mut self, node: &N, env: &mut E) -> EvalResult {
        let result = ensure_sufficient_stack(|| self.eval_nested(node, env));
        match node.span() {
            Some(span) => result.map_err(|action| action.with_span_if_error(span)),
            None => result,
        }
    }

    /// Execute one statement.
    ///
    /// Statements and expressions share one dispatch: a control statement
    /// unwinds with its signal, anything else is evaluated for its value.
    pub fn execute<N: ParseNode, E: Environment>(&mut self, stmt: &N, env: &mut E) -> EvalResult {
        self.evaluate(stmt, env)
    }

    /// Execute the statements of `block` in order.
    ///
    /// Yields the value of the last statement, `None` for an empty block. The
    /// first signal stops the block and propagates unchanged.
    pub fn eval_block<N: ParseNode, E: Environment>(
        &mut self,
        block: &N,
        env: &mut E,
    ) -> Result<Option<Value>, ControlAction> {
        if block.kind() != NodeKind::Block {
            return Err(malformed_node(block.kind(), "expected a block").into());
        }
        let mut last = None;
        for stmt in block.node_children() {
            last = Some(self.execute(stmt, env)?);
        }
        Ok(last)
    }

    /// Run a whole script.
    ///
    /// A `return` that reaches the top ends the script with its value. A
    /// `break` or `continue` that reaches the top had no loop to catch it and
    /// is an `UnresolvedControlSignal` error.
    pub fn run<N: ParseNode, E: Environment>(
        &mut self,
        program: &N,
        env: &mut E,
    ) -> Result<Option<Value>, EvalError> {
        let result = if program.kind() == NodeKind::Block {
            self.eval_block(program, env)
        } else {
            self.evaluate(program, env).map(Some)
        };
        match result {
            Ok(value) => Ok(value),
            Err(ControlAction::Return(value)) => {
                debug!("return reached top level; ending script");
                Ok(value)
            }
            Err(ControlAction::Error(err)) => Err(*err),
            Err(signal) => {
                debug!(keyword = ?signal.keyword(), "control signal escaped to top level");
                let err = signal.into_eval_error();
                Err(match program.span() {
                    Some(span) if err.span.is_none() => err.with_span(span),
                    _ => err,
                })
            }
        }
    }

    /// Depth accounting around one recursive step.
    fn eval_nested<N: ParseNode, E: Environment>(&mut self, node: &N, env: &mut E) -> EvalResult {
        if let Some(max) = self.max_depth {
            if self.depth >= max {
                return Err(stack_overflow(max).into());
            }
        }
        self.depth += 1;
        let result = self.eval_inner(node, env);
        self.depth -= 1;
        result
    }

    fn eval_inner<N: ParseNode, E: Environment>(&mut self, node: &N, env: &mut E) -> EvalResult {
        match node.kind() {
            // Literals
            NodeKind::Number => Ok(expr::eval_number(node)?),
            NodeKind::Text => Ok(expr::eval_text(token_at(node, 0)?)?),
            NodeKind::Symbol => Ok(expr::eval_symbol(token_at(node, 0)?)),
            NodeKind::Package => Ok(expr::eval_package(token_at(node, 0)?)),
            NodeKind::List => self.eval_list(node, env),

            // Names
            NodeKind::Name => Ok(expr::eval_ident(token_at(node, 0)?, env)?),
            NodeKind::Assign => self.eval_assign(node, env),

            // Operators
            NodeKind::Group => self.evaluate(only_node(node)?, env),
            NodeKind::Binary => self.eval_binary(node, env),
            NodeKind::Unary => self.eval_unary(node, env),
            NodeKind::Call => self.eval_call(node, env),

            // Statements
            NodeKind::Block => self.eval_block(node, env)?.ok_or_else(|| {
                ControlAction::from(malformed_node(NodeKind::Block, "empty block has no value"))
            }),
            NodeKind::Control => self.eval_control(node, env),
        }
    }

    /// `[a, b, ...]`: separators are skipped, elements evaluated in order.
    fn eval_list<N: ParseNode, E: Environment>(&mut self, node: &N, env: &mut E) -> EvalResult {
        let items = node
            .node_children()
            .map(|element| self.evaluate(element, env))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::list(items))
    }

    /// `name = value`: binds and yields the value.
    fn eval_assign<N: ParseNode, E: Environment>(&mut self, node: &N, env: &mut E) -> EvalResult {
        let name = token_at(node, 0)?;
        let value = self.evaluate(only_node(node)?, env)?;
        debug!(name, "bind");
        env.bind(name, value.clone());
        Ok(value)
    }

    fn eval_binary<N: ParseNode, E: Environment>(&mut self, node: &N, env: &mut E) -> EvalResult {
        let symbol = token_at(node, 1)?;
        let op = BinaryOp::from_symbol(symbol).ok_or_else(|| {
            malformed_node(NodeKind::Binary, format!("unknown operator `{symbol}`"))
        })?;
        let left = self.evaluate(node_at(node, 0)?, env)?;
        let right = self.evaluate(node_at(node, 2)?, env)?;
        evaluate_binary(left, right, op)
    }

    fn eval_unary<N: ParseNode, E: Environment>(&mut self, node: &N, env: &mut E) -> EvalResult {
        let symbol = token_at(node, 0)?;
        let op = UnaryOp::from_symbol(symbol).ok_or_else(|| {
            malformed_node(NodeKind::Unary, format!("unknown operator `{symbol}`"))
        })?;
        let operand = self.evaluate(node_at(node, 1)?, env)?;
        evaluate_unary(operand, op)
    }

    /// Intrinsic call; arguments are evaluated left to right first.
    fn eval_call<N: ParseNode, E: Environment>(&mut self, node: &N, env: &mut E) -> EvalResult {
        let name = token_at(node, 0)?;
        let args = node
            .node_children()
            .map(|arg| self.evaluate(arg, env))
            .collect::<Result<SmallVec<[Value; 2]>, _>>()?;
        call_intrinsic(name, &args)
    }

    /// `return [expr]`, `break`, `continue`: never yields a value.
    fn eval_control<N: ParseNode, E: Environment>(&mut self, node: &N, env: &mut E) -> EvalResult {
        match ControlKeyword::parse(token_at(node, 0)?)? {
            ControlKeyword::Return => {
                let value = match node.node_children().next() {
                    // A signal raised by the operand passes through as is.
                    Some(operand) => Some(self.evaluate(operand, env)?),
                    None => None,
                };
                Err(ControlAction::Return(value))
            }
            ControlKeyword::Break => Err(ControlAction::Break),
            ControlKeyword::Continue => Err(ControlAction::Continue),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

// Child access

fn token_at<N: ParseNode>(node: &N, index: usize) -> Result<&str, EvalError> {
    node.child_token(index)
        .ok_or_else(|| malformed_node(node.kind(), format!("expected a token at child {index}")))
}

fn node_at<N: ParseNode>(node: &N, index: usize) -> Result<&N, EvalError> {
    node.child_node(index)
        .ok_or_else(|| malformed_node(node.kind(), format!("expected a node at child {index}")))
}

/// The single nested node of `node`, ignoring tokens around it.
fn only_node<N: ParseNode>(node: &N) -> Result<&N, EvalError> {
    let mut nodes = node.node_children();
    match (nodes.next(), nodes.next()) {
        (Some(inner), None) => Ok(inner),
        _ => Err(malformed_node(node.kind(), "expected exactly one nested node")),
    }
}

#[cfg(test)]
mod tests;
