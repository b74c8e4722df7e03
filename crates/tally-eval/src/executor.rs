//! The tree-walking executor.

use std::collections::HashSet;

use tally_ast::{Atom, CompiledProgram, ExecutionError, Node, Value};

use crate::Environment;

type EResult<T> = Result<T, ExecutionError>;

/// Default bound on evaluation depth.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options controlling evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOptions {
    /// Maximum depth of nested nodes the walk will descend into.
    pub max_depth: usize,
}

impl Default for ExecOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluates expression trees against an [`Environment`].
///
/// Every node is evaluated to a [`Value`] that may still be a variable
/// reference, then resolved. Operands are resolved before an operator is
/// applied, the callee before it is called, and each argument before it is
/// passed.
pub struct Executor<'env> {
    env: &'env Environment,
    options: ExecOptions,
}

impl<'env> Executor<'env> {
    pub fn new(env: &'env Environment) -> Self {
        Self {
            env,
            options: ExecOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExecOptions) -> Self {
        self.options = options;
        self
    }

    /// Evaluate a program and resolve its result. The returned value is
    /// never a `Value::Variable`.
    #[tracing::instrument(level = "debug", skip_all, fields(source = program.source()))]
    pub fn execute(&self, program: &CompiledProgram) -> EResult<Value> {
        let value = self.evaluate(program.root())?;
        let value = self.resolve(value)?;
        tracing::debug!(result = %value, "executed");
        Ok(value)
    }

    /// Reduce a node to a value without resolving the result.
    pub fn evaluate(&self, node: &Node) -> EResult<Value> {
        self.eval_at(node, 1)
    }

    /// Follow variable references until a grounded value is reached.
    pub fn resolve(&self, value: Value) -> EResult<Value> {
        let mut seen = HashSet::new();
        let mut current = value;

        loop {
            let name = match current {
                Value::Variable(name) => name,
                grounded => return Ok(grounded),
            };

            let next = self
                .env
                .get(&name)
                .cloned()
                .ok_or_else(|| ExecutionError::UnknownVariable(name.clone()))?;
            tracing::trace!(%name, value = %next, "resolve");

            if !seen.insert(name.clone()) {
                return Err(ExecutionError::CyclicVariable(name));
            }
            current = next;
        }
    }

    fn eval_at(&self, node: &Node, depth: usize) -> EResult<Value> {
        if depth > self.options.max_depth {
            return Err(ExecutionError::NestingTooDeep {
                limit: self.options.max_depth,
            });
        }

        match node.atom() {
            Atom::Value(value) => Ok(value.clone()),
            Atom::Plus(left, right) => self.arithmetic("+", left, right, depth, |a, b| a + b),
            Atom::Minus(left, right) => self.arithmetic("-", left, right, depth, |a, b| a - b),
            Atom::Times(left, right) => self.arithmetic("*", left, right, depth, |a, b| a * b),
            Atom::Divide(left, right) => self.arithmetic("/", left, right, depth, |a, b| a / b),
            Atom::Negate(operand) => match self.operand(operand, depth)? {
                Value::Number(n) => Ok(Value::Number(-n)),
                other => Err(ExecutionError::TypeMismatch(format!(
                    "operator unary - expects a number, got {}",
                    other.type_name()
                ))),
            },
            Atom::Call(callee, args) => self.call(callee, args, depth),
        }
    }

    /// Evaluate and resolve a child node.
    fn operand(&self, node: &Node, depth: usize) -> EResult<Value> {
        let value = self.eval_at(node, depth + 1)?;
        self.resolve(value)
    }

    fn arithmetic(
        &self,
        op: &str,
        left: &Node,
        right: &Node,
        depth: usize,
        apply: fn(f64, f64) -> f64,
    ) -> EResult<Value> {
        let left = self.operand(left, depth)?;
        let right = self.operand(right, depth)?;

        match (&left, &right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(apply(*a, *b))),
            _ => Err(ExecutionError::TypeMismatch(format!(
                "operator {} expects numbers, got {} and {}",
                op,
                left.type_name(),
                right.type_name()
            ))),
        }
    }

    fn call(&self, callee: &Node, args: &[Node], depth: usize) -> EResult<Value> {
        let function = match self.operand(callee, depth)? {
            Value::Function(f) => f,
            other => {
                return Err(ExecutionError::TypeMismatch(format!(
                    "cannot call a value of type {}",
                    other.type_name()
                )));
            }
        };

        let args = args
            .iter()
            .map(|arg| self.operand(arg, depth))
            .collect::<EResult<Vec<_>>>()?;

        function.call(&args)
    }
}
