use std::{
    cmp::Ordering,
    io::{BufRead, Write},
};

use crate::{
    ast::{BinaryOperator, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

/// Maps an ordering operator and a comparison outcome to a boolean.
///
/// This function does not perform any comparison work itself.
#[must_use]
fn ordering_op_result(op: BinaryOperator, ordering: Ordering) -> bool {
    match op {
        BinaryOperator::Greater => ordering == Ordering::Greater,
        BinaryOperator::GreaterEqual => ordering != Ordering::Less,
        BinaryOperator::Less => ordering == Ordering::Less,
        BinaryOperator::LessEqual => ordering != Ordering::Greater,
        _ => unreachable!("ordering_op_result used with a non ordering operator"),
    }
}

impl<R: BufRead, W: Write> Context<R, W> {
    /// Evaluates a binary operation.
    ///
    /// Assignment is dispatched first since its left side is a store target
    /// rather than a value. For every other operator the left operand is
    /// fully evaluated before the right one, then the operator is applied to
    /// the two values.
    pub(in crate::interpreter::evaluator) fn eval_binary_op(&mut self,
                                                            op: BinaryOperator,
                                                            left: &Node,
                                                            right: &Node,
                                                            offset: usize)
                                                            -> EvalResult<Option<Value>> {
        use BinaryOperator::{
            Add, Assign, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, Pow, Sub,
        };

        if op == Assign {
            return self.eval_assignment(left, right, offset).map(Some);
        }

        let lhs = self.eval_child(left, offset)?;
        let rhs = self.eval_child(right, offset)?;

        let value = match op {
            Add | Sub | Mul | Div => Self::eval_arithmetic(op, &lhs, &rhs, offset)?,
            Pow => Self::eval_pow(&lhs, &rhs, offset)?,
            Equal | Greater | GreaterEqual | Less | LessEqual => {
                Self::eval_comparison(op, &lhs, &rhs, offset)?
            },
            Assign => unreachable!(),
        };

        Ok(Some(value))
    }

    /// Evaluates an assignment.
    ///
    /// The right-hand side is evaluated and stored under the left-hand
    /// variable's name; the stored value is returned.
    fn eval_assignment(&mut self, target: &Node, value: &Node, offset: usize)
                       -> EvalResult<Value> {
        let Node::Variable { name, .. } = target else {
            return Err(RuntimeError::InvalidStoreTarget { operator: "=", offset });
        };

        let value = self.eval_child(value, offset)?;
        self.environment.define(name, value.clone());

        Ok(value)
    }

    /// Evaluates `+ - * /`.
    ///
    /// Integer operands use checked arithmetic; `+` additionally
    /// concatenates two strings. Division truncates toward zero, and a zero
    /// divisor is an arithmetic fault.
    fn eval_arithmetic(op: BinaryOperator, left: &Value, right: &Value, offset: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Integer, Str};

        match (left, right) {
            (Str(a), Str(b)) if op == Add => Ok(Str(format!("{a}{b}"))),

            (Integer(a), Integer(b)) => {
                if op == Div && *b == 0 {
                    return Err(RuntimeError::ArithmeticFault { reason: "Division by zero"
                                                                           .to_string(),
                                                               offset });
                }

                let result = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    Mul => a.checked_mul(*b),
                    Div => a.checked_div(*b),
                    _ => unreachable!(),
                };

                result.map(Integer)
                      .ok_or_else(|| RuntimeError::ArithmeticFault { reason: overflow_reason(),
                                                                     offset })
            },

            _ => Err(type_mismatch(op, left, right, offset)),
        }
    }

    /// Evaluates `^` via checked integer exponentiation.
    ///
    /// Negative exponents have no integer result and fault; so does any
    /// overflow of the 64-bit range.
    fn eval_pow(base: &Value, exponent: &Value, offset: usize) -> EvalResult<Value> {
        use Value::Integer;

        match (base, exponent) {
            (Integer(b), Integer(e)) => {
                if *e < 0 {
                    return Err(RuntimeError::ArithmeticFault { reason: "Negative exponent"
                                                                           .to_string(),
                                                               offset });
                }

                u32::try_from(*e).ok()
                                 .and_then(|e| b.checked_pow(e))
                                 .map(Integer)
                                 .ok_or_else(|| RuntimeError::ArithmeticFault {
                                     reason: overflow_reason(),
                                     offset,
                                 })
            },

            _ => Err(type_mismatch(BinaryOperator::Pow, base, exponent, offset)),
        }
    }

    /// Evaluates `== > >= < <=`.
    ///
    /// Equality compares any two values; differing runtime types are simply
    /// unequal (booleans do not coerce to integers). Ordering requires like
    /// types: integers numerically, strings lexicographically, booleans with
    /// `false < true`.
    fn eval_comparison(op: BinaryOperator, left: &Value, right: &Value, offset: usize)
                       -> EvalResult<Value> {
        use Value::{Bool, Integer, Str};

        if op == BinaryOperator::Equal {
            return Ok(Bool(left == right));
        }

        let ordering = match (left, right) {
            (Integer(a), Integer(b)) => a.cmp(b),
            (Str(a), Str(b)) => a.cmp(b),
            (Bool(a), Bool(b)) => a.cmp(b),
            _ => return Err(type_mismatch(op, left, right, offset)),
        };

        Ok(Bool(ordering_op_result(op, ordering)))
    }
}

/// Builds a `TypeMismatch` error for `op` applied to `left` and `right`.
fn type_mismatch(op: BinaryOperator, left: &Value, right: &Value, offset: usize) -> RuntimeError {
    RuntimeError::TypeMismatch { operator: op.to_string(),
                                 left: left.type_name(),
                                 right: right.type_name(),
                                 offset }
}

fn overflow_reason() -> String {
    "Integer overflow while trying to compute result".to_string()
}
