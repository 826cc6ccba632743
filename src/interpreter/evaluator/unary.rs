use std::io::{BufRead, Write};

use crate::{
    ast::{IoOperator, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl<R: BufRead, W: Write> Context<R, W> {
    /// Evaluates an input/output operation.
    ///
    /// `stdout` evaluates its operand and writes the value's display form
    /// with no trailing separator, flushing so output is visible before a
    /// later blocking read. `stdin` reads one line, strips the trailing
    /// newline, and stores the text verbatim as a string under the operand
    /// variable's name; no numeric coercion is applied. Neither operation
    /// yields a value.
    pub(in crate::interpreter::evaluator) fn eval_io(&mut self,
                                                     op: IoOperator,
                                                     operand: &Node,
                                                     offset: usize)
                                                     -> EvalResult<Option<Value>> {
        match op {
            IoOperator::Stdout => {
                let value = self.eval_child(operand, offset)?;
                write!(self.output, "{value}").and_then(|()| self.output.flush())
                                              .map_err(|e| RuntimeError::Io { details:
                                                                                  e.to_string(),
                                                                              offset })?;
            },

            IoOperator::Stdin => {
                let Node::Variable { name, .. } = operand else {
                    return Err(RuntimeError::InvalidStoreTarget { operator: "stdin",
                                                                  offset });
                };

                let mut line = String::new();
                self.input
                    .read_line(&mut line)
                    .map_err(|e| RuntimeError::Io { details: e.to_string(),
                                                    offset })?;
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }

                self.environment.define(name, Value::Str(line));
            },
        }

        Ok(None)
    }
}
