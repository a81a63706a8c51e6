use arch::op::OpKind;
use color_print::cformat;
use serde::Serialize;

use crate::{error::Error, operand::Operand};

/// One accepted source instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    order: usize,
    opcode: OpKind,
    args: Vec<Operand>,
}

impl Instruction {
    /// Classifies `words` (opcode first, then operands) and assigns `order`.
    ///
    /// The opcode is matched case-insensitively. An unknown opcode is
    /// reported before the operand count is looked at, and operands are
    /// checked left to right.
    pub fn parse(order: usize, words: &[&str]) -> Result<Self, Error> {
        let Some((op, args)) = words.split_first() else {
            return Err(Error::UnknownOpcode(String::new()));
        };

        let opcode = OpKind::parse(&op.to_uppercase())
            .map_err(|_| Error::UnknownOpcode(op.to_string()))?;

        let field = opcode.arg_field();
        if field.len() != args.len() {
            return Err(Error::Arity {
                opcode,
                expected: field.len(),
                found: args.len(),
            });
        }

        let args = field
            .into_iter()
            .zip(args)
            .enumerate()
            .map(|(idx, (class, token))| Operand::parse(idx + 1, token, class))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            order,
            opcode,
            args,
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn opcode(&self) -> OpKind {
        self.opcode
    }

    pub fn args(&self) -> &[Operand] {
        &self.args
    }

    pub fn cformat(&self) -> String {
        let args: Vec<String> = self.args.iter().map(|arg| arg.cformat()).collect();
        cformat!(
            "<green>{:>5}</> | <red>{:<12}</>{}",
            self.order,
            self.opcode.to_string(),
            args.join(" ")
        )
    }
}
