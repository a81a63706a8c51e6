use arch::LANGUAGE;
use serde::Serialize;

use crate::inst::Instruction;

/// All accepted instructions, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    language: &'static str,
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn new() -> Self {
        Self {
            language: LANGUAGE,
            instructions: vec![],
        }
    }

    pub(crate) fn push(&mut self, inst: Instruction) {
        self.instructions.push(inst);
    }

    pub fn language(&self) -> &'static str {
        self.language
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Instruction listing for `--dump`.
    pub fn cformat(&self) -> String {
        let rule = "------+-----------------------------------------------";
        let mut lines = vec![rule.to_string()];
        lines.extend(self.instructions.iter().map(|inst| inst.cformat()));
        lines.push(rule.to_string());
        lines.join("\n")
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}
