use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use crate::arg::Arg;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, Display, EnumIter,
)]
pub enum OpKind {
    // Frames and calls
    MOVE,
    CREATEFRAME,
    PUSHFRAME,
    POPFRAME,
    DEFVAR,
    CALL,
    RETURN,

    // Data stack
    PUSHS,
    POPS,

    // Arithmetic, relational, boolean and conversion
    ADD,
    SUB,
    MUL,
    IDIV,
    LT,
    GT,
    EQ,
    AND,
    OR,
    NOT,
    INT2CHAR,
    STRI2INT,

    // Input and output
    READ,
    WRITE,

    // Strings
    CONCAT,
    STRLEN,
    GETCHAR,
    SETCHAR,

    // Types
    TYPE,

    // Control flow
    LABEL,
    JUMP,
    JUMPIFEQ,
    JUMPIFNEQ,
    EXIT,

    // Debugging
    DPRINT,
    BREAK,
}

impl OpKind {
    /// Looks up an opcode by its canonical upper-case mnemonic.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(op) => Ok(op),
            Err(_) => Err(format!("Unknown opcode: {s}")),
        }
    }

    /// Grammar class required at each operand position.
    pub fn arg_field(&self) -> Vec<Arg> {
        use OpKind::*;
        match self {
            CREATEFRAME | PUSHFRAME | POPFRAME | RETURN | BREAK => vec![],

            DEFVAR | POPS => vec![Arg::Var],
            CALL | LABEL | JUMP => vec![Arg::Label],
            PUSHS | WRITE | EXIT | DPRINT => vec![Arg::Symb],

            READ => vec![Arg::Var, Arg::Type],
            MOVE | STRLEN | TYPE | NOT | INT2CHAR => vec![Arg::Var, Arg::Symb],

            JUMPIFEQ | JUMPIFNEQ => vec![Arg::Label, Arg::Symb, Arg::Symb],
            ADD | SUB | MUL | IDIV | LT | GT | EQ | AND | OR | STRI2INT | CONCAT | GETCHAR
            | SETCHAR => vec![Arg::Var, Arg::Symb, Arg::Symb],
        }
    }

    pub fn arity(&self) -> usize {
        self.arg_field().len()
    }
}

#[test]
fn test_parse() {
    assert_eq!(OpKind::parse("MOVE"), Ok(OpKind::MOVE));
    assert_eq!(OpKind::parse("INT2CHAR"), Ok(OpKind::INT2CHAR));
    assert!(OpKind::parse("move").is_err());
    assert!(OpKind::parse("HOGE").is_err());
    assert!(OpKind::parse(".IPPCODE23").is_err());
}

#[test]
fn test_arity_classes() {
    use strum::IntoEnumIterator;

    let count = |n: usize| OpKind::iter().filter(|op| op.arity() == n).count();
    assert_eq!(count(0), 5);
    assert_eq!(count(1), 9);
    assert_eq!(count(2), 6);
    assert_eq!(count(3), 15);
    assert_eq!(OpKind::iter().count(), 35);
}

#[test]
fn test_arg_field() {
    assert_eq!(OpKind::READ.arg_field(), vec![Arg::Var, Arg::Type]);
    assert_eq!(OpKind::JUMPIFNEQ.arg_field(), vec![Arg::Label, Arg::Symb, Arg::Symb]);
    assert_eq!(OpKind::SETCHAR.arg_field(), vec![Arg::Var, Arg::Symb, Arg::Symb]);
    assert_eq!(OpKind::POPS.arg_field(), vec![Arg::Var]);
    assert_eq!(OpKind::DPRINT.arg_field(), vec![Arg::Symb]);
    assert_eq!(OpKind::STRI2INT.to_string(), "STRI2INT");
}
