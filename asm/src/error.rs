use arch::{arg::Arg, op::OpKind, HEADER};
use color_print::ceprintln;
use thiserror::Error;

/// Process status for a malformed invocation.
pub const EXIT_USAGE: u8 = 10;
/// Process status when the source cannot be read.
pub const EXIT_INPUT: u8 = 11;
/// Process status when the output cannot be written.
pub const EXIT_OUTPUT: u8 = 12;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Missing header: the first line must be `{}`", HEADER)]
    HeaderMissing,

    #[error("Duplicate header: `{}` may appear only once", HEADER)]
    DuplicateHeader,

    #[error("Unknown opcode: `{0}`")]
    UnknownOpcode(String),

    #[error("`{opcode}` takes {expected} operand(s), found {found}")]
    Arity {
        opcode: OpKind,
        expected: usize,
        found: usize,
    },

    #[error("Cannot parse `{token}` as {expected}")]
    Operand { token: String, expected: Arg },

    #[error("Malformed literal: `{0}`")]
    Literal(String),

    #[error("Malformed escape sequence in `{0}`")]
    Escape(String),
}

impl Error {
    /// Lexical and syntactic failures share a single status.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            Error::Arity { .. } | Error::Operand { .. } | Error::Literal(_) | Error::Escape(_)
        )
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Error::HeaderMissing => 21,
            Error::DuplicateHeader | Error::UnknownOpcode(_) => 22,
            _ => 23,
        }
    }

    /// Print error with the offending source line
    pub fn print_diag(&self, file: &str, line_idx: usize, line_content: &str) {
        ceprintln!("<red,bold>error</>: {}", self);

        // line_idx is 0-based, display as 1-based
        let line_num = line_idx + 1;
        ceprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        ceprintln!("      <blue>|</>");
        ceprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
        ceprintln!("      <blue>|</>");
    }

    /// Print error that is not tied to a line, e.g. an empty source
    pub fn print(&self, file: &str) {
        ceprintln!("<red,bold>error</>: {}", self);
        ceprintln!("     <blue>--></> <underline>{}</>", file);
    }
}

#[test]
fn test_exit_codes() {
    assert_eq!(Error::HeaderMissing.exit_code(), 21);
    assert_eq!(Error::DuplicateHeader.exit_code(), 22);
    assert_eq!(Error::UnknownOpcode("FOO".to_string()).exit_code(), 22);
    assert_eq!(Error::Literal("bool@maybe".to_string()).exit_code(), 23);
    assert!(Error::Escape("a\\65b".to_string()).is_syntax());
    assert!(!Error::DuplicateHeader.is_syntax());
}
