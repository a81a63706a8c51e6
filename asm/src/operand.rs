use arch::{
    arg::{Arg, ArgKind, DataType},
    frame::Frame,
};
use color_print::cformat;
use serde::Serialize;

use crate::{error::Error, escape::escape};

// ----------------------------------------------------------------------------
// Classification

/// Outcome of checking a token against a grammar class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    Match,
    NoMatch,
    /// A `symb` token resolved to a variable or a typed literal.
    Symbol { kind: ArgKind, content: String },
}

impl Classified {
    fn matched(ok: bool) -> Self {
        if ok {
            Classified::Match
        } else {
            Classified::NoMatch
        }
    }
}

/// Checks `token` against `class`.
///
/// `var`, `label` and `type` only report whether the token matches. A `symb`
/// either resolves or fails, since a malformed literal is an error in its own
/// right rather than a mismatch.
pub fn classify(token: &str, class: Arg) -> Result<Classified, Error> {
    match class {
        Arg::Var => Ok(Classified::matched(is_var(token))),
        Arg::Label => Ok(Classified::matched(is_label(token))),
        Arg::Type => Ok(Classified::matched(DataType::parse(token).is_ok())),
        Arg::Symb => classify_symb(token),
    }
}

fn classify_symb(token: &str) -> Result<Classified, Error> {
    if is_var(token) {
        return Ok(Classified::Symbol {
            kind: ArgKind::Var,
            content: escape(token)?,
        });
    }

    let literal = token
        .split_once('@')
        .and_then(|(ty, value)| DataType::parse(ty).ok().map(|ty| (ty, value)));
    let Some((ty, value)) = literal else {
        return Err(Error::Operand {
            token: token.to_string(),
            expected: Arg::Symb,
        });
    };

    let valid = match ty {
        DataType::Nil => value == "nil",
        DataType::Bool => value == "true" || value == "false",
        DataType::Int | DataType::String => !value.is_empty(),
    };
    if !valid {
        return Err(Error::Literal(token.to_string()));
    }

    let content = match ty {
        DataType::String => escape(value)?,
        _ => value.to_string(),
    };
    Ok(Classified::Symbol {
        kind: ty.into(),
        content,
    })
}

// ----------------------------------------------------------------------------
// Identifier grammar

fn is_ident_head(c: char, allow_amp: bool) -> bool {
    c.is_ascii_alphabetic()
        || matches!(c, '_' | '$' | '%' | '!' | '?' | '*')
        || (allow_amp && c == '&')
}

fn is_ident(s: &str, allow_amp: bool) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(head) if is_ident_head(head, allow_amp) => {
            chars.all(|c| c.is_ascii_digit() || is_ident_head(c, allow_amp))
        }
        _ => false,
    }
}

/// `GF@x`, `LF@_tmp1`, `TF@&ref`
pub fn is_var(token: &str) -> bool {
    match token.split_once('@') {
        Some((frame, name)) => Frame::parse(frame).is_ok() && is_ident(name, true),
        None => false,
    }
}

/// `loop`, `--end`, `$ret`
pub fn is_label(token: &str) -> bool {
    is_ident(token.trim_start_matches('-'), false)
}

// ----------------------------------------------------------------------------
// Operand

/// A validated operand, fixed once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operand {
    #[serde(skip)]
    pos: usize,
    #[serde(rename = "type")]
    kind: ArgKind,
    content: String,
}

impl Operand {
    /// Builds the operand at 1-based slot `pos` from a token of grammar `class`.
    pub fn parse(pos: usize, token: &str, class: Arg) -> Result<Self, Error> {
        let (kind, content) = match classify(token, class)? {
            Classified::Symbol { kind, content } => (kind, content),
            Classified::Match => match class {
                Arg::Var => (ArgKind::Var, escape(token)?),
                Arg::Label => (ArgKind::Label, token.to_string()),
                _ => (ArgKind::Type, token.to_string()),
            },
            Classified::NoMatch => {
                return Err(Error::Operand {
                    token: token.to_string(),
                    expected: class,
                })
            }
        };
        Ok(Self { pos, kind, content })
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn kind(&self) -> ArgKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cformat(&self) -> String {
        match self.kind {
            ArgKind::Var => cformat!("<blue>{}</>", self.content),
            ArgKind::Label => cformat!("<green>{}</>", self.content),
            ArgKind::Type => cformat!("<cyan>{}</>", self.content),
            kind => cformat!("<yellow>{}@{}</>", kind, self.content),
        }
    }
}
