use serde::Serialize;
use strum::{Display, EnumString};

/// Grammar class an operand slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Arg {
    /// `<frame>@<identifier>`
    Var,
    /// Jump target identifier
    Label,
    /// Variable or typed literal, decided per token
    Symb,
    /// Bare type name, only taken by `READ`
    Type,
}

/// Literal data types, also the accepted type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Int,
    Bool,
    String,
    Nil,
}

impl DataType {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(t) => Ok(t),
            Err(_) => Err(format!("Unknown type name: {s}")),
        }
    }
}

/// Resolved kind of an operand, written as its `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ArgKind {
    Var,
    Label,
    Type,
    Int,
    Bool,
    String,
    Nil,
}

impl From<DataType> for ArgKind {
    fn from(t: DataType) -> Self {
        match t {
            DataType::Int => ArgKind::Int,
            DataType::Bool => ArgKind::Bool,
            DataType::String => ArgKind::String,
            DataType::Nil => ArgKind::Nil,
        }
    }
}

#[test]
fn test_data_type() {
    assert_eq!(DataType::parse("int"), Ok(DataType::Int));
    assert_eq!(DataType::parse("nil"), Ok(DataType::Nil));
    assert!(DataType::parse("INT").is_err());
    assert!(DataType::parse("float").is_err());
    assert!(DataType::parse("").is_err());
}

#[test]
fn test_kind_names() {
    assert_eq!(ArgKind::Var.to_string(), "var");
    assert_eq!(ArgKind::from(DataType::String).to_string(), "string");
    assert_eq!(ArgKind::Type.to_string(), "type");
    assert_eq!(Arg::Symb.to_string(), "symb");
}
