use serde::Serialize;
use strum::{Display, EnumString};

/// Storage scope prefix of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, Display)]
pub enum Frame {
    /// Global frame
    GF,
    /// Temporary frame
    TF,
    /// Local frame
    LF,
}

impl Frame {
    /// Frame tags are case-sensitive, `gf@x` is not a variable.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(f) => Ok(f),
            Err(_) => Err(format!("Unknown frame: {s}")),
        }
    }
}

#[test]
fn test() {
    assert_eq!(Frame::parse("GF"), Ok(Frame::GF));
    assert_eq!(Frame::parse("LF"), Ok(Frame::LF));
    assert!(Frame::parse("gf").is_err());
    assert!(Frame::parse("XF").is_err());
}
