pub mod arg;
pub mod frame;
pub mod op;

/// First token of every source, matched case-insensitively.
pub const HEADER: &str = ".IPPcode23";

/// Value of the `language` attribute on the program root.
pub const LANGUAGE: &str = "IPPcode23";
