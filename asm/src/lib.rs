pub mod builder;
pub mod error;
pub mod escape;
pub mod inst;
pub mod line;
pub mod operand;
pub mod program;
pub mod xml;

pub use builder::Builder;
pub use error::Error;
pub use inst::Instruction;
pub use operand::{Classified, Operand};
pub use program::Program;
