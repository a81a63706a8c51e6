use std::{
    fmt,
    io::{self, Write},
};

use crate::program::Program;

/// XML view of a [Program], two spaces of indentation per level.
///
/// Operand content is written verbatim, it was escaped when the operand was built.
pub struct Xml<'a>(&'a Program);

impl fmt::Display for Xml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let program = self.0;
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;

        if program.is_empty() {
            return writeln!(f, r#"<program language="{}"/>"#, program.language());
        }

        writeln!(f, r#"<program language="{}">"#, program.language())?;
        for inst in program.instructions() {
            let (order, opcode) = (inst.order(), inst.opcode());
            if inst.args().is_empty() {
                writeln!(f, r#"  <instruction order="{order}" opcode="{opcode}"/>"#)?;
                continue;
            }

            writeln!(f, r#"  <instruction order="{order}" opcode="{opcode}">"#)?;
            for arg in inst.args() {
                let (pos, kind, content) = (arg.pos(), arg.kind(), arg.content());
                if content.is_empty() {
                    writeln!(f, r#"    <arg{pos} type="{kind}"/>"#)?;
                } else {
                    writeln!(f, r#"    <arg{pos} type="{kind}">{content}</arg{pos}>"#)?;
                }
            }
            writeln!(f, "  </instruction>")?;
        }
        writeln!(f, "</program>")
    }
}

impl Program {
    pub fn xml(&self) -> Xml<'_> {
        Xml(self)
    }

    pub fn write_xml<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.xml())
    }
}
