use arch::HEADER;
use tracing::{debug, info, trace};

use crate::{error::Error, inst::Instruction, line::Line, program::Program};

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    AwaitingHeader,
    InBody,
    /// Terminal, every later call reports the same error.
    Failed(Error),
}

/// Consumes source lines one at a time and collects the [Program].
///
/// The first line with any content must be the header. Processing stops at
/// the first error.
#[derive(Debug, Clone)]
pub struct Builder {
    state: State,
    line_idx: usize,
    program: Program,
}

impl Builder {
    pub fn build_once<I, S>(lines: I) -> Result<Program, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Builder::new();
        for line in lines {
            builder.feed(line.as_ref())?;
        }
        builder.finish()
    }

    pub fn new() -> Self {
        Self {
            state: State::AwaitingHeader,
            line_idx: 0,
            program: Program::new(),
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line_idx
    }

    pub fn feed(&mut self, raw: &str) -> Result<(), Error> {
        let in_body = match &self.state {
            State::Failed(err) => return Err(err.clone()),
            State::AwaitingHeader => false,
            State::InBody => true,
        };

        let line = Line::new(self.line_idx, raw);
        self.line_idx += 1;

        let Some(first) = line.words().first() else {
            trace!(line = line.no(), "skip blank line");
            return Ok(());
        };
        let is_header = first.eq_ignore_ascii_case(HEADER);

        let result = match (in_body, is_header) {
            (false, true) => {
                debug!(line = line.no(), "found header");
                self.state = State::InBody;
                Ok(())
            }
            (false, false) => Err(Error::HeaderMissing),
            (true, true) => Err(Error::DuplicateHeader),
            (true, false) => self.push(line.words()),
        };

        if let Err(err) = &result {
            debug!(line = line.no(), %err, "stop");
            self.state = State::Failed(err.clone());
        }
        result
    }

    fn push(&mut self, words: &[&str]) -> Result<(), Error> {
        let inst = Instruction::parse(self.program.len() + 1, words)?;
        debug!(order = inst.order(), opcode = %inst.opcode(), "instruction");
        self.program.push(inst);
        Ok(())
    }

    /// Ends the input. A source without a header is an error.
    pub fn finish(self) -> Result<Program, Error> {
        match self.state {
            State::InBody => {
                info!(instructions = self.program.len(), "program complete");
                Ok(self.program)
            }
            State::AwaitingHeader => Err(Error::HeaderMissing),
            State::Failed(err) => Err(err),
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
