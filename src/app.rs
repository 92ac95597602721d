use std::io::{BufRead, Write};

use anyhow::Result;

use crate::data::lookup::{normalize, resolve_query};
use crate::error::Error;
use crate::state::AppState;
use crate::ui::{diagram, record};

pub const PROMPT: &str = "Enter an element's symbol or full name to examine it (or (Q)uit):";
pub const INPUT_MARKER: &str = "> ";
pub const PAUSE: &str = "Press Enter to continue...";
pub const INVALID: &str = "Invalid input";

/// How a session finished. Both are successful outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `q` or `quit`.
    Quit,
    /// Standard input reached end-of-file.
    InputClosed,
}

// ---------------------------------------------------------------------------
// Interactive session
// ---------------------------------------------------------------------------

/// Prompt loop over the loaded table. Generic over its console so tests can
/// script it.
pub struct Session<'a, R, W> {
    state: &'a AppState,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(state: &'a AppState, input: R, output: W) -> Self {
        Self {
            state,
            input,
            output,
        }
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> Result<SessionEnd> {
        writeln!(self.output, "{}", diagram::TITLE)?;
        writeln!(self.output)?;

        loop {
            diagram::render_table_diagram(&mut self.output)?;
            writeln!(self.output, "{PROMPT}")?;

            loop {
                write!(self.output, "{INPUT_MARKER}")?;
                self.output.flush()?;

                let Some(line) = self.read_line()? else {
                    return Ok(SessionEnd::InputClosed);
                };
                let response = normalize(&line);

                if response == "q" || response == "quit" {
                    log::debug!("quit requested");
                    return Ok(SessionEnd::Quit);
                }

                match resolve_query(&self.state.table, &response) {
                    Ok(element) => {
                        record::print_record(&mut self.output, element)?;
                        if !self.pause()? {
                            return Ok(SessionEnd::InputClosed);
                        }
                        break;
                    }
                    Err(Error::NotFound(query)) => {
                        log::debug!(
                            "no match for {query:?} (known name or symbol: {})",
                            self.state.is_known(&query)
                        );
                        writeln!(self.output, "{INVALID}")?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }

    /// Block until the user acknowledges the listing. Returns `false` if
    /// input ended instead.
    fn pause(&mut self) -> Result<bool> {
        writeln!(self.output)?;
        write!(self.output, "{PAUSE}")?;
        self.output.flush()?;
        let acknowledged = self.read_line()?.is_some();
        writeln!(self.output)?;
        Ok(acknowledged)
    }

    /// Read one line; `None` at end of input. Bytes that are not valid UTF-8
    /// are replaced, so such a line simply matches no element.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}
