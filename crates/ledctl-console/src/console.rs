//! The interactive command loop.
//!
//! The console prints a prompt, reads one line, looks it up in the command
//! table and either sends the matching datagram, stops, or ignores the line.
//! It owns its transport, so the socket is released however the loop ends.

use std::io::{BufRead, Write};

use ledctl_protocol::{Command, PayloadCodec};
use tracing::{debug, warn};

use crate::error::{ConsoleError, ConsoleResult};
use crate::transport::DatagramSink;

/// Prompt printed before every read.
pub const PROMPT: &str = "text>";

// ============================================================================
// Session Result
// ============================================================================

/// Why the console loop stopped without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The operator typed `exit`.
    ExitCommand,
    /// The input stream was closed.
    EndOfInput,
}

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Datagrams handed to the transport.
    pub datagrams_sent: u32,
    /// Input lines that matched no command.
    pub lines_ignored: u32,
    /// How the loop ended.
    pub reason: ExitReason,
}

// ============================================================================
// Console
// ============================================================================

/// Command console reading from `R`, prompting on `W` and sending through `S`.
pub struct Console<R, W, S> {
    input: R,
    output: W,
    sink: S,
    line: Vec<u8>,
    datagrams_sent: u32,
    lines_ignored: u32,
}

impl<R: BufRead, W: Write, S: DatagramSink> Console<R, W, S> {
    /// Create a console over the given input, output and sink.
    pub fn new(input: R, output: W, sink: S) -> Self {
        Console {
            input,
            output,
            sink,
            line: Vec::new(),
            datagrams_sent: 0,
            lines_ignored: 0,
        }
    }

    /// Run until `exit`, end of input, or an I/O failure.
    ///
    /// Consumes the console; the sink is dropped on return.
    pub fn run(mut self) -> ConsoleResult<SessionSummary> {
        loop {
            self.prompt()?;

            if !self.read_line()? {
                return Ok(self.summary(ExitReason::EndOfInput));
            }

            let command = std::str::from_utf8(strip_line_terminator(&self.line))
                .ok()
                .and_then(Command::lookup);

            match command {
                Some(Command::Exit) => return Ok(self.summary(ExitReason::ExitCommand)),
                Some(Command::Toggle(led)) => {
                    let payload = PayloadCodec::encode(led);
                    let sent = self
                        .sink
                        .send_datagram(&payload)
                        .map_err(|source| ConsoleError::Send {
                            payload: led.label(),
                            source,
                        })?;
                    if sent != payload.len() {
                        warn!(sent, total = payload.len(), "datagram truncated");
                    }
                    self.datagrams_sent += 1;
                    debug!(led = %led, payload = led.label(), bytes = sent, "datagram sent");
                }
                None => {
                    self.lines_ignored += 1;
                    debug!(line = %String::from_utf8_lossy(&self.line).trim_end(), "ignored input");
                }
            }
        }
    }

    fn prompt(&mut self) -> ConsoleResult<()> {
        self.output
            .write_all(PROMPT.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(ConsoleError::Output)
    }

    /// Read the next line into the buffer. Returns `false` at end of input.
    fn read_line(&mut self) -> ConsoleResult<bool> {
        self.line.clear();
        let n = self
            .input
            .read_until(b'\n', &mut self.line)
            .map_err(ConsoleError::Input)?;
        Ok(n > 0)
    }

    fn summary(&self, reason: ExitReason) -> SessionSummary {
        SessionSummary {
            datagrams_sent: self.datagrams_sent,
            lines_ignored: self.lines_ignored,
            reason,
        }
    }
}

/// Remove a trailing `\n` or `\r\n`. Any other whitespace is kept.
fn strip_line_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_terminator() {
        assert_eq!(strip_line_terminator(b"blue\n"), b"blue");
        assert_eq!(strip_line_terminator(b"blue\r\n"), b"blue");
        assert_eq!(strip_line_terminator(b"blue"), b"blue");
        assert_eq!(strip_line_terminator(b" blue \n"), b" blue ");
        assert_eq!(strip_line_terminator(b"\n"), b"");
    }
}
