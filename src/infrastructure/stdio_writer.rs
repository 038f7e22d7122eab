use std::cell::RefCell;
use std::io::{self, Stderr, Stdout, Write};

use serde::Serialize;

use crate::application::ports::{ResponseWriter, WriteError};
use crate::domain::payload::{ErrorResponse, OutputData};

/// Writes each response as one compact JSON line: successes to `out`, errors to `err`.
pub struct StdioWriter<O: Write, E: Write> {
    out: RefCell<O>,
    err: RefCell<E>,
}

impl StdioWriter<Stdout, Stderr> {
    pub fn new() -> Self {
        Self::with_streams(io::stdout(), io::stderr())
    }
}

impl Default for StdioWriter<Stdout, Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Write, E: Write> StdioWriter<O, E> {
    pub fn with_streams(out: O, err: E) -> Self {
        Self {
            out: RefCell::new(out),
            err: RefCell::new(err),
        }
    }

    #[cfg(test)]
    pub fn into_streams(self) -> (O, E) {
        (self.out.into_inner(), self.err.into_inner())
    }
}

impl<O: Write, E: Write> ResponseWriter for StdioWriter<O, E> {
    fn write_success(&self, output: &OutputData) -> Result<(), WriteError> {
        write_line(&mut *self.out.borrow_mut(), output)
    }

    fn write_error(&self, error: &ErrorResponse) -> Result<(), WriteError> {
        write_line(&mut *self.err.borrow_mut(), error)
    }
}

fn write_line<W: Write, T: Serialize>(stream: &mut W, value: &T) -> Result<(), WriteError> {
    let json = serde_json::to_string(value).map_err(|e| WriteError::Serialize(e.to_string()))?;
    writeln!(stream, "{json}").map_err(|e| WriteError::Io(e.to_string()))?;
    stream.flush().map_err(|e| WriteError::Io(e.to_string()))
}
