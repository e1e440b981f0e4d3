//! Status and diagnostic output for commands.

use std::io::{self, ErrorKind, Stderr, Stdout, Write};

use fontshelf_core::Result;
use log::debug;

/// Output controls for commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub quiet: bool,
    pub verbose: bool,
}

impl OutputOptions {
    pub fn should_print(&self) -> bool {
        !self.quiet
    }

    pub fn should_print_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }
}

/// Execution controls shared by mutating commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationOptions {
    pub dry_run: bool,
    pub output: OutputOptions,
}

impl OperationOptions {
    pub fn new(dry_run: bool, quiet: bool, verbose: bool) -> Self {
        Self { dry_run, output: OutputOptions { quiet, verbose } }
    }
}

/// Writes command output: results and status lines to `out`, verbose
/// diagnostics to `err`.
///
/// Once `out` reports a broken pipe (the reader went away, as in
/// `fontshelf list | head -1`), further output is dropped without error.
#[derive(Debug)]
pub struct Reporter<O = Stdout, E = Stderr> {
    out: O,
    err: E,
    out_closed: bool,
}

impl Reporter {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err, out_closed: false }
    }

    /// Command result output; never suppressed.
    pub fn print(&mut self, message: &str) -> Result<()> {
        if self.out_closed {
            return Ok(());
        }
        match writeln!(self.out, "{message}") {
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("Output closed by reader, dropping remaining output");
                self.out_closed = true;
                Ok(())
            }
            result => Ok(result?),
        }
    }

    /// Status line, suppressed by `quiet`.
    pub fn status(&mut self, output: &OutputOptions, message: &str) -> Result<()> {
        if output.should_print() {
            self.print(message)?;
        }
        Ok(())
    }

    /// Diagnostic line, shown with `verbose` unless `quiet`.
    pub fn verbose(&mut self, output: &OutputOptions, message: &str) -> Result<()> {
        if output.should_print_verbose() {
            writeln!(self.err, "{message}")?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
