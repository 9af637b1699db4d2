//! Path processing loop.
//!
//! Paths given as arguments are processed first, then one path per line
//! from the input reader when one is supplied. Results are written in input
//! order, one per line.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use cleanpath::{Config, Pipeline, SystemContext, TraceEntry};

use crate::error::CliError;

/// Runs every path through the pipeline and writes the results to `out`.
///
/// When the configuration asks for a trace, `on_trace` receives each entry
/// of a path's trace before its result is written. Returns the number of
/// paths processed.
///
/// # Errors
///
/// Returns [`CliError::InvalidArguments`] when there is nothing to read,
/// and [`CliError::Io`] if reading a line or writing a result fails.
pub fn process_paths<R, W, F>(
    config: &Config,
    context: &dyn SystemContext,
    paths: &[String],
    input: Option<R>,
    out: &mut W,
    mut on_trace: F,
) -> Result<usize, CliError>
where
    R: BufRead,
    W: Write,
    F: FnMut(&TraceEntry),
{
    if paths.is_empty() && input.is_none() {
        return Err(CliError::InvalidArguments("no paths given".to_string()));
    }

    let pipeline = Pipeline::new(config, context);
    let mut count = 0;

    let mut emit = |path: &str, out: &mut W| -> Result<(), CliError> {
        let result = if config.verbose() {
            let (result, trace) = pipeline.apply_traced(path);
            trace.iter().for_each(&mut on_trace);
            result
        } else {
            pipeline.apply(path)
        };
        writeln!(out, "{result}")?;
        count += 1;
        Ok(())
    };

    for path in paths {
        emit(path, out)?;
    }

    if let Some(mut input) = input {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            emit(&decode_line(&buf), out)?;
        }
    }

    out.flush()?;
    Ok(count)
}

/// Strip the line terminator (`\n` or `\r\n`) and decode the rest as
/// UTF-8, replacing invalid bytes with U+FFFD.
fn decode_line(line: &[u8]) -> Cow<'_, str> {
    let line = match line.strip_suffix(b"\n") {
        Some(rest) => rest.strip_suffix(b"\r").unwrap_or(rest),
        None => line,
    };
    String::from_utf8_lossy(line)
}
