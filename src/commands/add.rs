//! Sum an input string and render the result

use std::io::Read;

use anyhow::Context;
use log::debug;

use strcalc::calculator;
use strcalc::output::{AddResult, ErrorResult, OutputMode};

/// Exit code for inputs rejected by validation
const EXIT_REJECTED: i32 = 2;

/// Sum `numbers` (or stdin when `use_stdin` is set) and render the result.
///
/// Validation failures are rendered in the requested output mode and
/// terminate the process with a distinct exit code, so scripts can tell a
/// rejected input from an operational error.
pub fn add(numbers: Option<String>, use_stdin: bool, mode: OutputMode) -> anyhow::Result<()> {
    let input = if use_stdin {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read input from stdin")?;
        Some(buf)
    } else {
        numbers
    };

    debug!("summing input: {input:?}");

    match calculator::add(input.as_deref()) {
        Ok(sum) => {
            AddResult { sum }.render(mode);
            Ok(())
        },
        Err(err) => {
            debug!("input rejected ({})", err.kind().as_str());
            ErrorResult::from(&err).render(mode);
            std::process::exit(EXIT_REJECTED);
        },
    }
}
