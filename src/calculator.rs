//! Core string-calculator parsing and validation
//!
//! [`add`] takes an optional text input, splits it into numeric tokens on a
//! delimiter set (a single comma by default), validates every token, and
//! returns the sum. A custom delimiter set can be declared in a header at
//! the start of the input: `//<delimiters>\n<numbers...>`. The header
//! replaces the default set entirely; it never appends to it.
//!
//! Validation rules:
//! - the header delimiters must not contain `/`
//! - every token must parse as a base-10 integer (sign permitted)
//! - values of 1000 or more are skipped silently
//! - negative values are collected across the whole input and reported
//!   together in a single error
//!
//! # Examples
//!
//! ```
//! use strcalc::calculator::add;
//!
//! assert_eq!(add(Some("1,2")).unwrap(), 3);
//! assert_eq!(add(Some("//*;\n1;2*3*4;5")).unwrap(), 15);
//! assert_eq!(add(Some("")).unwrap(), 0);
//! assert!(add(None).is_err());
//! ```

use log::debug;
use thiserror::Error;

/// Delimiter set used when the input carries no header
const DEFAULT_DELIMITERS: &[char] = &[','];

/// Values at or above this bound are excluded from the sum
const UPPER_BOUND: i32 = 1000;

/// Broad classification of a [`CalcError`], for callers that dispatch on
/// the failure category rather than the specific variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input was absent or contained an unparseable token
    InvalidArgument,
    /// The input was well-formed text but violated a value restriction
    OutOfRange,
}

impl ErrorKind {
    /// Get the error kind string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::OutOfRange => "OUT_OF_RANGE",
        }
    }
}

/// Errors that can occur while summing an input string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// No input was provided at all (distinct from the empty string)
    #[error("no input provided: parameter 'numbers' is required")]
    MissingInput,

    /// A token did not parse as a base-10 integer
    #[error("invalid characters specified: {0:?}")]
    InvalidNumber(String),

    /// The delimiter header declared `/` as a delimiter
    #[error("Invalid delimiter header specified: '/'")]
    InvalidDelimiterHeader,

    /// One or more negative numbers were found, listed in encounter order
    #[error("Negatives not allowed: {0}")]
    NegativesNotAllowed(String),
}

impl CalcError {
    /// Classify this error into the two-kind taxonomy
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingInput | Self::InvalidNumber(_) => ErrorKind::InvalidArgument,
            Self::InvalidDelimiterHeader | Self::NegativesNotAllowed(_) => ErrorKind::OutOfRange,
        }
    }
}

/// Sum the numbers in `numbers`, honoring an optional delimiter header.
///
/// `None` is the absent state and fails with
/// [`CalcError::MissingInput`]; `Some("")` returns 0 without further
/// processing. Tokens are trimmed of surrounding whitespace before
/// parsing, so newlines next to a delimiter are tolerated.
///
/// The scan is a single forward pass: negatives do not short-circuit, so
/// the [`CalcError::NegativesNotAllowed`] message always carries the
/// complete audit list.
pub fn add(numbers: Option<&str>) -> Result<i32, CalcError> {
    let Some(input) = numbers else {
        return Err(CalcError::MissingInput);
    };

    if input.is_empty() {
        return Ok(0);
    }

    let mut delimiters: Vec<char> = DEFAULT_DELIMITERS.to_vec();
    let mut body = input;

    if safe_substring(input, 0, 2) == "//" {
        // Without a usable header the input falls through to default-comma
        // parsing, where the `//` prefix fails the numeric parse below.
        if let Some(header) = extract_delimiter_header(input) {
            if header.contains('/') {
                return Err(CalcError::InvalidDelimiterHeader);
            }

            debug!("custom delimiter header: {header:?}");
            body = body_after_header(input, header);
            delimiters = header.chars().collect();
        }
    }

    let mut total = 0_i32;
    let mut negatives: Vec<String> = Vec::new();

    for token in body.split(delimiters.as_slice()) {
        let value: i32 = token
            .trim()
            .parse()
            .map_err(|_| CalcError::InvalidNumber(token.to_string()))?;

        if value >= UPPER_BOUND {
            continue;
        }

        if value < 0 {
            negatives.push(value.to_string());
        } else {
            total += value;
        }
    }

    if negatives.is_empty() {
        Ok(total)
    } else {
        Err(CalcError::NegativesNotAllowed(negatives.join(",")))
    }
}

/// Extract the delimiter characters declared between `//` and the first
/// newline. Returns `None` when the header is unterminated or empty, in
/// which case the input contains no usable header.
fn extract_delimiter_header(input: &str) -> Option<&str> {
    let rest = input.strip_prefix("//")?;
    let end = rest.find('\n')?;
    if end == 0 {
        return None;
    }
    Some(&rest[..end])
}

/// Locate the numeric body that follows a delimiter header.
///
/// The cut point is the first occurrence in the full input of the header's
/// final character, then past the next newline. Scanning the full input
/// works because that first occurrence always lands inside the header
/// itself, and it permits any number of blank lines between the header and
/// the numbers.
fn body_after_header<'a>(input: &'a str, header: &str) -> &'a str {
    let Some(last) = header.chars().next_back() else {
        return input;
    };

    let after = input
        .find(last)
        .map_or(input, |i| &input[i + last.len_utf8()..]);

    after.find('\n').map_or(after, |i| &after[i + 1..])
}

/// Return up to `length` characters of `s` starting at character index
/// `start`, clamped to the end of the string. Never panics on short input.
#[must_use]
pub fn safe_substring(s: &str, start: usize, length: usize) -> &str {
    let begin = s.char_indices().nth(start).map_or(s.len(), |(i, _)| i);
    let end = s
        .char_indices()
        .nth(start + length)
        .map_or(s.len(), |(i, _)| i);
    &s[begin..end]
}
