//! strcalc - sums delimiter-separated number strings
//!
//! This library parses a text input containing a list of base-10 integers,
//! optionally preceded by a custom-delimiter header of the form
//! `//<delimiters>\n`, validates every token, and reduces the valid tokens
//! to a sum. See [`calculator::add`] for the full contract.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod calculator;
pub mod output;
