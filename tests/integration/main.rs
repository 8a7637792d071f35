//! Integration tests for the strcalc binary
//!
//! These tests exercise the compiled CLI end to end: argument handling,
//! stdin input, output modes, and exit codes.
