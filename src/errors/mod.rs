//! Error types and error handling for the front end.
//!
//! This module defines the errors raised while reading BRIK source. It
//! includes:
//!
//! - Error structures with line/column position information
//! - Lexical and syntax error variants
//! - Error naming and suggestions used when rendering diagnostics

pub mod errors;
