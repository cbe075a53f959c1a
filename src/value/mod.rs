//! Values produced by the parser.
//!
//! A BRIK expression evaluates to one of five shapes: a number, a string,
//! a list, a record, or a reference to a name that was not yet bound when
//! the expression was read. This module defines those shapes, the
//! insertion-ordered map backing records and the symbol table, JSON
//! serialization through serde, and a writer that renders values back to
//! BRIK source.

pub mod ordered;
pub mod value;
pub mod writer;
