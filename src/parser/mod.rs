//! Parser module for building the symbol table.
//!
//! This module contains the parser that turns a stream of tokens into the
//! table of top-level bindings. It is a lookahead-1 recursive descent over
//! the grammar:
//!
//! ```text
//! program    ::= statement* EOF
//! statement  ::= COMMA | assignment
//! assignment ::= IDENT ASSIGN expr
//! expr       ::= STRING | NUMBER | IDENT | list | record
//! list       ::= LIST_OPEN (expr (COMMA expr)*)? LIST_CLOSE
//! record     ::= DICT_OPEN (field (COMMA field)*)? DICT_CLOSE
//! field      ::= IDENT ASSIGN expr
//! ```
//!
//! Stray commas are skipped at the head of every loop: between statements,
//! and before list elements and record fields.
//!
//! Identifiers used as values are resolved eagerly against the bindings
//! seen so far. A name that is not bound yet becomes a reference
//! placeholder; later bindings never patch it.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod symbols;
