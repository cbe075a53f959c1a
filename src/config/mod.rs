//! Front end configuration.
//!
//! BRIK writes its composites with non-ASCII bracket glyphs (`¡ ... !` for
//! lists, `¿ ... ?` for records) and binds names with `:=`. The glyph set
//! is configurable so the same lexer can read dialects that swap the
//! bracket characters. The set is validated once, up front, so the lexer
//! table built from it never has to deal with colliding patterns.

pub mod glyphs;
