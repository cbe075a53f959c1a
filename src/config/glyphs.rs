use thiserror::Error;

/// The configurable punctuation of the language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    list_open: char,
    list_close: char,
    record_open: char,
    record_close: char,
    assign: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("assignment operator must be exactly two characters, got {operator:?}")]
    AssignmentLength { operator: String },
    #[error("glyph {glyph:?} is used for more than one bracket")]
    DuplicateGlyph { glyph: char },
    #[error("glyph {glyph:?} is reserved by the lexer")]
    ReservedGlyph { glyph: char },
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs {
            list_open: '¡',
            list_close: '!',
            record_open: '¿',
            record_close: '?',
            assign: String::from(":="),
        }
    }
}

impl Glyphs {
    pub fn new(
        list_open: char,
        list_close: char,
        record_open: char,
        record_close: char,
        assign: &str,
    ) -> Result<Self, ConfigError> {
        if assign.chars().count() != 2 {
            return Err(ConfigError::AssignmentLength {
                operator: String::from(assign),
            });
        }

        let brackets = [list_open, list_close, record_open, record_close];

        for glyph in brackets.iter().copied().chain(assign.chars()) {
            if is_reserved(glyph) {
                return Err(ConfigError::ReservedGlyph { glyph });
            }
        }

        for (i, glyph) in brackets.iter().enumerate() {
            if brackets[i + 1..].contains(glyph) {
                return Err(ConfigError::DuplicateGlyph { glyph: *glyph });
            }
        }

        Ok(Glyphs {
            list_open,
            list_close,
            record_open,
            record_close,
            assign: String::from(assign),
        })
    }

    pub fn list_open(&self) -> char {
        self.list_open
    }

    pub fn list_close(&self) -> char {
        self.list_close
    }

    pub fn record_open(&self) -> char {
        self.record_open
    }

    pub fn record_close(&self) -> char {
        self.record_close
    }

    pub fn assign(&self) -> &str {
        &self.assign
    }
}

/// Characters that already start (or continue) another token kind.
fn is_reserved(glyph: char) -> bool {
    glyph.is_ascii_alphanumeric() || glyph.is_whitespace() || "#\",.-_\\".contains(glyph)
}
