use serde::{Serialize, Serializer};

use crate::{
    config::glyphs::Glyphs,
    value::{
        ordered::OrderedMap,
        value::{Reference, Value},
        writer::write_bindings,
    },
};

/// Outcome of looking a name up while an expression is being read.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(Value),
    Unresolved(String),
}

impl Resolution {
    /// Folds an unresolved name into a `Reference` placeholder.
    pub fn into_value(self) -> Value {
        match self {
            Resolution::Resolved(value) => value,
            Resolution::Unresolved(name) => Value::Reference(Reference::new(name)),
        }
    }
}

/// Top-level bindings, in source order.
///
/// The parser fills this in as it reads assignments and uses it to resolve
/// identifiers; once parsing finishes it is handed to the caller as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    bindings: OrderedMap<Value>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name`, replacing any earlier binding. Returns the old value.
    pub fn bind(&mut self, name: String, value: Value) -> Option<Value> {
        self.bindings.insert(name, value)
    }

    /// Looks `name` up as it is bound right now. A resolved value is a copy,
    /// so rebinding the name later leaves it untouched.
    pub fn resolve(&self, name: &str) -> Resolution {
        match self.bindings.get(name) {
            Some(value) => Resolution::Resolved(value.clone()),
            None => Resolution::Unresolved(String::from(name)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys()
    }

    pub fn to_source(&self, glyphs: &Glyphs) -> String {
        write_bindings(&self.bindings, glyphs)
    }
}

impl IntoIterator for SymbolTable {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.into_iter()
    }
}

impl Serialize for SymbolTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bindings.serialize(serializer)
    }
}
