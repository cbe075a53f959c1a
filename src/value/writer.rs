use crate::config::glyphs::Glyphs;

use super::{
    ordered::OrderedMap,
    value::{Number, Value},
};

/// Renders `value` as BRIK source that reads back to an equal value.
///
/// References are written as their bare name, so they only read back as
/// references while that name is still unbound.
pub fn write_value(value: &Value, glyphs: &Glyphs) -> String {
    let mut output = String::new();
    write_into(&mut output, value, glyphs);
    output
}

/// Renders a whole binding table, one `name := value` line per entry.
pub fn write_bindings(bindings: &OrderedMap<Value>, glyphs: &Glyphs) -> String {
    let mut output = String::new();

    for (name, value) in bindings.iter() {
        output.push_str(name);
        output.push(' ');
        output.push_str(glyphs.assign());
        output.push(' ');
        write_into(&mut output, value, glyphs);
        output.push('\n');
    }

    output
}

fn write_into(output: &mut String, value: &Value, glyphs: &Glyphs) {
    match value {
        Value::Number(number) => write_number(output, *number),
        Value::String(text) => write_string(output, text),
        Value::Reference(reference) => output.push_str(&reference.name),
        Value::List(items) => {
            output.push(glyphs.list_open());
            for (i, item) in items.iter().enumerate() {
                output.push_str(if i == 0 { " " } else { ", " });
                write_into(output, item, glyphs);
            }
            output.push(' ');
            output.push(glyphs.list_close());
        }
        Value::Record(record) => {
            output.push(glyphs.record_open());
            for (i, (key, field)) in record.iter().enumerate() {
                output.push_str(if i == 0 { " " } else { ", " });
                output.push_str(key);
                output.push(' ');
                output.push_str(glyphs.assign());
                output.push(' ');
                write_into(output, field, glyphs);
            }
            output.push(' ');
            output.push(glyphs.record_close());
        }
    }
}

fn write_number(output: &mut String, number: Number) {
    match number {
        Number::Integer(value) => output.push_str(&value.to_string()),
        Number::Float(value) => {
            let text = value.to_string();
            output.push_str(&text);
            // Keep the dot so the literal reads back as a float.
            if value.is_finite() && !text.contains('.') {
                output.push_str(".0");
            }
        }
    }
}

fn write_string(output: &mut String, text: &str) {
    output.push('"');
    for ch in text.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\t' => output.push_str("\\t"),
            _ => output.push(ch),
        }
    }
    output.push('"');
}
