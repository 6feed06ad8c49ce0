// SPDX-License-Identifier: PMPL-1.0-or-later

//! Deterministic serializer for descriptor trees.
//!
//! Output follows Xcode's layout: the `// !$*UTF8*$!` header, tab
//! indentation, `key = value;` dictionary entries, arrays with trailing
//! commas. Strings are written bare only when every character is in the
//! set Xcode itself leaves unquoted, so `en.lproj/InfoPlist.strings`
//! stays bare while `zh-Hans.lproj/InfoPlist.strings` and `<group>` get
//! quotes. Reference comments (`/* name */`) are not re-emitted.

use super::{Dict, Value};

/// Serializes a whole descriptor, header line included.
pub fn write_document(root: &Dict) -> String {
    let mut out = String::from("// !$*UTF8*$!\n");
    write_dict(&mut out, root, 0);
    out.push('\n');
    out
}

fn write_value(out: &mut String, value: &Value, indent: usize) {
    match value {
        Value::String(s) => out.push_str(&format_string(s)),
        Value::Array(items) => write_array(out, items, indent),
        Value::Dict(entries) => write_dict(out, entries, indent),
    }
}

fn write_dict(out: &mut String, entries: &Dict, indent: usize) {
    out.push_str("{\n");
    for (key, value) in entries {
        push_tabs(out, indent + 1);
        out.push_str(&format_string(key));
        out.push_str(" = ");
        write_value(out, value, indent + 1);
        out.push_str(";\n");
    }
    push_tabs(out, indent);
    out.push('}');
}

fn write_array(out: &mut String, items: &[Value], indent: usize) {
    out.push_str("(\n");
    for item in items {
        push_tabs(out, indent + 1);
        write_value(out, item, indent + 1);
        out.push_str(",\n");
    }
    push_tabs(out, indent);
    out.push(')');
}

fn push_tabs(out: &mut String, count: usize) {
    for _ in 0..count {
        out.push('\t');
    }
}

fn format_string(value: &str) -> String {
    if needs_quoting(value) {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push('"');
        for ch in value.chars() {
            match ch {
                '"' => quoted.push_str("\\\""),
                '\\' => quoted.push_str("\\\\"),
                '\n' => quoted.push_str("\\n"),
                '\t' => quoted.push_str("\\t"),
                '\r' => quoted.push_str("\\r"),
                other => quoted.push(other),
            }
        }
        quoted.push('"');
        quoted
    } else {
        value.to_string()
    }
}

fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || !value
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '$' | '.' | '/'))
}
