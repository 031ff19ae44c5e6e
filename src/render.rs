//! Recursive rendering of object graphs.
//!
//! Both string forms walk the graph with the same two functions,
//! [`write_array`] and [`write_dict`]. The rules that differ between the forms
//! live in a [`Form`]:
//!
//! | | debug ([`DebugForm`]) | canonical ([`CanonicalForm`]) |
//! |---|---|---|
//! | nested array in array | separator, then `[...]` one level deeper | `[...]`, no separator |
//! | nested dict in array | own indented block, next sibling starts fresh | `<<...>>`, no separator |
//! | dict entries | one `<Key, value>` line per entry | `/Key value` run |
//! | scalars | diagnostic form, never fails | exact syntax or a [`Fault`] |

use crate::equal::is_whitespace;
use crate::fault::{Fault, FaultReporter};
use crate::{Array, Dict, Object};

/// Rules of one string form.
pub(crate) trait Form {
    /// Writes a value that is neither a dictionary nor an array.
    fn scalar(&self, out: &mut String, object: &Object);

    /// Separator written before an array nested in an array.
    fn container_separator<'s>(&self, separator: &'s str) -> &'s str;

    /// Writes a dictionary nested in an array rendered at `level`.
    ///
    /// Returns `true` if the next sibling should be written as if it came first.
    fn dict_in_array(&self, out: &mut String, dict: &Dict, separator: &str, level: usize)
        -> bool;

    fn open_dict(&self, out: &mut String);

    fn dict_entry(&self, out: &mut String, key: &str, value: &Object, level: usize);

    fn close_dict(&self, out: &mut String, level: usize);
}

pub(crate) fn write_object<F: Form>(form: &F, out: &mut String, object: &Object, level: usize) {
    match object {
        Object::Dict(dict) => write_dict(form, out, dict, level),
        Object::Array(array) => write_array(form, out, array, level),
        Object::Null
        | Object::Boolean(_)
        | Object::Integer(_)
        | Object::Real(_)
        | Object::StringLiteral(_)
        | Object::HexString(_)
        | Object::Name(_)
        | Object::IndirectRef(_) => form.scalar(out, object),
    }
}

pub(crate) fn write_array<F: Form>(form: &F, out: &mut String, array: &Array, level: usize) {
    out.push('[');
    let mut first = true;

    for entry in array {
        let separator = if first { "" } else { " " };
        first = false;

        match entry {
            Object::Dict(dict) => first = form.dict_in_array(out, dict, separator, level),
            Object::Array(nested) => {
                out.push_str(form.container_separator(separator));
                write_array(form, out, nested, level + 1);
            }
            Object::Null
            | Object::Boolean(_)
            | Object::Integer(_)
            | Object::Real(_)
            | Object::StringLiteral(_)
            | Object::HexString(_)
            | Object::Name(_)
            | Object::IndirectRef(_) => {
                out.push_str(separator);
                form.scalar(out, entry);
            }
        }
    }

    out.push(']');
}

pub(crate) fn write_dict<F: Form>(form: &F, out: &mut String, dict: &Dict, level: usize) {
    form.open_dict(out);
    for (key, value) in dict {
        form.dict_entry(out, key, value, level);
    }
    form.close_dict(out, level);
}

fn push_tabs(out: &mut String, level: usize) {
    out.extend(std::iter::repeat('\t').take(level));
}

/// The human-oriented form used in logs.
pub(crate) struct DebugForm;

impl Form for DebugForm {
    fn scalar(&self, out: &mut String, object: &Object) {
        out.push_str(&object.to_string());
    }

    fn container_separator<'s>(&self, separator: &'s str) -> &'s str {
        separator
    }

    fn dict_in_array(
        &self,
        out: &mut String,
        dict: &Dict,
        _separator: &str,
        level: usize,
    ) -> bool {
        out.push('\n');
        push_tabs(out, level);
        write_dict(self, out, dict, level + 1);
        out.push('\n');
        push_tabs(out, level);
        true
    }

    fn open_dict(&self, out: &mut String) {
        out.push_str("<<\n");
    }

    fn dict_entry(&self, out: &mut String, key: &str, value: &Object, level: usize) {
        push_tabs(out, level);
        out.push('<');
        out.push_str(key);
        out.push_str(", ");
        write_object(self, out, value, level + 1);
        out.push_str(">\n");
    }

    fn close_dict(&self, out: &mut String, level: usize) {
        push_tabs(out, level.saturating_sub(1));
        out.push_str(">>");
    }
}

/// The exact on-disk form.
pub(crate) struct CanonicalForm<'r> {
    reporter: &'r dyn FaultReporter,
}

impl<'r> CanonicalForm<'r> {
    pub(crate) fn new(reporter: &'r dyn FaultReporter) -> Self {
        CanonicalForm { reporter }
    }
}

impl Form for CanonicalForm<'_> {
    fn scalar(&self, out: &mut String, object: &Object) {
        match object {
            Object::Null => out.push_str("null"),
            Object::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
            Object::Integer(i) => out.push_str(&i.to_string()),
            Object::Real(r) => {
                if !r.is_finite() {
                    self.reporter.fatal(Fault::NonFiniteReal(*r));
                }
                out.push_str(&format_real(*r));
            }
            Object::StringLiteral(raw) => write_literal(out, raw),
            Object::HexString(raw) => {
                if raw
                    .chars()
                    .any(|c| !c.is_ascii_hexdigit() && !is_whitespace(c))
                {
                    self.reporter.fatal(Fault::MalformedHexString(raw.clone()));
                }
                out.push('<');
                out.push_str(raw);
                out.push('>');
            }
            Object::Name(name) => write_name(out, name),
            Object::IndirectRef(r) => out.push_str(&r.to_string()),
            Object::Dict(dict) => write_dict(self, out, dict, 0),
            Object::Array(array) => write_array(self, out, array, 0),
        }
    }

    fn container_separator<'s>(&self, _separator: &'s str) -> &'s str {
        ""
    }

    fn dict_in_array(
        &self,
        out: &mut String,
        dict: &Dict,
        _separator: &str,
        level: usize,
    ) -> bool {
        write_dict(self, out, dict, level + 1);
        false
    }

    fn open_dict(&self, out: &mut String) {
        out.push_str("<<");
    }

    fn dict_entry(&self, out: &mut String, key: &str, value: &Object, level: usize) {
        write_name(out, key);
        if !self_delimiting(value) {
            out.push(' ');
        }
        write_object(self, out, value, level + 1);
    }

    fn close_dict(&self, out: &mut String, _level: usize) {
        out.push_str(">>");
    }
}

/// Values whose canonical form starts with a delimiter and needs no space
/// after a dictionary key.
fn self_delimiting(value: &Object) -> bool {
    match value {
        Object::Name(_)
        | Object::StringLiteral(_)
        | Object::HexString(_)
        | Object::Dict(_)
        | Object::Array(_) => true,
        Object::Null
        | Object::Boolean(_)
        | Object::Integer(_)
        | Object::Real(_)
        | Object::IndirectRef(_) => false,
    }
}

const NAME_DELIMITERS: &[u8] = b"()<>[]{}/%#";

/// Writes `/name`, escaping delimiters and bytes outside `!`..`~` as `#xx`.
pub(crate) fn write_name(out: &mut String, name: &str) {
    out.push('/');
    for byte in name.bytes() {
        if (0x21..=0x7e).contains(&byte) && !NAME_DELIMITERS.contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("#{:02X}", byte));
        }
    }
}

/// Fixed notation with up to 12 decimals. At least one decimal stays so the
/// value reads back as a real.
pub(crate) fn format_real(value: f64) -> String {
    let mut text = format!("{:.12}", value);
    let len = text.trim_end_matches('0').len();
    text.truncate(len);
    if text.ends_with('.') {
        text.push('0');
    }
    if text == "-0.0" {
        text.remove(0);
    }
    text
}

/// Writes `(raw)`. Parentheses without a partner and a trailing lone
/// backslash are escaped, so the literal closes where its content ends.
pub(crate) fn write_literal(out: &mut String, raw: &str) {
    let bytes = raw.as_bytes();
    let mut escape_at = vec![false; bytes.len()];
    let mut open = Vec::new();
    let mut dangling = false;

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                dangling = i + 1 == bytes.len();
                i += 1;
            }
            b'(' => open.push(i),
            b')' => {
                if open.pop().is_none() {
                    escape_at[i] = true;
                }
            }
            _ => {}
        }
        i += 1;
    }
    for index in open {
        escape_at[index] = true;
    }

    out.push('(');
    for (index, c) in raw.char_indices() {
        if escape_at[index] {
            out.push('\\');
        }
        out.push(c);
    }
    if dangling {
        out.push('\\');
    }
    out.push(')');
}

pub(crate) fn debug_form(object: &Object, level: usize) -> String {
    let mut out = String::new();
    write_object(&DebugForm, &mut out, object, level);
    out
}

pub(crate) fn canonical_form(object: &Object, reporter: &dyn FaultReporter) -> String {
    let mut out = String::with_capacity(64);
    write_object(&CanonicalForm::new(reporter), &mut out, object, 0);
    out
}
