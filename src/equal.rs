//! Document-level equality of objects.
//!
//! [`equal_objects`] compares two objects the way a reader of the document
//! sees them: references are followed through a [`Resolver`] and strings are
//! compared by the bytes they denote rather than by how they were written.

use crate::{Array, Dict, Error, Object, Resolver, Result};

/// Compares two objects after resolving references.
///
/// - Both operands are resolved to their terminal non-reference objects first.
/// - Strings compare by decoded bytes: `(A\102)` equals `(AB)`, `<41 42>` equals `<4142>`.
/// - Dictionaries need the same keys, with values compared recursively.
/// - Arrays need the same length, with elements compared pairwise in order.
/// - Different variants are never equal, so `Integer(1)` differs from `Real(1.0)`
///   and a literal differs from a hex string with the same bytes.
///
/// # Errors
///
/// Returns an error if a reference cannot be resolved or a hex string does
/// not decode. The comparison stops at the first error.
///
/// # Examples
///
/// ```rust
/// use pdfobj::{equal_objects, IndirectRef, Object, XRefTable};
///
/// let mut table = XRefTable::new();
/// table.insert(IndirectRef::new(5, 0), Object::Integer(5));
///
/// let reference = Object::reference(5, 0);
/// assert!(equal_objects(&reference, &Object::Integer(5), &table).unwrap());
/// ```
pub fn equal_objects<R: Resolver + ?Sized>(a: &Object, b: &Object, table: &R) -> Result<bool> {
    let a = table.resolve(a)?;
    let b = table.resolve(b)?;

    let equal = match (a, b) {
        (Object::Null, Object::Null) => true,
        (Object::Boolean(x), Object::Boolean(y)) => x == y,
        (Object::Integer(x), Object::Integer(y)) => x == y,
        (Object::Real(x), Object::Real(y)) => x == y,
        (Object::Name(x), Object::Name(y)) => x == y,
        (Object::StringLiteral(x), Object::StringLiteral(y)) => {
            x == y || decode_literal(x) == decode_literal(y)
        }
        (Object::HexString(x), Object::HexString(y)) => decode_hex(x)? == decode_hex(y)?,
        (Object::Dict(x), Object::Dict(y)) => equal_dicts(x, y, table)?,
        (Object::Array(x), Object::Array(y)) => equal_arrays(x, y, table)?,
        // Resolved operands are never references.
        (
            Object::Null
            | Object::Boolean(_)
            | Object::Integer(_)
            | Object::Real(_)
            | Object::Name(_)
            | Object::IndirectRef(_)
            | Object::StringLiteral(_)
            | Object::HexString(_)
            | Object::Dict(_)
            | Object::Array(_),
            _,
        ) => false,
    };

    Ok(equal)
}

fn equal_dicts<R: Resolver + ?Sized>(a: &Dict, b: &Dict, table: &R) -> Result<bool> {
    if a.len() != b.len() {
        return Ok(false);
    }
    for (key, value) in a {
        let Some(other) = b.get(key) else {
            return Ok(false);
        };
        if !equal_objects(value, other, table)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn equal_arrays<R: Resolver + ?Sized>(a: &Array, b: &Array, table: &R) -> Result<bool> {
    if a.len() != b.len() {
        return Ok(false);
    }
    for (x, y) in a.iter().zip(b.iter()) {
        if !equal_objects(x, y, table)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// White-space characters of the document grammar.
#[inline]
pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(c, '\0' | '\t' | '\n' | '\x0C' | '\r' | ' ')
}

/// Decodes the content of a string literal.
///
/// Handles the escapes `\n \r \t \b \f \( \) \\`, octal escapes of up to
/// three digits, backslash line continuations, and normalizes bare end-of-line
/// markers to `\n`. An unknown escape yields the escaped character itself and
/// a trailing lone backslash stands for itself.
///
/// # Examples
///
/// ```rust
/// use pdfobj::decode_literal;
///
/// assert_eq!(decode_literal("a\\(b\\)"), b"a(b)");
/// assert_eq!(decode_literal("\\101\\102"), b"AB");
/// assert_eq!(decode_literal("one\\\ntwo"), b"onetwo");
/// ```
#[must_use]
pub fn decode_literal(raw: &str) -> Vec<u8> {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        i += 1;
        match byte {
            b'\\' => {
                let Some(&escaped) = bytes.get(i) else {
                    out.push(b'\\');
                    break;
                };
                i += 1;
                match escaped {
                    b'n' => out.push(b'\n'),
                    b'r' => out.push(b'\r'),
                    b't' => out.push(b'\t'),
                    b'b' => out.push(0x08),
                    b'f' => out.push(0x0C),
                    b'0'..=b'7' => {
                        let mut value = u32::from(escaped - b'0');
                        for _ in 0..2 {
                            match bytes.get(i) {
                                Some(&d @ b'0'..=b'7') => {
                                    value = value * 8 + u32::from(d - b'0');
                                    i += 1;
                                }
                                _ => break,
                            }
                        }
                        // High-order overflow is ignored.
                        out.push((value & 0xFF) as u8);
                    }
                    b'\r' => {
                        if bytes.get(i) == Some(&b'\n') {
                            i += 1;
                        }
                    }
                    b'\n' => {}
                    other => out.push(other),
                }
            }
            b'\r' => {
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                out.push(b'\n');
            }
            other => out.push(other),
        }
    }

    out
}

/// Decodes the content of a hex string.
///
/// White space is ignored and an odd final digit is padded with `0`.
///
/// # Errors
///
/// Returns [`Error::InvalidHexString`] when a character is neither a hex
/// digit nor white space.
///
/// # Examples
///
/// ```rust
/// use pdfobj::decode_hex;
///
/// assert_eq!(decode_hex("48 65 6C").unwrap(), b"Hel");
/// assert_eq!(decode_hex("901FA").unwrap(), vec![0x90, 0x1F, 0xA0]);
/// assert!(decode_hex("4G").is_err());
/// ```
pub fn decode_hex(raw: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(raw.len() / 2 + 1);
    let mut high: Option<u8> = None;

    for c in raw.chars() {
        if is_whitespace(c) {
            continue;
        }
        let nibble = c
            .to_digit(16)
            .ok_or_else(|| Error::invalid_hex(raw, c))? as u8;
        match high.take() {
            Some(h) => out.push(h << 4 | nibble),
            None => high = Some(nibble),
        }
    }
    if let Some(h) = high {
        out.push(h << 4);
    }

    Ok(out)
}
