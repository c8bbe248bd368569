//! Single-line JSON encoding.
//!
//! The CI orchestrator reads the matrix from one `key=value` line, so the
//! encoding must never contain a newline. Output uses `", "` and `": "`
//! separators and escapes every non-ASCII character (and DEL) as `\uXXXX`, which
//! keeps existing workflow files that parse or diff this value working.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

use crate::error::{MatrixError, Result};

/// Compact JSON formatter with a space after each separator and
/// ASCII-only strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.chars().all(is_printable_ascii) {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if is_printable_ascii(ch) {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Control characters below 0x20 never reach the formatter as fragments;
/// DEL does and must be escaped like non-ASCII.
fn is_printable_ascii(ch: char) -> bool {
    ch.is_ascii() && ch != '\u{7f}'
}

/// Serialize `value` to a single line using [`SpacedFormatter`].
///
/// ```
/// use netmatrix::matrix::to_single_line;
/// use std::collections::BTreeMap;
///
/// let mut map = BTreeMap::new();
/// map.insert("network", vec!["mainnet", "polygon"]);
/// assert_eq!(
///     to_single_line(&map).unwrap(),
///     r#"{"network": ["mainnet", "polygon"]}"#
/// );
/// ```
pub fn to_single_line<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    let mut ser = Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf)
        .map_err(|e| MatrixError::Json(<serde_json::Error as serde::ser::Error>::custom(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_and_array_separators() {
        let value = json!({"a": [1, 2, 3], "b": {"c": null}});
        assert_eq!(
            to_single_line(&value).unwrap(),
            r#"{"a": [1, 2, 3], "b": {"c": null}}"#
        );
    }

    #[test]
    fn empty_containers() {
        assert_eq!(to_single_line(&json!({})).unwrap(), "{}");
        assert_eq!(to_single_line(&json!([])).unwrap(), "[]");
    }

    #[test]
    fn non_ascii_is_escaped() {
        assert_eq!(to_single_line("héllo").unwrap(), r#""h\u00e9llo""#);
    }

    #[test]
    fn del_is_escaped() {
        assert_eq!(to_single_line("a\u{7f}b").unwrap(), r#""a\u007fb""#);
    }

    #[test]
    fn astral_chars_use_surrogate_pairs() {
        assert_eq!(to_single_line("🦀").unwrap(), r#""\ud83e\udd80""#);
    }

    #[test]
    fn newlines_are_escaped() {
        let out = to_single_line(&json!({"network": ["line\nbreak"]})).unwrap();
        assert!(!out.contains('\n'));
        assert!(out.contains(r"line\nbreak"));
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        assert_eq!(to_single_line(r#"a"b\c"#).unwrap(), r#""a\"b\\c""#);
    }

    #[test]
    fn output_is_valid_json() {
        let original = json!({"network": ["ünïcode", "🦀", "plain"]});
        let encoded = to_single_line(&original).unwrap();
        let decoded: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }
}
