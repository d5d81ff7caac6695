//! Canonical JSON serialization.
//!
//! A task definition is compared and written in one fixed form so formatting
//! alone never counts as a change:
//! - 4-space indentation, `": "` between key and value
//! - object keys sorted at every depth
//! - characters outside printable ASCII escaped as `\uXXXX` (UTF-16 units)
//! - no trailing newline
//!
//! Key order comes from `serde_json::Map`, which is a `BTreeMap` as long as
//! the `preserve_order` feature stays off.

use crate::error::{CleanError, Result};
use serde::Serialize;
use serde::ser::Error as _;
use serde_json::Value;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::io::{self, Write};

const INDENT: &[u8] = b"    ";

/// Serialize `value` in canonical form.
pub fn to_canonical_string(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, AsciiFormatter::new());
    value.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| CleanError::Serialize(serde_json::Error::custom(e)))
}

/// Pretty formatter that escapes everything but printable ASCII in strings.
struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl AsciiFormatter<'_> {
    fn new() -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(INDENT),
        }
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if matches!(ch, ' '..='~') {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sorts_keys_and_indents_four_spaces() {
        let value = json!({"family": "x", "containerDefinitions": [{"name": "c", "cpu": 256}]});

        let text = to_canonical_string(&value).unwrap();

        assert_eq!(
            text,
            r#"{
    "containerDefinitions": [
        {
            "cpu": 256,
            "name": "c"
        }
    ],
    "family": "x"
}"#
        );
    }

    #[test]
    fn empty_collections_stay_on_one_line() {
        let value = json!({"a": [], "b": {}, "c": null, "d": true});

        let text = to_canonical_string(&value).unwrap();

        assert_eq!(
            text,
            "{\n    \"a\": [],\n    \"b\": {},\n    \"c\": null,\n    \"d\": true\n}"
        );
    }

    #[test]
    fn no_trailing_newline() {
        let text = to_canonical_string(&json!({"family": "x"})).unwrap();
        assert!(text.ends_with('}'));
    }

    #[test]
    fn non_ascii_is_escaped() {
        let value = json!({"description": "caf\u{e9} \u{1f680}"});

        let text = to_canonical_string(&value).unwrap();

        assert_eq!(
            text,
            "{\n    \"description\": \"caf\\u00e9 \\ud83d\\ude80\"\n}"
        );
    }

    #[test]
    fn control_characters_and_delete_are_escaped() {
        let value = json!(["line\nbreak\ttab", "quote\"back\\slash", "del\u{7f}"]);

        let text = to_canonical_string(&value).unwrap();

        assert_eq!(
            text,
            "[\n    \"line\\nbreak\\ttab\",\n    \"quote\\\"back\\\\slash\",\n    \"del\\u007f\"\n]"
        );
    }

    #[test]
    fn escaped_output_parses_back_to_the_same_value() {
        let value = json!({"name": "\u{fc}ber", "labels": {"k\u{e9}y": "v"}});

        let text = to_canonical_string(&value).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();

        assert!(text.is_ascii());
        assert_eq!(parsed, value);
    }

    #[test]
    fn canonical_form_is_stable() {
        let value = json!({"b": [1, 2.5, "three"], "a": {"z": 1, "y": [{"x": null}]}});

        let once = to_canonical_string(&value).unwrap();
        let reparsed: Value = serde_json::from_str(&once).unwrap();

        assert_eq!(to_canonical_string(&reparsed).unwrap(), once);
    }
}
