//! JSON formatter for topology files.
//!
//! Output is pretty-printed with a two space indent, except that the array
//! value of every `accessPoints` key is written on one line with no whitespace:
//!
//! ```text
//! {
//!   "localRoots": [
//!     {
//!       "accessPoints": [{"friendly_name":"a","address":"10.0.0.1","port":3001}],
//!       "advertise": false,
//! ```
//!
//! All strings are written as pure ASCII; anything outside `' '..='~'` becomes
//! a lowercase `\uXXXX` escape.

use serde_json::ser::Formatter;
use std::io::{self, Write};

pub const COMPACT_KEY: &str = "accessPoints";

const INDENT: &[u8] = b"  ";

#[derive(Debug, Default)]
pub struct TopologyFormatter {
    current_indent: usize,
    has_value: bool,
    // > 0 while inside a compact array (counts nested arrays)
    compact_depth: usize,
    // the value about to be written belongs to COMPACT_KEY
    compact_next: bool,
    in_key: bool,
    key: String,
}

impl TopologyFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    fn compact(&self) -> bool {
        self.compact_depth > 0
    }
}

fn indent<W>(wr: &mut W, n: usize) -> io::Result<()>
where
    W: ?Sized + Write,
{
    for _ in 0..n {
        wr.write_all(INDENT)?;
    }
    Ok(())
}

impl Formatter for TopologyFormatter {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if self.compact_next {
            self.compact_next = false;
            self.compact_depth = 1;
        } else if self.compact() {
            self.compact_depth += 1;
        } else {
            self.current_indent += 1;
            self.has_value = false;
        }
        writer.write_all(b"[")
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if self.compact() {
            self.compact_depth -= 1;
        } else {
            self.current_indent -= 1;
            if self.has_value {
                writer.write_all(b"\n")?;
                indent(writer, self.current_indent)?;
            }
        }
        writer.write_all(b"]")
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if self.compact() {
            if first {
                Ok(())
            } else {
                writer.write_all(b",")
            }
        } else {
            writer.write_all(if first { b"\n" } else { b",\n" })?;
            indent(writer, self.current_indent)
        }
    }

    fn end_array_value<W>(&mut self, _writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if !self.compact() {
            self.has_value = true;
        }
        Ok(())
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if !self.compact() {
            self.current_indent += 1;
            self.has_value = false;
        }
        writer.write_all(b"{")
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if !self.compact() {
            self.current_indent -= 1;
            if self.has_value {
                writer.write_all(b"\n")?;
                indent(writer, self.current_indent)?;
            }
        }
        writer.write_all(b"}")
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.in_key = true;
        self.key.clear();
        if self.compact() {
            if first {
                Ok(())
            } else {
                writer.write_all(b",")
            }
        } else {
            writer.write_all(if first { b"\n" } else { b",\n" })?;
            indent(writer, self.current_indent)
        }
    }

    fn end_object_key<W>(&mut self, _writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.in_key = false;
        Ok(())
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if self.compact() {
            writer.write_all(b":")
        } else {
            self.compact_next = self.key == COMPACT_KEY;
            writer.write_all(b": ")
        }
    }

    fn end_object_value<W>(&mut self, _writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.compact_next = false;
        if !self.compact() {
            self.has_value = true;
        }
        Ok(())
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if self.in_key {
            self.key.push_str(fragment);
        }

        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
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
    use serde::Serialize;
    use serde_json::json;

    fn fmt<T: Serialize>(value: &T) -> String {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, TopologyFormatter::new());
        value.serialize(&mut ser).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_pretty_without_compact_key_matches_serde_pretty() {
        let v = json!({"a": [1, 2, {"b": []}], "c": {}, "d": "x"});
        assert_eq!(fmt(&v), serde_json::to_string_pretty(&v).unwrap());
    }

    #[test]
    fn test_access_points_inline() {
        #[derive(Serialize)]
        struct Group {
            #[serde(rename = "accessPoints")]
            access_points: Vec<(u8, Vec<u8>)>,
            advertise: bool,
        }
        let v = vec![Group { access_points: vec![(1, vec![2, 3]), (4, vec![])], advertise: true }];
        let expected = "[\n  {\n    \"accessPoints\": [[1,[2,3]],[4,[]]],\n    \"advertise\": true\n  }\n]";
        assert_eq!(fmt(&v), expected);
    }

    #[test]
    fn test_empty_access_points() {
        #[derive(Serialize)]
        struct Group {
            #[serde(rename = "accessPoints")]
            access_points: Vec<u8>,
        }
        assert_eq!(fmt(&Group { access_points: vec![] }), "{\n  \"accessPoints\": []\n}");
    }

    #[test]
    fn test_non_ascii_escaped() {
        assert_eq!(fmt(&"caf\u{e9}"), "\"caf\\u00e9\"");
        assert_eq!(fmt(&"\u{1F600}"), "\"\\ud83d\\ude00\"");
        assert_eq!(fmt(&"tab\there"), "\"tab\\there\"");
        assert_eq!(fmt(&"del\u{7f}"), "\"del\\u007f\"");
    }
}
