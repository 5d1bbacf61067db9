// quillsql-core/src/domain/result.rs

use std::borrow::Cow;
use std::fmt;

/// Engine-independent cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

/// Rows returned by a connector, in the engine's column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryOutput {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl QueryOutput {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("None"),
            Value::Boolean(true) => f.write_str("True"),
            Value::Boolean(false) => f.write_str("False"),
            Value::Integer(i) => write!(f, "{}", i),
            // `{:?}` keeps the fractional part ("3.0" rather than "3")
            Value::Real(r) => write!(f, "{:?}", r),
            Value::Text(s) => write_quoted(f, s),
            Value::Blob(bytes) => {
                f.write_str("b'")?;
                for b in bytes {
                    match b {
                        b'\\' => f.write_str("\\\\")?,
                        b'\'' => f.write_str("\\'")?,
                        0x20..=0x7e => write!(f, "{}", *b as char)?,
                        _ => write!(f, "\\x{:02x}", b)?,
                    }
                }
                f.write_str("'")
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    write!(f, "{}", quote)?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => write!(f, "\\{}", c)?,
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "{}", quote)
}

/// Longest text value shown in a rendered result, in characters.
pub const MAX_TEXT_LEN: usize = 300;
const TRUNCATION_SUFFIX: &str = "...";

/// Cut `text` to at most `max_len` characters on a word boundary, marking the
/// cut with `...`.
pub fn truncate_word(text: &str, max_len: usize) -> Cow<'_, str> {
    if max_len == 0 || text.chars().count() <= max_len {
        return Cow::Borrowed(text);
    }
    let keep = max_len.saturating_sub(TRUNCATION_SUFFIX.len());
    let end = text.char_indices().nth(keep).map_or(text.len(), |(i, _)| i);
    let head = &text[..end];
    let head = head.rsplit_once(' ').map_or(head, |(before, _)| before);
    Cow::Owned(format!("{}{}", head, TRUNCATION_SUFFIX))
}

/// Rendered as a list of row tuples, e.g. `[(5,)]`. An empty row set renders
/// as the empty string. Text values longer than `MAX_TEXT_LEN` are truncated.
impl fmt::Display for QueryOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        f.write_str("[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("(")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                match value {
                    Value::Text(text) => write_quoted(f, &truncate_word(text, MAX_TEXT_LEN))?,
                    other => write!(f, "{}", other)?,
                }
            }
            if row.len() == 1 {
                f.write_str(",")?;
            }
            f.write_str(")")?;
        }
        f.write_str("]")
    }
}
