//! A dynamically typed value, for data whose element types are only known at runtime
//!
//! Arrays are [Containers](Container) of values, so nested and heterogeneous data
//! like `[[1, 2, 3], ['a', 'b', 'c'], [false, true, true]]` can be handled by every
//! helper in this crate.

mod cursor;
mod parse;

use std::{cmp::Ordering, fmt};

use error_derive::Error;

use crate::{flatten::Nest, ordering::Orderable, Container, Key};

pub use parse::{ParseError, ParseErrorKind};

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Container<Value>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EntryError {
    #[msg = "value is not an array"]
    NotAnArray,

    #[msg = "entry is not a [key, value] pair"]
    MalformedEntry,

    #[msg = "arrays cannot be used as keys"]
    ArrayKey,
}

impl Value {
    /// The name of the runtime type of this value
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "double",
            Self::Str(_) => "string",
            Self::Array(_) => "array",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(string) => Some(string),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_array(&self) -> Option<&Container<Self>> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Return `true` if this is an array holding a value strictly equal to `needle`
    #[must_use]
    pub fn contains(&self, needle: &Self) -> bool {
        self.as_array()
            .is_some_and(|array| array.values().any(|value| value == needle))
    }

    /// The numeric interpretation of a scalar, if it has one
    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Null => Some(0.),
            Self::Bool(boolean) => Some(f64::from(u8::from(*boolean))),
            Self::Int(int) => Some(*int as f64),
            Self::Float(float) => Some(*float),
            Self::Str(_) | Self::Array(_) => None,
        }
    }

    /// Values of a lower rank always order before values of a higher rank
    const fn rank(&self) -> u8 {
        match self {
            Self::Null | Self::Bool(_) | Self::Int(_) | Self::Float(_) => 0,
            Self::Str(_) => 1,
            Self::Array(_) => 2,
        }
    }

    /// Return the entries of an array as `[key, value]` pairs
    ///
    /// Examples
    ///
    /// ```
    /// # use backfill::Value;
    /// let value: Value = "{a: 1, b: 'x'}".parse().unwrap();
    /// let entries = value.to_entries().unwrap();
    /// assert_eq!(entries.to_string(), r#"[["a", 1], ["b", "x"]]"#);
    /// ```
    pub fn to_entries(&self) -> Result<Self, EntryError> {
        let array = self.as_array().ok_or(EntryError::NotAnArray)?;

        let entries = array.iter().map(|(key, value)| {
            Self::Array(Container::from_values([Self::from(key.clone()), value.clone()]))
        });

        Ok(Self::Array(Container::from_values(entries)))
    }

    /// Build an array from a list of `[key, value]` pairs
    ///
    /// Every entry must have a value at index `0` (the key) and at index `1`.
    /// Keys are normalized like array keys in [parsed](std::str::FromStr) literals:
    /// decimal strings become integers, booleans become `0` or `1`, floats are
    /// truncated and `null` becomes the empty string.
    pub fn restore_entries(&self) -> Result<Self, EntryError> {
        let entries = self.as_array().ok_or(EntryError::NotAnArray)?;
        let mut restored = Container::with_capacity(entries.len());

        for entry in entries.values() {
            let pair = entry.as_array().ok_or(EntryError::MalformedEntry)?;
            let (Some(key), Some(value)) = (pair.get(0), pair.get(1)) else {
                return Err(EntryError::MalformedEntry);
            };

            restored.insert(Key::try_from(key)?, value.clone());
        }

        Ok(Self::Array(restored))
    }
}

/// Interpret a string key the way array keys are interpreted
///
/// Strings holding a canonical decimal integer (no sign other than `-`, no leading zeros)
/// become integer keys.
pub(crate) fn normalize_string_key(key: String) -> Key {
    match key.parse::<i64>() {
        Ok(int) if int.to_string() == key => Key::Int(int),
        _ => Key::Str(key),
    }
}

impl TryFrom<&Value> for Key {
    type Error = EntryError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let key = match value {
            Value::Null => Self::Str(String::new()),
            Value::Bool(boolean) => Self::Int(i64::from(*boolean)),
            Value::Int(int) => Self::Int(*int),
            Value::Float(float) => Self::Int(float.trunc() as i64),
            Value::Str(string) => normalize_string_key(string.clone()),
            Value::Array(_) => return Err(EntryError::ArrayKey),
        };

        Ok(key)
    }
}

impl From<Key> for Value {
    fn from(value: Key) -> Self {
        match value {
            Key::Int(int) => Self::Int(int),
            Key::Str(string) => Self::Str(string),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Container<Value>> for Value {
    fn from(value: Container<Value>) -> Self {
        Self::Array(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(Container::from(value))
    }
}

impl Orderable for Value {
    /// A total order over values of every type
    ///
    /// Scalars order before strings and strings before arrays. Scalars compare
    /// numerically, with `null` as `0`, booleans as `0` and `1` and NaN after every
    /// other number. Strings compare byte by byte. Shorter arrays order before
    /// longer ones, equally long arrays compare value by value.
    ///
    /// Unlike a comparison that coerces both sides to strings as soon as one of
    /// them is a string, `"9"` does not order between `9.5` and `10` here, so the
    /// sorted result never depends on the order of the input.
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Array(a), Self::Array(b)) => a.len().cmp(&b.len()).then_with(|| {
                a.values()
                    .zip(b.values())
                    .map(|(a, b)| a.compare(b))
                    .find(|ordering| ordering.is_ne())
                    .unwrap_or(Ordering::Equal)
            }),
            (Self::Str(a), Self::Str(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => compare_numbers(a, b),
                _ => self.rank().cmp(&other.rank()),
            },
        }
    }
}

fn compare_numbers(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.compare(&b),
    }
}

impl Nest for Value {
    fn is_nested(&self) -> bool {
        self.is_array()
    }

    fn into_children(self) -> Result<Vec<Self>, Self> {
        match self {
            Self::Array(array) => Ok(array.into_values().collect()),
            other => Err(other),
        }
    }
}

impl fmt::Display for Value {
    /// Writes the literal syntax understood by [FromStr](std::str::FromStr)
    ///
    /// The alternate flag (`{:#}`) spreads arrays over multiple lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = if f.alternate() { Some(0) } else { None };
        write_value(self, f, indent)
    }
}

fn write_value(value: &Value, f: &mut fmt::Formatter<'_>, indent: Option<usize>) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(boolean) => write!(f, "{boolean}"),
        Value::Int(int) => write!(f, "{int}"),
        Value::Float(float) if float.is_nan() => f.write_str("NAN"),
        Value::Float(float) if float.is_infinite() && float.is_sign_negative() => f.write_str("-INF"),
        Value::Float(float) if float.is_infinite() => f.write_str("INF"),
        Value::Float(float) if float.fract() == 0. => write!(f, "{float:.1}"),
        Value::Float(float) => write!(f, "{float}"),
        Value::Str(string) => write_string(string, f),
        Value::Array(array) if array.is_empty() => f.write_str("[]"),
        Value::Array(array) => {
            let is_sequence = array.is_sequence();
            let (open, close) = if is_sequence { ('[', ']') } else { ('{', '}') };

            write!(f, "{open}")?;
            for (position, (key, element)) in array.iter().enumerate() {
                match indent {
                    Some(level) => write!(f, "\n{:width$}", "", width = (level + 1) * 4)?,
                    None if position != 0 => f.write_str(" ")?,
                    None => {},
                }

                if !is_sequence {
                    write_key(key, f)?;
                    f.write_str(": ")?;
                }

                write_value(element, f, indent.map(|level| level + 1))?;

                if indent.is_some() || position + 1 != array.len() {
                    f.write_str(",")?;
                }
            }

            if let Some(level) = indent {
                write!(f, "\n{:width$}", "", width = level * 4)?;
            }
            write!(f, "{close}")
        },
    }
}

fn write_key(key: &Key, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match key {
        Key::Int(int) => write!(f, "{int}"),
        Key::Str(string) if is_bare_key(string) => f.write_str(string),
        Key::Str(string) => write_string(string, f),
    }
}

/// Whether a string key can be written without quotes and still parse back to the same key
fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

fn write_string(string: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("\"")?;
    for c in string.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            '\0' => f.write_str("\\0")?,
            other => write!(f, "{other}")?,
        }
    }
    f.write_str("\"")
}

#[cfg(test)]
mod tests {
    use super::{EntryError, Value};
    use crate::{keyed, sort, sort_by, Container, Key, Orderable};

    fn parse(literal: &str) -> Value {
        literal.parse().unwrap()
    }

    fn array(literal: &str) -> Container<Value> {
        match parse(literal) {
            Value::Array(array) => array,
            other => panic!("{literal:?} is not an array literal: {other:?}"),
        }
    }

    #[test]
    fn type_names() {
        let names: Vec<_> = array("[null, true, 1, 1.5, 'a', []]")
            .values()
            .map(Value::type_name)
            .collect();

        assert_eq!(
            names,
            vec!["NULL", "boolean", "integer", "double", "string", "array"]
        );
    }

    #[test]
    fn display() {
        let value = parse(r#"[1, 2.0, -0.5, "a\"b", null, {a: [], "b c": {3: false}}]"#);
        assert_eq!(
            value.to_string(),
            r#"[1, 2.0, -0.5, "a\"b", null, {a: [], "b c": {3: false}}]"#
        );
        assert_eq!(parse(&value.to_string()), value);
    }

    #[test]
    fn display_pretty() {
        let value = parse("{a: [1, 2], b: null}");
        assert_eq!(
            format!("{value:#}"),
            "{\n    a: [\n        1,\n        2,\n    ],\n    b: null,\n}"
        );
        assert_eq!(parse(&format!("{value:#}")), value);
    }

    #[test]
    fn contains_is_strict() {
        let value = parse("[1, 'b', false]");
        assert!(value.contains(&Value::from("b")));
        assert!(!value.contains(&Value::from("1")));
        assert!(!value.contains(&Value::Int(0)));
        assert!(!Value::from("b").contains(&Value::from("b")));
    }

    /// Every ordering of `values`
    fn permutations(values: &[Value]) -> Vec<Vec<Value>> {
        if values.is_empty() {
            return vec![vec![]];
        }

        let mut result = vec![];
        for (index, value) in values.iter().enumerate() {
            let mut rest = values.to_vec();
            rest.remove(index);

            for mut permutation in permutations(&rest) {
                permutation.insert(0, value.clone());
                result.push(permutation);
            }
        }
        result
    }

    #[test]
    fn ordering() {
        let sorted = sort(&array("[10, 9.5, true, '9', 'abc', [1], null, []]"));
        assert_eq!(
            Value::Array(sorted).to_string(),
            r#"[null, true, 9.5, 10, "9", "abc", [], [1]]"#
        );
    }

    #[test]
    fn ordering_is_total() {
        let values: Vec<_> = array(
            "[null, false, true, 0.5, 9.5, 10, -3, nan, inf, -inf, '', '10', '9', 'abc', [], [1], ['1'], [1, 2]]",
        )
        .into_values()
        .collect();

        for a in &values {
            for b in &values {
                assert_eq!(a.compare(b), b.compare(a).reverse(), "{a} vs {b}");

                for c in &values {
                    if a.compare(b).is_le() && b.compare(c).is_le() {
                        assert!(a.compare(c).is_le(), "{a} <= {b} <= {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn sorting_ignores_input_order() {
        let values: Vec<_> = array("['9', 9.5, 10, [1], 'abc']").into_values().collect();
        let expected = array("[9.5, 10, '9', 'abc', [1]]");

        for permutation in permutations(&values) {
            let sorted = sort(&Container::from(permutation));
            assert_eq!(sorted, expected);
            assert_eq!(sort(&sorted), sorted);
        }
    }

    #[test]
    fn strings_do_not_affect_integers() {
        // A single string no longer switches the whole array to string comparison
        let sorted = sort(&array("[10, 9, 'x', 100]"));
        assert_eq!(Value::Array(sorted), parse("[9, 10, 100, 'x']"));
        assert_eq!(Value::Int(10).compare(&Value::from("9")), std::cmp::Ordering::Less);
    }

    #[test]
    fn sort_values_with_comparator() {
        let descending = |a: &Value, b: &Value| b.compare(a);

        assert_eq!(
            Value::Array(sort_by(&array("[1, 7, 3, 2, 8]"), descending)),
            parse("[8, 7, 3, 2, 1]")
        );
        assert_eq!(
            Value::Array(sort_by(&array("{a: 15, b: 185, c: 23}"), descending)),
            parse("{b: 185, c: 23, a: 15}")
        );
    }

    #[test]
    fn entries_roundtrip() {
        let value = parse("{first: 15, 3: '85', third: [23]}");
        let entries = value.to_entries().unwrap();

        assert_eq!(entries, parse("[['first', 15], [3, '85'], ['third', [23]]]"));
        assert_eq!(entries.restore_entries().unwrap(), value);
    }

    #[test]
    fn restore_normalizes_keys() {
        let restored = parse("[['5', 'a'], [true, 'b'], [2.9, 'c'], [null, 'd'], ['05', 'e']]")
            .restore_entries()
            .unwrap();

        assert_eq!(
            restored,
            Value::Array(keyed! {
                5 => Value::from("a"),
                1 => Value::from("b"),
                2 => Value::from("c"),
                "" => Value::from("d"),
                "05" => Value::from("e"),
            })
        );
    }

    #[test]
    fn restore_last_write_wins() {
        let restored = parse("[['a', 1], ['b', 2], ['a', 3]]")
            .restore_entries()
            .unwrap();
        assert_eq!(restored, parse("{a: 3, b: 2}"));
    }

    #[test]
    fn entry_errors() {
        assert_eq!(Value::Int(3).to_entries(), Err(EntryError::NotAnArray));
        assert_eq!(
            parse("[['a']]").restore_entries(),
            Err(EntryError::MalformedEntry)
        );
        assert_eq!(
            parse("['a', 'b']").restore_entries(),
            Err(EntryError::MalformedEntry)
        );
        assert_eq!(
            parse("[[[1], 'b']]").restore_entries(),
            Err(EntryError::ArrayKey)
        );
        assert_eq!(
            EntryError::MalformedEntry.to_string(),
            "entry is not a [key, value] pair"
        );
    }

    #[test]
    fn keys_from_values() {
        assert_eq!(Key::try_from(&Value::from("-12")), Ok(Key::Int(-12)));
        assert_eq!(Key::try_from(&Value::from("+1")), Ok(Key::from("+1")));
        assert_eq!(Key::try_from(&Value::Float(-1.7)), Ok(Key::Int(-1)));
    }
}
