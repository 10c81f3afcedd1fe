use std::str::FromStr;

use backfill::{ParseError, Value};
use error_derive::Error;

/// A test applied to each value by the `find`, `some` and `every` commands
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    IsInt,
    IsString,
    IsArray,
    Equals(Value),
    Contains(Value),
}

#[derive(Debug, Error)]
pub enum PredicateError {
    #[msg = "unknown predicate"]
    Unknown,

    #[msg = "invalid value in predicate"]
    InvalidValue(ParseError),
}

impl Predicate {
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::IsInt => value.is_int(),
            Self::IsString => value.is_string(),
            Self::IsArray => value.is_array(),
            Self::Equals(expected) => value == expected,
            Self::Contains(needle) => value.contains(needle),
        }
    }
}

impl FromStr for Predicate {
    type Err = PredicateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let predicate = match s.split_once('=') {
            Some(("equals", literal)) => Self::Equals(literal.parse()?),
            Some(("contains", literal)) => Self::Contains(literal.parse()?),
            Some(_) => return Err(PredicateError::Unknown),
            None => match s {
                "is-int" => Self::IsInt,
                "is-string" => Self::IsString,
                "is-array" => Self::IsArray,
                _ => return Err(PredicateError::Unknown),
            },
        };

        Ok(predicate)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use backfill::Value;

    use super::{Predicate, PredicateError};

    #[test]
    fn parse_predicates() {
        assert_eq!("is-int".parse::<Predicate>().unwrap(), Predicate::IsInt);
        assert_eq!(
            "equals=[1, 2]".parse::<Predicate>().unwrap(),
            Predicate::Equals("[1, 2]".parse().unwrap())
        );
        assert!(matches!(
            "is-float".parse::<Predicate>(),
            Err(PredicateError::Unknown)
        ));
        assert!(matches!(
            "between=1".parse::<Predicate>(),
            Err(PredicateError::Unknown)
        ));
    }

    #[test]
    fn invalid_literal_is_the_source() {
        let error = "contains=[1,".parse::<Predicate>().unwrap_err();

        assert_eq!(error.to_string(), "invalid value in predicate");
        assert!(error.source().is_some());
    }

    #[test]
    fn matching() {
        let array: Value = "['a', 'b', 'c']".parse().unwrap();

        assert!(Predicate::IsArray.matches(&array));
        assert!(!Predicate::IsInt.matches(&array));
        assert!(Predicate::Contains(Value::from("b")).matches(&array));
        assert!(Predicate::Equals(Value::Int(3)).matches(&Value::Int(3)));
        assert!(!Predicate::Equals(Value::Int(3)).matches(&Value::Float(3.0)));
    }
}
