//! Element model used at the text boundary.
//!
//! Input arrives as text (a file, stdin, a comma separated list). Each token is
//! read as an integer, then a float, and otherwise kept as text. A whole input
//! is then narrowed to a single [`Dataset`] variant so the typed algorithms can
//! run on it.

use std::fmt;

use serde::Serialize;

use crate::error::{SortError, SortResult};

/// A single parsed input token
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Try integer, then float, else keep the trimmed text.
    pub fn parse(s: &str) -> Value {
        let s = s.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Value::Int(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return Value::Float(f);
        }
        Value::Text(s.to_string())
    }

    fn is_numeric(&self) -> bool {
        !matches!(self, Value::Text(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// A homogeneous sequence ready to be sorted
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Dataset {
    Integers(Vec<i64>),
    Floats(Vec<f64>),
    /// Integers and floats together, compared as floats
    Mixed(Vec<f64>),
    Text(Vec<String>),
}

impl Default for Dataset {
    fn default() -> Self {
        Dataset::Integers(Vec::new())
    }
}

impl Dataset {
    /// Narrow parsed values to one element kind.
    ///
    /// Integers mixed with floats are widened into [`Dataset::Mixed`]. Text
    /// mixed with numbers, or any NaN, cannot be ordered and fails with
    /// [`SortError::Incomparable`].
    pub fn from_values(values: Vec<Value>) -> SortResult<Dataset> {
        if values.iter().any(|v| matches!(v, Value::Float(x) if x.is_nan())) {
            let other = values
                .iter()
                .find(|v| !matches!(v, Value::Float(x) if x.is_nan()))
                .map_or_else(|| "NaN".to_string(), |v| v.to_string());
            return Err(SortError::Incomparable {
                left: "NaN".to_string(),
                right: other,
            });
        }

        let first_text = values.iter().find(|v| !v.is_numeric());
        let first_number = values.iter().find(|v| v.is_numeric());
        if let (Some(text), Some(number)) = (first_text, first_number) {
            return Err(SortError::Incomparable {
                left: number.to_string(),
                right: text.to_string(),
            });
        }

        if first_text.is_some() {
            let text = values
                .into_iter()
                .filter_map(|v| match v {
                    Value::Text(s) => Some(s),
                    _ => None,
                })
                .collect();
            return Ok(Dataset::Text(text));
        }

        let has_ints = values.iter().any(|v| matches!(v, Value::Int(_)));
        if values.iter().any(|v| matches!(v, Value::Float(_))) {
            let floats = values
                .into_iter()
                .filter_map(|v| match v {
                    Value::Int(i) => Some(i as f64),
                    Value::Float(x) => Some(x),
                    Value::Text(_) => None,
                })
                .collect();
            return Ok(if has_ints {
                Dataset::Mixed(floats)
            } else {
                Dataset::Floats(floats)
            });
        }

        let ints = values
            .into_iter()
            .filter_map(|v| match v {
                Value::Int(i) => Some(i),
                _ => None,
            })
            .collect();
        Ok(Dataset::Integers(ints))
    }

    /// One value per line; blank lines are skipped.
    pub fn parse_lines(text: &str) -> SortResult<Dataset> {
        let values = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(Value::parse)
            .collect();
        Dataset::from_values(values)
    }

    /// Values separated by newlines and/or commas.
    pub fn parse_list(text: &str) -> SortResult<Dataset> {
        let values = text
            .lines()
            .flat_map(|line| line.split(','))
            .filter(|part| !part.trim().is_empty())
            .map(Value::parse)
            .collect();
        Dataset::from_values(values)
    }

    /// Name of the element kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Dataset::Integers(_) => "integers",
            Dataset::Floats(_) => "floats",
            Dataset::Mixed(_) => "integers and floats",
            Dataset::Text(_) => "text",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Dataset::Integers(v) => v.len(),
            Dataset::Floats(v) | Dataset::Mixed(v) => v.len(),
            Dataset::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_sorted(&self) -> bool {
        match self {
            Dataset::Integers(v) => v.windows(2).all(|w| w[0] <= w[1]),
            Dataset::Floats(v) | Dataset::Mixed(v) => v.windows(2).all(|w| w[0] <= w[1]),
            Dataset::Text(v) => v.windows(2).all(|w| w[0] <= w[1]),
        }
    }

    /// Format one element per line, as the CLI prints them
    pub fn to_lines(&self) -> Vec<String> {
        match self {
            Dataset::Integers(v) => v.iter().map(|x| x.to_string()).collect(),
            Dataset::Floats(v) | Dataset::Mixed(v) => v.iter().map(|x| x.to_string()).collect(),
            Dataset::Text(v) => v.clone(),
        }
    }
}

impl From<Vec<i64>> for Dataset {
    fn from(v: Vec<i64>) -> Self {
        Dataset::Integers(v)
    }
}

impl From<Vec<f64>> for Dataset {
    fn from(v: Vec<f64>) -> Self {
        Dataset::Floats(v)
    }
}

impl From<Vec<String>> for Dataset {
    fn from(v: Vec<String>) -> Self {
        Dataset::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(Value::parse(" 42 "), Value::Int(42));
        assert_eq!(Value::parse("-7"), Value::Int(-7));
        assert_eq!(Value::parse("2.5"), Value::Float(2.5));
        assert_eq!(Value::parse("1e3"), Value::Float(1000.0));
        assert_eq!(Value::parse("pear"), Value::Text("pear".into()));
    }

    #[test]
    fn test_ints_stay_ints() {
        let ds = Dataset::parse_lines("5\n3\n\n8\n").unwrap();
        assert_eq!(ds, Dataset::Integers(vec![5, 3, 8]));
    }

    #[test]
    fn test_mixed_numbers_widen_to_floats() {
        let ds = Dataset::parse_list("1, 2.5, 3").unwrap();
        assert_eq!(ds, Dataset::Mixed(vec![1.0, 2.5, 3.0]));
        assert_eq!(ds.kind(), "integers and floats");

        let ds = Dataset::parse_list("0.5, 2.5").unwrap();
        assert_eq!(ds, Dataset::Floats(vec![0.5, 2.5]));
    }

    #[test]
    fn test_nan_is_incomparable() {
        let err = Dataset::parse_lines("0.5\nnan\n0.1\n0.9\n0.2").unwrap_err();
        match err {
            SortError::Incomparable { left, right } => {
                assert_eq!(left, "NaN");
                assert_eq!(right, "0.5");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(Dataset::parse_list("NaN").is_err());
        assert!(Dataset::parse_list("1, nan").is_err());
    }

    #[test]
    fn test_text_with_numbers_is_incomparable() {
        let err = Dataset::parse_lines("1\napple\n2").unwrap_err();
        match err {
            SortError::Incomparable { left, right } => {
                assert_eq!(left, "1");
                assert_eq!(right, "apple");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_input() {
        let ds = Dataset::parse_lines("").unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.kind(), "integers");
    }

    #[test]
    fn test_to_lines() {
        let ds = Dataset::Floats(vec![0.5, 2.0]);
        assert_eq!(ds.to_lines(), vec!["0.5", "2"]);
    }
}
