//! # Category Tokens
//!
//! Host environments hand us dynamically typed column values. Those are
//! normalized at the boundary into the closed [`CategoryToken`] set;
//! anything else surfaces [`HotcolError::InvalidToken`] rather than being
//! silently coerced.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::errors::{HCResult, HotcolError};

/// One discrete value forming a class within a categorical column.
///
/// Tokens are compared by exact equality; `Missing` is a distinguished
/// token state, not absence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryToken {
    /// A UTF-8 text category.
    Text(CompactString),

    /// A 64-bit integer category.
    Int(i64),

    /// The missing/null marker.
    Missing,
}

impl CategoryToken {
    /// Returns true if this is the missing marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, CategoryToken::Missing)
    }

    /// Render this token as the JSON value it was normalized from.
    ///
    /// The inverse of [`CategoryToken::from_json`].
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CategoryToken::Text(s) => serde_json::Value::from(s.as_str()),
            CategoryToken::Int(i) => serde_json::Value::from(*i),
            CategoryToken::Missing => serde_json::Value::Null,
        }
    }

    /// Normalize a JSON value into a [`CategoryToken`].
    ///
    /// Strings, integers, and nulls map to the three token states.
    /// Floats, booleans, and containers are not category values.
    ///
    /// ## Arguments
    /// * `value` - The JSON value to normalize.
    ///
    /// ## Returns
    /// The normalized token, or [`HotcolError::InvalidToken`].
    pub fn from_json(value: &serde_json::Value) -> HCResult<Self> {
        use serde_json::Value;

        match value {
            Value::Null => Ok(CategoryToken::Missing),
            Value::String(s) => Ok(CategoryToken::Text(s.as_str().into())),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(CategoryToken::Int(i)),
                None => Err(HotcolError::InvalidToken {
                    detail: format!("non-integral number {n}"),
                }),
            },
            other => Err(HotcolError::InvalidToken {
                detail: format!("unsupported value {other}"),
            }),
        }
    }
}

impl core::fmt::Display for CategoryToken {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            CategoryToken::Text(s) => write!(f, "{:?}", s.as_str()),
            CategoryToken::Int(i) => write!(f, "{i}"),
            CategoryToken::Missing => write!(f, "<missing>"),
        }
    }
}

impl From<&str> for CategoryToken {
    fn from(value: &str) -> Self {
        CategoryToken::Text(value.into())
    }
}

impl From<String> for CategoryToken {
    fn from(value: String) -> Self {
        CategoryToken::Text(value.into())
    }
}

impl From<CompactString> for CategoryToken {
    fn from(value: CompactString) -> Self {
        CategoryToken::Text(value)
    }
}

impl From<i64> for CategoryToken {
    fn from(value: i64) -> Self {
        CategoryToken::Int(value)
    }
}

impl<V: Into<CategoryToken>> From<Option<V>> for CategoryToken {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(v) => v.into(),
            None => CategoryToken::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_json_normalization() {
        assert_eq!(
            CategoryToken::from_json(&json!("red")).unwrap(),
            CategoryToken::from("red")
        );
        assert_eq!(
            CategoryToken::from_json(&json!(42)).unwrap(),
            CategoryToken::Int(42)
        );
        assert_eq!(
            CategoryToken::from_json(&json!(null)).unwrap(),
            CategoryToken::Missing
        );

        assert!(matches!(
            CategoryToken::from_json(&json!(1.5)),
            Err(HotcolError::InvalidToken { .. })
        ));
        assert!(matches!(
            CategoryToken::from_json(&json!(true)),
            Err(HotcolError::InvalidToken { .. })
        ));
        assert!(matches!(
            CategoryToken::from_json(&json!(["red"])),
            Err(HotcolError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_to_json_inverts_from_json() {
        for value in [json!("red"), json!(42), json!(null)] {
            let token = CategoryToken::from_json(&value).unwrap();
            assert_eq!(token.to_json(), value);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(CategoryToken::from("red").to_string(), "\"red\"");
        assert_eq!(CategoryToken::Int(3).to_string(), "3");
        assert_eq!(CategoryToken::Missing.to_string(), "<missing>");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(CategoryToken::from(Some("red")), CategoryToken::from("red"));
        assert_eq!(CategoryToken::from(None::<i64>), CategoryToken::Missing);
    }

    #[test]
    fn test_serde_token_tags() {
        let text = serde_json::to_string(&CategoryToken::from("red")).unwrap();
        assert_eq!(text, r#"{"text":"red"}"#);

        let int = serde_json::to_string(&CategoryToken::Int(5)).unwrap();
        assert_eq!(int, r#"{"int":5}"#);

        let missing = serde_json::to_string(&CategoryToken::Missing).unwrap();
        assert_eq!(missing, r#""missing""#);
    }
}
