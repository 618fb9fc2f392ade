//! Query Filters
//!
//! Range bounds and limits that narrow down the children returned by a query.
//! The service receives every value JSON encoded.

use serde_json::{Number, Value};

/// A JSON scalar usable as a range bound
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Scalar {
    /// Compact JSON text of the value
    pub fn to_json(&self) -> String {
        Value::from(self.clone()).to_string()
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Null => Value::Null,
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Number(n) => Value::Number(n),
            Scalar::String(s) => Value::String(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Non-finite floats have no JSON representation and become `null`
impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Self::Null, Self::Number)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

macro_rules! scalar_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Scalar {
                fn from(n: $ty) -> Self {
                    Self::Number(Number::from(n))
                }
            }
        )*
    };
}

scalar_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

/// One end of a range filter
#[derive(Debug, Clone, PartialEq)]
pub struct Bound {
    /// Value of the ordered-by field
    pub value: Scalar,
    /// Child key that disambiguates children sharing `value`
    pub key: Option<String>,
    /// `false` for `startAfter` / `endBefore`
    pub inclusive: bool,
}

impl Bound {
    pub fn inclusive(value: impl Into<Scalar>) -> Self {
        Self {
            value: value.into(),
            key: None,
            inclusive: true,
        }
    }

    pub fn exclusive(value: impl Into<Scalar>) -> Self {
        Self {
            inclusive: false,
            ..Self::inclusive(value)
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Parameter value: the JSON value, followed by `,<JSON key>` when a key is set
    pub fn to_param(&self) -> String {
        match &self.key {
            Some(key) => format!("{},{}", self.value.to_json(), Value::from(key.as_str())),
            None => self.value.to_json(),
        }
    }
}

/// Maximum number of children to return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// The first `n` children in sort order
    First(u32),
    /// The last `n` children in sort order
    Last(u32),
}

impl Limit {
    pub fn count(&self) -> u32 {
        match self {
            Self::First(n) | Self::Last(n) => *n,
        }
    }

    /// Query parameter name
    pub fn param_name(&self) -> &'static str {
        match self {
            Self::First(_) => "limitToFirst",
            Self::Last(_) => "limitToLast",
        }
    }

    pub fn same_kind(&self, other: &Limit) -> bool {
        matches!(
            (self, other),
            (Self::First(_), Self::First(_)) | (Self::Last(_), Self::Last(_))
        )
    }
}
