use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// A row type a [`DataTable`](super::DataTable) can display.
///
/// ```ignore
/// impl Record for User {
///     type Id = u32;
///
///     fn id(&self) -> u32 {
///         self.id
///     }
///
///     fn field(&self, data_index: &str) -> Option<FieldValue> {
///         match data_index {
///             "name" => Some(self.name.clone().into()),
///             "age" => Some(self.age.into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record: Clone {
    /// Stable identity; selection is tracked by it across re-renders.
    type Id: Clone + Eq + Hash + fmt::Display;

    fn id(&self) -> Self::Id;

    /// Value of the named field, or `None` when the record has no such field.
    fn field(&self, data_index: &str) -> Option<FieldValue>;
}

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    fn rank(&self) -> u8 {
        match self {
            FieldValue::Bool(_) => 0,
            FieldValue::Int(_) | FieldValue::Float(_) => 1,
            FieldValue::Text(_) => 2,
        }
    }

    /// Total order used for sorting.
    ///
    /// Numbers compare numerically across `Int` and `Float`, text compares
    /// by bytes, `false < true`, and mismatched kinds order
    /// `Bool < number < Text`.
    pub fn total_cmp(&self, other: &FieldValue) -> Ordering {
        use FieldValue::*;
        match (self, other) {
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Int(a), Float(b)) => int_cmp_float(*a, *b),
            (Float(a), Int(b)) => int_cmp_float(*b, *a).reverse(),
            (Float(a), Float(b)) => float_cmp(*a, *b),
            (Text(a), Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// `total_cmp` with both zeros equal, since `Int(0)` equals either.
fn float_cmp(a: f64, b: f64) -> Ordering {
    if a == b {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

/// Exact comparison of an integer against a float. Casting the integer
/// would round above 2^53 and break transitivity.
fn int_cmp_float(i: i64, f: f64) -> Ordering {
    // 2^63, the first float past i64::MAX.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        // NaNs sit at the ends of the float order, by sign.
        return if f.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if f >= LIMIT {
        return Ordering::Less;
    }
    if f < -LIMIT {
        return Ordering::Greater;
    }

    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal if f > whole => Ordering::Less,
        Ordering::Equal if f < whole => Ordering::Greater,
        ord => ord,
    }
}

/// Compare two possibly missing fields; a missing field sorts first.
pub fn compare_fields(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.total_cmp(b),
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(v.into())
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::Int(v.into())
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}
