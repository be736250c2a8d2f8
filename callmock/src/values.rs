use std::fmt;

use crate::{FromValue, Value, ValueError};

/// An ordered sequence of values: the arguments of a call, or the values an
/// expectation returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values(Vec<Value>);

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }

    pub fn at<T: FromValue>(&self, index: usize) -> Result<T, ValueError> {
        let value = self.get(index).ok_or(ValueError::MissingIndex {
            index,
            len: self.len(),
        })?;
        T::from_value(value.clone()).map_err(|error| error.at(index))
    }

    /// Converts the whole sequence into a tuple. The tuple arity must match.
    ///
    /// ```
    /// use callmock::Values;
    ///
    /// let (n, name): (i32, String) = Values::from((2, "two")).extract().unwrap();
    /// assert_eq!((n, name.as_str()), (2, "two"));
    /// ```
    pub fn extract<T: FromValues>(self) -> Result<T, ValueError> {
        T::from_values(self)
    }
}

impl From<Vec<Value>> for Values {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl IntoIterator for Values {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Values {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Value> for Values {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, value) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(")")
    }
}

pub trait FromValues: Sized {
    fn from_values(values: Values) -> Result<Self, ValueError>;
}

impl FromValues for Values {
    fn from_values(values: Values) -> Result<Self, ValueError> {
        Ok(values)
    }
}

callmock_macros::create_values!();

#[cfg(feature = "serde")]
impl serde::Serialize for Values {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.0)
    }
}
