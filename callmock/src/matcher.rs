use std::fmt;

use crate::Value;

/// One position of an argument list, padded past the end with `Missing`.
///
/// `Missing` is distinct from every value, `Value::Nil` included, so an arity
/// mismatch always counts as at least one difference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot<'a> {
    Missing,
    Present(&'a Value),
}

impl<'a> Slot<'a> {
    fn of(values: &'a [Value], index: usize) -> Self {
        values.get(index).map_or(Slot::Missing, Slot::Present)
    }
}

impl fmt::Display for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Missing => f.write_str("(Missing)"),
            Slot::Present(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difference<'a> {
    pub index: usize,
    pub expected: Slot<'a>,
    pub actual: Slot<'a>,
}

impl fmt::Display for Difference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "argument {}: expected {}, got {}",
            self.index, self.expected, self.actual
        )
    }
}

pub(crate) fn objects_are_equal(expected: Slot<'_>, actual: Slot<'_>) -> bool {
    match (expected, actual) {
        (Slot::Missing, Slot::Missing) => true,
        (Slot::Present(expected), Slot::Present(actual)) => expected == actual,
        _ => false,
    }
}

/// Every position, over the longer of the two lists, whose values differ.
pub fn differences<'a>(
    expected: &'a [Value],
    actual: &'a [Value],
) -> impl Iterator<Item = Difference<'a>> + 'a {
    (0..expected.len().max(actual.len())).filter_map(move |index| {
        let expected = Slot::of(expected, index);
        let actual = Slot::of(actual, index);
        (!objects_are_equal(expected, actual)).then_some(Difference {
            index,
            expected,
            actual,
        })
    })
}

/// Number of differing positions. Arguments match iff this is zero.
pub fn argument_diff(expected: &[Value], actual: &[Value]) -> usize {
    differences(expected, actual).count()
}
