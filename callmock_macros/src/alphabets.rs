use std::ops::RangeInclusive;

const ALPHABET: [&str; 12] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"];

pub(crate) const MAX_ARITY: usize = ALPHABET.len();

pub(crate) fn alphabets(range: RangeInclusive<usize>) -> impl Iterator<Item = Vec<&'static str>> {
    range.map(|index| ALPHABET[0..index].to_vec())
}
