mod matching;
mod opaque_values;

#[cfg(feature = "serde")]
mod serde_values;
