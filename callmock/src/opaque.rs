use std::any::Any;
use std::fmt::{self, Debug};
use std::sync::Arc;

// Object-safe equality for user types carried inside a `Value`.
pub(crate) trait OpaqueValue: Send + Sync {
    fn eq(&self, other: &dyn OpaqueValue) -> bool;
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
    fn fmt_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T: PartialEq + Debug + Send + Sync + 'static> OpaqueValue for T {
    fn eq(&self, other: &dyn OpaqueValue) -> bool {
        other
            .as_any()
            .downcast_ref()
            .into_iter()
            .any(|other| <T as PartialEq>::eq(self, other))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn fmt_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

/// A shared, type-erased value compared through its own `PartialEq`.
///
/// Two opaque values of different concrete types are never equal.
#[derive(Clone)]
pub struct Opaque(Arc<dyn OpaqueValue>);

impl Opaque {
    pub fn new<T: PartialEq + Debug + Send + Sync + 'static>(value: T) -> Self {
        Self(Arc::new(value))
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }

    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        OpaqueValue::eq(self.0.as_ref(), other.0.as_ref())
    }
}

impl Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_debug(f)
    }
}
