mod caller;
mod error;
mod expectation;
mod matcher;
mod mock;
mod opaque;
mod registry;
mod value;
mod values;

pub use caller::*;
pub use error::*;
pub use expectation::*;
pub use matcher::{argument_diff, differences, Difference, Slot};
pub use mock::*;
pub use opaque::Opaque;
pub use registry::{ExpectationId, ExpectedCall};
pub use value::*;
pub use values::*;

/// Captures the [`CallSite`] of the enclosing function.
#[macro_export]
macro_rules! caller {
    () => {{
        fn __callmock_caller() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::CallSite::new(
            type_name_of(__callmock_caller),
            ::std::panic::Location::caller(),
        )
    }};
}

/// Dispatches a call on `mock` named after the enclosing function.
///
/// ```
/// use callmock::{called, Mock};
///
/// struct MockCounter {
///     mock: Mock,
/// }
///
/// impl MockCounter {
///     fn add_one(&self, n: i32) -> i32 {
///         let (n,) = called!(self.mock, n).extract().unwrap();
///         n
///     }
/// }
///
/// let counter = MockCounter { mock: Mock::new() };
/// counter.mock.on("add_one", (1,)).returns((2,));
/// assert_eq!(counter.add_one(1), 2);
/// ```
#[macro_export]
macro_rules! called {
    ($mock:expr $(, $arg:expr)* $(,)?) => {
        $mock.called($crate::caller!(), ($($arg,)*))
    };
}
