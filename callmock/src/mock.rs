use std::fmt;

use crate::matcher::differences;
use crate::registry::Registry;
use crate::{
    CallSite, CallerResolver, ExpectationHandle, ExpectedCall, MockError, TypeNameResolver,
    Values,
};

/// The expectations declared for one test double.
///
/// Expectations are registered with [`Mock::on`] and matched by
/// [`Mock::method_called`] (or [`called!`](crate::called)) from inside the
/// mocked methods. A call that matches nothing aborts the test.
///
/// ```
/// use callmock::Mock;
///
/// let mock = Mock::new();
/// mock.on("AddOne", (1,)).returns((2,));
///
/// let (n,): (i32,) = mock.method_called("AddOne", (1,)).extract().unwrap();
/// assert_eq!(n, 2);
/// ```
pub struct Mock {
    label: Option<String>,
    resolver: Box<dyn CallerResolver>,
    pub(crate) registry: Registry,
}

impl Default for Mock {
    fn default() -> Self {
        Self {
            label: None,
            resolver: Box::new(TypeNameResolver),
            registry: Registry::default(),
        }
    }
}

impl Mock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    /// Replaces how [`Mock::called`] recovers the caller's method name.
    pub fn with_resolver(mut self, resolver: impl CallerResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Declares that `method` may be called with exactly `arguments`.
    pub fn on(
        &self,
        method: impl Into<String>,
        arguments: impl Into<Values>,
    ) -> ExpectationHandle<'_> {
        let method = method.into();
        let arguments = arguments.into();
        tracing::debug!(
            mock = self.label(),
            method = method.as_str(),
            arity = arguments.len(),
            "registered expectation"
        );
        let id = self.registry.register(method, arguments);
        ExpectationHandle::new(self, id)
    }

    /// Returns the values configured on the first expectation registered for
    /// `method` whose arguments equal `arguments`.
    ///
    /// # Panics
    ///
    /// Panics with "unexpected method call" when no expectation matches.
    #[track_caller]
    pub fn method_called(&self, method: &str, arguments: impl Into<Values>) -> Values {
        match self.dispatch(method, arguments.into()) {
            Ok(returns) => returns,
            Err(error) => fail(self, error),
        }
    }

    /// Like [`Mock::method_called`], with the method name recovered from the
    /// call site. Usually invoked through [`called!`](crate::called).
    ///
    /// # Panics
    ///
    /// Panics when the method name cannot be recovered, or when no
    /// expectation matches.
    #[track_caller]
    pub fn called(&self, site: CallSite, arguments: impl Into<Values>) -> Values {
        match self.resolver.short_name(&site) {
            Some(method) => self.method_called(&method, arguments),
            None => fail(
                self,
                MockError::CallerUnavailable {
                    mock: self.prefix(),
                    location: site.location(),
                },
            ),
        }
    }

    pub fn expected_calls(&self) -> Vec<ExpectedCall> {
        self.registry.snapshot()
    }

    pub(crate) fn dispatch(&self, method: &str, arguments: Values) -> Result<Values, MockError> {
        match self.registry.find(method, arguments.as_slice()) {
            Some(id) => {
                tracing::trace!(
                    mock = self.label(),
                    method,
                    expectation = id.index(),
                    "matched expectation"
                );
                Ok(self.registry.returns(id))
            }
            None => Err(MockError::UnexpectedCall {
                mock: self.prefix(),
                method: method.to_string(),
                hint: self.hint(method, &arguments),
                arguments,
            }),
        }
    }

    fn prefix(&self) -> String {
        self.label
            .as_ref()
            .map(|label| format!("{label}: "))
            .unwrap_or_default()
    }

    fn hint(&self, method: &str, arguments: &Values) -> String {
        let candidates = self.registry.candidates(method);
        if candidates.is_empty() {
            return format!("\n  no expectation is registered for {method}");
        }
        candidates
            .iter()
            .map(|(id, expected)| {
                let differences: String = differences(expected.as_slice(), arguments.as_slice())
                    .map(|difference| format!("\n    {difference}"))
                    .collect();
                format!("\n  #{} {method}{expected}{differences}", id.index())
            })
            .collect()
    }
}

#[track_caller]
fn fail(mock: &Mock, error: MockError) -> ! {
    tracing::error!(mock = mock.label(), %error, "mock dispatch failed");
    panic!("{error}");
}

impl fmt::Debug for Mock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mock")
            .field("label", &self.label)
            .field("expectations", &self.registry.len())
            .finish()
    }
}
