use crate::{ExpectationId, ExpectedCall, Mock, Values};

/// Configures one expectation of a [`Mock`].
///
/// The mock owns the expectation; the handle only points at it, so it can be
/// copied freely and dropped without effect.
#[derive(Clone, Copy)]
pub struct ExpectationHandle<'a> {
    mock: &'a Mock,
    id: ExpectationId,
}

impl<'a> ExpectationHandle<'a> {
    pub(crate) fn new(mock: &'a Mock, id: ExpectationId) -> Self {
        Self { mock, id }
    }

    /// Sets the values returned when this expectation matches, replacing any
    /// previously configured ones.
    pub fn returns(self, values: impl Into<Values>) -> Self {
        let values = values.into();
        tracing::debug!(
            mock = self.mock.label(),
            expectation = self.id.index(),
            count = values.len(),
            "configured return values"
        );
        self.mock.registry.set_returns(self.id, values);
        self
    }

    pub fn id(&self) -> ExpectationId {
        self.id
    }

    pub fn expected_call(&self) -> ExpectedCall {
        self.mock.registry.get(self.id)
    }
}

impl std::fmt::Debug for ExpectationHandle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpectationHandle")
            .field("id", &self.id)
            .finish()
    }
}
