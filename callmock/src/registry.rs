use std::sync::Arc;

use parking_lot::Mutex;

use crate::matcher::argument_diff;
use crate::{Value, Values};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpectationId(usize);

impl ExpectationId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedCall {
    pub method: String,
    pub arguments: Values,
    pub returns: Values,
}

struct Expectation {
    method: String,
    // Fixed at registration, so it can be compared outside the lock.
    arguments: Arc<Values>,
    returns: Values,
}

/// The ordered, append-only list of expectations of one mock.
///
/// A single lock guards the list and every expectation's return values. It is
/// only held to read or write those fields: argument comparison runs on a
/// snapshot taken under the lock, never while holding it.
#[derive(Default)]
pub(crate) struct Registry {
    expectations: Mutex<Vec<Expectation>>,
}

impl Registry {
    pub(crate) fn register(&self, method: String, arguments: Values) -> ExpectationId {
        let mut expectations = self.expectations.lock();
        expectations.push(Expectation {
            method,
            arguments: Arc::new(arguments),
            returns: Values::new(),
        });
        ExpectationId(expectations.len() - 1)
    }

    pub(crate) fn set_returns(&self, id: ExpectationId, returns: Values) {
        self.expectations.lock()[id.0].returns = returns;
    }

    pub(crate) fn returns(&self, id: ExpectationId) -> Values {
        self.expectations.lock()[id.0].returns.clone()
    }

    pub(crate) fn get(&self, id: ExpectationId) -> ExpectedCall {
        let expectations = self.expectations.lock();
        snapshot(&expectations[id.0])
    }

    pub(crate) fn snapshot(&self) -> Vec<ExpectedCall> {
        self.expectations.lock().iter().map(snapshot).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.expectations.lock().len()
    }

    pub(crate) fn candidates(&self, method: &str) -> Vec<(ExpectationId, Arc<Values>)> {
        self.expectations
            .lock()
            .iter()
            .enumerate()
            .filter(|(_, expectation)| expectation.method == method)
            .map(|(index, expectation)| (ExpectationId(index), expectation.arguments.clone()))
            .collect()
    }

    /// First expectation, in registration order, whose method equals `method`
    /// and whose arguments have no difference with `actual`.
    pub(crate) fn find(&self, method: &str, actual: &[Value]) -> Option<ExpectationId> {
        self.candidates(method)
            .into_iter()
            .find(|(_, expected)| argument_diff(expected.as_slice(), actual) == 0)
            .map(|(id, _)| id)
    }
}

fn snapshot(expectation: &Expectation) -> ExpectedCall {
    ExpectedCall {
        method: expectation.method.clone(),
        arguments: expectation.arguments.as_ref().clone(),
        returns: expectation.returns.clone(),
    }
}
