use crate::recording_driver::State;

use rowbind::driver::{Operation, Query, Transaction};
use std::sync::{Arc, Mutex};

/// Read access to what a [`RecordingDriver`](crate::RecordingDriver) saw.
#[derive(Debug, Clone)]
pub struct ExecLog {
    state: Arc<Mutex<State>>,
}

impl ExecLog {
    pub(crate) fn new(state: Arc<Mutex<State>>) -> Self {
        Self { state }
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every operation, in execution order
    pub fn ops(&self) -> Vec<Operation> {
        self.state.lock().unwrap().ops.clone()
    }

    /// Only the queries, in execution order
    pub fn queries(&self) -> Vec<Query> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                Operation::Query(query) => Some(query),
                Operation::Transaction(_) => None,
            })
            .collect()
    }

    /// Statement text of every query
    pub fn sql(&self) -> Vec<String> {
        self.queries().into_iter().map(|query| query.sql).collect()
    }

    /// The last query executed
    pub fn last(&self) -> Query {
        self.queries().pop().expect("no query was executed")
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                Operation::Transaction(op) => Some(op),
                Operation::Query(_) => None,
            })
            .collect()
    }

    pub fn connects(&self) -> usize {
        self.state.lock().unwrap().connects
    }

    pub fn closes(&self) -> usize {
        self.state.lock().unwrap().closes
    }

    pub fn clear(&self) {
        self.state.lock().unwrap().ops.clear();
    }
}
