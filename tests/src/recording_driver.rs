use crate::ExecLog;

use rowbind::{
    async_trait,
    driver::{Connection, Driver, Exec, Operation, Response, Transaction},
    Error, Result,
};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

/// An in-memory driver that records every operation and answers queries
/// from a script.
///
/// Queries without a scripted response get an empty answer of the requested
/// kind: zero rows, a count of 1, or a null scalar.
#[derive(Debug, Clone, Default)]
pub struct RecordingDriver {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) ops: Vec<Operation>,
    pub(crate) connects: usize,
    pub(crate) closes: usize,

    /// Responses handed to queries, in order
    script: VecDeque<Result<Response>>,

    /// Transaction ops that fail when executed
    fail_transactions: Vec<Transaction>,

    fail_close: bool,
    fail_connect: bool,
}

#[derive(Debug)]
struct RecordingConnection {
    state: Arc<Mutex<State>>,
}

impl RecordingDriver {
    pub fn new() -> RecordingDriver {
        RecordingDriver::default()
    }

    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.state.clone())
    }

    /// Queue the response for the next query.
    pub fn respond(&self, response: Response) -> &Self {
        self.state.lock().unwrap().script.push_back(Ok(response));
        self
    }

    /// Make the next query fail with a driver error.
    pub fn fail_next(&self, message: &str) -> &Self {
        self.state
            .lock()
            .unwrap()
            .script
            .push_back(Err(driver_error(message)));
        self
    }

    pub fn fail_transaction(&self, op: Transaction) -> &Self {
        self.state.lock().unwrap().fail_transactions.push(op);
        self
    }

    pub fn fail_close(&self) -> &Self {
        self.state.lock().unwrap().fail_close = true;
        self
    }

    pub fn fail_connect(&self) -> &Self {
        self.state.lock().unwrap().fail_connect = true;
        self
    }
}

#[async_trait]
impl Driver for RecordingDriver {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        let mut state = self.state.lock().unwrap();
        if state.fail_connect {
            return Err(driver_error("connection refused"));
        }

        state.connects += 1;
        Ok(Box::new(RecordingConnection {
            state: self.state.clone(),
        }))
    }
}

#[async_trait]
impl Connection for RecordingConnection {
    async fn exec(&self, op: Operation) -> Result<Response> {
        let mut state = self.state.lock().unwrap();
        state.ops.push(op.clone());

        match op {
            Operation::Transaction(op) => {
                if state.fail_transactions.contains(&op) {
                    return Err(driver_error(&format!("{op:?} failed")));
                }
                Ok(Response::empty())
            }
            Operation::Query(query) => match state.script.pop_front() {
                Some(response) => response,
                None => Ok(match query.exec {
                    Exec::Rows => Response::values(Vec::<rowbind::Row>::new()),
                    Exec::NonQuery => Response::count(1),
                    Exec::Scalar => Response::scalar(rowbind::stmt::Value::Null),
                }),
            },
        }
    }

    async fn close(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.closes += 1;

        if state.fail_close {
            return Err(driver_error("close failed"));
        }
        Ok(())
    }
}

fn driver_error(message: &str) -> Error {
    Error::driver(std::io::Error::other(message.to_string()))
}
