pub mod dut;

pub use dut::MockDut;
pub use sink::MockSink;

use std::cell::RefCell;
use std::rc::Rc;

/// One observable interaction with a mock collaborator.
///
/// The device and sink mocks append to one shared log, so tests can assert
/// ordering across the boundary (e.g. that both half-cycle dumps precede
/// the flush).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    SetClock(bool),
    SetReset(bool),
    Eval,
    Open,
    Dump(u64),
    Flush,
    Close,
}

/// Shared, single-threaded event log.
pub type EventLog = Rc<RefCell<Vec<Event>>>;

/// Creates an empty shared event log.
pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}
