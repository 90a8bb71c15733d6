use core::marker::PhantomData;

use crate::events::IbcEvent;

pub type HandlerResult<T, E> = Result<HandlerOutput<T>, E>;

/// The outcome of processing a message: the state-transition result to be
/// persisted by a keeper, plus the log lines and events accumulated while
/// processing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandlerOutput<T, Event = IbcEvent> {
    pub result: T,
    pub log: Vec<String>,
    pub events: Vec<Event>,
}

impl<T, E> HandlerOutput<T, E> {
    pub fn builder() -> HandlerOutputBuilder<T, E> {
        HandlerOutputBuilder::new()
    }
}

#[derive(Clone, Debug, Default)]
pub struct HandlerOutputBuilder<T, Event = IbcEvent> {
    log: Vec<String>,
    events: Vec<Event>,
    marker: PhantomData<T>,
}

impl<T, E> HandlerOutputBuilder<T, E> {
    pub fn new() -> Self {
        Self {
            log: Vec::new(),
            events: Vec::new(),
            marker: PhantomData,
        }
    }

    pub fn log(&mut self, log: impl Into<String>) {
        self.log.push(log.into());
    }

    pub fn emit(&mut self, event: E) {
        self.events.push(event);
    }

    pub fn with_result(self, result: T) -> HandlerOutput<T, E> {
        HandlerOutput {
            result,
            log: self.log,
            events: self.events,
        }
    }
}
