/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{info, warn};
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::TransitionEvent;

/**
 * Receives every event the controller produces, in call-stack order.
 *
 * Sinks only render or forward; they can never influence the controller. They are `Send` so a
 * controller can be moved onto its own thread.
 */
pub trait EventSink: Send {
    fn emit(&mut self, event: &TransitionEvent);
}

/// Narrates through the `log` facade.
#[derive(Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, event: &TransitionEvent) {
        info!("{}", event.message);
    }
}

/// Writes one JSON object per event, one per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> JsonLinesSink<W> {
        JsonLinesSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> EventSink for JsonLinesSink<W> {
    fn emit(&mut self, event: &TransitionEvent) {
        let line = match serde_json::to_string(event) {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to serialize event: {}", e);
                return;
            }
        };
        if let Err(e) = writeln!(self.writer, "{}", line) {
            warn!("Failed to write event: {}", e);
        }
    }
}

/// Forwards a copy of every event to a channel.
pub struct ChannelSink {
    event_tx: cbc::Sender<TransitionEvent>,
}

impl ChannelSink {
    pub fn new(event_tx: cbc::Sender<TransitionEvent>) -> ChannelSink {
        ChannelSink { event_tx }
    }
}

impl EventSink for ChannelSink {
    fn emit(&mut self, event: &TransitionEvent) {
        if let Err(e) = self.event_tx.send(event.clone()) {
            warn!("Event receiver disconnected: {}", e);
        }
    }
}

/// Keeps every event in memory. Clones share the same trace.
#[derive(Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<TransitionEvent>>>,
}

impl MemorySink {
    pub fn new() -> MemorySink {
        MemorySink::default()
    }

    pub fn events(&self) -> Vec<TransitionEvent> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // Recovers the trace from a poisoned lock.
    fn lock(&self) -> MutexGuard<'_, Vec<TransitionEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EventSink for MemorySink {
    fn emit(&mut self, event: &TransitionEvent) {
        self.lock().push(event.clone());
    }
}
