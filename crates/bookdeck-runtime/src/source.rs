#![forbid(unsafe_code)]

//! Event sources.

use std::time::Duration;

use bookdeck_core::event::Event;

/// Where input comes from.
///
/// `poll` blocks for at most `timeout` and returns `None` when nothing
/// arrived; the runtime turns that into a tick.
pub trait EventSource {
    fn poll(&mut self, timeout: Duration) -> Option<Event>;
}

/// A scripted source that replays a fixed sequence, then reports quiet.
///
/// Useful for demos and integration tests that drive a whole program.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    events: std::collections::VecDeque<Event>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self, _timeout: Duration) -> Option<Event> {
        self.events.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookdeck_core::event::{KeyCode, KeyEvent};

    #[test]
    fn replays_in_order_then_runs_dry() {
        let mut source = ScriptedEvents::new([
            Event::Key(KeyEvent::press(KeyCode::Right)),
            Event::Tick,
        ]);
        assert!(matches!(
            source.poll(Duration::ZERO),
            Some(Event::Key(_))
        ));
        assert_eq!(source.poll(Duration::ZERO), Some(Event::Tick));
        assert_eq!(source.poll(Duration::ZERO), None);
        assert_eq!(source.remaining(), 0);
    }
}
