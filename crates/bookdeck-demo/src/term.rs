#![forbid(unsafe_code)]

//! Terminal backend: crossterm events in, line output out.

use std::io::{self, Write};
use std::time::Duration;

use bookdeck_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, PointerEvent, PointerPhase,
};
use bookdeck_runtime::EventSource;
use crossterm::event as ct;
use tracing::warn;

/// Event source reading the real terminal.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> Option<Event> {
        match ct::poll(timeout) {
            Ok(true) => match ct::read() {
                Ok(raw) => map_event(raw),
                Err(err) => {
                    warn!(%err, "terminal read failed");
                    None
                }
            },
            Ok(false) => None,
            Err(err) => {
                warn!(%err, "terminal poll failed");
                None
            }
        }
    }
}

fn map_event(raw: ct::Event) -> Option<Event> {
    match raw {
        ct::Event::Key(key) => map_key(key).map(Event::Key),
        ct::Event::Mouse(mouse) => map_mouse(mouse).map(Event::Pointer),
        _ => None,
    }
}

fn map_key(key: ct::KeyEvent) -> Option<KeyEvent> {
    let code = match key.code {
        ct::KeyCode::Char(c) => KeyCode::Char(c),
        ct::KeyCode::Left => KeyCode::Left,
        ct::KeyCode::Right => KeyCode::Right,
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Enter => KeyCode::Enter,
        ct::KeyCode::Esc => KeyCode::Escape,
        ct::KeyCode::Tab => KeyCode::Tab,
        _ => return None,
    };
    let mut modifiers = Modifiers::empty();
    if key.modifiers.contains(ct::KeyModifiers::SHIFT) {
        modifiers |= Modifiers::SHIFT;
    }
    if key.modifiers.contains(ct::KeyModifiers::CONTROL) {
        modifiers |= Modifiers::CTRL;
    }
    if key.modifiers.contains(ct::KeyModifiers::ALT) {
        modifiers |= Modifiers::ALT;
    }
    let kind = match key.kind {
        ct::KeyEventKind::Release => KeyEventKind::Release,
        // Repeats behave like presses for our bindings.
        ct::KeyEventKind::Press | ct::KeyEventKind::Repeat => KeyEventKind::Press,
    };
    Some(KeyEvent {
        code,
        modifiers,
        kind,
    })
}

fn map_mouse(mouse: ct::MouseEvent) -> Option<PointerEvent> {
    let phase = match mouse.kind {
        ct::MouseEventKind::Down(ct::MouseButton::Left) => PointerPhase::Down,
        ct::MouseEventKind::Drag(ct::MouseButton::Left) => PointerPhase::Move,
        ct::MouseEventKind::Up(ct::MouseButton::Left) => PointerPhase::Up,
        _ => return None,
    };
    Some(PointerEvent::new(
        phase,
        f32::from(mouse.column),
        f32::from(mouse.row),
    ))
}

/// Writer adapter that turns `\n` into `\r\n` for raw-mode output.
#[derive(Debug)]
pub struct CrlfWriter<W: Write>(pub W);

impl<W: Write> Write for CrlfWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for chunk in buf.split_inclusive(|&b| b == b'\n') {
            match chunk.split_last() {
                Some((&b'\n', head)) => {
                    self.0.write_all(head)?;
                    self.0.write_all(b"\r\n")?;
                }
                _ => self.0.write_all(chunk)?,
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}
