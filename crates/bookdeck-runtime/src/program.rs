#![forbid(unsafe_code)]

//! The program loop.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use bookdeck_core::event::Event;
use bookdeck_view::{Present, ViewTree};
use tracing::{debug, info};

/// Default cadence for [`Event::Tick`] delivery when the model never asks
/// for a specific rate.
pub const DEFAULT_TICK: Duration = Duration::from_millis(250);

/// A deferred closure producing a message off the loop thread.
pub type Task<M> = Box<dyn FnOnce() -> M + Send + 'static>;

/// What an update wants the runtime to do next.
pub enum Cmd<M> {
    /// Nothing.
    None,
    /// Stop the program.
    Quit,
    /// Feed another message through `update` immediately.
    Msg(M),
    /// Several commands, order not significant.
    Batch(Vec<Cmd<M>>),
    /// Several commands, executed in order, stopping on quit.
    Sequence(Vec<Cmd<M>>),
    /// Run a closure off the loop; its message is delivered back later.
    Task(Task<M>),
    /// Ask for ticks at the given cadence.
    Tick(Duration),
    /// Emit a log line through the runtime's logger.
    Log(String),
}

impl<M> Cmd<M> {
    pub fn none() -> Self {
        Cmd::None
    }

    pub fn quit() -> Self {
        Cmd::Quit
    }

    pub fn msg(msg: M) -> Self {
        Cmd::Msg(msg)
    }

    pub fn batch(cmds: Vec<Cmd<M>>) -> Self {
        Cmd::Batch(cmds)
    }

    pub fn sequence(cmds: Vec<Cmd<M>>) -> Self {
        Cmd::Sequence(cmds)
    }

    pub fn task(f: impl FnOnce() -> M + Send + 'static) -> Self {
        Cmd::Task(Box::new(f))
    }

    pub fn tick(rate: Duration) -> Self {
        Cmd::Tick(rate)
    }

    pub fn log(text: impl Into<String>) -> Self {
        Cmd::Log(text.into())
    }

    /// Deliver `msg` after `delay` without blocking the loop.
    pub fn delay(delay: Duration, msg: M) -> Self
    where
        M: Send + 'static,
    {
        Cmd::task(move || {
            thread::sleep(delay);
            msg
        })
    }
}

impl<M> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cmd::None => write!(f, "Cmd::None"),
            Cmd::Quit => write!(f, "Cmd::Quit"),
            Cmd::Msg(_) => write!(f, "Cmd::Msg"),
            Cmd::Batch(cmds) => write!(f, "Cmd::Batch({})", cmds.len()),
            Cmd::Sequence(cmds) => write!(f, "Cmd::Sequence({})", cmds.len()),
            Cmd::Task(_) => write!(f, "Cmd::Task"),
            Cmd::Tick(rate) => write!(f, "Cmd::Tick({rate:?})"),
            Cmd::Log(text) => write!(f, "Cmd::Log({text:?})"),
        }
    }
}

/// An application: owned state, message-driven updates, view rendering.
pub trait Model {
    /// Messages the model understands. Every raw input event must convert
    /// into one.
    type Message: From<Event> + Send + 'static;

    /// Called once before the first frame.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::None
    }

    /// Apply one message. All state mutation happens here, serialized by
    /// the loop.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Write the current state into the view tree. Must be a full pass:
    /// the tree is retained between frames.
    fn view(&self, tree: &mut ViewTree);
}

/// Owns a model and runs it against an event source and a presenter.
pub struct Program<M: Model> {
    model: M,
    tree: ViewTree,
    running: bool,
    tick_rate: Option<Duration>,
    task_tx: Sender<M::Message>,
    task_rx: Receiver<M::Message>,
}

impl<M: Model> Program<M> {
    pub fn new(model: M) -> Self {
        let (task_tx, task_rx) = mpsc::channel();
        Self {
            model,
            tree: ViewTree::new(),
            running: true,
            tick_rate: None,
            task_tx,
            task_rx,
        }
    }

    /// Run until the model quits.
    pub fn run(
        mut self,
        source: &mut impl crate::source::EventSource,
        presenter: &mut impl Present,
    ) -> M {
        let cmd = self.model.init();
        self.execute(cmd);
        self.render(presenter);

        while self.running {
            // Task results first: they were produced before the next input.
            while let Ok(msg) = self.task_rx.try_recv() {
                let cmd = self.model.update(msg);
                self.execute(cmd);
                if !self.running {
                    break;
                }
            }
            if !self.running {
                break;
            }

            let timeout = self.tick_rate.unwrap_or(DEFAULT_TICK);
            let event = source.poll(timeout).unwrap_or(Event::Tick);
            let cmd = self.model.update(M::Message::from(event));
            self.execute(cmd);
            self.render(presenter);
        }
        debug!("program loop finished");
        self.model
    }

    fn render(&mut self, presenter: &mut impl Present) {
        self.model.view(&mut self.tree);
        presenter.present(&self.tree);
    }

    fn execute(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.running = false,
            Cmd::Msg(msg) => {
                let next = self.model.update(msg);
                self.execute(next);
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute(cmd);
                }
            }
            Cmd::Sequence(cmds) => {
                for cmd in cmds {
                    self.execute(cmd);
                    if !self.running {
                        break;
                    }
                }
            }
            Cmd::Task(f) => {
                let tx = self.task_tx.clone();
                thread::spawn(move || {
                    // Receiver dropping just means the program ended first.
                    let _ = tx.send(f());
                });
            }
            Cmd::Tick(rate) => self.tick_rate = Some(rate),
            Cmd::Log(text) => info!(target: "bookdeck", "{text}"),
        }
    }
}
