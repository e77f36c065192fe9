#![forbid(unsafe_code)]

//! Deterministic program simulator for testing.
//!
//! `ProgramSimulator` runs a [`Model`] without an event source or a
//! presenter, enabling deterministic snapshot testing, event injection,
//! and view capture. Tasks run synchronously on the calling thread, so a
//! gateway exchange and its continuation happen in one `send` call.
//!
//! # Example
//!
//! ```ignore
//! let mut sim = ProgramSimulator::new(BrowseApp::new(...));
//! sim.init();
//! sim.send(Msg::StartReading("42".into()));
//! assert_eq!(sim.model().toasts.len(), 1);
//! ```

use std::time::Duration;

use bookdeck_core::event::Event;
use bookdeck_view::ViewTree;

use crate::program::{Cmd, Model};

/// Record of a command that was executed during simulation.
#[derive(Debug, Clone)]
pub enum CmdRecord {
    /// No-op command.
    None,
    /// Quit command.
    Quit,
    /// Message fed back through update.
    Msg,
    /// Batch of commands.
    Batch(usize),
    /// Sequence of commands.
    Sequence(usize),
    /// Background task executed synchronously.
    Task,
    /// Tick cadence requested.
    Tick(Duration),
    /// Log line emitted.
    Log(String),
}

/// Deterministic simulator for [`Model`] testing.
pub struct ProgramSimulator<M: Model> {
    model: M,
    tree: ViewTree,
    snapshots: Vec<ViewTree>,
    command_log: Vec<CmdRecord>,
    logs: Vec<String>,
    tick_rate: Option<Duration>,
    running: bool,
}

impl<M: Model> ProgramSimulator<M> {
    /// Create a simulator; the model is not initialized until
    /// [`init`](Self::init) is called.
    pub fn new(model: M) -> Self {
        Self {
            model,
            tree: ViewTree::new(),
            snapshots: Vec::new(),
            command_log: Vec::new(),
            logs: Vec::new(),
            tick_rate: None,
            running: true,
        }
    }

    /// Run `Model::init` and execute the returned commands.
    pub fn init(&mut self) {
        let cmd = self.model.init();
        self.execute_cmd(cmd);
    }

    /// Inject raw input events, converting each through `From<Event>`.
    pub fn inject_events(&mut self, events: &[Event]) {
        for event in events {
            if !self.running {
                break;
            }
            let msg = M::Message::from(event.clone());
            let cmd = self.model.update(msg);
            self.execute_cmd(cmd);
        }
    }

    /// Send a message straight to the model.
    pub fn send(&mut self, msg: M::Message) {
        if !self.running {
            return;
        }
        let cmd = self.model.update(msg);
        self.execute_cmd(cmd);
    }

    /// Render into the retained tree and snapshot the result.
    pub fn capture_view(&mut self) -> &ViewTree {
        self.model.view(&mut self.tree);
        self.snapshots.push(self.tree.clone());
        // Just pushed, so never empty.
        self.snapshots.last().unwrap()
    }

    /// The retained tree as of the last capture.
    pub fn tree(&self) -> &ViewTree {
        &self.tree
    }

    /// All captured snapshots, oldest first.
    pub fn snapshots(&self) -> &[ViewTree] {
        &self.snapshots
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// False once a quit command has executed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick_rate(&self) -> Option<Duration> {
        self.tick_rate
    }

    /// Log lines emitted via `Cmd::Log`.
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    pub fn command_log(&self) -> &[CmdRecord] {
        &self.command_log
    }

    /// Execute a command without IO. Tasks run synchronously; their
    /// resulting message recurses through update.
    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => self.command_log.push(CmdRecord::None),
            Cmd::Quit => {
                self.running = false;
                self.command_log.push(CmdRecord::Quit);
            }
            Cmd::Msg(msg) => {
                self.command_log.push(CmdRecord::Msg);
                let cmd = self.model.update(msg);
                self.execute_cmd(cmd);
            }
            Cmd::Batch(cmds) => {
                self.command_log.push(CmdRecord::Batch(cmds.len()));
                for c in cmds {
                    self.execute_cmd(c);
                }
            }
            Cmd::Sequence(cmds) => {
                self.command_log.push(CmdRecord::Sequence(cmds.len()));
                for c in cmds {
                    self.execute_cmd(c);
                    if !self.running {
                        break;
                    }
                }
            }
            Cmd::Task(f) => {
                self.command_log.push(CmdRecord::Task);
                let msg = f();
                let cmd = self.model.update(msg);
                self.execute_cmd(cmd);
            }
            Cmd::Tick(rate) => {
                self.tick_rate = Some(rate);
                self.command_log.push(CmdRecord::Tick(rate));
            }
            Cmd::Log(text) => {
                self.command_log.push(CmdRecord::Log(text.clone()));
                self.logs.push(text);
            }
        }
    }
}
