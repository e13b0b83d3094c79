//! Terminal user interface
//!
//! A line-oriented menu loop: render the menu, read a choice, dispatch to a
//! command handler, pause, repeat. All rendering goes through plain
//! [`format`] helpers so output is testable without a terminal.

use std::io;

use anyhow::Result;

use crate::config::Config;
use crate::service::TodoService;

mod app;
mod commands;
pub mod format;
pub mod input;
pub mod menu;

pub use menu::MenuChoice;

/// Interactive menu application over a reader/writer pair.
///
/// Production wires this to locked stdin/stdout; tests drive it with
/// in-memory buffers. End of input is treated like choosing Exit.
pub struct App<R, W> {
    input: R,
    out: W,
    service: TodoService,
    config: Config,
    eof: bool,
}

impl<R, W> App<R, W> {
    pub fn new(input: R, out: W, service: TodoService, config: Config) -> Self {
        Self {
            input,
            out,
            service,
            config,
            eof: false,
        }
    }
}

/// Runs the interactive application on stdin/stdout until the user exits.
pub fn run_app(service: TodoService, config: Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(stdin.lock(), stdout.lock(), service, config);
    app.run()
}
