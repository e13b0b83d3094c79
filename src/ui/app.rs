//! The interactive main loop and its line IO plumbing.

use std::io::{BufRead, Write};

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use crate::constants::MSG_PRESS_ENTER;
use crate::ui::menu::{self, MenuChoice};
use crate::ui::{format, input, App};

impl<R: BufRead, W: Write> App<R, W> {
    /// Main loop: welcome banner, then menu and dispatch until exit.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "{}", format::welcome_banner())?;
        self.pause()?;

        while !self.eof {
            self.clear_screen()?;
            writeln!(self.out, "{}", menu::main_menu())?;

            let raw = self.prompt(menu::CHOICE_PROMPT)?;
            if self.eof {
                break;
            }

            let number = match input::parse_menu_choice(&raw, MenuChoice::COUNT) {
                Ok(number) => number,
                Err(message) => {
                    writeln!(self.out, "\n{}", format::error_line(&message))?;
                    self.pause()?;
                    continue;
                }
            };
            let Some(choice) = MenuChoice::from_number(number) else {
                continue;
            };

            if choice == MenuChoice::Exit {
                break;
            }

            self.clear_screen()?;
            match choice {
                MenuChoice::Add => self.handle_add()?,
                MenuChoice::List => self.handle_list()?,
                MenuChoice::MarkComplete => self.handle_mark_complete()?,
                MenuChoice::Update => self.handle_update()?,
                MenuChoice::Delete => self.handle_delete()?,
                MenuChoice::FilterCategory => self.handle_filter_category()?,
                MenuChoice::FilterPriority => self.handle_filter_priority()?,
                MenuChoice::Exit => {}
            }
        }

        writeln!(self.out, "\n{}", format::goodbye_banner())?;
        Ok(())
    }

    /// Prints `label` without a trailing newline and reads one trimmed
    /// line.
    pub(crate) fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        self.read_trimmed()
    }

    /// Waits for ENTER so the previous output stays readable.
    pub(crate) fn pause(&mut self) -> Result<()> {
        if self.eof {
            return Ok(());
        }
        write!(self.out, "\n{MSG_PRESS_ENTER}")?;
        self.out.flush()?;
        self.read_trimmed()?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Reads one line, trimmed. Records end of input instead of erroring;
    /// callers see an empty string and the main loop stops afterwards.
    fn read_trimmed(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.eof = true;
        }
        Ok(line.trim().to_string())
    }

    fn clear_screen(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }
}
