//! Menu command handlers.
//!
//! Each handler owns one menu entry end to end: prompt for input, call the
//! service, render the outcome, pause. Validation failures are shown with
//! the error's own message text and never leave the loop.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::constants::RULE_WIDTH;
use crate::model::TodoId;
use crate::store::{CategoryPatch, CreateTodoArgs, UpdateTodoArgs};
use crate::ui::{format, input, App};

impl<R: BufRead, W: Write> App<R, W> {
    pub(crate) fn handle_add(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}", format::header("ADD NEW TODO"))?;

        let title = self.prompt("\nTodo title (required): ")?;
        let category = self.prompt("Category (optional, press Enter to skip): ")?;
        let priority = self.prompt("Priority [high/medium/low] (default: medium): ")?;

        let args = CreateTodoArgs {
            title,
            category: if category.is_empty() { None } else { Some(category) },
            priority: if priority.is_empty() { None } else { Some(priority) },
        };

        match self.service.add(args) {
            Ok(todo) => {
                let message = format!("Todo added successfully! (ID: {})", todo.id);
                writeln!(self.out, "\n{}", format::success_line(&message))?;
                writeln!(self.out, "  Title: {}", todo.title)?;
                if let Some(category) = &todo.category {
                    writeln!(self.out, "  Category: {category}")?;
                }
                writeln!(self.out, "  Priority: {}", todo.priority)?;
            }
            Err(err) => {
                writeln!(self.out, "\n{}", format::error_line(&err.to_string()))?;
            }
        }
        self.pause()
    }

    pub(crate) fn handle_list(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}", format::header("YOUR TODOS"))?;

        let todos = self.service.get_all();
        writeln!(self.out, "\n{}", format::todo_list(&todos, &self.config.display))?;

        if !todos.is_empty() {
            let rule = "=".repeat(RULE_WIDTH);
            writeln!(self.out, "{rule}")?;
            writeln!(
                self.out,
                "{}",
                format::status_line(self.service.count(), self.service.count_completed())
            )?;
            writeln!(self.out, "{rule}")?;
        }
        self.pause()
    }

    pub(crate) fn handle_mark_complete(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}", format::header("MARK TODO COMPLETE"))?;

        let Some(id) = self.prompt_todo_id()? else {
            return self.pause();
        };

        let answer = self.prompt("Mark as done? [Y/n]: ")?;
        let completed = !matches!(answer.to_lowercase().as_str(), "n" | "no");

        match self.service.mark_complete(id, completed) {
            Some(todo) => {
                let state = if todo.completed { "complete" } else { "pending" };
                let message = format!("Todo {} marked {state}", todo.id);
                writeln!(self.out, "\n{}", format::success_line(&message))?;
            }
            None => {
                self.print_not_found(id)?;
            }
        }
        self.pause()
    }

    pub(crate) fn handle_update(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}", format::header("UPDATE TODO"))?;

        let Some(id) = self.prompt_todo_id()? else {
            return self.pause();
        };
        let Some(current) = self.service.get_by_id(id) else {
            self.print_not_found(id)?;
            return self.pause();
        };

        writeln!(self.out, "\nLeave a field blank to keep its current value.")?;
        let title = self.prompt(&format!("Title [{}]: ", current.title))?;
        let category_label = current.category.as_deref().unwrap_or("none");
        let category = self.prompt(&format!("Category [{category_label}] ('-' to clear): "))?;
        let priority = self.prompt(&format!("Priority [{}]: ", current.priority))?;

        let args = UpdateTodoArgs {
            title: if title.is_empty() { None } else { Some(title) },
            category: if category.is_empty() {
                CategoryPatch::Keep
            } else if category == "-" {
                CategoryPatch::Clear
            } else {
                CategoryPatch::Set(category)
            },
            priority: if priority.is_empty() { None } else { Some(priority) },
        };

        match self.service.update(id, args) {
            Ok(Some(todo)) => {
                let message = format!("Todo {} updated", todo.id);
                writeln!(self.out, "\n{}", format::success_line(&message))?;
                writeln!(self.out, "  Title: {}", todo.title)?;
                let category = todo.category.as_deref().unwrap_or("none");
                writeln!(self.out, "  Category: {category}")?;
                writeln!(self.out, "  Priority: {}", todo.priority)?;
            }
            Ok(None) => {
                self.print_not_found(id)?;
            }
            Err(err) => {
                writeln!(self.out, "\n{}", format::error_line(&err.to_string()))?;
            }
        }
        self.pause()
    }

    pub(crate) fn handle_delete(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}", format::header("DELETE TODO"))?;

        let Some(id) = self.prompt_todo_id()? else {
            return self.pause();
        };

        let answer = self.prompt(&format!("Delete todo {id} permanently? [y/N]: "))?;
        if !input::is_confirmation(&answer) {
            writeln!(self.out, "\nDelete cancelled.")?;
            return self.pause();
        }

        if self.service.delete(id) {
            let message = format!("Todo {id} deleted");
            writeln!(self.out, "\n{}", format::success_line(&message))?;
        } else {
            self.print_not_found(id)?;
        }
        self.pause()
    }

    pub(crate) fn handle_filter_category(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}", format::header("TODOS BY CATEGORY"))?;

        let category = self.prompt("\nCategory: ")?;
        let todos = self.service.get_by_category(&category);
        if todos.is_empty() {
            writeln!(self.out, "\nNo todos in category '{}'", category.to_lowercase())?;
        } else {
            writeln!(self.out, "\n{}", format::todo_list(&todos, &self.config.display))?;
        }
        self.pause()
    }

    pub(crate) fn handle_filter_priority(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}", format::header("TODOS BY PRIORITY"))?;

        let priority = self.prompt("\nPriority [high/medium/low]: ")?;
        let todos = self.service.get_by_priority(&priority);
        if todos.is_empty() {
            writeln!(
                self.out,
                "\nNo todos with priority '{}'",
                priority.to_lowercase()
            )?;
        } else {
            writeln!(self.out, "\n{}", format::todo_list(&todos, &self.config.display))?;
        }
        self.pause()
    }

    /// Prompts for a todo id; prints the parse error and returns `None`
    /// when the input is not a positive number.
    fn prompt_todo_id(&mut self) -> Result<Option<TodoId>> {
        let raw = self.prompt("\nTodo ID: ")?;
        match input::parse_todo_id(&raw) {
            Ok(id) => Ok(Some(id)),
            Err(message) => {
                writeln!(self.out, "\n{}", format::error_line(&message))?;
                Ok(None)
            }
        }
    }

    fn print_not_found(&mut self, id: TodoId) -> Result<()> {
        let message = format!("No todo with ID {id}");
        writeln!(self.out, "\n{}", format::error_line(&message))?;
        Ok(())
    }
}
