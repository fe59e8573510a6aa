//! Line-based interactive wizard session for `th new`.
//!
//! Every line read from the input is one command applied to an open
//! [`Wizard`]. The draft is written through after each change, so leaving the
//! session at any point (end of input, Ctrl-D) keeps the draft for next time.

use std::io::BufRead;

use anyhow::{Context, Result};
use log::{debug, info};
use trailhead_core::{
    display::CreateResult,
    models::ActivityCategory,
    params::SetSchedule,
    wizard::{ScrollLock, ShellState, WizardStep},
    FileDraftStore, Notification, Organizer, Wizard,
};

use crate::renderer::TerminalRenderer;

const HELP: &str = "\
# Commands

- `<activity>` or `category <activity>`: choose hiking, cycling, via-ferrata, skiing, bouldering or social
- `<id>` or `route <id>`: select a route, again to clear it
- `date YYYY-MM-DD`, `time HH:MM` or `time tbc`
- `name <text>`, `capacity <number>`
- `next`, `back`, `submit`
- `close`: leave the wizard, keeping or discarding the draft
";

const DISCARD_PROMPT: &str =
    "Discard this draft? Type 'yes' to discard, anything else to keep editing.\n";

/// One parsed line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Next,
    Back,
    Close,
    Submit,
    Help,
    Category(ActivityCategory),
    Route(u64),
    Date(String),
    Time(String),
    Name(String),
    Capacity(String),
}

/// Parses a line of input on the given step.
///
/// Bare values are accepted where the step makes them unambiguous: an
/// activity on the category step and a route id on the route step.
pub fn parse_input(line: &str, step: WizardStep) -> Result<Input, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let input = match verb.to_ascii_lowercase().as_str() {
        "" | "help" | "?" => Input::Help,
        "next" | "n" => Input::Next,
        "back" | "b" => Input::Back,
        "close" | "quit" | "q" => Input::Close,
        "submit" => Input::Submit,
        "category" => Input::Category(rest.parse()?),
        "route" => Input::Route(parse_route_id(rest)?),
        "date" if !rest.is_empty() => Input::Date(rest.to_string()),
        "time" if !rest.is_empty() => Input::Time(rest.to_string()),
        "name" => Input::Name(rest.to_string()),
        "capacity" => Input::Capacity(rest.to_string()),
        _ if step == WizardStep::Category && rest.is_empty() => Input::Category(verb.parse()?),
        _ if step == WizardStep::Route && rest.is_empty() => Input::Route(parse_route_id(verb)?),
        _ => return Err(format!("Unknown command '{line}'. Type 'help' for a list.")),
    };
    Ok(input)
}

fn parse_route_id(raw: &str) -> Result<u64, String> {
    raw.parse().map_err(|_| format!("'{raw}' is not a route id"))
}

fn is_yes(line: &str) -> bool {
    matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "discard"
    )
}

/// An interactive session over the organizer's draft file.
pub struct Session<'a> {
    organizer: &'a Organizer,
    renderer: &'a TerminalRenderer,
    wizard: Wizard<FileDraftStore>,
}

impl<'a> Session<'a> {
    pub fn new(organizer: &'a Organizer, renderer: &'a TerminalRenderer) -> Self {
        Self {
            organizer,
            renderer,
            wizard: organizer.wizard(ScrollLock::new()),
        }
    }

    /// Runs the session until the wizard closes or the input ends.
    pub async fn run<R: BufRead>(mut self, input: R) -> Result<()> {
        self.wizard.open().context("Failed to open the wizard")?;
        self.render_screen()?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            debug!("session input: {line:?}");

            if self.wizard.state() == ShellState::ConfirmingDiscard {
                if is_yes(&line) {
                    self.wizard.discard();
                    return self.notify(Notification::success("Draft discarded"));
                }
                self.wizard.continue_editing();
                self.render_screen()?;
                continue;
            }

            match parse_input(&line, self.wizard.step()) {
                Ok(input) => {
                    if self.apply(input).await? {
                        return Ok(());
                    }
                }
                Err(message) => self.notify(Notification::failure(message))?,
            }
        }

        info!("Input closed, draft kept");
        Ok(())
    }

    /// Applies one input. Returns true once the wizard has closed.
    async fn apply(&mut self, input: Input) -> Result<bool> {
        let catalog = self.organizer.catalog();
        let edited = match input {
            Input::Help => {
                self.renderer.render(HELP)?;
                return Ok(false);
            }
            Input::Close => match self.wizard.request_close() {
                ShellState::Closed => {
                    self.notify(Notification::success("Wizard closed"))?;
                    return Ok(true);
                }
                _ => {
                    self.renderer.render(DISCARD_PROMPT)?;
                    return Ok(false);
                }
            },
            Input::Submit => {
                return match self.wizard.submit(&self.organizer.gateway()).await {
                    Ok(event) => {
                        self.renderer.render(&CreateResult::new(event).to_string())?;
                        Ok(true)
                    }
                    Err(e) => {
                        self.notify(Notification::from(&e))?;
                        Ok(false)
                    }
                };
            }
            Input::Next => self.wizard.next().map(|_| ()),
            Input::Back => self.wizard.back().map(|_| ()),
            Input::Category(category) => self.wizard.select_category(category),
            Input::Route(id) => self.wizard.toggle_route(id, catalog).map(|_| ()),
            Input::Date(date) => self.wizard.apply_schedule(&SetSchedule {
                date: Some(date),
                time: None,
            }),
            Input::Time(time) => self.wizard.apply_schedule(&SetSchedule {
                date: None,
                time: Some(time),
            }),
            Input::Name(name) => self.wizard.set_name(name),
            Input::Capacity(raw) => self.wizard.set_capacity_input(&raw).map(|_| ()),
        };

        match edited {
            Ok(()) => self.render_screen()?,
            Err(e) => self.notify(Notification::failure(e.to_string()))?,
        }
        Ok(false)
    }

    fn render_screen(&self) -> Result<()> {
        let screen = self.wizard.screen(self.organizer.catalog());
        self.renderer.render(&screen.to_string())
    }

    fn notify(&self, notification: Notification) -> Result<()> {
        self.renderer.render(&notification.to_string())
    }
}
