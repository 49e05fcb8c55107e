use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, update};
use crate::config;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal — scrawl requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new((size.width, size.height));
        if let Some(config_path) = self.config_path.clone() {
            model.load_rules(&config_path);
        }
        match self.file_path.clone() {
            Some(path) => model.open(&path),
            None => model.set_status("Type Ctrl+S to save, Ctrl+Q to quit."),
        }

        let result = Self::event_loop(&mut terminal, &mut model);

        // Persist the rule set back on normal quit so it round-trips
        // through the same file each session.
        if let (Some(path), Some(rules)) = (&model.config_path, &model.rules)
            && let Err(err) = config::save_rule_set(path, rules)
        {
            tracing::warn!("config save failed: {err:#}");
        }

        ratatui::restore();
        result
    }

    /// One render, one blocking key read, one dispatch, until quit.
    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        loop {
            terminal.draw(|frame| crate::ui::render(model, frame))?;
            model.tick_status();

            if let Some(msg) = Self::handle_event(&event::read()?) {
                *model = update(std::mem::take(model), msg);
                // Save writes to disk, so it runs here rather than in update.
                if msg == Message::Save {
                    model.save();
                }
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}
