pub mod app;
pub mod events;
pub mod layout;
pub mod renderer;
pub mod widgets;

pub use app::{PromptState, SelectApp};

use crate::error::ClogsError;
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, TerminalOptions, Viewport, backend::CrosstermBackend, text::Line};
use tracing::debug;

/// A single-choice prompt over labelled items.
pub trait Prompt {
    /// Returns the confirmed index, or `None` when the user aborts.
    fn select(&mut self, title: &str, items: Vec<Line<'static>>)
    -> Result<Option<usize>, ClogsError>;
}

/// Arrow-key menu drawn inline on stderr, leaving stdout to the log output.
#[derive(Default)]
pub struct TerminalPrompt;

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> std::io::Result<Self> {
        enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

impl Prompt for TerminalPrompt {
    fn select(
        &mut self,
        title: &str,
        items: Vec<Line<'static>>,
    ) -> Result<Option<usize>, ClogsError> {
        let height = layout::viewport_height(items.len());
        let mut app = SelectApp::new(title, items);
        app.start();

        {
            let _raw = RawModeGuard::enable()?;
            let backend = CrosstermBackend::new(std::io::stderr());
            let mut terminal = Terminal::with_options(
                backend,
                TerminalOptions {
                    viewport: Viewport::Inline(height),
                },
            )?;

            while !app.state.is_terminal() {
                renderer::render(&mut terminal, &mut app)?;
                if let Event::Key(key) = event::read()? {
                    events::handle_key_event(&mut app, key);
                }
            }
            terminal.clear()?;
        }

        match app.state {
            PromptState::Selected(i) => {
                debug!(title, index = i, "Prompt confirmed");
                eprintln!("{} {}", widgets::ICON_GOOD, app.items[i]);
                Ok(Some(i))
            }
            _ => {
                debug!(title, "Prompt aborted");
                Ok(None)
            }
        }
    }
}
