use ratatui::text::Line;
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    Idle,
    Prompting,
    Selected(usize),
    Aborted,
}

impl PromptState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PromptState::Selected(_) | PromptState::Aborted)
    }
}

/// State of one single-choice prompt.
pub struct SelectApp {
    pub title: String,
    pub items: Vec<Line<'static>>,
    pub list_state: ListState,
    pub state: PromptState,
}

impl SelectApp {
    pub fn new(title: &str, items: Vec<Line<'static>>) -> Self {
        Self {
            title: title.to_string(),
            items,
            list_state: ListState::default(),
            state: PromptState::Idle,
        }
    }

    pub fn start(&mut self) {
        if self.state != PromptState::Idle {
            return;
        }
        if self.items.is_empty() {
            self.state = PromptState::Aborted;
            return;
        }
        self.list_state.select(Some(0));
        self.state = PromptState::Prompting;
    }

    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn select_next(&mut self) {
        if let Some(i) = self.cursor() {
            if i + 1 < self.items.len() {
                self.list_state.select(Some(i + 1));
            }
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(i) = self.cursor() {
            self.list_state.select(Some(i.saturating_sub(1)));
        }
    }

    pub fn select_first(&mut self) {
        if !self.items.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.list_state.select(Some(self.items.len() - 1));
        }
    }

    pub fn confirm(&mut self) {
        if self.state != PromptState::Prompting {
            return;
        }
        self.state = match self.cursor() {
            Some(i) if i < self.items.len() => PromptState::Selected(i),
            _ => PromptState::Aborted,
        };
    }

    pub fn abort(&mut self) {
        if self.state == PromptState::Prompting {
            self.state = PromptState::Aborted;
        }
    }
}
