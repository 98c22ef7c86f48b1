use crate::types::{Container, Workload};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

pub const ICON_SELECT: &str = "▸ ";
pub const ICON_GOOD: &str = "✔";

pub fn pod_label(workload: &Workload) -> Line<'static> {
    Line::from(vec![
        Span::raw("Namespace: "),
        Span::styled(workload.namespace.clone(), Style::default().fg(Color::Blue)),
        Span::raw(" | Pod: "),
        Span::styled(workload.name.clone(), Style::default().fg(Color::Magenta)),
    ])
}

pub fn container_label(container: &Container) -> Line<'static> {
    Line::from(vec![
        Span::raw("Container: "),
        Span::styled(container.name.clone(), Style::default().fg(Color::Magenta)),
    ])
}

pub struct CandidateList<'a> {
    items: &'a [Line<'static>],
}

impl<'a> CandidateList<'a> {
    pub fn new(items: &'a [Line<'static>]) -> Self {
        Self { items }
    }
}

impl<'a> StatefulWidget for CandidateList<'a> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|line| ListItem::new(line.clone()))
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
            .highlight_symbol(ICON_SELECT);

        StatefulWidget::render(list, area, buf, state);
    }
}

pub struct PromptTitle<'a> {
    title: &'a str,
}

impl<'a> PromptTitle<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }
}

impl<'a> Widget for PromptTitle<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("? ", Style::default().fg(Color::Green)),
            Span::styled(
                format!("{}:", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

pub struct KeyHint;

impl Widget for KeyHint {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hint = Span::styled(
            "↑/↓ move · enter select · esc cancel",
            Style::default().fg(Color::DarkGray),
        );
        Paragraph::new(Line::from(hint)).render(area, buf);
    }
}
