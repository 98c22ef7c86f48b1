use crate::ui::app::SelectApp;
use crate::ui::layout::create_layout;
use crate::ui::widgets::{CandidateList, KeyHint, PromptTitle};
use ratatui::{Frame, Terminal, backend::Backend};

pub fn render<B: Backend>(terminal: &mut Terminal<B>, app: &mut SelectApp) -> std::io::Result<()> {
    terminal.draw(|f| render_frame(f, app))?;
    Ok(())
}

fn render_frame(f: &mut Frame, app: &mut SelectApp) {
    let layout = create_layout(f.area());

    f.render_widget(PromptTitle::new(&app.title), layout.title);
    f.render_stateful_widget(
        CandidateList::new(&app.items),
        layout.list,
        &mut app.list_state,
    );
    f.render_widget(KeyHint, layout.hint);
}
