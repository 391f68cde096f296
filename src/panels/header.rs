use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, APP_VERSION};
use crate::messages::RenderState;

pub fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    let logo = Span::styled(
        format!(" ◉ {} ", APP_NAME),
        Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
    );
    let version = Span::styled(format!(" v{}", APP_VERSION), Style::default().fg(Color::DarkGray));

    let counts = format!(
        " {} | {} cameras · {} alerts ",
        state.header_title(),
        state.roster.cameras.len(),
        state.roster.alerts.len()
    );

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title_bottom(Line::from(counts).right_aligned());
    f.render_widget(Paragraph::new(Line::from(vec![logo, version])).block(block), area);
}
