use ratatui::{prelude::*, widgets::*};

use crate::models::{AssetRef, Severity};

/// Renders tabs
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider("|")
}

/// A bordered block, highlighted when focused or selected
pub fn panel_block(title: impl Into<Line<'static>>, highlighted: bool) -> Block<'static> {
    let border_style = if highlighted {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

/// Severity color
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => Color::Red,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Green,
    }
}

/// Display line for an image or feed reference. Missing assets degrade to
/// a placeholder instead of failing the frame.
pub fn asset_line(asset: &AssetRef) -> Line<'static> {
    match asset.resolve() {
        Ok(reference) => Line::from(Span::styled(
            format!("▶ {}", reference),
            Style::default().fg(Color::Gray),
        )),
        Err(_) => Line::from(Span::styled(
            "[image unavailable]",
            Style::default().fg(Color::DarkGray).italic(),
        )),
    }
}

/// A one-line button label
pub fn button(label: &str, active: bool) -> Paragraph<'_> {
    let style = if active {
        Style::default().fg(Color::Black).bg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Mask a secret for display
pub fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_sits_inside_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 50, parent);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 10);
    }

    #[test]
    fn test_missing_asset_renders_placeholder() {
        let line = asset_line(&AssetRef::new(""));
        assert_eq!(line.to_string(), "[image unavailable]");
        let line = asset_line(&AssetRef::new("/feed.png"));
        assert_eq!(line.to_string(), "▶ /feed.png");
    }

    #[test]
    fn test_mask_counts_chars() {
        assert_eq!(mask("pässwd"), "******");
        assert_eq!(mask(""), "");
    }
}
