//! Alert detail overlay with a placeholder clip player

use ratatui::{prelude::*, widgets::*};

use crate::models::{Alert, AssetRef};
use crate::panels::layout::{AlertControl, AlertModalLayout};
use crate::ui::{asset_line, button, severity_color};

pub fn draw_alert_modal(
    f: &mut Frame,
    alert: &Alert,
    backdrop: Option<&AssetRef>,
    playing: bool,
    area: Rect,
) {
    let color = severity_color(alert.severity);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", alert.severity.as_str()),
                Style::default().fg(Color::Black).bg(color).bold(),
            ),
            Span::styled(format!(" {} ", alert.title), Style::default().fg(color).bold()),
        ]))
        .title_bottom(Line::from(" Esc: close ").right_aligned())
        .style(Style::default().bg(Color::Black));
    let layout = AlertModalLayout::compute(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let mut details = vec![
        Line::from(Span::styled(
            "Review the clip where the alert was raised",
            Style::default().fg(Color::Gray),
        )),
        Line::from(alert.description.as_str()),
    ];
    let mut source = format!("Camera: {}", alert.camera_name);
    if let Some(raised_at) = alert.raised_at {
        source.push_str(&format!("  ·  {}", raised_at.format("%d-%m-%Y %H:%M:%S")));
    }
    details.push(Line::from(Span::styled(source, Style::default().fg(Color::DarkGray))));
    f.render_widget(Paragraph::new(details).wrap(Wrap { trim: true }), layout.details);

    // The clip itself is not decoded; the camera feed stands in for it
    let mut player = vec![match backdrop {
        Some(feed) => asset_line(feed),
        None => asset_line(&AssetRef::default()),
    }];
    if let Some(clip) = &alert.clip {
        player.push(Line::from(Span::styled(
            format!("clip: {}", clip.as_str()),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let player = Paragraph::new(player)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Clip "));
    f.render_widget(player, layout.player);

    let width = layout.timeline.width as usize;
    let label = format!("{} ", alert.time_label);
    let total = " 00:00:00";
    let track = width.saturating_sub(label.chars().count() + total.len());
    let half = track / 2;
    let timeline = Line::from(vec![
        Span::raw(label),
        Span::styled("━".repeat(half), Style::default().fg(color)),
        Span::styled("●", Style::default().fg(Color::White)),
        Span::styled(
            "━".repeat(track.saturating_sub(half + 1)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(total),
    ]);
    f.render_widget(Paragraph::new(timeline), layout.timeline);

    for (control, rect) in AlertControl::ALL.iter().zip(layout.controls) {
        let widget = match control {
            AlertControl::PlayPause if playing => button("⏸ pause [space]", true),
            AlertControl::PlayPause => button("▶ play [space]", false),
            AlertControl::ViewLive => button("View live camera [v]", true),
        };
        f.render_widget(widget, rect);
    }
}
