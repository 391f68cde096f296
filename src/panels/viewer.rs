//! Viewing pane: single feed or 2x2 grid, plus the layout controls

use ratatui::{prelude::*, widgets::*};

use crate::messages::render::{FeedProps, GridCell, ViewerProps};
use crate::messages::LayoutMode;
use crate::panels::layout::{grid_cells, ScreenLayout, ViewControl};
use crate::ui::{asset_line, button, panel_block};

pub fn draw_viewer(f: &mut Frame, viewer: &ViewerProps, layout: &ScreenLayout, timestamp: &str) {
    match viewer.layout {
        LayoutMode::Single => draw_single(f, viewer.camera.as_ref(), layout.viewer, timestamp),
        LayoutMode::Grid => draw_grid(f, viewer, layout.viewer, timestamp),
    }

    for (control, rect) in ViewControl::ALL.iter().zip(layout.controls) {
        let active = match control {
            ViewControl::Single => viewer.layout == LayoutMode::Single,
            ViewControl::Grid => viewer.layout == LayoutMode::Grid,
            _ => false,
        };
        f.render_widget(button(control.label(), active), rect);
    }
}

fn feed_body(feed: &FeedProps, timestamp: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        asset_line(&feed.feed).centered(),
        Line::from(""),
        Line::from(Span::styled(
            timestamp.to_string(),
            Style::default().fg(Color::White).bold(),
        ))
        .right_aligned(),
    ]
}

fn draw_single(f: &mut Frame, camera: Option<&FeedProps>, area: Rect, timestamp: &str) {
    match camera {
        Some(feed) => {
            let block = panel_block(format!(" {} ", feed.name), true);
            f.render_widget(Paragraph::new(feed_body(feed, timestamp)).block(block), area);
        }
        None => {
            let content = "No camera selected.\n\nPress 'a' to add a camera.";
            let paragraph = Paragraph::new(content)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(panel_block(" No camera ", false));
            f.render_widget(paragraph, area);
        }
    }
}

fn draw_grid(f: &mut Frame, viewer: &ViewerProps, area: Rect, timestamp: &str) {
    for (cell, rect) in viewer.grid.iter().zip(grid_cells(area)) {
        match cell {
            GridCell::Camera { feed, selected } => {
                let block = panel_block(format!(" {} ", feed.name), *selected);
                f.render_widget(Paragraph::new(feed_body(feed, timestamp)).block(block), rect);
            }
            GridCell::Empty => {
                let body = vec![
                    Line::from(""),
                    Line::from("⊘").centered(),
                    Line::from("No camera available").centered(),
                    Line::from(Span::styled("Add a camera", Style::default().fg(Color::DarkGray)))
                        .centered(),
                ];
                let paragraph = Paragraph::new(body)
                    .style(Style::default().fg(Color::Gray))
                    .block(panel_block("", false));
                f.render_widget(paragraph, rect);
            }
        }
    }
}
