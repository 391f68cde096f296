//! Roster sidebar: cameras or alerts, plus the add-camera affordance

use ratatui::{prelude::*, widgets::*};

use crate::messages::{RenderState, RosterView};
use crate::panels::layout::{scroll_offset, ScreenLayout, ALERT_ROW_HEIGHT, CAMERA_ROW_HEIGHT};
use crate::panels::PanelState;
use crate::ui::{asset_line, panel_block, render_tabs, severity_color};

/// Height of one roster row for the given view
pub fn row_height(view: RosterView) -> u16 {
    match view {
        RosterView::Cameras => CAMERA_ROW_HEIGHT,
        RosterView::Alerts => ALERT_ROW_HEIGHT,
    }
}

/// Number of rows that fit in the list area
pub fn visible_rows(view: RosterView, list: Rect) -> usize {
    (list.height / row_height(view)) as usize
}

pub fn draw_roster(f: &mut Frame, state: &RenderState, panels: &PanelState, layout: &ScreenLayout) {
    let focused = !state.modal.is_open();
    f.render_widget(panel_block(" Roster ", focused), layout.roster);

    let selected_tab = match panels.roster_view {
        RosterView::Cameras => 0,
        RosterView::Alerts => 1,
    };
    f.render_widget(render_tabs(&["Cameras", "Alerts"], selected_tab), layout.roster_tabs);

    let cursor_style = Style::default().bg(Color::DarkGray);
    let offset = scroll_offset(
        panels.roster_cursor,
        visible_rows(panels.roster_view, layout.roster_list),
    );

    let items: Vec<ListItem> = match panels.roster_view {
        RosterView::Cameras => state
            .roster
            .cameras
            .iter()
            .enumerate()
            .skip(offset)
            .map(|(i, camera)| {
                let is_selected = state.roster.selected == Some(camera.id);
                let marker = if is_selected { "● " } else { "○ " };
                let name_style = if is_selected {
                    Style::default().fg(Color::Cyan).bold()
                } else {
                    Style::default()
                };
                let item = ListItem::new(vec![
                    Line::from(vec![Span::raw(marker), Span::styled(camera.name.clone(), name_style)]),
                    asset_line(&camera.thumbnail),
                ]);
                if i == panels.roster_cursor {
                    item.style(cursor_style)
                } else {
                    item
                }
            })
            .collect(),
        RosterView::Alerts => state
            .roster
            .alerts
            .iter()
            .enumerate()
            .skip(offset)
            .map(|(i, alert)| {
                let color = severity_color(alert.severity);
                let item = ListItem::new(vec![
                    Line::from(vec![
                        Span::styled("▌", Style::default().fg(color)),
                        Span::styled(alert.title.clone(), Style::default().fg(color).bold()),
                    ]),
                    Line::from(Span::styled(
                        format!(" {}", alert.description),
                        Style::default().fg(Color::Gray),
                    )),
                ]);
                if i == panels.roster_cursor {
                    item.style(cursor_style)
                } else {
                    item
                }
            })
            .collect(),
    };

    let empty_hint = match panels.roster_view {
        RosterView::Cameras if state.roster.cameras.is_empty() => Some("No cameras yet"),
        RosterView::Alerts if state.roster.alerts.is_empty() => Some("No alerts"),
        _ => None,
    };
    match empty_hint {
        Some(hint) => f.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            layout.roster_list,
        ),
        None => f.render_widget(List::new(items), layout.roster_list),
    }

    if panels.roster_view == RosterView::Cameras {
        let add = Paragraph::new("[+] Add camera (a)")
            .style(Style::default().fg(Color::Green).bold())
            .alignment(Alignment::Center);
        f.render_widget(add, layout.roster_add);
    }
}
