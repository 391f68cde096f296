//! Input router - turns key and mouse events into panel-local updates or
//! intents for the App actor.
//!
//! While a modal is open only that modal receives input, so background
//! intents are never produced in that state.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::app::Modal;
use crate::messages::{Intent, LayoutMode, RenderState, RosterView};
use crate::panels::layout::{
    grid_cells, modal_area, scroll_offset, AlertControl, AlertModalLayout, ScreenLayout, ViewControl,
};
use crate::panels::roster::{row_height, visible_rows};
use crate::panels::PanelState;
use crate::messages::render::GridCell;

/// Convert a key event to an intent, updating panel-local state on the way
pub fn route_key(key: KeyEvent, state: &RenderState, panels: &mut PanelState) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Intent::Quit);
    }

    // Help popup swallows the next key
    if panels.show_help {
        panels.show_help = false;
        return None;
    }

    match state.modal {
        Modal::AlertDetail { .. } => alert_modal_keys(key, panels),
        Modal::AddCamera => add_camera_keys(key, panels),
        Modal::Closed => console_keys(key, state, panels),
    }
}

fn alert_modal_keys(key: KeyEvent, panels: &mut PanelState) -> Option<Intent> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Intent::CloseModal),
        KeyCode::Char(' ') => {
            panels.playing = !panels.playing;
            None
        }
        KeyCode::Char('v') => Some(Intent::ViewLive),
        _ => None,
    }
}

fn add_camera_keys(key: KeyEvent, panels: &mut PanelState) -> Option<Intent> {
    let form = &mut panels.form;
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') => Some(Intent::SubmitCamera(form.submission())),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Intent::CloseModal),
        KeyCode::Tab => {
            form.focus_next();
            None
        }
        KeyCode::BackTab => {
            form.focus_prev();
            None
        }
        KeyCode::Up => {
            form.highlight_prev();
            None
        }
        KeyCode::Down => {
            form.highlight_next();
            None
        }
        KeyCode::Enter if form.is_last_field() => Some(Intent::SubmitCamera(form.submission())),
        KeyCode::Enter => {
            form.focus_next();
            None
        }
        KeyCode::Backspace => {
            form.backspace();
            None
        }
        KeyCode::Char(c) => {
            form.insert_char(c);
            None
        }
        _ => None,
    }
}

fn console_keys(key: KeyEvent, state: &RenderState, panels: &mut PanelState) -> Option<Intent> {
    match key.code {
        KeyCode::Char('q') => Some(Intent::Quit),
        KeyCode::Char('?') => {
            panels.show_help = true;
            None
        }
        KeyCode::Tab | KeyCode::BackTab => {
            panels.switch_roster_view(panels.roster_view.toggle(), state);
            None
        }
        KeyCode::Up => {
            panels.cursor_up();
            None
        }
        KeyCode::Down => {
            panels.cursor_down(state);
            None
        }
        KeyCode::Enter => activate_roster_row(panels.roster_view, panels.roster_cursor, state),
        KeyCode::Char('a') => Some(Intent::OpenAddCamera),
        KeyCode::Char('s') => Some(Intent::SetLayout(LayoutMode::Single)),
        KeyCode::Char('g') => Some(Intent::SetLayout(LayoutMode::Grid)),
        KeyCode::Char('l') => Some(Intent::ToggleLayout),
        KeyCode::Left => Some(Intent::SelectPrevCamera),
        KeyCode::Right => Some(Intent::SelectNextCamera),
        _ => None,
    }
}

fn activate_roster_row(view: RosterView, index: usize, state: &RenderState) -> Option<Intent> {
    match view {
        RosterView::Cameras => state
            .roster
            .cameras
            .get(index)
            .map(|camera| Intent::SelectCamera(camera.id)),
        RosterView::Alerts => state
            .roster
            .alerts
            .get(index)
            .map(|alert| Intent::OpenAlert(alert.id)),
    }
}

/// Convert a left click to an intent. `area` is the full frame.
pub fn route_mouse(
    mouse: MouseEvent,
    area: Rect,
    state: &RenderState,
    panels: &mut PanelState,
) -> Option<Intent> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let pos = Position::new(mouse.column, mouse.row);

    if panels.show_help {
        panels.show_help = false;
        return None;
    }

    // Overlay click closes; clicks on the modal content never do
    if let Some(content) = modal_area(&state.modal, area) {
        if !content.contains(pos) {
            return Some(Intent::CloseModal);
        }
        return match state.modal {
            Modal::AlertDetail { .. } => alert_modal_click(pos, content, panels),
            _ => None,
        };
    }

    let layout = ScreenLayout::compute(area);

    if layout.roster_tabs.contains(pos) {
        let view = if pos.x < layout.roster_tabs.x + layout.roster_tabs.width / 2 {
            RosterView::Cameras
        } else {
            RosterView::Alerts
        };
        panels.switch_roster_view(view, state);
        return None;
    }

    if layout.roster_list.contains(pos) {
        let view = panels.roster_view;
        let offset = scroll_offset(panels.roster_cursor, visible_rows(view, layout.roster_list));
        let index = offset + ((pos.y - layout.roster_list.y) / row_height(view)) as usize;
        if index < panels.roster_len(state) {
            panels.roster_cursor = index;
            return activate_roster_row(view, index, state);
        }
        return None;
    }

    if layout.roster_add.contains(pos) && panels.roster_view == RosterView::Cameras {
        return Some(Intent::OpenAddCamera);
    }

    for (control, rect) in ViewControl::ALL.iter().zip(layout.controls) {
        if rect.contains(pos) {
            return Some(match control {
                ViewControl::Prev => Intent::SelectPrevCamera,
                ViewControl::Single => Intent::SetLayout(LayoutMode::Single),
                ViewControl::Grid => Intent::SetLayout(LayoutMode::Grid),
                ViewControl::Next => Intent::SelectNextCamera,
            });
        }
    }

    if state.viewer.layout == LayoutMode::Grid {
        for (cell, rect) in state.viewer.grid.iter().zip(grid_cells(layout.viewer)) {
            if rect.contains(pos) {
                return match cell {
                    GridCell::Camera { feed, .. } => Some(Intent::SelectCamera(feed.id)),
                    GridCell::Empty => Some(Intent::OpenAddCamera),
                };
            }
        }
    }

    None
}

fn alert_modal_click(pos: Position, content: Rect, panels: &mut PanelState) -> Option<Intent> {
    let layout = AlertModalLayout::compute(content);
    let control = AlertControl::ALL
        .iter()
        .zip(layout.controls)
        .find(|(_, rect)| rect.contains(pos))
        .map(|(control, _)| *control)?;
    match control {
        AlertControl::PlayPause => {
            panels.playing = !panels.playing;
            None
        }
        AlertControl::ViewLive => Some(Intent::ViewLive),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ConsoleState;
    use crate::models::{Alert, AlertId, Camera, CameraId, Severity};
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn console() -> ConsoleState {
        ConsoleState::from_seed(
            vec![
                Camera::new(1, "Camera 01", "/c1.jpg", "/c1.png"),
                Camera::new(2, "Camera 02", "/c2.jpg", "/c2.png"),
            ],
            vec![Alert {
                id: AlertId(1),
                severity: Severity::High,
                title: "High risk".into(),
                description: "Violent acts".into(),
                camera_name: "Camera 01".into(),
                camera_id: Some(CameraId(1)),
                time_label: "12h 34m 45s".into(),
                clip: None,
                raised_at: None,
            }],
        )
        .unwrap()
    }

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 30,
    };

    #[test]
    fn test_release_events_are_ignored() {
        let state = console().to_render_state();
        let mut panels = PanelState::default();
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        release.state = KeyEventState::NONE;
        assert!(route_key(release, &state, &mut panels).is_none());
    }

    #[test]
    fn test_roster_navigation_selects_camera() {
        let state = console().to_render_state();
        let mut panels = PanelState::default();
        assert!(route_key(key(KeyCode::Down), &state, &mut panels).is_none());
        assert!(matches!(
            route_key(key(KeyCode::Enter), &state, &mut panels),
            Some(Intent::SelectCamera(CameraId(2)))
        ));
    }

    #[test]
    fn test_alert_view_opens_alert() {
        let state = console().to_render_state();
        let mut panels = PanelState::default();
        route_key(key(KeyCode::Tab), &state, &mut panels);
        assert_eq!(panels.roster_view, RosterView::Alerts);
        assert!(matches!(
            route_key(key(KeyCode::Enter), &state, &mut panels),
            Some(Intent::OpenAlert(AlertId(1)))
        ));
    }

    #[test]
    fn test_modal_blocks_background_keys() {
        let mut console = console();
        console.apply(Intent::OpenAlert(AlertId(1)));
        let state = console.to_render_state();
        let mut panels = PanelState::default();

        for code in [
            KeyCode::Char('g'),
            KeyCode::Char('s'),
            KeyCode::Char('l'),
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Enter,
            KeyCode::Tab,
        ] {
            if let Some(intent) = route_key(key(code), &state, &mut panels) {
                assert!(!intent.is_background(), "{:?} leaked {:?}", code, intent);
            }
        }
        assert_eq!(panels.roster_view, RosterView::Cameras);

        route_key(key(KeyCode::Char(' ')), &state, &mut panels);
        assert!(panels.playing);
        assert!(matches!(
            route_key(key(KeyCode::Char('v')), &state, &mut panels),
            Some(Intent::ViewLive)
        ));
        assert!(matches!(
            route_key(key(KeyCode::Esc), &state, &mut panels),
            Some(Intent::CloseModal)
        ));
    }

    #[test]
    fn test_form_keys_edit_then_submit() {
        let mut console = console();
        console.apply(Intent::OpenAddCamera);
        let state = console.to_render_state();
        let mut panels = PanelState::default();
        panels.sync(&state);

        // 's' and 'g' are text here, not layout shortcuts
        for _ in 0.."Camera 01".len() {
            route_key(key(KeyCode::Backspace), &state, &mut panels);
        }
        for c in "gs".chars() {
            assert!(route_key(key(KeyCode::Char(c)), &state, &mut panels).is_none());
        }

        match route_key(ctrl('s'), &state, &mut panels) {
            Some(Intent::SubmitCamera(form)) => assert_eq!(form.name, "gs"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_enter_on_last_field_submits() {
        let mut console = console();
        console.apply(Intent::OpenAddCamera);
        let state = console.to_render_state();
        let mut panels = PanelState::default();
        panels.sync(&state);

        route_key(key(KeyCode::BackTab), &state, &mut panels);
        assert!(matches!(
            route_key(key(KeyCode::Enter), &state, &mut panels),
            Some(Intent::SubmitCamera(_))
        ));
    }

    #[test]
    fn test_overlay_click_closes_content_click_does_not() {
        let mut console = console();
        console.apply(Intent::OpenAddCamera);
        let state = console.to_render_state();
        let mut panels = PanelState::default();

        let content = modal_area(&state.modal, AREA).unwrap();
        assert!(route_mouse(click(content.x + 2, content.y + 2), AREA, &state, &mut panels).is_none());
        assert!(matches!(
            route_mouse(click(0, 0), AREA, &state, &mut panels),
            Some(Intent::CloseModal)
        ));
    }

    #[test]
    fn test_alert_modal_buttons_respond_to_clicks() {
        let mut console = console();
        console.apply(Intent::OpenAlert(AlertId(1)));
        let state = console.to_render_state();
        let mut panels = PanelState::default();

        let content = modal_area(&state.modal, AREA).unwrap();
        let layout = AlertModalLayout::compute(content);
        let [play, live] = layout.controls;

        assert!(route_mouse(click(play.x + 1, play.y + 1), AREA, &state, &mut panels).is_none());
        assert!(panels.playing);
        route_mouse(click(play.x + 1, play.y + 1), AREA, &state, &mut panels);
        assert!(!panels.playing);

        assert!(matches!(
            route_mouse(click(live.x + 1, live.y + 1), AREA, &state, &mut panels),
            Some(Intent::ViewLive)
        ));

        let details = layout.details;
        assert!(route_mouse(click(details.x, details.y), AREA, &state, &mut panels).is_none());
        assert!(!panels.playing);
    }

    #[test]
    fn test_click_roster_row_and_controls() {
        let state = console().to_render_state();
        let mut panels = PanelState::default();
        let layout = ScreenLayout::compute(AREA);

        let second_row = layout.roster_list.y + row_height(RosterView::Cameras);
        assert!(matches!(
            route_mouse(click(layout.roster_list.x + 1, second_row), AREA, &state, &mut panels),
            Some(Intent::SelectCamera(CameraId(2)))
        ));
        assert_eq!(panels.roster_cursor, 1);

        let grid = layout.controls[2];
        assert!(matches!(
            route_mouse(click(grid.x + 1, grid.y + 1), AREA, &state, &mut panels),
            Some(Intent::SetLayout(LayoutMode::Grid))
        ));

        assert!(matches!(
            route_mouse(click(layout.roster_add.x + 1, layout.roster_add.y), AREA, &state, &mut panels),
            Some(Intent::OpenAddCamera)
        ));
    }

    #[test]
    fn test_click_empty_grid_cell_opens_form() {
        let mut console = console();
        console.apply(Intent::SetLayout(LayoutMode::Grid));
        let state = console.to_render_state();
        let mut panels = PanelState::default();
        let cells = grid_cells(ScreenLayout::compute(AREA).viewer);

        assert!(matches!(
            route_mouse(click(cells[1].x + 2, cells[1].y + 2), AREA, &state, &mut panels),
            Some(Intent::SelectCamera(CameraId(2)))
        ));
        assert!(matches!(
            route_mouse(click(cells[3].x + 2, cells[3].y + 2), AREA, &state, &mut panels),
            Some(Intent::OpenAddCamera)
        ));
    }
}
