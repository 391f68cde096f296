//! Presentation panels - pure renderers over a `RenderState` snapshot
//!
//! Panels keep only cosmetic, panel-local state in [`PanelState`]; anything
//! shared goes up to the App actor as an intent.

pub mod layout;
pub mod header;
pub mod roster;
pub mod viewer;
pub mod alert_modal;
pub mod add_camera;

use ratatui::{prelude::*, widgets::*};

use crate::app::Modal;
use crate::messages::render::NoticeLevel;
use crate::messages::{RenderState, RosterView};
use add_camera::AddCameraForm;
use layout::{modal_area, ScreenLayout};

/// Panel-local UI state. Safe to reset at any time.
#[derive(Debug, Default)]
pub struct PanelState {
    pub roster_view: RosterView,
    pub roster_cursor: usize,
    pub show_help: bool,
    /// Play/pause toggle of the alert player
    pub playing: bool,
    pub form: AddCameraForm,
    last_modal: &'static str,
}

impl PanelState {
    /// Reconcile local state with a new snapshot: fresh form and player
    /// whenever a modal opens, cursor clamped to the current list.
    pub fn sync(&mut self, state: &RenderState) {
        let modal = state.modal.name();
        if modal != self.last_modal {
            match state.modal {
                Modal::AddCamera => self.form = AddCameraForm::default(),
                Modal::AlertDetail { .. } => self.playing = false,
                Modal::Closed => {}
            }
            self.last_modal = modal;
        }

        let len = self.roster_len(state);
        if self.roster_cursor >= len {
            self.roster_cursor = len.saturating_sub(1);
        }
    }

    pub fn roster_len(&self, state: &RenderState) -> usize {
        match self.roster_view {
            RosterView::Cameras => state.roster.cameras.len(),
            RosterView::Alerts => state.roster.alerts.len(),
        }
    }

    /// Switch between the camera and alert lists. The camera list opens
    /// on the selected camera.
    pub fn switch_roster_view(&mut self, view: RosterView, state: &RenderState) {
        if self.roster_view == view {
            return;
        }
        self.roster_view = view;
        self.roster_cursor = match view {
            RosterView::Cameras => state
                .roster
                .selected
                .and_then(|id| state.roster.cameras.iter().position(|c| c.id == id))
                .unwrap_or(0),
            RosterView::Alerts => 0,
        };
    }

    pub fn cursor_up(&mut self) {
        self.roster_cursor = self.roster_cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self, state: &RenderState) {
        if self.roster_cursor + 1 < self.roster_len(state) {
            self.roster_cursor += 1;
        }
    }
}

/// Draw every panel for one frame
pub fn draw(f: &mut Frame, state: &RenderState, panels: &PanelState) {
    let area = f.area();
    let layout = ScreenLayout::compute(area);
    let timestamp = chrono::Local::now().format("%d-%m-%Y %H:%M:%S").to_string();

    header::draw_header(f, state, layout.header);
    roster::draw_roster(f, state, panels, &layout);
    viewer::draw_viewer(f, &state.viewer, &layout, &timestamp);
    draw_status_bar(f, state, layout.status);

    if let Some(modal_rect) = modal_area(&state.modal, area) {
        match &state.modal {
            Modal::AlertDetail { alert, backdrop } => {
                alert_modal::draw_alert_modal(f, alert, backdrop.as_ref(), panels.playing, modal_rect)
            }
            Modal::AddCamera => add_camera::draw_add_camera_modal(f, &panels.form, modal_rect),
            Modal::Closed => {}
        }
    }

    if panels.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let bar = match &state.notice {
        Some(notice) => {
            let color = match notice.level {
                NoticeLevel::Info => Color::Green,
                NoticeLevel::Error => Color::Red,
            };
            Paragraph::new(format!(" {} ", notice.text)).style(Style::default().fg(color))
        }
        None => {
            let hints = match state.modal {
                Modal::Closed => {
                    " Tab:roster | ↑/↓ Enter:pick | a:add | s/g/l:layout | ←/→:camera | ?:help | q:quit "
                }
                Modal::AlertDetail { .. } => " Esc:close | space:play/pause | v:view live ",
                Modal::AddCamera => " Tab:next field | ↑/↓:suggestion | Ctrl+S:add | Esc:cancel ",
            };
            Paragraph::new(hints).style(Style::default().fg(Color::DarkGray))
        }
    };
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = crate::ui::centered_rect(60, 70, area);

    let help_text = r#"
 CAMDECK - Keyboard Shortcuts

 ROSTER
   Tab                Cameras / Alerts
   ↑ / ↓              Move cursor
   Enter              Select camera / open alert
   a                  Add camera

 VIEW
   s / g / l          Single / Grid / toggle layout
   ← / →              Previous / next camera

 ALERT
   space              Play / pause
   v                  View live camera
   Esc                Close

 ADD CAMERA
   Tab / Shift+Tab    Next / previous field
   ↑ / ↓              Pick a discovered device
   Ctrl+S             Add
   Esc                Cancel

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ConsoleState;
    use crate::messages::{Intent, LayoutMode};
    use crate::models::{Camera, CameraId};
    use ratatui::backend::TestBackend;

    fn render_to_text(state: &RenderState, panels: &PanelState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, state, panels)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_empty_grid_renders_four_placeholders() {
        let mut state = ConsoleState::from_seed(Vec::new(), Vec::new()).unwrap();
        state.apply(Intent::SetLayout(LayoutMode::Grid));
        let text = render_to_text(&state.to_render_state(), &PanelState::default());
        assert_eq!(text.matches("No camera available").count(), 4);
    }

    #[test]
    fn test_single_view_shows_selected_feed() {
        let mut state = ConsoleState::from_seed(
            vec![
                Camera::new(1, "Front Door", "/t1.jpg", "/front.png"),
                Camera::new(2, "Back Yard", "/t2.jpg", ""),
            ],
            Vec::new(),
        )
        .unwrap();
        let text = render_to_text(&state.to_render_state(), &PanelState::default());
        assert!(text.contains("/front.png"));
        assert!(!text.contains("[image unavailable]"));

        state.apply(Intent::SelectCamera(CameraId(2)));
        let text = render_to_text(&state.to_render_state(), &PanelState::default());
        assert!(text.contains("[image unavailable]"));
    }

    #[test]
    fn test_alert_modal_draws_player_buttons() {
        let mut state = ConsoleState::from_seed(
            crate::seed::builtin_cameras(),
            crate::seed::builtin_alerts(),
        )
        .unwrap();
        let alert = state.alerts().first().unwrap().id;
        state.apply(Intent::OpenAlert(alert));
        let render = state.to_render_state();

        let mut panels = PanelState::default();
        panels.sync(&render);
        let text = render_to_text(&render, &panels);
        assert!(text.contains("play [space]"));
        assert!(text.contains("View live camera [v]"));

        panels.playing = true;
        assert!(render_to_text(&render, &panels).contains("pause [space]"));
    }

    #[test]
    fn test_sync_resets_form_when_modal_opens() {
        let mut state = ConsoleState::from_seed(Vec::new(), Vec::new()).unwrap();
        let mut panels = PanelState::default();
        panels.form.insert_char('x');

        state.apply(Intent::OpenAddCamera);
        panels.sync(&state.to_render_state());
        assert_eq!(panels.form.submission().name, crate::constants::DEFAULT_CAMERA_NAME);
    }

    #[test]
    fn test_switching_to_cameras_starts_at_selection() {
        let mut state = ConsoleState::from_seed(
            vec![Camera::new(1, "A", "", ""), Camera::new(2, "B", "", "")],
            Vec::new(),
        )
        .unwrap();
        state.apply(Intent::SelectCamera(CameraId(2)));
        let render = state.to_render_state();

        let mut panels = PanelState::default();
        panels.switch_roster_view(RosterView::Alerts, &render);
        assert_eq!(panels.roster_cursor, 0);
        panels.switch_roster_view(RosterView::Cameras, &render);
        assert_eq!(panels.roster_cursor, 1);
    }
}
