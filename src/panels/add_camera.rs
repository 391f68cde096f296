//! Add-camera form: self-contained field state and its modal

use ratatui::{prelude::*, widgets::*};

use crate::constants::{
    DEFAULT_CAMERA_NAME, DEFAULT_LIVE_STREAM_URL, DEFAULT_SERVICE_URL, ONVIF_SUGGESTIONS,
};
use crate::models::NewCamera;
use crate::ui::mask;

/// Form fields in focus order
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormField {
    Name,
    Notes,
    Username,
    Password,
    ServiceUrl,
    LiveStreamUrl,
}

impl FormField {
    pub fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::Notes,
            FormField::Notes => FormField::Username,
            FormField::Username => FormField::Password,
            FormField::Password => FormField::ServiceUrl,
            FormField::ServiceUrl => FormField::LiveStreamUrl,
            FormField::LiveStreamUrl => FormField::Name,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::Name => FormField::LiveStreamUrl,
            FormField::Notes => FormField::Name,
            FormField::Username => FormField::Notes,
            FormField::Password => FormField::Username,
            FormField::ServiceUrl => FormField::Password,
            FormField::LiveStreamUrl => FormField::ServiceUrl,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Notes => "Notes",
            FormField::Username => "Username",
            FormField::Password => "Password",
            FormField::ServiceUrl => "Service URL",
            FormField::LiveStreamUrl => "Live RTSP URL",
        }
    }
}

/// Field values, focus and highlighted suggestion. Reset every time the
/// modal opens; none of it is shared with the state owner until submit.
#[derive(Debug, Clone)]
pub struct AddCameraForm {
    values: NewCamera,
    focus: FormField,
    suggestion: Option<usize>,
}

impl Default for AddCameraForm {
    fn default() -> Self {
        AddCameraForm {
            values: NewCamera {
                name: String::from(DEFAULT_CAMERA_NAME),
                service_url: String::from(DEFAULT_SERVICE_URL),
                live_stream_url: String::from(DEFAULT_LIVE_STREAM_URL),
                ..Default::default()
            },
            focus: FormField::Name,
            suggestion: None,
        }
    }
}

impl AddCameraForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.values.name,
            FormField::Notes => &self.values.notes,
            FormField::Username => &self.values.username,
            FormField::Password => &self.values.password,
            FormField::ServiceUrl => &self.values.service_url,
            FormField::LiveStreamUrl => &self.values.live_stream_url,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.values.name,
            FormField::Notes => &mut self.values.notes,
            FormField::Username => &mut self.values.username,
            FormField::Password => &mut self.values.password,
            FormField::ServiceUrl => &mut self.values.service_url,
            FormField::LiveStreamUrl => &mut self.values.live_stream_url,
        }
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn is_last_field(&self) -> bool {
        self.focus == FormField::LiveStreamUrl
    }

    pub fn insert_char(&mut self, c: char) {
        let field = self.focus;
        self.value_mut(field).push(c);
    }

    pub fn backspace(&mut self) {
        let field = self.focus;
        self.value_mut(field).pop();
    }

    pub fn suggestion(&self) -> Option<usize> {
        self.suggestion
    }

    /// Highlight the next discovered device and copy its service URL
    pub fn highlight_next(&mut self) {
        let next = match self.suggestion {
            Some(i) => (i + 1) % ONVIF_SUGGESTIONS.len(),
            None => 0,
        };
        self.highlight(next);
    }

    pub fn highlight_prev(&mut self) {
        let prev = match self.suggestion {
            Some(i) => i.checked_sub(1).unwrap_or(ONVIF_SUGGESTIONS.len() - 1),
            None => ONVIF_SUGGESTIONS.len() - 1,
        };
        self.highlight(prev);
    }

    fn highlight(&mut self, index: usize) {
        if let Some((_, url)) = ONVIF_SUGGESTIONS.get(index) {
            self.suggestion = Some(index);
            self.values.service_url = String::from(*url);
        }
    }

    pub fn submission(&self) -> NewCamera {
        self.values.clone()
    }
}

fn field_widget(form: &AddCameraForm, field: FormField) -> Paragraph<'static> {
    let focused = form.focus() == field;
    let raw = form.value(field);
    let shown = if field == FormField::Password {
        mask(raw)
    } else {
        raw.to_string()
    };
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Paragraph::new(shown)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {} ", field.label())),
        )
}

fn set_cursor(f: &mut Frame, form: &AddCameraForm, field: FormField, area: Rect) {
    if form.focus() != field {
        return;
    }
    let len = form.value(field).chars().count() as u16;
    let max_x = area.x + area.width.saturating_sub(2);
    let cursor_x = (area.x + len + 1).min(max_x);
    f.set_cursor_position(Position::new(cursor_x, area.y + 1));
}

pub fn draw_add_camera_modal(f: &mut Frame, form: &AddCameraForm, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" Add IP camera (ONVIF) ")
        .title_bottom(Line::from(" Esc: cancel | Ctrl+S: add ").right_aligned())
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let intro = Paragraph::new("Enter the credentials configured on the camera to add it to the console.")
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    f.render_widget(intro, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(columns[0]);
    for (field, rect) in [(FormField::Name, left[0]), (FormField::Notes, left[1])] {
        f.render_widget(field_widget(form, field), rect);
        set_cursor(f, form, field, rect);
    }

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(3), // Service URL
            Constraint::Length(4), // Suggestions
            Constraint::Length(3), // Live stream URL
            Constraint::Min(0),
        ])
        .split(columns[1]);

    let fields = [
        (FormField::Username, right[0]),
        (FormField::Password, right[1]),
        (FormField::ServiceUrl, right[2]),
        (FormField::LiveStreamUrl, right[4]),
    ];
    for (field, rect) in fields {
        f.render_widget(field_widget(form, field), rect);
        set_cursor(f, form, field, rect);
    }

    let items: Vec<ListItem> = ONVIF_SUGGESTIONS
        .iter()
        .enumerate()
        .map(|(i, (name, url))| {
            let style = if form.suggestion() == Some(i) {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}  {}", name, url)).style(style)
        })
        .collect();
    let suggestions = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Available (↑/↓ to pick) "),
    );
    f.render_widget(suggestions, right[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form_placeholders() {
        let form = AddCameraForm::default();
        let values = form.submission();
        assert_eq!(values.name, DEFAULT_CAMERA_NAME);
        assert_eq!(values.service_url, DEFAULT_SERVICE_URL);
        assert_eq!(values.live_stream_url, DEFAULT_LIVE_STREAM_URL);
        assert!(values.password.is_empty());
        assert_eq!(form.focus(), FormField::Name);
    }

    #[test]
    fn test_typing_edits_focused_field_only() {
        let mut form = AddCameraForm::default();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), FormField::Username);
        for c in "admin".chars() {
            form.insert_char(c);
        }
        form.backspace();
        assert_eq!(form.value(FormField::Username), "admi");
        assert_eq!(form.value(FormField::Name), DEFAULT_CAMERA_NAME);
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = AddCameraForm::default();
        form.focus_prev();
        assert!(form.is_last_field());
        form.focus_next();
        assert_eq!(form.focus(), FormField::Name);
    }

    #[test]
    fn test_highlight_copies_service_url() {
        let mut form = AddCameraForm::default();
        assert_eq!(form.suggestion(), None);
        form.highlight_next();
        assert_eq!(form.suggestion(), Some(0));
        assert_eq!(form.value(FormField::ServiceUrl), ONVIF_SUGGESTIONS[0].1);
        form.highlight_next();
        form.highlight_next();
        assert_eq!(form.suggestion(), Some(0));
        form.highlight_prev();
        assert_eq!(form.suggestion(), Some(1));
        assert_eq!(form.value(FormField::ServiceUrl), ONVIF_SUGGESTIONS[1].1);
    }
}
