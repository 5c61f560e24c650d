use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let scroll = app.controller.scroll();

        let hover_str = match app.hovered {
            Some(index) => format!("Tile {}/{}", index + 1, app.slides.len()),
            None => format!("Tiles: {}", app.slides.len()),
        };

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else {
            format!(
                " {} | {} | Speed: {:+.2} → {:+.2}",
                app.cursor_hint().to_uppercase(),
                hover_str,
                scroll.position(),
                scroll.target()
            )
        };

        let help_hint = " q:quit wheel/drag:scroll click:open ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.grey2).bg(theme.bg2),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
