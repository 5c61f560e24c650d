use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::app::App;

/// Draws every tile at its current offset and scale
pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);

        // Leave room for a fully grown tile
        let hover_scale = app.config.hover.hover_scale.max(1.0);
        let base_height = (area.height as f64 / hover_scale).floor().max(3.0);

        // Grown tiles overlap their neighbours
        let mut order: Vec<usize> = (0..app.offsets.len()).collect();
        order.sort_by(|&a, &b| app.scales[a].total_cmp(&app.scales[b]));

        for index in order {
            let Some(rect) = tile_rect(app, area, index, base_height) else {
                continue;
            };
            let Some(slide) = app.slides.get(index) else {
                continue;
            };

            let hovered = app.hovered == Some(index);
            let (border_type, border_color) = if hovered {
                (BorderType::Thick, theme.hover)
            } else {
                (BorderType::Rounded, theme.tile_color(index))
            };

            let title = truncate(&slide.title, rect.width.saturating_sub(4) as usize);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(border_color))
                .title(format!(" {} ", title))
                .style(Style::default().bg(theme.bg1));

            let mut body = vec![
                Line::from(format!("#{}", index + 1))
                    .style(Style::default().fg(border_color).add_modifier(Modifier::BOLD)),
                Line::from(""),
                Line::from(slide.url.to_string()).style(Style::default().fg(theme.grey1)),
            ];
            if let Some(image) = &slide.image_url {
                body.push(Line::from(image.as_str()).style(Style::default().fg(theme.info)));
            }

            let paragraph = Paragraph::new(body)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(theme.fg1));

            frame.render_widget(Clear, rect);
            frame.render_widget(paragraph, rect);
        }
    }
}

/// Screen rectangle of the tile at `index`, clipped to `area`
///
/// Scaling grows the tile around its center. Returns `None` when less than
/// two columns remain visible.
fn tile_rect(app: &App, area: Rect, index: usize, base_height: f64) -> Option<Rect> {
    let scale = *app.scales.get(index)?;
    let offset = *app.offsets.get(index)?;

    let width_px = app.layout.tile_width * scale;
    let left_px = offset - (width_px - app.layout.tile_width) / 2.0;

    let left = area.x as f64 + app.cells.to_columns(left_px);
    let right = left + app.cells.to_columns(width_px);
    let left = left.max(area.left() as f64).round();
    let right = right.min(area.right() as f64).round();
    if right - left < 2.0 {
        return None;
    }

    let height = (base_height * scale).round().min(area.height as f64);
    let top = area.y as f64 + ((area.height as f64 - height) / 2.0).floor();

    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        height as u16,
    ))
}

/// Cut `text` to at most `max_width` display columns
fn truncate(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::{CarouselConfig, SlideManifest};

    use crate::theme::Theme;

    fn app() -> App {
        let slides = SlideManifest::placeholder(5, "https://example.com/").unwrap();
        App::new(CarouselConfig::default(), slides, Theme::default(), 120, 20).unwrap()
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Slide 1", 20), "Slide 1");
        assert_eq!(truncate("Slide 1", 3), "Sli");
        assert_eq!(truncate("海辺の町", 5), "海辺");
    }

    #[test]
    fn test_tile_rect_at_rest() {
        let app = app();
        let area = Rect::new(0, 0, 120, 20);
        let rect = tile_rect(&app, area, 0, 16.0).unwrap();
        assert_eq!(rect.x, 0);
        assert_eq!(rect.width, 36);
        assert_eq!(rect.height, 16);
        assert_eq!(rect.y, 2);
        // Tile 4 lies beyond the right edge
        assert!(tile_rect(&app, area, 4, 16.0).is_none());
    }

    #[test]
    fn test_tile_rect_grows_around_center() {
        let mut app = app();
        app.scales[1] = 1.2;
        let area = Rect::new(0, 0, 120, 20);
        let rest = {
            let mut plain = self::app();
            plain.scales[1] = 1.0;
            tile_rect(&plain, area, 1, 16.0).unwrap()
        };
        let grown = tile_rect(&app, area, 1, 16.0).unwrap();
        assert!(grown.width > rest.width);
        assert!(grown.x < rest.x);
        assert_eq!(grown.height, 19);
    }
}
