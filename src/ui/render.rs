use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;
use crate::highlight::{Category, classify};

use super::status;

/// Render the complete UI: visible buffer rows, status bar, and the
/// hardware cursor at the logical edit position.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    if area.height == 0 {
        return;
    }
    let text_area = Rect::new(0, 0, area.width, area.height - 1);
    let status_area = Rect::new(0, area.height - 1, area.width, 1);

    render_buffer(model, frame, text_area);
    status::render_status_bar(model, frame, status_area);

    let screen_row = model.cursor.row.saturating_sub(model.viewport.offset_y());
    frame.set_cursor_position(Position::new(
        clamp_coord(model.cursor.col, area.width),
        clamp_coord(screen_row, text_area.height),
    ));
}

fn render_buffer(model: &Model, frame: &mut Frame, area: Rect) {
    let rules = model.rules.as_ref();
    let lines: Vec<Line> = model
        .viewport
        .visible_range(model.buffer.line_count())
        .filter_map(|row| model.buffer.line(row))
        .map(|line| {
            let text = line.text();
            let spans: Vec<Span> = classify(text, rules)
                .map(|run| {
                    Span::styled(
                        text[run.start..run.end].to_string(),
                        style_for_category(run.category),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Color scheme for classified runs.
const fn style_for_category(category: Category) -> Style {
    match category {
        Category::Plain => Style::new(),
        Category::Keyword => Style::new().fg(Color::Cyan),
        Category::Str => Style::new().fg(Color::Green),
        Category::Number => Style::new().fg(Color::Magenta),
        Category::Comment => Style::new().fg(Color::Yellow),
    }
}

/// Clamp a usize screen coordinate into the u16 range the terminal expects.
fn clamp_coord(value: usize, extent: u16) -> u16 {
    u16::try_from(value)
        .unwrap_or(u16::MAX)
        .min(extent.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(model: &Model, width: u16, height: u16) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(model, frame)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &ratatui::buffer::Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_render_shows_buffer_lines() {
        let mut model = Model::new((20, 5));
        model.buffer = crate::buffer::Buffer::from_text("hello\nworld\n");
        let screen = draw(&model, 20, 5);
        assert!(row_text(&screen, 0).starts_with("hello"));
        assert!(row_text(&screen, 1).starts_with("world"));
    }

    #[test]
    fn test_render_keyword_is_colored() {
        let mut model = Model::new((20, 5));
        model.buffer = crate::buffer::Buffer::from_text("if x\n");
        model.rules = Some(crate::highlight::RuleSet {
            keywords: vec!["if".to_string()],
            comment_markers: vec![],
        });
        let screen = draw(&model, 20, 5);
        assert_eq!(screen[(0, 0)].fg, Color::Cyan);
        assert_eq!(screen[(3, 0)].fg, Color::default());
    }

    #[test]
    fn test_render_without_rules_is_uncolored() {
        let mut model = Model::new((20, 5));
        model.buffer = crate::buffer::Buffer::from_text("if 42 // x\n");
        let screen = draw(&model, 20, 5);
        for x in 0..10 {
            assert_eq!(screen[(x, 0)].fg, Color::default());
        }
    }

    #[test]
    fn test_render_status_bar_on_last_row() {
        let mut model = Model::new((40, 5));
        model.set_status("hello status");
        let screen = draw(&model, 40, 5);
        assert!(row_text(&screen, 4).contains("hello status"));
    }

    #[test]
    fn test_render_scrolled_viewport_starts_at_offset() {
        let mut model = Model::new((20, 5));
        let text: String = (0..50).map(|i| format!("line{i}\n")).collect();
        model.buffer = crate::buffer::Buffer::from_text(&text);
        for _ in 0..30 {
            model.move_cursor(crate::app::Direction::Down);
        }
        let screen = draw(&model, 20, 5);
        let offset = model.viewport.offset_y();
        assert!(row_text(&screen, 0).starts_with(&format!("line{offset}")));
    }
}
