use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

/// Render the one-row status bar: transient message on the left, file name
/// and cursor position on the right, in reverse video.
///
/// The right segment stays flush with the right edge; when the bar is too
/// narrow for both, the transient message is truncated, not the file info.
pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let left = model.status_text().unwrap_or_default();
    let name = model.file_path.as_ref().map_or_else(
        || "newfile".to_string(),
        |path| path.display().to_string(),
    );
    let right = format!(
        "[ {} ] L: {}, C: {}",
        name,
        model.cursor.row + 1,
        model.cursor.col + 1
    );

    let width = area.width as usize;
    let left_budget = width.saturating_sub(right.chars().count());
    let left: String = left.chars().take(left_budget).collect();
    let gap = left_budget - left.chars().count();
    let text = format!("{left}{}{right}", " ".repeat(gap));

    let bar = Paragraph::new(text).style(Style::new().add_modifier(Modifier::REVERSED));
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn status_row(model: &Model, width: u16) -> String {
        let backend = TestBackend::new(width, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_status_bar(model, frame, Rect::new(0, 1, width, 1)))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..width).map(|x| buffer[(x, 1)].symbol().to_string()).collect()
    }

    #[test]
    fn test_status_bar_shows_position_one_based() {
        let mut model = Model::new((60, 10));
        model.cursor = crate::app::Cursor::at(2, 4);
        let row = status_row(&model, 60);
        assert!(row.contains("L: 3, C: 5"));
        assert!(row.contains("[ newfile ]"));
    }

    #[test]
    fn test_status_bar_shows_message_and_filename() {
        let mut model = Model::new((60, 10));
        model.file_path = Some(std::path::PathBuf::from("doc.txt"));
        model.set_status("File saved successfully!");
        let row = status_row(&model, 60);
        assert!(row.starts_with("File saved successfully!"));
        assert!(row.contains("[ doc.txt ]"));
    }

    #[test]
    fn test_narrow_bar_truncates_message_not_file_info() {
        let mut model = Model::new((30, 10));
        model.file_path = Some(std::path::PathBuf::from("doc.txt"));
        model.set_status("File saved successfully!");
        let row = status_row(&model, 30);
        assert!(row.ends_with("[ doc.txt ] L: 1, C: 1"));
        assert!(row.starts_with("File sav"));
    }
}
