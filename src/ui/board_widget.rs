use crate::game::{Board, Cell, Player, WinningRun};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// Board lines sized to the board: column numbers, framed grid, and a
/// selection marker under `selected_column`. Cells of `winning_run` are
/// drawn reversed.
pub fn board_lines(
    board: &Board,
    selected_column: Option<usize>,
    winning_run: Option<&WinningRun>,
) -> Vec<Line<'static>> {
    let width = board.width();
    let mut lines = Vec::with_capacity(board.height() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if Some(col) == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for (row, cells) in board.rows().enumerate() {
        let mut row_spans = vec![Span::raw("  ║")];
        for (col, cell) in cells.iter().enumerate() {
            let (symbol, mut style) = match cell {
                Cell::Empty => (" . ", Style::default().fg(Color::DarkGray)),
                Cell::Occupied(player) => (" ● ", Style::default().fg(player_color(*player))),
            };
            if winning_run.is_some_and(|run| run.contains(row, col)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if Some(col) == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

pub fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: Option<usize>,
    winning_run: Option<&WinningRun>,
    area: Rect,
) {
    let widget = Paragraph::new(board_lines(board, selected_column, winning_run))
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_lines_follow_board_size() {
        let board = Board::new(5, 4);
        let lines = board_lines(&board, Some(2), None);
        assert_eq!(lines.len(), 4 + 4);

        let widths: Vec<usize> = lines.iter().map(|line| line.width()).collect();
        assert!(widths.iter().all(|&w| w == widths[0]), "{widths:?}");
        assert_eq!(text(&lines[1]), format!("  ╔{}╗", "═".repeat(16)));
        assert_eq!(
            text(&lines[7]),
            format!("{}▲{}", " ".repeat(10), " ".repeat(9))
        );
    }

    #[test]
    fn test_winning_cells_are_highlighted() {
        let mut board = Board::new(4, 4);
        for col in 0..4 {
            board.drop_piece(col, Player::Two).unwrap();
        }
        board.drop_piece(0, Player::One).unwrap();
        let run = board.check_for_win(Player::Two).unwrap();
        let lines = board_lines(&board, None, Some(&run));

        // Bottom board row sits after the number and border lines
        let bottom = &lines[2 + 3];
        for span in &bottom.spans[1..5] {
            assert!(span.style.add_modifier.contains(Modifier::REVERSED));
            assert_eq!(span.style.fg, Some(Color::Yellow));
        }
        let above = &lines[2 + 2];
        assert!(!above.spans[1].style.add_modifier.contains(Modifier::REVERSED));
        assert_eq!(above.spans[1].style.fg, Some(Color::Red));
    }
}
