use crate::game::{Cell, GameOutcome, Player, Sequencer, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    sequencer: &Sequencer,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, sequencer, chunks[0]);
    render_board(frame, sequencer, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn controller(sequencer: &Sequencer, player: Player) -> &str {
    sequencer.agent_name(player).unwrap_or("Human")
}

fn render_header(frame: &mut Frame, sequencer: &Sequencer, area: Rect) {
    let (status, color) = match sequencer.winner() {
        Some(GameOutcome::Winner(player)) => (
            format!("{} wins after {} moves", player, sequencer.move_count()),
            player_color(player),
        ),
        Some(GameOutcome::Draw) => ("Draw".to_string(), Color::White),
        None => {
            let player = sequencer.current_player();
            (
                format!("Current Player: {} ({})", player, controller(sequencer, player)),
                player_color(player),
            )
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, sequencer: &Sequencer, selected_column: usize, area: Rect) {
    let board = sequencer.board();
    let last = sequencer.last_move();
    let border = "═".repeat(COLS * 3 + 1);
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{border}╗")));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::One => (" ● ", player_color(Player::One)),
                Cell::Two => (" ● ", player_color(Player::Two)),
            };
            let mut style = Style::default().fg(color);
            if last.is_some_and(|mv| mv.row == row && mv.col == col) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{border}╝")));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
