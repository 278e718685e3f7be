use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;

/// Draws the pause overlay as a centered popup over the board.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_popup(area, 60, 30);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[P] Resume"),
        Line::from("[X]/[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.hint))
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the game-over overlay as a centered popup over the board.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: i32,
    high_score: i32,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 45);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GAME OVER").style(Style::new().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(format!("Final score: {score}")),
        Line::from(format!("High score: {high_score}")),
        Line::from(if score >= high_score && score > 0 {
            "New high score!"
        } else {
            ""
        }),
        Line::from(""),
        Line::from("[Enter]/[Space] Play Again"),
        Line::from("[X]/[Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.poison))
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
