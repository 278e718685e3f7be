use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::{Phase, Snapshot};

/// Renders the status lines below the board.
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    board: Rect,
    snapshot: &Snapshot<'_>,
    theme: &Theme,
) {
    let Some(score_row) = row_below(area, board, 0) else {
        return;
    };

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Score: {}", snapshot.score),
                Style::new().fg(theme.hud),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("High Score: {}", snapshot.high_score),
                Style::new().fg(theme.hud),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("Level {}", snapshot.level.number()),
                Style::new().fg(theme.hud),
            ),
        ])),
        score_row,
    );

    let pause_hint = match snapshot.phase {
        Phase::Paused => "Press 'p' to unpause",
        _ => "Press 'p' to pause",
    };

    if let Some(hint_row) = row_below(area, board, 2) {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{pause_hint} | 'x' to exit"),
                Style::new().fg(theme.hint),
            ))),
            hint_row,
        );
    }
}

fn row_below(area: Rect, board: Rect, offset: u16) -> Option<Rect> {
    let y = board.bottom().checked_add(offset)?;
    if y >= area.bottom() {
        return None;
    }

    Some(Rect {
        x: area.x,
        y,
        width: area.width,
        height: 1,
    })
}
