use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    GLYPH_BONUS, GLYPH_FOOD, GLYPH_OBSTACLE, GLYPH_POISON, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD,
    Theme,
};
use crate::game::{Phase, Snapshot};
use crate::grid::{GridSize, Position};
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu};

/// Renders one full frame from a read-only state snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot<'_>, theme: &Theme) {
    let area = frame.area();
    let board = board_area(area, snapshot.grid);

    let block = Block::bordered().border_style(Style::new().fg(theme.border));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_obstacles(frame, inner, snapshot, theme);
    render_items(frame, inner, snapshot, theme);
    render_body(frame, inner, snapshot, theme);

    render_hud(frame, area, board, snapshot, theme);

    match snapshot.phase {
        Phase::Paused => render_pause_menu(frame, board, theme),
        Phase::Over => {
            render_game_over_menu(frame, board, snapshot.score, snapshot.high_score, theme);
        }
        Phase::Running => {}
    }
}

/// Fixed-size board rectangle: the playable interior plus the border frame.
fn board_area(area: Rect, grid: GridSize) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: (grid.width + 2).min(area.width),
        height: (grid.height + 2).min(area.height),
    }
}

fn render_obstacles(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for obstacle in snapshot.obstacles {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, *obstacle) else {
            continue;
        };
        buffer.set_string(x, y, GLYPH_OBSTACLE, Style::new().fg(theme.obstacle));
    }
}

fn render_items(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let slots = [
        (snapshot.items.food, GLYPH_FOOD, theme.food),
        (snapshot.items.poison, GLYPH_POISON, theme.poison),
        (snapshot.items.bonus, GLYPH_BONUS, theme.bonus),
    ];

    let buffer = frame.buffer_mut();
    for (slot, glyph, color) in slots {
        let Some(position) = slot else { continue };
        let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, position) else {
            continue;
        };
        buffer.set_string(x, y, glyph, Style::new().fg(color));
    }
}

fn render_body(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let head = snapshot.body.head();

    let buffer = frame.buffer_mut();
    for segment in snapshot.body.segments() {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

/// Maps a logical cell to a terminal cell inside the board frame.
///
/// Logical x starts at 1 (column 0 is the wall), logical y at 0.
fn logical_to_terminal(inner: Rect, grid: GridSize, position: Position) -> Option<(u16, u16)> {
    if !grid.is_in_bounds(position) {
        return None;
    }

    let x_offset = u16::try_from(position.x - 1).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
