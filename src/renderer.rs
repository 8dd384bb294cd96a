use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{CELL_WIDTH, GLYPH_FOOD, GLYPH_SNAKE, Theme};
use crate::game::{GameState, GameStatus};
use crate::grid::{Cell, GridSize};
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme, hud_info: &HudInfo<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, theme, hud_info);
    let board_area = board_rect(play_area, state.grid());

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg).bg(theme.play_bg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    match state.status() {
        GameStatus::Paused => render_pause_menu(frame, board_area, theme),
        GameStatus::Over(reason) => {
            render_game_over_menu(frame, board_area, state.score(), reason, theme);
        }
        GameStatus::Running => {}
    }
}

/// Centers a bordered board of `grid` cells inside `area`.
fn board_rect(area: Rect, grid: GridSize) -> Rect {
    let width = grid.cols().saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = grid.rows().saturating_add(2);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    board
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some(food) = state.food() else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, state.grid(), food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food).bg(theme.play_bg));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let buffer = frame.buffer_mut();

    for (index, segment) in state.snake().segments().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, state.grid(), *segment) else {
            continue;
        };

        let style = if index == 0 {
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(theme.snake_body)
        };
        buffer.set_string(x, y, GLYPH_SNAKE, style);
    }
}

/// Maps a board cell to the terminal column/row of its left half.
fn logical_to_terminal(inner: Rect, grid: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !grid.is_in_bounds(cell) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
