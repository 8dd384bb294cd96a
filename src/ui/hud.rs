use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::{GameState, GameStatus, OverReason, TickOutcome};

/// Supplemental values displayed by the HUD row.
#[derive(Debug, Clone)]
pub struct HudInfo<'a> {
    /// Flavor text for the latest event.
    pub message: &'a str,
}

/// Returns the status message for the latest state and tick outcome.
///
/// `last_outcome` is the most recent tick that actually ran since the last
/// reset, if any.
#[must_use]
pub fn status_message(state: &GameState, last_outcome: Option<TickOutcome>) -> &'static str {
    match state.status() {
        GameStatus::Paused => "Paused (space to resume).",
        GameStatus::Over(reason) => over_message(reason),
        GameStatus::Running => match last_outcome {
            None => "Ready to bake.",
            Some(TickOutcome::Ate) => "Butter acquired.",
            Some(_) => "Baking...",
        },
    }
}

fn over_message(reason: OverReason) -> &'static str {
    match reason {
        OverReason::WallCollision => "Your baguette hit the oven wall. Press R.",
        OverReason::SelfCollision => "You knotted your baguette. Press R.",
        OverReason::BoardFull => "You filled the tray, Master Baker! Press R.",
    }
}

/// Renders the status row and returns the remaining play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    theme: &Theme,
    info: &HudInfo<'_>,
) -> Rect {
    let [play_area, status_area, help_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let score_line = Line::from(vec![
        Span::styled("Butter eaten: ", Style::new().fg(theme.text)),
        Span::styled(
            state.score().to_string(),
            Style::new().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(info.message, Style::new().fg(theme.text)),
    ]);
    frame.render_widget(
        Paragraph::new(score_line).alignment(Alignment::Center),
        status_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from("Arrows/WASD move  |  Space pause  |  R restart  |  Q quit"))
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.border_fg)),
        help_area,
    );

    play_area
}
