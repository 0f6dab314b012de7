//! HUD and full-screen overlays

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;

use super::scene::{bonus_color, draw_bonus_icon};
use super::{BLACK, Color, DrawCommand, Screen, Surface, TextAlign, WHITE, rgb};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{BonusKind, GamePhase, GameState, difficulty_stars};

pub(super) const STAR_FILLED: Color = rgb(0xFFD700, 1.0);
const STAR_EMPTY: Color = rgb(0x333333, 1.0);
const DIM: Color = [0.0, 0.0, 0.0, 0.5];

const STAR_SIZE: f32 = 20.0;
const STAR_SPACING: f32 = 5.0;
const INDICATOR_SIZE: f32 = 30.0;
const INDICATOR_SPACING: f32 = 10.0;

pub(super) fn draw_hud(
    state: &GameState,
    settings: &Settings,
    screen: Screen,
    out: &mut dyn Surface,
) {
    out.draw(text(&state.score.to_string(), Vec2::new(GAME_WIDTH / 2.0, 20.0), 36.0));
    draw_star_row(state.score, Vec2::new(star_row_left(), 20.0), out);
    draw_power_up_indicators(state, out);

    if settings.show_difficulty_info {
        draw_difficulty_info(state, out);
    }

    match (state.phase, screen) {
        (GamePhase::Ready, _) => draw_ready(out),
        (GamePhase::Paused, _) => draw_paused(out),
        (GamePhase::GameOver, Screen::GameOver { new_best }) => {
            draw_game_over(state, new_best, out)
        }
        _ => {}
    }
}

fn text(s: &str, pos: Vec2, size: f32) -> DrawCommand {
    DrawCommand::Text {
        text: s.to_string(),
        pos,
        size,
        color: WHITE,
        outline: Some(BLACK),
        align: TextAlign::Center,
    }
}

fn star_row_width() -> f32 {
    let n = MAX_DIFFICULTY_STARS as f32;
    STAR_SIZE * n + STAR_SPACING * (n - 1.0)
}

/// Stars hug the top-right corner
fn star_row_left() -> f32 {
    GAME_WIDTH - star_row_width() - 10.0
}

/// Five difficulty stars, the first `difficulty_stars(score)` filled
fn draw_star_row(score: u32, left: Vec2, out: &mut dyn Surface) {
    let filled = difficulty_stars(score);
    for i in 0..MAX_DIFFICULTY_STARS {
        let center = left + Vec2::new(i as f32 * (STAR_SIZE + STAR_SPACING) + STAR_SIZE / 2.0, 0.0);
        out.draw(DrawCommand::Star {
            center,
            radius: STAR_SIZE / 2.0,
            fill: if i < filled { STAR_FILLED } else { STAR_EMPTY },
        });
    }
}

/// Active power-ups stacked down the left edge, each with a draining timer ring
fn draw_power_up_indicators(state: &GameState, out: &mut dyn Surface) {
    let fx = &state.effects;
    let active = [
        (
            BonusKind::Shield,
            state.actor.has_shield,
            state.actor.shield_progress(),
        ),
        (
            BonusKind::SlowMo,
            fx.slow_motion,
            fx.slow_motion_timer / SLOW_MOTION_DURATION,
        ),
        (
            BonusKind::ScoreBoost,
            fx.score_boost,
            fx.score_boost_timer / SCORE_BOOST_DURATION,
        ),
    ];

    let half = INDICATOR_SIZE / 2.0;
    let mut y = 60.0;
    for (kind, _, progress) in active.into_iter().filter(|(_, on, _)| *on) {
        let center = Vec2::new(10.0 + half, y + half);
        out.draw(DrawCommand::FillCircle {
            center,
            radius: half,
            color: DIM,
        });
        let start = -FRAC_PI_2;
        out.draw(DrawCommand::StrokeArc {
            center,
            radius: half - 2.0,
            start,
            end: start + (1.0 - progress.clamp(0.0, 1.0)) * TAU,
            color: bonus_color(kind),
            width: 2.0,
        });
        draw_bonus_icon(kind, center, half, out);
        y += INDICATOR_SIZE + INDICATOR_SPACING;
    }
}

fn draw_difficulty_info(state: &GameState, out: &mut dyn Surface) {
    let d = &state.difficulty;
    let lines = [
        format!("Speed: {}", state.current_speed.round()),
        format!("Gap: {}", d.gap),
        format!("Interval: {:.1}s", d.spawn_interval),
        format!(
            "Special: {}",
            if d.special_obstacles { "Yes" } else { "No" }
        ),
    ];
    for (i, line) in lines.into_iter().enumerate() {
        out.draw(DrawCommand::Text {
            text: line,
            pos: Vec2::new(10.0, GAME_HEIGHT - GROUND_HEIGHT + 10.0 + i as f32 * 20.0),
            size: 14.0,
            color: WHITE,
            outline: Some(BLACK),
            align: TextAlign::Left,
        });
    }
}

fn dim_screen(out: &mut dyn Surface) {
    out.draw(DrawCommand::FillRect {
        pos: Vec2::ZERO,
        size: Vec2::new(GAME_WIDTH, GAME_HEIGHT),
        color: DIM,
    });
}

fn draw_ready(out: &mut dyn Surface) {
    let mid = Vec2::new(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0);
    out.draw(text("Get Ready!", mid - Vec2::new(0.0, 100.0), 36.0));
    out.draw(text("Tap or press Space to flap", mid + Vec2::new(0.0, 60.0), 20.0));
}

fn draw_paused(out: &mut dyn Surface) {
    let mid = Vec2::new(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0);
    dim_screen(out);
    out.draw(text("PAUSED", mid, 36.0));
    out.draw(text("Press P to resume", mid + Vec2::new(0.0, 40.0), 24.0));
}

fn draw_game_over(state: &GameState, new_best: bool, out: &mut dyn Surface) {
    let mid = Vec2::new(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0);
    dim_screen(out);
    out.draw(text("GAME OVER", mid - Vec2::new(0.0, 80.0), 40.0));
    out.draw(text(&format!("Score: {}", state.score), mid - Vec2::new(0.0, 20.0), 28.0));
    out.draw(text(&format!("Best: {}", state.high_score), mid + Vec2::new(0.0, 15.0), 24.0));
    draw_star_row(
        state.score,
        Vec2::new((GAME_WIDTH - star_row_width()) / 2.0, mid.y + 55.0),
        out,
    );
    if new_best {
        out.draw(DrawCommand::Text {
            text: "NEW BEST!".to_string(),
            pos: mid + Vec2::new(0.0, 90.0),
            size: 24.0,
            color: STAR_FILLED,
            outline: Some(BLACK),
            align: TextAlign::Center,
        });
    }
}
