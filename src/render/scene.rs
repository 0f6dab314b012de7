//! Playfield drawing: scenery, obstacles, pickups, actor, effects

use std::f32::consts::TAU;

use glam::Vec2;

use super::{Assets, BLACK, Color, DrawCommand, Sprite, Surface, TextAlign, WHITE, rgb};
use crate::sim::{
    Aabb, Actor, ActorVariant, Bonus, BonusKind, Effect, EffectKind, Entity, GameState, Obstacle,
    ScrollLayer,
};

pub(super) const SKY: Color = rgb(0x4EC0CA, 1.0);
const OBSTACLE_GREEN: Color = rgb(0x74BF2E, 1.0);
const OBSTACLE_RED: Color = rgb(0xE73C3C, 1.0);
const GROUND_SAND: Color = rgb(0xDED895, 1.0);
const GROUND_EDGE: Color = rgb(0x85643B, 1.0);
const GRASS: Color = rgb(0x8ED943, 1.0);
const SHIELD_BLUE: Color = rgb(0x3498DB, 1.0);
pub(super) const DEBUG_BOX: Color = [1.0, 0.0, 0.0, 1.0];

const OBSTACLE_CAP_HEIGHT: f32 = 20.0;
const OBSTACLE_CAP_OVERHANG: f32 = 5.0;
const GRASS_SPACING: f32 = 30.0;

/// Fill color of each actor variant
pub(super) fn actor_color(variant: ActorVariant) -> Color {
    match variant {
        ActorVariant::Yellow => rgb(0xF8E71C, 1.0),
        ActorVariant::Red => rgb(0xE74C3C, 1.0),
        ActorVariant::Blue => rgb(0x3498DB, 1.0),
    }
}

/// Glow color of each power-up (also used by HUD indicators and banners)
pub(super) fn bonus_color(kind: BonusKind) -> Color {
    match kind {
        BonusKind::Shield => rgb(0x3498DB, 1.0),
        BonusKind::SlowMo => rgb(0x9B59B6, 1.0),
        BonusKind::ScoreBoost => rgb(0xF1C40F, 1.0),
    }
}

fn with_alpha(mut color: Color, alpha: f32) -> Color {
    color[3] *= alpha.clamp(0.0, 1.0);
    color
}

pub(super) fn draw_world(state: &GameState, assets: &dyn Assets, out: &mut dyn Surface) {
    out.draw(DrawCommand::Clear { color: SKY });
    draw_backdrop(&state.backdrop, assets, out);
    for obstacle in &state.obstacles {
        draw_obstacle(obstacle, assets, out);
    }
    for bonus in &state.bonuses {
        draw_bonus(bonus, assets, out);
    }
    draw_ground(&state.ground, assets, out);
    draw_actor(&state.actor, assets, out);
    for effect in &state.transient {
        draw_effect(effect, out);
    }
}

fn draw_backdrop(layer: &ScrollLayer, assets: &dyn Assets, out: &mut dyn Surface) {
    let has_sprite = assets.has_sprite(Sprite::Backdrop);
    for seg in layer.segment_boxes() {
        if has_sprite {
            out.draw(sprite_in(Sprite::Backdrop, &seg));
        } else {
            out.draw(DrawCommand::FillRect {
                pos: Vec2::new(seg.left, seg.top),
                size: Vec2::new(seg.width(), seg.height()),
                color: SKY,
            });
        }
    }
}

fn draw_ground(layer: &ScrollLayer, assets: &dyn Assets, out: &mut dyn Surface) {
    if assets.has_sprite(Sprite::Ground) {
        for seg in layer.segment_boxes() {
            out.draw(sprite_in(Sprite::Ground, &seg));
        }
        return;
    }

    for seg in layer.segment_boxes() {
        out.draw(DrawCommand::FillRect {
            pos: Vec2::new(seg.left, seg.top),
            size: Vec2::new(seg.width(), seg.height()),
            color: GROUND_SAND,
        });
        out.draw(DrawCommand::Line {
            from: Vec2::new(seg.left, seg.top),
            to: Vec2::new(seg.right, seg.top),
            color: GROUND_EDGE,
            width: 3.0,
        });
        // Grass tufts; heights alternate so they scroll with the strip
        let mut x = seg.left;
        let mut i = 0;
        while x < seg.right {
            let h = if i % 2 == 0 { 6.0 } else { 9.0 };
            out.draw(DrawCommand::FillRect {
                pos: Vec2::new(x, seg.top - h),
                size: Vec2::new(10.0, h),
                color: GRASS,
            });
            x += GRASS_SPACING;
            i += 1;
        }
    }
}

fn draw_obstacle(obstacle: &Obstacle, assets: &dyn Assets, out: &mut dyn Surface) {
    let Some(body) = obstacle.collision_box() else {
        return;
    };

    let sprite = Sprite::Obstacle {
        special: obstacle.is_special,
    };
    if assets.has_sprite(sprite) {
        out.draw(DrawCommand::Sprite {
            sprite,
            center: Vec2::new(obstacle.pos.x, (body.top + body.bottom) / 2.0),
            size: Vec2::new(body.width(), body.height()),
            rotation: 0.0,
            flip_y: obstacle.is_top,
            alpha: 1.0,
        });
        return;
    }

    let color = if obstacle.is_special {
        OBSTACLE_RED
    } else {
        OBSTACLE_GREEN
    };
    out.draw(DrawCommand::FillRect {
        pos: Vec2::new(body.left, body.top),
        size: Vec2::new(body.width(), body.height()),
        color,
    });

    // Cap sits on the gap-facing end
    let cap_width = obstacle.width + OBSTACLE_CAP_OVERHANG * 2.0;
    let cap_top = if obstacle.is_top {
        obstacle.pos.y - OBSTACLE_CAP_HEIGHT
    } else {
        obstacle.pos.y
    };
    out.draw(DrawCommand::FillRect {
        pos: Vec2::new(obstacle.pos.x - cap_width / 2.0, cap_top),
        size: Vec2::new(cap_width, OBSTACLE_CAP_HEIGHT),
        color,
    });
}

fn draw_bonus(bonus: &Bonus, assets: &dyn Assets, out: &mut dyn Surface) {
    let center = bonus.pos + Vec2::new(0.0, bonus.bob_offset());
    let sprite = Sprite::Bonus(bonus.kind);
    if assets.has_sprite(sprite) {
        out.draw(DrawCommand::Sprite {
            sprite,
            center,
            size: Vec2::new(bonus.width, bonus.height),
            rotation: bonus.spin,
            flip_y: false,
            alpha: 1.0,
        });
        return;
    }

    let half = bonus.width / 2.0;
    out.draw(DrawCommand::FillCircle {
        center,
        radius: half,
        color: with_alpha(bonus_color(bonus.kind), 0.6),
    });
    draw_bonus_icon(bonus.kind, center, half, out);
}

/// White glyph identifying a power-up, sized to a circle of radius `half`
pub(super) fn draw_bonus_icon(kind: BonusKind, center: Vec2, half: f32, out: &mut dyn Surface) {
    match kind {
        BonusKind::Shield => out.draw(DrawCommand::Polygon {
            points: vec![
                center + Vec2::new(0.0, -half * 0.5),
                center + Vec2::new(half * 0.6, half * 0.3),
                center + Vec2::new(0.0, half * 0.7),
                center + Vec2::new(-half * 0.6, half * 0.3),
            ],
            fill: WHITE,
            outline: Some(BLACK),
        }),
        BonusKind::SlowMo => {
            out.draw(DrawCommand::FillCircle {
                center,
                radius: half * 0.6,
                color: WHITE,
            });
            out.draw(DrawCommand::Line {
                from: center,
                to: center + Vec2::new(0.0, -half * 0.4),
                color: BLACK,
                width: 2.0,
            });
            out.draw(DrawCommand::Line {
                from: center,
                to: center + Vec2::new(half * 0.3, 0.0),
                color: BLACK,
                width: 2.0,
            });
        }
        BonusKind::ScoreBoost => out.draw(DrawCommand::Text {
            text: "2x".to_string(),
            pos: center,
            size: half * 0.8,
            color: WHITE,
            outline: Some(BLACK),
            align: TextAlign::Center,
        }),
    }
}

fn draw_actor(actor: &Actor, assets: &dyn Assets, out: &mut dyn Surface) {
    let sprite = Sprite::Actor {
        variant: actor.variant,
        frame: actor.frame,
    };
    if assets.has_sprite(sprite) {
        out.draw(DrawCommand::Sprite {
            sprite,
            center: actor.pos,
            size: Vec2::new(actor.width, actor.height),
            rotation: actor.rotation,
            flip_y: false,
            alpha: 1.0,
        });
    } else {
        let b = actor.bounds();
        out.draw(DrawCommand::FillRect {
            pos: Vec2::new(b.left, b.top),
            size: Vec2::new(b.width(), b.height()),
            color: actor_color(actor.variant),
        });
    }

    if actor.has_shield {
        let remaining = actor.shield_duration - actor.shield_timer;
        let fade = (remaining / 1.5).min(1.0);
        let pulse = 1.0 + (actor.shield_timer * 5.0).sin() * 0.1;
        let radius = actor.width.max(actor.height) * 0.8 * pulse;
        out.draw(DrawCommand::FillCircle {
            center: actor.pos,
            radius,
            color: with_alpha(SHIELD_BLUE, 0.3 * fade),
        });
        out.draw(DrawCommand::StrokeArc {
            center: actor.pos,
            radius,
            start: 0.0,
            end: TAU,
            color: with_alpha(SHIELD_BLUE, fade),
            width: 2.0,
        });
    }
}

fn draw_effect(effect: &Effect, out: &mut dyn Surface) {
    let alpha = effect.opacity();
    let (size, color) = match effect.kind {
        EffectKind::ScorePopup { .. } => (30.0 * effect.scale(), with_alpha(WHITE, alpha)),
        EffectKind::BonusBanner { bonus } => {
            (20.0 * effect.scale(), with_alpha(bonus_color(bonus), alpha))
        }
    };
    out.draw(DrawCommand::Text {
        text: effect.label(),
        pos: effect.pos,
        size,
        color,
        outline: Some(with_alpha(BLACK, alpha * 0.5)),
        align: TextAlign::Center,
    });
}

fn sprite_in(sprite: Sprite, area: &Aabb) -> DrawCommand {
    DrawCommand::Sprite {
        sprite,
        center: Vec2::new(
            (area.left + area.right) / 2.0,
            (area.top + area.bottom) / 2.0,
        ),
        size: Vec2::new(area.width(), area.height()),
        rotation: 0.0,
        flip_y: false,
        alpha: 1.0,
    }
}

/// Debug outlines of every hit box
pub(super) fn draw_collision_boxes(state: &GameState, out: &mut dyn Surface) {
    let boxes = std::iter::once(state.actor.collision_box())
        .chain(std::iter::once(state.ground.collision_box()))
        .chain(state.obstacles.iter().map(|o| o.collision_box()))
        .chain(state.bonuses.iter().map(|b| b.collision_box()))
        .flatten();

    for b in boxes {
        out.draw(DrawCommand::StrokeRect {
            pos: Vec2::new(b.left, b.top),
            size: Vec2::new(b.width(), b.height()),
            color: DEBUG_BOX,
            width: 2.0,
        });
    }
}
