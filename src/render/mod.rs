//! Frame rendering as a list of draw commands
//!
//! The renderer never touches pixels. It walks the game state and emits
//! [`DrawCommand`]s to a [`Surface`]; the host backend (canvas, GPU, test
//! recorder) turns them into an image. Each entity is drawn as a sprite when
//! the host reports the asset as loaded and as primitive shapes otherwise.

mod hud;
mod scene;

use glam::Vec2;
use serde::Serialize;

use crate::settings::Settings;
use crate::sim::{ActorVariant, BonusKind, GameState};

/// RGBA, each channel in [0, 1]
pub type Color = [f32; 4];

/// Build a color from a packed 0xRRGGBB value
pub const fn rgb(hex: u32, alpha: f32) -> Color {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        alpha,
    ]
}

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];

/// Sprite images the host may provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sprite {
    Backdrop,
    Ground,
    Obstacle { special: bool },
    Actor { variant: ActorVariant, frame: usize },
    Bonus(BonusKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    Left,
    Center,
}

/// A single drawing instruction in playfield coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op")]
pub enum DrawCommand {
    Clear { color: Color },
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    StrokeRect {
        pos: Vec2,
        size: Vec2,
        color: Color,
        width: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Arc from `start` to `end` radians, clockwise from +x
    StrokeArc {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        color: Color,
        width: f32,
    },
    Polygon {
        points: Vec<Vec2>,
        fill: Color,
        outline: Option<Color>,
    },
    /// Five-pointed star
    Star {
        center: Vec2,
        radius: f32,
        fill: Color,
    },
    Sprite {
        sprite: Sprite,
        center: Vec2,
        size: Vec2,
        rotation: f32,
        /// Mirror vertically (hanging obstacles)
        flip_y: bool,
        alpha: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
        outline: Option<Color>,
        align: TextAlign,
    },
}

/// Sprite availability as reported by the host
pub trait Assets {
    fn has_sprite(&self, sprite: Sprite) -> bool;
}

/// Host without any loaded images; everything uses fallback shapes
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAssets;

impl Assets for NoAssets {
    fn has_sprite(&self, _sprite: Sprite) -> bool {
        false
    }
}

/// Host with every image loaded
#[derive(Debug, Default, Clone, Copy)]
pub struct AllAssets;

impl Assets for AllAssets {
    fn has_sprite(&self, _sprite: Sprite) -> bool {
        true
    }
}

/// Draw target
pub trait Surface {
    fn draw(&mut self, cmd: DrawCommand);
}

/// Surface that just collects the commands
#[derive(Debug, Default, Clone, Serialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text strings, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DrawList {
    fn draw(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }
}

/// Which full-screen panel sits on top of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Play,
    /// Revealed a moment after the crash
    GameOver { new_best: bool },
}

/// Render one frame: world back to front, then the HUD
pub fn render_frame(
    state: &GameState,
    settings: &Settings,
    assets: &dyn Assets,
    screen: Screen,
    out: &mut dyn Surface,
) {
    scene::draw_world(state, assets, out);
    if settings.show_collision_boxes {
        scene::draw_collision_boxes(state, out);
    }
    hud::draw_hud(state, settings, screen, out);
}
