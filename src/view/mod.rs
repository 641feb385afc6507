//! Rendering seam.
//!
//! Scenes describe a frame through the [`Renderer`] trait and never touch
//! the canvas directly; the wasm backend in `platform::canvas` implements it
//! over a 2d context. Colors travel as CSS values because that is what the
//! backend ultimately consumes, with computed HSL/RGBA variants for the
//! particle tints and glow layers.

pub mod game;
pub mod menu;

use glam::Vec2;

use crate::assets::AssetId;

/// A CSS-model color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Fixed literal, e.g. `"#87CEEB"` or `"rgba(0, 0, 0, 0.7)"`
    Css(&'static str),
    /// Computed hue/saturation/lightness (degrees, percent, percent)
    Hsl { h: f32, s: f32, l: f32 },
    /// Computed channel color with alpha
    Rgba { r: u8, g: u8, b: u8, a: f32 },
}

impl Color {
    pub fn hsl(h: f32, s: f32, l: f32) -> Self {
        Color::Hsl { h, s, l }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color::Rgba { r, g, b, a }
    }

    /// String form the canvas API accepts.
    pub fn to_css(self) -> String {
        match self {
            Color::Css(s) => s.to_string(),
            Color::Hsl { h, s, l } => format!("hsl({h:.0}, {s:.0}%, {l:.0}%)"),
            Color::Rgba { r, g, b, a } => format!("rgba({r}, {g}, {b}, {a:.3})"),
        }
    }
}

/// Fixed palette shared by every scene.
pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::Css("#ffffff");
    /// Backdrop of the menu family of scenes
    pub const MENU_BG: Color = Color::Css("#ffb482");
    /// In-game sky
    pub const SKY: Color = Color::Css("#87CEEB");
    pub const GROUND: Color = Color::Css("#8B4513");
    pub const GROUND_EDGE: Color = Color::Css("#654321");
    pub const TEXT: Color = WHITE;
    pub const OUTLINE: Color = Color::Css("#000000");
    /// Title glow core, game-over heading, credits accent
    pub const TITLE: Color = Color::Css("#ff6b6b");
    /// Hovered controls, PAUSED heading, record callouts
    pub const HOVER: Color = Color::Css("#ffc800");
    /// Translucent panel fill behind how-to and stats text
    pub const PANEL: Color = Color::Css("rgba(255, 255, 255, 0.95)");
    pub const PANEL_TEXT: Color = Color::Css("#333333");
    pub const HOWTO_ACCENT: Color = Color::Css("#4ecdc4");
    pub const STATS_ACCENT: Color = Color::Css("#ffe66d");
    pub const CREDITS_BACK_HOVER: Color = Color::Css("#ff9999");
    /// Modal dim behind the pause and game-over overlays
    pub const DIM: Color = Color::Css("rgba(0, 0, 0, 0.7)");
    pub const FOOTER: Color = Color::Css("rgba(0, 0, 0, 0.4)");
}

/// Horizontal anchor of a text draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Pixel-font text parameters. Vertically middle-anchored everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    /// Stroke drawn under the fill, as (color, line width)
    pub outline: Option<(Color, f32)>,
    pub align: TextAlign,
}

impl TextStyle {
    /// The house style: black outline under a colored fill.
    pub fn outlined(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            outline: Some((palette::OUTLINE, 4.0)),
            align: TextAlign::Center,
        }
    }

    /// Fill only, no stroke.
    pub fn plain(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            outline: None,
            align: TextAlign::Center,
        }
    }

    pub fn outline_width(mut self, width: f32) -> Self {
        self.outline = Some((palette::OUTLINE, width));
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// Primitive drawing surface one frame draws into.
///
/// Image blits take the natural size the caller got from the asset source;
/// the transformed variant positions by center so rotation and the bounce
/// scale pivot where the sprite visually pivots.
pub trait Renderer {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn stroke_rect(&mut self, pos: Vec2, size: Vec2, color: Color, width: f32);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, opacity: f32);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color, opacity: f32);
    /// Filled rectangle rotated about its center.
    fn fill_rect_rotated(&mut self, center: Vec2, size: Vec2, rotation: f32, color: Color, opacity: f32);
    fn text(&mut self, text: &str, at: Vec2, style: &TextStyle);
    /// Stroke-only text, for the layered title glow.
    fn stroke_text(&mut self, text: &str, at: Vec2, size: f32, color: Color, width: f32);
    /// Blit at top-left `pos` with explicit `size`.
    fn image(&mut self, id: AssetId, pos: Vec2, size: Vec2);
    /// Blit centered at `center`, rotated by `rotation` radians, with opacity.
    fn image_transformed(&mut self, id: AssetId, center: Vec2, size: Vec2, rotation: f32, opacity: f32);
}

#[cfg(test)]
pub mod tests_support {
    use super::*;

    /// Records draw calls so scene tests can assert on frame contents.
    #[derive(Default)]
    pub struct RecordingRenderer {
        pub texts: Vec<(String, Vec2, TextStyle)>,
        pub stroked: Vec<String>,
        pub rects: usize,
        pub circles: usize,
        pub polygons: usize,
        pub rotated_rects: usize,
        pub images: Vec<AssetId>,
    }

    impl RecordingRenderer {
        pub fn drew_text(&self, text: &str) -> bool {
            self.texts.iter().any(|(t, _, _)| t == text)
        }

        /// Color of the topmost draw of `text`; shadow passes sit underneath.
        pub fn text_color(&self, text: &str) -> Option<Color> {
            self.texts
                .iter()
                .rev()
                .find(|(t, _, _)| t == text)
                .map(|(_, _, style)| style.color)
        }

        pub fn text_at(&self, text: &str) -> Option<Vec2> {
            self.texts
                .iter()
                .rev()
                .find(|(t, _, _)| t == text)
                .map(|(_, at, _)| *at)
        }
    }

    impl Renderer for RecordingRenderer {
        fn fill_rect(&mut self, _pos: Vec2, _size: Vec2, _color: Color) {
            self.rects += 1;
        }

        fn stroke_rect(&mut self, _pos: Vec2, _size: Vec2, _color: Color, _width: f32) {}

        fn line(&mut self, _from: Vec2, _to: Vec2, _color: Color, _width: f32) {}

        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color, _opacity: f32) {
            self.circles += 1;
        }

        fn fill_polygon(&mut self, _points: &[Vec2], _color: Color, _opacity: f32) {
            self.polygons += 1;
        }

        fn fill_rect_rotated(
            &mut self,
            _center: Vec2,
            _size: Vec2,
            _rotation: f32,
            _color: Color,
            _opacity: f32,
        ) {
            self.rotated_rects += 1;
        }

        fn text(&mut self, text: &str, at: Vec2, style: &TextStyle) {
            self.texts.push((text.to_string(), at, *style));
        }

        fn stroke_text(&mut self, text: &str, _at: Vec2, _size: f32, _color: Color, _width: f32) {
            self.stroked.push(text.to_string());
        }

        fn image(&mut self, id: AssetId, _pos: Vec2, _size: Vec2) {
            self.images.push(id);
        }

        fn image_transformed(
            &mut self,
            id: AssetId,
            _center: Vec2,
            _size: Vec2,
            _rotation: f32,
            _opacity: f32,
        ) {
            self.images.push(id);
        }
    }
}
