//! Shared screen geometry.
//!
//! Everything that is both drawn and hit-tested lives here so the two
//! sides can never disagree: menu items, panel boxes, back buttons and the
//! pause/game-over rows. Text hit rects lean on the UI font being
//! fixed-advance (one em per glyph), so a label's width is just
//! `chars * size` and no canvas text measurement is needed.

use glam::Vec2;

use crate::Viewport;
use crate::scene::{MenuItem, SceneId};

/// Axis-aligned rectangle with strict-inequality containment, matching how
/// the pointer zones behave at their exact edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn from_center(center: Vec2, half: Vec2) -> Self {
        Self {
            pos: center - half,
            size: half * 2.0,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.pos.x
            && point.x < self.pos.x + self.size.x
            && point.y > self.pos.y
            && point.y < self.pos.y + self.size.y
    }
}

/// Hit rect of a centered text label drawn at `size`.
pub fn text_rect(center: Vec2, text: &str, size: f32) -> Rect {
    let width = text.chars().count() as f32 * size;
    Rect::from_center(center, Vec2::new(width / 2.0, size / 2.0))
}

pub fn title_center(vp: Viewport) -> Vec2 {
    Vec2::new(vp.width / 2.0, vp.height * 0.3)
}

pub fn title_font(vp: Viewport) -> f32 {
    vp.width * 0.055
}

pub fn subtitle_font(vp: Viewport) -> f32 {
    vp.width * 0.014
}

pub fn menu_font(vp: Viewport) -> f32 {
    vp.width * 0.02
}

/// Baseline center of menu item `index`, before hover lift and bounce.
pub fn menu_item_center(vp: Viewport, index: usize) -> Vec2 {
    Vec2::new(
        vp.width / 2.0,
        vp.height * 0.55 + index as f32 * (vp.height * 0.08),
    )
}

pub fn menu_item_rect(vp: Viewport, index: usize, label: &str) -> Rect {
    text_rect(menu_item_center(vp, index), label, menu_font(vp))
}

/// Which menu item, if any, the point lands on.
pub fn menu_hit(vp: Viewport, point: Vec2) -> Option<usize> {
    MenuItem::ALL
        .iter()
        .enumerate()
        .find(|(i, item)| menu_item_rect(vp, *i, item.label()).contains(point))
        .map(|(i, _)| i)
}

/// Centered content box of the info scenes. Non-panel scenes get a zero
/// rect nothing can land in.
pub fn panel_rect(scene: SceneId, vp: Viewport) -> Rect {
    let size = match scene {
        SceneId::HowTo => Vec2::new(vp.width * 0.75, vp.height * 0.8),
        SceneId::Stats => Vec2::new(vp.width * 0.7, vp.height * 0.75),
        SceneId::Credits => Vec2::new(vp.width * 0.7, vp.height * 0.6),
        SceneId::Menu | SceneId::Game => return Rect::default(),
    };
    Rect::new((Vec2::new(vp.width, vp.height) - size) / 2.0, size)
}

pub fn panel_title_font(vp: Viewport) -> f32 {
    vp.width * 0.024
}

/// BACK label center, 50px above the panel's bottom edge.
pub fn back_center(panel: Rect) -> Vec2 {
    Vec2::new(panel.center().x, panel.pos.y + panel.size.y - 50.0)
}

pub fn back_rect(panel: Rect) -> Rect {
    Rect::from_center(back_center(panel), Vec2::new(60.0, 20.0))
}

pub fn back_font(vp: Viewport) -> f32 {
    vp.width * 0.016
}

/// What clicking an overlay row does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    Resume,
    Restart,
    ExitToMenu,
}

/// One clickable text row of the pause or game-over overlay.
#[derive(Debug, Clone, Copy)]
pub struct OverlayRow {
    pub action: OverlayAction,
    pub label: &'static str,
    pub center: Vec2,
    pub font_size: f32,
    half: Vec2,
}

impl OverlayRow {
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.center, self.half)
    }
}

/// Rows of the pause overlay, top to bottom.
pub fn pause_rows(vp: Viewport) -> [OverlayRow; 3] {
    let cx = vp.width / 2.0;
    let cy = vp.height / 2.0;
    let sy = vp.scale_y();
    [
        OverlayRow {
            action: OverlayAction::Resume,
            label: "Resume (ENTER)",
            center: Vec2::new(cx, cy + 20.0 * sy),
            font_size: vp.width * 0.022,
            half: Vec2::new(140.0, 25.0),
        },
        OverlayRow {
            action: OverlayAction::Restart,
            label: "Restart (SPACE)",
            center: Vec2::new(cx, cy + 60.0 * sy),
            font_size: vp.width * 0.022,
            half: Vec2::new(120.0, 25.0),
        },
        OverlayRow {
            action: OverlayAction::ExitToMenu,
            label: "Exit to Menu (ESC)",
            center: Vec2::new(cx, cy + 100.0 * sy),
            font_size: vp.width * 0.02,
            half: Vec2::new(140.0, 25.0),
        },
    ]
}

/// Rows of the game-over overlay, top to bottom.
pub fn over_rows(vp: Viewport) -> [OverlayRow; 2] {
    let cx = vp.width / 2.0;
    let cy = vp.height / 2.0;
    let sy = vp.scale_y();
    [
        OverlayRow {
            action: OverlayAction::Restart,
            label: "Restart (SPACE)",
            center: Vec2::new(cx, cy + 60.0 * sy),
            font_size: vp.width * 0.022,
            half: Vec2::new(120.0, 25.0),
        },
        OverlayRow {
            action: OverlayAction::ExitToMenu,
            label: "Exit to Menu (ESC)",
            center: Vec2::new(cx, cy + 110.0 * sy),
            font_size: vp.width * 0.02,
            half: Vec2::new(140.0, 25.0),
        },
    ]
}

/// Where the new-record confetti erupts from.
pub fn confetti_origin(vp: Viewport) -> Vec2 {
    Vec2::new(vp.width / 2.0, vp.height / 2.0 - 100.0 * vp.scale_y())
}
