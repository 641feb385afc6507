//! Menu-family scenes: main menu, how-to, statistics and credits panels.

use glam::Vec2;

use crate::assets::{AssetId, AssetSource};
use crate::consts;
use crate::fx::backdrop::FruitField;
use crate::layout;
use crate::scene::{MenuItem, MenuState, SceneId};
use crate::sim::FruitKind;
use crate::stats::PlayerStats;
use crate::Viewport;

use super::{palette, Color, Renderer, TextAlign, TextStyle};

pub fn draw_menu(
    r: &mut dyn Renderer,
    assets: &dyn AssetSource,
    vp: Viewport,
    menu: &MenuState,
    field: &FruitField,
    now_ms: f64,
) {
    r.fill_rect(Vec2::ZERO, Vec2::new(vp.width, vp.height), palette::MENU_BG);

    if let Some(natural) = assets.dimensions(AssetId::MenuFruit) {
        for tile in field.iter() {
            r.image_transformed(
                AssetId::MenuFruit,
                tile.pos + tile.sway(now_ms),
                natural,
                tile.tilt(now_ms),
                0.6,
            );
        }
    }

    let title = "CATCH IT";
    let title_font = layout::title_font(vp);
    let bounce = (now_ms * 0.003).sin() as f32 * 8.0;
    let title_at = layout::title_center(vp) + Vec2::new(0.0, bounce);

    // Layered stroke passes widest-first build the glow halo
    let glow = 0.3 + (now_ms * 0.005).sin() as f32 * 0.2;
    for i in (1..=8u32).rev() {
        let alpha = glow * i as f32 / 8.0;
        r.stroke_text(
            title,
            title_at,
            title_font,
            Color::rgba(255, 107, 107, alpha),
            i as f32 * 2.0,
        );
    }
    r.stroke_text(title, title_at, title_font, palette::TITLE, 8.0);
    r.text(title, title_at, &TextStyle::outlined(title_font, palette::TEXT));

    // Subtitle hangs off the resting title position, not the bounced one
    let subtitle_at = layout::title_center(vp) + Vec2::new(0.0, 90.0);
    r.text(
        "Catch the Mandarins!",
        subtitle_at,
        &TextStyle::outlined(layout::subtitle_font(vp), palette::TEXT).outline_width(3.0),
    );

    let menu_font = layout::menu_font(vp);
    let highlighted = menu.highlighted();
    for (i, item) in MenuItem::ALL.iter().enumerate() {
        let hot = highlighted == Some(i);
        let lift = if hot { -3.0 } else { 0.0 };
        let at = layout::menu_item_center(vp, i) + Vec2::new(0.0, lift + menu.bounce.offset(i));

        if hot || menu.bounce.active(i) {
            r.text(
                item.label(),
                at + Vec2::new(3.0, 3.0),
                &TextStyle::plain(menu_font, Color::rgba(0, 0, 0, 0.3)),
            );
        }
        let color = if hot { palette::HOVER } else { palette::TEXT };
        r.text(item.label(), at, &TextStyle::outlined(menu_font, color));
    }

    if let Some(natural) = assets.dimensions(AssetId::Mascot) {
        let scale = (vp.width / 800.0).min(vp.height / 600.0).min(1.0);
        let size = natural * scale;
        let pos = Vec2::new(vp.width * 0.02, vp.height - size.y - vp.height * 0.02);
        r.image(AssetId::Mascot, pos, size);
    }

    r.text(
        consts::VERSION,
        Vec2::new(vp.width / 2.0, vp.height - 20.0),
        &TextStyle::plain(vp.width * 0.009, palette::FOOTER),
    );
}

pub fn draw_howto(r: &mut dyn Renderer, assets: &dyn AssetSource, vp: Viewport, pointer: Vec2) {
    let panel = draw_panel(r, vp, SceneId::HowTo, palette::PANEL, palette::HOWTO_ACCENT);
    draw_panel_title(r, vp, panel, "HOW TO PLAY", palette::HOWTO_ACCENT);

    let body = TextStyle::plain(vp.width * 0.012, palette::PANEL_TEXT).align(TextAlign::Left);
    let line_h = vp.height * 0.035;
    let heading_x = panel.pos.x + 40.0;
    let body_x = panel.pos.x + 60.0;
    let mut y = panel.pos.y + 110.0;

    r.text("CONTROLS:", Vec2::new(heading_x, y), &body);
    y += line_h * 1.5;
    r.text("Move: LEFT/RIGHT arrows or A/D keys", Vec2::new(body_x, y), &body);
    y += line_h * 2.0;

    r.text("MANDARINS:", Vec2::new(heading_x, y), &body);
    y += line_h * 1.5;

    let rows = [
        (FruitKind::Orange, "Orange mandarin: +10 points"),
        (FruitKind::Blue, "Blue mandarin: +20 points"),
        (FruitKind::Rotten, "Red mandarin: POISON! Don't catch!"),
    ];
    for (kind, label) in rows {
        if let Some(natural) = assets.dimensions(AssetId::Fruit(kind)) {
            let icon = natural.x * 0.8;
            r.image(
                AssetId::Fruit(kind),
                Vec2::new(body_x, y - icon / 2.0),
                Vec2::splat(icon),
            );
            r.text(label, Vec2::new(body_x + icon + 20.0, y), &body);
            y += line_h * 1.5;
        }
    }

    y += line_h;
    r.text("If edible mandarin hits the ground:", Vec2::new(heading_x, y), &body);
    y += line_h * 1.2;
    r.text("GAME OVER!", Vec2::new(body_x, y), &body);

    draw_back(r, vp, panel, pointer, palette::HOWTO_ACCENT, palette::HOVER);
}

pub fn draw_stats(r: &mut dyn Renderer, vp: Viewport, stats: &PlayerStats, pointer: Vec2) {
    let panel = draw_panel(r, vp, SceneId::Stats, palette::PANEL, palette::STATS_ACCENT);
    draw_panel_title(r, vp, panel, "STATISTICS", palette::STATS_ACCENT);

    let size = vp.width * 0.016;
    let label_x = panel.pos.x + 60.0;
    let value_x = panel.pos.x + panel.size.x - 60.0;
    let line_h = vp.height * 0.06;
    let start_y = panel.pos.y + 120.0;

    let rows: [(&str, u32, Color); 4] = [
        ("Best Score:", stats.best_score, palette::HOVER),
        ("Games Played:", stats.total_games, palette::PANEL_TEXT),
        ("Total Points:", stats.total_points, palette::PANEL_TEXT),
        ("Average Score:", stats.average_score, palette::PANEL_TEXT),
    ];
    for (i, (label, value, label_color)) in rows.into_iter().enumerate() {
        let y = start_y + i as f32 * line_h;
        r.text(
            label,
            Vec2::new(label_x, y),
            &TextStyle::plain(size, label_color).align(TextAlign::Left),
        );
        r.text(
            &value.to_string(),
            Vec2::new(value_x, y),
            &TextStyle::plain(size, palette::PANEL_TEXT).align(TextAlign::Right),
        );
    }

    draw_back(r, vp, panel, pointer, palette::STATS_ACCENT, palette::HOVER);
}

pub fn draw_credits(r: &mut dyn Renderer, assets: &dyn AssetSource, vp: Viewport, pointer: Vec2) {
    let panel = draw_panel(r, vp, SceneId::Credits, palette::WHITE, palette::TITLE);
    draw_panel_title(r, vp, panel, "CREDITS", palette::TITLE);

    let mut image_bottom = panel.pos.y + 120.0;
    if let Some(natural) = assets.dimensions(AssetId::Banner) {
        let scale = (panel.size.x * 0.6 / natural.x).min(panel.size.y * 0.3 / natural.y);
        let size = natural * scale;
        let image_y = panel.pos.y + 100.0;
        r.image(
            AssetId::Banner,
            Vec2::new(vp.width / 2.0 - size.x / 2.0, image_y),
            size,
        );
        image_bottom = image_y + size.y;
    }

    let body = TextStyle::plain(vp.width * 0.012, palette::PANEL_TEXT);
    let line_h = vp.height * 0.04;
    let text_y = image_bottom + line_h * 1.5;
    r.text("Thank you for playing!", Vec2::new(vp.width / 2.0, text_y), &body);
    r.text(
        "All assets drawn by me",
        Vec2::new(vp.width / 2.0, text_y + line_h),
        &body,
    );

    draw_back(r, vp, panel, pointer, palette::TITLE, palette::CREDITS_BACK_HOVER);
}

fn draw_panel(
    r: &mut dyn Renderer,
    vp: Viewport,
    scene: SceneId,
    fill: Color,
    accent: Color,
) -> layout::Rect {
    r.fill_rect(Vec2::ZERO, Vec2::new(vp.width, vp.height), palette::MENU_BG);
    let panel = layout::panel_rect(scene, vp);
    r.fill_rect(panel.pos, panel.size, fill);
    r.stroke_rect(panel.pos, panel.size, accent, 5.0);
    panel
}

fn draw_panel_title(
    r: &mut dyn Renderer,
    vp: Viewport,
    panel: layout::Rect,
    text: &str,
    color: Color,
) {
    r.text(
        text,
        Vec2::new(vp.width / 2.0, panel.pos.y + 50.0),
        &TextStyle::outlined(layout::panel_title_font(vp), color),
    );
}

fn draw_back(
    r: &mut dyn Renderer,
    vp: Viewport,
    panel: layout::Rect,
    pointer: Vec2,
    idle: Color,
    hover: Color,
) {
    let hot = layout::back_rect(panel).contains(pointer);
    let color = if hot { hover } else { idle };
    r.text(
        "BACK",
        layout::back_center(panel),
        &TextStyle::outlined(layout::back_font(vp), color).outline_width(3.0),
    );
}
