//! In-game frame: sky, world, HUD, particles and the modal overlays.

use std::f32::consts::{FRAC_PI_4, PI, TAU};

use glam::Vec2;

use crate::assets::{AssetId, AssetSource};
use crate::consts;
use crate::fx::particles::{Particle, ParticleKind};
use crate::fx::Effects;
use crate::layout;
use crate::sim::GameState;
use crate::stats::OutcomeSummary;
use crate::Viewport;

use super::{palette, Renderer, TextStyle};

#[allow(clippy::too_many_arguments)]
pub fn draw(
    r: &mut dyn Renderer,
    assets: &dyn AssetSource,
    vp: Viewport,
    game: &GameState,
    effects: &Effects,
    outcome: Option<OutcomeSummary>,
    pointer: Vec2,
    now_ms: f64,
) {
    r.fill_rect(Vec2::ZERO, Vec2::new(vp.width, vp.height), palette::SKY);

    // Each cloud is three overlapping circles, the middle one slightly
    // larger and lifted
    for cloud in effects.clouds.iter() {
        for i in 0..3u32 {
            let offset = Vec2::new(
                (i as f32 - 1.0) * (cloud.size.x / 3.0),
                if i % 2 == 0 { 0.0 } else { -cloud.size.y * 0.3 },
            );
            let radius = cloud.size.y / 2.0 + (i % 2) as f32 * (cloud.size.y * 0.2);
            r.fill_circle(
                cloud.pos + cloud.size / 2.0 + offset,
                radius,
                palette::WHITE,
                cloud.opacity,
            );
        }
    }

    let ground_y = vp.ground_y();
    r.fill_rect(
        Vec2::new(0.0, ground_y),
        Vec2::new(vp.width, consts::GROUND_HEIGHT * vp.scale_y()),
        palette::GROUND,
    );
    r.line(
        Vec2::new(0.0, ground_y),
        Vec2::new(vp.width, ground_y),
        palette::GROUND_EDGE,
        3.0 * vp.scale_y(),
    );

    for fruit in &game.fruits {
        if let Some(natural) = assets.dimensions(AssetId::Fruit(fruit.kind)) {
            let center = Vec2::new(
                fruit.wobbled_x(game.tuning.wobble_amplitude) + natural.x / 2.0,
                fruit.pos.y + natural.y / 2.0,
            );
            r.image_transformed(
                AssetId::Fruit(fruit.kind),
                center,
                natural,
                fruit.tilt(game.tuning.wobble_tilt),
                1.0,
            );
        }
    }

    let player = &game.player;
    if player.placed {
        let id = AssetId::Walk {
            facing: player.facing,
            frame: player.walk_frame,
        };
        if let Some(natural) = assets.dimensions(id) {
            let center = Vec2::new(player.x + natural.x / 2.0, player.y + natural.y / 2.0);
            r.image_transformed(id, center, natural * effects.bounce.scale(now_ms), 0.0, 1.0);
        }
    }

    // Score pops by scaling up and nudging upward while the pulse decays
    let pulse = effects.pulse.value();
    let score_y = 50.0 * vp.scale_y() - if pulse > 1.0 { (pulse - 1.0) * 20.0 } else { 0.0 };
    r.text(
        &format!("SCORE: {}", game.score),
        Vec2::new(vp.width / 2.0, score_y),
        &TextStyle::outlined(vp.width * 0.025 * pulse, palette::TEXT),
    );

    draw_particles(r, effects);

    if game.paused {
        r.fill_rect(Vec2::ZERO, Vec2::new(vp.width, vp.height), palette::DIM);
        r.text(
            "PAUSED",
            Vec2::new(vp.width / 2.0, vp.height / 2.0 - 80.0 * vp.scale_y()),
            &TextStyle::outlined(vp.width * 0.05, palette::HOVER),
        );
        draw_overlay_rows(r, &layout::pause_rows(vp), pointer);
        return;
    }

    if game.over {
        draw_particles(r, effects);
        r.fill_rect(Vec2::ZERO, Vec2::new(vp.width, vp.height), palette::DIM);

        let (new_record, previous_best) = match outcome {
            Some(o) => (o.new_record, o.previous_best),
            None => (false, 0),
        };
        if new_record {
            // Confetti lands above the dim layer
            draw_particles(r, effects);
        }

        let cx = vp.width / 2.0;
        let cy = vp.height / 2.0;
        let sy = vp.scale_y();
        r.text(
            "GAME OVER",
            Vec2::new(cx, cy - 120.0 * sy),
            &TextStyle::outlined(vp.width * 0.05, palette::TITLE),
        );
        r.text(
            &format!("Score: {}", game.score),
            Vec2::new(cx, cy - 50.0 * sy),
            &TextStyle::outlined(vp.width * 0.028, palette::TEXT),
        );

        let best_size = vp.width * 0.018;
        let best_at = Vec2::new(cx, cy + 5.0 * sy);
        if new_record {
            r.text(
                "NEW PERSONAL BEST!",
                best_at,
                &TextStyle::outlined(best_size, palette::HOVER),
            );
        } else {
            r.text(
                &format!("Your Best: {previous_best}"),
                best_at,
                &TextStyle::outlined(best_size, palette::TEXT),
            );
        }

        draw_overlay_rows(r, &layout::over_rows(vp), pointer);
    }
}

fn draw_overlay_rows(r: &mut dyn Renderer, rows: &[layout::OverlayRow], pointer: Vec2) {
    for row in rows {
        let hot = row.rect().contains(pointer);
        let color = if hot { palette::HOVER } else { palette::TEXT };
        r.text(
            row.label,
            row.center,
            &TextStyle::outlined(row.font_size, color),
        );
    }
}

fn draw_particles(r: &mut dyn Renderer, effects: &Effects) {
    for p in effects.particles.iter() {
        draw_particle(r, p);
    }
}

fn draw_particle(r: &mut dyn Renderer, p: &Particle) {
    let opacity = p.life.clamp(0.0, 1.0);
    match p.kind {
        ParticleKind::Star => {
            let mut points = [Vec2::ZERO; 5];
            for (i, point) in points.iter_mut().enumerate() {
                let angle = i as f32 * TAU / 5.0 - PI / 2.0 + p.rotation;
                *point = p.pos + Vec2::new(angle.cos(), angle.sin()) * p.size;
            }
            r.fill_polygon(&points, p.color, opacity);
        }
        ParticleKind::Sparkle => {
            let size = Vec2::splat(p.size);
            r.fill_rect_rotated(p.pos, size, p.rotation, p.color, opacity);
            r.fill_rect_rotated(p.pos, size, p.rotation + FRAC_PI_4, p.color, opacity);
        }
        ParticleKind::Dust => {
            r.fill_circle(p.pos, p.size / 2.0, p.color, opacity);
        }
    }
}
