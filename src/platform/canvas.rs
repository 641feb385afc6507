//! Canvas 2d implementation of the [`Renderer`] trait.
//!
//! Everything renders in the pixel font; vertical baseline is middle
//! across the board so layout anchors are text centers. Draw calls that
//! need an image silently no-op until the bank reports it ready.

use std::f64::consts::TAU;
use std::rc::Rc;

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use crate::assets::AssetId;
use crate::view::{Color, Renderer, TextAlign, TextStyle};

use super::images::ImageBank;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    images: Rc<ImageBank>,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, images: Rc<ImageBank>) -> Self {
        Self { ctx, images }
    }

    fn set_font(&self, size: f32) {
        self.ctx.set_font(&format!("{size}px 'Press Start 2P'"));
        self.ctx.set_text_baseline("middle");
    }

    fn set_align(&self, align: TextAlign) {
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        });
    }
}

impl Renderer for CanvasRenderer {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_rect(&mut self, pos: Vec2, size: Vec2, color: Color, width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx
            .stroke_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, opacity: f32) {
        self.ctx.save();
        self.ctx.set_global_alpha(opacity as f64);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
        self.ctx.restore();
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color, opacity: f32) {
        let Some(first) = points.first() else {
            return;
        };
        self.ctx.save();
        self.ctx.set_global_alpha(opacity as f64);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for point in &points[1..] {
            self.ctx.line_to(point.x as f64, point.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
        self.ctx.restore();
    }

    fn fill_rect_rotated(
        &mut self,
        center: Vec2,
        size: Vec2,
        rotation: f32,
        color: Color,
        opacity: f32,
    ) {
        self.ctx.save();
        self.ctx.set_global_alpha(opacity as f64);
        self.ctx.set_fill_style_str(&color.to_css());
        let _ = self.ctx.translate(center.x as f64, center.y as f64);
        let _ = self.ctx.rotate(rotation as f64);
        let w = size.x as f64;
        let h = size.y as f64;
        self.ctx.fill_rect(-w / 2.0, -h / 2.0, w, h);
        self.ctx.restore();
    }

    fn text(&mut self, text: &str, at: Vec2, style: &TextStyle) {
        self.set_font(style.size);
        self.set_align(style.align);
        if let Some((outline, width)) = style.outline {
            self.ctx.set_stroke_style_str(&outline.to_css());
            self.ctx.set_line_width(width as f64);
            let _ = self.ctx.stroke_text(text, at.x as f64, at.y as f64);
        }
        self.ctx.set_fill_style_str(&style.color.to_css());
        let _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }

    fn stroke_text(&mut self, text: &str, at: Vec2, size: f32, color: Color, width: f32) {
        self.set_font(size);
        self.set_align(TextAlign::Center);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        let _ = self.ctx.stroke_text(text, at.x as f64, at.y as f64);
    }

    fn image(&mut self, id: AssetId, pos: Vec2, size: Vec2) {
        let Some(element) = self.images.ready(id) else {
            return;
        };
        let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            element,
            pos.x as f64,
            pos.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    fn image_transformed(
        &mut self,
        id: AssetId,
        center: Vec2,
        size: Vec2,
        rotation: f32,
        opacity: f32,
    ) {
        let Some(element) = self.images.ready(id) else {
            return;
        };
        self.ctx.save();
        self.ctx.set_global_alpha(opacity as f64);
        let _ = self.ctx.translate(center.x as f64, center.y as f64);
        let _ = self.ctx.rotate(rotation as f64);
        let w = size.x as f64;
        let h = size.y as f64;
        let _ = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(element, -w / 2.0, -h / 2.0, w, h);
        self.ctx.restore();
    }
}
