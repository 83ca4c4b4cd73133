//! Drawing Surface Abstraction
//! One trait, two backends: the live egui painter and an offscreen
//! RGBA buffer used for PNG export and tests.

use anyhow::Context;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use std::path::Path;

/// Solid color as used by the chart palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

/// A bounded 2D target the chart renderer draws into.
/// Coordinates are surface-local, origin top-left, y growing downward.
pub trait DrawSurface {
    fn size(&self) -> (f32, f32);
    fn clear(&mut self, color: Rgb);
    fn polyline(&mut self, points: &[(f32, f32)], width: f32, color: Rgb);
    fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Rgb);
}

/// Offscreen surface backed by an RGBA image buffer.
pub struct ImageSurface {
    img: RgbaImage,
}

impl ImageSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbaImage::new(width, height),
        }
    }

    /// Pixel access for tests.
    #[allow(dead_code)]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.img.get_pixel(x, y)
    }

    /// Encode the buffer as a PNG file.
    pub fn save_png(&self, path: &Path) -> anyhow::Result<()> {
        self.img
            .save(path)
            .with_context(|| format!("failed to write chart image to {}", path.display()))
    }
}

impl DrawSurface for ImageSurface {
    fn size(&self) -> (f32, f32) {
        (self.img.width() as f32, self.img.height() as f32)
    }

    fn clear(&mut self, color: Rgb) {
        let rgba = color.to_rgba();
        for px in self.img.pixels_mut() {
            *px = rgba;
        }
    }

    fn polyline(&mut self, points: &[(f32, f32)], width: f32, color: Rgb) {
        let rgba = color.to_rgba();
        let half = (width / 2.0).floor() as i32;
        for pair in points.windows(2) {
            let (ax, ay) = pair[0];
            let (bx, by) = pair[1];
            // imageproc lines are 1px; stack vertical offsets for thickness
            for dy in -half..=half {
                let dy = dy as f32;
                draw_line_segment_mut(&mut self.img, (ax, ay + dy), (bx, by + dy), rgba);
            }
        }
    }

    fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Rgb) {
        draw_filled_circle_mut(
            &mut self.img,
            (center.0.round() as i32, center.1.round() as i32),
            radius.round() as i32,
            color.to_rgba(),
        );
    }
}

/// Live surface that forwards to an egui painter clipped to a rect.
pub struct PainterSurface {
    painter: egui::Painter,
    rect: egui::Rect,
}

impl PainterSurface {
    pub fn new(painter: egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, p: (f32, f32)) -> egui::Pos2 {
        egui::pos2(self.rect.min.x + p.0, self.rect.min.y + p.1)
    }
}

impl DrawSurface for PainterSurface {
    fn size(&self) -> (f32, f32) {
        (self.rect.width(), self.rect.height())
    }

    fn clear(&mut self, color: Rgb) {
        self.painter.rect_filled(self.rect, 0.0, color.to_color32());
    }

    fn polyline(&mut self, points: &[(f32, f32)], width: f32, color: Rgb) {
        let screen: Vec<egui::Pos2> = points.iter().map(|&p| self.to_screen(p)).collect();
        self.painter.add(egui::Shape::line(
            screen,
            egui::Stroke::new(width, color.to_color32()),
        ));
    }

    fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Rgb) {
        self.painter
            .circle_filled(self.to_screen(center), radius, color.to_color32());
    }
}
