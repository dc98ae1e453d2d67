//! Random shape sampling
//!
//! Each sampled row carries every parameter any shape might need; the `sha`
//! column decides which ones are used.

use crate::canvas::CanvasSize;
use crate::shapes::{Circle, Rectangle, Rgba, Shape};
use rand::Rng;
use std::fmt;

/// Coordinates are sampled below this limit regardless of viewport size
const MAX_COORDINATE: u32 = 999;

/// Column headers of the sampled table
pub const TABLE_HEADER: [&str; 13] = [
    "CNT", "SHA", "X", "Y", "RAD", "RX", "RY", "W", "H", "R", "G", "B", "OP",
];

/// One sampled shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeRow {
    pub cnt: usize,
    /// 1 draws a rectangle, anything else a circle
    pub sha: u32,
    pub x: u32,
    pub y: u32,
    pub rad: u32,
    pub rx: u32,
    pub ry: u32,
    pub w: u32,
    pub h: u32,
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub op: f64,
}

impl ShapeRow {
    pub fn to_shape(&self) -> Shape {
        let color = Rgba::new(self.r, self.g, self.b, self.op);
        if self.sha == 1 {
            Shape::Rectangle(Rectangle {
                x: self.x,
                y: self.y,
                width: self.w,
                height: self.h,
                color,
            })
        } else {
            Shape::Circle(Circle {
                cx: self.x,
                cy: self.y,
                rad: self.rad,
                color,
            })
        }
    }
}

impl fmt::Display for ShapeRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3.1}",
            self.cnt,
            self.sha,
            self.x,
            self.y,
            self.rad,
            self.rx,
            self.ry,
            self.w,
            self.h,
            self.r,
            self.g,
            self.b,
            self.op
        )
    }
}

/// Sampling parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtConfig {
    /// Number of shapes to sample
    pub count: usize,
    pub viewport: CanvasSize,
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self {
            count: 10,
            viewport: CanvasSize::new(960, 600),
        }
    }
}

impl ArtConfig {
    pub fn new(count: usize, viewport: CanvasSize) -> Self {
        Self { count, viewport }
    }

    /// Sample `count` rows
    pub fn gen_table<R: Rng>(&self, rng: &mut R) -> Vec<ShapeRow> {
        // Keep the ranges non-empty for zero-sized viewports
        let max_x = self.viewport.width.min(MAX_COORDINATE).max(1);
        let max_y = self.viewport.height.min(MAX_COORDINATE).max(1);

        (0..self.count)
            .map(|cnt| ShapeRow {
                cnt,
                sha: rng.gen_range(0..3),
                x: rng.gen_range(0..max_x),
                y: rng.gen_range(0..max_y),
                rad: rng.gen_range(0..100),
                rx: rng.gen_range(10..30),
                ry: rng.gen_range(10..30),
                w: rng.gen_range(10..100),
                h: rng.gen_range(1..100),
                r: rng.gen_range(0..255),
                g: rng.gen_range(0..255),
                b: rng.gen_range(0..255),
                op: (rng.gen_range(0.0..=1.0_f64) * 10.0).round() / 10.0,
            })
            .collect()
    }

    /// Header line plus one line per row, columns right-aligned to width 3
    pub fn format_table(rows: &[ShapeRow]) -> String {
        let header: Vec<String> = TABLE_HEADER.iter().map(|h| format!("{:>3}", h)).collect();
        let mut out = header.join(" ");
        out.push('\n');
        for row in rows {
            out.push_str(&row.to_string());
            out.push('\n');
        }
        out
    }
}
