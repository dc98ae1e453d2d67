//! SVG shapes

use std::fmt;

/// Fill colour with opacity in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
    pub opacity: f64,
}

impl Rgba {
    pub fn new(red: u32, green: u32, blue: u32, opacity: f64) -> Self {
        Self {
            red,
            green,
            blue,
            opacity,
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fill=\"rgb({}, {}, {})\" fill-opacity=\"{:.1}\"",
            self.red, self.green, self.blue, self.opacity
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub cx: u32,
    pub cy: u32,
    pub rad: u32,
    pub color: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub color: Rgba,
}

/// Anything that can be drawn on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(c) => write!(
                f,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}></circle>",
                c.cx, c.cy, c.rad, c.color
            ),
            Shape::Rectangle(r) => write!(
                f,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}></rect>",
                r.x, r.y, r.width, r.height, r.color
            ),
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

/// Two rows of circles with a band of overlapping squares between them
pub fn fixed_art() -> Vec<Shape> {
    let red = Rgba::new(255, 0, 0, 1.0);
    let blue = Rgba::new(0, 0, 255, 1.0);
    let band = [
        Rgba::new(0, 255, 0, 0.8),
        Rgba::new(0, 0, 255, 0.8),
        Rgba::new(255, 0, 0, 0.8),
    ];

    let mut shapes: Vec<Shape> = Vec::new();
    for (cy, color) in [(50, red), (250, blue)] {
        for cx in (50..=450).step_by(100) {
            shapes.push(Circle { cx, cy, rad: 50, color }.into());
        }
    }
    for (i, x) in (0..=300).step_by(60).enumerate() {
        shapes.push(
            Rectangle {
                x,
                y: 100,
                width: 100,
                height: 100,
                color: band[i % band.len()],
            }
            .into(),
        );
    }
    shapes
}
