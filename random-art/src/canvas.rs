//! HTML page with an embedded SVG canvas

use crate::shapes::Shape;
use crate::Result;
use std::io::Write;

/// One indentation level
const TAB: &str = "   ";

/// Canvas size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Writes the HTML prologue, shapes and epilogue to `out`
pub struct HtmlCanvas<W: Write> {
    out: W,
    title: String,
    size: CanvasSize,
}

impl<W: Write> HtmlCanvas<W> {
    pub fn new(out: W, title: impl Into<String>, size: CanvasSize) -> Self {
        Self {
            out,
            title: title.into(),
            size,
        }
    }

    fn line(&mut self, indent: usize, text: &str) -> Result<()> {
        writeln!(self.out, "{}{}", TAB.repeat(indent), text)?;
        Ok(())
    }

    /// HTML head plus the opening `<svg>` tag
    pub fn write_prologue(&mut self) -> Result<()> {
        self.line(0, "<html>")?;
        self.line(0, "<head>")?;
        let title = format!("<title>{}</title>", self.title);
        self.line(1, &title)?;
        self.line(0, "</head>")?;
        self.line(0, "<body>")?;
        self.line(1, "<!--Define SVG drawing box-->")?;
        let svg = format!("<svg width=\"{}\" height=\"{}\">", self.size.width, self.size.height);
        self.line(1, &svg)
    }

    pub fn draw(&mut self, indent: usize, shape: &Shape) -> Result<()> {
        self.line(indent, &shape.to_string())
    }

    /// Closes the canvas and the page
    pub fn write_epilogue(&mut self) -> Result<()> {
        self.line(1, "</svg>")?;
        self.line(0, "</body>")?;
        self.line(0, "</html>")
    }

    /// Write a complete page and hand back the writer
    pub fn render(mut self, indent: usize, shapes: &[Shape]) -> Result<W> {
        self.write_prologue()?;
        for shape in shapes {
            self.draw(indent, shape)?;
        }
        self.write_epilogue()?;
        self.out.flush()?;
        Ok(self.out)
    }
}
