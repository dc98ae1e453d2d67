//! Random Art Generator
//!
//! Samples circles and rectangles and writes them as SVG inside a minimal
//! HTML page.
//!
//! ```no_run
//! use random_art::{ArtConfig, CanvasSize, HtmlCanvas};
//! use std::fs::File;
//!
//! let size = CanvasSize::new(960, 600);
//! let rows = ArtConfig::new(25, size).gen_table(&mut rand::thread_rng());
//! let shapes: Vec<_> = rows.iter().map(|row| row.to_shape()).collect();
//!
//! let file = File::create("output.html").unwrap();
//! HtmlCanvas::new(file, "Random Art", size).render(1, &shapes).unwrap();
//! ```

pub mod canvas;
pub mod config;
pub mod shapes;

pub use canvas::{CanvasSize, HtmlCanvas};
pub use config::{ArtConfig, ShapeRow};
pub use shapes::{fixed_art, Circle, Rectangle, Rgba, Shape};

/// Result type for art generation
pub type Result<T> = std::result::Result<T, ArtError>;

/// Errors that can occur while generating art
#[derive(Debug, thiserror::Error)]
pub enum ArtError {
    #[error("Invalid canvas size {0:?}, expected WIDTHxHEIGHT")]
    InvalidCanvas(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl std::str::FromStr for CanvasSize {
    type Err = ArtError;

    /// Parse `960x600`
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ArtError::InvalidCanvas(s.to_string());
        let (width, height) = s.split_once('x').ok_or_else(invalid)?;
        Ok(CanvasSize::new(
            width.trim().parse().map_err(|_| invalid())?,
            height.trim().parse().map_err(|_| invalid())?,
        ))
    }
}
