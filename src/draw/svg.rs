//! Draw frames into a svg document
//!
//! Every presented frame replaces the previous document.
//!
//! ```
//! use nbezier_viz::draw::svg::SvgCanvas;
//! use nbezier_viz::draw::{Canvas, Color};
//! use nbezier_viz::Point;
//!
//! let mut canvas = SvgCanvas::new(100.0, 100.0);
//! canvas.clear(Color(0x000000FF)).unwrap();
//! canvas.draw_line(Point::new(0.0, 1.0), Point::new(2.0, 3.0), Color(0xFF0000FF)).unwrap();
//! canvas.present().unwrap();
//! assert!(canvas.document().contains("<line x1=\"0\" y1=\"1\" x2=\"2\" y2=\"3\""));
//! ```

use std::fmt::{self, Display, Formatter, Write};

use crate::draw::{Canvas, Color};
use crate::Point;

/// Writes a color as svg paint, keeping transparency separate
struct Paint(Color);

impl Display for Paint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b, _] = self.0.to_rgba();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

enum Element {
    Line {
        from: Point,
        to: Point,
        color: Color,
    },
    Rect {
        origin: Point,
        size: Point,
        color: Color,
    },
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Element::Line { from, to, color } => write!(
                f,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\"",
                from.x,
                from.y,
                to.x,
                to.y,
                Paint(*color)
            )?,
            Element::Rect {
                origin,
                size,
                color,
            } => write!(
                f,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"",
                origin.x,
                origin.y,
                size.x,
                size.y,
                Paint(*color)
            )?,
        }
        let alpha = match self {
            Element::Line { color, .. } | Element::Rect { color, .. } => color.a(),
        };
        if alpha != u8::MAX {
            write!(f, " opacity=\"{:.3}\"", alpha as f32 / 255.0)?;
        }
        writeln!(f, "/>")
    }
}

/// [`Canvas`] collecting primitives and rendering them as a svg document on [`Canvas::present`].
pub struct SvgCanvas {
    width: f32,
    height: f32,
    background: Option<Color>,
    elements: Vec<Element>,
    document: String,
}

impl SvgCanvas {
    /// Creates a canvas whose view box spans `0,0` to `width,height`.
    pub fn new(width: f32, height: f32) -> Self {
        SvgCanvas {
            width,
            height,
            background: None,
            elements: Vec::new(),
            document: String::new(),
        }
    }

    /// The last presented frame, empty before the first one
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Number of primitives drawn since the last clear
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}

impl Canvas for SvgCanvas {
    type Error = fmt::Error;

    fn clear(&mut self, color: Color) -> Result<(), Self::Error> {
        self.elements.clear();
        self.background = Some(color);
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<(), Self::Error> {
        self.elements.push(Element::Line { from, to, color });
        Ok(())
    }

    fn fill_rect(&mut self, origin: Point, size: Point, color: Color) -> Result<(), Self::Error> {
        self.elements.push(Element::Rect {
            origin,
            size,
            color,
        });
        Ok(())
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        let mut document = String::new();
        writeln!(
            document,
            "<svg viewBox=\"0 0 {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
            self.width, self.height
        )?;
        if let Some(color) = self.background {
            write!(
                document,
                "{}",
                Element::Rect {
                    origin: Point::zeros(),
                    size: Point::new(self.width, self.height),
                    color,
                }
            )?;
        }
        for element in self.elements.iter() {
            write!(document, "{}", element)?;
        }
        writeln!(document, "</svg>")?;
        self.document = document;
        Ok(())
    }
}
