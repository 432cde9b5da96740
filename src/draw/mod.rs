//! Defines the [`Canvas`] trait the playground draws its frames on.
//!
//! Drawing a frame only needs four primitives, so every windowing or
//! document backend can be plugged in with a few lines.
//!
//! Use different crate features to enable different backends:
//! - `draw-svg` to write frames as svg documents
//! - `gui` to paint frames with egui
use serde::{Deserialize, Serialize};

use crate::Point;

/// A RGBA color packed as `0xRRGGBBAA`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Red component
    pub fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green component
    pub fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue component
    pub fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha component
    pub fn a(self) -> u8 {
        self.0 as u8
    }

    /// Components in the order red, green, blue, alpha
    pub fn to_rgba(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

/// Something frames can be drawn on.
///
/// Every primitive may fail; a failure aborts the frame.
pub trait Canvas {
    /// Error reported by the backend
    type Error;

    /// Fill the whole canvas with `color`.
    fn clear(&mut self, color: Color) -> Result<(), Self::Error>;

    /// Draw a straight line from `from` to `to`.
    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<(), Self::Error>;

    /// Fill the axis aligned rectangle spanning from `origin` to `origin + size`.
    fn fill_rect(&mut self, origin: Point, size: Point, color: Color) -> Result<(), Self::Error>;

    /// Finish the current frame.
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// Fill a square of side `size` centered on `center`.
pub fn draw_marker<C: Canvas + ?Sized>(
    canvas: &mut C,
    center: Point,
    size: f32,
    color: Color,
) -> Result<(), C::Error> {
    let size = Point::repeat(size);
    canvas.fill_rect(center - size * 0.5, size, color)
}

#[cfg(feature = "gui")]
pub mod painter;
#[cfg(feature = "draw-svg")]
pub mod svg;
