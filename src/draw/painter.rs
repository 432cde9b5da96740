//! Draw frames with an [`egui::Painter`]

use std::convert::Infallible;

use eframe::egui;

use crate::draw::{Canvas, Color};
use crate::Point;

impl From<Color> for egui::Color32 {
    fn from(color: Color) -> Self {
        let [r, g, b, a] = color.to_rgba();
        egui::Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

/// [`Canvas`] painting into an egui layer.
///
/// Canvas coordinates are relative to `origin`, the top left corner of the painted area.
pub struct PainterCanvas<'p> {
    painter: &'p egui::Painter,
    origin: egui::Pos2,
}

impl<'p> PainterCanvas<'p> {
    /// Wraps `painter` with canvas coordinates starting at `origin`.
    pub fn new(painter: &'p egui::Painter, origin: egui::Pos2) -> Self {
        PainterCanvas { painter, origin }
    }

    fn to_screen(&self, point: Point) -> egui::Pos2 {
        self.origin + egui::vec2(point.x, point.y)
    }
}

impl<'p> Canvas for PainterCanvas<'p> {
    type Error = Infallible;

    fn clear(&mut self, color: Color) -> Result<(), Self::Error> {
        self.painter
            .rect_filled(self.painter.clip_rect(), egui::CornerRadius::ZERO, color);
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<(), Self::Error> {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(1.0, color),
        );
        Ok(())
    }

    fn fill_rect(&mut self, origin: Point, size: Point, color: Color) -> Result<(), Self::Error> {
        let rect = egui::Rect::from_min_size(self.to_screen(origin), egui::vec2(size.x, size.y));
        self.painter
            .rect_filled(rect, egui::CornerRadius::ZERO, color);
        Ok(())
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        // eframe presents once `update` returns
        Ok(())
    }
}
