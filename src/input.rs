//! Input events driving the [`Playground`](crate::Playground).
//!
//! Windowing backends translate their native events into [`InputEvent`]s.

use crate::Point;

/// Keys the playground reacts to
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// `q`
    Quit,

    /// `r`: switch between sample markers and the interpolated curve
    ToggleMode,

    /// `u`: remove the last control point
    RemoveLast,
}

/// Pointer buttons
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Usually the left mouse button
    Primary,

    /// Any other button
    Other,
}

/// Direction the wheel was scrolled in
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    /// Away from the user, increases the sampling step
    Up,

    /// Towards the user, decreases the sampling step
    Down,
}

/// A single discrete input event
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// The window was asked to close
    Quit,

    /// A key was pressed
    Key(Key),

    /// A pointer button was pressed at `position`
    PointerDown {
        /// The pressed button
        button: PointerButton,
        /// Position in canvas coordinates
        position: Point,
    },

    /// A pointer button was released
    PointerUp {
        /// The released button
        button: PointerButton,
    },

    /// The pointer moved to a new position in canvas coordinates
    PointerMove(Point),

    /// The wheel was scrolled
    Wheel(WheelDirection),
}

#[cfg(feature = "gui")]
impl InputEvent {
    /// Translates an egui event relative to the canvas' top left corner `origin`.
    ///
    /// Returns `None` for events the playground doesn't handle.
    pub fn from_egui(event: &eframe::egui::Event, origin: eframe::egui::Pos2) -> Option<Self> {
        use eframe::egui;

        match event {
            egui::Event::Key {
                key,
                pressed,
                repeat,
                ..
            } => Self::from_egui_key(*key, *pressed, *repeat),
            egui::Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } => Some(Self::from_egui_button(*pos, *button, *pressed, origin)),
            egui::Event::PointerMoved(pos) => {
                Some(InputEvent::PointerMove(canvas_point(*pos, origin)))
            }
            egui::Event::MouseWheel { delta, .. } => Self::from_wheel_delta(delta.y),
            _ => None,
        }
    }

    /// Only fresh presses of `q`, `r` and `u` are handled, auto repeats are dropped.
    fn from_egui_key(key: eframe::egui::Key, pressed: bool, repeat: bool) -> Option<Self> {
        use eframe::egui;

        if !pressed || repeat {
            return None;
        }
        match key {
            egui::Key::Q => Some(InputEvent::Key(Key::Quit)),
            egui::Key::R => Some(InputEvent::Key(Key::ToggleMode)),
            egui::Key::U => Some(InputEvent::Key(Key::RemoveLast)),
            _ => None,
        }
    }

    fn from_egui_button(
        pos: eframe::egui::Pos2,
        button: eframe::egui::PointerButton,
        pressed: bool,
        origin: eframe::egui::Pos2,
    ) -> Self {
        let button = match button {
            eframe::egui::PointerButton::Primary => PointerButton::Primary,
            _ => PointerButton::Other,
        };
        if pressed {
            InputEvent::PointerDown {
                button,
                position: canvas_point(pos, origin),
            }
        } else {
            InputEvent::PointerUp { button }
        }
    }

    /// Positive `delta_y` scrolls up.
    fn from_wheel_delta(delta_y: f32) -> Option<Self> {
        if delta_y > 0.0 {
            Some(InputEvent::Wheel(WheelDirection::Up))
        } else if delta_y < 0.0 {
            Some(InputEvent::Wheel(WheelDirection::Down))
        } else {
            None
        }
    }
}

#[cfg(feature = "gui")]
fn canvas_point(pos: eframe::egui::Pos2, origin: eframe::egui::Pos2) -> Point {
    Point::new(pos.x - origin.x, pos.y - origin.y)
}
