//! Interactive state tying control points, sampling and input together.

use crate::control_points::ControlPoints;
use crate::draw::{draw_marker, Canvas};
use crate::evaluator::Evaluator;
use crate::input::{InputEvent, Key, PointerButton, WheelDirection};
use crate::{Config, Point};

/// How the curve is visualized
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// A marker at every sample
    Markers,

    /// Line segments between consecutive samples
    Curve,
}

impl RenderMode {
    /// The respective other mode
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Markers => RenderMode::Curve,
            RenderMode::Curve => RenderMode::Markers,
        }
    }
}

/// The whole state of a visualizer session.
///
/// Input events mutate it through [`Playground::handle`],
/// each frame is drawn by [`Playground::render`].
pub struct Playground {
    config: Config,
    points: ControlPoints,
    evaluator: Evaluator,
    mode: RenderMode,
    step: f32,
    quit: bool,
}

impl Playground {
    /// Creates an empty playground.
    ///
    /// The config is expected to be valid (see [`Config::validate`]).
    pub fn new(config: Config) -> Self {
        let points = ControlPoints::new(config.capacity, config.marker_size);
        let evaluator = Evaluator::new(config.binomial, config.capacity);
        let step = config.clamp_step(config.initial_step);
        Playground {
            config,
            points,
            evaluator,
            mode: RenderMode::Markers,
            step,
            quit: false,
        }
    }

    /// The configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The control points placed so far
    pub fn points(&self) -> &ControlPoints {
        &self.points
    }

    /// The evaluator used to sample the curve
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// The current visualization
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// The current sampling step
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Checks whether the user asked to quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Applies a single input event.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit | InputEvent::Key(Key::Quit) => {
                log::debug!("quit requested");
                self.quit = true;
            }
            InputEvent::Key(Key::ToggleMode) => {
                self.mode = self.mode.toggled();
                log::debug!("render mode: {:?}", self.mode);
            }
            InputEvent::Key(Key::RemoveLast) => {
                self.points.remove_last();
            }
            InputEvent::PointerDown {
                button: PointerButton::Primary,
                position,
            } => self.press(position),
            InputEvent::PointerUp {
                button: PointerButton::Primary,
            } => self.points.deselect(),
            InputEvent::PointerMove(position) => self.points.move_selected(position),
            InputEvent::Wheel(direction) => self.scroll(direction),
            InputEvent::PointerDown { .. } | InputEvent::PointerUp { .. } => {}
        }
    }

    /// Grabs the point under `position` or places a new one there.
    fn press(&mut self, position: Point) {
        match self.points.hit_test(position) {
            Some(index) => self.points.select(index),
            None => {
                self.points.deselect();
                if let Err(err) = self.points.add(position) {
                    log::debug!("{}", err);
                }
            }
        }
    }

    fn scroll(&mut self, direction: WheelDirection) {
        let delta = match direction {
            WheelDirection::Up => self.config.step_increment,
            WheelDirection::Down => -self.config.step_increment,
        };
        self.step = self.config.clamp_step(self.step + delta);
        log::debug!("sampling step: {}", self.step);
    }

    /// Draws the current state as one frame.
    ///
    /// The first failing primitive aborts the frame.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<(), C::Error> {
        let config = &self.config;
        canvas.clear(config.background)?;

        let points = self.points.as_slice();
        if !points.is_empty() {
            match self.mode {
                RenderMode::Markers => {
                    for sample in self.evaluator.samples(points, self.step) {
                        draw_marker(canvas, sample, config.marker_size, config.curve)?;
                    }
                }
                RenderMode::Curve => {
                    for (begin, end) in self.evaluator.segments(points, self.step) {
                        canvas.draw_line(begin, end, config.curve)?;
                    }
                }
            }
        }

        for point in &self.points {
            draw_marker(canvas, *point, config.marker_size, config.control)?;
        }
        for (from, to) in self.points.iter().zip(self.points.iter().skip(1)) {
            canvas.draw_line(*from, *to, config.control)?;
        }

        canvas.present()
    }
}
