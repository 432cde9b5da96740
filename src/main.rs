//! Bezier curve visualizer.
//!
//! Left click places a control point or grabs an existing one to drag it.
//! `r` switches between sample markers and the curve, `u` removes the last point,
//! the wheel changes the sampling step and `q` quits.

use std::time::Duration;

use eframe::egui;
use nbezier_viz::draw::painter::PainterCanvas;
use nbezier_viz::{Config, InputEvent, Playground};

const TITLE: &str = "Bezier Curves";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("nbezier-viz v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load_from_file(&Config::config_path());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.screen_width, config.screen_height])
            .with_resizable(true)
            .with_title(TITLE),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(VizApp::new(config)))),
    )
    .map_err(|err| anyhow::anyhow!("could not create window: {err}"))
}

struct VizApp {
    playground: Playground,
    frame_duration: Duration,
}

impl VizApp {
    fn new(config: Config) -> Self {
        let playground = Playground::new(config);
        log::info!(
            "capacity {}, {:?} binomial coefficients, {} fps",
            playground.points().capacity(),
            playground.evaluator().binomial().strategy(),
            playground.config().fps
        );
        VizApp {
            frame_duration: playground.config().frame_duration(),
            playground,
        }
    }
}

impl eframe::App for VizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;

                let events: Vec<InputEvent> = ctx.input(|i| {
                    let close = i.viewport().close_requested().then_some(InputEvent::Quit);
                    i.events
                        .iter()
                        .filter_map(|event| InputEvent::from_egui(event, origin))
                        .chain(close)
                        .collect()
                });
                for event in events {
                    self.playground.handle(event);
                }

                let mut canvas = PainterCanvas::new(ui.painter(), origin);
                if let Err(err) = self.playground.render(&mut canvas) {
                    log::error!("rendering failed: {}", err);
                    std::process::exit(1);
                }
            });

        if self.playground.should_quit() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        ctx.request_repaint_after(self.frame_duration);
    }
}
