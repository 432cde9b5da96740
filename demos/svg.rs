use nbezier_viz::draw::svg::SvgCanvas;
use nbezier_viz::input::{Key, PointerButton};
use nbezier_viz::{Config, InputEvent, Playground, Point};

fn main() {
    let config = Config {
        initial_step: 0.02,
        ..Config::default()
    };
    let mut canvas = SvgCanvas::new(config.screen_width, config.screen_height);
    let mut playground = Playground::new(config);

    for (x, y) in [(100.0, 500.0), (250.0, 80.0), (550.0, 520.0), (700.0, 100.0)] {
        playground.handle(InputEvent::PointerDown {
            button: PointerButton::Primary,
            position: Point::new(x, y),
        });
        playground.handle(InputEvent::PointerUp {
            button: PointerButton::Primary,
        });
    }
    playground.handle(InputEvent::Key(Key::ToggleMode));

    playground
        .render(&mut canvas)
        .expect("Writing to a String doesn't fail");
    println!("{}", canvas.document());
}
