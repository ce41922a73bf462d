//! Drives a two-field form with a scripted stream of pointer and key events and logs
//! the draw batch of every frame.
//!
//! Run with `RUST_LOG=debug cargo run --example scripted`.

use fieldkit::prelude::*;

enum Step {
    Move(f32, f32),
    Press(f32, f32),
    Key(KeyCode),
}

fn main() {
    env_logger::init();

    let mut group = InputGroup::new();

    let width = group.add(TextInput::new(Point::new(200.0, 40.0), "Width", "64"));
    width.borrow_mut().add_callback(|input, value| {
        log::info!("{} committed: {value}", input.title());
    });

    let name = group.add(
        TextInput::with_color(
            Point::new(200.0, 160.0),
            "Name",
            "",
            Color::from_hex(0x66CCFF),
        )
        .numeric_only(false)
        .max_chars(12),
    );
    name.borrow_mut().add_callback(|input, value| {
        log::info!("{} committed: {value:?}", input.title());
    });

    let mut metrics = TextMeasurer::new();
    let mut ctx = PaintContext::new();

    // First frame populates the hit areas
    group.render(&mut ctx, &mut metrics);
    ctx.take_commands();

    let width_area = width.borrow().area().unwrap_or_default();
    let name_area = name.borrow().area().unwrap_or_default();
    let centre = |r: Rect| (r.x + r.width * 0.5, r.y + r.height * 0.5);

    let (wx, wy) = centre(width_area);
    let (nx, ny) = centre(name_area);

    let mut script = vec![
        Step::Move(wx, wy),
        Step::Press(wx, wy),
        Step::Key(KeyCode::BACKSPACE),
        Step::Key(KeyCode::NUM_8),
        Step::Key(KeyCode::letter('q').unwrap_or(KeyCode::UNKNOWN)),
        Step::Move(nx, ny),
        Step::Press(nx, ny),
    ];
    script.extend("fieldkit".chars().filter_map(KeyCode::letter).map(Step::Key));
    script.push(Step::Press(0.0, 0.0));

    for (frame, step) in script.into_iter().enumerate() {
        match step {
            Step::Move(x, y) => group.pointer_moved(Point::new(x, y)),
            Step::Press(x, y) => {
                group.pointer_pressed(Point::new(x, y));
            }
            Step::Key(key) => {
                group.key_pressed(key, 0);
            }
        }

        if group.take_changed() {
            log::debug!("frame {frame}: values {:?}", group.values());
        }

        group.render(&mut ctx, &mut metrics);
        let batch = ctx.take_commands();
        log::debug!("frame {frame}: {} draw commands", batch.len());
        for cmd in &batch {
            log::trace!("  {cmd:?}");
        }
    }

    println!("{:?}", group.values());
}
