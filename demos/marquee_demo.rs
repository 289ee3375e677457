//! Marquee Demo: five labels in containers of different widths.
//!
//! Demonstrates:
//! - Short text that fits and stays still
//! - Long text that scrolls with fade edges
//! - Containers sized full, half, three-quarter and capped widths
//! - Re-measurement on terminal resize
//!
//! Set `MARQUEE_LOG` (e.g. `MARQUEE_LOG=debug`) to write a trace to
//! `marquee-demo.log`.

use crossbeam_channel::select;
use marquee::{
    ContainerWidth, Engine, InputEvent, Modifiers, Rect, Rgb, ScrollingText, Style, Widget,
};
use std::fs::File;
use std::sync::Mutex;

const PAGE_BG: Rgb = Rgb::new(20, 20, 30);
const LABEL_STYLE: Style = Style::new(Rgb::new(31, 41, 55), Rgb::new(229, 231, 235));

const SAMPLES: [(&str, ContainerWidth); 5] = [
    ("So Much for Stardust", ContainerWidth::Full),
    (
        "Tell That Mick He Just Made My List of Things to Do Today - Fall Out Boy",
        ContainerWidth::Max(36),
    ),
    (
        "This is a short text that doesn't need scrolling",
        ContainerWidth::HALF,
    ),
    (
        "This is a very long text that will need to scroll because it doesn't fit within \
         the container width and demonstrates the Spotify-like scrolling animation with \
         fade-out effects on both sides, now scrolling all the way through before reversing",
        ContainerWidth::THREE_QUARTERS,
    ),
    (
        "This text is in a full-width container to demonstrate the component's ability to \
         adapt to different parent widths",
        ContainerWidth::Full,
    ),
];

fn init_logging() -> marquee::Result<()> {
    let Ok(filter) = std::env::var("MARQUEE_LOG") else {
        return Ok(());
    };
    let file = File::create("marquee-demo.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Place each label on its own row, three rows apart, inside a padded page.
fn layout(labels: &mut [ScrollingText], width: u16) {
    let page_width = width.saturating_sub(4);
    for (i, (label, (_, container))) in labels.iter_mut().zip(SAMPLES).enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let y = 3 + 3 * i as u16;
        label.set_bounds(container.apply(Rect::new(2, y, page_width, 1)));
    }
}

fn render_all(engine: &mut Engine, labels: &[ScrollingText]) {
    let width = engine.width();
    let buffer = engine.buffer_mut();
    buffer.fill_rect(buffer.area(), &marquee::Cell::blank().with_bg(PAGE_BG));

    let title = Style::new(Rgb::WHITE, PAGE_BG).with_modifiers(Modifiers::BOLD);
    let mut col = 2;
    for ch in "Scrolling Text Demo  (Esc to quit)".chars() {
        if col >= width {
            break;
        }
        let mut buf = [0u8; 4];
        col += u16::from(buffer.set_grapheme(col, 1, ch.encode_utf8(&mut buf), title));
    }

    for label in labels {
        label.render(buffer);
    }
}

fn main() -> marquee::Result<()> {
    init_logging()?;

    let mut engine = Engine::new()?;
    let mut labels: Vec<ScrollingText> = SAMPLES
        .iter()
        .map(|(text, _)| ScrollingText::new(*text).with_style(LABEL_STYLE))
        .collect();

    layout(&mut labels, engine.width());
    for label in &mut labels {
        label.mount(engine.resize_hub());
    }

    render_all(&mut engine, &labels);
    engine.present()?;

    let input = engine.input_receiver().clone();
    let ticks = engine.tick_receiver().clone();

    while engine.is_running() {
        select! {
            recv(input) -> result => {
                let Ok(event) = result else { break };
                match event {
                    ref e if e.is_quit() => engine.stop(),
                    InputEvent::Resize { width, height } => {
                        engine.handle_resize(width, height);
                        layout(&mut labels, width);
                        for label in &mut labels {
                            label.sync();
                        }
                        render_all(&mut engine, &labels);
                        engine.present()?;
                    }
                    InputEvent::Error(message) => tracing::warn!(%message, "input error"),
                    _ => {}
                }
            }
            recv(ticks) -> result => {
                let Ok(tick) = result else { break };
                let mut changed = false;
                for label in &mut labels {
                    changed |= label.tick(tick.delta);
                }
                if changed || labels.iter().any(|label| label.needs_redraw()) {
                    render_all(&mut engine, &labels);
                    engine.present()?;
                    for label in &mut labels {
                        label.clear_redraw();
                    }
                }
            }
        }
    }

    for label in &mut labels {
        label.unmount();
    }
    Ok(())
}
