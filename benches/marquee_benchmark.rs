//! Marquee benchmark: measurement and per-frame rendering cost.
//!
//! Target: a full label frame well under 10µs so dozens of labels fit in a
//! 60 FPS budget.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use marquee::widget::marquee::{measure, text_width};
use marquee::{Buffer, MarqueeConfig, Rect, ResizeHub, ScrollingText, Widget};
use std::time::Duration;

const LONG: &str = "This is a very long text that will need to scroll because it doesn't fit \
                    within the container width and demonstrates the scrolling animation";

fn width_ascii(c: &mut Criterion) {
    c.bench_function("text_width_ascii", |b| b.iter(|| text_width(black_box(LONG))));
}

fn width_mixed(c: &mut Criterion) {
    let text = "日本語 mixed with ASCII and emoji 🎉 and combining é";
    c.bench_function("text_width_mixed", |b| b.iter(|| text_width(black_box(text))));
}

fn measure_overflow(c: &mut Criterion) {
    let config = MarqueeConfig::default();
    c.bench_function("measure_overflowing", |b| {
        b.iter(|| measure(black_box(900), black_box(300), &config));
    });
}

fn render_scrolling(c: &mut Criterion) {
    let hub = ResizeHub::new();
    let mut label = ScrollingText::new(LONG);
    label.set_bounds(Rect::new(0, 0, 40, 1));
    label.mount(&hub);
    let mut buffer = Buffer::new(40, 1);

    c.bench_function("render_scrolling_40col", |b| {
        b.iter(|| {
            label.tick(Duration::from_millis(16));
            label.render(black_box(&mut buffer));
        });
    });
}

fn render_static(c: &mut Criterion) {
    let hub = ResizeHub::new();
    let mut label = ScrollingText::new("So Much for Stardust");
    label.set_bounds(Rect::new(0, 0, 40, 1));
    label.mount(&hub);
    let mut buffer = Buffer::new(40, 1);

    c.bench_function("render_static_40col", |b| {
        b.iter(|| label.render(black_box(&mut buffer)));
    });
}

criterion_group!(
    benches,
    width_ascii,
    width_mixed,
    measure_overflow,
    render_scrolling,
    render_static,
);
criterion_main!(benches);
