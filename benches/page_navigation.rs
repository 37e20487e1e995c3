// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for flip book navigation.
//!
//! Measures the performance of:
//! - A full forward walk through a long book (flip + commit per page)
//! - Computing the pages to keep in memory around the current one

use criterion::{criterion_group, criterion_main, Criterion};
use flipbook::catalog::Page;
use flipbook::ui::flipbook::{Message, Settings, State};
use std::hint::black_box;
use std::time::{Duration, Instant};

const PAGE_COUNT: usize = 500;

fn book(now: Instant, prefetch_radius: usize) -> State {
    let pages = (0..PAGE_COUNT)
        .map(|i| Page {
            id: format!("page-{i}"),
            image: format!("pages/{i}.png"),
            title: None,
            description: None,
        })
        .collect();
    let settings = Settings {
        prefetch_radius,
        ..Settings::default()
    };
    State::new(pages, "Bench", true, settings, now)
}

/// Advance and commit every page of the book.
fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_navigation");
    let step = Settings::default().flip_duration.as_duration() + Duration::from_millis(1);

    group.bench_function("walk_500_pages", |b| {
        b.iter(|| {
            let start = Instant::now();
            let mut state = book(start, 1);
            let mut now = start;
            for _ in 1..PAGE_COUNT {
                state.handle_message_at(Message::Advance, now);
                now += step;
                state.handle_message_at(Message::Tick(now), now);
            }
            black_box(state.current_index());
        });
    });

    group.finish();
}

/// Prefetch window computation at the widest radius.
fn bench_wanted_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_navigation");
    let now = Instant::now();
    let mut state = book(now, 4);
    state.handle_message_at(Message::JumpTo(PAGE_COUNT / 2), now);

    group.bench_function("wanted_pages_mid_flip", |b| {
        b.iter(|| black_box(state.wanted_pages().len()));
    });

    group.finish();
}

criterion_group!(benches, bench_walk, bench_wanted_pages);
criterion_main!(benches);
