use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use storegrid_layout::{GridLayout, PageWindow};

fn bench_interleave(c: &mut Criterion) {
    let mut group = c.benchmark_group("interleave");
    for len in [6usize, 24, 240, 2400] {
        for (regime, wide) in [("narrow", false), ("wide", true)] {
            let layout = GridLayout::new().wide(wide);
            group.bench_function(format!("{regime}_{len}"), |b| {
                b.iter_batched(
                    || (0..len).collect::<Vec<usize>>(),
                    |items| black_box(layout.compute(items)),
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_page_window(c: &mut Criterion) {
    c.bench_function("page_window_bounds", |b| {
        let window = PageWindow::new(100_000, 24);
        b.iter(|| {
            let mut acc = 0usize;
            for page in 1..=window.total_pages() {
                let (start, end) = window.slice_bounds(black_box(page));
                acc += end - start;
            }
            black_box(acc)
        });
    });
}

criterion_group!(benches, bench_interleave, bench_page_window);
criterion_main!(benches);
