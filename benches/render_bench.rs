use criterion::{criterion_group, criterion_main, Criterion};

use folio::platform::{ScrollMonitor, SimulatedWindow};
use folio::rendering::{render_page, snapshot, ViewState};
use folio::{Content, PageConfig};

fn bench_render_page(c: &mut Criterion) {
    let cfg = PageConfig::default();
    let content = Content::builtin();

    c.bench_function("render_page", |b| {
        b.iter(|| {
            let _ = render_page(&cfg, content, ViewState::default()).unwrap();
        })
    });
}

fn bench_outbound_links(c: &mut Criterion) {
    let page = render_page(&PageConfig::default(), Content::builtin(), ViewState::default()).unwrap();

    c.bench_function("outbound_links", |b| {
        b.iter(|| {
            let _ = snapshot::outbound_links(&page.html).unwrap();
        })
    });
}

fn bench_scroll_dispatch(c: &mut Criterion) {
    let window = SimulatedWindow::new();
    let monitor = ScrollMonitor::mount(&window);
    let mut y = 0.0;

    c.bench_function("scroll_dispatch", |b| {
        b.iter(|| {
            y = if y > 200.0 { 0.0 } else { y + 7.0 };
            window.set_scroll_y(y);
            monitor.is_past_threshold()
        })
    });
}

criterion_group!(benches, bench_render_page, bench_outbound_links, bench_scroll_dispatch);
criterion_main!(benches);
