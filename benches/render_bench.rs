//! Benchmarks for section dispatch and page rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use screening_dashboard::data::DatasetRegistry;
use screening_dashboard::render::{chart_svg, render_page, PageOptions, Renderer};
use screening_dashboard::section::{SectionId, SectionRouter};
use tempfile::tempdir;

fn bench_dispatch(c: &mut Criterion) {
    let registry = DatasetRegistry::national_2023();
    let renderer = Renderer::new(&registry);
    let mut group = c.benchmark_group("dispatch");

    for id in SectionId::ALL {
        group.bench_function(format!("render_{}", id), |b| {
            b.iter(|| renderer.render_section(black_box(id)))
        });
    }

    group.bench_function("select_and_render_unknown", |b| {
        let mut router = SectionRouter::new();
        b.iter(|| {
            router.select(black_box("bogus"));
            renderer.render(&router)
        })
    });

    group.throughput(Throughput::Elements(SectionId::ALL.len() as u64));
    group.bench_function("render_all", |b| b.iter(|| renderer.render_all()));

    group.finish();
}

fn bench_html(c: &mut Criterion) {
    let registry = DatasetRegistry::national_2023();
    let renderer = Renderer::new(&registry);
    let options = PageOptions::default();
    let mut group = c.benchmark_group("html");

    for id in [SectionId::Overview, SectionId::Demographics, SectionId::Recommendations] {
        let panel = renderer.render_section(id);
        group.bench_function(format!("page_{}", id), |b| {
            b.iter(|| render_page(black_box(&panel), registry.source(), &options))
        });
    }

    group.finish();
}

fn bench_svg(c: &mut Criterion) {
    let registry = DatasetRegistry::national_2023();
    let renderer = Renderer::new(&registry);
    let mut group = c.benchmark_group("svg");

    let demographics = renderer.render_section(SectionId::Demographics);
    let overview = renderer.render_section(SectionId::Overview);

    for chart in demographics.charts.iter().chain(overview.charts.iter()) {
        group.bench_function(format!("{:?}_{}", chart.kind, chart.points.len()), |b| {
            b.iter(|| chart_svg(black_box(chart), 640, 320))
        });
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let registry = DatasetRegistry::national_2023();
    let options = PageOptions::default();

    c.bench_function("export_site", |b| {
        let dir = tempdir().unwrap();
        b.iter(|| {
            screening_dashboard::export::export_site(
                &registry,
                dir.path(),
                &options,
                SectionId::Overview,
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_dispatch, bench_html, bench_svg, bench_export);
criterion_main!(benches);
