//! Ingestion and rendering benchmarks

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use termshot::font::{FontFaceSet, Glyph, GlyphFace, LineMetrics};
use termshot::{Config, Scaffold};

/// Fixed-advance face so the numbers do not depend on installed fonts
struct BlockFace;

impl GlyphFace for BlockFace {
    fn line_metrics(&self) -> LineMetrics {
        LineMetrics {
            ascent: 22.0,
            descent: 6.0,
        }
    }

    fn advance(&self, _c: char) -> f32 {
        12.0
    }

    fn rasterize(&self, _c: char) -> Glyph {
        Glyph {
            left: 0,
            top: 22,
            width: 12,
            height: 22,
            coverage: vec![200; 12 * 22],
        }
    }
}

fn scaffold(config: &Config) -> Scaffold {
    let mut s = Scaffold::with_faces(config, FontFaceSet::uniform(Arc::new(BlockFace)))
        .expect("default palette is valid");
    s.set_columns(80);
    s
}

fn sample_output() -> String {
    "total 42 \x1b[1;34msrc\x1b[0m \x1b[32mCargo.toml\x1b[0m \x1b[4mREADME.md\x1b[0m\n".repeat(40)
}

fn bench_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest");

    let input = sample_output();
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("ansi_listing", |b| {
        let config = Config::default();
        b.iter(|| {
            let mut s = scaffold(&config);
            s.add_content(black_box(input.as_bytes())).unwrap();
            black_box(s.content().len())
        })
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(20);

    let input = sample_output();

    group.bench_function("no_shadow", |b| {
        let config = Config {
            draw_shadow: false,
            ..Config::default()
        };
        let mut s = scaffold(&config);
        s.add_content(input.as_bytes()).unwrap();
        b.iter(|| black_box(s.render().unwrap()))
    });

    group.bench_function("with_shadow", |b| {
        let mut s = scaffold(&Config::default());
        s.add_content(input.as_bytes()).unwrap();
        b.iter(|| black_box(s.render().unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_ingest, bench_render);
criterion_main!(benches);
