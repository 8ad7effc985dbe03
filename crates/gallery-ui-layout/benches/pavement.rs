use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gallery_ui_graphics::Rect;
use gallery_ui_layout::{CellSpec, Constraints, PavementConfig, PavementHost, PavementLayout};

const COLUMNS: u32 = 4;
const CELL_COUNT_SAMPLES: &[u32] = &[16, 256, 4096];
const ROOT_WIDTH: f32 = 1080.0;

struct SinkHost {
    checksum: f32,
}

impl PavementHost<u32> for SinkHost {
    fn measure_child(&mut self, _child: &u32, constraints: Constraints) {
        self.checksum += constraints.max_width;
    }

    fn place_child(&mut self, _child: &u32, bounds: Rect) {
        self.checksum += bounds.x + bounds.y;
    }
}

/// Alternates 2x2 tiles with columns of 1x1 cells, like a photo wall.
fn photo_wall(cells: u32) -> PavementLayout<u32> {
    let mut layout = PavementLayout::new(PavementConfig::default().spacing(4.0, 4.0));
    let mut row = 0;
    let mut id = 0;
    while id < cells {
        layout.insert(id, CellSpec::at(0, row).with_span(2, 2));
        id += 1;
        for column in 2..COLUMNS {
            for offset in 0..2 {
                if id < cells {
                    layout.insert(id, CellSpec::at(column, row + offset));
                    id += 1;
                }
            }
        }
        row += 2;
    }
    layout
}

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("pavement_measure");
    for &cells in CELL_COUNT_SAMPLES {
        group.bench_with_input(BenchmarkId::new("cells", cells), &cells, |b, &cells| {
            let mut layout = photo_wall(cells);
            let constraints = Constraints::unbounded().copy_with_width(ROOT_WIDTH, ROOT_WIDTH);
            b.iter(|| {
                let size = layout.measure(constraints);
                black_box(size);
            });
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("pavement_layout");
    for &cells in CELL_COUNT_SAMPLES {
        group.bench_with_input(BenchmarkId::new("cells", cells), &cells, |b, &cells| {
            let mut layout = photo_wall(cells);
            let mut host = SinkHost { checksum: 0.0 };
            b.iter(|| {
                let size = layout.layout(Constraints::tight(ROOT_WIDTH, 1920.0), &mut host);
                black_box((size, host.checksum));
            });
        });
    }
    group.finish();
}

criterion_group!(pavement, bench_measure, bench_layout);
criterion_main!(pavement);
