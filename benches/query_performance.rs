use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use xscdb::codec::{BlobCodec, ElementWidth};
use xscdb::record::{CachedSpectrum, CrossSection};
use xscdb::resample::{BinningKernel, Resampler};

/// Create a record holding a single Gaussian band with a known grid
fn create_test_record(npnts: usize, explicit_grid: bool) -> CrossSection {
    let nu: Vec<f64> = (0..npnts)
        .map(|i| 500.0 + i as f64 * 1000.0 / (npnts - 1) as f64)
        .collect();
    let xsc: Vec<f64> = nu
        .iter()
        .map(|v| 1e-18 * (-((v - 1000.0) / 50.0).powi(2)).exp())
        .collect();

    let mut xs = CrossSection::new().with_bounds(500.0, 1500.0);
    if explicit_grid {
        xs.set_data(Some(&nu), &xsc).unwrap();
    } else {
        xs.set_data(None, &xsc).unwrap();
    }
    xs
}

/// Benchmark blob packing and unpacking
fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let codec = BlobCodec::default();

    for npnts in [1_000, 10_000, 100_000] {
        let values: Vec<f64> = (0..npnts).map(|i| (i as f64 * 0.01).sin()).collect();
        let blob = codec.encode(&values, ElementWidth::Float32).unwrap();
        group.throughput(Throughput::Elements(npnts as u64));

        group.bench_with_input(BenchmarkId::new("encode", npnts), &values, |b, values| {
            b.iter(|| {
                let blob = codec
                    .encode(black_box(values), ElementWidth::Float32)
                    .unwrap();
                black_box(blob);
            });
        });

        group.bench_with_input(BenchmarkId::new("decode", npnts), &blob, |b, blob| {
            b.iter(|| {
                let values = codec.decode(black_box(blob)).unwrap();
                black_box(values);
            });
        });
    }

    group.finish();
}

/// Benchmark wavenumber range queries against both grid kinds
fn bench_range_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_query");

    for (label, explicit) in [("explicit", true), ("implicit", false)] {
        let xs = create_test_record(100_000, explicit);

        for width in [10.0, 100.0, 500.0] {
            group.bench_with_input(
                BenchmarkId::new(label, format!("{}cm-1", width)),
                &width,
                |b, &width| {
                    b.iter(|| {
                        let window = xs
                            .range(black_box(Some(1000.0 - width / 2.0)), Some(1000.0 + width / 2.0))
                            .unwrap();
                        black_box(window);
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark resampling with the decoded arrays cached
fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");
    let resampler = Resampler::default();

    for npnts in [1_000, 10_000, 100_000] {
        let xs = create_test_record(npnts, true);
        let cached = CachedSpectrum::new(&xs);
        let grid: Vec<f64> = (0..1000).map(|i| 800.0 + i as f64 * 0.4).collect();

        group.bench_with_input(BenchmarkId::new("interpolate", npnts), &grid, |b, grid| {
            b.iter(|| {
                let values = resampler.interpolate(&cached, black_box(grid), false).unwrap();
                black_box(values);
            });
        });

        group.bench_with_input(BenchmarkId::new("downsample", npnts), &npnts, |b, _| {
            b.iter(|| {
                let binned = resampler
                    .downsample(&cached, black_box(1.0), None, None, BinningKernel::Triangular)
                    .unwrap();
                black_box(binned);
            });
        });

        group.bench_with_input(BenchmarkId::new("integrate", npnts), &npnts, |b, _| {
            b.iter(|| {
                let area = resampler
                    .integrate(&cached, black_box(900.0), 1100.0)
                    .unwrap();
                black_box(area);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codec, bench_range_query, bench_resample);
criterion_main!(benches);
