use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use astronomia_rust::context::Context;
use astronomia_rust::transformations::Route;
use astronomia_rust::units::{from_radians, to_radians};
use astronomia_rust::{transform, AngleValue, Angles, ContextParams, System, Unit};

fn bench_scalar_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_transform");
    let params = ContextParams::new()
        .with_latitude_deg(40.0)
        .with_sidereal_time_hours(5.0);

    for (origin, destination) in [
        (System::Equatorial, System::Galactic),
        (System::Horizontal, System::Ecliptic),
        (System::Galactic, System::Horizontal),
    ] {
        let id = format!("{}->{}", origin, destination);
        group.bench_function(BenchmarkId::new("deg", id), |b| {
            let c1 = Angles::from(200.0);
            let c2 = Angles::from(30.0);
            b.iter(|| {
                black_box(transform(
                    black_box(&c1),
                    black_box(&c2),
                    origin,
                    destination,
                    Unit::Degree,
                    Unit::Degree,
                    &params,
                ))
            });
        });
    }

    group.finish();
}

fn bench_batch_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_transform");
    let params = ContextParams::new();

    for size in [10usize, 1_000, 100_000] {
        let lons: Vec<f64> = (0..size).map(|i| (i as f64 * 0.37) % 360.0).collect();
        let lats: Vec<f64> = (0..size).map(|i| (i as f64 * 0.11) % 170.0 - 85.0).collect();
        let c1 = Angles::from(lons);
        let c2 = Angles::from(lats);

        group.bench_with_input(BenchmarkId::new("ecliptic_to_galactic", size), &size, |b, _| {
            b.iter(|| {
                black_box(transform(
                    &c1,
                    &c2,
                    System::Ecliptic,
                    System::Galactic,
                    Unit::Degree,
                    Unit::Degree,
                    &params,
                ))
            });
        });
    }

    group.finish();
}

fn bench_route_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_apply");
    let context = Context::new().with_latitude(0.7).with_sidereal_time(1.3);

    for destination in System::ALL {
        let route = Route::plan(System::Horizontal, destination, &context);
        if let Ok(route) = route {
            group.bench_function(destination.tag(), |b| {
                b.iter(|| black_box(route.apply(black_box(1.2), black_box(0.8))));
            });
        }
    }

    group.finish();
}

fn bench_units(c: &mut Criterion) {
    let mut group = c.benchmark_group("units");

    for unit in Unit::ALL {
        group.bench_function(unit.tag(), |b| {
            b.iter(|| {
                for i in 0..1000 {
                    let value: AngleValue = from_radians(black_box(i as f64 * 0.006), unit);
                    black_box(to_radians(&value, unit).ok());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scalar_transform,
    bench_batch_transform,
    bench_route_apply,
    bench_units
);
criterion_main!(benches);
