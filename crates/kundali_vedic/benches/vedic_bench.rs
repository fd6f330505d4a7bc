use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_vedic::{
    Varga, bhava_for_longitude, mahadasha_periods, nakshatra_from_longitude, rashi_from_longitude,
    varga_position, vimshottari_snapshot,
};

fn zodiac_bench(c: &mut Criterion) {
    let lon = 123.456;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(lon)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(lon)))
    });
    group.finish();
}

fn bhava_bench(c: &mut Criterion) {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = (270.0 + i as f64 * 30.0) % 360.0;
    }

    c.bench_function("bhava_for_longitude", |b| {
        b.iter(|| bhava_for_longitude(black_box(123.456), &cusps))
    });
}

fn dasha_bench(c: &mut Criterion) {
    let birth_jd = 2_451_545.0;
    let moon = 215.7;

    let mut group = c.benchmark_group("vimshottari");
    group.bench_function("mahadasha_periods", |b| {
        b.iter(|| mahadasha_periods(black_box(birth_jd), black_box(moon)))
    });
    let periods = mahadasha_periods(birth_jd, moon);
    group.bench_function("snapshot", |b| {
        b.iter(|| vimshottari_snapshot(&periods, black_box(birth_jd + 10_000.0)))
    });
    group.finish();
}

fn varga_bench(c: &mut Criterion) {
    c.bench_function("varga_position_d9", |b| {
        b.iter(|| varga_position(Varga::D9, black_box(215.7)))
    });
}

criterion_group!(benches, zodiac_bench, bhava_bench, dasha_bench, varga_bench);
criterion_main!(benches);
