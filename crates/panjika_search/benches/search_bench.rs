use chrono_tz::Asia::Kolkata;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panjika_core::{AnalyticEngine, GeoLocation};
use panjika_search::{
    AlmanacSettings, Observer, PanjikaContext, daily_panchang, monthly_festivals,
    tithi_events_for_day,
};
use panjika_time::{Instant, LocalDay, UtcTime};
use panjika_vedic_base::TabularHijri;

fn observer() -> Observer {
    Observer::new("Agartala, Tripura", GeoLocation::new(23.8315, 91.2868, 12.0), Kolkata)
}

fn tithi_bench(c: &mut Criterion) {
    let engine = AnalyticEngine::new();
    let day = LocalDay::from_ymd(2024, 4, 8, Kolkata).expect("valid date");

    let mut group = c.benchmark_group("search_tithi");
    group.sample_size(20);
    group.bench_function("tithi_events_for_day", |b| {
        b.iter(|| tithi_events_for_day(black_box(&engine), black_box(day)).expect("search should succeed"))
    });
    group.finish();
}

fn daily_bench(c: &mut Criterion) {
    let engine = AnalyticEngine::new();
    let obs = observer();
    let settings = AlmanacSettings::default();
    let hijri = TabularHijri::default();
    let ctx = PanjikaContext::new(&engine, &obs, &settings, &hijri);
    let at = Instant::from_utc(UtcTime::new(2024, 4, 24, 6, 0, 0.0));

    let mut group = c.benchmark_group("search_daily");
    group.sample_size(10);
    group.bench_function("daily_panchang", |b| {
        b.iter(|| daily_panchang(black_box(&ctx), black_box(at)).expect("should succeed"))
    });
    group.finish();
}

fn monthly_bench(c: &mut Criterion) {
    let engine = AnalyticEngine::new();
    let obs = observer();
    let settings = AlmanacSettings::default();
    let hijri = TabularHijri::default();
    let ctx = PanjikaContext::new(&engine, &obs, &settings, &hijri);

    let mut group = c.benchmark_group("search_monthly");
    group.sample_size(10);
    group.bench_function("monthly_festivals", |b| {
        b.iter(|| monthly_festivals(black_box(&ctx), 2024, 10).expect("should succeed"))
    });
    group.finish();
}

criterion_group!(benches, tithi_bench, daily_bench, monthly_bench);
criterion_main!(benches);
