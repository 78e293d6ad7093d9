use criterion::{Criterion, criterion_group, criterion_main};
use site_motion::animation::{AnimationScheduler, CounterAnimation, CounterPreset};
use site_motion::charts::{ChartStyle, site_charts};
use site_motion::core::{ElementId, Easing};
use site_motion::visibility::{IntersectionSample, VisibilityWatcher};
use std::hint::black_box;

fn bench_easing_sweep(c: &mut Criterion) {
    c.bench_function("ease_out_cubic_sweep_1k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1_000 {
                acc += Easing::EaseOutCubic.apply(black_box(f64::from(i) / 1_000.0));
            }
            acc
        })
    });
}

fn bench_scheduler_full_run(c: &mut Criterion) {
    c.bench_function("scheduler_64_counters_2s_at_60fps", |b| {
        b.iter(|| {
            let mut scheduler = AnimationScheduler::new();
            for i in 0..64 {
                let preset = if i % 2 == 0 {
                    CounterPreset::Kpi
                } else {
                    CounterPreset::Count
                };
                let counter = CounterAnimation::new(preset.spec(f64::from(i) * 10.5, 2_000.0))
                    .expect("valid counter");
                scheduler.start(ElementId::indexed("kpi-number", i as usize), counter, 0.0);
            }
            let mut now = 0.0;
            let mut frames = 0usize;
            while !scheduler.is_idle() {
                frames += scheduler.tick(black_box(now)).len();
                now += 16.0;
            }
            frames
        })
    });
}

fn bench_watcher_observe(c: &mut Criterion) {
    let samples: Vec<IntersectionSample> = (0..200)
        .map(|i| IntersectionSample::new(ElementId::indexed("reveal", i), i % 3 == 0, 0.5))
        .collect();

    c.bench_function("visibility_watcher_200_samples", |b| {
        b.iter(|| {
            let mut watcher = VisibilityWatcher::new(0.12).expect("valid threshold");
            for i in 0..200 {
                watcher.register(ElementId::indexed("reveal", i));
            }
            watcher.observe(black_box(&samples)).len()
        })
    });
}

fn bench_chart_config_build(c: &mut Criterion) {
    let style = ChartStyle::default();
    let definitions = site_charts();

    c.bench_function("site_chart_configs_to_json", |b| {
        b.iter(|| {
            for definition in &definitions {
                let config = definition
                    .kind
                    .build_config(black_box(definition), &style)
                    .expect("valid config");
                let _ = config.to_json_value().expect("serializable");
            }
        })
    });
}

criterion_group!(
    benches,
    bench_easing_sweep,
    bench_scheduler_full_run,
    bench_watcher_observe,
    bench_chart_config_build
);
criterion_main!(benches);
