use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dashboard_core::{Average, Dashboard, Rank, Record, Sex};

fn gen_records(n: usize) -> Vec<Record> {
    let sexes = [Sex::Female, Sex::Male];
    let ranks = [Rank::Prof, Rank::AsstProf, Rank::AssocProf];
    let disciplines = ["A", "B"];
    (0..n)
        .map(|i| Record {
            salary: 60_000 + ((i * 977) % 90_000) as u32,
            sex: sexes[i % 2],
            rank: ranks[i % 3],
            discipline: disciplines[(i / 3) % 2].to_owned(),
            yrs_service: (i % 40) as u32,
            yrs_since_phd: (i % 45) as u32,
        })
        .collect()
}

fn bench_average_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("average_stream");
    for &n in &[10_000usize, 100_000usize] {
        let values: Vec<f64> = (0..n).map(|i| 60_000.0 + (i * 977 % 90_000) as f64).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, vals| {
            b.iter(|| {
                let mut avg = Average::default();
                for &v in vals {
                    avg = avg.add(v);
                }
                for &v in vals {
                    avg = avg.remove(v);
                }
                black_box(avg)
            });
        });
    }
    group.finish();
}

fn bench_filter_retarget(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_retarget");
    for &n in &[10_000usize, 50_000usize] {
        let records = gen_records(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &records, |b, recs| {
            b.iter_batched(
                || Dashboard::new(recs.clone()),
                |mut dash| {
                    dash.set_discipline(Some("A"));
                    dash.set_discipline(Some("B"));
                    dash.set_discipline(None);
                    black_box(dash.average_salary())
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_average_stream, bench_filter_retarget);
criterion_main!(benches);
