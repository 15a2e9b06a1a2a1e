use casekit::{convert, convert_all, Case};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SAMPLES: [&str; 5] = [
    "first name",
    "SCREEN_NAME",
    "mobileNumber",
    "  multiple   spaces_and_underscores  ",
    "XMLHttpRequest handler-for_some value",
];

fn bench_single(c: &mut Criterion) {
    for case in Case::ALL {
        c.bench_function(&format!("convert {case}"), |b| {
            b.iter(|| {
                for sample in SAMPLES {
                    black_box(convert(case, black_box(sample)));
                }
            })
        });
    }
}

fn bench_batch(c: &mut Criterion) {
    let inputs: Vec<String> = (0..10_000)
        .map(|i| format!("{} {i}", SAMPLES[i % SAMPLES.len()]))
        .collect();

    c.bench_function("convert_all camel 10k", |b| {
        b.iter(|| black_box(convert_all(Case::Camel, black_box(inputs.as_slice()))))
    });
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
