use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use terse_core::{optimize, Aggressiveness, Options};

fn bench_optimize_verbose_prompt(c: &mut Criterion) {
    let prompt = "Hello assistant, I hope you're doing well. I'd be very grateful if you \
                  could, at this point in time, review this document in order to confirm \
                  that, due to the fact that the deadline moved, we are still on track!! \
                  Thanks so much for your help. "
        .repeat(8);
    let opts = Options {
        preserve_politeness: false,
        aggressiveness: Aggressiveness::Aggressive,
    };

    c.bench_function("optimize_verbose_prompt", |b| {
        b.iter(|| optimize(black_box(&prompt), &opts))
    });
}

criterion_group!(benches, bench_optimize_verbose_prompt);
criterion_main!(benches);
