use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quine::license::store::builtin;
use quine::license::{resolve, substitute, License, Variant};

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_short_id", |b| {
        b.iter(|| resolve(black_box("mpl2")).unwrap())
    });

    c.bench_function("resolve_full_name", |b| {
        b.iter(|| resolve(black_box("gnu lesser general public license v3.0 only")).unwrap())
    });

    c.bench_function("resolve_unsupported", |b| {
        b.iter(|| resolve(black_box("Gen Public License")).unwrap_err())
    });
}

fn bench_substitute(c: &mut Criterion) {
    let mit = builtin(License::Mit, Variant::Full).unwrap();
    let gpl_header = builtin(License::Gpl30, Variant::Header).unwrap();

    c.bench_function("substitute_mit", |b| {
        b.iter(|| {
            substitute(
                License::Mit,
                Variant::Full,
                black_box(mit),
                black_box("Trillian"),
                black_box("1999"),
            )
        })
    });

    c.bench_function("substitute_gpl_header", |b| {
        b.iter(|| {
            substitute(
                License::Gpl30,
                Variant::Header,
                black_box(gpl_header),
                black_box("Trillian"),
                black_box("1999"),
            )
        })
    });
}

criterion_group!(benches, bench_resolve, bench_substitute);
criterion_main!(benches);
