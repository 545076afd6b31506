use criterion::{criterion_group, criterion_main, Criterion};

// ---------------------------------------------------------------------------
// Helpers: representative argument sweeps per function family
// ---------------------------------------------------------------------------

const ERF_ARGS: [f64; 6] = [1e-12, 0.3, 1.0, 4.0, 20.0, 90.0];
const GAMMA_ARGS: [f64; 6] = [0.5, 2.5, 5.0, 12.3, 34.7, 140.2];
const EI_ARGS: [f64; 6] = [-20.0, -1.0, 2.0, 6.5, 25.0, 80.0];
const W_ARGS: [f64; 6] = [-0.35, -0.1, 0.5, 2.0, 100.0, 1e6];

// ---------------------------------------------------------------------------
// erf / erfc
// ---------------------------------------------------------------------------

fn erf_family(c: &mut Criterion) {
    let mut g = c.benchmark_group("erf");

    g.bench_function("specfun", |b| {
        b.iter(|| {
            for &x in &ERF_ARGS {
                std::hint::black_box(specfun::erf(std::hint::black_box(x)));
            }
        })
    });

    g.bench_function("libm", |b| {
        b.iter(|| {
            for &x in &ERF_ARGS {
                std::hint::black_box(libm::erf(std::hint::black_box(x)));
            }
        })
    });

    g.finish();

    let mut g = c.benchmark_group("erfc");

    g.bench_function("specfun", |b| {
        b.iter(|| {
            for &x in &ERF_ARGS {
                std::hint::black_box(specfun::erfc(std::hint::black_box(x)));
            }
        })
    });

    g.bench_function("libm", |b| {
        b.iter(|| {
            for &x in &ERF_ARGS {
                std::hint::black_box(libm::erfc(std::hint::black_box(x)));
            }
        })
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// gamma / lgamma
// ---------------------------------------------------------------------------

fn gamma_family(c: &mut Criterion) {
    let mut g = c.benchmark_group("gamma");

    g.bench_function("specfun", |b| {
        b.iter(|| {
            for &x in &GAMMA_ARGS {
                std::hint::black_box(specfun::gamma(std::hint::black_box(x)));
            }
        })
    });

    g.bench_function("libm", |b| {
        b.iter(|| {
            for &x in &GAMMA_ARGS {
                std::hint::black_box(libm::tgamma(std::hint::black_box(x)));
            }
        })
    });

    g.finish();

    let mut g = c.benchmark_group("lgamma");

    g.bench_function("specfun", |b| {
        b.iter(|| {
            for &x in &GAMMA_ARGS {
                std::hint::black_box(specfun::lgamma(std::hint::black_box(x)));
            }
        })
    });

    g.bench_function("libm", |b| {
        b.iter(|| {
            for &x in &GAMMA_ARGS {
                std::hint::black_box(libm::lgamma(std::hint::black_box(x)));
            }
        })
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Kernels without a libm counterpart
// ---------------------------------------------------------------------------

fn iterative_kernels(c: &mut Criterion) {
    let mut g = c.benchmark_group("iterative");

    g.bench_function("ei", |b| {
        b.iter(|| {
            for &x in &EI_ARGS {
                std::hint::black_box(specfun::ei(std::hint::black_box(x)));
            }
        })
    });

    g.bench_function("gamma_p", |b| {
        b.iter(|| {
            for &(s, x) in &[(0.5, 2.0), (3.0, 1.0), (5.5, 20.0), (9.0, 30.0)] {
                std::hint::black_box(specfun::gamma_p(
                    std::hint::black_box(s),
                    std::hint::black_box(x),
                ));
            }
        })
    });

    g.bench_function("lambert_w0", |b| {
        b.iter(|| {
            for &x in &W_ARGS {
                std::hint::black_box(specfun::lambert_w0(std::hint::black_box(x)));
            }
        })
    });

    g.bench_function("erf_inv", |b| {
        b.iter(|| {
            for &x in &[-0.999, -0.6, 0.1, 0.8, 0.9999] {
                std::hint::black_box(specfun::erf_inv(std::hint::black_box(x)));
            }
        })
    });

    g.finish();
}

criterion_group!(benches, erf_family, gamma_family, iterative_kernels);
criterion_main!(benches);
