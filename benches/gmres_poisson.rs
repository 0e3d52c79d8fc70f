use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gmres_core::matrix::poisson::poisson2d;
use gmres_core::solver::{GmresSolver, LinearSolver};

fn bench_gmres_poisson(c: &mut Criterion) {
    let n_grid = 8;
    let (a, b) = poisson2d(n_grid);
    let n = b.len();

    c.bench_function("gmres unrestarted", |ben| {
        ben.iter(|| {
            let mut x = vec![0.0; n];
            let mut solver = GmresSolver::new(1e-8, n);
            let _stats = solver
                .solve(black_box(&a), None, black_box(&b), black_box(&mut x))
                .unwrap();
        })
    });

    c.bench_function("gmres restart 10", |ben| {
        ben.iter(|| {
            let mut x = vec![0.0; n];
            let mut solver = GmresSolver::new(1e-8, n).with_restart(10);
            let _stats = solver
                .solve(black_box(&a), None, black_box(&b), black_box(&mut x))
                .unwrap();
        })
    });
}

criterion_group!(benches, bench_gmres_poisson);
criterion_main!(benches);
