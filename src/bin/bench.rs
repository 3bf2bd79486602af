/// Benchmark electrokinetics' Butler-Volmer sweep: 1000 runs of 1000 points.
use electrokinetics::butler_volmer::params::Parameters;
use electrokinetics::butler_volmer::run;
use electrokinetics::sweep::OverpotentialSweep;
use std::time::Instant;

fn main() {
    // Full overpotential window at plotting sample density
    let sweep = OverpotentialSweep::linspace(-1.0, 1.0, 1000).unwrap();
    let params = Parameters::new(1.0, 0.5, 0.5, 1, 300.0, Some(1.0)).unwrap();

    // Warmup
    let _ = run::run(&params, sweep.values());

    // Benchmark
    let n_iters = 1000;
    let start = Instant::now();
    for _ in 0..n_iters {
        let _ = run::run(&params, sweep.values());
    }
    let elapsed = start.elapsed();

    let total_points = sweep.len() * n_iters;
    let secs = elapsed.as_secs_f64();
    println!(
        "Rust:           {} runs x {} points = {} evaluations",
        n_iters,
        sweep.len(),
        total_points
    );
    println!("  Total time:  {:.3}s", secs);
    println!("  Per run:     {:.3}ms", secs / n_iters as f64 * 1000.0);
    println!(
        "  Throughput:  {:.0} points/sec",
        total_points as f64 / secs
    );
}
