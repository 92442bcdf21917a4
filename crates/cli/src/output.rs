use pinger_sweep_engine::plot::{PositionPlot, SweepPlot};
use pinger_sweep_shared::result::ErrorSeries;
use std::time::Duration;

pub fn print_sweep(plot: &SweepPlot, errors: &ErrorSeries, elapsed: Duration) {
    println!("\n========================================");
    println!("  {}", plot.title);
    println!("  Metric:      {:?}", plot.metric);
    println!("  Projection:  {:?}", plot.projection);
    println!("  Series:      {}", plot.curves.len());
    println!("  Time:        {:.3}ms", elapsed.as_secs_f64() * 1000.0);
    println!("========================================");

    if plot.curves.is_empty() {
        return;
    }

    print!("{:>12}", "param");
    for curve in &plot.curves {
        print!(" {:>12}", curve.label);
    }
    println!();

    let n_points = plot.curves[0].points.len();
    for i in 0..n_points {
        print!("{:>12.4}", plot.curves[0].points[i].0);
        for curve in &plot.curves {
            print!(" {:>12.6}", curve.points[i].1);
        }
        println!();
    }

    println!("\nAvg error (unscaled):");
    for key in errors.keys() {
        match errors.avg_error(key) {
            Some(avg) => println!("  {:<12} {:.6}", key, avg),
            None => println!("  {:<12} -", key),
        }
    }
}

pub fn print_positions(plot: &PositionPlot) {
    println!("\n========================================");
    println!("  {}", plot.title);
    println!("  Hydrophones: {}", plot.hydrophones.len());
    println!("  Estimates:   {}", plot.estimates.len());
    println!("========================================");

    let p = &plot.pinger;
    println!("  Pinger:        r={:.3} phi={:.4} z={:.3}", p.r, p.phi, p.z);
    let g = &plot.initial_guess;
    println!("  Initial guess: r={:.3} phi={:.4} z={:.3}", g.r, g.phi, g.z);
    let ray = &plot.bearing_ray_end;
    println!("  Bearing ray:   phi={:.4} to r={:.1}", ray.phi, ray.r);
    for (i, e) in plot.estimates.iter().enumerate() {
        println!("  Estimate {:<4} r={:.3} phi={:.4} z={:.3}", i, e.r, e.phi, e.z);
    }
}
