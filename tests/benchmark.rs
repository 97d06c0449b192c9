use swarmopt::benchmark::{lookup, run_benchmark, run_suite, BenchmarkOptions};

#[test]
fn sphere_benchmark_with_default_settings() {
    let options = BenchmarkOptions {
        seed: Some(42),
        ..BenchmarkOptions::default()
    };
    let report = run_benchmark(lookup("sphere").unwrap(), &options).unwrap();

    assert_eq!(report.runs.len(), 10);
    assert_eq!(report.dimensions, 10);
    assert!(report.summary.mean < 1.0, "mean best score {}", report.summary.mean);
    for run in &report.runs {
        assert_eq!(run.history.len(), 200);
        assert!(run.best_position.iter().all(|x| (-100.0..=100.0).contains(x)));
        assert_eq!(run.error, run.best_score);
    }

    let history = report.mean_history();
    assert!(history.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn report_serializes_to_json() {
    let options = BenchmarkOptions {
        runs: 2,
        dimensions: 2,
        max_iter: 20,
        seed: Some(8),
        ..BenchmarkOptions::default()
    };
    let reports = run_suite(&["griewank", "schwefel"], &options).unwrap();
    let json = serde_json::to_value(&reports).unwrap();

    assert_eq!(json[0]["function"], "griewank");
    assert_eq!(json[1]["bounds"][0], -500.0);
    assert_eq!(json[1]["runs"].as_array().map(Vec::len), Some(2));
    assert!(json[0]["summary"]["std"].is_number());
}

#[test]
fn parallel_benchmark_matches_sequential() {
    let options = BenchmarkOptions {
        runs: 2,
        dimensions: 4,
        max_iter: 30,
        seed: Some(77),
        ..BenchmarkOptions::default()
    };
    let ackley = lookup("ackley").unwrap();
    let sequential = run_benchmark(ackley, &options).unwrap();
    let parallel = run_benchmark(
        ackley,
        &BenchmarkOptions {
            parallel: true,
            ..options
        },
    )
    .unwrap();
    assert_eq!(sequential, parallel);
}
