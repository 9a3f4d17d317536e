//! End-to-end runs through the library: config → inputs → parallel run → checks

use parsaxpy::config::{cli::Cli, cli_convert, validator};
use parsaxpy::coordinator::Coordinator;
use parsaxpy::input::InputGenerator;
use parsaxpy::output::json::{write_json_report, RunReport};
use parsaxpy::util::verification::verify_run;
use parsaxpy::SaxpyError;
use clap::Parser;
use std::time::Duration;

#[test]
fn test_generated_run_verifies() {
    let cli = Cli::try_parse_from(["parsaxpy", "-p", "10007", "-n", "6", "-i", "40", "-s", "3"]).unwrap();
    let config = cli_convert::build_config_from_cli(&cli).unwrap();
    validator::validate_config(&config).unwrap();

    let inputs = InputGenerator::with_seed(config.run.seed)
        .generate(config.run.vector_size)
        .unwrap();
    let y0 = inputs.y.clone();
    let mut y = inputs.y;

    let outcome = Coordinator::new(config.run.workers, config.run.max_iters)
        .unwrap()
        .run(&inputs.x, &mut y, inputs.a)
        .unwrap();

    assert_eq!(outcome.y_avgs().len(), 40);
    assert_eq!(outcome.partitions()[5].end(), 10007);

    let report = verify_run(&inputs.x, &y0, inputs.a, 40, &y, outcome.y_avgs()).unwrap();
    assert!(report.passed(), "{:?}", report);

    // Averages grow monotonically since a, X >= 0
    for pair in outcome.y_avgs().windows(2) {
        assert!(pair[1] >= pair[0]);
    }
}

#[test]
fn test_same_seed_reproducible_across_runs() {
    let run = |workers: usize| {
        let inputs = InputGenerator::with_seed(11).generate(5000).unwrap();
        let mut y = inputs.y;
        let avgs = parsaxpy::saxpy_parallel(&inputs.x, &mut y, inputs.a, 25, workers).unwrap();
        (y, avgs)
    };

    let (y_a, avgs_a) = run(4);
    let (y_b, avgs_b) = run(4);
    assert_eq!(y_a, y_b);
    assert_eq!(avgs_a, avgs_b);
}

#[test]
fn test_invalid_configuration_rejected_before_running() {
    let cli = Cli::try_parse_from(["parsaxpy", "-n", "0"]).unwrap();
    let config = cli_convert::build_config_from_cli(&cli).unwrap();
    assert!(validator::validate_config(&config).is_err());

    let cli = Cli::try_parse_from(["parsaxpy", "-n", "-2"]).unwrap();
    assert!(cli_convert::build_config_from_cli(&cli).is_err());

    let err = Coordinator::new(0, 10).unwrap_err();
    assert!(matches!(err, SaxpyError::InvalidConfig { .. }));
}

#[test]
fn test_report_written_for_run() {
    let inputs = InputGenerator::with_seed(1).generate(16).unwrap();
    let mut y = inputs.y;
    let outcome = Coordinator::new(3, 4).unwrap().run(&inputs.x, &mut y, inputs.a).unwrap();

    let cli = Cli::try_parse_from(["parsaxpy", "-p", "16", "-n", "3", "-i", "4"]).unwrap();
    let config = cli_convert::build_config_from_cli(&cli).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");
    let report = RunReport::new(
        &config.run,
        inputs.a,
        Duration::from_millis(1),
        outcome.partitions(),
        &y,
        outcome.y_avgs(),
        None,
    );
    write_json_report(&path, &report).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["y_avgs"].as_array().unwrap().len(), 4);
    assert_eq!(value["partitions"].as_array().unwrap().len(), 3);
}
