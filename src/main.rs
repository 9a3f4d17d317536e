//! parsaxpy CLI entry point

use anyhow::{Context, Result};
use parsaxpy::config::{cli::Cli, cli_convert, validator, Config};
use parsaxpy::coordinator::Coordinator;
use parsaxpy::input::InputGenerator;
use parsaxpy::output::{json, text};
use parsaxpy::util::time::Timestamp;
use parsaxpy::util::verification;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let config = cli_convert::load_config(&cli)?;
    init_logging(config.runtime.debug);

    validator::validate_config(&config).context("Configuration validation failed")?;

    text::print_configuration(&config);

    if config.runtime.dry_run {
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    run(&config)
}

/// Initialise `env_logger`; `RUST_LOG` wins over `--debug`
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();
}

/// Generate inputs, run the parallel SAXPY and report
fn run(config: &Config) -> Result<()> {
    let run = &config.run;

    log::info!("Generating {} elements with seed {}", run.vector_size, run.seed);
    let inputs = InputGenerator::with_seed(run.seed)
        .generate(run.vector_size)
        .context("Failed to generate input vectors")?;
    let x = inputs.x;
    let mut y = inputs.y;
    let a = inputs.a;

    if config.output.show_vectors {
        text::print_vector("vector X", &x);
        text::print_vector("vector Y", &y);
        println!("a= {:.6}", a);
    }

    let y_initial = if config.runtime.verify {
        Some(y.clone())
    } else {
        None
    };

    let coordinator = Coordinator::new(run.workers, run.max_iters)?;

    log::info!("Running {} iterations on {} workers", run.max_iters, run.workers);
    let start = Timestamp::now();
    let outcome = coordinator.run(&x, &mut y, a).context("Parallel SAXPY failed")?;
    let elapsed = start.elapsed();

    if config.output.show_vectors {
        text::print_vector("RES: final vector Y", &y);
    }

    text::print_results(run, &y, outcome.y_avgs(), elapsed);

    let verification = match y_initial {
        Some(ref y0) => {
            log::info!("Verifying against sequential reference");
            let report = verification::verify_run(&x, y0, a, run.max_iters, &y, outcome.y_avgs())
                .context("Sequential verification failed")?;
            text::print_verification(&report);
            Some(report)
        }
        None => None,
    };

    if let Some(ref path) = config.output.json_output {
        let report = json::RunReport::new(
            run,
            a,
            elapsed,
            outcome.partitions(),
            &y,
            outcome.y_avgs(),
            verification.clone(),
        );
        json::write_json_report(path, &report)?;
        log::info!("JSON report written to {}", path.display());
    }

    if let Some(report) = verification {
        if !report.passed() {
            anyhow::bail!(
                "Verification failed: {} Y mismatches, max average relative error {:e}",
                report.y_mismatches,
                report.max_avg_relative_error
            );
        }
    }

    Ok(())
}
