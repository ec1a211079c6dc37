// Park Pass Generator - Main Entry Point
//
// Issue a single pass from command line fields:
//
// ```console
// $ park-pass --subtype child --date-of-birth 03/14/2021
// $ park-pass --subtype vendor --sample --seed 7 --output-format text
// ```
//
// Or replay a scripted session:
//
// ```console
// $ park-pass --scenario gate.json --verbose
// ```

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use serde_json::json;
use std::process;
use tracing::{error, info, warn, Level};

use park_pass_generator::entrant::{EntrantValidator, SampleEntrantGenerator};
use park_pass_generator::events::SwipeTarget;
use park_pass_generator::pass::Pass;
use park_pass_generator::session::{AccessSession, LoggingConfig, Scenario, SessionReport};
use park_pass_generator::types::config::CliArgs;
use park_pass_generator::types::{
    Clock, DiscountType, EntrantSubtype, OutputFormat, ParkArea, ParkConfig, SystemClock,
};

/// Exit code when the entrant fails validation
const EXIT_REJECTED: i32 = 2;

fn main() {
    let args = CliArgs::parse();

    if args.print_config {
        match ParkConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let _guard = match logging_config(&args).init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    match run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Logging setup from the command line: WARN by default, `--verbose` INFO,
/// `--debug` DEBUG with span events
fn logging_config(args: &CliArgs) -> LoggingConfig {
    let mut config = if args.debug {
        LoggingConfig::new().with_level(Level::DEBUG).with_span_events()
    } else if args.verbose {
        LoggingConfig::new().with_level(Level::INFO)
    } else {
        LoggingConfig::new()
    };

    if args.log_json {
        config = config.with_json_format();
    }
    if let Some(directory) = &args.log_dir {
        config = config.with_file_logging(directory.as_str());
    }
    if let Some(filter) = &args.log_filter {
        config = config.with_env_filter(filter.as_str());
    }
    if args.no_color {
        config = config.without_ansi();
    }
    config
}

fn run(args: CliArgs) -> Result<i32> {
    let config =
        ParkConfig::from_cli_args(args.clone()).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    let format = config.get_output_format().map_err(|e| anyhow!(e))?;
    info!("Configuration loaded and validated successfully");

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no passes will be issued.");
        print_configuration_summary(&config);
        return Ok(0);
    }

    if let Some(path) = &config.scenario {
        let scenario = Scenario::from_file(path)
            .with_context(|| format!("Failed to load scenario from {}", path))?;
        let report = AccessSession::run(&config, &scenario).context("Session aborted")?;
        print_report(&report, format)?;
        return Ok(0);
    }

    let Some(subtype) = &args.subtype else {
        bail!("Nothing to do: pass --subtype to issue a pass or --scenario to run a session");
    };
    let subtype: EntrantSubtype = subtype.parse().map_err(|e: String| anyhow!(e))?;
    issue_pass(&args, &config, subtype, format)
}

/// Validate the entrant from the command line and print the issued pass
fn issue_pass(
    args: &CliArgs,
    config: &ParkConfig,
    subtype: EntrantSubtype,
    format: OutputFormat,
) -> Result<i32> {
    let raw = if args.sample {
        let mut generator = match config.seed {
            Some(seed) => SampleEntrantGenerator::with_seed(seed),
            None => SampleEntrantGenerator::new(),
        };
        generator.generate(subtype, SystemClock.today())
    } else {
        args.raw_fields()
    };

    let validator = EntrantValidator::new().with_options(config.validator_options());
    let entrant = match validator.validate(subtype, &raw) {
        Ok(entrant) => entrant,
        Err(e) => {
            warn!("Entrant rejected: {}", e);
            match format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "subtype": subtype,
                        "error": e.category(),
                        "message": e.to_string(),
                        "alert_lines": e.alert_lines(),
                    }))?
                ),
                OutputFormat::Text => {
                    eprintln!("{}", e.category());
                    for line in e.alert_lines() {
                        eprintln!("  {}", line);
                    }
                }
            }
            return Ok(EXIT_REJECTED);
        }
    };

    let mut pass = Pass::create(subtype, entrant)?.with_cooldown(config.cooldown());
    let targets = ParkArea::ALL
        .into_iter()
        .map(|area| SwipeTarget::Area { area })
        .chain(std::iter::once(SwipeTarget::BestRide))
        .chain(DiscountType::ALL.into_iter().map(|kind| SwipeTarget::Discount { kind }));
    let checks: Vec<_> = targets.map(|target| (target, target.swipe(&mut pass))).collect();

    match format {
        OutputFormat::Json => {
            let swipes: Vec<_> = checks
                .iter()
                .map(|(target, result)| {
                    json!({
                        "target": target,
                        "success": result.success,
                        "message": result.message,
                    })
                })
                .collect();
            let output = json!({
                "pass": pass.summary(),
                "entrant": pass.entrant(),
                "swipes": swipes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!("{}", pass.summary());
            println!();
            for (target, result) in &checks {
                let mark = if result.success { "+" } else { "-" };
                println!("{} {}: {}", mark, target, result.message);
            }
        }
    }

    Ok(0)
}

/// Print a finished session
fn print_report(report: &SessionReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            if let Some(name) = &report.scenario {
                println!("{}", name);
                println!("{}", "=".repeat(name.len()));
            }
            for rejection in &report.rejections {
                println!(
                    "REJECTED {} [{}]: {}",
                    rejection.entrant, rejection.subtype, rejection.message
                );
            }
            for event in &report.events {
                println!("{}", event);
            }
            println!();
            println!("{}", report.statistics);
        }
    }
    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &ParkConfig) {
    eprintln!("Configuration:");
    eprintln!("  Ride Cooldown: {} seconds", config.cooldown_seconds);
    eprintln!("  Strict Format Checks: {}", config.strict_format);
    eprintln!("  Enforce Allow-Lists: {}", config.enforce_allow_lists);
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    if let Some(scenario) = &config.scenario {
        eprintln!("  Scenario: {}", scenario);
    }
    eprintln!();
}
