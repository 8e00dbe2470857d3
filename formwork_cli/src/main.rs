//! # Formwork CLI Application
//!
//! Terminal front end for the wall formwork calculator. Values come from
//! flags (or `FORMWORK_*` environment variables), or from prompts with
//! `--interactive`.
//!
//! ```bash
//! formwork_cli --height 12 --length 50 --rate 5 --temp 70 --safety-factor 2.5 --tie snap-tie
//! ```

mod args;
mod interactive;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use formwork_core::{calculate_detailed, DesignReport, EngineeringSettings, JobsiteInputs};

use args::Cli;

/// Pour rate range (ft/hr) the calculator is normally used for
const TYPICAL_POUR_RATE: std::ops::RangeInclusive<f64> = 1.0..=15.0;

/// Concrete temperature range (°F) the calculator is normally used for
const TYPICAL_TEMP_F: std::ops::RangeInclusive<f64> = 40.0..=100.0;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let inputs = cli.jobsite_inputs();
    let settings = cli.engineering_settings();

    let outcome = if cli.interactive {
        interactive::run(inputs, settings, cli.json)
    } else {
        run_once(&inputs, &settings, cli.json)
    };

    if let Err(e) = outcome {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG wins over -d
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Inputs that calculate fine but sit outside the usual jobsite range.
fn advisories(inputs: &JobsiteInputs) -> Vec<String> {
    let mut notes = Vec::new();
    if !TYPICAL_POUR_RATE.contains(&inputs.pour_rate_ft_per_hr) {
        notes.push(format!(
            "pour rate {} ft/hr is outside the typical {}-{} ft/hr range",
            inputs.pour_rate_ft_per_hr,
            TYPICAL_POUR_RATE.start(),
            TYPICAL_POUR_RATE.end()
        ));
    }
    if !TYPICAL_TEMP_F.contains(&inputs.concrete_temp_f) {
        notes.push(format!(
            "concrete temperature {} F is outside the typical {}-{} F range",
            inputs.concrete_temp_f,
            TYPICAL_TEMP_F.start(),
            TYPICAL_TEMP_F.end()
        ));
    }
    notes
}

/// Calculate once and print the result.
///
/// On a calculation error the structured error is printed as JSON before
/// the error is returned.
pub(crate) fn run_once(inputs: &JobsiteInputs, settings: &EngineeringSettings, json: bool) -> anyhow::Result<()> {
    for note in advisories(inputs) {
        warn!("{}", note);
    }
    info!(?inputs, ?settings, "calculating");

    let (result, breakdown) = match calculate_detailed(inputs, settings) {
        Ok(ok) => ok,
        Err(e) => {
            if let Ok(err_json) = serde_json::to_string_pretty(&e) {
                eprintln!("Error JSON:");
                eprintln!("{}", err_json);
            }
            return Err(e.into());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let report = DesignReport::from_result(&result, &breakdown);

    println!("═══════════════════════════════════════");
    println!("  ACI 347 WALL FORM DESIGN");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Wall:          {:.1} ft high x {:.1} ft long", inputs.wall_height_ft, inputs.wall_length_ft);
    println!("  Pour rate:     {} ft/hr", inputs.pour_rate_ft_per_hr);
    println!("  Concrete temp: {} F", inputs.concrete_temp_f);
    println!("  Ties:          {}", settings.tie_type.label());
    println!("  Safety factor: {}", settings.safety_factor);
    println!();
    print!("{}", report);
    println!("═══════════════════════════════════════");

    Ok(())
}
