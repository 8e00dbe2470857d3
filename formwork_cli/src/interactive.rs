//! Prompt-driven what-if loop.
//!
//! Every prompt shows the current value; a blank answer keeps it. After each
//! run the user can change values and recalculate.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::warn;

use formwork_core::{EngineeringSettings, JobsiteInputs, SafetyFactor, TieType};

use crate::args::{parse_safety_factor, parse_tie_type};

/// Interpret one prompt answer. Blank keeps the current value; anything
/// unparseable is reported and also keeps it.
pub fn parse_answer<T, E: std::fmt::Display>(answer: &str, current: T, parse: impl Fn(&str) -> Result<T, E>) -> T {
    let answer = answer.trim();
    if answer.is_empty() {
        return current;
    }
    match parse(answer) {
        Ok(value) => value,
        Err(e) => {
            warn!("ignoring '{}': {}", answer, e);
            current
        }
    }
}

/// Whether an answer means yes. Anything but y/yes means no.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush().context("flushing prompt")?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).context("reading answer")?;
    Ok(input)
}

fn prompt_f64(prompt: &str, current: f64) -> Result<f64> {
    let answer = read_line(&format!("{} [{}]: ", prompt, current))?;
    Ok(parse_answer(&answer, current, |s| s.parse::<f64>()))
}

fn prompt_settings(current: EngineeringSettings) -> Result<EngineeringSettings> {
    let choices: Vec<String> = SafetyFactor::ALL.iter().map(|sf| sf.to_string()).collect();
    let answer = read_line(&format!(
        "Safety factor ({}) [{}]: ",
        choices.join("/"),
        current.safety_factor
    ))?;
    let safety_factor = parse_answer(&answer, current.safety_factor, parse_safety_factor);

    let labels: Vec<String> = TieType::ALL.iter().map(|t| t.label()).collect();
    let answer = read_line(&format!("Tie type ({}) [{}]: ", labels.join(", "), current.tie_type))?;
    let tie_type = parse_answer(&answer, current.tie_type, parse_tie_type);

    Ok(EngineeringSettings { safety_factor, tie_type })
}

fn prompt_inputs(current: JobsiteInputs) -> Result<JobsiteInputs> {
    Ok(JobsiteInputs {
        wall_height_ft: prompt_f64("Wall height (ft)", current.wall_height_ft)?,
        wall_length_ft: prompt_f64("Wall length (ft)", current.wall_length_ft)?,
        pour_rate_ft_per_hr: prompt_f64("Pour rate (ft/hr)", current.pour_rate_ft_per_hr)?,
        concrete_temp_f: prompt_f64("Concrete temp (F)", current.concrete_temp_f)?,
    })
}

/// Prompt, calculate and print until the user declines another run.
///
/// Calculation errors are printed and the loop continues; only I/O failures
/// end it early.
pub fn run(mut inputs: JobsiteInputs, mut settings: EngineeringSettings, json: bool) -> Result<()> {
    loop {
        println!();
        println!("Jobsite Conditions");
        inputs = prompt_inputs(inputs)?;
        println!();
        println!("Engineering Settings");
        settings = prompt_settings(settings)?;

        if let Err(e) = crate::run_once(&inputs, &settings, json) {
            eprintln!("{}", e);
        }

        println!();
        if !is_yes(&read_line("Recalculate with new values? [y/N]: ")?) {
            return Ok(());
        }
    }
}
