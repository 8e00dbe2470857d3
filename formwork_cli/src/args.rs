//! CLI argument definitions using clap

use clap::{ArgAction, Parser};

use formwork_core::{EngineeringSettings, JobsiteInputs, SafetyFactor, TieType};

/// ACI 347 wall formwork pressure, tie spacing and material takeoff
#[derive(Parser, Debug)]
#[command(name = "formwork_cli")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Wall height (ft)
    #[arg(long, default_value_t = 12.0, env = "FORMWORK_HEIGHT_FT", allow_negative_numbers = true)]
    pub height: f64,

    /// Wall length (ft)
    #[arg(long, default_value_t = 50.0, env = "FORMWORK_LENGTH_FT", allow_negative_numbers = true)]
    pub length: f64,

    /// Pour rate (ft/hr)
    #[arg(long, default_value_t = 5.0, env = "FORMWORK_POUR_RATE", allow_negative_numbers = true)]
    pub rate: f64,

    /// Concrete temperature (°F)
    #[arg(long, default_value_t = 70.0, env = "FORMWORK_TEMP_F", allow_negative_numbers = true)]
    pub temp: f64,

    /// Safety factor on tie capacity: 2.0, 2.5, 3.0 or 4.0
    #[arg(long, default_value = "2.0", value_parser = parse_safety_factor, env = "FORMWORK_SAFETY_FACTOR")]
    pub safety_factor: SafetyFactor,

    /// Tie hardware: snap-tie, she-bolt or taper-tie
    #[arg(long, default_value = "snap-tie", value_parser = parse_tie_type, env = "FORMWORK_TIE")]
    pub tie: TieType,

    /// Print the result as JSON only
    #[arg(long)]
    pub json: bool,

    /// Prompt for each value and recalculate until done
    #[arg(short, long)]
    pub interactive: bool,

    /// Debug level: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}

impl Cli {
    pub fn jobsite_inputs(&self) -> JobsiteInputs {
        JobsiteInputs {
            wall_height_ft: self.height,
            wall_length_ft: self.length,
            pour_rate_ft_per_hr: self.rate,
            concrete_temp_f: self.temp,
        }
    }

    pub fn engineering_settings(&self) -> EngineeringSettings {
        EngineeringSettings {
            safety_factor: self.safety_factor,
            tie_type: self.tie,
        }
    }
}

pub fn parse_safety_factor(s: &str) -> Result<SafetyFactor, String> {
    let value: f64 = s.trim().parse().map_err(|_| format!("'{}' is not a number", s))?;
    SafetyFactor::try_from(value).map_err(|e| e.to_string())
}

pub fn parse_tie_type(s: &str) -> Result<TieType, String> {
    TieType::from_str_flexible(s).map_err(|e| e.to_string())
}

/// Parse only the given arguments, ignoring any `FORMWORK_*` variables set
/// in the calling shell.
#[cfg(test)]
pub(crate) fn parse_without_env<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    use clap::{CommandFactory, FromArgMatches};

    let matches = Cli::command().mut_args(|arg| arg.env(None::<&'static str>)).try_get_matches_from(args)?;
    Cli::from_arg_matches(&matches)
}
