use crate::domain::model::{AreaOptions, RadiusMode};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "service-area")]
#[command(about = "Classify and rebuild craftsperson service areas")]
pub struct CliConfig {
    /// TOML file overriding the region table or summary labels
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Decode a stored area list into a configuration (JSON)
    Decode {
        /// Stored entries, e.g. ZH BE 8000
        entries: Vec<String>,
    },
    /// Encode a radius mode and options into a stored area list (JSON)
    Encode {
        /// city | canton | nationwide | custom
        #[arg(long)]
        radius: String,
        #[command(flatten)]
        options: OptionArgs,
    },
    /// Upper-bound count of postal codes covered by the given regions
    Estimate { regions: Vec<String> },
    /// Human-readable summary of a radius mode and options
    Summarize {
        #[arg(long)]
        radius: RadiusMode,
        #[command(flatten)]
        options: OptionArgs,
    },
    /// Region owning a postal code
    Lookup {
        postal_code: String,
        /// Only test membership in this region
        #[arg(long)]
        region: Option<String>,
    },
    /// List all regions with their postal ranges
    Regions,
    /// Classify a CSV export of stored area lists
    Batch {
        #[arg(short, long)]
        input: PathBuf,
        /// Output CSV path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long, default_value = "id")]
        id_column: String,
        #[arg(long, default_value = "service_areas")]
        areas_column: String,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct OptionArgs {
    #[arg(long)]
    pub plz: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub canton: Option<String>,
    #[arg(long, value_delimiter = ',')]
    pub custom_cantons: Vec<String>,
}

impl From<OptionArgs> for AreaOptions {
    fn from(args: OptionArgs) -> Self {
        AreaOptions {
            plz: args.plz,
            city: args.city,
            canton: args.canton,
            custom_cantons: args.custom_cantons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encode_command() {
        let config = CliConfig::parse_from([
            "service-area",
            "encode",
            "--radius",
            "custom",
            "--custom-cantons",
            "ZH,BE",
        ]);
        match config.command {
            Command::Encode { radius, options } => {
                assert_eq!(radius, "custom");
                assert_eq!(options.custom_cantons, vec!["ZH", "BE"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_summarize_rejects_unknown_radius() {
        let result =
            CliConfig::try_parse_from(["service-area", "summarize", "--radius", "region"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let config =
            CliConfig::parse_from(["service-area", "decode", "ZH", "BE", "--verbose"]);
        assert!(config.verbose);
        assert!(matches!(config.command, Command::Decode { ref entries } if entries.len() == 2));
    }
}
