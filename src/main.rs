use clap::Parser;
use service_area::config::cli::Command;
use service_area::utils::error::{ErrorSeverity, Result};
use service_area::utils::{logger, validation::Validate};
use service_area::{
    AreaOptions, BatchProcessor, CliConfig, PostalRangeIndex, RegionRegistry, ServiceAreaCodec,
    TomlConfig,
};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config) {
        tracing::error!(
            "❌ service-area failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        std::process::exit(exit_code(e.severity()));
    }
}

/// Exit code per error severity
fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    }
}

fn run(config: CliConfig) -> Result<()> {
    let tables = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };
    tables.validate()?;
    if tables.overrides_table() {
        tracing::info!("🔧 Using {} regions from configuration", tables.regions.len());
    }

    let registry: RegionRegistry = tables.registry();
    let index: PostalRangeIndex = tables.index();
    let codec = ServiceAreaCodec::new(&registry, &index).with_labels(tables.summary.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.command {
        Command::Decode { entries } => {
            let decoded = codec.decode(&entries);
            writeln!(out, "{}", serde_json::to_string_pretty(&decoded)?)?;
        }
        Command::Encode { radius, options } => {
            let stored = codec.encode_raw(&radius, &AreaOptions::from(options));
            writeln!(out, "{}", serde_json::to_string(&stored)?)?;
        }
        Command::Estimate { regions } => {
            writeln!(out, "{}", codec.estimate_code_count(&regions))?;
        }
        Command::Summarize { radius, options } => {
            writeln!(out, "{}", codec.summarize(radius, &AreaOptions::from(options)))?;
        }
        Command::Lookup {
            postal_code,
            region: Some(region),
        } => {
            writeln!(out, "{}", index.is_in_region(&postal_code, &region))?;
        }
        Command::Lookup {
            postal_code,
            region: None,
        } => match index.region_of(&postal_code) {
            Some(code) => writeln!(out, "{}\t{}", code, registry.label_of(code))?,
            None => writeln!(out, "none")?,
        },
        Command::Regions => {
            for region in registry.list_regions() {
                let ranges: Vec<String> = index
                    .ranges_of(&region.code)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                writeln!(out, "{}\t{}\t{}", region.code, region.label, ranges.join(","))?;
            }
        }
        Command::Batch {
            input,
            output,
            id_column,
            areas_column,
        } => {
            tracing::info!("🚀 Classifying {}", input.display());
            let processor = BatchProcessor::new(&codec).with_columns(id_column, areas_column);
            let reader = BufReader::new(File::open(&input)?);
            let report = match output {
                Some(path) => {
                    let report = processor.run(reader, BufWriter::new(File::create(&path)?))?;
                    tracing::info!("📁 Output saved to: {}", path.display());
                    report
                }
                None => processor.run(reader, &mut out)?,
            };
            eprintln!("✅ {}", serde_json::to_string(&report)?);
        }
    }

    Ok(())
}
