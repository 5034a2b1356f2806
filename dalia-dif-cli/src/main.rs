use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dalia_dif::{DifConfig, DifGraph, Diagnostics, OutputFormat, Processor, CONFIG_TEMPLATE};
use std::{fs, fs::File, io::BufWriter, path::PathBuf};
use tracing::{info, warn, Level};

/// DALIA DIF Converter
/// Converts DIF v1.3 curation CSV files to RDF
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output for detailed processing information
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a DIF CSV file to RDF
    Convert {
        /// Path to the config file describing the conversion
        #[arg(
            short,
            long,
            value_name = "PATH TO CONFIG",
            conflicts_with = "input",
            required_unless_present = "input"
        )]
        config: Option<PathBuf>,

        /// DIF CSV file to convert without a config file
        #[arg(short, long, value_name = "PATH TO CSV")]
        input: Option<PathBuf>,

        /// Output file for the generated RDF
        #[arg(short, long, value_name = "OUTPUT PATH")]
        output: Option<PathBuf>,

        /// Output format (turtle/ntriples/rdfxml)
        #[arg(short, long)]
        format: Option<String>,

        /// Community registry CSV replacing the bundled one
        #[arg(long, value_name = "PATH TO CSV")]
        communities: Option<PathBuf>,

        /// Log rows that fail to convert and continue with the next row
        #[arg(short, long)]
        keep_going: bool,

        /// Add the N4C_ID column to each resource's links
        #[arg(long)]
        n4c_links: bool,
    },
    /// Generate a config template
    GenerateConfig {
        /// Output path for the generated config
        #[arg(
            short,
            long,
            default_value = "dalia-dif.jsonc",
            value_name = "OUTPUT PATH"
        )]
        output: PathBuf,
    },
    /// Validate a config file and the files it references
    Validate {
        /// Path to the config file to validate
        #[arg(
            short,
            long,
            default_value = "dalia-dif.jsonc",
            value_name = "PATH TO CONFIG"
        )]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with appropriate level
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    info!("DALIA DIF converter starting up...");

    match cli.command {
        Commands::GenerateConfig { output } => generate_config_command(&output),
        Commands::Validate { config } => validate_command(&config),
        Commands::Convert {
            config,
            input,
            output,
            format,
            communities,
            keep_going,
            n4c_links,
        } => {
            let mut config = match (config, input) {
                (Some(config_path), _) => load_config(&config_path)?,
                (None, Some(input)) => DifConfig::for_input(input),
                (None, None) => anyhow::bail!("Either --config or --input is required"),
            };
            if let Some(output) = output {
                config.output = Some(output);
            }
            if let Some(format) = format {
                config.format = format.parse::<OutputFormat>()?;
            }
            if let Some(communities) = communities {
                config.communities = Some(communities);
            }
            config.keep_going |= keep_going;
            config.n4c_links |= n4c_links;
            convert_command(&config)
        }
    }
}

fn load_config(config_path: &PathBuf) -> Result<DifConfig> {
    // Verify config file exists
    if !config_path.exists() {
        anyhow::bail!(
            "Config file not found: {}. Try using --config <PATH TO CONFIG>",
            config_path.display()
        );
    }

    DifConfig::from_file(config_path)
        .context("Failed to parse config. See errors for additional details:")
}

fn convert_command(config: &DifConfig) -> Result<()> {
    if config.keep_going {
        info!("Failing rows will be skipped");
    }

    config.validate().context("Failed to validate config")?;

    info!("Initializing processor...");
    let processor = Processor::builder()
        .lookup_paths(config.lookup_paths())
        .keep_going(config.keep_going)
        .n4c_links(config.n4c_links)
        .build()
        .context("Failed to load lookup tables")?;

    let mut graph = DifGraph::new();
    let mut diagnostics = Diagnostics::new(config.source_name());

    info!("Converting {}", config.input.display());
    let summary = processor
        .process_file(&config.input, &mut graph, &mut diagnostics)
        .context("Failed to convert DIF file")?;
    diagnostics.log_summary();

    let output_path = config.output_path();
    let file = File::create(&output_path)
        .context(format!("Failed to create output file: {}", output_path.display()))?;
    graph
        .write(BufWriter::new(file), config.format)
        .context(format!("Failed to write RDF to: {}", output_path.display()))?;

    info!(
        "Wrote {} triples for {} learning resources to {}",
        graph.len(),
        summary.resources,
        output_path.display()
    );
    if summary.failed_rows > 0 {
        warn!("{} row(s) could not be converted", summary.failed_rows);
    }
    Ok(())
}

fn generate_config_command(output: &PathBuf) -> Result<()> {
    info!("Generating config template...");

    // if output is a directory, append the default file name
    let full_file_output_path = if output.is_dir() {
        output.join("dalia-dif.jsonc")
    } else {
        output.into()
    };

    fs::write(&full_file_output_path, CONFIG_TEMPLATE)
        .context(format!("Failed to write config to: {}", output.display()))?;

    info!(
        "Successfully generated config template at: {}",
        full_file_output_path.display()
    );
    Ok(())
}

fn validate_command(config_path: &PathBuf) -> Result<()> {
    info!("Validating config...");

    let config = load_config(config_path)?;
    config.validate().context("Failed to validate config")?;

    info!("Config validation successful");
    info!("Input: {}", config.input.display());
    info!("Output: {}", config.output_path().display());
    Ok(())
}
