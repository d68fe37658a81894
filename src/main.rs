use clap::Parser;
use placemap::config::toml_config::TomlConfig;
use placemap::domain::ports::{LayerSink, RecordSource};
use placemap::utils::{logger, validation::Validate};
use placemap::{CliConfig, CsvSource, JsonSink, PlacementError, PlacementPipeline};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting placemap CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // A TOML file, when given, wins over the tuning flags.
    let (settings, input_path, output_path) = match &cli.config {
        Some(config_path) => {
            let file_config = TomlConfig::from_file(config_path)?;
            if let Err(e) = file_config.validate() {
                tracing::error!("❌ Config file validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            (
                file_config.settings(),
                file_config.input.path.clone(),
                file_config.output.path.clone(),
            )
        }
        None => (cli.settings(), cli.input.clone(), cli.output.clone()),
    };

    let source = CsvSource::new(&input_path);
    let records = source.fetch()?;
    tracing::info!("Read {} records from {}", records.len(), input_path);

    let pipeline = PlacementPipeline::new(settings)?;

    match pipeline.run(records) {
        Ok(layers) => {
            let sink = JsonSink::new(&output_path);
            let written = sink.write(&layers)?;
            tracing::info!("✅ Placement completed successfully!");
            println!(
                "✅ Placed {} records into {} layers",
                layers.placement_count(),
                layers.layers.len()
            );
            println!("📁 Output saved to: {}", written);
        }
        Err(PlacementError::EmptyResultSet) => {
            // Recoverable: tell the user instead of producing a map with
            // no center.
            tracing::warn!("No record carried a usable coordinate pair");
            eprintln!("❌ No valid records: check the GPS columns of the input file");
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!("❌ Placement failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
