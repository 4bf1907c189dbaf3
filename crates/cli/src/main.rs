use std::path::PathBuf;
use std::process;

use clap::Parser;

use spot_darken_core::batch::batch_config::BatchConfig;
use spot_darken_core::batch::batch_logger::LogBatchLogger;
use spot_darken_core::batch::process_batch_use_case::ProcessBatchUseCase;
use spot_darken_core::batch::process_image_use_case::ProcessImageUseCase;
use spot_darken_core::darkening::infrastructure::darkener_factory::create_darkener;
use spot_darken_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use spot_darken_core::imaging::infrastructure::image_file_writer::ImageFileWriter;
use spot_darken_core::shared::constants::DEFAULT_MAX_RETRIES;

/// Darken a random circular spot in every image of a batch.
#[derive(Parser)]
#[command(name = "spot-darken")]
struct Cli {
    /// Text file listing one input image path per line.
    input_list: PathBuf,

    /// Directory for the darkened images (created if missing).
    output_dir: PathBuf,

    /// Attempts per image before it is reported as failed.
    #[arg(long, default_value_t = DEFAULT_MAX_RETRIES)]
    max_retries: u32,

    /// Seed for spot placement; omit for a different result every run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let config = BatchConfig::new(cli.input_list, cli.output_dir).with_max_retries(cli.max_retries);
    let image_use_case = ProcessImageUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(ImageFileWriter::new()),
        create_darkener(cli.seed),
        config.max_retries,
    );
    let mut use_case = ProcessBatchUseCase::new(image_use_case, Box::new(LogBatchLogger));

    let report = use_case.execute(&config.input_list_path, &config.output_dir)?;
    if !report.all_succeeded() {
        log::warn!(
            "{} of {} images could not be processed",
            report.failed.len(),
            report.total()
        );
    }
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.max_retries == 0 {
        return Err("Max retries must be at least 1".into());
    }
    if cli.output_dir.is_file() {
        return Err(format!(
            "Output path is a file, not a directory: {}",
            cli.output_dir.display()
        )
        .into());
    }
    Ok(())
}
