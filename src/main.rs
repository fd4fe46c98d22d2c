// Visitor pass generation from a photographed identity document

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use visipass::render::{PassRenderer, DEFAULT_PASS_PATH};
use visipass::utils::PassError;
use visipass::PassPipeline;

/// Generate a visitor pass from a photographed identity document.
#[derive(Parser)]
#[command(name = "visipass", version, about)]
struct Args {
    /// Path to the document photo or scan
    image: PathBuf,

    /// Where to write the rendered pass
    #[arg(short, long, default_value = DEFAULT_PASS_PATH)]
    output: PathBuf,

    /// Print the extracted record as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let image = match image::open(&args.image) {
        Ok(image) => image,
        Err(e) => {
            let err = PassError::ImageProcessingError(format!(
                "Failed to decode {}: {}",
                args.image.display(),
                e
            ));
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let record = PassPipeline::new().process(&image);
    if record.is_unusable() {
        eprintln!("Image quality is too poor. Please try again.");
        return ExitCode::FAILURE;
    }

    if args.json {
        match serde_json::to_string_pretty(&record) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize record: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("Name: {}", record.name.as_deref().unwrap_or("None"));
        println!(
            "Date of Birth: {}",
            record.birth_date.as_deref().unwrap_or("None")
        );
        match record.age {
            Some(age) => println!("Age: {}", age),
            None => println!("Age: None"),
        }
    }

    match PassRenderer::render_pass(&record, &args.output) {
        Ok(path) => {
            println!("Visiting pass written to {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error rendering pass: {}", e);
            ExitCode::FAILURE
        }
    }
}
