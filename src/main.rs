use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use elfgen::config::AppConfig;
use elfgen::core::client::BedrockService;
use elfgen::core::pipeline::{NameGenerationPipeline, PipelineError};

/// Environment variable holding the Bedrock API key
const API_KEY_ENV: &str = "ELFGEN_BEDROCK_API_KEY";

#[tokio::main]
async fn main() -> ExitCode {
    let _log_guard = elfgen::core::logging::init();
    log::info!("elfgen v{} starting", elfgen::VERSION);

    let mut args = env::args().skip(1);
    let (first_name, birth_month) = match (args.next(), args.next()) {
        (Some(name), Some(month)) => (name, month),
        _ => {
            eprintln!("Usage: elfgen <first-name> <birth-month>");
            eprintln!("Example: elfgen Timmy April");
            return ExitCode::FAILURE;
        }
    };

    let api_key = match env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => key,
        _ => {
            eprintln!(
                "The elves can't reach the workshop! Set {API_KEY_ENV} and try again."
            );
            return ExitCode::FAILURE;
        }
    };

    let config = AppConfig::load();
    let service = Arc::new(BedrockService::new(api_key, config.service));
    let pipeline = NameGenerationPipeline::new(service, config.pipeline);

    match pipeline.generate_elf_name(&first_name, &birth_month).await {
        Ok(elf_name) => {
            println!("🎄 Your magical elf name is... {} ✨", elf_name.name);
            ExitCode::SUCCESS
        }
        Err(PipelineError::Validation(e)) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            // Detail goes to the log; the user gets a festive shrug
            log::error!("Pipeline failed: {e}");
            eprintln!("The elves are on a cocoa break — please try again in a moment!");
            ExitCode::FAILURE
        }
    }
}
