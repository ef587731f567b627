use log::error;
use recipe_extract::{import_recipe, ExtractConfig, ImportError};
use std::env;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let [_, url] = args.as_slice() else {
        let program = args.first().map(String::as_str).unwrap_or("recipe-extract");
        eprintln!("Usage: {program} <url>");
        return ExitCode::from(2);
    };

    match run(url).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Import of {} failed: {:?}", url, e);
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(url: &str) -> Result<String, ImportError> {
    let config = ExtractConfig::load()?;
    import_recipe(url, &config).await
}
