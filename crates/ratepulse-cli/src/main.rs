mod cli;
mod error;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use ratepulse_core::{
    Credentials, DatasetBuilder, OutputWriter, ReferenceData, ReqwestHttpClient, SourceRegistry,
    SourceRegistryBuilder, BOK_API_KEY, FRED_API_KEY,
};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();

    let credentials = Credentials::load(&cli.env_file);

    let registry = if cli.offline {
        tracing::info!("offline mode: live fetching disabled, curated data only");
        SourceRegistry::new()
    } else {
        // The transport is the mandatory fetching capability: if it cannot
        // be built, exit before producing any output.
        let http = ReqwestHttpClient::new().map_err(|e| CliError::Startup(e.to_string()))?;

        if !credentials.is_set(FRED_API_KEY) {
            tracing::warn!("FRED_API_KEY is not set; 미국 will use fallback data");
        }
        if !credentials.is_set(BOK_API_KEY) {
            tracing::warn!("BOK_API_KEY is not set; 한국 will use fallback data");
        }

        SourceRegistryBuilder::new(Arc::new(http))
            .with_credentials(credentials)
            .build()
    };

    let reference = ReferenceData::builtin();
    let report = DatasetBuilder::new(&registry, &reference).build().await;

    let paths = OutputWriter::new(&cli.out_dir).write(&report.records)?;

    println!(
        "saved {} rate records to {} and {}",
        report.records.len(),
        paths.json.display(),
        paths.js.display()
    );
    println!(
        "live source hits: {}/{}",
        report.live,
        report.records.len()
    );

    Ok(ExitCode::SUCCESS)
}
