use clap::Parser;
use operator_search::utils::{logger, validation::Validate};
use operator_search::{CliConfig, ClientConfig, OperatorSearch, SearchClient, SearchError};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config).await {
        tracing::error!("❌ Search failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(config: CliConfig) -> Result<(), SearchError> {
    config.validate()?;

    let file = config.file_config()?;
    if let Some(file) = &file {
        file.validate()?;
    }

    let client = SearchClient::new(ClientConfig::resolve(
        config.base_url.clone(),
        file.as_ref(),
    ));
    let request = config.to_request(file.as_ref());

    let response = if config.all {
        client.search_all(&request).await?
    } else {
        client.search(&request).await?
    };

    tracing::info!(
        "Found {} operators ({} returned)",
        response.total_count,
        response.results.len()
    );

    let output = if config.typed {
        serde_json::to_string_pretty(&response.operators()?)?
    } else {
        serde_json::to_string_pretty(&response)?
    };
    println!("{}", output);

    Ok(())
}
