use std::process::ExitCode;

use clap::Parser;
use law_query::api::LawsClient;
use law_query::app::App;
use law_query::cli::Cli;
use law_query::config::Config;
use law_query::logging::init_tracing;
use law_query::output::Printer;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = cli.apply(Config::from_env());
    init_tracing(&config.log_level);

    if let Err(e) = config.validate() {
        eprintln!("law-query: {e}");
        return ExitCode::from(2);
    }
    tracing::debug!(api_url = %config.api_url, "starting");

    let client = LawsClient::new(config.api_url.clone());
    let mut app = App::new(client, Printer::stdout(config.color), config.json);

    let result = match cli.question.as_deref() {
        Some(question) => app.ask(question).await.map(|outcome| outcome.exit_code()),
        None => app
            .interactive(tokio::io::BufReader::new(tokio::io::stdin()))
            .await
            .map(|()| ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("law-query: {e}");
            ExitCode::FAILURE
        }
    }
}
