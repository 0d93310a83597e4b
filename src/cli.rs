use clap::Parser;

use crate::config::Config;

/// Ask questions about the laws of Westeros and get answers with citations.
#[derive(Parser, Debug)]
#[command(name = "law-query", version)]
pub struct Cli {
    /// Question to ask. Starts an interactive session when omitted.
    pub question: Option<String>,

    /// Base URL of the query service
    #[arg(long, env = "LAW_QUERY_API_URL")]
    pub api_url: Option<String>,

    /// Print the raw response as JSON instead of cards
    #[arg(long)]
    pub json: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Flags win over the environment.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        config.json |= self.json;
        config.color &= !self.no_color;
        config
    }
}
