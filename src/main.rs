extern crate cozo_client;

use clap::Parser;
use cozo_client::{Client, ClientConfig, ClientError, Params};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
enum CliError {
    #[error("Invalid query params: {0}")]
    Params(#[from] serde_json::Error),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Run a query against a database server and print the result as a table
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Query script, sent to the server verbatim
    #[arg(short, long)]
    query: String,

    /// Query parameters as a JSON object
    #[arg(short, long)]
    params: Option<String>,

    /// Server address
    #[arg(long, default_value = cozo_client::config::DEFAULT_HOST)]
    host: String,

    #[arg(short, long, default_value = "")]
    username: String,

    #[arg(long, default_value = "")]
    password: String,
}

impl Args {
    fn params(&self) -> Result<Option<Params>, CliError> {
        self.params
            .as_deref()
            .map(|params| serde_json::from_str::<Params>(params).map_err(CliError::Params))
            .transpose()
    }

    fn config(&self) -> ClientConfig {
        ClientConfig::new()
            .host(&self.host)
            .username(&self.username)
            .password(&self.password)
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = Client::new(args.config())?;

    println!("\nQuery: {}", args.query);
    client.print(&args.query, args.params()?).await?;

    Ok(())
}
