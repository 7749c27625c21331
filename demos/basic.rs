use cozo_client::{Client, ClientConfig, Params};
use serde_json::json;

/// Runs a parameterised query against a local server and prints the rows.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = Client::new(ClientConfig::new().host("http://127.0.0.1:9070"))?;

    let mut params = Params::new();
    params.insert("name".into(), json!("Alice"));

    client
        .print("?[greeting] := greeting = concat('hello ', $name)", Some(params))
        .await?;

    // the raw result is also available
    if let Some(result) = client.run("?[a, b] <- [[1, 'x'], [2, 'y']]", None).await? {
        println!("{}", result.value());
    }

    Ok(())
}
