//! Headless demo: fetch one page of breeds and print the table.
//!
//! Run with: `cargo run --example fetch -- 15`
//!
//! The optional argument is the limit; without it the endpoint's default of
//! 10 applies. Set `RUST_LOG=dogdex=debug` to see the request lifecycle.

use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dogdex::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let limit = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => DEFAULT_LIMIT,
    };

    let config = Config::from_env();
    let api = BreedsApi::new(&config)?;

    let breeds = api.breeds(limit).await?;
    info!(count = breeds.len(), limit, "fetched breeds");

    println!("{:<30} Picture", "Name");
    for breed in &breeds {
        println!("{:<30} {}", breed.name, breed.image.url);
    }

    Ok(())
}
