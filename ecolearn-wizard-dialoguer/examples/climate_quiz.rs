//! Run the climate change quiz in the terminal against a live EcoLearn
//! server.
//!
//! Point `ECOLEARN_BASE_URL` at the server; it defaults to the local
//! development instance.

use ecolearn_api::{ApiClient, ClientConfig};
use ecolearn_wizard_dialoguer::DialoguerWizard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env();
    let client = ApiClient::from_config(&config)?;

    let outcome = DialoguerWizard::new()
        .run(example_lessons::climate_change(), &client)
        .await?;

    println!(
        "Final score: {}/{} (+{} points)",
        outcome.score(),
        outcome.total(),
        outcome.points_earned()
    );
    Ok(())
}
