// src/main.rs
use markup_splice::patcher::{PatchConfig, PatchError, Patcher};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), PatchError> {
    env_logger::init();

    let config = PatchConfig::default();
    Patcher::from_config(&config).apply().await?;

    println!("Event occurrences card inserted into {}", config.target.display());
    Ok(())
}
