//! `sitewright model`: Save and load persisted model documents.

use sitewright_config::AppConfig;
use sitewright_core::model::ModelStore;
use sitewright_memory::FileModelStore;

use super::parse_payload;

pub async fn save(name: &str, json: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let store = FileModelStore::new(&config.models.directory);

    store.save_model(name, &parse_payload(json)).await?;
    let path = store.model_path(name)?;
    println!("{}", serde_json::json!({ "saved": name, "path": path.display().to_string() }));
    Ok(())
}

pub async fn load(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let store = FileModelStore::new(&config.models.directory);

    match store.load_model(name).await {
        Some(document) => println!("{}", serde_json::to_string_pretty(&document)?),
        None => println!("null"),
    }
    Ok(())
}
