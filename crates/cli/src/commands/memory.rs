//! `sitewright synthesize`: Combine new data with context in session memory.

use serde_json::json;
use sitewright_config::AppConfig;
use sitewright_core::memory::{MemoryStore, Synthesis};
use sitewright_core::model::ModelStore;
use sitewright_memory::{
    AssociativeMemory, FileModelStore, SessionRegistry, synthesize_information,
};
use tracing::info;

use super::parse_payload;

/// Session used by one-shot CLI invocations.
const CLI_SESSION: &str = "cli";

/// Key the latest synthesis is stored under.
const SYNTHESIS_KEY: &str = "last_synthesis";

pub async fn synthesize(
    new_data: &str,
    context: &str,
    save_as: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let registry = SessionRegistry::new();
    let memory = registry.open(CLI_SESSION);

    let synthesis = synthesize_information(&parse_payload(new_data), &parse_payload(context));
    let record = remember(&memory, &synthesis)?;

    if let Some(name) = save_as {
        let store = FileModelStore::new(&config.models.directory);
        store.save_model(name, &record["node"]["value"]).await?;
        info!(model = name, "Saved synthesis as model document");
    }

    println!("{}", serde_json::to_string_pretty(&record)?);

    drop(memory);
    if let Some(discarded) = registry.close(CLI_SESSION) {
        info!(session = CLI_SESSION, discarded, "Session memory released");
    }
    Ok(())
}

/// Store `synthesis` in `memory` and describe the node as it was read back.
fn remember(
    memory: &AssociativeMemory,
    synthesis: &Synthesis,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    memory.store(SYNTHESIS_KEY, serde_json::to_value(synthesis)?);
    let node = memory
        .retrieve(SYNTHESIS_KEY)
        .ok_or("synthesis was not retained in session memory")?;

    Ok(json!({
        "session": memory.session(),
        "node": node,
    }))
}
