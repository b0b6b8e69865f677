//! # Agri Portal Demo
//!
//! Runs one scripted portal session against the canned backend and logs every
//! step:
//! 1. Mounting the page (schemes load automatically).
//! 2. Asking for crop recommendations and finding an expert.
//! 3. Uploading a photo for disease detection.
//! 4. Editing and saving the profile.
//! 5. Chatting with the assistant.
//!
//! ```bash
//! RUST_LOG=info cargo run -p agri-portal                   # compact logs
//! RUST_LOG=debug cargo run -p agri-portal -- leaf.jpg      # with a real photo
//! AGRI_PORTAL_CONFIG=portal.toml cargo run -p agri-portal  # custom latencies
//! ```

use agri_portal::config::PortalConfig;
use agri_portal::lifecycle::PortalSystem;
use agri_portal::model::{ImagePayload, ProfileField};
use interaction_engine::tracing::setup_tracing;
use interaction_engine::{RenderState, SectionHandle};
use std::path::Path;
use tracing::{error, info, Instrument};

fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

fn load_image(arg: Option<String>) -> Result<ImagePayload, String> {
    match arg {
        Some(path) => {
            let path = Path::new(&path);
            let bytes = std::fs::read(path).map_err(|e| format!("{}: {e}", path.display()))?;
            Ok(ImagePayload::from_bytes(mime_for(path), &bytes))
        }
        None => Ok(ImagePayload::from_bytes("image/png", b"sample leaf photo")),
    }
}

fn summarize<T: std::fmt::Debug>(section: &str, render: RenderState<T>) {
    match render {
        RenderState::Populated(output) => info!(section, ?output, "Results"),
        RenderState::Error(message) => error!(section, %message, "Section failed"),
        other => info!(section, state = ?other, "No results"),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = PortalConfig::from_env();
    let image = load_image(std::env::args().nth(1))?;
    info!(?config, "Starting portal session");

    let mut portal = PortalSystem::new(config);
    portal.mount().map_err(|e| e.to_string())?;

    let span = tracing::info_span!("advisory");
    async {
        portal.crops.set_location("Punjab");
        portal.crops.set_soil_type("loamy")?;
        portal.crops.submit()?;

        portal.experts.set_specialization("agronomy")?;
        portal.experts.submit()?;

        portal.diseases.set_image(image);
        portal.diseases.submit()?;
        Ok::<_, interaction_engine::EngineError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    portal.chat.send("Which crop suits loamy soil in Punjab?");

    let span = tracing::info_span!("profile_edit");
    async {
        portal.profile.start_edit()?;
        portal
            .profile
            .update_field(ProfileField::FarmSize("7 acres".into()))?;
        portal.profile.add_crop("Cotton")?;
        portal.profile.save().await?;
        Ok::<_, interaction_engine::EngineError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    portal.settle().await;

    summarize("crop_recommendation", portal.crops.render());
    summarize("expert_finder", portal.experts.render());
    summarize("disease_detection", portal.diseases.render());
    summarize("gov_schemes", portal.schemes.render());
    for message in portal.chat.messages() {
        info!(sender = ?message.sender, content = %message.content, "Chat");
    }

    let profile = toml::to_string_pretty(portal.profile.profile()).map_err(|e| e.to_string())?;
    println!("{profile}");

    info!("Portal session completed");
    Ok(())
}
