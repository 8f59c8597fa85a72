use crate::CliContext;
use ktane_hue_core::SessionError;
use ktane_hue_core::context::SinkKind;
use ktane_hue_core::lamps::{HueBridge, LampError, Lamps, MemoryLamps};
use std::time::Duration;
use tokio::time::sleep;

const DEVICE_TYPE: &str = "ktane_hue#cli";
const PAIRING_ATTEMPTS: u32 = 30;
const PAIRING_RETRY: Duration = Duration::from_secs(1);

/// Build the lamp sink selected by the configuration.
///
/// For a Hue bridge without a stored username this pairs first and saves the
/// new username to the config file.
pub async fn connect(ctx: &mut CliContext) -> Result<Lamps, SessionError> {
    match ctx.config.sink {
        SinkKind::Memory => {
            tracing::info!("using in-memory lamps, no bridge will be contacted");
            Ok(Lamps::Memory(MemoryLamps::with_names(&ctx.config.color_lamps)))
        }
        SinkKind::Hue => {
            if !ctx.config.bridge.is_paired() {
                let username = pair(&ctx.config.bridge.address).await?;
                ctx.set_bridge_username(username);
                ctx.save()?;
                tracing::info!(path = %ctx.config_path().display(), "bridge username saved");
            }
            let bridge =
                HueBridge::connect(&ctx.config.bridge.address, &ctx.config.bridge.username).await?;
            Ok(Lamps::Hue(bridge))
        }
    }
}

async fn pair(address: &str) -> Result<String, LampError> {
    let mut attempt = 1;
    loop {
        match HueBridge::register(address, DEVICE_TYPE).await {
            Err(e) if e.is_link_button_not_pressed() && attempt < PAIRING_ATTEMPTS => {
                if attempt == 1 {
                    tracing::info!(address, "press the link button on the bridge to pair");
                }
                attempt += 1;
                sleep(PAIRING_RETRY).await;
            }
            result => return result,
        }
    }
}
