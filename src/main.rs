use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use risport70::{CmSelectionCriteria, RisPortClient, RisPortConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "risport70=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration: CONFIG_PATH points at a YAML file, otherwise
    // CUCM/UCUSER/UCPASS come from the environment.
    let config = match std::env::var("CONFIG_PATH") {
        Ok(path) => {
            RisPortConfig::load_from_file(&path).context("Failed to load configuration file")?
        }
        Err(_) => {
            RisPortConfig::from_env().context("Failed to load configuration from environment")?
        }
    };

    tracing::info!("Querying RISPort70 on {}", config.host);
    if config.accept_invalid_certs {
        tracing::warn!("TLS certificate verification disabled");
    }

    let client = RisPortClient::new(config)?;

    let test_phone = std::env::var("RIS_TEST_PHONE").unwrap_or_else(|_| "SEPEC1D8B2B6DEC".into());

    let phone_query = client.get_phone_by_name(&test_phone);
    let criteria = CmSelectionCriteria {
        items: vec![test_phone.clone()],
        ..Default::default()
    };
    let device_query = client.select_cm_device(&criteria);

    // The two queries are independent; run them concurrently.
    let (phone, devices) = futures::future::join(phone_query, device_query).await;

    match phone {
        Ok(phone) => println!("phone = {}", serde_json::to_string_pretty(&phone)?),
        Err(e) => tracing::error!("get_phone_by_name failed: {e}"),
    }
    match devices {
        Ok(devices) => println!("devices = {}", serde_json::to_string_pretty(&devices)?),
        Err(e) => tracing::error!("select_cm_device failed: {e}"),
    }

    Ok(())
}
