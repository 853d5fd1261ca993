//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::settings::LogSettings;

/// Build the filter from explicit settings; the environment is not consulted.
pub fn filter(settings: &LogSettings) -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::try_new(&settings.level)?)
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(settings: &LogSettings) -> anyhow::Result<()> {
    let filter = filter(settings)?;
    if tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}
