use metro_core::{MetroNetwork, NetworkConfig, create_metro_network, load_passengers};
use metro_core::prelude::PassengerRecord;
use tracing::info;

/// Catalog snapshot shared by all handlers.
///
/// The network is built once at load time; reloading the catalogs means
/// building a new state.
pub struct AppState {
    pub network: MetroNetwork,
    pub passengers: Option<Vec<PassengerRecord>>,
}

impl AppState {
    pub fn load(config: &NetworkConfig) -> Result<Self, metro_core::Error> {
        let network = create_metro_network(config)?;
        let passengers = config
            .passengers_path
            .as_deref()
            .map(load_passengers)
            .transpose()?;

        if let Some(records) = &passengers {
            info!(records = records.len(), "Loaded passenger data");
        }

        Ok(Self {
            network,
            passengers,
        })
    }

    pub fn new(network: MetroNetwork, passengers: Option<Vec<PassengerRecord>>) -> Self {
        Self {
            network,
            passengers,
        }
    }
}
