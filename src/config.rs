//! Contract and network configuration
//!
//! Persisted in LocalStorage on the web; natively the defaults are used.

use serde::{Deserialize, Serialize};

/// Placeholder shipped before the contract is deployed
pub const UNSET_PACKAGE_ID: &str = "YOUR_PACKAGE_ID_HERE";

/// Ledger network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    #[default]
    Testnet,
    Devnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Some(Network::Mainnet),
            "testnet" | "test" => Some(Network::Testnet),
            "devnet" | "dev" => Some(Network::Devnet),
            _ => None,
        }
    }
}

/// Where the game contract lives and who we are playing as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Published package id of the game contract
    pub package_id: String,
    /// Module name inside the package
    pub module_name: String,
    pub network: Network,
    /// Player slot (0 or 1) used when submitting routes
    pub player_index: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package_id: UNSET_PACKAGE_ID.to_string(),
            module_name: "game".to_string(),
            network: Network::Testnet,
            player_index: 0,
        }
    }
}

impl Config {
    /// Whether a real package id has been filled in
    pub fn is_configured(&self) -> bool {
        !self.package_id.is_empty() && self.package_id != UNSET_PACKAGE_ID
    }

    /// Fully qualified move-call target for a contract function
    pub fn call_target(&self, function: &str) -> String {
        format!("{}::{}::{}", self.package_id, self.module_name, function)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "ricochet_routes_config";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(config) = serde_json::from_str(&json) {
                    log::info!("Loaded config from LocalStorage");
                    return config;
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                match storage.set_item(Self::STORAGE_KEY, &json) {
                    Ok(()) => log::info!("Config saved"),
                    Err(e) => log::warn!("Could not save config: {:?}", e),
                }
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
