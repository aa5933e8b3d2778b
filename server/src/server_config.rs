use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub listen_address: String,
    pub static_files_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: "0.0.0.0:5000".to_string(),
            static_files_path: "static".to_string(),
        }
    }
}

impl ServerConfig {
    /// A missing config file falls back to the defaults; a present but
    /// unreadable or malformed file is an error.
    pub fn load(path: &str) -> Result<Self, String> {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_yaml_ng::from_str(&content)
                .map_err(|e| format!("Failed to parse config file: {}", e)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(format!("Failed to read config file: {}", err)),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.listen_address.parse::<std::net::SocketAddr>().is_err() {
            return Err(format!(
                "Invalid listen address: {}",
                self.listen_address
            ));
        }
        if self.static_files_path.is_empty() {
            return Err("Static files path must not be empty".to_string());
        }
        Ok(())
    }
}
