use serde::{Deserialize, Serialize};

use crate::utils::constants::DEFAULT_TOKEN_KEY;

const DEFAULT_API_URL_DEVELOPMENT: &str = "http://localhost:8000";
const DEFAULT_API_URL_PRODUCTION: &str = "https://api.example.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url_development: String,
    pub api_base_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub token_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url_development: DEFAULT_API_URL_DEVELOPMENT.to_string(),
            api_base_url_production: DEFAULT_API_URL_PRODUCTION.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            token_storage_key: DEFAULT_TOKEN_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            api_base_url_development: option_env!("API_BASE_URL_DEVELOPMENT")
                .unwrap_or(DEFAULT_API_URL_DEVELOPMENT).to_string(),
            api_base_url_production: option_env!("API_BASE_URL_PRODUCTION")
                .unwrap_or(DEFAULT_API_URL_PRODUCTION).to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            token_storage_key: option_env!("TOKEN_STORAGE_KEY")
                .filter(|key| !key.is_empty())
                .unwrap_or(DEFAULT_TOKEN_KEY).to_string(),
        }
    }

    /// URL base de la API de autenticación según el entorno actual
    pub fn api_base_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_base_url_production,
            _ => &self.api_base_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel para wasm_logger: todo en debug, solo avisos si el logging está apagado
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
