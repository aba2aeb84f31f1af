use std::env;
use config::{Config, File, ConfigError};
use dotenv::dotenv;

use crate::config::allocation::AllocationSettings;

#[derive(serde::Deserialize, Debug)]
pub struct Settings{
    pub application: ApplicationSettings,
    #[serde(default)]
    pub allocation: AllocationSettings,
}

#[derive(serde::Deserialize, Debug)]
pub struct ApplicationSettings{
    pub port: u16,
    pub host: String,
    pub log_level: String
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn get_config() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| ConfigError::Message(format!("Failed to determine the current directory: {}", e)))?;
    let configuration_directory = base_path.join("configuration");

    dotenv().ok();

    let environment: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    let env_filename = format!("{}.yml", environment.as_str());
    let config = Config::builder()
        .add_source(File::from(configuration_directory.join("base.yml")))
        .add_source(File::from(configuration_directory.join(env_filename)).required(false))
        .add_source(
            config::Environment::default()
                .prefix("APP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
        )
        .build()?;

    let mut settings = config.try_deserialize::<Settings>()?;

    // Cloud runtimes hand the listening port over as a bare PORT variable
    if let Ok(port) = env::var("PORT") {
        settings.application.port = port
            .parse()
            .map_err(|e| ConfigError::Message(format!("Invalid PORT '{}': {}", port, e)))?;
    }

    settings.allocation.validate().map_err(ConfigError::Message)?;

    Ok(settings)
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. \
                Use either `local` or `production`.",
                other
            )),
        }
    }
}
