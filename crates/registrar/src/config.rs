use models::term::Year;
use registry::{Category, RegistryError};
use std::{env, num::ParseIntError, str::FromStr};
use strum::{Display, EnumString};
use thiserror::Error;

pub const CURRENT_YEAR_VAR: &str = "REGISTRAR_CURRENT_YEAR";
pub const FORMAT_VAR: &str = "REGISTRAR_FORMAT";
pub const LISTINGS_VAR: &str = "REGISTRAR_LISTINGS";

/// How listings are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("REGISTRAR_CURRENT_YEAR must be a year, got '{value}'")]
    InvalidYear {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("REGISTRAR_FORMAT must be 'table' or 'json', got '{0}'")]
    UnknownFormat(String),

    #[error("REGISTRAR_LISTINGS: {0}")]
    Listing(#[from] RegistryError),
}

/// Runtime settings, read from the environment (and `.env` if present)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Reference year for deriving student study years
    pub current_year: Year,
    pub format: OutputFormat,
    /// Categories to print, in order
    pub listings: Vec<Category>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            current_year: Year::current(),
            format: OutputFormat::default(),
            listings: Category::all(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key/value source; unset keys keep defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(CURRENT_YEAR_VAR) {
            config.current_year = Year::from_str(&value)
                .map_err(|source| ConfigError::InvalidYear { value, source })?;
        }

        if let Some(value) = lookup(FORMAT_VAR) {
            config.format = OutputFormat::from_str(value.trim())
                .map_err(|_| ConfigError::UnknownFormat(value))?;
        }

        if let Some(value) = lookup(LISTINGS_VAR) {
            config.listings = value
                .split(',')
                .filter(|name| !name.trim().is_empty())
                .map(Category::parse)
                .collect::<Result<_, _>>()?;
        }

        Ok(config)
    }
}
