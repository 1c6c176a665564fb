//! Service configuration, read from the environment once at startup.

use std::fmt;
use std::str::FromStr;

use anyhow::Context;

/// The environment the service is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Develop,
    Local,
}

impl Environment {
    /// Read `ENVIRONMENT`; unset or unrecognized means production.
    pub fn new_or_prod() -> Self {
        std::env::var("ENVIRONMENT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "develop" | "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            other => anyhow::bail!("unknown environment '{other}'"),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Production => "production",
            Environment::Develop => "develop",
            Environment::Local => "local",
        };
        f.write_str(name)
    }
}

/// Configuration parameters for the service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection URL for the estatedb Postgres database.
    pub database_url: String,
    /// Port to listen for HTTP requests on.
    pub port: u16,
    /// The environment we are running in.
    pub environment: Environment,
    /// Shared secret expected on requests under `/internal`.
    pub internal_api_key: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be provided")?;
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .context("PORT must be a number")?;
        let internal_api_key =
            std::env::var("INTERNAL_API_KEY").context("INTERNAL_API_KEY must be provided")?;

        Ok(Config {
            database_url,
            port,
            environment: Environment::new_or_prod(),
            internal_api_key,
        })
    }
}
