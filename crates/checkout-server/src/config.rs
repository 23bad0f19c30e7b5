//! Server Configuration
//!
//! Read once from the environment at startup. Anything missing or malformed
//! fails here rather than on the first request.

use anyhow::{bail, Context};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DOMAIN: &str = "http://localhost:3000";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Stripe secret key
    pub stripe_secret_key: String,

    /// Public base URL for success/cancel redirects
    pub domain: String,

    pub port: u16,

    /// Upper bound on the Stripe call, if any
    pub provider_timeout: Option<Duration>,

    /// Directory served for unmatched GET paths
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let stripe_secret_key = var("STRIPE_SECRET_KEY")
            .context("STRIPE_SECRET_KEY must be set")?;

        let domain = var("DOMAIN").unwrap_or_else(|| DEFAULT_DOMAIN.into());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let provider_timeout = match var("PROVIDER_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("PROVIDER_TIMEOUT_SECS is not a number: {raw}"))?;
                if secs == 0 {
                    bail!("PROVIDER_TIMEOUT_SECS must be greater than zero");
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let static_dir = var("STATIC_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);

        Ok(Self {
            stripe_secret_key,
            domain,
            port,
            provider_timeout,
            static_dir,
        })
    }

    /// Listen on all interfaces
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
