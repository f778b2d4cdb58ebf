//! Node configuration.
//!
//! Each setting resolves from, highest precedence first: the CLI flag, the
//! environment (`PORT`, `DATA_DIR`; empty values count as unset), the
//! optional TOML file passed with `--config`, and finally the defaults below.

use serde::Deserialize;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::utils::{KuberError, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_RPC_PORT: u16 = 26657;
pub const DEFAULT_MINT_PORT: u16 = 3001;
pub const DEFAULT_DATA_DIR: &str = "./data";

pub const PORT_ENV: &str = "PORT";
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// On-disk configuration, every field optional.
///
/// ```toml
/// host = "0.0.0.0"
/// port = 26657
///
/// [mint]
/// port = 3001
/// data_dir = "./data"
/// ```
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub mint: MintFileConfig,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MintFileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub data_dir: Option<PathBuf>,
}

impl FileConfig {
    /// Load config from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .map_err(|e| KuberError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::parse(&data)
    }

    pub fn parse(data: &str) -> Result<Self> {
        toml::from_str(data).map_err(|e| KuberError::Config(e.to_string()))
    }
}

/// Chain node settings
#[derive(Debug, Clone, PartialEq)]
pub struct NodeConfig {
    pub host: String,
    pub port: u16,
}

impl NodeConfig {
    /// Resolve against the process environment.
    pub fn resolve(host: Option<String>, port: Option<u16>, file: &FileConfig) -> Result<Self> {
        Self::resolve_with_env(host, port, env_value(PORT_ENV), file)
    }

    pub fn resolve_with_env(
        host: Option<String>,
        port: Option<u16>,
        env_port: Option<String>,
        file: &FileConfig,
    ) -> Result<Self> {
        Ok(Self {
            host: host
                .or_else(|| file.host.clone())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: resolve_port(port, env_port.as_deref(), file.port, DEFAULT_RPC_PORT)?,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        socket_addr(&self.host, self.port)
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_string(), port: DEFAULT_RPC_PORT }
    }
}

/// Mint service settings
#[derive(Debug, Clone, PartialEq)]
pub struct MintConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
}

impl MintConfig {
    pub fn resolve(
        host: Option<String>,
        port: Option<u16>,
        data_dir: Option<PathBuf>,
        file: &FileConfig,
    ) -> Result<Self> {
        Self::resolve_with_env(
            host,
            port,
            data_dir,
            env_value(PORT_ENV),
            env_value(DATA_DIR_ENV),
            file,
        )
    }

    pub fn resolve_with_env(
        host: Option<String>,
        port: Option<u16>,
        data_dir: Option<PathBuf>,
        env_port: Option<String>,
        env_data_dir: Option<String>,
        file: &FileConfig,
    ) -> Result<Self> {
        let m = &file.mint;
        Ok(Self {
            host: host
                .or_else(|| m.host.clone())
                .or_else(|| file.host.clone())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: resolve_port(port, env_port.as_deref(), m.port, DEFAULT_MINT_PORT)?,
            data_dir: data_dir
                .or_else(|| env_data_dir.map(PathBuf::from))
                .or_else(|| m.data_dir.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        socket_addr(&self.host, self.port)
    }
}

/// Pick a port: flag, then a non-empty env value, then file, then default.
pub fn resolve_port(
    flag: Option<u16>,
    env: Option<&str>,
    file: Option<u16>,
    default: u16,
) -> Result<u16> {
    if let Some(p) = flag {
        return Ok(p);
    }
    match env.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => parse_port(raw),
        None => Ok(file.unwrap_or(default)),
    }
}

pub fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| KuberError::InvalidPort(raw.to_string()))
}

/// Read an env var, treating empty as unset.
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn socket_addr(host: &str, port: u16) -> Result<SocketAddr> {
    let ip: IpAddr = host
        .parse()
        .map_err(|_| KuberError::Config(format!("host must be an IP address, got {:?}", host)))?;
    Ok(SocketAddr::new(ip, port))
}
