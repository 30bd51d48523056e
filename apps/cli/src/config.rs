use std::{env, fmt, fs, io, path, time::Duration};

use hostscout::{DEFAULT_MIN_VERSION, DISCOVERY_ATTEMPTS, DiscoveryConfig, HOSTS_PER_DISCOVERY};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {}", .0.display(), .1)]
    ReadFailed(path::PathBuf, #[source] io::Error),
    #[error("failed to write {}: {}", .0.display(), .1)]
    WriteFailed(path::PathBuf, #[source] io::Error),
    #[error("failed to parse config: {0}")]
    ParseFailed(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    SerializeFailed(#[from] toml::ser::Error),
    #[error("no config directory available, set XDG_CONFIG_HOME or HOME")]
    ConfigPathUnavailable,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Seed hosts discovery starts from
    #[serde(default)]
    pub peers: Vec<String>,
    #[serde(default)]
    pub version: Version,
    #[serde(default)]
    pub discovery: Discovery,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub codius: VersionRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRange {
    pub min: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Discovery {
    pub timeout_seconds: u64,
    pub hosts_per_round: usize,
    pub max_rounds: usize,
}

impl Default for VersionRange {
    fn default() -> Self {
        Self { min: DEFAULT_MIN_VERSION.into() }
    }
}

impl Default for Discovery {
    fn default() -> Self {
        Self {
            timeout_seconds: hostscout::config::DEFAULT_TIMEOUT.as_secs(),
            hosts_per_round: HOSTS_PER_DISCOVERY,
            max_rounds: DISCOVERY_ATTEMPTS,
        }
    }
}

/// Used to ensure we are actually reading a toml file
fn normalize_toml_path(path: &path::Path) -> path::PathBuf {
    let mut path = path.to_path_buf();
    if path.extension().map(|ext| ext != "toml").unwrap_or(true) {
        path.set_extension("toml");
    }
    path
}

/// Get default config path ($XDG_CONFIG_HOME/hostscout/config.toml or
/// $HOME/.config/...)
pub fn default_config_path() -> Result<path::PathBuf, Error> {
    let path = if let Ok(config_home) = env::var("XDG_CONFIG_HOME") {
        path::PathBuf::from(config_home)
    } else if let Some(home_dir) = env::home_dir() {
        home_dir.join(".config")
    } else {
        return Err(Error::ConfigPathUnavailable);
    };

    Ok(path.join("hostscout/config.toml"))
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let write_indented = |level: usize| {
            move |f: &mut fmt::Formatter<'_>, label: &str, value: &dyn fmt::Display| {
                writeln!(f, "  {:indent$}{}: {}", "", label, value, indent = level * 2)
            }
        };
        let write_title_indented = |level: usize| {
            move |f: &mut fmt::Formatter<'_>, label: &str| {
                writeln!(f, "{:indent$}{}", "", label, indent = level * 2)
            }
        };

        let write_title_1 = write_title_indented(1);
        let write_1 = write_indented(1);
        let write_2 = write_indented(2);

        writeln!(f, "Current Configuration:")?;
        write_title_1(f, "Seed Peers")?;
        if self.peers.is_empty() {
            write_title_indented(2)(f, "(none)")?;
        }
        for (index, peer) in self.peers.iter().enumerate() {
            write_2(f, &format!("#{}", index + 1), peer)?;
        }
        write_title_1(f, "Codius Version")?;
        write_1(f, "Minimum", &self.version.codius.min)?;
        write_title_1(f, "Discovery")?;
        write_1(f, "Timeout (s)", &self.discovery.timeout_seconds)?;
        write_1(f, "Hosts Per Round", &self.discovery.hosts_per_round)?;
        write_1(f, "Max Rounds", &self.discovery.max_rounds)?;

        Ok(())
    }
}

impl Config {
    /// Generate Config structure from file
    ///
    /// Creates a default config in ~/.config/hostscout/config.toml
    ///  or the specified path, with the name config.toml if one does not exist
    pub fn from_config(optional_path: Option<impl AsRef<path::Path>>) -> Result<Self, Error> {
        let config_path: path::PathBuf = if let Some(path) = optional_path {
            normalize_toml_path(path.as_ref())
        } else {
            default_config_path()?
        };

        if config_path.exists() {
            let raw_string = fs::read_to_string(&config_path)
                .map_err(|err| Error::ReadFailed(config_path.clone(), err))?;
            Ok(toml::from_str(raw_string.as_str())?)
        } else {
            let config = Self::default();
            config.write_config(&config_path)?;
            Ok(config)
        }
    }

    /// Serialize and write a config to a file
    pub fn write_config(&self, path: &path::Path) -> Result<(), Error> {
        let config_str: String = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| Error::WriteFailed(parent.to_path_buf(), err))?;
        }

        fs::write(path, config_str).map_err(|err| Error::WriteFailed(path.to_path_buf(), err))
    }

    /// Seed peers that are not absolute http(s) URLs, with the reason.
    ///
    /// These are still used for discovery and will simply fail to answer.
    pub fn suspicious_peers(&self) -> Vec<(&str, String)> {
        self.peers
            .iter()
            .filter_map(|peer| match Url::parse(peer) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => None,
                Ok(url) => Some((peer.as_str(), format!("unsupported scheme {}", url.scheme()))),
                Err(error) => Some((peer.as_str(), error.to_string())),
            })
            .collect()
    }

    /// Discovery parameters for the library
    pub fn discovery_config(&self) -> DiscoveryConfig {
        DiscoveryConfig::builder()
            .seed_peers(self.peers.iter().cloned())
            .min_version(self.version.codius.min.clone())
            .timeout(Duration::from_secs(self.discovery.timeout_seconds))
            .hosts_per_round(self.discovery.hosts_per_round)
            .max_rounds(self.discovery.max_rounds)
            .build()
    }
}
