use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    barrier_model::BarrierParameters, controls::FissionControls, error::TunnellingError,
    grid::Grid,
};

/// Environment variable overriding the configuration path.
pub const CONFIG_ENV: &str = "TUNNELLING_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "tunnelling.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to load toml {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Unable to parse toml {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("Invalid config value {name}: {reason}")]
    Invalid { name: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TunnellingConfig {
    pub fusion: FusionConfig,
    pub fission: FissionConfig,
    pub controls: FissionControls,
    pub output: OutputConfig,
}

/// Fusion page, barrier in SI units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Barrier height in J
    pub barrier_height: f64,
    /// Barrier width in m
    pub barrier_width: f64,
    /// Particle mass in kg, proton by default
    pub particle_mass: f64,
    pub hbar: f64,
    pub energy_start: f64,
    pub energy_end: f64,
    pub energy_points: usize,
    /// Energies are written multiplied by this factor
    pub energy_display_scale: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            barrier_height: 5e-14,
            barrier_width: 1e-14,
            particle_mass: 1.67e-27,
            hbar: 1.054e-34,
            energy_start: 1e-15,
            energy_end: 8e-14,
            energy_points: 400,
            energy_display_scale: 1e14,
        }
    }
}

impl FusionConfig {
    pub fn barrier(&self) -> Result<BarrierParameters, TunnellingError> {
        BarrierParameters::new(
            self.barrier_height,
            self.barrier_width,
            self.particle_mass,
            self.hbar,
        )
    }

    pub fn energy_grid(&self) -> Grid {
        Grid::linspace(self.energy_start, self.energy_end, self.energy_points)
    }
}

/// Fission page, arbitrary units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FissionConfig {
    pub position_start: f64,
    pub position_end: f64,
    pub position_points: usize,
    pub packet_width: f64,
    pub packet_offset: f64,
    pub reference_steps: u32,
    /// Height of the drawn barrier relative to the normalized packet
    pub barrier_display_scale: f64,
}

impl Default for FissionConfig {
    fn default() -> Self {
        Self {
            position_start: -80.0,
            position_end: 80.0,
            position_points: 800,
            packet_width: 6.0,
            packet_offset: -10.0,
            reference_steps: 400,
            barrier_display_scale: 1.2,
        }
    }
}

impl FissionConfig {
    pub fn position_grid(&self) -> Grid {
        Grid::linspace(self.position_start, self.position_end, self.position_points)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory of the written curves
    pub data_dir: PathBuf,
    /// Directory of pre-rendered media
    pub results_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            results_dir: PathBuf::from("results"),
        }
    }
}

impl TunnellingConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: "<string>".to_string(),
            source,
        })?;
        config.validate()?;

        Ok(config)
    }

    /// This function reads toml files
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.controls.validate()
    }

    /// Reads the configuration from [`CONFIG_ENV`] or [`DEFAULT_CONFIG_PATH`],
    /// falling back to the defaults when the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let config = Self::read(path)?;
        log::info!("loaded config from {}", path.display());

        Ok(config)
    }
}
