//! Pipeline configuration: one TOML file drives the whole analysis.
//!
//! The pipeline is parameterized, not duplicated: a single configuration
//! struct selects the signal kind, the optional filter, and the noise seed,
//! and the same generate → analyze → filter path serves every variant.
//!
//! # TOML Format
//!
//! ```toml
//! name = "two-tone cleanup"
//! sample_rate = 1000.0
//! start = -1.0
//! end = 1.0
//! noise_amplitude = 0.3
//! noise_seed = 42
//!
//! [signal]
//! kind = "tones"
//! tones = [
//!     { freq_hz = 5.0, amplitude = 1.0 },
//!     { freq_hz = 50.0, amplitude = 0.8 },
//! ]
//!
//! [filter]
//! type = "butterworth_low"
//! order = 4
//! cutoff_hz = 10.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use espectro_filter::{Band, FilterSpec};

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Configuration values outside their valid domain
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Signal selection for the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SignalConfig {
    /// Rectangular pulse centered on t = 0.
    Pulse {
        /// Half width of the pulse in seconds.
        half_width: f64,
    },
    /// Heaviside unit step.
    Step,
    /// Single sine tone.
    Sine {
        /// Tone frequency in Hz.
        freq_hz: f64,
        /// Peak amplitude.
        #[serde(default = "default_amplitude")]
        amplitude: f64,
    },
    /// Sum of sine tones.
    Tones {
        /// The tones to mix.
        tones: Vec<ToneConfig>,
    },
}

impl Default for SignalConfig {
    fn default() -> Self {
        SignalConfig::Sine {
            freq_hz: 5.0,
            amplitude: 1.0,
        }
    }
}

/// One tone of a [`SignalConfig::Tones`] mix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ToneConfig {
    /// Tone frequency in Hz.
    pub freq_hz: f64,
    /// Peak amplitude.
    pub amplitude: f64,
}

/// Filter selection for the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterConfig {
    /// Butterworth low-pass.
    ButterworthLow {
        /// Prototype order.
        order: usize,
        /// Cutoff in Hz.
        cutoff_hz: f64,
    },
    /// Butterworth high-pass.
    ButterworthHigh {
        /// Prototype order.
        order: usize,
        /// Cutoff in Hz.
        cutoff_hz: f64,
    },
    /// Butterworth band-pass.
    ButterworthBand {
        /// Prototype order (the band transform doubles it).
        order: usize,
        /// Lower band edge in Hz.
        low_hz: f64,
        /// Upper band edge in Hz.
        high_hz: f64,
    },
    /// Windowed-sinc FIR low-pass.
    FirLow {
        /// Number of taps (odd).
        num_taps: usize,
        /// Cutoff in Hz.
        cutoff_hz: f64,
    },
}

impl FilterConfig {
    /// Resolve into a designable [`FilterSpec`] at the pipeline sample rate.
    pub fn to_spec(&self, sample_rate: f64) -> FilterSpec {
        match *self {
            FilterConfig::ButterworthLow { order, cutoff_hz } => FilterSpec::Butterworth {
                order,
                band: Band::Low(cutoff_hz),
                sample_rate,
            },
            FilterConfig::ButterworthHigh { order, cutoff_hz } => FilterSpec::Butterworth {
                order,
                band: Band::High(cutoff_hz),
                sample_rate,
            },
            FilterConfig::ButterworthBand {
                order,
                low_hz,
                high_hz,
            } => FilterSpec::Butterworth {
                order,
                band: Band::Pass(low_hz, high_hz),
                sample_rate,
            },
            FilterConfig::FirLow {
                num_taps,
                cutoff_hz,
            } => FilterSpec::Fir {
                num_taps,
                cutoff_hz,
                sample_rate,
            },
        }
    }
}

fn default_sample_rate() -> f64 {
    1000.0
}

fn default_start() -> f64 {
    -1.0
}

fn default_end() -> f64 {
    1.0
}

fn default_amplitude() -> f64 {
    1.0
}

/// Pipeline configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineConfig {
    /// Name of the run; prefixes exported file names.
    pub name: String,

    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: f64,

    /// Start of the time axis in seconds (inclusive).
    #[serde(default = "default_start")]
    pub start: f64,

    /// End of the time axis in seconds (exclusive).
    #[serde(default = "default_end")]
    pub end: f64,

    /// Signal to synthesize.
    #[serde(default)]
    pub signal: SignalConfig,

    /// Optional filter stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterConfig>,

    /// Peak amplitude of the injected noise; 0 disables it.
    #[serde(default)]
    pub noise_amplitude: f64,

    /// Seed for the noise generator.
    #[serde(default)]
    pub noise_seed: u64,
}

impl PipelineConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: PipelineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: PipelineConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Check the value domains the type system cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "sample_rate must be positive, got {}",
                self.sample_rate
            )));
        }
        if self.start >= self.end {
            return Err(ConfigError::Invalid(format!(
                "time interval must satisfy start < end, got [{}, {})",
                self.start, self.end
            )));
        }
        if self.noise_amplitude < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "noise_amplitude must not be negative, got {}",
                self.noise_amplitude
            )));
        }
        if let SignalConfig::Tones { tones } = &self.signal
            && tones.is_empty()
        {
            return Err(ConfigError::Invalid(
                "tones list must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
