//! Shared helpers for the CLI commands.

use std::path::Path;

use clap::Args;

use crate::config::SignalConfig;
use crate::export::{PlotSeries, file_stem, write_series_csv};
use espectro_analysis::Spectrum;
use espectro_core::{TimeAxis, composite, rectangular_pulse, sinusoid, unit_step};

/// Time-axis flags shared by every generating command.
#[derive(Args, Debug, Clone, Copy)]
pub struct AxisArgs {
    /// Sample rate in Hz
    #[arg(long, default_value = "1000.0")]
    pub fs: f64,

    /// Start of the time axis in seconds (inclusive)
    #[arg(long, default_value = "-1.0", allow_hyphen_values = true)]
    pub start: f64,

    /// End of the time axis in seconds (exclusive)
    #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
    pub end: f64,
}

impl AxisArgs {
    /// Build the time axis these flags describe.
    pub fn build(&self) -> anyhow::Result<TimeAxis> {
        Ok(TimeAxis::new(self.start, self.end, self.fs)?)
    }
}

/// Synthesize the signal a [`SignalConfig`] describes over the given axis.
pub fn build_signal(config: &SignalConfig, t: &TimeAxis) -> anyhow::Result<Vec<f64>> {
    let signal = match config {
        SignalConfig::Pulse { half_width } => rectangular_pulse(t, *half_width),
        SignalConfig::Step => unit_step(t, espectro_core::STEP_AT_ZERO),
        SignalConfig::Sine { freq_hz, amplitude } => sinusoid(t, *freq_hz, *amplitude),
        SignalConfig::Tones { tones } => {
            let parts: Vec<Vec<f64>> = tones
                .iter()
                .map(|tone| sinusoid(t, tone.freq_hz, tone.amplitude))
                .collect();
            let views: Vec<&[f64]> = parts.iter().map(Vec::as_slice).collect();
            composite(&views)?
        }
    };
    Ok(signal)
}

/// Write a time-domain series into `out_dir`, named from its title.
pub fn export_time_series(
    out_dir: &Path,
    title: &str,
    t: &TimeAxis,
    samples: &[f64],
) -> anyhow::Result<()> {
    let series = PlotSeries::new(title, t.samples().to_vec(), samples.to_vec());
    write_series_csv(&series, out_dir.join(format!("{}.csv", file_stem(title))))
}

/// Write a spectrum's magnitude and phase series into `out_dir`.
pub fn export_spectrum(out_dir: &Path, title: &str, spectrum: &Spectrum) -> anyhow::Result<()> {
    let magnitude = PlotSeries::new(
        format!("{title} (magnitude)"),
        spectrum.frequencies.clone(),
        spectrum.magnitude(),
    );
    write_series_csv(
        &magnitude,
        out_dir.join(format!("{}_magnitude.csv", file_stem(title))),
    )?;

    let phase = PlotSeries::new(
        format!("{title} (phase)"),
        spectrum.frequencies.clone(),
        spectrum.phase(),
    );
    write_series_csv(
        &phase,
        out_dir.join(format!("{}_phase.csv", file_stem(title))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToneConfig;

    #[test]
    fn build_signal_matches_axis() {
        let t = TimeAxis::new(-1.0, 1.0, 100.0).unwrap();
        for config in [
            SignalConfig::Pulse { half_width: 0.2 },
            SignalConfig::Step,
            SignalConfig::Sine {
                freq_hz: 5.0,
                amplitude: 1.0,
            },
            SignalConfig::Tones {
                tones: vec![
                    ToneConfig {
                        freq_hz: 5.0,
                        amplitude: 1.0,
                    },
                    ToneConfig {
                        freq_hz: 20.0,
                        amplitude: 0.5,
                    },
                ],
            },
        ] {
            let signal = build_signal(&config, &t).unwrap();
            assert_eq!(signal.len(), t.len(), "{config:?}");
        }
    }

    #[test]
    fn export_writes_time_and_spectrum_files() {
        let dir = tempfile::tempdir().unwrap();
        let t = TimeAxis::new(0.0, 0.1, 100.0).unwrap();
        let signal = sinusoid(&t, 10.0, 1.0);

        export_time_series(dir.path(), "Tone", &t, &signal).unwrap();
        assert!(dir.path().join("tone.csv").exists());

        let spectrum = espectro_analysis::compute_spectrum(&signal, 100.0).unwrap();
        export_spectrum(dir.path(), "Tone FFT", &spectrum).unwrap();
        assert!(dir.path().join("tone_fft_magnitude.csv").exists());
        assert!(dir.path().join("tone_fft_phase.csv").exists());
    }
}
