//! Test signal generation command.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use tracing::info;

use super::common::{AxisArgs, export_time_series};
use espectro_core::{STEP_AT_ZERO, WhiteNoise, rectangular_pulse, sinusoid, unit_step};

#[derive(Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    command: GenerateCommand,
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate a rectangular pulse centered on t = 0
    Pulse {
        /// Output directory for the CSV series
        #[arg(value_name = "OUT_DIR")]
        out_dir: PathBuf,

        /// Half width of the pulse in seconds
        #[arg(long, default_value = "0.2")]
        half_width: f64,

        #[command(flatten)]
        axis: AxisArgs,
    },

    /// Generate a Heaviside unit step
    Step {
        /// Output directory for the CSV series
        #[arg(value_name = "OUT_DIR")]
        out_dir: PathBuf,

        /// Value of the step at exactly t = 0
        #[arg(long, default_value_t = STEP_AT_ZERO)]
        at_zero: f64,

        #[command(flatten)]
        axis: AxisArgs,
    },

    /// Generate a sine tone
    Sine {
        /// Output directory for the CSV series
        #[arg(value_name = "OUT_DIR")]
        out_dir: PathBuf,

        /// Frequency in Hz
        #[arg(long, default_value = "5.0")]
        freq: f64,

        /// Peak amplitude
        #[arg(long, default_value = "1.0")]
        amplitude: f64,

        #[command(flatten)]
        axis: AxisArgs,
    },

    /// Generate seeded white noise
    Noise {
        /// Output directory for the CSV series
        #[arg(value_name = "OUT_DIR")]
        out_dir: PathBuf,

        /// Peak amplitude
        #[arg(long, default_value = "1.0")]
        amplitude: f64,

        /// Seed for the generator
        #[arg(long, default_value = "42")]
        seed: u64,

        #[command(flatten)]
        axis: AxisArgs,
    },
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    match args.command {
        GenerateCommand::Pulse {
            out_dir,
            half_width,
            axis,
        } => {
            let t = axis.build()?;
            let signal = rectangular_pulse(&t, half_width);
            info!(half_width, samples = t.len(), "generated rectangular pulse");
            export_time_series(&out_dir, "Rectangular pulse", &t, &signal)?;
            println!(
                "Wrote rectangular pulse ({} samples, half width {} s)",
                t.len(),
                half_width
            );
        }
        GenerateCommand::Step {
            out_dir,
            at_zero,
            axis,
        } => {
            let t = axis.build()?;
            let signal = unit_step(&t, at_zero);
            info!(at_zero, samples = t.len(), "generated unit step");
            export_time_series(&out_dir, "Unit step", &t, &signal)?;
            println!("Wrote unit step ({} samples, {} at t = 0)", t.len(), at_zero);
        }
        GenerateCommand::Sine {
            out_dir,
            freq,
            amplitude,
            axis,
        } => {
            let t = axis.build()?;
            let signal = sinusoid(&t, freq, amplitude);
            info!(freq, amplitude, samples = t.len(), "generated sinusoid");
            export_time_series(&out_dir, "Sinusoid", &t, &signal)?;
            println!(
                "Wrote {freq} Hz sinusoid ({} samples, amplitude {amplitude})",
                t.len()
            );
        }
        GenerateCommand::Noise {
            out_dir,
            amplitude,
            seed,
            axis,
        } => {
            let t = axis.build()?;
            let mut noise = WhiteNoise::new(seed);
            let signal: Vec<f64> = noise.fill(t.len()).iter().map(|x| x * amplitude).collect();
            info!(seed, amplitude, samples = t.len(), "generated white noise");
            export_time_series(&out_dir, "White noise", &t, &signal)?;
            println!(
                "Wrote white noise ({} samples, seed {seed}, amplitude {amplitude})",
                t.len()
            );
        }
    }
    Ok(())
}
