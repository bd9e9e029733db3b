//! Fourier-property verification command.

use clap::Args;
use tracing::info;

use super::common::AxisArgs;
use espectro_analysis::{
    PropertyReport, verify_linearity, verify_shift_phase, verify_time_scaling, verify_time_shift,
};
use espectro_core::{rectangular_pulse, sinusoid};

#[derive(Args)]
pub struct PropertiesArgs {
    /// Frequency of the base sinusoid in Hz
    #[arg(long, default_value = "5.0")]
    freq: f64,

    /// Half width of the pulse used in the linearity check
    #[arg(long, default_value = "0.2")]
    half_width: f64,

    /// Circular shift in samples for the time-shift checks
    #[arg(long, default_value = "200")]
    shift: usize,

    /// Frequency scaling factor for the time-scaling check
    #[arg(long, default_value = "2.0")]
    alpha: f64,

    /// Normalized deviation tolerance for the linearity and shift checks
    #[arg(long, default_value = "1e-6")]
    tolerance: f64,

    #[command(flatten)]
    axis: AxisArgs,
}

fn verdict(report: &PropertyReport) -> &'static str {
    if report.passed { "PASS" } else { "FAIL" }
}

pub fn run(args: PropertiesArgs) -> anyhow::Result<()> {
    let t = args.axis.build()?;
    let fs = t.sample_rate();

    let pulse = rectangular_pulse(&t, args.half_width);
    let sine = sinusoid(&t, args.freq, 1.0);
    info!(samples = t.len(), "verifying Fourier properties");

    let linearity = verify_linearity(&pulse, &sine, fs, args.tolerance)?;
    let shift_mag = verify_time_shift(&sine, args.shift, fs, args.tolerance)?;
    let shift_phase = verify_shift_phase(&sine, args.shift, fs, args.tolerance)?;
    let scaling = verify_time_scaling(&t, args.freq, args.alpha)?;

    println!("Fourier property verification");
    println!("=============================");
    println!(
        "  Linearity (pulse + sine):        {}  deviation {:.3e}",
        verdict(&linearity),
        linearity.deviation
    );
    println!(
        "  Time shift, magnitude ({} smp):  {}  deviation {:.3e}",
        args.shift,
        verdict(&shift_mag),
        shift_mag.deviation
    );
    println!(
        "  Time shift, phase law:           {}  deviation {:.3e}",
        verdict(&shift_phase),
        shift_phase.deviation
    );
    println!(
        "  Time scaling (x{}):              {}  peak off by {:.3} Hz",
        args.alpha,
        verdict(&scaling),
        scaling.deviation
    );
    println!();
    println!("Checks are informational; deviations reflect finite-precision DFTs.");

    Ok(())
}
