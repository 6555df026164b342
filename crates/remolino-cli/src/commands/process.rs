//! File-based effect processing command.

use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use remolino_core::Effect;
use remolino_effects::{DelayMode, ModDelay};
use remolino_io::{WavSpec, read_wav_stereo, write_wav_stereo};
use std::path::PathBuf;

/// Arguments for `remolino process`.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Delay mode (chorus, slapback, flanger, vibrato)
    #[arg(short, long, default_value = "chorus")]
    mode: String,

    /// LFO rate in Hz (0.1-20)
    #[arg(long, default_value = "10.0")]
    rate: f32,

    /// Modulation depth (0-1)
    #[arg(long, default_value = "0.5")]
    depth: f32,

    /// Feedback amount (0-1)
    #[arg(long, default_value = "0.5")]
    feedback: f32,

    /// Dry/wet mix (0 = dry, 1 = wet)
    #[arg(long, default_value = "0.5")]
    mix: f32,

    /// Right-channel LFO phase offset in cycles (0-1)
    #[arg(long, default_value = "0.0")]
    phase_offset: f32,

    /// Processing block size
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

fn parse_mode(name: &str) -> anyhow::Result<DelayMode> {
    match name.to_ascii_lowercase().as_str() {
        "chorus" => Ok(DelayMode::Chorus),
        "slapback" => Ok(DelayMode::Slapback),
        "flanger" => Ok(DelayMode::Flanger),
        "vibrato" => Ok(DelayMode::Vibrato),
        _ => anyhow::bail!(
            "Unknown mode: '{}' (expected chorus, slapback, flanger, or vibrato)",
            name
        ),
    }
}

/// Run the process command.
pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let mode = parse_mode(&args.mode)?;

    // Read input file
    println!("Reading {}...", args.input.display());
    let (mut samples, spec) = read_wav_stereo(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let sample_rate = spec.sample_rate as f32;
    let frames = samples.len();

    println!(
        "  {} frames, {} Hz, {:.2}s",
        frames,
        spec.sample_rate,
        frames as f32 / sample_rate
    );
    tracing::debug!(frames, sample_rate, "loaded input");

    // Set up the processor
    let mut effect = ModDelay::new();
    effect.prepare(sample_rate, args.block_size);

    let params = effect.params();
    params.set_mode(mode);
    params.set_rate_hz(args.rate);
    params.set_depth(args.depth);
    params.set_feedback(args.feedback);
    params.set_dry_wet(args.mix);
    params.set_phase_offset(args.phase_offset);

    println!(
        "Processing with mode={} rate={} Hz depth={} feedback={} mix={}...",
        mode.label(),
        params.rate_hz(),
        params.depth(),
        params.feedback(),
        params.dry_wet()
    );

    // Process with progress bar
    let pb = ProgressBar::new(frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("##-"),
    );

    let input_rms = stereo_rms(&samples.left, &samples.right);
    let input_peak = stereo_peak(&samples.left, &samples.right);

    let block_size = args.block_size.max(1);
    for (left_chunk, right_chunk) in samples
        .left
        .chunks_mut(block_size)
        .zip(samples.right.chunks_mut(block_size))
    {
        effect.process_stereo_block(left_chunk, right_chunk);
        pb.inc(left_chunk.len() as u64);
    }

    pb.finish_with_message("done");

    // Calculate stats
    let output_rms = stereo_rms(&samples.left, &samples.right);
    let output_peak = stereo_peak(&samples.left, &samples.right);

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(input_rms),
        linear_to_db(input_peak)
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(output_rms),
        linear_to_db(output_peak)
    );

    // Write output file
    let out_spec = WavSpec {
        channels: 2,
        sample_rate: spec.sample_rate,
        bits_per_sample: args.bit_depth,
    };

    println!("\nWriting {}...", args.output.display());
    write_wav_stereo(&args.output, &samples, out_spec)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("Done!");

    Ok(())
}

fn stereo_rms(left: &[f32], right: &[f32]) -> f32 {
    let n = left.len() + right.len();
    if n == 0 {
        return 0.0;
    }
    let sum: f32 = left.iter().chain(right.iter()).map(|s| s * s).sum();
    (sum / n as f32).sqrt()
}

fn stereo_peak(left: &[f32], right: &[f32]) -> f32 {
    left.iter()
        .chain(right.iter())
        .map(|s| s.abs())
        .fold(0.0, f32::max)
}

fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        -120.0
    } else {
        20.0 * linear.log10()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("chorus").unwrap(), DelayMode::Chorus);
        assert_eq!(parse_mode("FLANGER").unwrap(), DelayMode::Flanger);
        assert!(parse_mode("phaser").is_err());
    }

    #[test]
    fn test_stereo_stats() {
        let left = [0.5, -0.5];
        let right = [0.5, -0.5];
        assert!((stereo_rms(&left, &right) - 0.5).abs() < 1e-6);
        assert!((stereo_peak(&left, &right) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_linear_to_db() {
        assert!((linear_to_db(1.0) - 0.0).abs() < 1e-6);
        assert_eq!(linear_to_db(0.0), -120.0);
    }
}
