use std::time::{Duration, Instant};

use clap::Parser;
use log::info;
use mandelbrot_spiral::{HeadlessPresenter, MandelbrotConfig, SpiralPanController, SpiralPanError};

/// Pans the spiral without a window, checking the incrementally drawn
/// frames against full renders along the way.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of frames to pan after the initial render
    #[arg(short, long, default_value = "600")]
    frames: u64,

    /// Compare against a full render every N frames (0 only checks the last frame)
    #[arg(long, default_value = "100")]
    verify_every: u64,
}

#[derive(Debug)]
struct RunSummary {
    frames: u64,
    verifications: u64,
    elapsed: Duration,
    max_radius_drift: i64,
}

fn run(args: &Args, config: MandelbrotConfig) -> Result<RunSummary, SpiralPanError> {
    let mut controller = SpiralPanController::new(config, HeadlessPresenter::new())?;
    let started = Instant::now();
    let mut verifications = 0;
    let mut max_radius_drift = 0;

    controller.start()?;

    for frame in 1..=args.frames {
        controller.step()?;
        max_radius_drift = max_radius_drift.max(controller.radius_drift().abs());

        if args.verify_every > 0 && frame % args.verify_every == 0 {
            controller.verify()?;
            verifications += 1;
        }
    }

    if args.verify_every == 0 || args.frames % args.verify_every != 0 {
        controller.verify()?;
        verifications += 1;
    }

    Ok(RunSummary {
        frames: controller.frames(),
        verifications,
        elapsed: started.elapsed(),
        max_radius_drift,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let summary = run(&args, MandelbrotConfig::default())?;

    let seconds = summary.elapsed.as_secs_f64();
    let fps = if seconds > 0.0 {
        summary.frames as f64 / seconds
    } else {
        0.0
    };

    info!(
        "{} frames in {:.2}s ({:.1} fps), {} full-render checks passed, max radius² drift {}",
        summary.frames, seconds, fps, summary.verifications, summary.max_radius_drift
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandelbrot_spiral::{Fixed, PlaneCoordinate};

    fn small_config() -> MandelbrotConfig {
        MandelbrotConfig {
            width: 48,
            height: 36,
            upper_left: PlaneCoordinate::from_f64(-1.4, 0.2),
            pixel_size: Fixed::from_raw(20),
            radius: 30,
        }
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["mandelbrot_spiral"]);

        assert_eq!(args.frames, 600);
        assert_eq!(args.verify_every, 100);
    }

    #[test]
    fn test_run_verifies_periodically() {
        let args = Args {
            frames: 40,
            verify_every: 10,
        };

        let summary = run(&args, small_config()).unwrap();

        assert_eq!(summary.frames, 40);
        assert_eq!(summary.verifications, 4);
        assert!(summary.max_radius_drift <= 2 * 30);
    }

    #[test]
    fn test_run_checks_final_frame() {
        let args = Args {
            frames: 25,
            verify_every: 0,
        };

        let summary = run(&args, small_config()).unwrap();

        assert_eq!(summary.verifications, 1);
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let args = Args {
            frames: 1,
            verify_every: 1,
        };
        let config = MandelbrotConfig {
            width: 0,
            ..small_config()
        };

        assert!(matches!(run(&args, config), Err(SpiralPanError::Config(_))));
    }
}
