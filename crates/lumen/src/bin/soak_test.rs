//! # Effects Soak Test
//!
//! Headless driver for the effects core.
//!
//! Drives the full loop at a real 60 Hz cadence:
//! 1. Scheduler gates each tick
//! 2. Pool advances and recycles
//! 3. Monitor records the tick's metrics
//!
//! Target: no unbounded memory growth, no compounding slow frames.
//!
//! Usage: `soak_test [config.toml]`

use std::time::Duration;

use lumen::{EffectsConfig, EffectsLoop};

/// Frames to drive before reporting.
const SOAK_FRAMES: u32 = 300;

/// Approximate 60 Hz cadence between frames.
const FRAME_PAUSE: Duration = Duration::from_millis(16);

fn main() {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                     LUMEN EFFECTS SOAK TEST                      ║");
    println!("║        pool -> scheduler -> telemetry, headless, 60 Hz           ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");

    let config = match std::env::args().nth(1) {
        Some(path) => match EffectsConfig::load(&path) {
            Ok(config) => {
                println!("  config: {path}");
                config
            }
            Err(error) => {
                eprintln!("failed to load {path}: {error}");
                std::process::exit(1);
            }
        },
        None => {
            println!("  config: built-in defaults");
            EffectsConfig::default()
        }
    };

    let mut fx = match EffectsLoop::new(&config) {
        Ok(fx) => fx,
        Err(error) => {
            eprintln!("failed to build effects loop: {error}");
            std::process::exit(1);
        }
    };

    fx.enable();

    for _ in 0..SOAK_FRAMES {
        let _ = fx.run_frame();
        std::thread::sleep(FRAME_PAUSE);
    }

    fx.disable();

    let summary = fx.summary();
    let scheduler = fx.scheduler();

    println!();
    println!("┌─ TELEMETRY ────────────────────────────────────────────────────┐");
    println!("│ Samples buffered:   {}", summary.sample_count);
    println!("│ Average FPS:        {:.1}", summary.average_fps);
    println!("│ Average tick:       {:.2} ms", summary.average_render_time_ms);
    match summary.memory_mb {
        Some(mb) => println!("│ Resident memory:    {mb:.1} MiB"),
        None => println!("│ Resident memory:    unavailable"),
    }
    println!("│ Active particles:   {}", summary.last_particle_count);
    println!("└────────────────────────────────────────────────────────────────┘");
    println!("┌─ SCHEDULER ────────────────────────────────────────────────────┐");
    println!("│ Ticks processed:    {}", scheduler.ticks_processed());
    println!("│ Frames run:         {}", scheduler.frames_run());
    println!("│ Frames skipped:     {}", scheduler.frames_skipped());
    println!("└────────────────────────────────────────────────────────────────┘");
}
