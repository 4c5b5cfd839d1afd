//! Headless driver: runs the frame scheduler against a wall clock and logs
//! what a renderer would draw.

use std::path::{Path, PathBuf};

use clap::Parser;
use triaxis::util::frame_timing::FrameTiming;
use triaxis::{
    FrameScheduler, FrameSink, FrameSnapshot, Options, TriaxisCommand,
};

#[derive(Parser)]
#[command(name = "triaxis", about = "Drive the camera and markers headlessly")]
struct Args {
    /// TOML options file (defaults are used when omitted).
    #[arg(long)]
    options: Option<PathBuf>,

    /// Write the effective options to this path and exit.
    #[arg(long)]
    dump_options: Option<PathBuf>,

    /// Write the JSON schema of the UI-exposed options to this path and exit.
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Number of frames to run.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Target frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Fly to the next preset every N frames (0 disables).
    #[arg(long, default_value_t = 120)]
    preset_every: u64,

    /// Log a frame summary every N frames.
    #[arg(long, default_value_t = 30)]
    log_every: u64,
}

/// Logs a compact summary of every `every`-th frame.
struct LogSink {
    every: u64,
}

impl FrameSink for LogSink {
    fn render_frame(&mut self, frame: &FrameSnapshot) {
        if self.every == 0 || frame.frame % self.every != 0 {
            return;
        }
        let [x, y, z] = frame.markers;
        log::info!(
            "frame {:>5} t={:.2} camera {:?} ({:?}) \
             markers x={:.2} y={:.2} z={:.2}",
            frame.frame,
            frame.elapsed,
            frame.camera.position,
            frame.authority,
            x.x,
            y.y,
            z.z,
        );
    }
}

fn load_options(path: Option<&Path>) -> Options {
    let Some(path) = path else {
        return Options::default();
    };
    match Options::load(path) {
        Ok(options) => {
            log::info!("loaded options from {}", path.display());
            options
        }
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn write_schema(path: &Path) -> Result<(), String> {
    let schema = serde_json::to_string_pretty(&Options::json_schema())
        .map_err(|e| format!("failed to serialize schema: {e}"))?;
    std::fs::write(path, schema)
        .map_err(|e| format!("failed to write {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Some(path) = &args.schema {
        if let Err(e) = write_schema(path) {
            log::error!("{e}");
            std::process::exit(1);
        }
        log::info!("wrote options schema to {}", path.display());
        return;
    }

    let options = load_options(args.options.as_deref());
    if let Some(path) = &args.dump_options {
        if let Err(e) = options.sanitized().save(path) {
            log::error!("{e}");
            std::process::exit(1);
        }
        log::info!("wrote options to {}", path.display());
        return;
    }

    let mut scheduler = FrameScheduler::new(options);
    let presets: Vec<String> =
        scheduler.presets().names().map(str::to_owned).collect();
    let mut next_preset = presets.iter().cycle();

    let mut sink = LogSink {
        every: args.log_every,
    };
    let mut timing = FrameTiming::new(args.fps);

    for frame in 1..=args.frames {
        if args.preset_every > 0 && frame % args.preset_every == 0 {
            if let Some(name) = next_preset.next() {
                log::info!("flying to {name}");
                scheduler.execute(TriaxisCommand::GoToPreset {
                    name: name.clone(),
                });
            }
        }

        std::thread::sleep(timing.time_until_next_frame());
        let _ = scheduler.tick(timing.now_ms(), &mut sink);
        timing.end_frame();
    }

    log::info!(
        "ran {} frames at {:.1} fps, simulation time {:.2}",
        args.frames,
        timing.fps(),
        scheduler.clock().elapsed()
    );
}
