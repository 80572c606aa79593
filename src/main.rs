//! Pointer-trace replay driver.
//!
//! Reads a newline-delimited JSON pointer trace and feeds it through a
//! [`GestureEngine`], logging every output. Useful for tuning thresholds
//! against captured input and for reproducing classification reports.
//!
//! Trace records:
//!
//! ```json
//! {"kind": "down", "id": 0, "x": 120.0, "y": 340.0}
//! {"kind": "move", "id": 0, "x": 170.0, "y": 340.0}
//! {"kind": "tick", "dt": 0.016}
//! {"kind": "up", "id": 0}
//! ```

use std::path::{Path, PathBuf};

use flickstick::geometry::Identity;
use flickstick::mirror::{JoystickMirror, MovementRecorder};
use flickstick::output::route_all;
use flickstick::{GestureEngine, Options, PointerEvent, PointerId};
use glam::Vec2;
use serde::Deserialize;

/// One line of a replay trace.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum TraceRecord {
    Down { id: PointerId, x: f32, y: f32 },
    Move { id: PointerId, x: f32, y: f32 },
    Up { id: PointerId },
    Tick { dt: f32 },
}

fn parse_args() -> Result<(PathBuf, Option<PathBuf>), String> {
    let mut trace_path: Option<PathBuf> = None;
    let mut options_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--options" => {
                let Some(path) = args.next() else {
                    return Err("missing path after --options".into());
                };
                options_path = Some(PathBuf::from(path));
            }
            _ => trace_path = Some(PathBuf::from(arg)),
        }
    }

    trace_path
        .map(|p| (p, options_path))
        .ok_or_else(|| {
            "Usage: flickstick <trace.jsonl> [--options <options.toml>]"
                .into()
        })
}

fn load_options(path: Option<&Path>) -> Result<Options, String> {
    match path {
        Some(path) => Options::load(path).map_err(|e| e.to_string()),
        None => Ok(Options::default()),
    }
}

fn replay(
    engine: &mut GestureEngine<Identity>,
    trace: &str,
) -> Result<(), String> {
    let mut visual = JoystickMirror::new();
    let mut recorder = MovementRecorder::new();
    let mut frames = 0u64;
    let mut gesture_count = 0usize;

    for (lineno, line) in trace.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: TraceRecord = serde_json::from_str(line)
            .map_err(|e| format!("line {}: {e}", lineno + 1))?;

        let outputs = match record {
            TraceRecord::Down { id, x, y } => {
                engine.handle_event(PointerEvent::Down {
                    id,
                    position: Vec2::new(x, y),
                })
            }
            TraceRecord::Move { id, x, y } => {
                engine.handle_event(PointerEvent::Move {
                    id,
                    position: Vec2::new(x, y),
                })
            }
            TraceRecord::Up { id } => {
                engine.handle_event(PointerEvent::Up { id })
            }
            TraceRecord::Tick { dt } => {
                frames += 1;
                engine.tick(dt)
            }
        };

        for output in outputs {
            log::debug!("line {}: {output:?}", lineno + 1);
        }
        route_all(outputs, &mut visual, &mut recorder);

        for gesture in recorder.take_gestures() {
            gesture_count += 1;
            log::info!("line {}: {gesture:?}", lineno + 1);
        }
    }

    log::info!(
        "replayed {frames} frames: {gesture_count} gestures, final direction {}, visual {}",
        recorder.direction(),
        if visual.is_active() { "active" } else { "hidden" },
    );
    Ok(())
}

fn run() -> Result<(), String> {
    let (trace_path, options_path) = parse_args()?;
    let options = load_options(options_path.as_deref())?;

    let mut engine = GestureEngine::new(options, Identity)
        .map_err(|e| e.to_string())?;

    let trace = std::fs::read_to_string(&trace_path)
        .map_err(|e| format!("{}: {e}", trace_path.display()))?;
    replay(&mut engine, &trace)
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
