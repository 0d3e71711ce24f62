//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `planner_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use std::env;

fn main() {
    let log_dir = env::temp_dir().join("planner-logs");
    match planner_core::init_logging(
        planner_core::default_log_level(),
        &log_dir.to_string_lossy(),
    ) {
        Ok(()) => {
            if let Some((level, dir)) = planner_core::logging_status() {
                println!("planner_core logging level={} dir={}", level, dir.display());
            }
        }
        Err(err) => eprintln!("planner_core logging unavailable: {err}"),
    }

    println!("planner_core version={}", planner_core::core_version());
}
