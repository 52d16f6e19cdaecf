pub mod app;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod geometry;
pub mod init_config;
pub mod particle;
pub mod profiler;
pub mod renderer;
pub mod simulation;

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
