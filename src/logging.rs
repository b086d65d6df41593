// Logger setup plus conditional logging macros - the macros are only active in debug builds

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialise `env_logger`. `RUST_LOG` takes precedence over `verbosity`.
pub fn init(verbosity: u8) {
    let default_level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let mut builder = Builder::new();
    builder.filter_level(default_level);
    builder.parse_env(Env::default());
    builder.format_timestamp(None);
    if let Err(e) = builder.try_init() {
        eprintln!("Logger already initialised: {e}");
    }
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}
