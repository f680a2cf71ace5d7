// SPDX-License-Identifier: MPL-2.0
//! Logger initialization.
//!
//! `RUST_LOG` is read first; an explicit `--log-level` overrides it. Chatty
//! rendering and HTTP crates are capped so that application diagnostics stay
//! readable.

use log::LevelFilter;
use std::io::Write;

/// Default level when neither `RUST_LOG` nor `--log-level` is given.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Crates whose output is capped regardless of the chosen level.
const QUIET_MODULES: [(&str, LevelFilter); 5] = [
    ("wgpu", LevelFilter::Warn),
    ("naga", LevelFilter::Warn),
    ("cosmic_text", LevelFilter::Warn),
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
];

/// Parses a `--log-level` value (case-insensitive).
#[must_use]
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

/// Initializes the global logger.
///
/// Returns `false` if a logger was already installed (tests, repeated calls).
pub fn init(level: Option<LevelFilter>) -> bool {
    let mut builder = env_logger::Builder::from_default_env();

    if let Some(level) = level {
        builder.filter_level(level);
    } else if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(DEFAULT_LEVEL);
    }
    for (module, cap) in QUIET_MODULES {
        builder.filter_module(module, cap);
    }

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} [{}] {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    builder.try_init().is_ok()
}
