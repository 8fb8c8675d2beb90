//! Terminal logging for the `holdem` binary.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Maps the `-v` count to a level: warnings by default, `-v` info, `-vv`
/// and beyond debug.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Installs a stderr logger. Only the first call in a process takes
/// effect.
pub fn init(verbose: u8) {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let _ = TermLogger::init(
        level_for(verbose),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
