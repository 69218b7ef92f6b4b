use log::LevelFilter;

/// Log level for the `-X/--debug` flag.
pub fn level_for(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initializes `env_logger`; `RUST_LOG`, when set, overrides the flag.
pub fn init_logger(debug: bool) {
    env_logger::Builder::new()
        .filter_level(level_for(debug))
        .format_timestamp(None)
        .parse_default_env()
        .init();
}
