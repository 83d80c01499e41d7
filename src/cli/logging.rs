use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Pick the log level for the given verbosity flags
pub fn level_for(debug: bool, quiet: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging with the specified level
pub fn init_logging(debug: bool, quiet: bool) -> LevelFilter {
    let log_level = level_for(debug, quiet);

    // Rendered output goes to stdout, the "stderr" feature keeps logs off it.
    // A logger may already be installed when called more than once.
    let _ = SimpleLogger::new()
        .with_level(log_level)
        .without_timestamps()
        .env()
        .init();

    log_level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(false, false), LevelFilter::Info);
        assert_eq!(level_for(true, false), LevelFilter::Debug);
        assert_eq!(level_for(false, true), LevelFilter::Warn);
    }
}
