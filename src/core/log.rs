use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

pub fn init(debug_mode: bool) {
    let filter_level = if debug_mode {
        log::LevelFilter::Debug
    }
    else {
        log::LevelFilter::Info
    };

    // A second init (double attach, or the early error path) is a no-op.
    let _ = TermLogger::init(filter_level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}
