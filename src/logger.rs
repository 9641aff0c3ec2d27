use chrono::Local;
use colored::Colorize;
use fern::Dispatch;
use log::Level;

use crate::config::LogConfig;
use crate::error::DemoError;

fn level_label(level: Level, color: bool) -> String {
    let label = match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    if !color {
        return label.to_string();
    }
    match level {
        Level::Error => label.red().to_string(),
        Level::Warn => label.yellow().to_string(),
        Level::Info => label.green().to_string(),
        Level::Debug => label.cyan().to_string(),
        Level::Trace => label.normal().to_string(),
    }
}

/// Install the process-wide logger, writing `[time][LEVEL][target] message`
/// lines to stdout. Fails if a logger is already installed.
pub fn init(config: &LogConfig) -> Result<(), DemoError> {
    let color = config.color;

    Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                level_label(record.level(), color),
                record.target(),
                message
            ))
        })
        .level(config.level_filter())
        .chain(std::io::stdout())
        .apply()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_labels() {
        assert_eq!(level_label(Level::Warn, false), "WARN");
        assert_eq!(level_label(Level::Info, false), "INFO");
    }

    #[test]
    fn test_colored_label_keeps_text() {
        assert!(level_label(Level::Error, true).contains("ERROR"));
    }

    #[test]
    fn test_second_init_fails() {
        let config = LogConfig::default();
        let _ = init(&config);
        assert!(matches!(init(&config), Err(DemoError::Logger(_))));
    }
}
