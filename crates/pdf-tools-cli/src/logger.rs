use chrono::Local;
use log::{LevelFilter, Metadata, Record};
use std::io::Write;

/// Writes log records to stderr with a timestamp
pub struct CliLogger {
    level: LevelFilter,
}

impl CliLogger {
    pub fn new(verbose: bool) -> Self {
        Self {
            level: if verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }

    fn format(record: &Record) -> String {
        format!(
            "{} {:<5} {}",
            Local::now().format("%H:%M:%S"),
            record.level(),
            record.args()
        )
    }
}

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = Self::format(record);
            let mut stderr = std::io::stderr().lock();
            // Nothing sensible to do if stderr is gone
            let _ = writeln!(stderr, "{}", line);
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log};

    fn enabled(logger: &CliLogger, level: Level) -> bool {
        logger.enabled(&Metadata::builder().level(level).build())
    }

    #[test]
    fn test_level_filter() {
        let quiet = CliLogger::new(false);
        assert!(enabled(&quiet, Level::Info));
        assert!(enabled(&quiet, Level::Error));
        assert!(!enabled(&quiet, Level::Debug));

        let verbose = CliLogger::new(true);
        assert!(enabled(&verbose, Level::Debug));
        assert!(!enabled(&verbose, Level::Trace));
    }
}
