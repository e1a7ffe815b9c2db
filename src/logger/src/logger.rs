use log::LevelFilter;
use log::Level;
use env_logger::{Builder, Env, fmt::Color};
use std::io::Write;
use thiserror::Error;

/// Environment variable overriding the verbosity given on the command line (e.g. `PEDIGREE_LOG=pedigree=trace`)
pub const LOG_ENV_VAR: &str = "PEDIGREE_LOG";

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("A global logger was already initialized")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

#[derive(Debug)]
pub struct Logger;

impl Logger {
    /// Install the global logger, with a maximum level derived from `verbosity`:
    /// 0: error, 1: warn, 2: info, 3: debug, 4 and up: trace.
    ///
    /// # Errors
    /// - `LoggerError::AlreadyInitialized` if a global logger was set beforehand.
    pub fn init(verbosity: u8) -> Result<(), LoggerError> {
        let log_level = Self::u8_to_loglevel(verbosity);
        let env = Env::default()
            .filter(LOG_ENV_VAR);

        Builder::new().filter_level(log_level)
            .format(|buf, record| {
                let traceback: String;
                let set_intensity: bool;
                if record.level() == LevelFilter::Error {
                    traceback = format!("(@ {}:{}) ", record.file().unwrap_or("unknown"), record.line().unwrap_or(0));
                    set_intensity = true;
                } else {
                    traceback = String::new();
                    set_intensity = false;
                };

                let mut arg_style = buf.style();
                arg_style.set_intense(set_intensity);

                let mut level_style = buf.style();
                let color = match record.level() {
                    Level::Error => Color::Red,
                    Level::Warn  => Color::Yellow,
                    Level::Info  => Color::Green,
                    Level::Debug => Color::Blue,
                    Level::Trace => Color::Cyan
                };
                level_style.set_color(color).set_bold(true);

                writeln!(
                    buf,
                    "[{} {: <5} {}] {traceback}{}",
                    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                    level_style.value(record.level()),
                    record.target(),
                    arg_style.value(record.args())
                )
            })
            .parse_env(env)
            .try_init()?;
        Ok(())
    }

    /// Convert a verbosity count into a `log::LevelFilter`.
    pub fn u8_to_loglevel(verbosity: u8) -> LevelFilter {
        match verbosity {
            0            => LevelFilter::Error,
            1            => LevelFilter::Warn,
            2            => LevelFilter::Info,
            3            => LevelFilter::Debug,
            4..= u8::MAX => LevelFilter::Trace
        }
    }

    pub fn set_level(verbosity: u8) {
        log::set_max_level(Self::u8_to_loglevel(verbosity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level(){
        let _ = Logger::init(0);
        assert!(matches!(Logger::init(0), Err(LoggerError::AlreadyInitialized(_))));
        for level in 0..u8::MAX {
            Logger::set_level(level);

            let expected_level = match level {
                0           => LevelFilter::Error,
                1           => LevelFilter::Warn,
                2           => LevelFilter::Info,
                3           => LevelFilter::Debug,
                4..=u8::MAX => LevelFilter::Trace
            };

            assert_eq!(log::max_level(), expected_level);
        }
    }
}
