use std::{env, time::SystemTime};

use colored::{Color, Colorize};
use fern::colors::{Color as FernColor, ColoredLevelConfig};
use log::LevelFilter;

const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
const LOG_FILE: &str = "output.log";

fn level_from_env() -> LevelFilter {
    env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

pub fn setup_logger() -> Result<(), fern::InitError> {
    let colors = ColoredLevelConfig::new()
        .info(FernColor::Green)
        .warn(FernColor::Yellow)
        .error(FernColor::Red)
        .debug(FernColor::Blue);

    fern::Dispatch::new()
        .level(level_from_env())
        // hyper and reqwest are chatty on debug
        .level_for("hyper", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Warn)
        .chain(
            fern::Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{} {} {}] {}",
                        humantime::format_rfc3339_seconds(SystemTime::now()),
                        colors.color(record.level()),
                        record.target().color(Color::BrightBlack),
                        message
                    ))
                })
                .chain(std::io::stdout()),
        )
        .chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} {} {}] {}",
                        humantime::format_rfc3339_seconds(SystemTime::now()),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(fern::log_file(LOG_FILE)?),
        )
        .apply()?;

    Ok(())
}
