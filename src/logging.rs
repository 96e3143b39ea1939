// Copied and edited based on https://github.com/estk/log4rs/pull/295

use std::path::Path;

use anyhow::Context;
use log::LevelFilter;
use log4rs::Handle;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        rolling_file::{
            policy::compound::{
                roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger, CompoundPolicy,
            },
            RollingFileAppender,
        },
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} - {m}\n";

/// Logs to stderr, and to a rolling file as well if `log_file` is given
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> anyhow::Result<Handle> {
    // Build a stderr logger.
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} - {m}\n")))
        .build();

    let mut builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(level)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root = Root::builder().appender("stderr");

    if let Some(file_path) = log_file {
        builder = builder.appender(Appender::builder().build(
            "log_file",
            Box::new(rolling_file_appender(file_path)?),
        ));
        root = root.appender("log_file");
    }

    let config = builder
        .build(root.build(level))
        .context("Failed to configure logging")?;

    let handle = log4rs::init_config(config).context("Failed to init_config")?;

    Ok(handle)
}

fn rolling_file_appender(file_path: &Path) -> anyhow::Result<RollingFileAppender> {
    // Archives sit next to the log, eg. `send.log` rolls to `send.log.1`
    // Pattern: https://docs.rs/log4rs/*/log4rs/append/rolling_file/policy/compound/roll/fixed_window/struct.FixedWindowRollerBuilder.html#method.build
    let archive_pattern = format!("{}.{{}}", file_path.display());

    let trigger = SizeTrigger::new(2_097_152); // 2mb (2 * 1024 * 1024)
    let roller = FixedWindowRoller::builder()
        .build(&archive_pattern, 10) // Roll based on pattern and max 10 archive files
        .context("Failed to create FixedWindowRoller")?;
    let policy = CompoundPolicy::new(Box::new(trigger), Box::new(roller));

    RollingFileAppender::builder()
        // Pattern: https://docs.rs/log4rs/*/log4rs/encode/pattern/index.html
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(file_path, Box::new(policy))
        .with_context(|| format!("Failed to open log file {file_path:?}"))
}
