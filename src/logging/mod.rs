use std::fmt::Write as FmtWrite;

use anyhow::Result;
use flexi_logger::{DeferredNow, Logger, Record};
use textwrap::{termwidth, Options};

/// Setup console logging.
///
/// The library itself only emits `trace` records, so set RUST_LOG=trace to
/// see them.
pub fn setup() -> Result<()> {
    Logger::try_with_env_or_str("info")?
        .format(multiline_format)
        .start()?;

    log::info!(
        "Adjust the log level by setting RUST_LOG. By default RUST_LOG=info"
    );

    Ok(())
}

/// A formatting function for flexi_logger which wraps each record to the
/// terminal width. Multi-line values such as matrices keep their shape
/// because textwrap preserves embedded newlines.
pub fn multiline_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let size = termwidth().min(74);
    let wrap_options = Options::new(size)
        .initial_indent("┏ ")
        .subsequent_indent("┃ ");

    let mut full_line = String::new();
    writeln!(
        full_line,
        "{} [{}] [{}:{}]",
        record.level(),
        now.now().format("%H:%M:%S%.6f"),
        record.module_path().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
    )
    .and_then(|_| write!(full_line, "{}", record.args()))
    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;

    writeln!(w, "{}", textwrap::fill(&full_line, wrap_options))
}
