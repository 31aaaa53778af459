use chrono::Local;
use eyre::Result;
use fern::Dispatch;

/// Sets up the application logger.
///
/// Log lines go to stderr so that stdout carries nothing but the resolved
/// pool address and the two price lines. The level comes from `RUST_LOG`
/// and defaults to `Info`.
///
/// # Errors
/// * If a logger has already been installed for this process
pub fn setup_logger() -> Result<()> {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::LevelFilter::Info);

    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                message
            ));
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
