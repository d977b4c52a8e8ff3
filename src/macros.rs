//! Call-site macros: `file!()`/`line!()` expand where the macro is used.

/// Opens a record at the macro's call site.
///
/// ```
/// use rotalog::{Level, Logger};
///
/// let logger = Logger::console(Level::Debug);
/// rotalog::stream!(logger, Info).append("This is INFO").append(5);
/// ```
#[macro_export]
macro_rules! stream {
    ($logger:expr, $level:ident) => {
        $logger.stream_at($crate::Level::$level, ::core::file!(), ::core::line!())
    };
}

/// Opens a record at the call site and writes `format!`-style arguments into it.
/// Arguments are not formatted if the level is filtered.
///
/// ```
/// use rotalog::{Level, Logger};
///
/// let logger = Logger::console(Level::Info);
/// rotalog::log!(logger, Error, "request {} failed after {}ms", 17, 250);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:ident, $($arg:tt)+) => {{
        let mut record = $crate::stream!($logger, $level);
        let _ = ::core::fmt::Write::write_fmt(&mut record, ::core::format_args!($($arg)+));
    }};
}
