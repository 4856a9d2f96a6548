//! crates/logging/src/macros.rs
//! Per-severity formatting macros.
//!
//! Each macro forwards a `format_args!` invocation to the matching `*f`
//! method on any [`Logger`](crate::Logger) value, so callers get format
//! templates without importing the trait at every call site.

/// Log a formatted message at the debug severity.
///
/// # Example
/// ```ignore
/// debugf!(logger, "memory usage: {}", usage);
/// ```
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::Logger as _;
        $logger.debugf(::core::format_args!($($arg)*));
    }};
}

/// Log a formatted message at the info severity.
///
/// # Example
/// ```ignore
/// infof!(logger, "connecting to {}", address);
/// ```
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::Logger as _;
        $logger.infof(::core::format_args!($($arg)*));
    }};
}

/// Log a formatted message at the notice severity.
///
/// # Example
/// ```ignore
/// noticef!(logger, "config reloaded from {}", path);
/// ```
#[macro_export]
macro_rules! noticef {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::Logger as _;
        $logger.noticef(::core::format_args!($($arg)*));
    }};
}

/// Log a formatted message at the warning severity.
///
/// # Example
/// ```ignore
/// warningf!(logger, "retrying in {}s", delay);
/// ```
#[macro_export]
macro_rules! warningf {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::Logger as _;
        $logger.warningf(::core::format_args!($($arg)*));
    }};
}

/// Log a formatted message at the error severity.
///
/// # Example
/// ```ignore
/// errorf!(logger, "connection failed: {err}");
/// ```
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::Logger as _;
        $logger.errorf(::core::format_args!($($arg)*));
    }};
}

/// Log a formatted message at the critical severity.
///
/// # Example
/// ```ignore
/// criticalf!(logger, "state corrupted: {details}");
/// ```
#[macro_export]
macro_rules! criticalf {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::Logger as _;
        $logger.criticalf(::core::format_args!($($arg)*));
    }};
}

/// Log a formatted message at the alert severity.
///
/// # Example
/// ```ignore
/// alertf!(logger, "primary store unreachable: {err}");
/// ```
#[macro_export]
macro_rules! alertf {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::Logger as _;
        $logger.alertf(::core::format_args!($($arg)*));
    }};
}

/// Log a formatted message at the emergency severity.
///
/// # Example
/// ```ignore
/// emergencyf!(logger, "shutting down: {reason}");
/// ```
#[macro_export]
macro_rules! emergencyf {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::Logger as _;
        $logger.emergencyf(::core::format_args!($($arg)*));
    }};
}
