//! `format!`-style and print-line-style shorthands for the logger entry points.
//!
//! ```
//! use glogger::{BufferSink, Logger};
//!
//! let logger = Logger::new(BufferSink::new(), "app");
//! let port = 8080;
//! glogger::infof!(logger, "listening on {port}");
//! glogger::warnln!(logger, "retrying", 3, "times");
//! ```

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorln {
    ($logger:expr $(, $operand:expr)* $(,)?) => {
        $logger.errorln(&[$(&$operand as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warnln {
    ($logger:expr $(, $operand:expr)* $(,)?) => {
        $logger.warnln(&[$(&$operand as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! infoln {
    ($logger:expr $(, $operand:expr)* $(,)?) => {
        $logger.infoln(&[$(&$operand as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debugln {
    ($logger:expr $(, $operand:expr)* $(,)?) => {
        $logger.debugln(&[$(&$operand as &dyn ::std::fmt::Display),*])
    };
}

/// Writes the line, then panics with it.
#[macro_export]
macro_rules! panicf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panicf(::std::format_args!($($arg)+))
    };
}

/// Writes the line, then panics with it.
#[macro_export]
macro_rules! panicln {
    ($logger:expr $(, $operand:expr)* $(,)?) => {
        $logger.panicln(&[$(&$operand as &dyn ::std::fmt::Display),*])
    };
}

/// Writes the line, then asks the logger's terminator to exit with status 1.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
}

/// Writes the line, then asks the logger's terminator to exit with status 1.
#[macro_export]
macro_rules! fatalln {
    ($logger:expr $(, $operand:expr)* $(,)?) => {
        $logger.fatalln(&[$(&$operand as &dyn ::std::fmt::Display),*])
    };
}
