//! Reallocation tracing, compiled away unless the `logging` feature is on.

macro_rules! debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::debug!($($arg)+);
    };
}
