//! Logger setup tests

use crate::util::logger::*;

#[cfg(test)]
mod logger_tests {
    use super::*;

    #[test]
    fn test_level_conversion() {
        assert_eq!(tracing::Level::from(LogLevel::Trace), tracing::Level::TRACE);
        assert_eq!(tracing::Level::from(LogLevel::Warn), tracing::Level::WARN);
    }

    #[test]
    fn test_repeated_init_is_harmless() {
        init_debug();
        init();
        init_trace();
    }
}
