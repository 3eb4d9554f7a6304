//! Configuration defaults, TOML parsing and loading

use crate::frontend::config::*;
use std::io::Write;

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FrontendConfig::default();
        assert_eq!(config.lexer.brace_matching, BraceMatching::Stack);
        assert_eq!(config.lexer.max_interpolation_depth, 32);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = FrontendConfig::from_toml_str("").unwrap();
        assert_eq!(config, FrontendConfig::default());
    }

    #[test]
    fn test_parse_fifo_policy() {
        let config = FrontendConfig::from_toml_str(
            r#"
            [lexer]
            brace_matching = "fifo"
            "#,
        )
        .unwrap();
        assert_eq!(config.lexer, LexerConfig::legacy());
    }

    #[test]
    fn test_reject_zero_depth() {
        let result = FrontendConfig::from_toml_str("[lexer]\nmax_interpolation_depth = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_reject_unknown_policy() {
        let result = FrontendConfig::from_toml_str("[lexer]\nbrace_matching = \"queue\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = FrontendConfig {
            lexer: LexerConfig {
                brace_matching: BraceMatching::Fifo,
                max_interpolation_depth: 4,
            },
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(FrontendConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[lexer]\nmax_interpolation_depth = 8").unwrap();
        let config = FrontendConfig::load(file.path()).unwrap();
        assert_eq!(config.lexer.max_interpolation_depth, 8);
        assert_eq!(config.lexer.brace_matching, BraceMatching::Stack);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = FrontendConfig::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
