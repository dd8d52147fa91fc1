//! Service Configuration
//!
//! Command-line flags with environment-variable fallbacks.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "manual-assistant", version, about = "Answers questions from a sectioned manual")]
pub struct Config {
    /// Manual to index. Sections start with lines beginning with `### `.
    #[arg(long, env = "MANUAL_DOCUMENT", default_value = "manual.txt")]
    pub document: PathBuf,

    /// Address the HTTP server binds to.
    #[arg(long, env = "MANUAL_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Minimum cosine similarity for a section to count as an answer.
    #[arg(long, env = "MANUAL_MIN_SCORE", default_value_t = 0.0, value_parser = parse_score)]
    pub min_score: f64,

    /// Default log filter, overridden by `RUST_LOG`.
    #[arg(long, env = "MANUAL_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

fn parse_score(value: &str) -> Result<f64, String> {
    let score: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;

    if !(0.0..=1.0).contains(&score) {
        return Err(format!("{score} is outside the range 0.0..=1.0"));
    }

    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["manual-assistant"]).unwrap();

        assert_eq!(config.bind, "127.0.0.1:8000".parse().unwrap());
        assert_eq!(config.min_score, 0.0);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "manual-assistant",
            "--document",
            "/srv/handbook.txt",
            "--bind",
            "0.0.0.0:9000",
            "--min-score",
            "0.25",
        ])
        .unwrap();

        assert_eq!(config.document, PathBuf::from("/srv/handbook.txt"));
        assert_eq!(config.bind.port(), 9000);
        assert_eq!(config.min_score, 0.25);
    }

    #[test]
    fn test_min_score_must_be_in_range() {
        for bad in ["1.5", "-0.1", "high"] {
            let result = Config::try_parse_from(["manual-assistant", "--min-score", bad]);
            assert!(result.is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_bind_must_be_socket_address() {
        let result = Config::try_parse_from(["manual-assistant", "--bind", "localhost"]);
        assert!(result.is_err());
    }
}
