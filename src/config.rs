use clap::Parser;

// ============================================================================
// Service Configuration
// ============================================================================
//
// Network settings only. Exchange rate, price ceiling and the supported
// currencies are fixed in the domain layer.
//
// ============================================================================

#[derive(Parser, Debug, Clone)]
#[command(name = "order-gate")]
#[command(version)]
#[command(about = "Validates and normalizes order submissions", long_about = None)]
pub struct Config {
    /// Address the API and metrics servers bind to
    #[arg(long, env = "ORDER_GATE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port for POST /api/orders
    #[arg(short, long, env = "ORDER_GATE_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Port for /metrics and /health
    #[arg(long, env = "ORDER_GATE_METRICS_PORT", default_value_t = 9090)]
    pub metrics_port: u16,

    /// API worker threads (defaults to the number of physical cores)
    #[arg(long, env = "ORDER_GATE_WORKERS")]
    pub workers: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["order-gate"]).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.metrics_port, 9090);
        assert_eq!(config.workers, None);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "order-gate",
            "--host",
            "0.0.0.0",
            "-p",
            "8080",
            "--metrics-port",
            "9191",
            "--workers",
            "2",
        ])
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.metrics_port, 9191);
        assert_eq!(config.workers, Some(2));
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(Config::try_parse_from(["order-gate", "--port", "http"]).is_err());
    }
}
