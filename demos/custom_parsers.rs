//! Example registering parsers for custom types

use std::time::Duration;

use envfill::{ParserRegistry, Populate};

#[derive(Debug, Default)]
enum Mode {
    #[default]
    Development,
    Production,
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    match s {
        "dev" | "development" => Ok(Mode::Development),
        "prod" | "production" => Ok(Mode::Production),
        other => Err(format!("unknown mode {other:?}")),
    }
}

// Seconds, e.g. `REQUEST_TIMEOUT=30`
fn parse_seconds(s: &str) -> Result<Duration, std::num::ParseIntError> {
    s.parse().map(Duration::from_secs)
}

#[derive(Debug, Default, Populate)]
struct Config {
    #[environment = "APP_MODE, dev"]
    pub mode: Mode,

    #[environment = "REQUEST_TIMEOUT, 30"]
    pub timeout: Duration,

    // Infallible parser: any value is accepted
    #[environment = "FEATURE_FLAG, off"]
    pub feature_enabled: bool,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("APP_MODE", "prod");
    std::env::set_var("FEATURE_FLAG", "on");

    // A local registry instead of the process-wide one
    let mut registry = ParserRegistry::new();
    registry.register(parse_mode);
    registry.register(parse_seconds);
    registry.register_infallible(|s: &str| matches!(s, "on" | "true" | "1"));

    let mut config = Config::default();
    envfill::populate_with(&mut config, &registry)?;

    println!("Configuration loaded:");
    println!("  Mode: {:?}", config.mode);
    println!("  Timeout: {:?}", config.timeout);
    println!("  Feature Enabled: {}", config.feature_enabled);

    Ok(())
}
