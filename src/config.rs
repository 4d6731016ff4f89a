use std::env;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub rust_log: String,
    pub allocation_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // A missing .env is fine, the variables may come from the environment.
        dotenvy::dotenv().ok();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "debug".into());
        let allocation_seed = env::var("ALLOCATION_SEED")
            .ok()
            .map(|raw| parse_seed(&raw))
            .transpose()?;

        Ok(Self {
            bind_addr,
            rust_log,
            allocation_seed,
        })
    }
}

fn parse_seed(raw: &str) -> anyhow::Result<u64> {
    raw.trim()
        .parse()
        .with_context(|| format!("ALLOCATION_SEED must be an unsigned integer, got {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_seed_with_whitespace() {
        assert_eq!(parse_seed(" 42 ").unwrap(), 42);
    }

    #[test]
    fn rejects_non_numeric_seed() {
        let err = parse_seed("abc").unwrap_err();
        assert!(err.to_string().contains("ALLOCATION_SEED"));
    }
}
