//! # Config Commands

use std::io::Write;

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// `shopfront config` prints the effective configuration as TOML.
pub fn show(config: &AppConfig, out: &mut impl Write) -> CliResult<()> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| CliError::InvalidConfig(e.to_string()))?;
    write!(out, "{rendered}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_prints_storage_key() {
        let config = AppConfig {
            db_path: Some(PathBuf::from("/tmp/shop.db")),
            ..Default::default()
        };

        let mut buf = Vec::new();
        show(&config, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains(r#"db_path = "/tmp/shop.db""#));
        assert!(text.contains("[store]"));
        assert!(text.contains(r#"storage_key = "shop-state:v1""#));
    }
}
