//! Configuration parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{ClusterConfig, Error, Result, SourceContext, validate::validate_config};

impl FromStr for ClusterConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_toml(s, "gridcfg.toml")
    }
}

impl ClusterConfig {
    /// Parse a configuration file; `.json` files are read as JSON and
    /// everything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            parse_json(&content, &filename)
        } else {
            parse_toml(&content, &filename)
        }
    }

    /// Parse a TOML configuration with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_toml(content, filename)
    }

    /// Parse a JSON configuration.
    pub fn from_json_str(content: &str) -> Result<Self> {
        parse_json(content, "gridcfg.json")
    }
}

fn parse_toml(content: &str, filename: &str) -> Result<ClusterConfig> {
    let ctx = SourceContext::new(content, filename);
    let config: ClusterConfig = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_config(&config, &ctx)?;
    Ok(config)
}

fn parse_json(content: &str, filename: &str) -> Result<ClusterConfig> {
    let ctx = SourceContext::new(content, filename);
    let config: ClusterConfig = serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;
    validate_config(&config, &ctx)?;
    Ok(config)
}
