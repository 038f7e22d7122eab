use std::env::VarError;

use crate::domain::locale::Locale;

const LANG_VAR: &str = "GREETER_LANG";
const VERBOSE_VAR: &str = "GREETER_VERBOSE";

#[derive(Debug)]
pub enum ConfigError {
    InvalidLocale(String),
    InvalidFlag { var: &'static str, value: String },
    NotUnicode(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidLocale(msg) => write!(f, "invalid {LANG_VAR}: {msg}"),
            ConfigError::InvalidFlag { var, value } => {
                write!(f, "invalid {var}: \"{value}\" is not a boolean")
            }
            ConfigError::NotUnicode(var) => write!(f, "invalid {var}: value is not valid UTF-8"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Default)]
pub struct AppConfig {
    pub locale: Locale,
    pub verbose: bool,
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    let vars = read_vars(|name| std::env::var(name))?;
    parse_config_vars(vars)
}

fn read_vars<F>(lookup: F) -> Result<Vec<(&'static str, String)>, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let mut vars = Vec::new();
    for name in [LANG_VAR, VERBOSE_VAR] {
        match lookup(name) {
            Ok(value) => vars.push((name, value)),
            Err(VarError::NotPresent) => {}
            Err(VarError::NotUnicode(_)) => return Err(ConfigError::NotUnicode(name)),
        }
    }
    Ok(vars)
}

pub fn parse_config_vars<I, K, V>(vars: I) -> Result<AppConfig, ConfigError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut config = AppConfig::default();

    for (key, value) in vars {
        let value = value.as_ref();
        match key.as_ref() {
            LANG_VAR => {
                config.locale = Locale::parse(value)
                    .map_err(|e| ConfigError::InvalidLocale(e.to_string()))?;
            }
            VERBOSE_VAR => config.verbose = parse_flag(VERBOSE_VAR, value)?,
            _ => {}
        }
    }

    Ok(config)
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "" | "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}
