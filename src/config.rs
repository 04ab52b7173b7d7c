use thiserror::Error;
use url::Url;

use crate::format::CurrencyFormat;

pub(crate) const DEFAULT_API_URL: &str = "http://localhost:3333";

pub(crate) const ENV_API_URL: &str = "CASHBOARD_API_URL";
pub(crate) const ENV_CURRENCY: &str = "CASHBOARD_CURRENCY";
pub(crate) const ENV_TOKEN: &str = "CASHBOARD_TOKEN";

const VALUE_FLAGS: &[&str] = &["--api-url", "--currency", "--token"];

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ConfigError {
    #[error("invalid API url '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("unknown currency '{0}' (expected one of: brl, usd, eur)")]
    UnknownCurrency(String),

    #[error("missing value for {0}")]
    MissingValue(String),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Config {
    pub(crate) api_url: Url,
    pub(crate) currency: CurrencyFormat,
    pub(crate) token: Option<String>,
}

impl Config {
    /// Resolve configuration from the process environment and `args`.
    ///
    /// Returns the config plus the arguments that were not config flags
    /// (the command and its positionals), program name excluded.
    pub(crate) fn load(args: &[String]) -> Result<(Self, Vec<String>), ConfigError> {
        Self::resolve(|key| std::env::var(key).ok(), args.get(1..).unwrap_or_default())
    }

    /// Defaults, then `env`, then flags in `args`. Later layers win.
    pub(crate) fn resolve(
        env: impl Fn(&str) -> Option<String>,
        args: &[String],
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let (flags, rest) = split_flags(args)?;
        let flag = |name: &str| {
            flags
                .iter()
                .rev()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        };
        let non_empty = |v: String| if v.trim().is_empty() { None } else { Some(v) };

        let api_url = flag("--api-url")
            .or_else(|| env(ENV_API_URL).and_then(non_empty))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = parse_api_url(&api_url)?;

        let currency = match flag("--currency").or_else(|| env(ENV_CURRENCY).and_then(non_empty)) {
            Some(code) => {
                CurrencyFormat::from_code(&code).ok_or(ConfigError::UnknownCurrency(code))?
            }
            None => CurrencyFormat::default(),
        };

        let token = flag("--token")
            .or_else(|| env(ENV_TOKEN))
            .and_then(non_empty);

        Ok((
            Self {
                api_url,
                currency,
                token,
            },
            rest,
        ))
    }
}

/// Only absolute http(s) URLs are accepted.
pub(crate) fn parse_api_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|e| ConfigError::InvalidUrl {
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidUrl {
            value: value.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

/// Separate `--flag value` / `--flag=value` pairs from everything else.
fn split_flags(args: &[String]) -> Result<(Vec<(String, String)>, Vec<String>), ConfigError> {
    let mut flags = Vec::new();
    let mut rest = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some((name, value)) = arg.split_once('=') {
            if VALUE_FLAGS.contains(&name) {
                flags.push((name.to_string(), value.to_string()));
                continue;
            }
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            let value = iter
                .next()
                .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
            flags.push((arg.clone(), value.clone()));
        } else {
            rest.push(arg.clone());
        }
    }

    Ok((flags, rest))
}
