//! Environment variable access.
//!
//! [`Env::process()`] reads the real process environment. [`Env::from_pairs()`]
//! serves a fixed set of values, which lets config tests run without
//! touching global state via [`std::env::set_var`].

use std::collections::HashMap;
use std::str::FromStr;

/// Source of environment variables.
#[derive(Clone, Debug, Default)]
pub struct Env {
    fixed: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the process environment.
    pub fn process() -> Self {
        Self { fixed: None }
    }

    /// Serve exactly the given pairs; everything else is unset.
    pub fn from_pairs(
        vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self {
            fixed: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    /// Value of `name`, or `None` when unset, empty or not valid unicode.
    pub fn var(&self, name: &str) -> Option<String> {
        let value = match &self.fixed {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        };
        value.filter(|v| !v.trim().is_empty())
    }

    /// Parse `name` into `T`.
    ///
    /// `None` when the variable is unset; `Some(Err(raw))` carries the raw
    /// value back when it does not parse, so callers can report it.
    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, String>> {
        self.var(name)
            .map(|raw| raw.trim().parse::<T>().map_err(|_| raw))
    }

    /// Interpret `name` as a boolean switch.
    ///
    /// Accepts `1/true/yes/on` and `0/false/no/off`, case-insensitively.
    pub fn flag(&self, name: &str) -> Option<Result<bool, String>> {
        self.var(name).map(|raw| {
            let normalized = raw.trim().to_lowercase();
            match normalized.as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(raw),
            }
        })
    }
}
