/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads `env_var` and parses it, falling back to `default` when the variable
/// is unset, blank or unparsable. Parse failures are logged.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match get_env_trimmed(env_var) {
        Some(val) => val.parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}={:?}: {:?}, using default", env_var, val, e);
            default
        }),
        None => default,
    }
}

/// Reads `env_var` and parses it, returning `None` if it is unset or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T> {
    get_env_trimmed(env_var).and_then(|val| val.parse::<T>().ok())
}

/// Reads a mandatory string variable
///
/// # Errors
/// `AppError::Config` when the variable is unset or blank
pub fn get_env_required(env_var: &str) -> Result<String, AppError> {
    get_env_trimmed(env_var)
        .ok_or_else(|| AppError::Config(format!("{env_var} is not set")))
}

fn get_env_trimmed(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
