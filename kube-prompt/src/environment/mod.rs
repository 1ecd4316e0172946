//! Environment access for prompt rendering.
//!
//! Everything that reads process state goes through [`EnvLookup`], so the
//! resolution pipeline can run against an in-memory map in tests.
//!
//! # Module Structure
//!
//! - [`preferences`] - Segment visibility overrides

pub mod preferences;


use cfg_if::cfg_if;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

pub use preferences::{Preferences, get_preference, parse_bool};

/// Colon separated list of kubeconfig files.
pub const KUBECONFIG: &str = "KUBECONFIG";

cfg_if! {
    if #[cfg(windows)] {
        pub const HOME_VAR: &str = "USERPROFILE";
    } else {
        pub const HOME_VAR: &str = "HOME";
    }
}

/// Read-only view of environment variables.
pub trait EnvLookup {
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl EnvLookup for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Home directory of the current user.
///
/// Prefers the platform profile variable; an unknown home yields an empty
/// path, which makes the default kubeconfig location relative.
pub fn home_path(env: &dyn EnvLookup) -> PathBuf {
    match env.var(HOME_VAR) {
        Some(home) => PathBuf::from(home),
        None => dirs::home_dir().unwrap_or_default(),
    }
}
