//! Segment visibility preferences.

use super::EnvLookup;
use kube_prompt_types::Theme;
use tracing::debug;

pub const K8S_SHOW_CLUSTER: &str = "K8S_SHOW_CLUSTER";
pub const K8S_SHOW_CONTEXT: &str = "K8S_SHOW_CONTEXT";
pub const K8S_SHOW_NAMESPACE: &str = "K8S_SHOW_NAMESPACE";
pub const K8S_SHOW_USER: &str = "K8S_SHOW_USER";

/// Parse a boolean literal.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Resolve a boolean preference from an environment override, else `fallback`.
pub fn get_preference(env: &dyn EnvLookup, key: &str, fallback: bool) -> bool {
    if let Some(value) = env.var(key) {
        if let Some(b) = parse_bool(&value) {
            return b;
        }
        debug!("ignoring unparsable {}={:?}", key, value);
    }
    fallback
}

/// Visibility of each kubernetes segment for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub show_cluster: bool,
    pub show_context: bool,
    pub show_namespace: bool,
    pub show_user: bool,
}

impl Preferences {
    pub fn resolve(env: &dyn EnvLookup, theme: &Theme) -> Self {
        Preferences {
            show_cluster: get_preference(env, K8S_SHOW_CLUSTER, theme.kube_show_cluster),
            show_context: get_preference(env, K8S_SHOW_CONTEXT, theme.kube_show_context),
            show_namespace: get_preference(env, K8S_SHOW_NAMESPACE, theme.kube_show_namespace),
            show_user: get_preference(env, K8S_SHOW_USER, theme.kube_show_user),
        }
    }
}
