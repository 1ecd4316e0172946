//! Kubeconfig discovery and merging.
//!
//! - [`locator`] - Candidate file paths from `KUBECONFIG` and the home directory
//! - [`merge`] - Best-effort read and merge of those files

pub mod locator;
pub mod merge;

#[cfg(test)]
mod tests;

use serde::Deserialize;

pub use locator::candidate_paths;
pub use merge::{merge, read_kube_config};

/// The subset of a kubeconfig document needed for the prompt.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct KubeConfig {
    #[serde(default)]
    pub contexts: Option<Vec<NamedContext>>,
    #[serde(default, rename = "current-context")]
    pub current_context: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct NamedContext {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub context: Option<ContextFields>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContextFields {
    #[serde(default)]
    pub cluster: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
}

/// A named cluster/namespace/user triple.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContextEntry {
    pub name: String,
    pub cluster: String,
    pub namespace: String,
    pub user: String,
}

impl From<NamedContext> for ContextEntry {
    fn from(named: NamedContext) -> Self {
        let fields = named.context.unwrap_or_default();
        ContextEntry {
            name: named.name.unwrap_or_default(),
            cluster: fields.cluster.unwrap_or_default(),
            namespace: fields.namespace.unwrap_or_default(),
            user: fields.user.unwrap_or_default(),
        }
    }
}

/// All contexts from every readable kubeconfig, in file order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergedConfig {
    pub contexts: Vec<ContextEntry>,
    pub current_context: String,
}

impl MergedConfig {
    /// First context named `name`, if any.
    pub fn find_context(&self, name: &str) -> Option<&ContextEntry> {
        self.contexts.iter().find(|c| c.name == name)
    }
}
