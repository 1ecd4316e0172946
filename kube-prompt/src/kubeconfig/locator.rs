use crate::environment::{EnvLookup, KUBECONFIG, home_path};
use std::path::PathBuf;

/// Ordered kubeconfig candidates: every `KUBECONFIG` entry, then `~/.kube/config`.
///
/// Empty entries are kept; they fail to read and are skipped by the merge.
pub fn candidate_paths(env: &dyn EnvLookup) -> Vec<PathBuf> {
    let list = env.var(KUBECONFIG).unwrap_or_default();
    let mut paths: Vec<PathBuf> = list.split(':').map(PathBuf::from).collect();
    paths.push(default_path(env));
    paths
}

pub fn default_path(env: &dyn EnvLookup) -> PathBuf {
    home_path(env).join(".kube").join("config")
}
