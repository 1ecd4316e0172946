use super::{KubeConfig, MergedConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read one kubeconfig, or `None` if it cannot be resolved, read or parsed.
pub fn read_kube_config(path: &Path) -> Option<KubeConfig> {
    let absolute = match std::path::absolute(path) {
        Ok(p) => p,
        Err(err) => {
            debug!("skip kubeconfig {:?}: {}", path, err);
            return None;
        }
    };
    let content = match fs::read(&absolute) {
        Ok(content) => content,
        Err(err) => {
            debug!("skip kubeconfig {:?}: {}", absolute, err);
            return None;
        }
    };
    match serde_yaml::from_slice::<KubeConfig>(&content) {
        Ok(config) => Some(config),
        Err(err) => {
            debug!("skip kubeconfig {:?}: {}", absolute, err);
            None
        }
    }
}

/// Merge every readable candidate in order.
///
/// Contexts are appended without dedup. The first non-empty current-context wins.
pub fn merge(paths: &[PathBuf]) -> MergedConfig {
    let mut merged = MergedConfig::default();

    for config in paths.iter().filter_map(|p| read_kube_config(p)) {
        merged.contexts.extend(
            config
                .contexts
                .unwrap_or_default()
                .into_iter()
                .map(Into::into),
        );
        if merged.current_context.is_empty()
            && let Some(current) = config.current_context
        {
            merged.current_context = current;
        }
    }

    debug!(
        "merged {} contexts, current {:?}",
        merged.contexts.len(),
        merged.current_context
    );
    merged
}
