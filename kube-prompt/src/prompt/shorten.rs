//! Cluster name shortening.

use regex::Regex;

// arn:aws:eks:us-east-1:123456789012:cluster/eks-infra -> eks-infra
static EKS_ARN_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^arn:aws:eks:[[:alnum:]-]+:[[:digit:]]+:cluster/(.*)$").unwrap()
});

/// Which shortening steps are enabled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShortenOptions {
    pub gke: bool,
    pub eks: bool,
}

type ShortenStep = fn(&str) -> Option<String>;

/// Apply the enabled steps in order: GKE, then EKS.
pub fn shorten_cluster(cluster: &str, options: &ShortenOptions) -> String {
    let steps: [(bool, ShortenStep); 2] = [(options.gke, shorten_gke), (options.eks, shorten_eks)];
    steps
        .iter()
        .fold(cluster.to_string(), |current, (enabled, step)| {
            if *enabled {
                step(&current).unwrap_or(current)
            } else {
                current
            }
        })
}

/// `gke_<project>_<zone>_<name>` -> `<name>`. Needs more than three `_` pieces.
pub fn shorten_gke(cluster: &str) -> Option<String> {
    if !cluster.starts_with("gke") {
        return None;
    }
    let segments: Vec<&str> = cluster.split('_').collect();
    if segments.len() > 3 {
        Some(segments[3..].join("_"))
    } else {
        None
    }
}

/// EKS cluster ARN -> cluster name.
pub fn shorten_eks(cluster: &str) -> Option<String> {
    EKS_ARN_REGEX
        .captures(cluster)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
