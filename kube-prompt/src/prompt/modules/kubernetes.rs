use crate::environment::Preferences;
use crate::kubeconfig::{self, MergedConfig};
use crate::prompt::context::PromptContext;
use crate::prompt::modules::PromptModule;
use crate::prompt::shorten::{ShortenOptions, shorten_cluster};
use kube_prompt_types::{SegmentKey, SegmentSink, Theme};
use tracing::debug;

pub const KUBE_ICON: &str = "⎈";

#[derive(Debug, Default)]
pub struct KubernetesModule {
    shorten: ShortenOptions,
}

impl KubernetesModule {
    pub fn new(shorten: ShortenOptions) -> Self {
        Self { shorten }
    }

    /// Turn a merged kubeconfig into segments.
    pub fn append_segments(
        &self,
        config: &MergedConfig,
        prefs: &Preferences,
        theme: &Theme,
        sink: &mut dyn SegmentSink,
    ) {
        let current = config.current_context.as_str();
        if current.is_empty() {
            return;
        }

        let (cluster, namespace, user) = match config.find_context(current) {
            Some(entry) => (
                entry.cluster.as_str(),
                entry.namespace.as_str(),
                entry.user.as_str(),
            ),
            None => {
                debug!("current context {:?} has no matching entry", current);
                ("", "", "")
            }
        };
        let cluster = shorten_cluster(cluster, &self.shorten);

        sink.append_segment(SegmentKey::KubeIcon, theme.icon(KUBE_ICON));

        if !cluster.is_empty() && prefs.show_cluster {
            sink.append_segment(SegmentKey::KubeCluster, theme.cluster(cluster));
        }

        if prefs.show_context {
            let content = if !user.is_empty() && user != current && prefs.show_user {
                format!("{}@{}", user, current)
            } else {
                current.to_string()
            };
            sink.append_segment(SegmentKey::KubeContext, theme.context(content));
        }

        if !namespace.is_empty() && prefs.show_namespace {
            sink.append_segment(SegmentKey::KubeNamespace, theme.namespace(namespace));
        }
    }
}

impl PromptModule for KubernetesModule {
    fn name(&self) -> &str {
        "kubernetes"
    }

    fn render(&self, context: &PromptContext<'_>, sink: &mut dyn SegmentSink) {
        let paths = kubeconfig::candidate_paths(context.env);
        let config = kubeconfig::merge(&paths);
        let prefs = Preferences::resolve(context.env, context.theme);
        self.append_segments(&config, &prefs, context.theme, sink);
    }
}
