use crate::{KubePromptError, KubePromptResult, Segment};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Colors (256-color indices) and visibility defaults for the kubernetes segments.
///
/// Theme files use PascalCase keys, e.g. `{"KubeClusterFg": 117, "KubeShowUser": false}`.
/// Keys missing from a file keep their built-in value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Theme {
    pub kube_icon_fg: u8,
    pub kube_icon_bg: u8,
    pub kube_cluster_fg: u8,
    pub kube_cluster_bg: u8,
    pub kube_context_fg: u8,
    pub kube_context_bg: u8,
    pub kube_namespace_fg: u8,
    pub kube_namespace_bg: u8,

    pub kube_show_cluster: bool,
    pub kube_show_context: bool,
    pub kube_show_namespace: bool,
    pub kube_show_user: bool,
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            kube_icon_fg: 15,
            kube_icon_bg: 26,
            kube_cluster_fg: 117,
            kube_cluster_bg: 26,
            kube_context_fg: 15,
            kube_context_bg: 26,
            kube_namespace_fg: 170,
            kube_namespace_bg: 17,
            kube_show_cluster: true,
            kube_show_context: true,
            kube_show_namespace: true,
            kube_show_user: true,
        }
    }
}

impl Theme {
    pub fn load_from_file(path: &Path) -> KubePromptResult<Theme> {
        let content = fs::read_to_string(path).map_err(|source| KubePromptError::File {
            operation: "read theme".to_string(),
            path: path.display().to_string(),
            source,
        })?;
        let theme = Self::from_json(&content)?;
        debug!("loaded theme from {}", path.display());
        Ok(theme)
    }

    pub fn from_json(content: &str) -> KubePromptResult<Theme> {
        if content.trim().is_empty() {
            return Err(KubePromptError::Theme("empty theme document".to_string()));
        }
        Ok(serde_json::from_str(content)?)
    }

    pub fn icon(&self, content: impl Into<String>) -> Segment {
        Segment {
            content: content.into(),
            foreground: self.kube_icon_fg,
            background: self.kube_icon_bg,
        }
    }

    pub fn cluster(&self, content: impl Into<String>) -> Segment {
        Segment {
            content: content.into(),
            foreground: self.kube_cluster_fg,
            background: self.kube_cluster_bg,
        }
    }

    pub fn context(&self, content: impl Into<String>) -> Segment {
        Segment {
            content: content.into(),
            foreground: self.kube_context_fg,
            background: self.kube_context_bg,
        }
    }

    pub fn namespace(&self, content: impl Into<String>) -> Segment {
        Segment {
            content: content.into(),
            foreground: self.kube_namespace_fg,
            background: self.kube_namespace_bg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_theme_keeps_defaults() -> anyhow::Result<()> {
        let theme = Theme::from_json(r#"{"KubeClusterFg": 200, "KubeShowUser": false}"#)?;
        assert_eq!(theme.kube_cluster_fg, 200);
        assert!(!theme.kube_show_user);

        let default = Theme::default();
        assert_eq!(theme.kube_cluster_bg, default.kube_cluster_bg);
        assert_eq!(theme.kube_show_context, default.kube_show_context);
        Ok(())
    }

    #[test]
    fn test_invalid_theme() {
        assert!(matches!(
            Theme::from_json("{ not json"),
            Err(KubePromptError::Parse(_))
        ));
        assert!(matches!(
            Theme::from_json("   "),
            Err(KubePromptError::Theme(_))
        ));
        assert!(Theme::from_json(r#"{"KubeIconFg": 300}"#).is_err());
    }

    #[test]
    fn test_load_from_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("theme.json");
        let mut file = fs::File::create(&path)?;
        writeln!(file, r#"{{"KubeNamespaceBg": 52}}"#)?;
        file.flush()?;

        let theme = Theme::load_from_file(&path)?;
        assert_eq!(theme.kube_namespace_bg, 52);
        assert_eq!(theme.namespace("default").background, 52);

        let missing = Theme::load_from_file(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(KubePromptError::File { .. })));
        Ok(())
    }
}
