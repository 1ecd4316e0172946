use super::*;
use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

fn init() {
    let _ = tracing_subscriber::fmt::try_init();
}

fn write_file(dir: &Path, name: &str, content: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join(name);
    let mut file = File::create(&path)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(path)
}

const FIRST: &str = r#"
apiVersion: v1
kind: Config
clusters:
- name: gke_p_z_cluster-01
  cluster:
    server: https://10.0.0.1
contexts:
- name: prod
  context:
    cluster: gke_p_z_cluster-01
    namespace: default
    user: alice
- name: staging
  context:
    cluster: staging-cluster
    user: bob
current-context: prod
users:
- name: alice
  user:
    token: secret
"#;

const SECOND: &str = r#"
contexts:
- name: prod
  context:
    cluster: other-prod
    namespace: kube-system
    user: carol
- name: dev
  context:
    cluster: kind-dev
current-context: dev
"#;

#[test]
fn test_candidate_paths_keeps_order_and_appends_default() {
    let mut env = HashMap::new();
    env.insert("KUBECONFIG".to_string(), "/a/config:/b/config".to_string());
    env.insert(crate::environment::HOME_VAR.to_string(), "/home/alice".to_string());

    let paths = candidate_paths(&env);
    assert_eq!(
        paths,
        vec![
            PathBuf::from("/a/config"),
            PathBuf::from("/b/config"),
            PathBuf::from("/home/alice/.kube/config"),
        ]
    );
}

#[test]
fn test_candidate_paths_unset_yields_empty_entry() {
    let mut env = HashMap::new();
    env.insert(crate::environment::HOME_VAR.to_string(), "/home/alice".to_string());

    let paths = candidate_paths(&env);
    assert_eq!(
        paths,
        vec![PathBuf::new(), PathBuf::from("/home/alice/.kube/config")]
    );
}

#[test]
fn test_merge_unreadable_and_malformed_is_empty() -> anyhow::Result<()> {
    init();
    let dir = tempfile::tempdir()?;
    let garbage = write_file(dir.path(), "garbage", "contexts: [ {")?;
    let scalar = write_file(dir.path(), "scalar", "just a string")?;
    let paths = vec![
        PathBuf::new(),
        dir.path().join("missing"),
        dir.path().to_path_buf(),
        garbage,
        scalar,
    ];

    assert_eq!(merge(&paths), MergedConfig::default());
    Ok(())
}

#[test]
fn test_merge_order_and_first_current_context_wins() -> anyhow::Result<()> {
    init();
    let dir = tempfile::tempdir()?;
    let first = write_file(dir.path(), "first", FIRST)?;
    let second = write_file(dir.path(), "second", SECOND)?;
    let broken = write_file(dir.path(), "broken", "contexts: {{{")?;

    let merged = merge(&[broken, first, second]);
    let names: Vec<&str> = merged.contexts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["prod", "staging", "prod", "dev"]);
    assert_eq!(merged.current_context, "prod");

    let prod = merged.find_context("prod").unwrap();
    assert_eq!(prod.cluster, "gke_p_z_cluster-01");
    assert_eq!(prod.namespace, "default");
    assert_eq!(prod.user, "alice");

    let staging = merged.find_context("staging").unwrap();
    assert_eq!(staging.namespace, "");
    Ok(())
}

#[test]
fn test_merge_skips_files_without_current_context() -> anyhow::Result<()> {
    init();
    let dir = tempfile::tempdir()?;
    let no_current = write_file(
        dir.path(),
        "no_current",
        "contexts:\n- name: a\n  context:\n    cluster: c1\ncurrent-context: \"\"\n",
    )?;
    let second = write_file(dir.path(), "second", SECOND)?;

    let merged = merge(&[no_current, second]);
    assert_eq!(merged.current_context, "dev");
    assert_eq!(merged.contexts.len(), 3);
    assert_eq!(merged.contexts[0].name, "a");
    Ok(())
}

#[test]
fn test_read_kube_config_tolerates_nulls() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_file(
        dir.path(),
        "nulls",
        "contexts:\n- name: x\n  context:\n    cluster: c\n    namespace:\n    user: ~\n",
    )?;
    let config = read_kube_config(&path).unwrap();
    let entries: Vec<ContextEntry> = config
        .contexts
        .unwrap_or_default()
        .into_iter()
        .map(Into::into)
        .collect();
    assert_eq!(
        entries,
        vec![ContextEntry {
            name: "x".to_string(),
            cluster: "c".to_string(),
            namespace: String::new(),
            user: String::new(),
        }]
    );
    assert!(config.current_context.is_none());
    Ok(())
}
