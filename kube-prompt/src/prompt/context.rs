use crate::environment::EnvLookup;
use kube_prompt_types::Theme;

/// Inputs shared by every module during one render.
pub struct PromptContext<'a> {
    pub env: &'a dyn EnvLookup,
    pub theme: &'a Theme,
}
