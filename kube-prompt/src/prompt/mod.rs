use crate::environment::EnvLookup;
use kube_prompt_types::{DisplaySegment, Theme};

pub mod context;
pub mod modules;
pub mod render;
pub mod shorten;


use context::PromptContext;
use modules::PromptModule;
use modules::kubernetes::KubernetesModule;
use shorten::ShortenOptions;
use tracing::debug;

#[derive(Debug)]
pub struct Prompt {
    pub theme: Theme,
    modules: Vec<Box<dyn PromptModule>>,
}

impl Prompt {
    pub fn new(theme: Theme, shorten: ShortenOptions) -> Prompt {
        Prompt {
            theme,
            modules: vec![Box::new(KubernetesModule::new(shorten))],
        }
    }

    /// Run every module once and collect their segments in order.
    pub fn segments(&self, env: &dyn EnvLookup) -> Vec<DisplaySegment> {
        let context = PromptContext {
            env,
            theme: &self.theme,
        };

        let mut segments: Vec<DisplaySegment> = Vec::new();
        for module in &self.modules {
            let before = segments.len();
            module.render(&context, &mut segments);
            debug!(
                "module {} produced {} segments",
                module.name(),
                segments.len() - before
            );
        }
        segments
    }
}
