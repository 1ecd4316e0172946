use crate::prompt::context::PromptContext;
use kube_prompt_types::SegmentSink;

pub mod kubernetes;

pub trait PromptModule: std::fmt::Debug {
    /// Return the name of the module (e.g., "kubernetes")
    fn name(&self) -> &str;

    /// Append this module's segments to `sink`.
    /// Appends nothing if the module should not be displayed.
    fn render(&self, context: &PromptContext<'_>, sink: &mut dyn SegmentSink);
}
