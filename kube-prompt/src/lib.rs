pub mod config;
pub mod environment;
pub mod errors;
pub mod kubeconfig;
pub mod prompt;

pub use environment::{EnvLookup, SystemEnv};
pub use prompt::Prompt;
pub use prompt::shorten::ShortenOptions;
