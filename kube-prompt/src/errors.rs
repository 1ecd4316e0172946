use tracing::debug;

/// Display error in a user-friendly format without stack traces.
///
/// Goes to stderr so the prompt written to stdout stays intact.
pub fn display_user_error(err: &anyhow::Error) {
    debug!("{:?}", err);
    eprintln!("kprompt: {:#}", err);
}
