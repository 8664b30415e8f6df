//! Exit status for garagectl

use garage_shared::KnowledgeError;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the config or knowledge file is unusable (EX_CONFIG)
pub const EXIT_CONFIG_ERROR: i32 = 78;

/// Map a top-level error to a process exit code
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    let is_config = err
        .chain()
        .any(|cause| cause.is::<KnowledgeError>() || cause.is::<toml::de::Error>());
    if is_config {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_GENERAL_ERROR
    }
}
