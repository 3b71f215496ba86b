use std::sync::Mutex;

/// Serializes tests that touch process-wide environment variables.
///
/// Tests run in parallel by default but the environment is shared by the whole process.
pub(crate) static ENV_MUTEX: Mutex<()> = Mutex::new(());
