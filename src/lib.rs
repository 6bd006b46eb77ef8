pub mod bridge;
pub mod scripting;

pub use scripting::{
    engine::{execute, ExecutionResult},
    sandbox::{SandboxConfig, TrustLevel},
    session::{RunStatus, Session, SessionError},
};

/// Install `env_logger` unless the host already set a logger.
///
/// Filter comes from `RUST_LOG`, defaulting to `warn`.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
}
