/// `scripting/session.rs` — one Lua VM plus its captured output
///
/// A session lives for exactly one script execution. Dropping it closes the
/// Lua state; the output buffer goes with it.

use mlua::{Error as LuaError, Lua};

use super::{
    output::{register_print, OutputBuffer},
    sandbox::{create_sandboxed_vm, TrustLevel},
};

/// Message surfaced when the host passes no source at all.
pub const MISSING_SOURCE: &str = "no script source supplied";

/// Failure to bring up a session VM.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to create Lua VM: {0}")]
    Vm(#[source] LuaError),
    #[error("failed to install print redirector: {0}")]
    Print(#[source] LuaError),
}

/// Outcome of [`Session::run`]; the message of a failed run is in
/// [`Session::error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Ok,
    Error,
}

pub struct Session {
    lua: Lua,
    output: OutputBuffer,
    last_error: Option<String>,
}

impl Session {
    /// Fresh VM with the libraries `trust` allows and `print` redirected.
    pub fn new(trust: TrustLevel) -> Result<Self, SessionError> {
        let lua = create_sandboxed_vm(trust).map_err(SessionError::Vm)?;
        let output = OutputBuffer::new();
        register_print(&lua, &output).map_err(SessionError::Print)?;
        log::debug!("[session] created (trust={trust:?})");
        Ok(Self {
            lua,
            output,
            last_error: None,
        })
    }

    /// Compile and execute `source` as a top-level chunk.
    pub fn run(&mut self, source: Option<&str>) -> RunStatus {
        let Some(source) = source else {
            self.last_error = Some(MISSING_SOURCE.to_string());
            return RunStatus::Error;
        };

        // Named after its own text, so messages read `[string "..."]:1: ...`.
        let name = if source.contains('\0') { "=script" } else { source };
        match self.lua.load(source).set_name(name).exec() {
            Ok(()) => {
                self.last_error = None;
                RunStatus::Ok
            }
            Err(e) => {
                let message = error_message(&e);
                log::debug!("[session] run failed: {message}");
                self.last_error = Some(message);
                RunStatus::Error
            }
        }
    }

    /// Message of the last failed [`run`](Self::run).
    pub fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Everything printed so far; drains the buffer.
    pub fn take_output(&mut self) -> String {
        self.output.take()
    }
}

/// The message Lua itself raised, without mlua's wrapping.
///
/// mlua prefixes syntax and runtime errors, appends a stack traceback to
/// errors raised from Lua code, and nests errors raised inside Rust
/// callbacks.
pub fn error_message(err: &LuaError) -> String {
    let raw = match err {
        LuaError::SyntaxError { message, .. } => message.clone(),
        LuaError::RuntimeError(message) | LuaError::MemoryError(message) => message.clone(),
        LuaError::CallbackError { cause, .. } => return error_message(cause),
        other => other.to_string(),
    };
    strip_traceback(&raw).to_string()
}

// mlua appends the traceback last, as `stack traceback:` on its own line.
fn strip_traceback(message: &str) -> &str {
    match message.rfind("\nstack traceback:\n") {
        Some(idx) => &message[..idx],
        None => message,
    }
}
