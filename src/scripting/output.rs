/// `scripting/output.rs` — the `print` redirector
///
/// Scripts never reach the process's stdout. The session replaces the global
/// `print` with a closure that formats its arguments the way stock Lua does
/// and appends the line to a shared in-memory buffer.

use std::fmt::Write as _;
use std::sync::{Arc, Mutex, MutexGuard};

use mlua::{Lua, MultiValue, Result as LuaResult, Value};

/// Append-only text written by `print`, shared between a session and the
/// closure it registers.
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer(Arc<Mutex<String>>);

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic mid-append cannot leave the text in a state worse than truncated.
    fn lock(&self) -> MutexGuard<'_, String> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn append(&self, text: &str) {
        self.lock().push_str(text);
    }

    /// Drain the buffer, returning everything printed so far.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.lock())
    }
}

/// Replace the global `print` with one that writes into `buffer`.
pub fn register_print(lua: &Lua, buffer: &OutputBuffer) -> LuaResult<()> {
    let sink = buffer.clone();
    let print = lua.create_function(move |lua, args: MultiValue| {
        let line = format_print_line(lua, args)?;
        sink.append(&line);
        Ok(())
    })?;
    lua.globals().set("print", print)
}

/// Render one `print` call: arguments joined by single spaces, then `\n`.
pub fn format_print_line(lua: &Lua, args: MultiValue) -> LuaResult<String> {
    let mut line = String::new();
    for (i, value) in args.into_iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        append_value(lua, &mut line, value)?;
    }
    line.push('\n');
    Ok(line)
}

/// Strings and numbers print as text; everything else as `type:pointer`.
fn append_value(lua: &Lua, out: &mut String, value: Value) -> LuaResult<()> {
    match value {
        Value::String(s) => out.push_str(&s.to_string_lossy()),
        Value::Integer(_) | Value::Number(_) => match lua.coerce_string(value.clone())? {
            Some(s) => out.push_str(&s.to_string_lossy()),
            None => append_identity(out, &value),
        },
        other => append_identity(out, &other),
    }
    Ok(())
}

fn append_identity(out: &mut String, value: &Value) {
    // Writing into a String cannot fail.
    let _ = write!(out, "{}:{:p}", type_name(value), value.to_pointer());
}

/// Lua's own name for a value's type (`luaL_typename`).
fn type_name(value: &Value) -> &'static str {
    match value {
        // Lua reports light and full userdata alike.
        Value::LightUserData(_) => "userdata",
        other => other.type_name(),
    }
}
