/// `scripting/` — embedded Lua execution
///
/// Each snippet runs in its own isolated Lua VM (mlua) with `print`
/// redirected into a buffer. Script errors are data, never panics.
pub mod engine;
pub mod output;
pub mod sandbox;
pub mod session;
