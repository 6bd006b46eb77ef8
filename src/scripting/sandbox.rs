/// `scripting/sandbox.rs` — Lua capability policy per session
///
/// Every session VM is created with the standard libraries its trust level
/// allows. The base library is always present; `print` is replaced by the
/// session afterwards regardless of trust.
///
/// The default is `Unrestricted`: the host historically ran snippets with the
/// full standard library, and narrowing that is a caller decision.

use mlua::{Lua, LuaOptions, Result as LuaResult, StdLib, Value};
use serde::{Deserialize, Serialize};

/// Controls which Lua standard libraries are available to a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrustLevel {
    /// string, table, math, utf8, coroutine — no I/O, no OS, no file loading
    Basic,
    /// Basic + io, dofile, loadfile
    FileRead,
    /// FileRead + os, package/require
    Elevated,
    /// Every safe standard library (everything except debug)
    #[default]
    Unrestricted,
}

impl TrustLevel {
    /// Standard libraries loaded for this trust level.
    pub fn std_libs(self) -> StdLib {
        let basic = StdLib::TABLE | StdLib::STRING | StdLib::MATH | StdLib::UTF8 | StdLib::COROUTINE;
        match self {
            TrustLevel::Basic => basic,
            TrustLevel::FileRead => basic | StdLib::IO,
            TrustLevel::Elevated => basic | StdLib::IO | StdLib::OS | StdLib::PACKAGE,
            TrustLevel::Unrestricted => StdLib::ALL_SAFE,
        }
    }

    /// Whether the base library's file loaders stay reachable.
    fn allows_file_loading(self) -> bool {
        !matches!(self, TrustLevel::Basic)
    }
}

/// Session configuration, decoded from the host as JSON.
///
/// Missing fields fall back to their defaults, so `{}` and `null` are both
/// valid and mean "reference behaviour".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub trust: TrustLevel,
}

/// Creates a new Lua VM with sandbox restrictions applied.
pub fn create_sandboxed_vm(trust: TrustLevel) -> LuaResult<Lua> {
    let lua = Lua::new_with(trust.std_libs(), LuaOptions::default())?;

    if !trust.allows_file_loading() {
        let globals = lua.globals();
        globals.set("dofile", Value::Nil)?;
        globals.set("loadfile", Value::Nil)?;
    }

    Ok(lua)
}
