/// `bridge/entry.rs` — exported JNI symbols
///
/// Java side (`co.daily.bots.assistant.tools.ToolProviderRunLua`):
///
/// ```java
/// external fun nativeRunCode(code: String?): String
/// external fun nativeExecute(code: String?, configJson: String?): String
/// ```
///
/// `nativeRunCode` returns either the printed output or the error message
/// as a bare string. `nativeExecute` returns the same outcome as tagged
/// JSON: `{"status":"success"|"failure","text":"..."}`.

use std::ffi::c_void;

use jni::{
    objects::{JObject, JString},
    sys::{jint, jstring, JNI_VERSION_1_6},
    JNIEnv, JavaVM,
};

use super::{borrowed::BorrowedStr, exception::throw_runtime_exception, BridgeError};
use crate::scripting::{
    engine::{execute, ExecutionResult},
    sandbox::SandboxConfig,
};

#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    crate::init_logging();
    JNI_VERSION_1_6
}

#[no_mangle]
pub extern "system" fn Java_co_daily_bots_assistant_tools_ToolProviderRunLua_nativeRunCode<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    code: JString<'local>,
) -> jstring {
    let outcome = run_code(&mut env, &code);
    respond(&mut env, outcome)
}

#[no_mangle]
pub extern "system" fn Java_co_daily_bots_assistant_tools_ToolProviderRunLua_nativeExecute<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    code: JString<'local>,
    config_json: JString<'local>,
) -> jstring {
    let outcome = execute_tagged(&mut env, &code, &config_json);
    respond(&mut env, outcome)
}

// ── Request handling ──────────────────────────────────────────────────────────

fn run_code<'local>(
    env: &mut JNIEnv<'local>,
    code: &JString,
) -> Result<JString<'local>, BridgeError> {
    let result = {
        let script = BorrowedStr::borrow(env, code)?;
        let source = script.as_text();
        execute(source.as_deref(), &SandboxConfig::default())
    };
    Ok(env.new_string(result.into_text())?)
}

fn execute_tagged<'local>(
    env: &mut JNIEnv<'local>,
    code: &JString,
    config_json: &JString,
) -> Result<JString<'local>, BridgeError> {
    let result = {
        let config_text = BorrowedStr::borrow(env, config_json)?;
        let config = decode_config(config_text.as_text().as_deref());
        match config {
            Ok(config) => {
                let script = BorrowedStr::borrow(env, code)?;
                let source = script.as_text();
                execute(source.as_deref(), &config)
            }
            Err(e) => ExecutionResult::Failure(format!("invalid sandbox config: {e}")),
        }
    };
    Ok(env.new_string(encode_result(&result)?)?)
}

fn respond<'local>(
    env: &mut JNIEnv<'local>,
    outcome: Result<JString<'local>, BridgeError>,
) -> jstring {
    match outcome {
        Ok(text) => text.into_raw(),
        Err(e) => {
            throw_runtime_exception(env, &e.to_string());
            JObject::null().into_raw()
        }
    }
}

// ── JSON ──────────────────────────────────────────────────────────────────────

/// `null`, blank text and the JSON literal `null` all select the defaults.
pub fn decode_config(text: Option<&str>) -> Result<SandboxConfig, BridgeError> {
    match text.map(str::trim) {
        None | Some("") => Ok(SandboxConfig::default()),
        Some(json) => Ok(serde_json::from_str::<Option<SandboxConfig>>(json)?.unwrap_or_default()),
    }
}

pub fn encode_result(result: &ExecutionResult) -> Result<String, BridgeError> {
    Ok(serde_json::to_string(result)?)
}
