/// `bridge/` — JNI glue between the host JVM and the scripting engine
///
/// The JVM owns every `java.lang.String` crossing this boundary. Inputs are
/// borrowed for the duration of one call and released on every exit path;
/// results are handed back as freshly allocated Java strings.
pub mod borrowed;
pub mod entry;
pub mod exception;

/// Failures of the JNI plumbing itself. Script errors never end up here.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("JNI call failed: {0}")]
    Jni(#[from] jni::errors::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One JVM per test process; JNI allows no more.
#[cfg(test)]
pub(crate) fn test_vm() -> &'static jni::JavaVM {
    use jni::{InitArgsBuilder, JNIVersion, JavaVM};
    use std::sync::OnceLock;

    static VM: OnceLock<JavaVM> = OnceLock::new();
    VM.get_or_init(|| {
        let args = InitArgsBuilder::new()
            .version(JNIVersion::V8)
            .build()
            .expect("JVM init args");
        JavaVM::new(args).expect("start JVM (is JAVA_HOME set?)")
    })
}
