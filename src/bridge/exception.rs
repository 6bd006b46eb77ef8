/// `bridge/exception.rs` — signalling plumbing failures to the JVM

use jni::JNIEnv;

const RUNTIME_EXCEPTION: &str = "java/lang/RuntimeException";

/// Throw `java.lang.RuntimeException(message)` on the calling thread.
///
/// If the class cannot be resolved the JVM is in no state to continue and
/// the process aborts. A pending exception is left alone; the JVM reports
/// the first one. If the pending check itself fails, the throw goes ahead so
/// the caller never sees a bare `null`.
pub fn throw_runtime_exception(env: &mut JNIEnv, message: &str) {
    log::error!(target: "NativeLib", "Throwing Java exception: {message}");

    match env.exception_check() {
        Ok(true) => {
            log::warn!(target: "NativeLib", "exception already pending, not throwing");
            return;
        }
        Ok(false) => {}
        Err(e) => {
            log::error!(target: "NativeLib", "ExceptionCheck failed ({e}), throwing anyway");
        }
    }

    let class = match env.find_class(RUNTIME_EXCEPTION) {
        Ok(class) => class,
        Err(e) => {
            log::error!(target: "NativeLib", "cannot resolve {RUNTIME_EXCEPTION}: {e}");
            std::process::abort();
        }
    };

    if let Err(e) = env.throw_new(&class, message) {
        log::error!(target: "NativeLib", "ThrowNew failed: {e}");
    }
    let _ = env.delete_local_ref(class);
}
