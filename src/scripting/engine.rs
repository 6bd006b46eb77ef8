/// `scripting/engine.rs` — one-shot script execution
///
/// `execute` builds a fresh session per call, runs the snippet and folds the
/// outcome into an `ExecutionResult`. Nothing survives between calls.

use serde::{Deserialize, Serialize};

use super::{
    sandbox::SandboxConfig,
    session::{RunStatus, Session},
};

// ── Script run result ─────────────────────────────────────────────────────────

/// What a snippet produced: its printed output, or the error that stopped it.
///
/// Output printed before a failure is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum ExecutionResult {
    Success(String),
    Failure(String),
}

impl ExecutionResult {
    /// The carried text, whichever variant this is.
    pub fn into_text(self) -> String {
        match self {
            ExecutionResult::Success(text) | ExecutionResult::Failure(text) => text,
        }
    }
}

// ── Execution ─────────────────────────────────────────────────────────────────

/// Run `source` in a fresh sandboxed session.
///
/// A missing source, a syntax error and a runtime error all come back as
/// `Failure`; so does a VM that could not be created.
pub fn execute(source: Option<&str>, config: &SandboxConfig) -> ExecutionResult {
    let mut session = match Session::new(config.trust) {
        Ok(s) => s,
        Err(e) => {
            log::error!("[script] {e}");
            return ExecutionResult::Failure(e.to_string());
        }
    };

    match session.run(source) {
        RunStatus::Ok => ExecutionResult::Success(session.take_output()),
        RunStatus::Error => {
            let message = session.error().unwrap_or_default().to_string();
            ExecutionResult::Failure(message)
        }
    }
}

#[cfg(test)]
impl ExecutionResult {
    fn is_success(&self) -> bool {
        matches!(self, ExecutionResult::Success(_))
    }

    fn text(&self) -> &str {
        match self {
            ExecutionResult::Success(text) | ExecutionResult::Failure(text) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scripting::sandbox::TrustLevel;

    fn run(source: &str) -> ExecutionResult {
        execute(Some(source), &SandboxConfig::default())
    }

    #[test]
    fn hello_world() {
        assert_eq!(
            run("print('hello', 'world')"),
            ExecutionResult::Success("hello world\n".into())
        );
    }

    #[test]
    fn empty_print_is_a_newline() {
        assert_eq!(run("print()"), ExecutionResult::Success("\n".into()));
    }

    #[test]
    fn no_print_means_empty_output() {
        assert_eq!(run("local x = 1 + 1"), ExecutionResult::Success(String::new()));
    }

    #[test]
    fn output_follows_call_order() {
        let result = run("for i = 1, 3 do print('line', i) end");
        assert_eq!(result, ExecutionResult::Success("line 1\nline 2\nline 3\n".into()));
    }

    #[test]
    fn syntax_error_returns_message_only() {
        let result = run("a + ");
        assert!(!result.is_success());
        assert!(result.text().contains("[string \"a + \"]:1:"), "got {result:?}");
    }

    #[test]
    fn runtime_error_discards_prior_output() {
        // The printed text never appears in the source, so it cannot reach
        // the message through the chunk name.
        let result = run("print(string.upper('partial')) error('boom')");
        match result {
            ExecutionResult::Failure(msg) => {
                assert!(msg.contains("boom"), "got {msg:?}");
                assert!(!msg.contains("PARTIAL"), "output leaked into error: {msg:?}");
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn absent_source_fails() {
        let result = execute(None, &SandboxConfig::default());
        assert!(!result.is_success());
        assert!(!result.text().is_empty());
    }

    #[test]
    fn sequential_runs_are_identical() {
        let first = run("print(\"a\") print(\"b\")");
        let second = run("print(\"a\") print(\"b\")");
        assert_eq!(first, ExecutionResult::Success("a\nb\n".into()));
        assert_eq!(first, second);
    }

    #[test]
    fn trust_level_is_honoured() {
        let basic = SandboxConfig { trust: TrustLevel::Basic };
        assert!(!execute(Some("os.time()"), &basic).is_success());
        assert!(execute(Some("os.time()"), &SandboxConfig::default()).is_success());
    }

    #[test]
    fn serializes_as_tagged_json() {
        let json = serde_json::to_value(ExecutionResult::Success("hi\n".into())).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "success", "text": "hi\n" }));

        let json = serde_json::to_value(ExecutionResult::Failure("bad".into())).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "failure", "text": "bad" }));
    }
}
