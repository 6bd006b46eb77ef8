/// `bridge/borrowed.rs` — scoped view over a JVM-owned string
///
/// `GetStringUTFChars` pins (or copies, at the VM's discretion) the string's
/// modified-UTF-8 bytes; `JavaStr` releases them when dropped. A null handle
/// never reaches the JVM and reads back as `None`.

use std::borrow::Cow;

use jni::{objects::JString, strings::JavaStr, JNIEnv};

use super::BridgeError;

pub struct BorrowedStr<'local, 'other_local: 'obj_ref, 'obj_ref> {
    chars: Option<JavaStr<'local, 'other_local, 'obj_ref>>,
}

impl<'local, 'other_local: 'obj_ref, 'obj_ref> BorrowedStr<'local, 'other_local, 'obj_ref> {
    /// Borrow `handle` until the returned value is dropped.
    pub fn borrow(
        env: &mut JNIEnv<'local>,
        handle: &'obj_ref JString<'other_local>,
    ) -> Result<Self, BridgeError> {
        if handle.is_null() {
            return Ok(Self { chars: None });
        }
        let chars = env.get_string(handle)?;
        Ok(Self { chars: Some(chars) })
    }

    /// The text, or `None` when the caller passed `null`.
    ///
    /// Borrowed in place when the bytes are plain UTF-8; strings carrying
    /// embedded NULs or supplementary characters are decoded into an owned
    /// copy.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        self.chars.as_ref().map(Cow::from)
    }
}
