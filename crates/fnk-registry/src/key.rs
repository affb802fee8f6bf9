use std::sync::{LazyLock, Mutex};

use string_interner::{DefaultBackend, DefaultSymbol, StringInterner};

static KEY_INTERNER: LazyLock<Mutex<StringInterner<DefaultBackend>>> =
    LazyLock::new(|| Mutex::new(StringInterner::default()));

/// An interned registry key.
///
/// Keys created from equal strings share one symbol, so map operations
/// compare symbols instead of string data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(DefaultSymbol);

impl Key {
    pub fn new(s: &str) -> Self {
        Self(KEY_INTERNER.lock().unwrap().get_or_intern(s))
    }

    pub fn as_str(&self) -> String {
        self.resolve_with(|s| s.to_string())
    }

    pub fn resolve_with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&str) -> R,
    {
        let interner = KEY_INTERNER.lock().unwrap();
        let resolved = interner.resolve(self.0).unwrap();
        f(resolved)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.resolve_with(|s| write!(f, "{}", s))
    }
}
