use std::fmt;

/// Cache key of one page result, serialized as `"{page}-{limit}"`.
///
/// Two requests with the same page and limit always produce equal keys.
///
/// # Examples
///
/// ```
/// use pokecache_core::cache::PageKey;
///
/// assert_eq!(PageKey::new(2, 10).as_str(), "2-10");
/// assert_eq!(PageKey::new(2, 10), PageKey::new(2, 10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageKey(String);

impl PageKey {
    /// Returns the key for the given page and limit.
    pub fn new(page: u32, limit: u32) -> Self {
        Self(format!("{}-{}", page, limit))
    }

    /// Returns the serialized key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_key_format() {
        assert_eq!(PageKey::new(1, 10).as_str(), "1-10");
        assert_eq!(PageKey::new(12, 5).to_string(), "12-5");
    }

    #[test]
    fn test_same_inputs_same_slot() {
        assert_eq!(PageKey::new(3, 20), PageKey::new(3, 20));
        assert_ne!(PageKey::new(3, 20), PageKey::new(20, 3));
    }
}
