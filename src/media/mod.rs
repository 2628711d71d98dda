//! Media reference resolution.
//!
//! Content records store bare object keys, not full URLs. Resolution
//! prefixes the fixed storage origin and is idempotent, so references that
//! are already fully qualified pass through unchanged.

/// Resolves stored media references to displayable URLs.
#[derive(Debug, Clone)]
pub struct MediaResolver {
    origin: String,
}

impl MediaResolver {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a stored reference to a displayable URL.
    pub fn resolve(&self, reference: &str) -> String {
        let reference = reference.trim();
        if reference.starts_with("http://")
            || reference.starts_with("https://")
            || reference.starts_with(&self.origin)
        {
            return reference.to_string();
        }
        format!("{}/{}", self.origin, reference.trim_start_matches('/'))
    }

    /// Resolve a reference field in place, leaving blanks untouched.
    pub fn resolve_in_place(&self, reference: &mut String) {
        if !reference.trim().is_empty() {
            *reference = self.resolve(reference);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://lafaek-media.s3.ap-southeast-2.amazonaws.com";

    #[test]
    fn test_bare_key_gets_origin_prefix() {
        let resolver = MediaResolver::new(ORIGIN);
        assert_eq!(resolver.resolve("foo.jpg"), format!("{}/foo.jpg", ORIGIN));
    }

    #[test]
    fn test_leading_slashes_stripped() {
        let resolver = MediaResolver::new(ORIGIN);
        assert_eq!(resolver.resolve("/foo.jpg"), format!("{}/foo.jpg", ORIGIN));
        assert_eq!(resolver.resolve("//foo.jpg"), format!("{}/foo.jpg", ORIGIN));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let resolver = MediaResolver::new(ORIGIN);
        let once = resolver.resolve("magazines/cover.png");
        let twice = resolver.resolve(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_full_urls_pass_through() {
        let resolver = MediaResolver::new(ORIGIN);
        let url = format!("{}/foo.jpg", ORIGIN);
        assert_eq!(resolver.resolve(&url), url);
        assert_eq!(
            resolver.resolve("https://elsewhere.example.org/a.png"),
            "https://elsewhere.example.org/a.png"
        );
        assert_eq!(
            resolver.resolve("http://elsewhere.example.org/a.png"),
            "http://elsewhere.example.org/a.png"
        );
    }

    #[test]
    fn test_trailing_slash_on_origin_ignored() {
        let resolver = MediaResolver::new(format!("{}/", ORIGIN));
        assert_eq!(resolver.resolve("foo.jpg"), format!("{}/foo.jpg", ORIGIN));
    }

    #[test]
    fn test_resolve_in_place_skips_blank() {
        let resolver = MediaResolver::new(ORIGIN);
        let mut blank = String::new();
        resolver.resolve_in_place(&mut blank);
        assert!(blank.is_empty());

        let mut key = "foo.jpg".to_string();
        resolver.resolve_in_place(&mut key);
        assert_eq!(key, format!("{}/foo.jpg", ORIGIN));
    }
}
