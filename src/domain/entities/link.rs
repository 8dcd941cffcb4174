//! Short link entity mapping a slug to its redirect target.

/// A shortened URL mapping.
///
/// `slug` is the fixed-length identifier that keys the store and forms the
/// path segment of the short URL; `target` is the absolute URL it redirects
/// to. Links are immutable once persisted: there is no update, expiry, or
/// delete in the data model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub slug: String,
    pub target: String,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(slug: String, target: String) -> Self {
        Self { slug, target }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_creation() {
        let link = ShortLink::new("aB3xYz".to_string(), "https://example.com/".to_string());

        assert_eq!(link.slug, "aB3xYz");
        assert_eq!(link.target, "https://example.com/");
    }

    #[test]
    fn test_short_link_equality() {
        let a = ShortLink::new("aB3xYz".to_string(), "https://example.com/".to_string());
        let b = a.clone();

        assert_eq!(a, b);
    }
}
