/// Whether `href` points into the current page.
pub fn is_same_page_link(href: &str) -> bool {
    href.starts_with('#')
}

/// A validated same-page fragment reference such as `#about`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fragment<'a> {
    href: &'a str,
}

impl<'a> Fragment<'a> {
    /// Parses `#id`. A bare `#`, a missing `#`, or whitespace inside the id is rejected.
    pub fn parse(href: &'a str) -> Option<Self> {
        let id = href.strip_prefix('#')?;
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return None;
        }
        Some(Self { href })
    }

    pub fn id(&self) -> &'a str {
        &self.href[1..]
    }

    /// The fragment including its leading `#`, suitable for a history entry.
    pub fn as_str(&self) -> &'a str {
        self.href
    }
}
