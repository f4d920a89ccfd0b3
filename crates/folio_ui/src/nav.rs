//! Site navigation table.

/// One header link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Link text.
    pub label: &'static str,
    /// Route path.
    pub path: &'static str,
    /// Also active for any `path/<child>` route.
    pub matches_children: bool,
}

impl NavItem {
    const fn exact(label: &'static str, path: &'static str) -> Self {
        Self {
            label,
            path,
            matches_children: false,
        }
    }

    /// Whether this link should be highlighted on `current`.
    ///
    /// Exact match, or for section links any `path/...` child route.
    #[must_use]
    pub fn is_active(&self, current: &str) -> bool {
        if current == self.path {
            return true;
        }
        self.matches_children
            && current
                .strip_prefix(self.path)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Header links, in display order.
pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem::exact("Skills", "/"),
    NavItem::exact("About", "/about"),
    NavItem::exact("Projects", "/projects"),
    NavItem::exact("Services", "/services"),
    NavItem::exact("Contact", "/contact"),
    NavItem {
        label: "Blog",
        path: "/blog",
        matches_children: true,
    },
];

/// The first link active on `current`, if any.
#[must_use]
pub fn active_item(current: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.is_active(current))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_routes() {
        assert_eq!(active_item("/").map(|i| i.label), Some("Skills"));
        assert_eq!(active_item("/contact").map(|i| i.label), Some("Contact"));
        assert_eq!(active_item("/about/team"), None);
        assert_eq!(active_item("/nowhere"), None);
    }

    #[test]
    fn test_blog_children() {
        assert_eq!(active_item("/blog").map(|i| i.label), Some("Blog"));
        assert_eq!(active_item("/blog/3").map(|i| i.label), Some("Blog"));
        assert_eq!(active_item("/blogroll"), None);
    }

    #[test]
    fn test_only_one_active() {
        for path in ["/", "/about", "/blog/rust-wasm"] {
            assert_eq!(NAV_ITEMS.iter().filter(|i| i.is_active(path)).count(), 1);
        }
    }
}
