// Page navigation state.
// Handles the page stack and breadcrumb trail between the catalog and paper pages.

/// A node in the navigation breadcrumb trail.
#[derive(Debug, Clone)]
pub struct BreadcrumbNode {
    /// Display label for the breadcrumb.
    pub label: String,
}

/// A page in the navigation hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Top level: the paper picker
    Catalog,
    /// Article page for one paper
    Paper { id: String, title: String },
}

impl Page {
    /// Get the display title for this page.
    pub fn title(&self) -> String {
        match self {
            Page::Catalog => "Select a Paper".to_string(),
            Page::Paper { title, .. } => format!("{} / Research Visualization", title),
        }
    }

    /// Create a breadcrumb node for this page.
    pub fn to_breadcrumb(&self) -> BreadcrumbNode {
        let label = match self {
            Page::Catalog => "Papers".to_string(),
            Page::Paper { title, .. } => title.clone(),
        };
        BreadcrumbNode { label }
    }

    /// Paper id, if this is a paper page.
    pub fn paper_id(&self) -> Option<&str> {
        match self {
            Page::Paper { id, .. } => Some(id),
            Page::Catalog => None,
        }
    }
}

/// Navigation stack of pages. Never empty.
#[derive(Debug, Clone)]
pub struct NavigationStack {
    /// Stack of pages (bottom = root, top = current)
    stack: Vec<Page>,
}

impl NavigationStack {
    /// Create a new navigation stack starting at the given page.
    pub fn new(root: Page) -> Self {
        Self { stack: vec![root] }
    }

    /// Get the current page.
    pub fn current(&self) -> &Page {
        // The root is never popped, so the stack always has a last element.
        &self.stack[self.stack.len() - 1]
    }

    /// Push a new page onto the stack (drill down).
    pub fn push(&mut self, page: Page) {
        self.stack.push(page);
    }

    /// Pop the current page (go back). Returns false if at root.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Check if we can go back (not at root).
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Get the breadcrumb trail.
    pub fn breadcrumbs(&self) -> Vec<BreadcrumbNode> {
        self.stack.iter().map(|page| page.to_breadcrumb()).collect()
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Page::Catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zep() -> Page {
        Page::Paper {
            id: "zep".to_string(),
            title: "Zep: Living Memory".to_string(),
        }
    }

    #[test]
    fn test_navigation_stack() {
        let mut nav = NavigationStack::default();

        assert!(!nav.can_go_back());

        nav.push(zep());
        assert!(nav.can_go_back());
        assert_eq!(nav.current().paper_id(), Some("zep"));

        assert!(nav.pop());
        assert_eq!(nav.current(), &Page::Catalog);

        // Can't pop past root
        assert!(!nav.pop());
        assert_eq!(nav.breadcrumbs().len(), 1);
    }

    #[test]
    fn test_breadcrumbs() {
        let mut nav = NavigationStack::default();
        nav.push(zep());

        let breadcrumbs = nav.breadcrumbs();
        assert_eq!(breadcrumbs.len(), 2);
        assert_eq!(breadcrumbs[0].label, "Papers");
        assert_eq!(breadcrumbs[1].label, "Zep: Living Memory");
    }

    #[test]
    fn test_page_titles() {
        assert_eq!(Page::Catalog.title(), "Select a Paper");
        assert_eq!(zep().title(), "Zep: Living Memory / Research Visualization");
    }
}
