//! Navigation drawer state
//!
//! Open/close state machine for the page's menu. Opening moves focus to
//! the first link, Escape and link activation close, and the active link
//! is marked by matching the tail of its href against the current path.

pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

pub struct Drawer {
    links: Vec<NavLink>,
    open: bool,
    active: Option<usize>,
    focused: Option<usize>,
}

impl Drawer {
    /// A drawer with no links never activates
    pub fn new(links: Vec<NavLink>) -> Option<Self> {
        if links.is_empty() {
            return None;
        }
        Some(Self {
            links,
            open: false,
            active: None,
            focused: None,
        })
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Flip the drawer; opening focuses the first link. Returns the new
    /// open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.focused = if self.open { Some(0) } else { None };
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
        self.focused = None;
    }

    /// Follow a link: closes the drawer and records it as active
    pub fn activate(&mut self, index: usize) -> Option<&NavLink> {
        if index >= self.links.len() {
            return None;
        }
        self.active = Some(index);
        self.close();
        Some(&self.links[index])
    }

    /// Mark the link whose href ends with the given path
    pub fn mark_active(&mut self, path: &str) {
        self.active = self.links.iter().position(|l| l.href.ends_with(path));
    }
}
