// UI models module
// Toggle state for the site navigation and curriculum, plus hash routes

use std::fmt;

/// Mobile navigation: the menu is collapsed and the toggle button closed
/// until the button is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub collapsed: bool,
    pub opened: bool,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            collapsed: true,
            opened: false,
        }
    }
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
        self.opened = !self.opened;
    }
}

/// One top-level curriculum entry whose details list can be expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurriculumSection {
    pub title: String,
    pub expanded: bool,
}

impl CurriculumSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            expanded: false,
        }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn details_hidden(&self) -> bool {
        !self.expanded
    }
}

/// The collapsible curriculum outline. Every section starts collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Curriculum {
    sections: Vec<CurriculumSection>,
}

impl Curriculum {
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: titles.into_iter().map(CurriculumSection::new).collect(),
        }
    }

    pub fn sections(&self) -> &[CurriculumSection] {
        &self.sections
    }

    /// Flip one section. Returns `false` if `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.sections.get_mut(index) {
            Some(section) => {
                section.toggle();
                true
            }
            None => false,
        }
    }
}

/// A `#target:page` location hash naming a fragment and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentRoute {
    pub target: String,
    pub page: String,
}

impl FragmentRoute {
    pub fn new(target: impl Into<String>, page: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            page: page.into(),
        }
    }

    /// Parse `#content:intro` (leading `#` optional). Both parts must be non-empty.
    pub fn from_hash(hash: &str) -> Option<Self> {
        let hash = hash.strip_prefix('#').unwrap_or(hash);
        let mut parts = hash.split(':');
        let target = parts.next().filter(|t| !t.is_empty())?;
        let page = parts.next().filter(|p| !p.is_empty())?;
        Some(Self::new(target, page))
    }

    pub fn file_name(&self) -> String {
        format!("{}.html", self.page)
    }
}

impl fmt::Display for FragmentRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.target, self.page)
    }
}
