//! Top-level view selection.
//!
//! [`TabRouter`] is a three-state selector over [`Tab`]. It only moves on an
//! explicit selection; there is no history and no deep-linking. Each tab maps
//! to a [`NavIcon`] pair for the bottom navigation bar.

/// A top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Catalog browsing with search, category and sort.
    #[default]
    Search,
    /// Tasting diary.
    Diary,
    /// Static settings list.
    Settings,
}

/// Icon drawn for a tab in the navigation bar.
///
/// Every tab has a filled variant (selected) and an outline variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    SearchFilled,
    SearchOutline,
    BookFilled,
    BookOutline,
    GearFilled,
    GearOutline,
}

impl NavIcon {
    /// Terminal glyph for the icon.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::SearchFilled => "●",
            Self::SearchOutline => "○",
            Self::BookFilled => "■",
            Self::BookOutline => "□",
            Self::GearFilled => "◆",
            Self::GearOutline => "◇",
        }
    }
}

impl Tab {
    /// All tabs in navigation bar order.
    pub const ALL: [Self; 3] = [Self::Search, Self::Diary, Self::Settings];

    /// Label shown under the icon.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Search => "Explore",
            Self::Diary => "Diary",
            Self::Settings => "Settings",
        }
    }

    /// Icon for this tab in its selected or unselected state.
    #[must_use]
    pub const fn icon(self, selected: bool) -> NavIcon {
        match (self, selected) {
            (Self::Search, true) => NavIcon::SearchFilled,
            (Self::Search, false) => NavIcon::SearchOutline,
            (Self::Diary, true) => NavIcon::BookFilled,
            (Self::Diary, false) => NavIcon::BookOutline,
            (Self::Settings, true) => NavIcon::GearFilled,
            (Self::Settings, false) => NavIcon::GearOutline,
        }
    }

    /// One-based position, used for the `1`/`2`/`3` shortcuts.
    #[must_use]
    pub const fn shortcut(self) -> char {
        match self {
            Self::Search => '1',
            Self::Diary => '2',
            Self::Settings => '3',
        }
    }

    /// Looks up a tab by its shortcut key.
    #[must_use]
    pub fn from_shortcut(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.shortcut() == key)
    }

    /// Tab to the right, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Search => Self::Diary,
            Self::Diary => Self::Settings,
            Self::Settings => Self::Search,
        }
    }

    /// Tab to the left, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Search => Self::Settings,
            Self::Diary => Self::Search,
            Self::Settings => Self::Diary,
        }
    }
}

/// Single-select state machine over the top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabRouter {
    active: Tab,
}

impl TabRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn active(&self) -> Tab {
        self.active
    }

    /// Makes `tab` active. Returns `true` if the active tab changed.
    pub fn select(&mut self, tab: Tab) -> bool {
        if self.active == tab {
            return false;
        }
        tracing::debug!(from = ?self.active, to = ?tab, "tab selected");
        self.active = tab;
        true
    }

    /// Selects the tab to the right, wrapping around.
    pub fn next(&mut self) -> Tab {
        let tab = self.active.next();
        self.select(tab);
        tab
    }

    /// Selects the tab to the left, wrapping around.
    pub fn previous(&mut self) -> Tab {
        let tab = self.active.previous();
        self.select(tab);
        tab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_search() {
        assert_eq!(TabRouter::new().active(), Tab::Search);
    }

    #[test]
    fn select_reports_change() {
        let mut router = TabRouter::new();
        assert!(router.select(Tab::Diary));
        assert!(!router.select(Tab::Diary));
        assert_eq!(router.active(), Tab::Diary);
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let mut router = TabRouter::new();
        assert_eq!(router.previous(), Tab::Settings);
        assert_eq!(router.next(), Tab::Search);
        assert_eq!(router.next(), Tab::Diary);
    }

    #[test]
    fn only_active_tab_uses_filled_icon() {
        let router = TabRouter { active: Tab::Diary };
        let icons: Vec<NavIcon> = Tab::ALL
            .iter()
            .map(|tab| tab.icon(*tab == router.active()))
            .collect();
        assert_eq!(
            icons,
            vec![NavIcon::SearchOutline, NavIcon::BookFilled, NavIcon::GearOutline]
        );
    }

    #[test]
    fn shortcuts_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_shortcut(tab.shortcut()), Some(tab));
        }
        assert_eq!(Tab::from_shortcut('4'), None);
    }
}
