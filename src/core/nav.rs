use super::constants::{BACK_TO_TOP_PX, NAVBAR_SCROLLED_PX, NAV_ACTIVE_OFFSET_PX};

/// A page section as seen by the navigation highlighter.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionMark {
    pub id: String,
    pub offset_top: f64,
}

/// Id of the last section whose top, less the activation offset, has been
/// scrolled past.
pub fn active_section(sections: &[SectionMark], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.offset_top - NAV_ACTIVE_OFFSET_PX)
        .last()
        .map(|s| s.id.as_str())
}

/// Section id a nav link points at, for in-page `#anchor` hrefs only.
pub fn anchor_target(href: &str) -> Option<&str> {
    let hash = href.find('#')?;
    let id = &href[hash + 1..];
    (!id.is_empty()).then_some(id)
}

#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_PX
}

#[inline]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_PX
}

/// Mobile menu open/closed flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Selecting a link always closes the menu.
    pub fn select_link(&mut self) {
        self.open = false;
    }
}
