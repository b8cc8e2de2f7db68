#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// State for the header dropdown menu.
///
/// Mirrored into the DOM as `aria-expanded` on the trigger button and the
/// `hidden` attribute on the dropdown container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Force closed (outside click or link selection).
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Value for the trigger's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}
