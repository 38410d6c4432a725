//! Display surface backed by the terminal window.

use crate::core::{DisplaySurface, SurfaceSlot};
use crate::types::{Panel, SurfaceArea};

/// The terminal window's display area.
///
/// Tracks whether the attached panel changed since the last frame so the
/// renderer can redraw in full instead of diffing two unrelated panels.
pub struct TerminalSurface {
    slot: SurfaceSlot,
    swapped: bool,
}

impl TerminalSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            slot: SurfaceSlot::new(SurfaceArea::new(width, height)),
            swapped: true,
        }
    }

    /// Returns true once after every attach, detach or resize.
    pub fn take_swapped(&mut self) -> bool {
        std::mem::take(&mut self.swapped)
    }
}

impl DisplaySurface for TerminalSurface {
    fn attach(&mut self, panel: Panel) {
        tracing::trace!(?panel, "attach");
        self.slot.attach(panel);
        self.swapped = true;
    }

    fn detach(&mut self, panel: &Panel) -> bool {
        let detached = self.slot.detach(panel);
        if detached {
            tracing::trace!(?panel, "detach");
            self.swapped = true;
        }
        detached
    }

    fn attached(&self) -> Option<&Panel> {
        self.slot.attached()
    }

    fn area(&self) -> SurfaceArea {
        self.slot.area()
    }

    fn resize(&mut self, area: SurfaceArea) {
        self.slot.resize(area);
        self.swapped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_flag_is_consumed() {
        let mut surface = TerminalSurface::new(80, 24);
        assert!(surface.take_swapped());
        assert!(!surface.take_swapped());

        surface.attach(Panel::Menu);
        assert!(surface.take_swapped());
        assert!(!surface.detach(&Panel::game("Snake")));
        assert!(!surface.take_swapped());
        assert!(surface.detach(&Panel::Menu));
        assert!(surface.take_swapped());
    }
}
