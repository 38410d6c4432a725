//! The launcher's shared display area.

use crate::types::{Panel, SurfaceArea};

/// Single container the launcher window swaps panels in and out of.
///
/// Only the session switcher (and controllers it calls into) mutate the
/// surface, all on the UI thread.
pub trait DisplaySurface {
    /// Attach `panel`. The caller detaches whatever was attached first.
    fn attach(&mut self, panel: Panel);

    /// Detach `panel` if it is the one attached. Returns whether it was.
    fn detach(&mut self, panel: &Panel) -> bool;

    fn attached(&self) -> Option<&Panel>;

    fn area(&self) -> SurfaceArea;

    fn resize(&mut self, area: SurfaceArea);
}

/// Plain in-memory surface: one slot and a size.
#[derive(Debug, Clone, Default)]
pub struct SurfaceSlot {
    attached: Option<Panel>,
    area: SurfaceArea,
}

impl SurfaceSlot {
    pub fn new(area: SurfaceArea) -> Self {
        Self {
            attached: None,
            area,
        }
    }
}

impl DisplaySurface for SurfaceSlot {
    fn attach(&mut self, panel: Panel) {
        if let Some(previous) = self.attached.replace(panel) {
            tracing::warn!(?previous, "attached over an occupied surface");
        }
    }

    fn detach(&mut self, panel: &Panel) -> bool {
        if self.attached.as_ref() == Some(panel) {
            self.attached = None;
            true
        } else {
            false
        }
    }

    fn attached(&self) -> Option<&Panel> {
        self.attached.as_ref()
    }

    fn area(&self) -> SurfaceArea {
        self.area
    }

    fn resize(&mut self, area: SurfaceArea) {
        self.area = area;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detach_ignores_other_panels() {
        let mut slot = SurfaceSlot::new(SurfaceArea::new(10, 5));
        slot.attach(Panel::game("Snake"));
        assert!(!slot.detach(&Panel::Menu));
        assert!(!slot.detach(&Panel::game("TicTacToe")));
        assert_eq!(slot.attached(), Some(&Panel::game("Snake")));
        assert!(slot.detach(&Panel::game("Snake")));
        assert_eq!(slot.attached(), None);
    }
}
