use foundation::ids::RecordId;
use foundation::math::Vec2;

/// Interaction phase. Exactly one is active at a time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Pointer is over a record; a tooltip tracks the pointer.
    Hovering(RecordId),
    /// A record was clicked; the detail panel is pinned to it.
    Selected(RecordId),
}

/// A normalized pointer event, already hit-tested by the caller.
///
/// `Click` carries the record under the pointer at press time, or `None`
/// for a click on empty space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    Enter(RecordId),
    Move(Vec2),
    Leave,
    Click(Option<RecordId>),
}

/// Overlay state after an event: what the host should draw now.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OverlayUpdate {
    /// Tooltip record and its anchor position, if one is showing.
    pub tooltip: Option<(RecordId, Vec2)>,
    /// Record pinned in the detail panel, if any.
    pub panel: Option<RecordId>,
    /// False when the event was a no-op and nothing needs repainting.
    pub changed: bool,
}

/// Pointer interaction state machine.
///
/// Transition contract:
/// - `Idle`: `Enter` starts a hover; `Move`, `Leave` and `Click` (record or
///   not) are no-ops. No click-only path reaches `Hovering` or `Selected`.
/// - `Hovering(r)`: `Move` retargets the tooltip anchor; `Enter(r2)` switches
///   the hover; `Leave` returns to `Idle`; `Click(Some(r))` selects.
///   `Click(None)` drops back to `Idle`.
/// - `Selected(r)`: hover events (`Enter`, `Move`, `Leave`) are ignored so
///   the panel stays pinned. `Click(Some(r))` again is a no-op;
///   `Click(Some(other))` moves the selection; `Click(None)` deselects.
///
/// The machine is synchronous and deterministic: one event in, one
/// transition out, no renderer access.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionController {
    phase: Phase,
    pointer: Vec2,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            pointer: Vec2::new(0.0, 0.0),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Record whose detail panel is pinned, if any.
    pub fn selected(&self) -> Option<RecordId> {
        match self.phase {
            Phase::Selected(id) => Some(id),
            _ => None,
        }
    }

    /// Applies one pointer event and reports the resulting overlay state.
    pub fn apply(&mut self, event: PointerEvent) -> OverlayUpdate {
        if let PointerEvent::Move(position) = event {
            self.pointer = position;
        }

        let next = match (self.phase, event) {
            (Phase::Idle, PointerEvent::Enter(id)) => Phase::Hovering(id),
            (Phase::Idle, _) => Phase::Idle,

            (Phase::Hovering(_), PointerEvent::Enter(id)) => Phase::Hovering(id),
            (Phase::Hovering(id), PointerEvent::Move(_)) => Phase::Hovering(id),
            (Phase::Hovering(_), PointerEvent::Leave) => Phase::Idle,
            (Phase::Hovering(_), PointerEvent::Click(Some(id))) => Phase::Selected(id),
            (Phase::Hovering(_), PointerEvent::Click(None)) => Phase::Idle,

            // A pinned selection ignores hover traffic entirely.
            (Phase::Selected(id), PointerEvent::Enter(_)) => Phase::Selected(id),
            (Phase::Selected(id), PointerEvent::Move(_)) => Phase::Selected(id),
            (Phase::Selected(id), PointerEvent::Leave) => Phase::Selected(id),
            (Phase::Selected(_), PointerEvent::Click(Some(id))) => Phase::Selected(id),
            (Phase::Selected(_), PointerEvent::Click(None)) => Phase::Idle,
        };

        let changed = next != self.phase || matches!((next, event), (Phase::Hovering(_), PointerEvent::Move(_)));
        self.phase = next;
        self.snapshot(changed)
    }

    /// Returns to `Idle`, clearing tooltip and panel. Called on view switch
    /// and dataset reload.
    pub fn reset(&mut self) -> OverlayUpdate {
        let changed = self.phase != Phase::Idle;
        self.phase = Phase::Idle;
        self.snapshot(changed)
    }

    fn snapshot(&self, changed: bool) -> OverlayUpdate {
        let tooltip = match self.phase {
            Phase::Hovering(id) => Some((id, self.pointer)),
            _ => None,
        };
        OverlayUpdate {
            tooltip,
            panel: self.selected(),
            changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{InteractionController, Phase, PointerEvent};
    use foundation::ids::RecordId;
    use foundation::math::Vec2;

    fn id(n: u32) -> RecordId {
        RecordId::new(n)
    }

    #[test]
    fn clicks_without_a_hover_never_leave_idle() {
        let mut c = InteractionController::new();
        c.apply(PointerEvent::Click(Some(id(3))));
        c.apply(PointerEvent::Click(None));
        c.apply(PointerEvent::Move(Vec2::new(10.0, 10.0)));
        c.apply(PointerEvent::Leave);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn enter_move_leave_round_trip() {
        let mut c = InteractionController::new();

        let up = c.apply(PointerEvent::Enter(id(5)));
        assert_eq!(c.phase(), Phase::Hovering(id(5)));
        assert!(up.changed);

        let up = c.apply(PointerEvent::Move(Vec2::new(42.0, 7.0)));
        assert_eq!(up.tooltip, Some((id(5), Vec2::new(42.0, 7.0))));
        assert!(up.changed);

        let up = c.apply(PointerEvent::Leave);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(up.tooltip, None);
    }

    #[test]
    fn hover_then_click_pins_the_panel() {
        let mut c = InteractionController::new();
        c.apply(PointerEvent::Enter(id(2)));
        let up = c.apply(PointerEvent::Click(Some(id(2))));
        assert_eq!(c.phase(), Phase::Selected(id(2)));
        assert_eq!(up.panel, Some(id(2)));
        assert_eq!(up.tooltip, None);
    }

    #[test]
    fn selection_ignores_hover_traffic() {
        let mut c = InteractionController::new();
        c.apply(PointerEvent::Enter(id(2)));
        c.apply(PointerEvent::Click(Some(id(2))));

        let up = c.apply(PointerEvent::Enter(id(9)));
        assert_eq!(c.phase(), Phase::Selected(id(2)));
        assert!(!up.changed);
        let up = c.apply(PointerEvent::Move(Vec2::new(1.0, 1.0)));
        assert!(!up.changed);
        let up = c.apply(PointerEvent::Leave);
        assert!(!up.changed);
        assert_eq!(up.panel, Some(id(2)));
    }

    #[test]
    fn clicking_the_selected_record_again_is_a_no_op() {
        let mut c = InteractionController::new();
        c.apply(PointerEvent::Enter(id(2)));
        c.apply(PointerEvent::Click(Some(id(2))));
        let up = c.apply(PointerEvent::Click(Some(id(2))));
        assert!(!up.changed);
        assert_eq!(c.phase(), Phase::Selected(id(2)));
    }

    #[test]
    fn clicking_another_record_moves_the_selection() {
        let mut c = InteractionController::new();
        c.apply(PointerEvent::Enter(id(2)));
        c.apply(PointerEvent::Click(Some(id(2))));
        let up = c.apply(PointerEvent::Click(Some(id(8))));
        assert!(up.changed);
        assert_eq!(up.panel, Some(id(8)));
    }

    #[test]
    fn empty_click_deselects() {
        let mut c = InteractionController::new();
        c.apply(PointerEvent::Enter(id(2)));
        c.apply(PointerEvent::Click(Some(id(2))));
        let up = c.apply(PointerEvent::Click(None));
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(up.panel, None);
        assert!(up.changed);
    }

    #[test]
    fn reset_clears_everything() {
        let mut c = InteractionController::new();
        c.apply(PointerEvent::Enter(id(2)));
        c.apply(PointerEvent::Click(Some(id(2))));
        let up = c.reset();
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(up.panel, None);
        assert!(up.changed);

        // Resetting an idle machine reports no change.
        assert!(!c.reset().changed);
    }
}
