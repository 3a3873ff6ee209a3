//! Binds pointer events to the active mode's declared handler set.

use crate::context::ModeContext;
use crate::input::{PointerEvent, PointerEventKind};
use crate::mode::{ActiveMode, Mode};

/// The set of pointer events a mode declares handlers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventSet {
    pub down: bool,
    pub moved: bool,
    pub up: bool,
    pub out: bool,
}

impl EventSet {
    pub const NONE: Self = Self { down: false, moved: false, up: false, out: false };
    pub const ALL: Self = Self { down: true, moved: true, up: true, out: true };

    pub fn contains(&self, kind: PointerEventKind) -> bool {
        match kind {
            PointerEventKind::Down => self.down,
            PointerEventKind::Move => self.moved,
            PointerEventKind::Up => self.up,
            PointerEventKind::Out => self.out,
        }
    }
}

/// Owns the binding between the canvas's pointer events and the active
/// mode's handlers.
///
/// Invariant: after any [`EventDispatcher::attach`], exactly the new set is
/// bound — nothing lingers from the previous mode, and attaching twice
/// without a detach in between cannot double-bind.
#[derive(Debug, Default)]
pub struct EventDispatcher {
    bound: EventSet,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind exactly the given handler set, dropping any prior bindings first.
    pub fn attach(&mut self, set: EventSet) {
        self.detach();
        self.bound = set;
    }

    /// Remove every binding.
    pub fn detach(&mut self) {
        self.bound = EventSet::NONE;
    }

    pub fn bound(&self) -> EventSet {
        self.bound
    }

    /// Forward an event to the mode if its kind is bound; otherwise the
    /// event is silently ignored.
    pub fn dispatch(&self, event: &PointerEvent, mode: &mut ActiveMode, ctx: &mut ModeContext<'_>) {
        if !self.bound.contains(event.kind()) {
            return;
        }
        match event {
            PointerEvent::Down { pos } => mode.on_pointer_down(*pos, ctx),
            PointerEvent::Move { pos } => mode.on_pointer_move(*pos, ctx),
            PointerEvent::Up { pos } => mode.on_pointer_up(*pos, ctx),
            PointerEvent::Out => mode.on_pointer_out(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_replaces_prior_bindings() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.attach(EventSet::ALL);
        dispatcher.attach(EventSet { down: true, ..EventSet::NONE });

        assert!(dispatcher.bound().contains(PointerEventKind::Down));
        assert!(!dispatcher.bound().contains(PointerEventKind::Move));
        assert!(!dispatcher.bound().contains(PointerEventKind::Up));
        assert!(!dispatcher.bound().contains(PointerEventKind::Out));
    }

    #[test]
    fn test_detach_clears_everything() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.attach(EventSet::ALL);
        dispatcher.detach();
        assert_eq!(dispatcher.bound(), EventSet::NONE);
    }
}
