/// Events delivered to the accordion by its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<N> {
    /// Pointer click, targeted at the deepest element under the pointer.
    Click { target: N },
    /// The document finished loading.
    Load,
}

impl<N> Event<N> {
    pub fn click(target: N) -> Self {
        Event::Click { target }
    }
}

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// The host should suppress the event's default action.
    pub default_prevented: bool,
    /// Number of items whose state changed.
    pub transitions: usize,
}

impl EventOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn is_ignored(&self) -> bool {
        !self.default_prevented && self.transitions == 0
    }
}
