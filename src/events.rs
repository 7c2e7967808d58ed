//! Observer events broadcast to the presentation layer
//!
//! Listeners are called synchronously, in registration order. A bus with no
//! listeners simply drops events.

/// Events a Stack Tower round exposes to observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TowerEvent {
    /// Current score changed
    ScoreUpdated(u32),
    /// A placement snapped perfectly
    Perfect(bool),
    /// Round ended
    GameOver { score: u32, high_score: u32 },
}

type Listener<T> = Box<dyn FnMut(&T)>;

/// Ordered list of listeners for one event type
pub struct EventBus<T> {
    listeners: Vec<Listener<T>>,
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<T> std::fmt::Debug for EventBus<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<T> EventBus<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it runs after every earlier one
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Deliver `event` to every listener
    pub fn emit(&mut self, event: &T) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
