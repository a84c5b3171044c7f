//! Change notification.

/// Notification emitted by the controller.
///
/// Carries no payload; listeners read current state from the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// A committed edit changed the color.
    Change,
}

impl PickerEvent {
    /// The DOM event name for this notification.
    pub fn name(&self) -> &'static str {
        match self {
            PickerEvent::Change => "change",
        }
    }
}

/// Handle returned by [`ChangeEmitter::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(PickerEvent)>;

/// An ordered list of listeners invoked on every emitted event.
#[derive(Default)]
pub struct ChangeEmitter {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl ChangeEmitter {
    /// Create an emitter with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Listeners run in registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(PickerEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Invoke every listener with the event.
    pub fn emit(&mut self, event: PickerEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for ChangeEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_listeners_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = ChangeEmitter::new();

        let first = log.clone();
        emitter.subscribe(move |_| first.borrow_mut().push(1));
        let second = log.clone();
        emitter.subscribe(move |_| second.borrow_mut().push(2));

        emitter.emit(PickerEvent::Change);
        assert_eq!(*log.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut emitter = ChangeEmitter::new();
        let counter = count.clone();
        let id = emitter.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(emitter.unsubscribe(id));
        assert!(!emitter.unsubscribe(id));
        emitter.emit(PickerEvent::Change);
        assert_eq!(*count.borrow(), 0);
        assert!(emitter.is_empty());
    }

    #[test]
    fn test_event_name() {
        assert_eq!(PickerEvent::Change.name(), "change");
    }
}
