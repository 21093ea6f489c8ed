use owdle_types::{GameMode, GameVariant, GuessError};

#[derive(Debug, Clone, PartialEq)]
pub enum RoundEvent {
    RoundStarted {
        variant: GameVariant,
        mode: GameMode,
    },
    RoundResumed {
        variant: GameVariant,
        date_key: String,
        guess_count: usize,
        solved: bool,
    },
    GuessAccepted {
        variant: GameVariant,
        hero_name: String,
        attempt: usize,
    },
    GuessRejected {
        variant: GameVariant,
        error: GuessError,
    },
    RoundSolved {
        variant: GameVariant,
        answer: String,
        attempts: usize,
    },
}

impl RoundEvent {
    pub fn variant(&self) -> GameVariant {
        match self {
            RoundEvent::RoundStarted { variant, .. } => *variant,
            RoundEvent::RoundResumed { variant, .. } => *variant,
            RoundEvent::GuessAccepted { variant, .. } => *variant,
            RoundEvent::GuessRejected { variant, .. } => *variant,
            RoundEvent::RoundSolved { variant, .. } => *variant,
        }
    }
}

/// Receives round events, e.g. to play the win animation on `RoundSolved`.
pub trait RoundEventHandler {
    fn handle_event(&mut self, event: RoundEvent);
}

/// Simple event bus for distributing round events
pub struct RoundEventBus {
    handlers: Vec<Box<dyn RoundEventHandler>>,
}

impl RoundEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn RoundEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: RoundEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for RoundEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct TestHandler {
        events: Rc<RefCell<Vec<RoundEvent>>>,
    }

    impl RoundEventHandler for TestHandler {
        fn handle_event(&mut self, event: RoundEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn test_event_bus_fans_out() {
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));

        let mut bus = RoundEventBus::new();
        bus.add_handler(Box::new(TestHandler { events: first.clone() }));
        bus.add_handler(Box::new(TestHandler { events: second.clone() }));

        let event = RoundEvent::RoundSolved {
            variant: GameVariant::Quote,
            answer: "Mercy".to_string(),
            attempts: 3,
        };
        bus.publish(event.clone());

        assert_eq!(first.borrow().as_slice(), &[event.clone()]);
        assert_eq!(second.borrow().as_slice(), &[event]);
        assert_eq!(first.borrow()[0].variant(), GameVariant::Quote);
    }
}
