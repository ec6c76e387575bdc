use std::collections::VecDeque;

use super::location::Location;

pub const HISTORY_CAPACITY: usize = 64;

/// Current location plus back/forward session history.
///
/// The router changes immediately on navigation; the displayed page lags
/// behind until the transition commits.
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Location,
    back_stack: VecDeque<Location>,
    forward_stack: VecDeque<Location>,
}

impl Router {
    pub fn new(initial: Location) -> Self {
        Self {
            current: initial,
            back_stack: VecDeque::new(),
            forward_stack: VecDeque::new(),
        }
    }

    pub fn location(&self) -> &Location {
        &self.current
    }

    /// Returns `false` when `next` is already the current location.
    pub fn push(&mut self, next: Location) -> bool {
        if next == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, next);
        push_bounded(&mut self.back_stack, previous);
        self.forward_stack.clear();
        true
    }

    pub fn back(&mut self) -> bool {
        let Some(target) = self.back_stack.pop_back() else {
            return false;
        };
        let previous = std::mem::replace(&mut self.current, target);
        push_bounded(&mut self.forward_stack, previous);
        true
    }

    pub fn forward(&mut self) -> bool {
        let Some(target) = self.forward_stack.pop_back() else {
            return false;
        };
        let previous = std::mem::replace(&mut self.current, target);
        push_bounded(&mut self.back_stack, previous);
        true
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }
}

fn push_bounded(stack: &mut VecDeque<Location>, location: Location) {
    if stack.len() >= HISTORY_CAPACITY {
        stack.pop_front();
    }
    stack.push_back(location);
}
