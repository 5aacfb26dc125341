//! The channel through which wall state transitions reach a renderer.
//!
//! The grid is the only producer. A renderer holds a clone of the same queue handle and drains
//! it at its own cadence, the queue is unbounded and pushing never blocks.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::walls::{WallId, WallPlacement};

/// A wall whose `has_wall` state just changed, with the state it changed to.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct WallBuildEvent {
    pub wall: WallId,
    pub has_wall: bool,
    pub placement: WallPlacement,
}

#[derive(Debug, Clone, Default)]
pub struct BuildQueue {
    events: Rc<RefCell<VecDeque<WallBuildEvent>>>,
}

impl BuildQueue {
    pub fn new() -> BuildQueue {
        BuildQueue::default()
    }

    #[inline]
    pub(crate) fn push(&self, event: WallBuildEvent) {
        self.events.borrow_mut().push_back(event);
    }

    #[inline]
    pub fn pop(&self) -> Option<WallBuildEvent> {
        self.events.borrow_mut().pop_front()
    }

    /// Take every pending event, oldest first.
    pub fn drain(&self) -> Vec<WallBuildEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Do both handles feed the same queue?
    pub fn is_same_queue(&self, other: &BuildQueue) -> bool {
        Rc::ptr_eq(&self.events, &other.events)
    }
}
