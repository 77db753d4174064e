// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Explicit invalidation bus. Mutating commands publish after a successful
//! write; views that cache derived state subscribe and recompute. Replaces
//! any ambient global refresh hook with state the caller owns.

pub struct RefreshBus<'a> {
    subscribers: Vec<Box<dyn FnMut() + 'a>>,
}

impl<'a> RefreshBus<'a> {
    pub fn new() -> Self {
        RefreshBus {
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, f: impl FnMut() + 'a) {
        self.subscribers.push(Box::new(f));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn publish(&mut self) {
        for s in self.subscribers.iter_mut() {
            s();
        }
    }
}

impl Default for RefreshBus<'_> {
    fn default() -> Self {
        Self::new()
    }
}
