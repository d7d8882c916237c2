// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazily created tracker scoped to the lifetime of its hosting root.

use core::hash::Hash;

use crate::host::SceneGraph;
use crate::tracker::HoverTracker;

/// Holds at most one [`HoverTracker`], valid while its root node is alive.
///
/// Applications keep one slot next to their UI (typically owned by the
/// subtree root's controller) and acquire the tracker through
/// [`get_or_create`](Self::get_or_create). Once the root is destroyed the
/// tracker's state is discarded on the next acquisition and a fresh tracker
/// is anchored to the root passed at that time.
#[derive(Debug)]
pub struct HoverSlot<K> {
    tracker: Option<HoverTracker<K>>,
}

impl<K> Default for HoverSlot<K>
where
    K: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> HoverSlot<K>
where
    K: Copy + Eq + Hash,
{
    /// An empty slot.
    pub fn new() -> Self {
        Self { tracker: None }
    }

    /// Return the tracker, creating one anchored to `root` if the slot is
    /// empty or the current tracker's root is no longer alive.
    ///
    /// While the existing tracker's root is alive it is returned as-is, even
    /// when `root` names a different node.
    pub fn get_or_create<S>(&mut self, scene: &S, root: K) -> &mut HoverTracker<K>
    where
        S: SceneGraph<K> + ?Sized,
    {
        if self
            .tracker
            .as_ref()
            .is_some_and(|t| !scene.is_alive(t.root()))
        {
            self.tracker = None;
        }
        self.tracker.get_or_insert_with(|| HoverTracker::new(root))
    }

    /// The current tracker, without creating one.
    ///
    /// This does not check the root's liveness.
    pub fn get(&self) -> Option<&HoverTracker<K>> {
        self.tracker.as_ref()
    }

    /// The current tracker, mutably, without creating one.
    pub fn get_mut(&mut self) -> Option<&mut HoverTracker<K>> {
        self.tracker.as_mut()
    }

    /// Tear down the current tracker, returning it.
    pub fn take(&mut self) -> Option<HoverTracker<K>> {
        self.tracker.take()
    }
}
