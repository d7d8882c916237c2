// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small arena-backed scene graph implementing [`SceneGraph`].
//!
//! [`SceneTree`] is a reference host: it owns nodes, hands out generational
//! [`NodeId`]s, and resolves world positions the way 2D scene graphs usually
//! do (position relative to the parent, anchor within the content, uniform
//! scale). Applications with their own scene graph implement [`SceneGraph`]
//! directly instead.
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use understory_hover::{SceneGraph, SceneNode, SceneTree};
//!
//! let mut scene = SceneTree::new();
//! let layer = scene.insert(None, SceneNode::default());
//! scene.set_scene_root(Some(layer));
//! let button = scene.insert(
//!     Some(layer),
//!     SceneNode {
//!         position: Point::new(100.0, 100.0),
//!         content_size: Size::new(50.0, 50.0),
//!         anchor: Vec2::new(0.5, 0.5),
//!         ..SceneNode::default()
//!     },
//! );
//!
//! let world = scene.convert_to_world_space(layer, scene.position(button));
//! assert_eq!(world, Point::new(100.0, 100.0));
//!
//! scene.remove(layer);
//! assert!(!scene.is_alive(button));
//! ```

use alloc::vec::Vec;
use kurbo::{Affine, Point, Size, Vec2};

use crate::host::SceneGraph;

/// Identifier for a node in a [`SceneTree`].
///
/// A slot index plus a generation counter. On removal the slot is freed; when
/// it is reused its generation is incremented, so a stale `NodeId` never
/// aliases a different live node.
///
/// Both parts are `u32`, which is ample for practical lifetimes. Behavior on
/// generation overflow, or past `u32::MAX` slots, is unspecified.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(u32, u32);

impl NodeId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Local properties of a scene node.
#[derive(Clone, Debug)]
pub struct SceneNode {
    /// Position in the parent's coordinate space.
    pub position: Point,
    /// Untransformed content size.
    pub content_size: Size,
    /// Normalized anchor within the content.
    pub anchor: Vec2,
    /// Uniform scale applied around the anchor.
    pub scale: f64,
    /// Stacking order among siblings. Higher is drawn on top.
    pub z_order: i32,
    /// Whether the node is active in the running scene.
    pub running: bool,
}

impl Default for SceneNode {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            content_size: Size::ZERO,
            anchor: Vec2::ZERO,
            scale: 1.0,
            z_order: 0,
            running: true,
        }
    }
}

impl SceneNode {
    /// Transform from this node's space to its parent's space.
    fn local_to_parent(&self) -> Affine {
        let anchor = Vec2::new(
            self.content_size.width * self.anchor.x,
            self.content_size.height * self.anchor.y,
        );
        Affine::translate(self.position.to_vec2())
            * Affine::scale(self.scale)
            * Affine::translate(-anchor)
    }
}

#[derive(Clone, Debug)]
struct Entry {
    local: SceneNode,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

/// Arena-backed scene graph.
#[derive(Clone, Debug, Default)]
pub struct SceneTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    scene_root: Option<NodeId>,
}

impl SceneTree {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node under `parent` (or detached, for `None`) and return its id.
    ///
    /// A stale `parent` inserts the node detached. Freed slots are reused
    /// before the arena grows; see [`NodeId`] for its limits.
    pub fn insert(&mut self, parent: Option<NodeId>, local: SceneNode) -> NodeId {
        let parent = parent.filter(|&p| self.is_alive(p));
        let entry = Entry {
            local,
            parent,
            children: Vec::new(),
        };
        let id = if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            // Wraps after `u32::MAX` reuses of one slot.
            slot.generation = slot.generation.wrapping_add(1);
            slot.entry = Some(entry);
            NodeId(idx, slot.generation)
        } else {
            // Past `u32::MAX` slots ids stop being unique.
            let idx = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
            self.slots.push(Slot {
                generation: 1,
                entry: Some(entry),
            });
            NodeId(idx, 1)
        };
        if let Some(p) = parent
            && let Some(pe) = self.entry_mut(p)
        {
            pe.children.push(id);
        }
        id
    }

    /// Remove `id` and its whole subtree. Does nothing for stale ids.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        self.detach(id);
        let mut stack = Vec::new();
        stack.push(id);
        while let Some(n) = stack.pop() {
            let Some(slot) = self.slots.get_mut(n.idx()) else {
                continue;
            };
            if slot.generation != n.1 {
                continue;
            }
            if let Some(entry) = slot.entry.take() {
                stack.extend(entry.children);
                self.free.push(n.0);
            }
        }
        if self.scene_root.is_some_and(|r| !self.is_alive(r)) {
            self.scene_root = None;
        }
    }

    /// Move `id` under `parent` (or detach it, for `None`).
    ///
    /// Returns `false` and leaves the tree untouched if either id is stale or
    /// if `parent` is `id` itself or one of its descendants.
    pub fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        if let Some(p) = parent {
            if !self.is_alive(p) {
                return false;
            }
            let mut cursor = Some(p);
            while let Some(c) = cursor {
                if c == id {
                    return false;
                }
                cursor = self.entry(c).and_then(|e| e.parent);
            }
        }
        self.detach(id);
        if let Some(e) = self.entry_mut(id) {
            e.parent = parent;
        }
        if let Some(p) = parent
            && let Some(pe) = self.entry_mut(p)
        {
            pe.children.push(id);
        }
        true
    }

    /// Set the root of the running scene.
    pub fn set_scene_root(&mut self, root: Option<NodeId>) {
        self.scene_root = root.filter(|&r| self.is_alive(r));
    }

    /// Children of `id`; empty for stale ids.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.entry(id)
            .map(|e| e.children.as_slice())
            .unwrap_or_default()
    }

    /// Local properties of `id`, if live.
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.entry(id).map(|e| &e.local)
    }

    /// Mutable local properties of `id`, if live.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.entry_mut(id).map(|e| &mut e.local)
    }

    /// Set the position of `id` in its parent's space.
    pub fn set_position(&mut self, id: NodeId, position: Point) {
        if let Some(n) = self.node_mut(id) {
            n.position = position;
        }
    }

    /// Set the content size of `id`.
    pub fn set_content_size(&mut self, id: NodeId, size: Size) {
        if let Some(n) = self.node_mut(id) {
            n.content_size = size;
        }
    }

    /// Set the normalized anchor of `id`.
    pub fn set_anchor_point(&mut self, id: NodeId, anchor: Vec2) {
        if let Some(n) = self.node_mut(id) {
            n.anchor = anchor;
        }
    }

    /// Set the uniform scale of `id`.
    pub fn set_scale(&mut self, id: NodeId, scale: f64) {
        if let Some(n) = self.node_mut(id) {
            n.scale = scale;
        }
    }

    /// Set the z-order of `id`.
    pub fn set_z_order(&mut self, id: NodeId, z_order: i32) {
        if let Some(n) = self.node_mut(id) {
            n.z_order = z_order;
        }
    }

    /// Mark `id` as running or paused.
    pub fn set_running(&mut self, id: NodeId, running: bool) {
        if let Some(n) = self.node_mut(id) {
            n.running = running;
        }
    }

    /// Transform from `id`'s space to world space.
    pub fn world_transform(&self, id: NodeId) -> Affine {
        let mut transform = Affine::IDENTITY;
        let mut cursor = Some(id);
        while let Some(c) = cursor {
            let Some(e) = self.entry(c) else {
                break;
            };
            transform = e.local.local_to_parent() * transform;
            cursor = e.parent;
        }
        transform
    }

    fn entry(&self, id: NodeId) -> Option<&Entry> {
        self.slots
            .get(id.idx())
            .filter(|s| s.generation == id.1)
            .and_then(|s| s.entry.as_ref())
    }

    fn entry_mut(&mut self, id: NodeId) -> Option<&mut Entry> {
        self.slots
            .get_mut(id.idx())
            .filter(|s| s.generation == id.1)
            .and_then(|s| s.entry.as_mut())
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.entry_mut(id).and_then(|e| e.parent.take()) else {
            return;
        };
        if let Some(pe) = self.entry_mut(parent) {
            pe.children.retain(|&c| c != id);
        }
    }
}

impl SceneGraph<NodeId> for SceneTree {
    fn is_alive(&self, node: NodeId) -> bool {
        self.entry(node).is_some()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.entry(node).and_then(|e| e.parent)
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        self.children_of(node)
    }

    fn scene_root(&self) -> Option<NodeId> {
        self.scene_root
    }

    fn position(&self, node: NodeId) -> Point {
        self.node(node).map_or(Point::ZERO, |n| n.position)
    }

    fn content_size(&self, node: NodeId) -> Size {
        self.node(node).map_or(Size::ZERO, |n| n.content_size)
    }

    fn anchor_point(&self, node: NodeId) -> Vec2 {
        self.node(node).map_or(Vec2::ZERO, |n| n.anchor)
    }

    fn z_order(&self, node: NodeId) -> i32 {
        self.node(node).map_or(0, |n| n.z_order)
    }

    fn is_running(&self, node: NodeId) -> bool {
        self.node(node).is_some_and(|n| n.running)
    }

    fn convert_to_world_space(&self, node: NodeId, local: Point) -> Point {
        self.world_transform(node) * local
    }
}
