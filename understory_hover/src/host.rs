// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host collaborators: the scene graph the tracker reads and the pointer it tests.

use kurbo::{Point, Size, Vec2};

/// Read access to a host scene graph.
///
/// Nodes are identified by small copyable handles `K` owned by the host. A
/// handle may become stale at any time between frames (the node was removed
/// or destroyed); the tracker checks [`SceneGraph::is_alive`] before reading
/// anything else about a node and skips stale handles.
///
/// Accessors other than `is_alive` are only called with live handles. Hosts
/// may return arbitrary values for stale ones.
pub trait SceneGraph<K> {
    /// Returns `true` if `node` still refers to a live node.
    fn is_alive(&self, node: K) -> bool;

    /// Parent of `node`, or `None` for roots and detached nodes.
    fn parent(&self, node: K) -> Option<K>;

    /// Children of `node` in the host's order.
    fn children(&self, node: K) -> &[K];

    /// Root of the scene that is currently running, if any.
    ///
    /// Used as the sibling container for a tracker root that has no parent.
    fn scene_root(&self) -> Option<K>;

    /// Position of `node` in its parent's coordinate space.
    fn position(&self, node: K) -> Point;

    /// Untransformed content size of `node`.
    fn content_size(&self, node: K) -> Size;

    /// Normalized anchor of `node` (`(0, 0)` is the bottom-left corner of its
    /// content, `(1, 1)` the top-right).
    fn anchor_point(&self, node: K) -> Vec2;

    /// Stacking order of `node` among its siblings. Higher is drawn on top.
    fn z_order(&self, node: K) -> i32;

    /// Returns `true` while `node` is active in the running scene.
    fn is_running(&self, node: K) -> bool;

    /// Converts `local`, expressed in `node`'s coordinate space, to world space.
    fn convert_to_world_space(&self, node: K, local: Point) -> Point;
}

/// Source of the current pointer position in world space.
pub trait PointerSource {
    /// Current pointer position, in the same space as
    /// [`SceneGraph::convert_to_world_space`].
    fn pointer_position(&self) -> Point;
}

impl PointerSource for Point {
    fn pointer_position(&self) -> Point {
        *self
    }
}

impl<P: PointerSource + ?Sized> PointerSource for &P {
    fn pointer_position(&self) -> Point {
        (**self).pointer_position()
    }
}
