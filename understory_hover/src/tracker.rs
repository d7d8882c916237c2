// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hover tracker: a registry of watched nodes and the per-frame hover state machine.
//!
//! ## Usage
//!
//! 1) Obtain a tracker for a UI root, usually via [`HoverSlot::get_or_create`](crate::HoverSlot::get_or_create).
//! 2) Register nodes with [`HoverTracker::watch`], optionally with enter/exit callbacks.
//! 3) Call [`HoverTracker::update`] once per frame with the scene, the pointer and a debug canvas.
//!
//! Each watched node is a two-state machine, `NotHovered` ⇄ `Hovered`. A tick
//! moves a node to `Hovered` when the pointer is inside its hit rect and back
//! when it is not, firing the matching callback once per transition. While the
//! tracker is blocked by z-order every hovered node is forced back to
//! `NotHovered`.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};
use kurbo::{Rect, Vec2};
use peniko::Color;

use crate::config::{HoverConfig, HoverFlags};
use crate::debug::{DebugCanvas, outline_points};
use crate::geometry::{contains_inclusive, hit_rect};
use crate::host::{PointerSource, SceneGraph};

/// A hover callback.
///
/// Receives the tracker itself, so callbacks may watch, forget or reconfigure
/// nodes while a tick is running, and the node that transitioned.
pub type HoverCallback<K> = Rc<dyn Fn(&mut HoverTracker<K>, K)>;

/// Enter/exit callbacks registered for a node. Either may be absent.
pub struct HoverEntry<K> {
    /// Called when the node becomes hovered.
    pub on_enter: Option<HoverCallback<K>>,
    /// Called when the node stops being hovered.
    pub on_exit: Option<HoverCallback<K>>,
}

impl<K> HoverEntry<K> {
    /// An entry without callbacks.
    pub fn new() -> Self {
        Self {
            on_enter: None,
            on_exit: None,
        }
    }

    /// Set the enter callback.
    #[must_use]
    pub fn with_enter(mut self, f: impl Fn(&mut HoverTracker<K>, K) + 'static) -> Self {
        self.on_enter = Some(Rc::new(f));
        self
    }

    /// Set the exit callback.
    #[must_use]
    pub fn with_exit(mut self, f: impl Fn(&mut HoverTracker<K>, K) + 'static) -> Self {
        self.on_exit = Some(Rc::new(f));
        self
    }

    fn callback(&self, event: &HoverEvent<K>) -> Option<&HoverCallback<K>> {
        match event {
            HoverEvent::Enter(_) => self.on_enter.as_ref(),
            HoverEvent::Exit(_) => self.on_exit.as_ref(),
        }
    }
}

impl<K> Default for HoverEntry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for HoverEntry<K> {
    fn clone(&self) -> Self {
        Self {
            on_enter: self.on_enter.clone(),
            on_exit: self.on_exit.clone(),
        }
    }
}

impl<K> fmt::Debug for HoverEntry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoverEntry")
            .field("on_enter", &self.on_enter.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .finish()
    }
}

/// A hover transition produced by [`HoverTracker::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The pointer entered the node's hit rect.
    Enter(K),
    /// The pointer left the node's hit rect, or the tracker was blocked.
    Exit(K),
}

impl<K: Copy> HoverEvent<K> {
    /// The node that transitioned.
    pub fn node(&self) -> K {
        match *self {
            Self::Enter(k) | Self::Exit(k) => k,
        }
    }
}

/// Tracks pointer hover over a set of watched nodes.
///
/// A tracker is anchored to a hosting root node. The root matters for two
/// things: its lifetime bounds the tracker (see [`HoverSlot`](crate::HoverSlot)),
/// and with [`HoverFlags::RESPECT_Z_ORDER`] its siblings decide whether hover
/// is suspended.
///
/// Padding and offset are per-node configuration independent of registration:
/// they survive [`forget`](Self::forget) and [`clear`](Self::clear), and
/// [`hover_rect`](Self::hover_rect) applies them to unregistered nodes too.
#[derive(Debug)]
pub struct HoverTracker<K> {
    root: K,
    config: HoverConfig,
    order: Vec<K>,
    handlers: HashMap<K, HoverEntry<K>>,
    hovered: HashSet<K>,
    padding: HashMap<K, f64>,
    offset: HashMap<K, Vec2>,
    // Snapshot of `order` for the running tick; callbacks may mutate `order`.
    scratch: Vec<K>,
    // Set while `update` runs; registrations made then wait for the next tick.
    ticking: bool,
    registered_this_tick: HashSet<K>,
}

impl<K> HoverTracker<K>
where
    K: Copy + Eq + Hash,
{
    /// Create an empty tracker anchored to `root` with the default configuration.
    pub fn new(root: K) -> Self {
        Self::with_config(root, HoverConfig::default())
    }

    /// Create an empty tracker anchored to `root`.
    pub fn with_config(root: K, config: HoverConfig) -> Self {
        Self {
            root,
            config,
            order: Vec::new(),
            handlers: HashMap::new(),
            hovered: HashSet::new(),
            padding: HashMap::new(),
            offset: HashMap::new(),
            scratch: Vec::new(),
            ticking: false,
            registered_this_tick: HashSet::new(),
        }
    }

    /// The hosting root this tracker is anchored to.
    pub fn root(&self) -> K {
        self.root
    }

    /// Current configuration.
    pub fn config(&self) -> &HoverConfig {
        &self.config
    }

    /// Mutable configuration.
    pub fn config_mut(&mut self) -> &mut HoverConfig {
        &mut self.config
    }

    /// Enable or disable suspension of hover while a sibling of the root is stacked above it.
    pub fn set_respect_z_order(&mut self, enabled: bool) {
        self.config.flags.set(HoverFlags::RESPECT_Z_ORDER, enabled);
    }

    /// Enable or disable debug outlines.
    pub fn set_debug_draw(&mut self, enabled: bool) {
        self.config.flags.set(HoverFlags::DEBUG_DRAW, enabled);
    }

    /// Set the border color of debug outlines.
    pub fn set_debug_color(&mut self, color: Color) {
        self.config.debug_color = color;
    }

    /// Start watching `node`.
    ///
    /// Watching a node that is already watched replaces its callbacks and
    /// keeps its place in the evaluation order; its hover state is untouched.
    /// Nothing is evaluated until the next [`update`](Self::update); a node
    /// (re-)registered from a callback is first evaluated on the following tick.
    pub fn watch(&mut self, node: K, entry: HoverEntry<K>) {
        if self.handlers.insert(node, entry).is_none() {
            self.order.push(node);
            if self.ticking {
                self.registered_this_tick.insert(node);
            }
        }
    }

    /// Stop watching `node` and drop its hover state. No callback fires.
    ///
    /// Does nothing if `node` is not watched.
    pub fn forget(&mut self, node: K) {
        if self.handlers.remove(&node).is_some() {
            self.order.retain(|&n| n != node);
        }
        self.hovered.remove(&node);
    }

    /// Returns `true` if `node` is currently hovered.
    pub fn is_hovering(&self, node: K) -> bool {
        self.hovered.contains(&node)
    }

    /// Returns `true` if `node` is watched.
    pub fn is_watched(&self, node: K) -> bool {
        self.handlers.contains_key(&node)
    }

    /// Stop watching every node and drop all hover state. No callback fires.
    pub fn clear(&mut self) {
        self.registered_this_tick.clear();
        self.order.clear();
        self.hovered.clear();
        self.handlers.clear();
    }

    /// Forget every watched node whose handle is stale in `scene`.
    ///
    /// The tracker never drops stale handles on its own: they are skipped by
    /// [`update`](Self::update) but stay watched (and, if they were hovered,
    /// hovering). Hosts that destroy nodes either `forget` them or call this
    /// periodically. Padding and offset entries of stale handles are dropped
    /// as well. No callback fires.
    pub fn retain_alive<S>(&mut self, scene: &S)
    where
        S: SceneGraph<K> + ?Sized,
    {
        self.order.retain(|&n| scene.is_alive(n));
        self.handlers.retain(|&n, _| scene.is_alive(n));
        self.hovered.retain(|&n| scene.is_alive(n));
        self.padding.retain(|&n, _| scene.is_alive(n));
        self.offset.retain(|&n, _| scene.is_alive(n));
    }

    /// Watched nodes in evaluation order.
    pub fn watched_nodes(&self) -> &[K] {
        &self.order
    }

    /// Currently hovered nodes, in no particular order.
    pub fn hovered(&self) -> impl Iterator<Item = K> + '_ {
        self.hovered.iter().copied()
    }

    /// Callbacks registered for `node`, if watched.
    pub fn hover_handlers(&self, node: K) -> Option<&HoverEntry<K>> {
        self.handlers.get(&node)
    }

    /// Mutable callbacks registered for `node`, if watched.
    pub fn hover_handlers_mut(&mut self, node: K) -> Option<&mut HoverEntry<K>> {
        self.handlers.get_mut(&node)
    }

    /// Grow (or, when negative, shrink) the hit rect of `node` on every side.
    pub fn set_hover_padding(&mut self, node: K, padding: f64) {
        self.padding.insert(node, padding);
    }

    /// Padding of `node`, `0` if unset.
    pub fn hover_padding(&self, node: K) -> f64 {
        self.padding.get(&node).copied().unwrap_or(0.0)
    }

    /// Translate the hit rect of `node`.
    pub fn set_offset(&mut self, node: K, offset: Vec2) {
        self.offset.insert(node, offset);
    }

    /// Offset of `node`, zero if unset.
    pub fn offset(&self, node: K) -> Vec2 {
        self.offset.get(&node).copied().unwrap_or(Vec2::ZERO)
    }

    /// World-space hit rect of `node` with its padding and offset applied.
    ///
    /// `node` does not need to be watched. Returns [`Rect::ZERO`] if `node`
    /// is stale or has no parent.
    pub fn hover_rect<S>(&self, scene: &S, node: K) -> Rect
    where
        S: SceneGraph<K> + ?Sized,
    {
        hit_rect(scene, node, self.hover_padding(node), self.offset(node)).unwrap_or(Rect::ZERO)
    }

    /// Returns `true` if a sibling of the root is stacked above it.
    ///
    /// Siblings are the children of the root's parent or, when the root has
    /// no parent, the children of the running scene. A stale root never blocks.
    /// This ignores [`HoverFlags::RESPECT_Z_ORDER`]; `update` only consults it
    /// when the flag is set.
    pub fn is_blocked<S>(&self, scene: &S) -> bool
    where
        S: SceneGraph<K> + ?Sized,
    {
        if !scene.is_alive(self.root) {
            return false;
        }
        let z = scene.z_order(self.root);
        let Some(container) = scene.parent(self.root).or_else(|| scene.scene_root()) else {
            return false;
        };
        scene
            .children(container)
            .iter()
            .any(|&sibling| scene.is_alive(sibling) && scene.z_order(sibling) > z)
    }

    /// Evaluate one frame.
    ///
    /// Clears `canvas`, then walks the watched nodes in order:
    /// - Stale nodes, nodes without a parent and nodes that are not running
    ///   are skipped without any state change.
    /// - While blocked by z-order, hovered nodes exit; geometry is not evaluated.
    /// - Otherwise the pointer is tested against the node's hit rect
    ///   (inclusive on every edge) and the node enters or exits on a change.
    ///
    /// Callbacks fire as transitions happen and may mutate the tracker. Nodes
    /// forgotten by an earlier callback in the same tick are skipped; nodes
    /// watched during the tick are first evaluated on the next one.
    ///
    /// Returns the transitions in the order they fired. `_dt` is the elapsed
    /// frame time; the hover algorithm does not depend on it.
    pub fn update<S, P, C>(
        &mut self,
        scene: &S,
        pointer: &P,
        canvas: &mut C,
        _dt: f64,
    ) -> Vec<HoverEvent<K>>
    where
        S: SceneGraph<K> + ?Sized,
        P: PointerSource + ?Sized,
        C: DebugCanvas + ?Sized,
    {
        let pointer = pointer.pointer_position();
        canvas.clear();

        let blocked = self.config.respects_z_order() && self.is_blocked(scene);

        let was_ticking = core::mem::replace(&mut self.ticking, true);
        let mut order = core::mem::take(&mut self.scratch);
        order.clear();
        order.extend_from_slice(&self.order);

        let mut events = Vec::new();
        for &node in &order {
            if !self.is_watched(node) || self.registered_this_tick.contains(&node) {
                continue;
            }
            if !scene.is_alive(node) || scene.parent(node).is_none() || !scene.is_running(node) {
                continue;
            }

            if blocked {
                if self.hovered.remove(&node) {
                    self.notify(HoverEvent::Exit(node), &mut events);
                }
                continue;
            }

            let rect = self.hover_rect(scene, node);
            if self.config.debug_draw() {
                canvas.draw_polygon(
                    &outline_points(rect),
                    Color::TRANSPARENT,
                    self.config.debug_border_width,
                    self.config.debug_color,
                );
            }

            let inside = contains_inclusive(rect, pointer);
            let was_hovering = self.hovered.contains(&node);
            if inside && !was_hovering {
                self.hovered.insert(node);
                self.notify(HoverEvent::Enter(node), &mut events);
            } else if !inside && was_hovering {
                self.hovered.remove(&node);
                self.notify(HoverEvent::Exit(node), &mut events);
            }
        }

        self.scratch = order;
        self.ticking = was_ticking;
        if !was_ticking {
            self.registered_this_tick.clear();
        }
        trace_tick(&events, blocked);
        events
    }

    fn notify(&mut self, event: HoverEvent<K>, events: &mut Vec<HoverEvent<K>>) {
        events.push(event);
        let node = event.node();
        let callback = self
            .handlers
            .get(&node)
            .and_then(|entry| entry.callback(&event))
            .cloned();
        if let Some(callback) = callback {
            callback(self, node);
        }
    }
}

#[cfg(feature = "tracing")]
fn trace_tick<K>(events: &[HoverEvent<K>], blocked: bool) {
    if !blocked && events.is_empty() {
        return;
    }
    let entered = events
        .iter()
        .filter(|e| matches!(e, HoverEvent::Enter(_)))
        .count();
    tracing::trace!(
        entered,
        exited = events.len() - entered,
        blocked,
        "hover tick"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_tick<K>(_events: &[HoverEvent<K>], _blocked: bool) {}
