// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_hover --heading-base-level=0

//! Understory Hover: per-frame hover tracking for scene-graph nodes.
//!
//! This crate watches a set of nodes in a host scene graph and, once per
//! frame, decides which of them the pointer is over. Each transition fires an
//! enter or exit callback exactly once and is also returned as a
//! [`HoverEvent`].
//!
//! It does not own the scene, render anything or schedule itself. The host
//! provides three collaborators:
//!
//! - [`SceneGraph`]: parent/children, position, content size, anchor,
//!   z-order, running state and local→world conversion for node handles.
//! - [`PointerSource`]: the current pointer position in world space.
//! - [`DebugCanvas`]: a surface for optional hit-rect outlines.
//!
//! and calls [`HoverTracker::update`] once per frame.
//!
//! ## Hit rects
//!
//! A node's hit rect is its content box placed in world space and adjusted
//! per node:
//!
//! ```text
//! origin = world(position) - content_size * anchor - padding + offset
//! size   = content_size + 2 * padding
//! ```
//!
//! Containment is inclusive on every edge. Negative padding shrinks the rect.
//!
//! ## Blocking
//!
//! With [`HoverFlags::RESPECT_Z_ORDER`], a tick is blocked whenever a
//! sibling of the tracker's root has a higher z-order (for example a modal
//! popup added next to a layer). Blocked ticks force every hovered node to
//! exit and evaluate no geometry.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_hover::{HoverEntry, HoverEvent, HoverSlot, SceneNode, SceneTree};
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
//! let mut slot = HoverSlot::new();
//! let hover = slot.get_or_create(&scene, layer);
//!
//! let entered = Rc::new(Cell::new(0));
//! let counter = entered.clone();
//! hover.watch(
//!     button,
//!     HoverEntry::new().with_enter(move |_, _| counter.set(counter.get() + 1)),
//! );
//! assert_eq!(hover.hover_rect(&scene, button), Rect::new(75.0, 75.0, 125.0, 125.0));
//!
//! // One tick per frame; the host supplies the pointer and a canvas.
//! let events = hover.update(&scene, &Point::new(80.0, 80.0), &mut (), 1.0 / 60.0);
//! assert_eq!(events, vec![HoverEvent::Enter(button)]);
//! assert!(hover.is_hovering(button));
//! assert_eq!(entered.get(), 1);
//!
//! // No transition, no callback.
//! hover.update(&scene, &Point::new(90.0, 90.0), &mut (), 1.0 / 60.0);
//! assert_eq!(entered.get(), 1);
//!
//! let events = hover.update(&scene, &Point::new(10.0, 10.0), &mut (), 1.0 / 60.0);
//! assert_eq!(events, vec![HoverEvent::Exit(button)]);
//! ```
//!
//! ## Node handles
//!
//! Watched nodes are small copyable handles owned by the host. A handle may go
//! stale at any time; the tracker checks [`SceneGraph::is_alive`] and skips
//! stale nodes instead of failing. [`SceneTree`] is a ready-made generational
//! arena host for applications without a scene graph of their own.
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo and Peniko.
//! - `libm`: forward `libm` to Kurbo and Peniko for `no_std` builds.
//! - `tracing`: emit a `trace!` event for each tick that blocks or transitions.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod debug;
mod geometry;
mod host;
mod scene;
mod slot;
mod tracker;

pub use config::{DEFAULT_DEBUG_BORDER_WIDTH, DEFAULT_DEBUG_COLOR, HoverConfig, HoverFlags};
pub use debug::{DebugCanvas, DebugOutline};
pub use host::{PointerSource, SceneGraph};
pub use scene::{NodeId, SceneNode, SceneTree};
pub use slot::HoverSlot;
pub use tracker::{HoverCallback, HoverEntry, HoverEvent, HoverTracker};
