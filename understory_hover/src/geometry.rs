// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit rect geometry.

use kurbo::{Point, Rect, Vec2};

use crate::host::SceneGraph;

/// Computes the world-space hit rect of `node`.
///
/// The node's position is converted to world space through its parent, moved
/// to the bottom-left corner of its content by `content_size * anchor`, grown
/// by `padding` on every side and translated by `offset`.
///
/// Returns `None` if `node` is stale or has no parent.
pub(crate) fn hit_rect<K, S>(scene: &S, node: K, padding: f64, offset: Vec2) -> Option<Rect>
where
    K: Copy,
    S: SceneGraph<K> + ?Sized,
{
    if !scene.is_alive(node) {
        return None;
    }
    let parent = scene.parent(node)?;
    let world = scene.convert_to_world_space(parent, scene.position(node));
    let size = scene.content_size(node);
    let anchor = scene.anchor_point(node);

    let x0 = world.x - size.width * anchor.x - padding + offset.x;
    let y0 = world.y - size.height * anchor.y - padding + offset.y;
    // Not normalized: negative padding past half the size yields an inverted
    // rect that contains nothing.
    Some(Rect::new(
        x0,
        y0,
        x0 + size.width + padding * 2.0,
        y0 + size.height + padding * 2.0,
    ))
}

/// Inclusive containment on all four edges.
pub(crate) fn contains_inclusive(rect: Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}
