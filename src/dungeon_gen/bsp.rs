use rand::Rng;

use super::rect::Rect;
use crate::config::DungeonConfig;
use crate::constants::DUNGEON_ROOM_MARGIN;

/// A node in the BSP tree. Either a leaf (a room candidate) or an internal
/// node with exactly two children.
#[derive(Debug)]
pub struct BspNode {
    /// The region this node covers
    pub region: Rect,
    /// For a leaf, the room computed inside it (carved or not). For an
    /// internal node, the first non-empty room of its children; used only
    /// to anchor corridors.
    pub room: Rect,
    /// Left/top child after split
    left: Option<Box<BspNode>>,
    /// Right/bottom child after split
    right: Option<Box<BspNode>>,
}

impl BspNode {
    pub fn new(region: Rect) -> Self {
        Self {
            region,
            room: Rect::EMPTY,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn children(&self) -> Option<(&BspNode, &BspNode)> {
        match (&self.left, &self.right) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => None,
        }
    }

    /// Anchor point for corridors attached to this subtree
    pub fn center(&self) -> (i32, i32) {
        self.room.center()
    }

    fn can_split(&self, min_leaf: i32) -> bool {
        let min_span = min_leaf.saturating_mul(2);
        self.region.width >= min_span || self.region.height >= min_span
    }

    /// Recursively split this node until the depth limit or the minimum
    /// leaf size stops it.
    pub fn split(&mut self, depth: u32, config: &DungeonConfig, rng: &mut impl Rng) {
        if depth >= config.max_depth || !self.can_split(config.min_leaf_size) {
            return;
        }

        // Cut the longer axis; a square region is cut across x
        let cut_x = self.region.width >= self.region.height;
        let axis_len = if cut_x { self.region.width } else { self.region.height };

        let Some((min_split, max_split)) =
            split_range(axis_len, config.min_split_ratio, config.max_split_ratio)
        else {
            return;
        };
        let split = rng.gen_range(min_split..=max_split);

        let r = self.region;
        let (first, second) = if cut_x {
            (
                Rect::new(r.x, r.y, split, r.height),
                Rect::new(r.x + split, r.y, r.width - split, r.height),
            )
        } else {
            (
                Rect::new(r.x, r.y, r.width, split),
                Rect::new(r.x, r.y + split, r.width, r.height - split),
            )
        };

        let mut left = Box::new(BspNode::new(first));
        let mut right = Box::new(BspNode::new(second));
        left.split(depth + 1, config, rng);
        right.split(depth + 1, config, rng);
        self.left = Some(left);
        self.right = Some(right);
    }

    /// Compute a room for every leaf and propagate room anchors upward.
    /// Returns this node's room.
    pub fn create_rooms(&mut self, config: &DungeonConfig, rng: &mut impl Rng) -> Rect {
        if self.is_leaf() {
            self.room = room_in_leaf(self.region, config, rng);
            return self.room;
        }

        let left = self.left.as_mut().map(|node| node.create_rooms(config, rng));
        let right = self.right.as_mut().map(|node| node.create_rooms(config, rng));
        self.room = match (left, right) {
            (Some(room), _) if !room.is_empty() => room,
            (_, Some(room)) => room,
            _ => Rect::EMPTY,
        };
        self.room
    }

    /// Collect `(region, room)` for every leaf, left subtree first.
    pub fn collect_leaves(&self, leaves: &mut Vec<(Rect, Rect)>) {
        if self.is_leaf() {
            leaves.push((self.region, self.room));
            return;
        }
        if let Some(ref left) = self.left {
            left.collect_leaves(leaves);
        }
        if let Some(ref right) = self.right {
            right.collect_leaves(leaves);
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self.children() {
            Some((left, right)) => left.leaf_count() + right.leaf_count(),
            None => 1,
        }
    }

    pub fn depth(&self) -> u32 {
        match self.children() {
            Some((left, right)) => 1 + left.depth().max(right.depth()),
            None => 0,
        }
    }
}

/// Inclusive range of split offsets along an axis, or `None` when the axis
/// is too short to produce two distinct choices.
fn split_range(axis_len: i32, min_ratio: f32, max_ratio: f32) -> Option<(i32, i32)> {
    if axis_len < 2 {
        return None;
    }
    let min_split = ((axis_len as f32 * min_ratio).round_ties_even() as i32).clamp(1, axis_len - 1);
    let max_split =
        ((axis_len as f32 * max_ratio).round_ties_even() as i32).clamp(min_split, axis_len - 1);
    if min_split >= max_split {
        return None;
    }
    Some((min_split, max_split))
}

/// Pick a room inside a leaf, keeping a margin on every side. Leaves too
/// small for a margin get a room covering the whole leaf.
fn room_in_leaf(region: Rect, config: &DungeonConfig, rng: &mut impl Rng) -> Rect {
    let min_w = (region.width / 2).max(config.min_room_size);
    let min_h = (region.height / 2).max(config.min_room_size);
    // Exclusive upper bounds
    let max_w = config.max_room_size.min(region.width - DUNGEON_ROOM_MARGIN);
    let max_h = config.max_room_size.min(region.height - DUNGEON_ROOM_MARGIN);

    if min_w >= max_w || min_h >= max_h {
        return region;
    }

    let width = rng.gen_range(min_w..max_w);
    let height = rng.gen_range(min_h..max_h);
    let x = region.x + rng.gen_range(DUNGEON_ROOM_MARGIN..region.width - width);
    let y = region.y + rng.gen_range(DUNGEON_ROOM_MARGIN..region.height - height);
    Rect::new(x, y, width, height)
}
