// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region quadtree over axis-aligned keys.

use alloc::boxed::Box;
use alloc::collections::btree_set::{self, BTreeSet};
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use quadrille_geometry::predicates::overlaps;
use quadrille_geometry::{AxisAligned, Point, Rect, Scalar, Square};
use tracing::trace;

use crate::error::InsertError;

/// The four quadrants of a node, in Z-order.
///
/// A key whose left edge is west of the vertical split line goes left; a key whose
/// bottom edge is above the horizontal split line goes top.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ZOrder {
    /// Upper-left quadrant.
    LeftTop = 0,
    /// Lower-left quadrant; it shares the parent's position.
    LeftBottom = 1,
    /// Upper-right quadrant.
    RightTop = 2,
    /// Lower-right quadrant.
    RightBottom = 3,
}

impl ZOrder {
    /// All quadrants in slot order.
    pub const ALL: [Self; 4] = [
        Self::LeftTop,
        Self::LeftBottom,
        Self::RightTop,
        Self::RightBottom,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

/// Intersection of a region's two split lines.
fn split_point<T: Scalar>(region: Square<T>) -> Point<T> {
    let half = T::half(region.size);
    Point::new(T::add(region.pos.x, half), T::add(region.pos.y, half))
}

/// Region covered by the child in `quadrant`.
///
/// The child side is half the parent side, rounded half up.
pub fn child_region<T: Scalar>(region: Square<T>, quadrant: ZOrder) -> Square<T> {
    let mid = split_point(region);
    let pos = match quadrant {
        ZOrder::LeftTop => Point::new(region.pos.x, mid.y),
        ZOrder::LeftBottom => region.pos,
        ZOrder::RightTop => mid,
        ZOrder::RightBottom => Point::new(mid.x, region.pos.y),
    };
    Square::new(pos, T::half_up(region.size))
}

/// Smallest power-of-two size, starting from `size`, whose origin-anchored square
/// holds `top_right` strictly inside its top and right edges.
fn covering_size<T: Scalar>(mut size: T, top_right: Point<T>) -> Result<T, InsertError> {
    while top_right.x >= size || top_right.y >= size {
        size = T::checked_double(size).ok_or(InsertError::RegionOverflow)?;
    }
    Ok(size)
}

#[derive(Clone)]
struct Node<K: AxisAligned> {
    region: Square<K::Scalar>,
    children: [Option<Box<Self>>; 4],
    values: BTreeSet<K>,
}

impl<K: AxisAligned + Ord> Node<K> {
    fn new(region: Square<K::Scalar>) -> Self {
        Self {
            region,
            children: [None, None, None, None],
            values: BTreeSet::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.values.is_empty() && self.children.iter().all(Option::is_none)
    }

    /// Quadrant `key` descends into, or `None` when this node is where it lives.
    fn quadrant_for(&self, key: &K) -> Option<ZOrder> {
        if self.region.size <= K::Scalar::one() {
            return None;
        }
        let mid = split_point(self.region);
        let bl = key.bottom_left();
        let tr = key.top_right();
        let straddles_x = bl.x <= mid.x && mid.x <= tr.x;
        let straddles_y = bl.y <= mid.y && mid.y <= tr.y;
        if straddles_x || straddles_y {
            return None;
        }
        Some(match (bl.x < mid.x, bl.y > mid.y) {
            (true, true) => ZOrder::LeftTop,
            (true, false) => ZOrder::LeftBottom,
            (false, true) => ZOrder::RightTop,
            (false, false) => ZOrder::RightBottom,
        })
    }
}

/// A region quadtree storing axis-aligned keys.
///
/// Regions are squares anchored at the origin whose sides are powers of two. Each key is
/// stored in the shallowest node whose split lines it crosses (or in a unit-size node),
/// so lookups follow a single root-to-node path and overlap queries only descend into
/// regions that touch the query area.
///
/// Keys are compared by value: inserting an equal key twice stores it once.
///
/// The root is created on the first insert and doubled ("grown up") whenever a key
/// reaches past it; children are created only along insertion paths. Removing the last
/// key of a leaf detaches that leaf, but emptied ancestors are left in place.
///
/// Keys must have non-negative coordinates. With `i32` coordinates the largest root
/// side is `2^30`, so keys must stay below that on both axes.
///
/// Float boxes such as `Rect<f64>` are not `Ord`; wrap them in a key type with a total
/// order (e.g. one built on [`f64::total_cmp`]).
#[derive(Clone)]
pub struct QuadTree<K: AxisAligned> {
    root: Option<Box<Node<K>>>,
    len: usize,
}

impl<K: AxisAligned> Default for QuadTree<K> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K: AxisAligned + Ord> QuadTree<K> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Region of the root node, if any key has been inserted.
    pub fn root_region(&self) -> Option<Square<K::Scalar>> {
        self.root.as_ref().map(|root| root.region)
    }

    /// Number of allocated nodes, including emptied ones awaiting reuse.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter().flatten().map(|child| &**child));
        }
        count
    }

    /// Insert `key`, returning `false` if an equal key is already stored.
    ///
    /// # Panics
    ///
    /// Panics if `key` has a negative coordinate or the region covering it cannot be
    /// represented in the coordinate type. Use [`try_insert`](Self::try_insert) to handle
    /// those cases.
    pub fn insert(&mut self, key: K) -> bool {
        match self.try_insert(key) {
            Ok(added) => added,
            Err(err) => panic!("{err}"),
        }
    }

    /// Insert `key`, reporting precondition violations instead of panicking.
    ///
    /// On error the tree is unchanged.
    pub fn try_insert(&mut self, key: K) -> Result<bool, InsertError> {
        let bl = key.bottom_left();
        let zero = K::Scalar::zero();
        if bl.x < zero || bl.y < zero {
            return Err(InsertError::NegativeCoordinate);
        }
        let top_right = key.top_right();
        let current = self.root.as_ref().map(|root| root.region.size);
        let size = covering_size(current.unwrap_or_else(K::Scalar::one), top_right)?;

        let root = match self.root.take() {
            Some(root) => Self::grow_up(root, size),
            None => {
                trace!(size = ?size, "creating quadtree root");
                Box::new(Node::new(Square::new(Point::origin(), size)))
            }
        };
        let root = self.root.insert(root);
        let node = Self::grow_down(root, &key);
        let added = node.values.insert(key);
        if added {
            self.len += 1;
        }
        Ok(added)
    }

    /// Wrap `root` in origin-anchored parents until its side reaches `size`.
    ///
    /// `size` must come from [`covering_size`], so every intermediate side is representable.
    fn grow_up(mut root: Box<Node<K>>, size: K::Scalar) -> Box<Node<K>> {
        while root.region.size < size {
            // Both sides are powers of two, so the doubled side is at most `size`.
            let doubled = K::Scalar::add(root.region.size, root.region.size);
            debug_assert!(
                doubled <= size,
                "grow_up target must be a power-of-two multiple of the root side"
            );
            trace!(from = ?root.region.size, to = ?doubled, "growing quadtree root");
            let mut parent = Node::new(Square::new(Point::origin(), doubled));
            parent.children[ZOrder::LeftBottom.index()] = Some(root);
            root = Box::new(parent);
        }
        root
    }

    /// Walk to the node `key` belongs in, creating missing children on the way.
    fn grow_down<'a>(mut node: &'a mut Node<K>, key: &K) -> &'a mut Node<K> {
        loop {
            let Some(quadrant) = node.quadrant_for(key) else {
                return node;
            };
            let region = child_region(node.region, quadrant);
            node = &mut **node.children[quadrant.index()]
                .get_or_insert_with(|| Box::new(Node::new(region)));
        }
    }

    /// The slot owning the node `key` belongs in, if that node exists.
    fn find_slot<'a>(
        mut slot: &'a mut Option<Box<Node<K>>>,
        key: &K,
    ) -> Option<&'a mut Option<Box<Node<K>>>> {
        loop {
            let Some(quadrant) = slot.as_ref()?.quadrant_for(key) else {
                return Some(slot);
            };
            slot = &mut slot.as_mut()?.children[quadrant.index()];
        }
    }

    /// Remove `key`, returning whether it was present.
    ///
    /// If the node that held it is left with no keys and no children, it is detached.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(slot) = Self::find_slot(&mut self.root, key) else {
            return false;
        };
        let Some(node) = slot.as_mut() else {
            return false;
        };
        if !node.values.remove(key) {
            return false;
        }
        if node.is_empty() {
            trace!(region = ?node.region, "pruning empty quadtree node");
            *slot = None;
        }
        self.len -= 1;
        true
    }

    /// True if an equal key is stored.
    pub fn contains(&self, key: &K) -> bool {
        let Some(mut node) = self.root.as_deref() else {
            return false;
        };
        while let Some(quadrant) = node.quadrant_for(key) {
            match node.children[quadrant.index()].as_deref() {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.values.contains(key)
    }

    /// Iterate over every stored key overlapping `area`.
    ///
    /// Boxes that only touch `area` along an edge or corner are included.
    pub fn query<Q>(&self, area: Q) -> Query<'_, K, Q>
    where
        Q: AxisAligned<Scalar = K::Scalar>,
    {
        Query {
            area,
            stack: self.root.as_deref().into_iter().collect(),
            values: None,
        }
    }

    /// Iterate over every stored key containing `point`, boundary included.
    pub fn query_point(&self, point: Point<K::Scalar>) -> Query<'_, K, Rect<K::Scalar>> {
        let zero = K::Scalar::zero();
        self.query(Rect::new(point, zero, zero))
    }

    /// Iterate over every stored key, depth-first.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
            values: None,
        }
    }
}

impl<K: AxisAligned> fmt::Debug for QuadTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadTree")
            .field("len", &self.len)
            .field("root_region", &self.root.as_ref().map(|root| root.region))
            .finish_non_exhaustive()
    }
}

impl<K: AxisAligned + Ord> Extend<K> for QuadTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: AxisAligned + Ord> FromIterator<K> for QuadTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K: AxisAligned + Ord> IntoIterator for &'a QuadTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy overlap query returned by [`QuadTree::query`].
pub struct Query<'a, K: AxisAligned, Q> {
    area: Q,
    stack: Vec<&'a Node<K>>,
    values: Option<btree_set::Iter<'a, K>>,
}

impl<'a, K, Q> Iterator for Query<'a, K, Q>
where
    K: AxisAligned + Ord,
    Q: AxisAligned<Scalar = K::Scalar>,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        loop {
            if let Some(values) = &mut self.values {
                if let Some(key) = values.find(|key| overlaps(*key, &self.area)) {
                    return Some(key);
                }
                self.values = None;
            }
            let node = self.stack.pop()?;
            if !overlaps(&node.region, &self.area) {
                continue;
            }
            self.stack
                .extend(node.children.iter().flatten().map(|child| &**child));
            self.values = Some(node.values.iter());
        }
    }
}

impl<K, Q> FusedIterator for Query<'_, K, Q>
where
    K: AxisAligned + Ord,
    Q: AxisAligned<Scalar = K::Scalar>,
{
}

impl<K: AxisAligned, Q> fmt::Debug for Query<'_, K, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("pending_nodes", &self.stack.len())
            .finish_non_exhaustive()
    }
}

/// Iterator over every key in a [`QuadTree`].
pub struct Iter<'a, K: AxisAligned> {
    stack: Vec<&'a Node<K>>,
    values: Option<btree_set::Iter<'a, K>>,
}

impl<'a, K: AxisAligned + Ord> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        loop {
            if let Some(key) = self.values.as_mut().and_then(Iterator::next) {
                return Some(key);
            }
            let node = self.stack.pop()?;
            self.stack
                .extend(node.children.iter().flatten().map(|child| &**child));
            self.values = Some(node.values.iter());
        }
    }
}

impl<K: AxisAligned + Ord> FusedIterator for Iter<'_, K> {}

impl<K: AxisAligned> fmt::Debug for Iter<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("pending_nodes", &self.stack.len())
            .finish_non_exhaustive()
    }
}
