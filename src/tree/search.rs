// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{cmp::Ordering, mem};

use tracing::{debug, trace};

use super::{BinaryNode, Graph, Levels, Side, Slot};
use crate::{
	iter::{InOrder, LevelOrder, PreOrder},
	Node,
	NodeView,
	Structure,
	StructureError,
	StructureKind,
	StructureResult,
	Token,
};

/// A binary search tree.
///
/// For every node, every value in its left subtree is strictly less than its own value, and every
/// value in its right subtree is greater than or equal to it: equal values go right.
///
/// Values that cannot be compared with a node's value (such as a NaN float) are also sent right
/// when inserting, and are never found by [`search`] or [`delete`].
///
/// [`search`]: BinarySearchTree::search
/// [`delete`]: BinarySearchTree::delete
#[derive(Debug)]
pub struct BinarySearchTree<T> {
	graph: Graph<T>,
}

impl<T> Default for BinarySearchTree<T> {
	fn default() -> Self {
		Self::new()
	}
}

/// Which way a descent for `value` goes at `node`.
fn direction<T: PartialOrd>(value: &T, node: &T) -> Option<Side> {
	match value.partial_cmp(node) {
		Some(Ordering::Less) => Some(Side::Left),
		Some(Ordering::Equal) => None,
		Some(Ordering::Greater) | None => Some(Side::Right),
	}
}

impl<T> BinarySearchTree<T> {
	/// Creates a new, empty tree.
	pub fn new() -> Self {
		Self { graph: Graph::new() }
	}

	/// Creates a new, empty tree with room for `capacity` nodes before reallocating.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			graph: Graph::with_capacity(capacity),
		}
	}

	/// Returns the number of nodes in the tree.
	#[inline(always)]
	pub const fn len(&self) -> usize {
		self.graph.len
	}

	/// Returns whether the tree has no nodes.
	#[inline(always)]
	pub const fn is_empty(&self) -> bool {
		self.graph.root.is_none()
	}

	/// Returns the number of levels in the tree: `0` when empty, `1` for a lone root.
	#[inline(always)]
	pub const fn height(&self) -> usize {
		self.graph.height
	}

	/// Returns the value at the root of the tree, if there is one.
	pub fn root(&self) -> Option<&T> {
		self.graph.root.map(|root| self.graph.arena[root].data())
	}

	/// Inserts `value`, descending left past greater values and right past lesser or equal ones
	/// until an empty slot is reached.
	///
	/// Duplicates are allowed, so this always succeeds.
	pub fn insert(&mut self, value: T)
	where
		T: PartialOrd,
	{
		let mut slot = Slot::Root;
		let mut current = self.graph.root;

		while let Some(token) = current {
			let node = &self.graph.arena[token];
			let side = if value < *node.data() { Side::Left } else { Side::Right };

			slot = Slot::Child(token, side);
			current = node.child(side);
		}

		let new = self.graph.attach(slot, value);
		trace!(
			address = %new.address(),
			len = self.graph.len,
			height = self.graph.height,
			"inserted node into search tree"
		);
	}

	/// Finds the node holding `value` by descending from the root, along with its slot.
	fn find(&self, value: &T) -> Option<(Slot<T>, Token<BinaryNode<T>>)>
	where
		T: PartialOrd,
	{
		let mut slot = Slot::Root;
		let mut current = self.graph.root;

		while let Some(token) = current {
			let node = &self.graph.arena[token];

			match direction(value, node.data()) {
				None => return Some((slot, token)),

				Some(side) => {
					slot = Slot::Child(token, side);
					current = node.child(side);
				},
			}
		}

		None
	}

	/// Deletes a node holding `value`, returning the value it held.
	///
	/// A leaf is detached and a node with one child is replaced by that child. A node with two
	/// children instead takes on the value of its in-order successor (the minimum of its right
	/// subtree), and the successor's node is removed in its place.
	///
	/// # Errors
	/// Returns [`StructureError::NotFound`] if no node holds `value`.
	pub fn delete(&mut self, value: &T) -> StructureResult<T>
	where
		T: PartialOrd,
	{
		let Some((slot, token)) = self.find(value) else {
			debug!("value to delete not found in search tree");

			return Err(StructureError::NotFound);
		};

		if self.graph.arena[token].degree() < 2 {
			let removed = self.graph.splice_out(slot, token);
			trace!(address = %token.address(), len = self.graph.len, "deleted node from search tree");

			return Ok(removed);
		}

		let right = self.graph.arena[token].right.expect("the node has two children");
		let (successor_slot, successor) = self.min_in(Slot::Child(token, Side::Right), right);

		// The successor has no left child, so it can always be spliced out.
		let successor_value = self.graph.splice_out(successor_slot, successor);
		let removed = mem::replace(self.graph.arena[token].data_mut(), successor_value);

		trace!(
			address = %token.address(),
			successor = %successor.address(),
			len = self.graph.len,
			"replaced node with its in-order successor"
		);

		Ok(removed)
	}

	/// Returns the leftmost node of the subtree rooted at `token`, which hangs in `slot`.
	fn min_in(&self, mut slot: Slot<T>, mut token: Token<BinaryNode<T>>) -> (Slot<T>, Token<BinaryNode<T>>) {
		while let Some(left) = self.graph.arena[token].left {
			slot = Slot::Child(token, Side::Left);
			token = left;
		}

		(slot, token)
	}

	/// Returns whether a node holds `value`, descending only along one path from the root.
	pub fn search(&self, value: &T) -> bool
	where
		T: PartialOrd,
	{
		self.find(value).is_some()
	}

	/// Returns the smallest value in the tree.
	pub fn min(&self) -> Option<&T> {
		self.graph.root.map(|root| {
			let (_, token) = self.min_in(Slot::Root, root);

			self.graph.arena[token].data()
		})
	}

	/// Returns the greatest value in the tree.
	///
	/// If the greatest value appears several times, the deepest copy is returned.
	pub fn max(&self) -> Option<&T> {
		let mut current = self.graph.root?;

		while let Some(right) = self.graph.arena[current].right {
			current = right;
		}

		Some(self.graph.arena[current].data())
	}

	/// Returns an iterator over the tokens of the tree's nodes in pre-order.
	pub fn tokens(&self) -> PreOrder<'_, T> {
		self.graph.pre_order()
	}

	/// Returns an iterator over the tokens of the tree's nodes in order of their values.
	pub fn tokens_in_order(&self) -> InOrder<'_, T> {
		InOrder::new(&self.graph.arena, self.graph.root)
	}

	/// Returns an iterator over the tokens of the tree's nodes level by level, paired with their
	/// depth.
	pub fn level_order(&self) -> LevelOrder<'_, T> {
		self.graph.level_order()
	}

	/// Returns the node a token refers to, if it belongs to this tree.
	pub fn node(&self, token: Token<BinaryNode<T>>) -> Option<&BinaryNode<T>> {
		self.graph.arena.get(token)
	}

	/// Returns an iterator over the tree's values in non-decreasing order.
	pub fn in_order(&self) -> impl Iterator<Item = &T> + '_ {
		self.tokens_in_order().map(|token| self.graph.arena[token].data())
	}

	/// Returns an iterator over the tree's values in pre-order.
	pub fn pre_order(&self) -> impl Iterator<Item = &T> + '_ {
		self.graph.pre_order().map(|token| self.graph.arena[token].data())
	}

	/// Returns views of the tree's nodes grouped by depth.
	pub fn levels(&self) -> Levels<'_, T> {
		self.graph.levels()
	}

	/// Removes every node from the tree.
	pub fn clear(&mut self) {
		self.graph.clear();
	}

	#[cfg(feature = "serde")]
	pub(crate) fn from_graph(graph: Graph<T>) -> Self {
		Self { graph }
	}
}

impl<T: PartialOrd> FromIterator<T> for BinarySearchTree<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut tree = Self::new();

		for value in iter {
			tree.insert(value);
		}

		tree
	}
}

impl<T> Structure for BinarySearchTree<T> {
	type Item = T;

	const KIND: StructureKind = StructureKind::BinarySearchTree;

	#[inline(always)]
	fn len(&self) -> usize {
		self.graph.len
	}

	fn clear(&mut self) {
		self.graph.clear();
	}

	fn nodes(&self) -> Vec<NodeView<'_, T>> {
		self.graph.nodes()
	}
}
