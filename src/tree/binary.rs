// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::{debug, trace};

use super::{BinaryNode, Graph, Levels, Side, Slot};
use crate::{
	iter::{LevelOrder, PreOrder},
	Node,
	NodeView,
	Structure,
	StructureError,
	StructureKind,
	StructureResult,
	Token,
};

/// A binary tree whose shape is chosen by the caller.
///
/// Values carry no ordering: each new node is placed explicitly as the [left or right] child of an
/// existing node, which is found by value. When several nodes hold the same value, the first one
/// in pre-order is used.
///
/// [left or right]: Side
#[derive(Debug)]
pub struct BinaryTree<T> {
	graph: Graph<T>,
}

impl<T> Default for BinaryTree<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> BinaryTree<T> {
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

	/// Inserts `value` as the child on the given `side` of the first node in pre-order holding
	/// `parent`.
	///
	/// If the tree is empty, `value` becomes the root and `parent` and `side` are ignored.
	///
	/// # Errors
	/// - [`StructureError::NotFound`] if no node holds `parent`, or no `parent` was given for a
	///   non-empty tree.
	/// - [`StructureError::SlotOccupied`] if that node already has a child on the given `side`.
	pub fn insert(&mut self, parent: Option<&T>, value: T, side: Side) -> StructureResult<()>
	where
		T: PartialEq,
	{
		if self.graph.root.is_none() {
			let root = self.graph.attach(Slot::Root, value);
			trace!(address = %root.address(), "inserted root node");

			return Ok(());
		}

		let (_, parent) = parent
			.and_then(|parent| self.graph.find_pre_order(parent))
			.ok_or_else(|| {
				debug!("insert parent not found");

				StructureError::NotFound
			})?;

		if self.graph.arena[parent].child(side).is_some() {
			debug!(parent = %parent.address(), %side, "insert slot already occupied");

			return Err(StructureError::SlotOccupied { side });
		}

		let new = self.graph.attach(Slot::Child(parent, side), value);
		trace!(
			address = %new.address(),
			parent = %parent.address(),
			%side,
			len = self.graph.len,
			height = self.graph.height,
			"inserted child node"
		);

		Ok(())
	}

	/// Deletes the first node in pre-order holding `value`, returning the value it held.
	///
	/// A leaf is simply detached; a node with one child is replaced by that child.
	///
	/// # Errors
	/// - [`StructureError::NotFound`] if no node holds `value`.
	/// - [`StructureError::UnsupportedDeletion`] if that node has two children. The tree is left
	///   unchanged: remove one of its children first.
	pub fn delete(&mut self, value: &T) -> StructureResult<T>
	where
		T: PartialEq,
	{
		let (slot, token) = self.graph.find_pre_order(value).ok_or(StructureError::NotFound)?;

		if self.graph.arena[token].degree() == 2 {
			debug!(address = %token.address(), "refused to delete a node with two children");

			return Err(StructureError::UnsupportedDeletion);
		}

		let removed = self.graph.splice_out(slot, token);
		trace!(
			address = %token.address(),
			len = self.graph.len,
			height = self.graph.height,
			"deleted node"
		);

		Ok(removed)
	}

	/// Returns whether any node holds `value`.
	pub fn search(&self, value: &T) -> bool
	where
		T: PartialEq,
	{
		self.graph.find_pre_order(value).is_some()
	}

	/// Returns an iterator over the tokens of the tree's nodes in pre-order.
	pub fn tokens(&self) -> PreOrder<'_, T> {
		self.graph.pre_order()
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

impl<T> Structure for BinaryTree<T> {
	type Item = T;

	const KIND: StructureKind = StructureKind::BinaryTree;

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
