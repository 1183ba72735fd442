// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structures made of [binary nodes]: caller-directed [binary trees] and
//! [binary search trees].
//!
//! [binary nodes]: BinaryNode
//! [binary trees]: BinaryTree
//! [binary search trees]: BinarySearchTree

use std::{
	collections::BTreeMap,
	fmt::{self, Display, Formatter},
	hash::{Hash, Hasher},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
	iter::{LevelOrder, PreOrder},
	sealed::Sealed,
	Arena,
	Links,
	Node,
	NodeView,
	Token,
};

mod binary;
mod search;

pub use binary::BinaryTree;
pub use search::BinarySearchTree;

/// Views of a tree's nodes grouped by depth, the root being at depth `0`.
///
/// Within a level, nodes are ordered left to right.
pub type Levels<'tree, T> = BTreeMap<usize, Vec<NodeView<'tree, T>>>;

/// Which child slot of a [binary node] is meant.
///
/// [binary node]: BinaryNode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum Side {
	Left,
	Right,
}

impl Display for Side {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Left => "left",
			Self::Right => "right",
		})
	}
}

/// A [node] with a left and a right child.
///
/// No parent link is stored: parents are found by walking down from the root.
///
/// [node]: Node
#[derive(Debug)]
pub struct BinaryNode<T> {
	token: Token<Self>,

	left: Option<Token<Self>>,
	right: Option<Token<Self>>,

	data: T,
}

impl<T> BinaryNode<T> {
	/// Returns the token of this node's left child, if it has one.
	#[inline(always)]
	pub const fn left(&self) -> Option<Token<Self>> {
		self.left
	}

	/// Returns the token of this node's right child, if it has one.
	#[inline(always)]
	pub const fn right(&self) -> Option<Token<Self>> {
		self.right
	}

	/// Returns the token of the child on the given `side`, if there is one.
	#[inline(always)]
	pub const fn child(&self, side: Side) -> Option<Token<Self>> {
		match side {
			Side::Left => self.left,
			Side::Right => self.right,
		}
	}

	#[inline(always)]
	fn child_mut(&mut self, side: Side) -> &mut Option<Token<Self>> {
		match side {
			Side::Left => &mut self.left,
			Side::Right => &mut self.right,
		}
	}

	/// Returns the number of children this node has.
	#[inline(always)]
	pub const fn degree(&self) -> usize {
		self.left.is_some() as usize + self.right.is_some() as usize
	}
}

impl<T> PartialEq for BinaryNode<T> {
	#[inline(always)]
	fn eq(&self, other: &Self) -> bool {
		self.token == other.token
	}
}

impl<T> Eq for BinaryNode<T> {}

impl<T> Hash for BinaryNode<T> {
	#[inline(always)]
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.token.hash(state);
	}
}

impl<T> Sealed for BinaryNode<T> {}

impl<T> Node for BinaryNode<T> {
	type Data = T;

	fn new(arena: &mut Arena<Self>, data: T) -> Token<Self> {
		Token::new(arena.0.insert_with(|idx| Self {
			token: Token::new(idx),

			left: None,
			right: None,

			data,
		}))
	}

	#[inline(always)]
	fn token(&self) -> Token<Self> {
		self.token
	}

	#[inline(always)]
	fn data(&self) -> &T {
		&self.data
	}

	#[inline(always)]
	fn data_mut(&mut self) -> &mut T {
		&mut self.data
	}

	#[inline(always)]
	fn into_data(self) -> T {
		self.data
	}
}

/// Where a node hangs in its tree: under the root pointer, or in a parent's child slot.
#[derive(Debug)]
pub(crate) enum Slot<T> {
	Root,
	Child(Token<BinaryNode<T>>, Side),
}

impl<T> Clone for Slot<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Slot<T> {}

/// The node graph shared by both kinds of binary tree: an arena, its root and cached counters.
#[derive(Debug)]
pub(crate) struct Graph<T> {
	pub(crate) arena: Arena<BinaryNode<T>>,

	pub(crate) root: Option<Token<BinaryNode<T>>>,
	pub(crate) len: usize,
	pub(crate) height: usize,
}

impl<T> Graph<T> {
	pub(crate) fn new() -> Self {
		Self {
			arena: Arena::new(),

			root: None,
			len: 0,
			height: 0,
		}
	}

	pub(crate) fn with_capacity(capacity: usize) -> Self {
		Self {
			arena: Arena::with_capacity(capacity),

			root: None,
			len: 0,
			height: 0,
		}
	}

	/// Allocates a new node holding `value` and hangs it in `slot`, which must be empty.
	pub(crate) fn attach(&mut self, slot: Slot<T>, value: T) -> Token<BinaryNode<T>> {
		let new = BinaryNode::new(&mut self.arena, value);

		let target = self.slot_mut(slot);
		debug_assert!(target.is_none(), "attached a node to an occupied slot");
		*target = Some(new);

		self.len += 1;
		self.recompute_height();

		new
	}

	/// Removes a node with at most one child from the tree, splicing that child into `slot`.
	///
	/// `slot` must be where `token` currently hangs.
	pub(crate) fn splice_out(&mut self, slot: Slot<T>, token: Token<BinaryNode<T>>) -> T {
		let node = self.arena.remove(token).expect("the node is in the arena");
		debug_assert!(node.degree() < 2, "spliced out a node with two children");

		let target = self.slot_mut(slot);
		debug_assert_eq!(*target, Some(token));
		*target = node.left.or(node.right);

		self.len -= 1;
		self.recompute_height();

		node.into_data()
	}

	fn slot_mut(&mut self, slot: Slot<T>) -> &mut Option<Token<BinaryNode<T>>> {
		match slot {
			Slot::Root => &mut self.root,
			Slot::Child(parent, side) => self.arena[parent].child_mut(side),
		}
	}

	/// Recomputes the height from scratch by walking every level of the tree.
	pub(crate) fn recompute_height(&mut self) {
		self.height = self.level_order().map(|(depth, _)| depth + 1).max().unwrap_or(0);
	}

	/// Finds the first node in pre-order holding `value`, along with the slot it hangs in.
	pub(crate) fn find_pre_order(&self, value: &T) -> Option<(Slot<T>, Token<BinaryNode<T>>)>
	where
		T: PartialEq,
	{
		let mut stack: Vec<(Slot<T>, Token<BinaryNode<T>>)> = self.root.map(|root| (Slot::Root, root)).into_iter().collect();

		while let Some((slot, token)) = stack.pop() {
			let node = &self.arena[token];

			if node.data() == value {
				return Some((slot, token));
			}

			// Right is pushed first so that the left subtree is searched first.
			stack.extend(node.right.map(|right| (Slot::Child(token, Side::Right), right)));
			stack.extend(node.left.map(|left| (Slot::Child(token, Side::Left), left)));
		}

		None
	}

	pub(crate) fn pre_order(&self) -> PreOrder<'_, T> {
		PreOrder::new(&self.arena, self.root)
	}

	pub(crate) fn level_order(&self) -> LevelOrder<'_, T> {
		LevelOrder::new(&self.arena, self.root)
	}

	pub(crate) fn view(&self, token: Token<BinaryNode<T>>) -> NodeView<'_, T> {
		let node = &self.arena[token];

		NodeView {
			address: token.address(),
			value: node.data(),
			links: Links::Binary {
				left: node.left.map(|left| left.address()),
				right: node.right.map(|right| right.address()),
			},
		}
	}

	/// Views of every node, level by level.
	pub(crate) fn nodes(&self) -> Vec<NodeView<'_, T>> {
		self.level_order().map(|(_, token)| self.view(token)).collect()
	}

	pub(crate) fn levels(&self) -> Levels<'_, T> {
		let mut levels = Levels::new();

		for (depth, token) in self.level_order() {
			levels.entry(depth).or_insert_with(Vec::new).push(self.view(token));
		}

		levels
	}

	pub(crate) fn clear(&mut self) {
		self.arena.clear();
		self.root = None;
		self.len = 0;
		self.height = 0;
	}
}
