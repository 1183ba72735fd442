// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{collections::VecDeque, iter::FusedIterator};

use crate::{tree::BinaryNode, Arena, DoublyLinkedNode, LinkedNode, Token};

/// An iterator over the [tokens] of a chain of [linked nodes], following their [next] links.
///
/// The iterator stops after a fixed number of nodes, so it also terminates on a ring.
///
/// [tokens]: Token
/// [linked nodes]: LinkedNode
/// [next]: LinkedNode::next
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Following<'arena, N: LinkedNode> {
	arena: &'arena Arena<N>,

	next: Option<Token<N>>,
	remaining: usize,
}

/// An iterator over the [tokens] of a chain of [doubly linked nodes], following their [prev]
/// links.
///
/// [tokens]: Token
/// [doubly linked nodes]: DoublyLinkedNode
/// [prev]: DoublyLinkedNode::prev
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Preceding<'arena, N: DoublyLinkedNode> {
	arena: &'arena Arena<N>,

	prev: Option<Token<N>>,
	remaining: usize,
}

/// An iterator over the [tokens] of a binary tree in pre-order: each node, then its left
/// subtree, then its right subtree.
///
/// [tokens]: Token
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct PreOrder<'arena, T> {
	arena: &'arena Arena<BinaryNode<T>>,

	stack: Vec<Token<BinaryNode<T>>>,
}

/// An iterator over the [tokens] of a binary tree in in-order: each node's left subtree, then
/// the node, then its right subtree.
///
/// [tokens]: Token
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct InOrder<'arena, T> {
	arena: &'arena Arena<BinaryNode<T>>,

	stack: Vec<Token<BinaryNode<T>>>,
	current: Option<Token<BinaryNode<T>>>,
}

/// An iterator over the [tokens] of a binary tree in level order, each paired with its depth.
///
/// This iterator is a breadth-first traversal: the root (at depth `0`) comes first, then its
/// children, then its grandchildren, and so on, with left children before right children.
///
/// [tokens]: Token
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct LevelOrder<'arena, T> {
	arena: &'arena Arena<BinaryNode<T>>,

	queue: VecDeque<(usize, Token<BinaryNode<T>>)>,
}

impl<'arena, N: LinkedNode> Following<'arena, N> {
	#[inline(always)]
	pub(crate) const fn new(arena: &'arena Arena<N>, first: Option<Token<N>>, len: usize) -> Self {
		Self {
			arena,

			next: first,
			remaining: len,
		}
	}
}

impl<'arena, N: LinkedNode> Iterator for Following<'arena, N> {
	type Item = Token<N>;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}

		self.next.map(|node| {
			self.remaining -= 1;
			self.next = self.arena[node].next();

			node
		})
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		match &self.next {
			None => (0, Some(0)),
			Some(_) => (self.remaining, Some(self.remaining)),
		}
	}
}

impl<'arena, N: LinkedNode> ExactSizeIterator for Following<'arena, N> {}

impl<'arena, N: LinkedNode> FusedIterator for Following<'arena, N> {}

impl<'arena, N: DoublyLinkedNode> Preceding<'arena, N> {
	#[inline(always)]
	pub(crate) const fn new(arena: &'arena Arena<N>, last: Option<Token<N>>, len: usize) -> Self {
		Self {
			arena,

			prev: last,
			remaining: len,
		}
	}
}

impl<'arena, N: DoublyLinkedNode> Iterator for Preceding<'arena, N> {
	type Item = Token<N>;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}

		self.prev.map(|node| {
			self.remaining -= 1;
			self.prev = self.arena[node].prev();

			node
		})
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		match &self.prev {
			None => (0, Some(0)),
			Some(_) => (self.remaining, Some(self.remaining)),
		}
	}
}

impl<'arena, N: DoublyLinkedNode> ExactSizeIterator for Preceding<'arena, N> {}

impl<'arena, N: DoublyLinkedNode> FusedIterator for Preceding<'arena, N> {}

impl<'arena, T> PreOrder<'arena, T> {
	#[inline]
	pub(crate) fn new(arena: &'arena Arena<BinaryNode<T>>, root: Option<Token<BinaryNode<T>>>) -> Self {
		Self {
			arena,

			stack: root.into_iter().collect(),
		}
	}
}

impl<'arena, T> Iterator for PreOrder<'arena, T> {
	type Item = Token<BinaryNode<T>>;

	fn next(&mut self) -> Option<Self::Item> {
		let token = self.stack.pop()?;
		let node = &self.arena[token];

		// Right is pushed first so that the left subtree is visited first.
		self.stack.extend(node.right());
		self.stack.extend(node.left());

		Some(token)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.stack.len(), None)
	}
}

impl<'arena, T> FusedIterator for PreOrder<'arena, T> {}

impl<'arena, T> InOrder<'arena, T> {
	#[inline(always)]
	pub(crate) const fn new(arena: &'arena Arena<BinaryNode<T>>, root: Option<Token<BinaryNode<T>>>) -> Self {
		Self {
			arena,

			stack: Vec::new(),
			current: root,
		}
	}
}

impl<'arena, T> Iterator for InOrder<'arena, T> {
	type Item = Token<BinaryNode<T>>;

	fn next(&mut self) -> Option<Self::Item> {
		// Walk down to the leftmost node not yet visited.
		while let Some(token) = self.current {
			self.stack.push(token);
			self.current = self.arena[token].left();
		}

		let token = self.stack.pop()?;
		self.current = self.arena[token].right();

		Some(token)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		match (&self.current, self.stack.len()) {
			(None, 0) => (0, Some(0)),
			(Some(_), len) => (len + 1, None),
			(None, len) => (len, None),
		}
	}
}

impl<'arena, T> FusedIterator for InOrder<'arena, T> {}

impl<'arena, T> LevelOrder<'arena, T> {
	#[inline]
	pub(crate) fn new(arena: &'arena Arena<BinaryNode<T>>, root: Option<Token<BinaryNode<T>>>) -> Self {
		Self {
			arena,

			queue: root.map(|root| (0, root)).into_iter().collect(),
		}
	}
}

impl<'arena, T> Iterator for LevelOrder<'arena, T> {
	type Item = (usize, Token<BinaryNode<T>>);

	fn next(&mut self) -> Option<Self::Item> {
		let (depth, token) = self.queue.pop_front()?;
		let node = &self.arena[token];

		self.queue.extend(node.left().map(|left| (depth + 1, left)));
		self.queue.extend(node.right().map(|right| (depth + 1, right)));

		Some((depth, token))
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.queue.len(), None)
	}
}

impl<'arena, T> FusedIterator for LevelOrder<'arena, T> {}
