// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::trace;

use super::{position, singly_views, SinglyNode};
use crate::{iter::Following, Arena, Node, NodeView, Structure, StructureError, StructureKind, StructureResult, Token};

/// A last-in, first-out stack of [singly linked nodes].
///
/// The most recently [pushed] node is the `top`; each node links to the one pushed before it.
///
/// [singly linked nodes]: SinglyNode
/// [pushed]: Stack::push
#[derive(Debug)]
pub struct Stack<T> {
	arena: Arena<SinglyNode<T>>,

	top: Option<Token<SinglyNode<T>>>,
	len: usize,
}

impl<T> Default for Stack<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Stack<T> {
	/// Creates a new, empty stack.
	pub fn new() -> Self {
		Self {
			arena: Arena::new(),

			top: None,
			len: 0,
		}
	}

	/// Creates a new, empty stack with room for `capacity` nodes before reallocating.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			arena: Arena::with_capacity(capacity),

			top: None,
			len: 0,
		}
	}

	/// Returns the number of nodes on the stack.
	#[inline(always)]
	pub const fn len(&self) -> usize {
		self.len
	}

	/// Returns whether the stack has no nodes.
	#[inline(always)]
	pub const fn is_empty(&self) -> bool {
		self.top.is_none()
	}

	/// Pushes `value` onto the top of the stack.
	pub fn push(&mut self, value: T) {
		let new = SinglyNode::new(&mut self.arena, value);

		self.arena[new].next = self.top;
		self.top = Some(new);
		self.len += 1;

		trace!(address = %new.address(), len = self.len, "pushed node onto stack");
	}

	/// Removes the top node, returning its value.
	///
	/// # Errors
	/// Returns [`StructureError::EmptyStructure`] if the stack is empty.
	pub fn pop(&mut self) -> StructureResult<T> {
		let top = self.top.ok_or(StructureError::EmptyStructure)?;
		let node = self
			.arena
			.remove(top)
			.expect("the top token refers to a node in the arena");

		self.top = node.next;
		self.len -= 1;

		trace!(address = %top.address(), len = self.len, "popped node from stack");

		Ok(node.into_data())
	}

	/// Returns the value at the top of the stack without removing it.
	///
	/// # Errors
	/// Returns [`StructureError::EmptyStructure`] if the stack is empty.
	pub fn peek(&self) -> StructureResult<&T> {
		self.top
			.map(|top| self.arena[top].data())
			.ok_or(StructureError::EmptyStructure)
	}

	/// Returns how many nodes below the top the first node holding `value` is.
	///
	/// The top node is at distance `0`. If no node holds `value`, [`None`] is returned.
	pub fn search(&self, value: &T) -> Option<usize>
	where
		T: PartialEq,
	{
		position(&self.arena, self.top, self.len, value)
	}

	/// Returns an iterator over the tokens of the stack's nodes, from the top down.
	pub fn tokens(&self) -> Following<'_, SinglyNode<T>> {
		Following::new(&self.arena, self.top, self.len)
	}

	/// Returns an iterator over the stack's values, from the top down.
	pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
		self.tokens().map(|token| self.arena[token].data())
	}

	/// Removes every node from the stack.
	pub fn clear(&mut self) {
		self.arena.clear();
		self.top = None;
		self.len = 0;
	}
}

/// Builds a stack whose nodes, read from the top down, are the iterator's values in order.
impl<T> FromIterator<T> for Stack<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let values: Vec<T> = iter.into_iter().collect();
		let mut stack = Self::with_capacity(values.len());

		for value in values.into_iter().rev() {
			stack.push(value);
		}

		stack
	}
}

impl<T> Structure for Stack<T> {
	type Item = T;

	const KIND: StructureKind = StructureKind::Stack;

	#[inline(always)]
	fn len(&self) -> usize {
		self.len
	}

	fn clear(&mut self) {
		Stack::clear(self);
	}

	fn nodes(&self) -> Vec<NodeView<'_, T>> {
		singly_views(&self.arena, self.top, self.len)
	}
}
