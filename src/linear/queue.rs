// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::trace;

use super::{position, singly_views, SinglyNode};
use crate::{iter::Following, Arena, Node, NodeView, Structure, StructureError, StructureKind, StructureResult, Token};

/// A first-in, first-out queue of [singly linked nodes].
///
/// Nodes are [enqueued] at the `rear` and [dequeued] from the `front`; each node links to the one
/// enqueued after it.
///
/// [singly linked nodes]: SinglyNode
/// [enqueued]: Queue::enqueue
/// [dequeued]: Queue::dequeue
#[derive(Debug)]
pub struct Queue<T> {
	arena: Arena<SinglyNode<T>>,

	front: Option<Token<SinglyNode<T>>>,
	rear: Option<Token<SinglyNode<T>>>,
	len: usize,
}

impl<T> Default for Queue<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Queue<T> {
	/// Creates a new, empty queue.
	pub fn new() -> Self {
		Self {
			arena: Arena::new(),

			front: None,
			rear: None,
			len: 0,
		}
	}

	/// Creates a new, empty queue with room for `capacity` nodes before reallocating.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			arena: Arena::with_capacity(capacity),

			front: None,
			rear: None,
			len: 0,
		}
	}

	/// Returns the number of nodes in the queue.
	#[inline(always)]
	pub const fn len(&self) -> usize {
		self.len
	}

	/// Returns whether the queue has no nodes.
	#[inline(always)]
	pub const fn is_empty(&self) -> bool {
		self.front.is_none()
	}

	/// Appends `value` at the rear of the queue.
	pub fn enqueue(&mut self, value: T) {
		let new = SinglyNode::new(&mut self.arena, value);

		match self.rear {
			Some(rear) => self.arena[rear].next = Some(new),

			None => {
				debug_assert!(self.front.is_none());

				self.front = Some(new);
			},
		}

		self.rear = Some(new);
		self.len += 1;

		trace!(address = %new.address(), len = self.len, "enqueued node");
	}

	/// Removes the front node, returning its value.
	///
	/// # Errors
	/// Returns [`StructureError::EmptyStructure`] if the queue is empty.
	pub fn dequeue(&mut self) -> StructureResult<T> {
		let front = self.front.ok_or(StructureError::EmptyStructure)?;
		let node = self
			.arena
			.remove(front)
			.expect("the front token refers to a node in the arena");

		self.front = node.next;
		// The front was also the rear.
		if self.front.is_none() {
			self.rear = None;
		}
		self.len -= 1;

		trace!(address = %front.address(), len = self.len, "dequeued node");

		Ok(node.into_data())
	}

	/// Returns the value at the front of the queue without removing it.
	///
	/// # Errors
	/// Returns [`StructureError::EmptyStructure`] if the queue is empty.
	pub fn peek(&self) -> StructureResult<&T> {
		self.front
			.map(|front| self.arena[front].data())
			.ok_or(StructureError::EmptyStructure)
	}

	/// Returns the value at the rear of the queue.
	///
	/// # Errors
	/// Returns [`StructureError::EmptyStructure`] if the queue is empty.
	pub fn peek_rear(&self) -> StructureResult<&T> {
		self.rear
			.map(|rear| self.arena[rear].data())
			.ok_or(StructureError::EmptyStructure)
	}

	/// Returns how many nodes behind the front the first node holding `value` is.
	///
	/// The front node is at distance `0`. If no node holds `value`, [`None`] is returned.
	pub fn search(&self, value: &T) -> Option<usize>
	where
		T: PartialEq,
	{
		position(&self.arena, self.front, self.len, value)
	}

	/// Returns an iterator over the tokens of the queue's nodes, from front to rear.
	pub fn tokens(&self) -> Following<'_, SinglyNode<T>> {
		Following::new(&self.arena, self.front, self.len)
	}

	/// Returns an iterator over the queue's values, from front to rear.
	pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
		self.tokens().map(|token| self.arena[token].data())
	}

	/// Removes every node from the queue.
	pub fn clear(&mut self) {
		self.arena.clear();
		(self.front, self.rear) = (None, None);
		self.len = 0;
	}
}

impl<T> FromIterator<T> for Queue<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut queue = Self::new();

		for value in iter {
			queue.enqueue(value);
		}

		queue
	}
}

impl<T> Structure for Queue<T> {
	type Item = T;

	const KIND: StructureKind = StructureKind::Queue;

	#[inline(always)]
	fn len(&self) -> usize {
		self.len
	}

	fn clear(&mut self) {
		Queue::clear(self);
	}

	fn nodes(&self) -> Vec<NodeView<'_, T>> {
		singly_views(&self.arena, self.front, self.len)
	}
}
