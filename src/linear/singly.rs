// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::trace;

use super::{position, singly_views, SinglyNode};
use crate::{iter::Following, Arena, Node, NodeView, Structure, StructureError, StructureKind, StructureResult, Token};

/// An open chain of [singly linked nodes] starting at the `head`.
///
/// No tail is cached, so operations at the end of the list walk the whole chain.
///
/// [singly linked nodes]: SinglyNode
#[derive(Debug)]
pub struct SinglyLinkedList<T> {
	arena: Arena<SinglyNode<T>>,

	head: Option<Token<SinglyNode<T>>>,
	len: usize,
}

impl<T> Default for SinglyLinkedList<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> SinglyLinkedList<T> {
	/// Creates a new, empty list.
	pub fn new() -> Self {
		Self {
			arena: Arena::new(),

			head: None,
			len: 0,
		}
	}

	/// Creates a new, empty list with room for `capacity` nodes before reallocating.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			arena: Arena::with_capacity(capacity),

			head: None,
			len: 0,
		}
	}

	/// Returns the number of nodes in the list.
	#[inline(always)]
	pub const fn len(&self) -> usize {
		self.len
	}

	/// Returns whether the list has no nodes.
	#[inline(always)]
	pub const fn is_empty(&self) -> bool {
		self.head.is_none()
	}

	/// Inserts `value` as the new head of the list.
	pub fn insert_at_beginning(&mut self, value: T) {
		let new = SinglyNode::new(&mut self.arena, value);

		self.arena[new].next = self.head;
		self.head = Some(new);
		self.len += 1;

		trace!(address = %new.address(), len = self.len, "inserted node at beginning");
	}

	/// Appends `value` after the last node of the list.
	///
	/// This walks the whole list to find the last node.
	pub fn insert_at_end(&mut self, value: T) {
		let last = self.tokens().last();
		let new = SinglyNode::new(&mut self.arena, value);

		match last {
			Some(last) => self.arena[last].next = Some(new),
			None => self.head = Some(new),
		}
		self.len += 1;

		trace!(address = %new.address(), len = self.len, "inserted node at end");
	}

	/// Removes the head of the list, returning its value.
	///
	/// # Errors
	/// Returns [`StructureError::EmptyStructure`] if the list is empty.
	pub fn delete_from_beginning(&mut self) -> StructureResult<T> {
		let head = self.head.ok_or(StructureError::EmptyStructure)?;
		let node = self
			.arena
			.remove(head)
			.expect("the head token refers to a node in the arena");

		self.head = node.next;
		self.len -= 1;

		trace!(address = %head.address(), len = self.len, "deleted node from beginning");

		Ok(node.into_data())
	}

	/// Removes the last node of the list, returning its value.
	///
	/// This walks the whole list to find the last node and the node before it.
	///
	/// # Errors
	/// Returns [`StructureError::EmptyStructure`] if the list is empty.
	pub fn delete_from_end(&mut self) -> StructureResult<T> {
		match self.len {
			0 => Err(StructureError::EmptyStructure),
			1 => self.delete_from_beginning(),

			len => {
				let before_last = self
					.tokens()
					.nth(len - 2)
					.expect("there are at least two nodes");
				let last = self.arena[before_last]
					.next
					.take()
					.expect("the node before the last one links to it");

				let node = self.arena.remove(last).expect("the last node is in the arena");
				self.len -= 1;

				trace!(address = %last.address(), len = self.len, "deleted node from end");

				Ok(node.into_data())
			},
		}
	}

	/// Returns the value at the head of the list.
	///
	/// # Errors
	/// Returns [`StructureError::EmptyStructure`] if the list is empty.
	pub fn peek_front(&self) -> StructureResult<&T> {
		self.head
			.map(|head| self.arena[head].data())
			.ok_or(StructureError::EmptyStructure)
	}

	/// Returns the index of the first node holding `value`, or [`None`] if there is none.
	pub fn search(&self, value: &T) -> Option<usize>
	where
		T: PartialEq,
	{
		position(&self.arena, self.head, self.len, value)
	}

	/// Returns an iterator over the tokens of the list's nodes, from the head onwards.
	pub fn tokens(&self) -> Following<'_, SinglyNode<T>> {
		Following::new(&self.arena, self.head, self.len)
	}

	/// Returns an iterator over the list's values, from the head onwards.
	pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
		self.tokens().map(|token| self.arena[token].data())
	}

	/// Removes every node from the list.
	pub fn clear(&mut self) {
		self.arena.clear();
		self.head = None;
		self.len = 0;
	}
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut list = Self::new();
		let mut last: Option<Token<SinglyNode<T>>> = None;

		// Track the last node rather than walking the list for every value.
		for value in iter {
			let new = SinglyNode::new(&mut list.arena, value);

			match last {
				Some(last) => list.arena[last].next = Some(new),
				None => list.head = Some(new),
			}

			last = Some(new);
			list.len += 1;
		}

		list
	}
}

impl<T> Structure for SinglyLinkedList<T> {
	type Item = T;

	const KIND: StructureKind = StructureKind::SinglyLinkedList;

	#[inline(always)]
	fn len(&self) -> usize {
		self.len
	}

	fn clear(&mut self) {
		SinglyLinkedList::clear(self);
	}

	fn nodes(&self) -> Vec<NodeView<'_, T>> {
		singly_views(&self.arena, self.head, self.len)
	}
}
