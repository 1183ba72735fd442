// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::trace;

use super::{position, singly_views, SinglyNode};
use crate::{iter::Following, Arena, Node, NodeView, Structure, StructureError, StructureKind, StructureResult, Token};

/// A ring of [singly linked nodes]: the last node links back to the `head`.
///
/// A list with a single node is a self-loop. Following `next` exactly [`len()`] times from the
/// head always returns to the head, and never sooner.
///
/// [singly linked nodes]: SinglyNode
/// [`len()`]: CircularLinkedList::len
#[derive(Debug)]
pub struct CircularLinkedList<T> {
	arena: Arena<SinglyNode<T>>,

	head: Option<Token<SinglyNode<T>>>,
	len: usize,
}

impl<T> Default for CircularLinkedList<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> CircularLinkedList<T> {
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

	/// Returns the token of the node that links back to the head.
	fn last(&self) -> Option<Token<SinglyNode<T>>> {
		self.tokens().last()
	}

	/// Links a new node holding `value` between the last node and the head, returning its token.
	///
	/// The head is left unchanged.
	fn link_before_head(&mut self, value: T) -> Token<SinglyNode<T>> {
		let last = self.last();
		let new = SinglyNode::new(&mut self.arena, value);

		match (self.head, last) {
			(Some(head), Some(last)) => {
				self.arena[new].next = Some(head);
				self.arena[last].next = Some(new);
			},

			// Empty: the new node closes the ring on its own.
			(..) => {
				self.arena[new].next = Some(new);
				self.head = Some(new);
			},
		}
		self.len += 1;

		new
	}

	/// Inserts `value` as the new head of the list.
	pub fn insert_at_beginning(&mut self, value: T) {
		let new = self.link_before_head(value);
		self.head = Some(new);

		trace!(address = %new.address(), len = self.len, "inserted node at beginning of ring");
	}

	/// Inserts `value` as the new last node of the list, linking back to the head.
	pub fn insert_at_end(&mut self, value: T) {
		let new = self.link_before_head(value);

		trace!(address = %new.address(), len = self.len, "inserted node at end of ring");
	}

	/// Removes the head, returning its value. The node after it becomes the new head.
	///
	/// # Errors
	/// Returns [`StructureError::EmptyStructure`] if the list is empty.
	pub fn delete_from_beginning(&mut self) -> StructureResult<T> {
		let head = self.head.ok_or(StructureError::EmptyStructure)?;

		if self.len == 1 {
			return Ok(self.remove_only(head));
		}

		let last = self.last().expect("the ring is not empty");
		let node = self.arena.remove(head).expect("the head is in the arena");

		self.arena[last].next = node.next;
		self.head = node.next;
		self.len -= 1;

		trace!(address = %head.address(), len = self.len, "deleted node from beginning of ring");

		Ok(node.into_data())
	}

	/// Removes the last node, returning its value.
	///
	/// # Errors
	/// Returns [`StructureError::EmptyStructure`] if the list is empty.
	pub fn delete_from_end(&mut self) -> StructureResult<T> {
		let head = self.head.ok_or(StructureError::EmptyStructure)?;

		if self.len == 1 {
			return Ok(self.remove_only(head));
		}

		let before_last = self
			.tokens()
			.nth(self.len - 2)
			.expect("there are at least two nodes");
		let last = self.arena[before_last].next.expect("every node in a ring has a next node");

		self.arena[before_last].next = Some(head);
		let node = self.arena.remove(last).expect("the last node is in the arena");
		self.len -= 1;

		trace!(address = %last.address(), len = self.len, "deleted node from end of ring");

		Ok(node.into_data())
	}

	/// Removes the only node of a single-node ring.
	fn remove_only(&mut self, head: Token<SinglyNode<T>>) -> T {
		debug_assert_eq!(self.len, 1);

		let node = self.arena.remove(head).expect("the head is in the arena");
		self.head = None;
		self.len = 0;

		trace!(address = %head.address(), "deleted the only node of ring");

		node.into_data()
	}

	/// Moves the head forward to the node after it.
	///
	/// This does nothing if the list has fewer than two nodes.
	pub fn rotate_left(&mut self) {
		if self.len < 2 {
			return;
		}

		if let Some(head) = self.head {
			self.head = self.arena[head].next;
		}
	}

	/// Moves the head back to the last node, making the old head the new last node.
	///
	/// This walks the whole ring to find the last node. It does nothing if the list has fewer than
	/// two nodes.
	pub fn rotate_right(&mut self) {
		if self.len < 2 {
			return;
		}

		self.head = self.last();
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

	/// Returns the index of the first node from the head holding `value`.
	///
	/// At most [`len()`] nodes are compared; if none of them holds `value`, [`None`] is returned.
	///
	/// [`len()`]: Self::len
	pub fn search(&self, value: &T) -> Option<usize>
	where
		T: PartialEq,
	{
		position(&self.arena, self.head, self.len, value)
	}

	/// Returns an iterator over the tokens of one lap around the ring, starting at the head.
	pub fn tokens(&self) -> Following<'_, SinglyNode<T>> {
		Following::new(&self.arena, self.head, self.len)
	}

	/// Returns an iterator over the values of one lap around the ring, starting at the head.
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

impl<T> FromIterator<T> for CircularLinkedList<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut list = Self::new();
		let mut last: Option<Token<SinglyNode<T>>> = None;

		for value in iter {
			let new = SinglyNode::new(&mut list.arena, value);

			match last {
				Some(last) => list.arena[last].next = Some(new),
				None => list.head = Some(new),
			}

			last = Some(new);
			list.len += 1;
		}

		// Close the ring.
		if let (Some(head), Some(last)) = (list.head, last) {
			list.arena[last].next = Some(head);
		}

		list
	}
}

impl<T> Structure for CircularLinkedList<T> {
	type Item = T;

	const KIND: StructureKind = StructureKind::CircularLinkedList;

	#[inline(always)]
	fn len(&self) -> usize {
		self.len
	}

	fn clear(&mut self) {
		CircularLinkedList::clear(self);
	}

	/// The last view's `next` link is the head's address.
	fn nodes(&self) -> Vec<NodeView<'_, T>> {
		singly_views(&self.arena, self.head, self.len)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Links;

	fn values(list: &CircularLinkedList<i32>) -> Vec<i32> {
		list.iter().copied().collect()
	}

	/// Follows `next` links from the head until it comes back around, counting the steps.
	fn lap_length(list: &CircularLinkedList<i32>) -> usize {
		let head = list.head.expect("the list is not empty");
		let mut current = list.arena[head].next.expect("every node in a ring has a next node");
		let mut steps = 1;

		while current != head {
			current = list.arena[current].next.expect("every node in a ring has a next node");
			steps += 1;

			assert!(steps <= list.len(), "the ring is longer than its length");
		}

		steps
	}

	#[test]
	fn single_node_is_a_self_loop() {
		let mut list = CircularLinkedList::new();
		list.insert_at_end(1);

		let nodes = list.nodes();
		assert_eq!(nodes[0].links, Links::Singly { next: Some(nodes[0].address) });
		assert_eq!(lap_length(&list), 1);
	}

	#[test]
	fn ring_stays_closed_after_every_mutation() {
		let mut list = CircularLinkedList::new();

		list.insert_at_end(2);
		list.insert_at_beginning(1);
		list.insert_at_end(3);
		list.insert_at_end(4);
		assert_eq!(values(&list), [1, 2, 3, 4]);
		assert_eq!(lap_length(&list), 4);

		assert_eq!(list.delete_from_beginning(), Ok(1));
		assert_eq!(lap_length(&list), 3);

		assert_eq!(list.delete_from_end(), Ok(4));
		assert_eq!(values(&list), [2, 3]);
		assert_eq!(lap_length(&list), 2);

		let nodes = list.nodes();
		assert_eq!(nodes[1].links, Links::Singly { next: Some(nodes[0].address) });
	}

	#[test]
	fn deleting_the_only_node_empties_the_ring() {
		let mut list = CircularLinkedList::new();
		list.insert_at_beginning(9);

		assert_eq!(list.delete_from_end(), Ok(9));
		assert!(list.is_empty());
		assert_eq!(list.delete_from_beginning(), Err(StructureError::EmptyStructure));
		assert_eq!(list.delete_from_end(), Err(StructureError::EmptyStructure));
	}

	#[test]
	fn search_terminates_without_a_match() {
		let empty: CircularLinkedList<i32> = CircularLinkedList::new();
		assert_eq!(empty.search(&1), None);

		let list: CircularLinkedList<_> = [1, 2, 3].into_iter().collect();
		assert_eq!(list.search(&3), Some(2));
		assert_eq!(list.search(&4), None);
	}

	#[test]
	fn rotations() {
		let mut list: CircularLinkedList<_> = [1, 2, 3].into_iter().collect();

		list.rotate_left();
		assert_eq!(values(&list), [2, 3, 1]);

		list.rotate_right();
		list.rotate_right();
		assert_eq!(values(&list), [3, 1, 2]);
		assert_eq!(lap_length(&list), 3);
	}

	#[test]
	fn rotating_a_single_node_does_nothing() {
		let mut list: CircularLinkedList<_> = [1].into_iter().collect();

		list.rotate_left();
		list.rotate_right();

		assert_eq!(values(&list), [1]);
	}
}
