// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::{debug, trace};

use super::{position, DoublyNode};
use crate::{
	iter::{Following, Preceding},
	Arena,
	DoublyLinkedNode,
	LinkedNode,
	Links,
	Node,
	NodeView,
	Structure,
	StructureError,
	StructureKind,
	StructureResult,
	Token,
};

/// A chain of [doubly linked nodes] from the `head` to the `tail`.
///
/// For every node `n` whose next node is `m`, `m`'s previous node is `n`; the head has no previous
/// node and the tail has no next node.
///
/// [doubly linked nodes]: DoublyNode
#[derive(Debug)]
pub struct DoublyLinkedList<T> {
	arena: Arena<DoublyNode<T>>,

	head: Option<Token<DoublyNode<T>>>,
	tail: Option<Token<DoublyNode<T>>>,
	len: usize,
}

impl<T> Default for DoublyLinkedList<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> DoublyLinkedList<T> {
	/// Creates a new, empty list.
	pub fn new() -> Self {
		Self {
			arena: Arena::new(),

			head: None,
			tail: None,
			len: 0,
		}
	}

	/// Creates a new, empty list with room for `capacity` nodes before reallocating.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			arena: Arena::with_capacity(capacity),

			head: None,
			tail: None,
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
		let new = DoublyNode::new(&mut self.arena, value);

		match self.head {
			Some(head) => {
				self.arena[new].next = Some(head);
				self.arena[head].prev = Some(new);
			},

			None => {
				debug_assert!(self.tail.is_none());

				self.tail = Some(new);
			},
		}
		self.head = Some(new);
		self.len += 1;

		trace!(address = %new.address(), len = self.len, "inserted node at beginning");
	}

	/// Inserts `value` as the new tail of the list.
	pub fn insert_at_end(&mut self, value: T) {
		let new = DoublyNode::new(&mut self.arena, value);

		match self.tail {
			Some(tail) => {
				self.arena[new].prev = Some(tail);
				self.arena[tail].next = Some(new);
			},

			None => {
				debug_assert!(self.head.is_none());

				self.head = Some(new);
			},
		}
		self.tail = Some(new);
		self.len += 1;

		trace!(address = %new.address(), len = self.len, "inserted node at end");
	}

	/// Inserts `value` so that it ends up at the given `position`.
	///
	/// Any `position` from `0` up to and including [`len()`] is accepted: `0` inserts at the
	/// beginning and [`len()`] appends at the end.
	///
	/// # Errors
	/// Returns [`StructureError::PositionOutOfRange`] if `position` is greater than [`len()`].
	///
	/// [`len()`]: Self::len
	pub fn insert_at_position(&mut self, position: usize, value: T) -> StructureResult<()> {
		match position {
			0 => self.insert_at_beginning(value),
			position if position == self.len => self.insert_at_end(value),

			position if position < self.len => {
				let next = self.token_at(position).expect("the position is within the list");
				let prev = self.arena[next].prev.expect("only the head has no previous node");

				self.link_between(prev, next, value);
			},

			position => {
				debug!(position, len = self.len, "insert position out of range");

				return Err(StructureError::PositionOutOfRange { position, len: self.len });
			},
		}

		Ok(())
	}

	/// Removes the head of the list, returning its value.
	///
	/// # Errors
	/// Returns [`StructureError::EmptyStructure`] if the list is empty.
	pub fn delete_from_beginning(&mut self) -> StructureResult<T> {
		let head = self.head.ok_or(StructureError::EmptyStructure)?;
		let node = self.arena.remove(head).expect("the head is in the arena");

		match node.next {
			Some(next) => self.arena[next].prev = None,

			// That was the only node.
			None => self.tail = None,
		}
		self.head = node.next;
		self.len -= 1;

		trace!(address = %head.address(), len = self.len, "deleted node from beginning");

		Ok(node.into_data())
	}

	/// Removes the tail of the list, returning its value.
	///
	/// # Errors
	/// Returns [`StructureError::EmptyStructure`] if the list is empty.
	pub fn delete_from_end(&mut self) -> StructureResult<T> {
		let tail = self.tail.ok_or(StructureError::EmptyStructure)?;
		let node = self.arena.remove(tail).expect("the tail is in the arena");

		match node.prev {
			Some(prev) => self.arena[prev].next = None,

			// That was the only node.
			None => self.head = None,
		}
		self.tail = node.prev;
		self.len -= 1;

		trace!(address = %tail.address(), len = self.len, "deleted node from end");

		Ok(node.into_data())
	}

	/// Removes the node at the given `position`, returning its value.
	///
	/// # Errors
	/// Returns [`StructureError::EmptyStructure`] if the list is empty, or
	/// [`StructureError::PositionOutOfRange`] if `position` is not less than [`len()`].
	///
	/// [`len()`]: Self::len
	pub fn delete_at_position(&mut self, position: usize) -> StructureResult<T> {
		if self.is_empty() {
			return Err(StructureError::EmptyStructure);
		}

		match position {
			0 => self.delete_from_beginning(),
			position if position == self.len - 1 => self.delete_from_end(),

			position if position < self.len => {
				let token = self.token_at(position).expect("the position is within the list");

				Ok(self.unlink(token))
			},

			position => {
				debug!(position, len = self.len, "delete position out of range");

				Err(StructureError::PositionOutOfRange { position, len: self.len })
			},
		}
	}

	/// Links a new node holding `value` between the adjacent nodes `prev` and `next`.
	fn link_between(&mut self, prev: Token<DoublyNode<T>>, next: Token<DoublyNode<T>>, value: T) {
		debug_assert_eq!(self.arena[prev].next, Some(next));
		debug_assert_eq!(self.arena[next].prev, Some(prev));

		let new = DoublyNode::new(&mut self.arena, value);

		let node = &mut self.arena[new];
		node.prev = Some(prev);
		node.next = Some(next);

		self.arena[prev].next = Some(new);
		self.arena[next].prev = Some(new);
		self.len += 1;

		trace!(address = %new.address(), len = self.len, "linked node between neighbours");
	}

	/// Unlinks and removes an interior node, joining its neighbours to each other.
	fn unlink(&mut self, token: Token<DoublyNode<T>>) -> T {
		let node = self.arena.remove(token).expect("the node is in the arena");
		let prev = node.prev.expect("an interior node has a previous node");
		let next = node.next.expect("an interior node has a next node");

		self.arena[prev].next = Some(next);
		self.arena[next].prev = Some(prev);
		self.len -= 1;

		trace!(address = %token.address(), len = self.len, "unlinked node from neighbours");

		node.into_data()
	}

	/// Returns the token of the node at `position`, walking from whichever end is closer.
	fn token_at(&self, position: usize) -> Option<Token<DoublyNode<T>>> {
		if position >= self.len {
			return None;
		}

		if position < self.len / 2 {
			self.tokens().nth(position)
		} else {
			self.tokens_rev().nth(self.len - 1 - position)
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

	/// Returns the value at the tail of the list.
	///
	/// # Errors
	/// Returns [`StructureError::EmptyStructure`] if the list is empty.
	pub fn peek_back(&self) -> StructureResult<&T> {
		self.tail
			.map(|tail| self.arena[tail].data())
			.ok_or(StructureError::EmptyStructure)
	}

	/// Returns the index of the first node holding `value`, or [`None`] if there is none.
	pub fn search(&self, value: &T) -> Option<usize>
	where
		T: PartialEq,
	{
		position(&self.arena, self.head, self.len, value)
	}

	/// Returns an iterator over the tokens of the list's nodes, from head to tail.
	pub fn tokens(&self) -> Following<'_, DoublyNode<T>> {
		Following::new(&self.arena, self.head, self.len)
	}

	/// Returns an iterator over the tokens of the list's nodes, from tail to head.
	pub fn tokens_rev(&self) -> Preceding<'_, DoublyNode<T>> {
		Preceding::new(&self.arena, self.tail, self.len)
	}

	/// Returns an iterator over the list's values, from head to tail.
	pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
		self.tokens().map(|token| self.arena[token].data())
	}

	/// Returns an iterator over the list's values, from tail to head.
	pub fn iter_rev(&self) -> impl Iterator<Item = &T> + '_ {
		self.tokens_rev().map(|token| self.arena[token].data())
	}

	/// Removes every node from the list.
	pub fn clear(&mut self) {
		self.arena.clear();
		(self.head, self.tail) = (None, None);
		self.len = 0;
	}
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut list = Self::new();

		for value in iter {
			list.insert_at_end(value);
		}

		list
	}
}

impl<T> Structure for DoublyLinkedList<T> {
	type Item = T;

	const KIND: StructureKind = StructureKind::DoublyLinkedList;

	#[inline(always)]
	fn len(&self) -> usize {
		self.len
	}

	fn clear(&mut self) {
		DoublyLinkedList::clear(self);
	}

	fn nodes(&self) -> Vec<NodeView<'_, T>> {
		self.tokens()
			.map(|token| {
				let node = &self.arena[token];

				NodeView {
					address: token.address(),
					value: node.data(),
					links: Links::Doubly {
						prev: node.prev().map(|prev| prev.address()),
						next: node.next().map(|next| next.address()),
					},
				}
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn values(list: &DoublyLinkedList<i32>) -> Vec<i32> {
		list.iter().copied().collect()
	}

	fn assert_links_consistent(list: &DoublyLinkedList<i32>) {
		let mut backward: Vec<i32> = list.iter_rev().copied().collect();
		backward.reverse();

		assert_eq!(values(list), backward);
		assert_eq!(list.tokens().count(), list.len());

		for token in list.tokens() {
			if let Some(next) = list.arena[token].next {
				assert_eq!(list.arena[next].prev, Some(token));
			}
		}

		if let (Some(head), Some(tail)) = (list.head, list.tail) {
			assert_eq!(list.arena[head].prev, None);
			assert_eq!(list.arena[tail].next, None);
		}
	}

	#[test]
	fn insert_at_every_kind_of_position() {
		let mut list = DoublyLinkedList::new();

		assert_eq!(list.insert_at_position(0, 2), Ok(()));
		assert_eq!(list.insert_at_position(1, 4), Ok(()));
		assert_eq!(list.insert_at_position(1, 3), Ok(()));
		assert_eq!(list.insert_at_position(0, 1), Ok(()));
		assert_eq!(list.insert_at_position(4, 5), Ok(()));

		assert_eq!(values(&list), [1, 2, 3, 4, 5]);
		assert_links_consistent(&list);
	}

	#[test]
	fn insert_past_the_end_is_refused() {
		let mut list: DoublyLinkedList<_> = [1, 2].into_iter().collect();

		assert_eq!(
			list.insert_at_position(3, 9),
			Err(StructureError::PositionOutOfRange { position: 3, len: 2 })
		);
		assert_eq!(values(&list), [1, 2]);
	}

	#[test]
	fn delete_at_every_kind_of_position() {
		let mut list: DoublyLinkedList<_> = [1, 2, 3, 4, 5, 6].into_iter().collect();

		assert_eq!(list.delete_at_position(4), Ok(5));
		assert_links_consistent(&list);
		assert_eq!(list.delete_at_position(1), Ok(2));
		assert_links_consistent(&list);
		assert_eq!(list.delete_at_position(0), Ok(1));
		assert_eq!(list.delete_at_position(2), Ok(6));

		assert_eq!(values(&list), [3, 4]);
		assert_links_consistent(&list);
	}

	#[test]
	fn delete_out_of_range_is_refused() {
		let mut empty: DoublyLinkedList<i32> = DoublyLinkedList::new();
		assert_eq!(empty.delete_at_position(0), Err(StructureError::EmptyStructure));

		let mut list: DoublyLinkedList<_> = [1, 2].into_iter().collect();
		assert_eq!(
			list.delete_at_position(2),
			Err(StructureError::PositionOutOfRange { position: 2, len: 2 })
		);
		assert_eq!(values(&list), [1, 2]);
	}

	#[test]
	fn end_deletions_keep_head_and_tail_in_step() {
		let mut list: DoublyLinkedList<_> = [1, 2, 3].into_iter().collect();

		assert_eq!(list.delete_from_end(), Ok(3));
		assert_eq!(list.peek_back(), Ok(&2));
		assert_eq!(list.delete_from_beginning(), Ok(1));
		assert_eq!(list.peek_front(), Ok(&2));
		assert_eq!(list.peek_back(), Ok(&2));
		assert_eq!(list.delete_from_end(), Ok(2));

		assert!(list.is_empty());
		assert_eq!(list.peek_back(), Err(StructureError::EmptyStructure));
		assert_eq!(list.delete_from_end(), Err(StructureError::EmptyStructure));
	}

	#[test]
	fn node_views_link_both_ways() {
		let list: DoublyLinkedList<_> = [1, 2].into_iter().collect();
		let nodes = list.nodes();

		assert_eq!(
			nodes[0].links,
			Links::Doubly {
				prev: None,
				next: Some(nodes[1].address)
			}
		);
		assert_eq!(
			nodes[1].links,
			Links::Doubly {
				prev: Some(nodes[0].address),
				next: None
			}
		);
	}
}
