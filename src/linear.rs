// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structures made of chains of [linked nodes]: stacks, queues and linked lists.
//!
//! [linked nodes]: LinkedNode

use std::hash::{Hash, Hasher};

use crate::{
	iter::Following,
	sealed::Sealed,
	Arena,
	DoublyLinkedNode,
	LinkedNode,
	Links,
	Node,
	NodeView,
	Token,
};

mod circular;
mod doubly;
mod queue;
mod singly;
mod stack;

pub use circular::CircularLinkedList;
pub use doubly::DoublyLinkedList;
pub use queue::Queue;
pub use singly::SinglyLinkedList;
pub use stack::Stack;

/// A [node] with a single forward link, used by [stacks], [queues], [singly linked lists] and
/// [circular linked lists].
///
/// [node]: Node
/// [stacks]: Stack
/// [queues]: Queue
/// [singly linked lists]: SinglyLinkedList
/// [circular linked lists]: CircularLinkedList
#[derive(Debug)]
pub struct SinglyNode<T> {
	token: Token<Self>,

	next: Option<Token<Self>>,

	data: T,
}

/// A [node] with forward and backward links, used by [doubly linked lists].
///
/// [node]: Node
/// [doubly linked lists]: DoublyLinkedList
#[derive(Debug)]
pub struct DoublyNode<T> {
	token: Token<Self>,

	prev: Option<Token<Self>>,
	next: Option<Token<Self>>,

	data: T,
}

impl<T> PartialEq for SinglyNode<T> {
	#[inline(always)]
	fn eq(&self, other: &Self) -> bool {
		self.token == other.token
	}
}

impl<T> Eq for SinglyNode<T> {}

impl<T> Hash for SinglyNode<T> {
	#[inline(always)]
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.token.hash(state);
	}
}

impl<T> Sealed for SinglyNode<T> {}

impl<T> Node for SinglyNode<T> {
	type Data = T;

	fn new(arena: &mut Arena<Self>, data: T) -> Token<Self> {
		Token::new(arena.0.insert_with(|idx| Self {
			token: Token::new(idx),

			next: None,

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

impl<T> LinkedNode for SinglyNode<T> {
	#[inline(always)]
	fn next(&self) -> Option<Token<Self>> {
		self.next
	}
}

impl<T> PartialEq for DoublyNode<T> {
	#[inline(always)]
	fn eq(&self, other: &Self) -> bool {
		self.token == other.token
	}
}

impl<T> Eq for DoublyNode<T> {}

impl<T> Hash for DoublyNode<T> {
	#[inline(always)]
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.token.hash(state);
	}
}

impl<T> Sealed for DoublyNode<T> {}

impl<T> Node for DoublyNode<T> {
	type Data = T;

	fn new(arena: &mut Arena<Self>, data: T) -> Token<Self> {
		Token::new(arena.0.insert_with(|idx| Self {
			token: Token::new(idx),

			prev: None,
			next: None,

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

impl<T> LinkedNode for DoublyNode<T> {
	#[inline(always)]
	fn next(&self) -> Option<Token<Self>> {
		self.next
	}
}

impl<T> DoublyLinkedNode for DoublyNode<T> {
	#[inline(always)]
	fn prev(&self) -> Option<Token<Self>> {
		self.prev
	}
}

/// Returns the 0-based position of the first node from `first` whose value equals `value`.
///
/// At most `len` nodes are compared.
pub(crate) fn position<N>(arena: &Arena<N>, first: Option<Token<N>>, len: usize, value: &N::Data) -> Option<usize>
where
	N: LinkedNode,
	N::Data: PartialEq,
{
	Following::new(arena, first, len).position(|token| arena[token].data() == value)
}

/// Returns [views] of the `len` singly linked nodes starting at `first`.
///
/// [views]: NodeView
pub(crate) fn singly_views<T>(
	arena: &Arena<SinglyNode<T>>,
	first: Option<Token<SinglyNode<T>>>,
	len: usize,
) -> Vec<NodeView<'_, T>> {
	Following::new(arena, first, len)
		.map(|token| {
			let node = &arena[token];

			NodeView {
				address: token.address(),
				value: node.data(),
				links: Links::Singly {
					next: node.next.map(|next| next.address()),
				},
			}
		})
		.collect()
}
