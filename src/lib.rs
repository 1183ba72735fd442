// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Classic teaching data structures whose nodes live in a [generational arena].
//!
//! Every structure owns its own [arena], and links between nodes are [tokens] into that arena.
//! This keeps every node's identity stable and displayable (see [`Address`]) while letting the
//! structures expose their internal link layout to a presentation layer through [`NodeView`]s.
//!
//! [generational arena]: generational_arena
//! [arena]: Arena
//! [tokens]: Token

#![warn(clippy::missing_const_for_fn)]

pub mod iter;

pub mod linear;
pub mod tree;

mod error;
mod kind;
mod value;

#[cfg(feature = "serde")]
pub mod snapshot;

pub use error::{StructureError, StructureResult};
pub use kind::{AnyStructure, ParseKindError, StructureKind};
pub use linear::{CircularLinkedList, DoublyLinkedList, DoublyNode, Queue, SinglyLinkedList, SinglyNode, Stack};
pub use tree::{BinaryNode, BinarySearchTree, BinaryTree, Levels, Side};
pub use value::{ParseValueError, Value, ValueKind};

/// The raw index type of the underlying [generational arena].
///
/// [generational arena]: generational_arena::Arena
pub type ArenaIndex = generational_arena::Index;

use std::{
	fmt::{self, Debug, Display, Formatter},
	hash::{Hash, Hasher},
	marker::PhantomData,
	ops::{Index, IndexMut},
};

/// A typed handle to a [node] in an [arena].
///
/// Tokens are cheap to copy and compare equal only when they refer to the same arena slot in the
/// same generation.
///
/// [node]: Node
/// [arena]: Arena
pub struct Token<N: Node> {
	idx: generational_arena::Index,
	_marker: PhantomData<N>,
}

impl<N: Node> Debug for Token<N> {
	#[inline(always)]
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.idx.fmt(f)
	}
}

impl<N: Node, I: Idx> PartialEq<I> for Token<N> {
	#[inline(always)]
	fn eq(&self, other: &I) -> bool {
		self.idx() == other.idx()
	}
}

impl<N: Node> Eq for Token<N> {}

impl<N: Node> Hash for Token<N> {
	#[inline(always)]
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.idx().hash(state)
	}
}

impl<N: Node> Clone for Token<N> {
	#[inline(always)]
	fn clone(&self) -> Self {
		*self
	}
}

impl<N: Node> Copy for Token<N> {}

mod sealed {
	/// Seals a trait, restricting external crates from implementing it.
	pub trait Sealed {}

	/// Provides a [`Token`]'s [arena index] and seals the trait.
	///
	/// [`Token`]: crate::Token
	/// [arena index]: generational_arena::Index
	pub trait Idx {
		/// Return's this [token]'s [arena index].
		///
		/// [token]: crate::Token
		/// [arena index]: generational_arena::Index;
		fn idx(&self) -> generational_arena::Index;
	}
}

pub(crate) use sealed::*;

impl<N: Node> Token<N> {
	/// Creates a new token wrapping the given [arena index].
	///
	/// [arena index]: generational_arena::Index
	#[inline(always)]
	pub(crate) const fn new(idx: generational_arena::Index) -> Self {
		Self {
			idx,
			_marker: PhantomData,
		}
	}

	/// Returns the display [address] of the [node] this token refers to.
	///
	/// [address]: Address
	/// [node]: Node
	#[inline]
	pub fn address(&self) -> Address {
		let (slot, generation) = self.idx.into_raw_parts();

		Address { slot, generation }
	}
}

impl<N: Node> Idx for Token<N> {
	#[inline(always)]
	fn idx(&self) -> generational_arena::Index {
		self.idx
	}
}

/// A cosmetic, stable label for a [node], derived from its [arena index].
///
/// Two live nodes in the same [arena] never share an address, and a slot reused after a removal
/// is told apart by its generation. Addresses carry no structural meaning: they are never used
/// when comparing or ordering values.
///
/// Addresses are formatted like memory addresses, e.g. `0x0000000100000003` for slot `3` in
/// generation `1`. A slot or generation that does not fit in 32 bits is printed as both halves
/// joined by `_`, e.g. `0x1_0000000100000000`, so distinct addresses never share a label.
///
/// [node]: Node
/// [arena index]: ArenaIndex
/// [arena]: Arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
	slot: usize,
	generation: u64,
}

impl Address {
	/// The arena slot the node occupies.
	#[inline(always)]
	pub const fn slot(&self) -> usize {
		self.slot
	}

	/// The generation of the arena slot at the time the node was allocated.
	#[inline(always)]
	pub const fn generation(&self) -> u64 {
		self.generation
	}
}

impl Display for Address {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match (u32::try_from(self.generation), u32::try_from(self.slot)) {
			(Ok(generation), Ok(slot)) => {
				let packed = (u64::from(generation) << 32) | u64::from(slot);

				write!(f, "{packed:#018x}")
			},

			// Too wide to pack into one word; the `_` keeps these apart from packed labels.
			_ => write!(f, "{:#x}_{:016x}", self.generation, self.slot),
		}
	}
}

/// A node stored in an [arena].
///
/// [arena]: Arena
pub trait Node: Sealed {
	/// The value held by this node.
	type Data;

	/// Allocates a new, unlinked node holding `data` in the given `arena`.
	///
	/// The node's [token] is returned.
	///
	/// [token]: Token
	fn new(arena: &mut Arena<Self>, data: Self::Data) -> Token<Self>
	where
		Self: Sized;

	/// Returns this node's [token].
	///
	/// [token]: Token
	fn token(&self) -> Token<Self>
	where
		Self: Sized;

	/// Returns this node's display [address].
	///
	/// [address]: Address
	#[inline(always)]
	fn address(&self) -> Address
	where
		Self: Sized,
	{
		self.token().address()
	}

	/// Returns a reference to the value held by this node.
	fn data(&self) -> &Self::Data;

	/// Returns a mutable reference to the value held by this node.
	fn data_mut(&mut self) -> &mut Self::Data;

	/// Consumes this node, returning its value.
	fn into_data(self) -> Self::Data
	where
		Self: Sized;
}

/// A [node] with a forward link to the node after it.
///
/// [node]: Node
pub trait LinkedNode: Node + Sized {
	/// Returns the [token] of the node after this one.
	///
	/// For the last node of an open chain, [`None`] is returned. The last node of a ring links
	/// back to the first.
	///
	/// [token]: Token
	fn next(&self) -> Option<Token<Self>>;
}

/// A [linked node] that also links back to the node before it.
///
/// [linked node]: LinkedNode
pub trait DoublyLinkedNode: LinkedNode {
	/// Returns the [token] of the node before this one.
	///
	/// If this is the first node, [`None`] is returned.
	///
	/// [token]: Token
	fn prev(&self) -> Option<Token<Self>>;
}

/// An arena in which nodes are allocated.
///
/// Nodes are accessed by using the index operator with their [token].
///
/// [token]: Token
#[derive(Debug)]
pub struct Arena<Node>(pub(crate) generational_arena::Arena<Node>);

impl<Node> Default for Arena<Node> {
	fn default() -> Self {
		Self::new()
	}
}

impl<Node> Arena<Node> {
	/// Creates a new, empty arena.
	pub fn new() -> Self {
		Self(generational_arena::Arena::new())
	}

	/// Creates a new, empty arena with the given initial `capacity`.
	///
	/// A number of nodes equal to the `capacity` may be allocated in the arena without allocating
	/// further memory for the arena itself.
	pub fn with_capacity(capacity: usize) -> Self {
		Self(generational_arena::Arena::with_capacity(capacity))
	}

	/// Returns the number of nodes currently allocated in the arena.
	#[inline(always)]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns whether the arena holds no nodes.
	#[inline(always)]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Releases every node in the arena.
	#[inline(always)]
	pub(crate) fn clear(&mut self) {
		self.0.clear();
	}
}

impl<N: Node> Arena<N> {
	/// Returns the node referred to by `token`, if it is still allocated.
	#[inline(always)]
	pub fn get(&self, token: Token<N>) -> Option<&N> {
		self.0.get(token.idx())
	}

	/// Removes the node referred to by `token` from the arena, returning it.
	#[inline(always)]
	pub(crate) fn remove(&mut self, token: Token<N>) -> Option<N> {
		self.0.remove(token.idx())
	}
}

impl<N: Node> Index<Token<N>> for Arena<N> {
	type Output = N;

	#[inline(always)]
	fn index(&self, token: Token<N>) -> &N {
		&self.0[token.idx()]
	}
}

impl<N: Node> IndexMut<Token<N>> for Arena<N> {
	#[inline(always)]
	fn index_mut(&mut self, token: Token<N>) -> &mut N {
		&mut self.0[token.idx()]
	}
}

/// The links a [node] exposes for rendering.
///
/// [node]: Node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Links {
	/// A node with only a forward link.
	Singly { next: Option<Address> },
	/// A node with forward and backward links.
	Doubly { prev: Option<Address>, next: Option<Address> },
	/// A node with left and right children.
	Binary { left: Option<Address>, right: Option<Address> },
}

/// A read-only view of a single node, for an external presentation layer to render.
///
/// Views borrow the structure they were taken from, so a structure cannot be mutated while any of
/// its views are alive.
#[derive(Debug, PartialEq)]
pub struct NodeView<'structure, T> {
	/// The node's display address.
	pub address: Address,
	/// The value held by the node.
	pub value: &'structure T,
	/// The addresses of the nodes this node links to.
	pub links: Links,
}

impl<T> Clone for NodeView<'_, T> {
	#[inline(always)]
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for NodeView<'_, T> {}

/// Operations every structure supports regardless of its kind.
pub trait Structure {
	/// The type of value held by the structure's nodes.
	type Item;

	/// The [kind] of this structure.
	///
	/// [kind]: StructureKind
	const KIND: StructureKind;

	/// Returns the number of nodes in the structure.
	fn len(&self) -> usize;

	/// Returns whether the structure has no nodes.
	#[inline(always)]
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Releases every node, leaving the structure empty.
	fn clear(&mut self);

	/// Returns a [view] of every node in structural order.
	///
	/// Linear structures list their nodes from the entry point onwards. Trees list theirs level by
	/// level, left to right.
	///
	/// [view]: NodeView
	fn nodes(&self) -> Vec<NodeView<'_, Self::Item>>;
}
