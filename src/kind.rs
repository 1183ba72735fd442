// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use cfg_attrs::cfg_attrs;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
	BinarySearchTree,
	BinaryTree,
	CircularLinkedList,
	DoublyLinkedList,
	Levels,
	NodeView,
	Queue,
	SinglyLinkedList,
	Stack,
	Structure,
};

#[cfg_attrs]
/// The kind of a [structure], used to choose which one to build.
///
/// A kind displays as, and [parses] from, its human-readable name, such as `Binary Search Tree`.
#[configure(
	feature = "serde",
	/// The same names are used as the kind tag of a [snapshot].
	///
	/// [snapshot]: crate::snapshot::Snapshot
	///
)]
/// [structure]: Structure
/// [parses]: StructureKind::from_str
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum StructureKind {
	#[cfg_attr(feature = "serde", serde(rename = "Stack"))]
	Stack,
	#[cfg_attr(feature = "serde", serde(rename = "Queue"))]
	Queue,
	#[cfg_attr(feature = "serde", serde(rename = "Singly Linked List"))]
	SinglyLinkedList,
	#[cfg_attr(feature = "serde", serde(rename = "Circular Linked List"))]
	CircularLinkedList,
	#[cfg_attr(feature = "serde", serde(rename = "Doubly Linked List"))]
	DoublyLinkedList,
	#[cfg_attr(feature = "serde", serde(rename = "Binary Tree"))]
	BinaryTree,
	#[cfg_attr(feature = "serde", serde(rename = "Binary Search Tree"))]
	BinarySearchTree,
}

impl StructureKind {
	/// Every kind, in the order they are usually listed.
	pub const ALL: [Self; 7] = [
		Self::Stack,
		Self::Queue,
		Self::SinglyLinkedList,
		Self::CircularLinkedList,
		Self::DoublyLinkedList,
		Self::BinaryTree,
		Self::BinarySearchTree,
	];

	/// Returns the human-readable name of this kind.
	pub const fn name(&self) -> &'static str {
		match self {
			Self::Stack => "Stack",
			Self::Queue => "Queue",
			Self::SinglyLinkedList => "Singly Linked List",
			Self::CircularLinkedList => "Circular Linked List",
			Self::DoublyLinkedList => "Doubly Linked List",
			Self::BinaryTree => "Binary Tree",
			Self::BinarySearchTree => "Binary Search Tree",
		}
	}

	/// Returns whether structures of this kind are made of binary nodes.
	pub const fn is_tree(&self) -> bool {
		matches!(self, Self::BinaryTree | Self::BinarySearchTree)
	}
}

impl Display for StructureKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for StructureKind {
	type Err = ParseKindError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.name() == name)
			.ok_or_else(|| ParseKindError { name: name.to_owned() })
	}
}

/// A name that matches no known [structure kind] or [value kind].
///
/// [structure kind]: StructureKind
/// [value kind]: crate::ValueKind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown kind '{name}'")]
pub struct ParseKindError {
	pub name: String,
}

/// Any one [structure], for callers that choose the kind at runtime.
///
/// [structure]: Structure
#[derive(Debug)]
pub enum AnyStructure<T> {
	Stack(Stack<T>),
	Queue(Queue<T>),
	SinglyLinkedList(SinglyLinkedList<T>),
	CircularLinkedList(CircularLinkedList<T>),
	DoublyLinkedList(DoublyLinkedList<T>),
	BinaryTree(BinaryTree<T>),
	BinarySearchTree(BinarySearchTree<T>),
}

/// Evaluates `$body` with `$structure` bound to whichever structure `$any` holds.
macro_rules! dispatch {
	($any:expr, $structure:ident => $body:expr) => {
		match $any {
			AnyStructure::Stack($structure) => $body,
			AnyStructure::Queue($structure) => $body,
			AnyStructure::SinglyLinkedList($structure) => $body,
			AnyStructure::CircularLinkedList($structure) => $body,
			AnyStructure::DoublyLinkedList($structure) => $body,
			AnyStructure::BinaryTree($structure) => $body,
			AnyStructure::BinarySearchTree($structure) => $body,
		}
	};
}

impl<T> AnyStructure<T> {
	/// Creates a new, empty structure of the given `kind`.
	pub fn new(kind: StructureKind) -> Self {
		match kind {
			StructureKind::Stack => Self::Stack(Stack::new()),
			StructureKind::Queue => Self::Queue(Queue::new()),
			StructureKind::SinglyLinkedList => Self::SinglyLinkedList(SinglyLinkedList::new()),
			StructureKind::CircularLinkedList => Self::CircularLinkedList(CircularLinkedList::new()),
			StructureKind::DoublyLinkedList => Self::DoublyLinkedList(DoublyLinkedList::new()),
			StructureKind::BinaryTree => Self::BinaryTree(BinaryTree::new()),
			StructureKind::BinarySearchTree => Self::BinarySearchTree(BinarySearchTree::new()),
		}
	}

	/// Returns the [kind] of the wrapped structure.
	///
	/// [kind]: StructureKind
	pub const fn kind(&self) -> StructureKind {
		match self {
			Self::Stack(_) => StructureKind::Stack,
			Self::Queue(_) => StructureKind::Queue,
			Self::SinglyLinkedList(_) => StructureKind::SinglyLinkedList,
			Self::CircularLinkedList(_) => StructureKind::CircularLinkedList,
			Self::DoublyLinkedList(_) => StructureKind::DoublyLinkedList,
			Self::BinaryTree(_) => StructureKind::BinaryTree,
			Self::BinarySearchTree(_) => StructureKind::BinarySearchTree,
		}
	}

	/// Returns the number of nodes in the wrapped structure.
	pub fn len(&self) -> usize {
		dispatch!(self, structure => Structure::len(structure))
	}

	/// Returns whether the wrapped structure has no nodes.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the tree's height, or [`None`] if this structure is not a tree.
	pub const fn height(&self) -> Option<usize> {
		match self {
			Self::BinaryTree(tree) => Some(tree.height()),
			Self::BinarySearchTree(tree) => Some(tree.height()),

			_ => None,
		}
	}

	/// Returns a [view] of every node in structural order.
	///
	/// [view]: NodeView
	pub fn nodes(&self) -> Vec<NodeView<'_, T>> {
		dispatch!(self, structure => Structure::nodes(structure))
	}

	/// Returns the tree's nodes grouped by depth, or [`None`] if this structure is not a tree.
	pub fn levels(&self) -> Option<Levels<'_, T>> {
		match self {
			Self::BinaryTree(tree) => Some(tree.levels()),
			Self::BinarySearchTree(tree) => Some(tree.levels()),

			_ => None,
		}
	}

	/// Releases every node, leaving the structure empty but of the same kind.
	pub fn clear(&mut self) {
		dispatch!(self, structure => Structure::clear(structure))
	}
}

macro_rules! impl_from {
	($($variant:ident),+) => {
		$(
			impl<T> From<$variant<T>> for AnyStructure<T> {
				fn from(structure: $variant<T>) -> Self {
					Self::$variant(structure)
				}
			}
		)+
	};
}

impl_from!(
	Stack,
	Queue,
	SinglyLinkedList,
	CircularLinkedList,
	DoublyLinkedList,
	BinaryTree,
	BinarySearchTree
);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Side;

	#[test]
	fn names_round_trip() {
		for kind in StructureKind::ALL {
			assert_eq!(kind.name().parse(), Ok(kind));
		}

		assert_eq!(
			"Linked List".parse::<StructureKind>(),
			Err(ParseKindError {
				name: "Linked List".to_owned()
			})
		);
	}

	#[test]
	fn new_structures_are_empty_and_of_the_right_kind() {
		for kind in StructureKind::ALL {
			let structure: AnyStructure<i32> = AnyStructure::new(kind);

			assert_eq!(structure.kind(), kind);
			assert!(structure.is_empty());
			assert!(structure.nodes().is_empty());
			assert_eq!(structure.height().is_some(), kind.is_tree());
			assert_eq!(structure.levels().is_some(), kind.is_tree());
		}
	}

	#[test]
	fn dispatches_to_the_wrapped_structure() {
		let mut tree = BinaryTree::new();
		tree.insert(None, 1, Side::Left).unwrap();
		tree.insert(Some(&1), 2, Side::Right).unwrap();

		let mut structure = AnyStructure::from(tree);
		assert_eq!(structure.len(), 2);
		assert_eq!(structure.height(), Some(2));

		structure.clear();
		assert!(structure.is_empty());
		assert_eq!(structure.height(), Some(0));
		assert_eq!(structure.kind(), StructureKind::BinaryTree);

		let stack: Stack<_> = [1, 2, 3].into_iter().collect();
		let structure = AnyStructure::from(stack);
		assert_eq!(structure.height(), None);
		assert_eq!(structure.nodes().len(), 3);
	}
}
