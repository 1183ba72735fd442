// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Versioned [snapshots] of whole structures, and a JSON file codec for them.
//!
//! A snapshot stores a structure's [kind] and its node graph, never its cached counters: lengths
//! and heights are recomputed when it is [restored]. Linear structures are stored as their values
//! in structural order. Trees are stored as a flat list of nodes in level order, the root first,
//! each node naming its children by index.
//!
//! [snapshots]: Snapshot
//! [kind]: StructureKind
//! [restored]: Snapshot::restore

use std::{
	collections::HashMap,
	io::{self, Read, Write},
	mem,
};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{
	tree::{Graph, Slot},
	AnyStructure,
	BinarySearchTree,
	BinaryTree,
	Links,
	Side,
	StructureKind,
};

/// The snapshot format version written by this crate, and the only one it reads.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The conventional extension of snapshot files.
pub const FILE_EXTENSION: &str = "dsv";

/// A structure's kind and node graph, ready to be serialized.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Snapshot<T> {
	pub version: u32,
	pub kind: StructureKind,
	pub graph: Encoding<T>,
}

/// How a structure's nodes are encoded in a [snapshot].
///
/// [snapshot]: Snapshot
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Encoding<T> {
	/// The values of a linear structure, from its entry point onwards.
	Linear { values: Vec<T> },
	/// The nodes of a tree in level order; the root, if any, is at index `0`.
	Binary { nodes: Vec<EncodedNode<T>> },
}

/// A tree node in an [`Encoding::Binary`] graph.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EncodedNode<T> {
	pub value: T,

	pub left: Option<usize>,
	pub right: Option<usize>,
}

impl<T> EncodedNode<T> {
	fn children(&self) -> impl Iterator<Item = usize> {
		self.left.into_iter().chain(self.right)
	}
}

/// A [snapshot] that cannot be read or restored.
///
/// [snapshot]: Snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
	#[error("unsupported snapshot version {found} (expected {SNAPSHOT_VERSION})")]
	UnsupportedVersion { found: u32 },

	#[error("a {kind} cannot be restored from a {shape} graph")]
	ShapeMismatch { kind: StructureKind, shape: &'static str },

	#[error("node {parent} links to node {child}, but there are only {len} nodes")]
	ChildOutOfRange { parent: usize, child: usize, len: usize },

	#[error("node {node} has more than one parent")]
	MultipleParents { node: usize },

	#[error("node {node} is not reachable from the root")]
	Unreachable { node: usize },

	#[error("node {node} breaks the binary search tree ordering")]
	Unordered { node: usize },

	#[error("malformed snapshot file: {0}")]
	Json(#[from] serde_json::Error),

	#[error("failed to write snapshot file: {0}")]
	Io(#[from] io::Error),
}

impl<T> Encoding<T> {
	const fn shape(&self) -> &'static str {
		match self {
			Self::Linear { .. } => "linear",
			Self::Binary { .. } => "binary",
		}
	}

	fn map<U>(self, mut f: impl FnMut(T) -> U) -> Encoding<U> {
		match self {
			Self::Linear { values } => Encoding::Linear {
				values: values.into_iter().map(f).collect(),
			},

			Self::Binary { nodes } => Encoding::Binary {
				nodes: nodes
					.into_iter()
					.map(|node| EncodedNode {
						value: f(node.value),

						left: node.left,
						right: node.right,
					})
					.collect(),
			},
		}
	}
}

impl<'s, T> Snapshot<&'s T> {
	/// Takes a snapshot of `structure`, borrowing its values.
	pub fn capture(structure: &'s AnyStructure<T>) -> Self {
		let kind = structure.kind();
		let views = structure.nodes();

		let graph = if kind.is_tree() {
			let indices: HashMap<_, _> = views.iter().enumerate().map(|(index, view)| (view.address, index)).collect();

			let nodes = views
				.iter()
				.map(|view| {
					let (left, right) = match view.links {
						Links::Binary { left, right } => (left, right),
						_ => (None, None),
					};

					EncodedNode {
						value: view.value,

						left: left.map(|left| indices[&left]),
						right: right.map(|right| indices[&right]),
					}
				})
				.collect();

			Encoding::Binary { nodes }
		} else {
			Encoding::Linear {
				values: views.iter().map(|view| view.value).collect(),
			}
		};

		Self {
			version: SNAPSHOT_VERSION,
			kind,
			graph,
		}
	}

	/// Clones the borrowed values, producing a snapshot which can be [restored].
	///
	/// [restored]: Snapshot::restore
	pub fn cloned(self) -> Snapshot<T>
	where
		T: Clone,
	{
		Snapshot {
			version: self.version,
			kind: self.kind,
			graph: self.graph.map(Clone::clone),
		}
	}
}

impl<T> Snapshot<T> {
	/// Rebuilds the structure this snapshot was taken of.
	///
	/// Lengths and heights are recomputed from the graph.
	///
	/// # Errors
	/// - [`SnapshotError::UnsupportedVersion`] if the snapshot was written by another format
	///   version.
	/// - [`SnapshotError::ShapeMismatch`] if a tree kind has a linear graph or vice versa.
	/// - [`SnapshotError::ChildOutOfRange`], [`SnapshotError::MultipleParents`] or
	///   [`SnapshotError::Unreachable`] if a tree graph is not a single tree rooted at node `0`.
	/// - [`SnapshotError::Unordered`] if a binary search tree's values are out of order.
	pub fn restore(self) -> Result<AnyStructure<T>, SnapshotError>
	where
		T: PartialOrd,
	{
		if self.version != SNAPSHOT_VERSION {
			debug!(version = self.version, "rejected snapshot version");

			return Err(SnapshotError::UnsupportedVersion { found: self.version });
		}

		let kind = self.kind;
		let shape = self.graph.shape();

		let structure = match (kind, self.graph) {
			(StructureKind::Stack, Encoding::Linear { values }) => AnyStructure::Stack(values.into_iter().collect()),
			(StructureKind::Queue, Encoding::Linear { values }) => AnyStructure::Queue(values.into_iter().collect()),
			(StructureKind::SinglyLinkedList, Encoding::Linear { values }) => {
				AnyStructure::SinglyLinkedList(values.into_iter().collect())
			},
			(StructureKind::CircularLinkedList, Encoding::Linear { values }) => {
				AnyStructure::CircularLinkedList(values.into_iter().collect())
			},
			(StructureKind::DoublyLinkedList, Encoding::Linear { values }) => {
				AnyStructure::DoublyLinkedList(values.into_iter().collect())
			},

			(StructureKind::BinaryTree, Encoding::Binary { nodes }) => {
				validate_tree(&nodes)?;

				AnyStructure::BinaryTree(BinaryTree::from_graph(build_graph(nodes)))
			},
			(StructureKind::BinarySearchTree, Encoding::Binary { nodes }) => {
				validate_tree(&nodes)?;
				validate_order(&nodes)?;

				AnyStructure::BinarySearchTree(BinarySearchTree::from_graph(build_graph(nodes)))
			},

			(kind, _) => {
				debug!(%kind, shape, "rejected snapshot graph shape");

				return Err(SnapshotError::ShapeMismatch { kind, shape });
			},
		};

		debug!(%kind, len = structure.len(), "restored snapshot");

		Ok(structure)
	}
}

/// Checks that `nodes` form exactly one tree rooted at index `0`.
fn validate_tree<T>(nodes: &[EncodedNode<T>]) -> Result<(), SnapshotError> {
	let len = nodes.len();

	// The root counts as parented so that a link back to it is caught.
	let mut parented = vec![false; len];
	if let Some(root) = parented.first_mut() {
		*root = true;
	}

	for (parent, node) in nodes.iter().enumerate() {
		for child in node.children() {
			if child >= len {
				debug!(parent, child, len, "rejected out-of-range child index");

				return Err(SnapshotError::ChildOutOfRange { parent, child, len });
			}

			if mem::replace(&mut parented[child], true) {
				debug!(node = child, "rejected node with more than one parent");

				return Err(SnapshotError::MultipleParents { node: child });
			}
		}
	}

	// Every node now has exactly one parent, so a cycle can only exist apart from the root.
	let mut reached = vec![false; len];
	let mut stack: Vec<usize> = if len == 0 { Vec::new() } else { vec![0] };

	while let Some(index) = stack.pop() {
		reached[index] = true;
		stack.extend(nodes[index].children());
	}

	match reached.iter().position(|reached| !reached) {
		Some(node) => {
			debug!(node, "rejected unreachable node");

			Err(SnapshotError::Unreachable { node })
		},

		None => Ok(()),
	}
}

/// Checks that every left subtree is strictly less than its parent and every right subtree is
/// greater than or equal to it.
///
/// `nodes` must already have passed [`validate_tree`].
fn validate_order<T: PartialOrd>(nodes: &[EncodedNode<T>]) -> Result<(), SnapshotError> {
	if nodes.is_empty() {
		return Ok(());
	}

	// (node, inclusive lower bound, exclusive upper bound)
	let mut stack: Vec<(usize, Option<&T>, Option<&T>)> = vec![(0, None, None)];

	while let Some((index, lower, upper)) = stack.pop() {
		let node = &nodes[index];

		let above_lower = lower.map_or(true, |lower| *lower <= node.value);
		let below_upper = upper.map_or(true, |upper| node.value < *upper);

		if !(above_lower && below_upper) {
			debug!(node = index, "rejected out-of-order search tree node");

			return Err(SnapshotError::Unordered { node: index });
		}

		stack.extend(node.left.map(|left| (left, lower, Some(&node.value))));
		stack.extend(node.right.map(|right| (right, Some(&node.value), upper)));
	}

	Ok(())
}

/// Allocates the nodes of an already validated tree graph.
fn build_graph<T>(nodes: Vec<EncodedNode<T>>) -> Graph<T> {
	let mut graph = Graph::with_capacity(nodes.len());

	let links: Vec<_> = nodes.iter().map(|node| (node.left, node.right)).collect();
	let mut values: Vec<Option<T>> = nodes.into_iter().map(|node| Some(node.value)).collect();

	let mut stack = if values.is_empty() {
		Vec::new()
	} else {
		vec![(0, Slot::Root)]
	};

	while let Some((index, slot)) = stack.pop() {
		let value = values[index].take().expect("every node has exactly one parent");
		let token = graph.attach(slot, value);

		let (left, right) = links[index];
		stack.extend(right.map(|right| (right, Slot::Child(token, Side::Right))));
		stack.extend(left.map(|left| (left, Slot::Child(token, Side::Left))));
	}

	graph
}

/// Writes a [snapshot] of `structure` to `writer` as JSON.
///
/// The snapshot is fully encoded before anything is written, so nothing is written if encoding
/// fails.
///
/// # Errors
/// - [`SnapshotError::Json`] if a value cannot be encoded, such as a [non-finite float].
/// - [`SnapshotError::Io`] if writing fails.
///
/// [snapshot]: Snapshot
/// [non-finite float]: crate::Value::Float
pub fn save<T: Serialize, W: Write>(mut writer: W, structure: &AnyStructure<T>) -> Result<(), SnapshotError> {
	let snapshot = Snapshot::capture(structure);
	let encoded = serde_json::to_vec_pretty(&snapshot).map_err(|error| {
		debug!(%error, "failed to encode snapshot");

		error
	})?;
	writer.write_all(&encoded)?;

	debug!(kind = %snapshot.kind, len = structure.len(), "saved snapshot");

	Ok(())
}

/// Reads a JSON [snapshot] from `reader` and [restores] it.
///
/// [snapshot]: Snapshot
/// [restores]: Snapshot::restore
pub fn load<T: DeserializeOwned + PartialOrd, R: Read>(reader: R) -> Result<AnyStructure<T>, SnapshotError> {
	let snapshot: Snapshot<T> = serde_json::from_reader(reader)?;

	snapshot.restore()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Stack;

	fn node(value: i32, left: Option<usize>, right: Option<usize>) -> EncodedNode<i32> {
		EncodedNode { value, left, right }
	}

	#[test]
	fn trees_are_encoded_in_level_order() {
		let tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
		let structure = AnyStructure::from(tree);

		let snapshot = Snapshot::capture(&structure).cloned();
		assert_eq!(
			snapshot.graph,
			Encoding::Binary {
				nodes: vec![node(2, Some(1), Some(2)), node(1, None, None), node(3, None, None)],
			}
		);
	}

	#[test]
	fn linear_structures_are_encoded_from_their_entry_point() {
		let mut stack = Stack::new();
		stack.push(1);
		stack.push(2);

		let structure = AnyStructure::from(stack);
		let snapshot = Snapshot::capture(&structure);

		assert_eq!(snapshot.kind, StructureKind::Stack);
		assert_eq!(snapshot.graph, Encoding::Linear { values: vec![&2, &1] });
	}

	#[test]
	fn tree_validation() {
		assert!(validate_tree::<i32>(&[]).is_ok());

		assert!(matches!(
			validate_tree(&[node(1, Some(3), None)]),
			Err(SnapshotError::ChildOutOfRange { parent: 0, child: 3, len: 1 })
		));
		assert!(matches!(
			validate_tree(&[node(1, Some(1), None), node(2, Some(0), None)]),
			Err(SnapshotError::MultipleParents { node: 0 })
		));
		assert!(matches!(
			validate_tree(&[node(1, Some(1), Some(1)), node(2, None, None)]),
			Err(SnapshotError::MultipleParents { node: 1 })
		));
		assert!(matches!(
			validate_tree(&[node(1, None, None), node(2, Some(2), None), node(3, Some(1), None)]),
			Err(SnapshotError::Unreachable { node: 1 })
		));
	}

	#[test]
	fn order_validation_is_strict_on_the_left() {
		// A value equal to its parent belongs on the right.
		assert!(validate_order(&[node(5, None, Some(1)), node(5, None, None)]).is_ok());
		assert!(matches!(
			validate_order(&[node(5, Some(1), None), node(5, None, None)]),
			Err(SnapshotError::Unordered { node: 1 })
		));

		// 7 is right of 5, but also in the left subtree of 6.
		assert!(matches!(
			validate_order(&[node(6, Some(1), None), node(5, None, Some(2)), node(7, None, None)]),
			Err(SnapshotError::Unordered { node: 2 })
		));
	}

	#[test]
	fn restore_rejects_other_versions_and_shapes() {
		let snapshot = Snapshot {
			version: 2,
			kind: StructureKind::Stack,
			graph: Encoding::<i32>::Linear { values: vec![] },
		};
		assert!(matches!(
			snapshot.restore(),
			Err(SnapshotError::UnsupportedVersion { found: 2 })
		));

		let snapshot = Snapshot {
			version: SNAPSHOT_VERSION,
			kind: StructureKind::BinaryTree,
			graph: Encoding::<i32>::Linear { values: vec![1] },
		};
		assert!(matches!(
			snapshot.restore(),
			Err(SnapshotError::ShapeMismatch {
				kind: StructureKind::BinaryTree,
				shape: "linear"
			})
		));
	}

	#[test]
	fn restored_trees_recompute_their_counters() {
		let snapshot = Snapshot {
			version: SNAPSHOT_VERSION,
			kind: StructureKind::BinaryTree,
			graph: Encoding::Binary {
				nodes: vec![node(1, None, Some(1)), node(2, Some(2), None), node(3, None, None)],
			},
		};

		let structure = snapshot.restore().unwrap();
		assert_eq!(structure.len(), 3);
		assert_eq!(structure.height(), Some(3));
	}
}
