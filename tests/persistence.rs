// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![cfg(feature = "serde")]

use arena_structures::{
	snapshot::{self, Snapshot, SnapshotError, SNAPSHOT_VERSION},
	Address,
	AnyStructure,
	BinarySearchTree,
	BinaryTree,
	CircularLinkedList,
	DoublyLinkedList,
	Links,
	NodeView,
	Queue,
	Side,
	SinglyLinkedList,
	Stack,
	StructureKind,
	Value,
	ValueKind,
};

/// Every kind of structure, each holding a few values.
fn samples() -> Vec<AnyStructure<Value>> {
	let values = || [Value::Int(3), Value::from("b"), Value::Float(1.5), Value::Bool(true)];

	let mut tree = BinaryTree::new();
	tree.insert(None, Value::Int(1), Side::Left).unwrap();
	tree.insert(Some(&Value::Int(1)), Value::Int(2), Side::Right).unwrap();
	tree.insert(Some(&Value::Int(2)), Value::from("leaf"), Side::Left).unwrap();
	tree.insert(Some(&Value::Int(1)), Value::Bool(false), Side::Left).unwrap();

	let search_tree: BinarySearchTree<_> = [8, 3, 10, 1, 6, 14, 4, 7, 13, 8].into_iter().map(Value::Int).collect();

	vec![
		AnyStructure::from(values().into_iter().collect::<Stack<_>>()),
		AnyStructure::from(values().into_iter().collect::<Queue<_>>()),
		AnyStructure::from(values().into_iter().collect::<SinglyLinkedList<_>>()),
		AnyStructure::from(values().into_iter().collect::<CircularLinkedList<_>>()),
		AnyStructure::from(values().into_iter().collect::<DoublyLinkedList<_>>()),
		AnyStructure::from(tree),
		AnyStructure::from(search_tree),
	]
}

/// The values and link shape of a structure's nodes, with addresses replaced by node indices.
fn shape(nodes: &[NodeView<'_, Value>]) -> Vec<(Value, Vec<Option<usize>>)> {
	let index = |address: Address| nodes.iter().position(|view| view.address == address);

	nodes
		.iter()
		.map(|view| {
			let links = match view.links {
				Links::Singly { next } => vec![next],
				Links::Doubly { prev, next } => vec![prev, next],
				Links::Binary { left, right } => vec![left, right],
			};

			(
				view.value.clone(),
				links.into_iter().map(|link| link.and_then(index)).collect(),
			)
		})
		.collect()
}

#[test]
fn every_kind_survives_a_file_round_trip() {
	for structure in samples() {
		let mut file = Vec::new();
		snapshot::save(&mut file, &structure).unwrap();

		let restored: AnyStructure<Value> = snapshot::load(file.as_slice()).unwrap();

		assert_eq!(restored.kind(), structure.kind());
		assert_eq!(restored.len(), structure.len());
		assert_eq!(restored.height(), structure.height());
		assert_eq!(shape(&restored.nodes()), shape(&structure.nodes()), "{}", structure.kind());
	}
}

#[test]
fn empty_structures_round_trip() {
	for kind in StructureKind::ALL {
		let structure: AnyStructure<i32> = AnyStructure::new(kind);

		let restored = Snapshot::capture(&structure).cloned().restore().unwrap();
		assert_eq!(restored.kind(), kind);
		assert!(restored.is_empty());
	}
}

#[test]
fn restored_structures_stay_usable() {
	let tree: BinarySearchTree<_> = [5, 2, 9].into_iter().collect();
	let structure = AnyStructure::from(tree);

	let AnyStructure::BinarySearchTree(mut tree) = Snapshot::capture(&structure).cloned().restore().unwrap() else {
		panic!("expected a binary search tree");
	};

	tree.insert(1);
	assert_eq!(tree.delete(&5), Ok(5));
	assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 9]);
	assert_eq!(tree.height(), 3);
}

#[test]
fn files_use_readable_kind_tags() {
	let structure = AnyStructure::from([1, 2].into_iter().collect::<CircularLinkedList<_>>());

	let mut file = Vec::new();
	snapshot::save(&mut file, &structure).unwrap();
	let json: serde_json::Value = serde_json::from_slice(&file).unwrap();

	assert_eq!(json["version"], SNAPSHOT_VERSION);
	assert_eq!(json["kind"], "Circular Linked List");
	assert_eq!(json["graph"]["shape"], "linear");
	assert_eq!(json["graph"]["values"], serde_json::json!([1, 2]));
	assert_eq!(snapshot::FILE_EXTENSION, "dsv");
}

#[test]
fn stored_counters_are_not_trusted() {
	// Only the graph is read; a stray length is ignored.
	let file = r#"{
		"version": 1,
		"kind": "Binary Tree",
		"len": 100,
		"graph": { "shape": "binary", "nodes": [
			{ "value": 1, "left": 1, "right": null },
			{ "value": 2, "left": null, "right": null }
		] }
	}"#;

	let restored: AnyStructure<i32> = snapshot::load(file.as_bytes()).unwrap();
	assert_eq!(restored.len(), 2);
	assert_eq!(restored.height(), Some(2));
}

#[test]
fn non_finite_floats_are_never_written() {
	for float in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
		let mut stack = Stack::new();
		stack.push(Value::Float(1.0));
		stack.push(Value::Float(float));
		let structure = AnyStructure::from(stack);

		let mut file = Vec::new();
		assert!(matches!(snapshot::save(&mut file, &structure), Err(SnapshotError::Json(_))));
		assert!(file.is_empty(), "{float}");
	}
}

#[test]
fn parsed_floats_survive_a_file_round_trip() {
	for input in ["nan", "inf", "-inf"] {
		assert!(ValueKind::Float.parse(input).is_err(), "{input}");
	}

	let mut tree = BinarySearchTree::new();
	for input in ["2.5", "-1e300", "0", "1e-300"] {
		tree.insert(ValueKind::Float.parse(input).unwrap());
	}
	let structure = AnyStructure::from(tree);

	let mut file = Vec::new();
	snapshot::save(&mut file, &structure).unwrap();
	let restored: AnyStructure<Value> = snapshot::load(file.as_slice()).unwrap();

	assert_eq!(shape(&restored.nodes()), shape(&structure.nodes()));
}

#[test]
fn malformed_files_are_rejected() {
	let load = |file: &str| snapshot::load::<i32, _>(file.as_bytes());

	assert!(matches!(load("not json"), Err(SnapshotError::Json(_))));
	assert!(matches!(
		load(r#"{ "version": 1, "kind": "Heap", "graph": { "shape": "linear", "values": [] } }"#),
		Err(SnapshotError::Json(_))
	));
	assert!(matches!(
		load(r#"{ "version": 0, "kind": "Stack", "graph": { "shape": "linear", "values": [] } }"#),
		Err(SnapshotError::UnsupportedVersion { found: 0 })
	));
	assert!(matches!(
		load(r#"{ "version": 1, "kind": "Queue", "graph": { "shape": "binary", "nodes": [] } }"#),
		Err(SnapshotError::ShapeMismatch { kind: StructureKind::Queue, .. })
	));
	assert!(matches!(
		load(
			r#"{ "version": 1, "kind": "Binary Tree", "graph": { "shape": "binary", "nodes": [
				{ "value": 1, "left": 0, "right": null }
			] } }"#
		),
		Err(SnapshotError::MultipleParents { node: 0 })
	));
	assert!(matches!(
		load(
			r#"{ "version": 1, "kind": "Binary Search Tree", "graph": { "shape": "binary", "nodes": [
				{ "value": 1, "left": 1, "right": null },
				{ "value": 2, "left": null, "right": null }
			] } }"#
		),
		Err(SnapshotError::Unordered { node: 1 })
	));
}
