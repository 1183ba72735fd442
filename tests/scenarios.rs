// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use arena_structures::{
	AnyStructure,
	BinarySearchTree,
	BinaryTree,
	CircularLinkedList,
	DoublyLinkedList,
	Links,
	Queue,
	Side,
	SinglyLinkedList,
	Stack,
	Structure,
	StructureError,
	StructureKind,
	Value,
	ValueKind,
};

fn values<T: Copy>(structure: &impl Structure<Item = T>) -> Vec<T> {
	structure.nodes().iter().map(|view| *view.value).collect()
}

#[test]
fn binary_tree_insert_and_refused_delete() {
	let mut tree = BinaryTree::new();

	tree.insert(None, 5, Side::Left).unwrap();
	assert_eq!(tree.root(), Some(&5));
	assert_eq!((tree.len(), tree.height()), (1, 1));

	tree.insert(Some(&5), 3, Side::Left).unwrap();
	tree.insert(Some(&5), 7, Side::Right).unwrap();
	assert_eq!((tree.len(), tree.height()), (3, 2));

	let before: Vec<_> = tree.nodes().iter().map(|view| (view.address, *view.value, view.links)).collect();

	assert_eq!(tree.delete(&5), Err(StructureError::UnsupportedDeletion));

	let after: Vec<_> = tree.nodes().iter().map(|view| (view.address, *view.value, view.links)).collect();
	assert_eq!(before, after);
	assert_eq!((tree.len(), tree.height()), (3, 2));
}

#[test]
fn search_tree_two_child_delete() {
	let mut tree = BinarySearchTree::new();
	for value in [10, 5, 15, 3, 7] {
		tree.insert(value);
	}

	assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [3, 5, 7, 10, 15]);

	let levels = tree.levels();
	let five = levels[&1][0].address;

	assert_eq!(tree.delete(&5), Ok(5));
	assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [3, 7, 10, 15]);

	let levels = tree.levels();
	let subtree_root = levels[&1][0];
	assert_eq!(subtree_root.address, five);
	assert_eq!(*subtree_root.value, 7);
	assert!(matches!(subtree_root.links, Links::Binary { left: Some(_), right: None }));
}

#[test]
fn circular_search_and_rotation() {
	let mut list = CircularLinkedList::new();
	for value in [1, 2, 3] {
		list.insert_at_end(value);
	}

	assert_eq!(list.search(&3), Some(2));

	list.rotate_left();
	assert_eq!(values(&list), [2, 3, 1]);

	let nodes = list.nodes();
	assert_eq!(nodes[2].links, Links::Singly { next: Some(nodes[0].address) });
}

#[test]
fn doubly_positional_operations() {
	let mut list: DoublyLinkedList<_> = [1, 2, 4].into_iter().collect();

	list.insert_at_position(2, 3).unwrap();
	list.insert_at_position(4, 5).unwrap();
	list.insert_at_position(0, 0).unwrap();
	assert_eq!(values(&list), [0, 1, 2, 3, 4, 5]);

	assert_eq!(
		list.insert_at_position(7, 9),
		Err(StructureError::PositionOutOfRange { position: 7, len: 6 })
	);

	assert_eq!(list.delete_at_position(3), Ok(3));
	assert_eq!(list.delete_at_position(0), Ok(0));
	assert_eq!(list.delete_at_position(3), Ok(5));
	assert_eq!(values(&list), [1, 2, 4]);
	assert_eq!(list.iter_rev().copied().collect::<Vec<_>>(), [4, 2, 1]);

	assert_eq!(
		list.delete_at_position(3),
		Err(StructureError::PositionOutOfRange { position: 3, len: 3 })
	);

	list.clear();
	assert_eq!(list.delete_at_position(0), Err(StructureError::EmptyStructure));
}

#[test]
fn empty_structures_refuse_removal() {
	assert_eq!(Stack::<i32>::new().pop(), Err(StructureError::EmptyStructure));
	assert_eq!(Queue::<i32>::new().dequeue(), Err(StructureError::EmptyStructure));
	assert_eq!(
		SinglyLinkedList::<i32>::new().delete_from_end(),
		Err(StructureError::EmptyStructure)
	);
	assert_eq!(
		CircularLinkedList::<i32>::new().delete_from_beginning(),
		Err(StructureError::EmptyStructure)
	);
	assert_eq!(BinarySearchTree::<i32>::new().delete(&1), Err(StructureError::NotFound));
}

#[test]
fn queue_front_and_rear_move_together() {
	let mut queue = Queue::new();

	queue.enqueue('a');
	assert_eq!(queue.peek(), queue.peek_rear());

	queue.enqueue('b');
	assert_eq!(queue.dequeue(), Ok('a'));
	assert_eq!(queue.dequeue(), Ok('b'));
	assert_eq!(queue.peek_rear(), Err(StructureError::EmptyStructure));

	queue.enqueue('c');
	assert_eq!(queue.peek(), Ok(&'c'));
	assert_eq!(queue.peek_rear(), Ok(&'c'));
}

#[test]
fn user_input_drives_a_search_tree() {
	let kind: ValueKind = "float".parse().unwrap();
	let mut structure: AnyStructure<Value> = AnyStructure::new("Binary Search Tree".parse().unwrap());

	let AnyStructure::BinarySearchTree(tree) = &mut structure else {
		panic!("expected a binary search tree");
	};

	for input in ["2.5", "1", " 4.0 "] {
		tree.insert(kind.parse(input).unwrap());
	}
	assert!(kind.parse("four").is_err());

	// Integers are found among floats because they compare numerically.
	assert!(tree.search(&Value::Int(4)));
	assert_eq!(tree.min(), Some(&Value::Float(1.0)));

	assert_eq!(structure.kind(), StructureKind::BinarySearchTree);
	assert_eq!(structure.len(), 3);
	assert_eq!(structure.height(), Some(2));
}

#[test]
fn node_addresses_are_unique_and_reused_slots_are_told_apart() {
	let mut stack = Stack::new();
	stack.push(1);
	let first = stack.nodes()[0].address;

	stack.pop().unwrap();
	stack.push(1);
	let second = stack.nodes()[0].address;

	assert_eq!(first.slot(), second.slot());
	assert_ne!(first, second);
	assert_ne!(first.to_string(), second.to_string());
	assert_eq!(first.to_string().len(), 18);
	assert!(first.to_string().starts_with("0x"));
}
