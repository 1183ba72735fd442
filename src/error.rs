// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::tree::Side;

/// The ways an operation on a structure can be refused.
///
/// Every error leaves the structure exactly as it was before the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum StructureError {
	/// The operation needs at least one node, but the structure is empty.
	#[error("the structure is empty")]
	EmptyStructure,

	/// No node holds the requested value.
	#[error("no node holds the requested value")]
	NotFound,

	/// A position was outside the range the operation accepts.
	#[error("position {position} is out of range for a structure of {len} nodes")]
	PositionOutOfRange { position: usize, len: usize },

	/// The requested child slot of a binary tree node already holds a child.
	#[error("the {side} child slot is already occupied")]
	SlotOccupied { side: Side },

	/// A binary tree node with two children cannot be deleted.
	///
	/// One of its children must be removed first.
	#[error("cannot delete a node with two children")]
	UnsupportedDeletion,
}

/// The result of an operation that can be refused with a [`StructureError`].
pub type StructureResult<T> = Result<T, StructureError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_messages() {
		assert_eq!(StructureError::EmptyStructure.to_string(), "the structure is empty");
		assert_eq!(
			StructureError::PositionOutOfRange { position: 7, len: 3 }.to_string(),
			"position 7 is out of range for a structure of 3 nodes"
		);
		assert_eq!(
			StructureError::SlotOccupied { side: Side::Left }.to_string(),
			"the left child slot is already occupied"
		);
	}
}
