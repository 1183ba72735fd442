// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{
	cmp::Ordering,
	fmt::{self, Display, Formatter},
	str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ParseKindError;

/// Inputs which [`ValueKind::Bool`] parses as `true`, compared case-insensitively.
const TRUTHY: [&str; 5] = ["true", "yes", "1", "t", "y"];

/// A dynamically typed value, as entered by a user.
///
/// Integers and floats compare with each other numerically, so `Int(1) == Float(1.0)`. Values of
/// any other two different kinds are neither equal nor ordered: [`partial_cmp`] returns [`None`].
///
/// [`partial_cmp`]: PartialOrd::partial_cmp
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value", rename_all = "lowercase"))]
pub enum Value {
	Int(i64),
	Float(#[cfg_attr(feature = "serde", serde(serialize_with = "serialize_finite"))] f64),
	Str(String),
	Bool(bool),
}

impl Value {
	/// Returns the [kind] of this value.
	///
	/// [kind]: ValueKind
	pub const fn kind(&self) -> ValueKind {
		match self {
			Self::Int(_) => ValueKind::Int,
			Self::Float(_) => ValueKind::Float,
			Self::Str(_) => ValueKind::Str,
			Self::Bool(_) => ValueKind::Bool,
		}
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		self.partial_cmp(other) == Some(Ordering::Equal)
	}
}

impl PartialOrd for Value {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match (self, other) {
			(Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
			(Self::Float(a), Self::Float(b)) => a.partial_cmp(b),

			(Self::Int(a), Self::Float(b)) => compare_int_float(*a, *b),
			(Self::Float(a), Self::Int(b)) => compare_int_float(*b, *a).map(Ordering::reverse),

			(Self::Str(a), Self::Str(b)) => Some(a.cmp(b)),
			(Self::Bool(a), Self::Bool(b)) => Some(a.cmp(b)),

			_ => None,
		}
	}
}

/// Compares an integer with a float exactly, without rounding the integer to the nearest float.
fn compare_int_float(int: i64, float: f64) -> Option<Ordering> {
	// 2^63: every i64 is below it, and -2^63 is i64::MIN.
	const BOUND: f64 = 9_223_372_036_854_775_808.0;

	if float.is_nan() {
		return None;
	}
	if float >= BOUND {
		return Some(Ordering::Less);
	}
	if float < -BOUND {
		return Some(Ordering::Greater);
	}

	// In range, so the truncated float converts to an i64 exactly.
	let whole = float.trunc();

	match int.cmp(&(whole as i64)) {
		Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)),
		ordering => Some(ordering),
	}
}

/// Serializes a float, refusing NaN and infinities, which JSON cannot represent.
#[cfg(feature = "serde")]
fn serialize_finite<S: serde::Serializer>(float: &f64, serializer: S) -> Result<S::Ok, S::Error> {
	if !float.is_finite() {
		return Err(serde::ser::Error::custom(format_args!("cannot store the non-finite float {float}")));
	}

	serializer.serialize_f64(*float)
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int(value) => write!(f, "{value}"),
			// Debug keeps the trailing `.0` on whole floats.
			Self::Float(value) => write!(f, "{value:?}"),
			Self::Str(value) => f.write_str(value),
			Self::Bool(value) => write!(f, "{value}"),
		}
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Str(value.to_owned())
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

/// The kind of [value] a structure is filled with, chosen before any values are entered.
///
/// [value]: Value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueKind {
	Int,
	Float,
	Str,
	Bool,
}

impl ValueKind {
	/// Every kind of value.
	pub const ALL: [Self; 4] = [Self::Int, Self::Float, Self::Str, Self::Bool];

	/// Returns the lowercase name of this kind, such as `int`.
	#[inline]
	pub const fn name(&self) -> &'static str {
		match self {
			Self::Int => "int",
			Self::Float => "float",
			Self::Str => "str",
			Self::Bool => "bool",
		}
	}

	/// Converts user `input` to a [value] of this kind.
	///
	/// - Integers and floats are parsed from the input with surrounding whitespace trimmed. Floats
	///   must be finite: `nan` and `inf` are refused.
	/// - Booleans are `true` if the input is one of `true`, `yes`, `1`, `t` or `y`, ignoring case,
	///   and `false` otherwise. This never fails.
	/// - Strings are kept as they are.
	///
	/// # Errors
	/// Returns a [`ParseValueError`] if the input is not a valid integer or finite float.
	///
	/// [value]: Value
	pub fn parse(&self, input: &str) -> Result<Value, ParseValueError> {
		let error = || ParseValueError {
			input: input.to_owned(),
			kind: *self,
		};

		match self {
			Self::Int => input.trim().parse().map(Value::Int).map_err(|_| error()),
			Self::Float => match input.trim().parse::<f64>() {
				Ok(float) if float.is_finite() => Ok(Value::Float(float)),
				_ => Err(error()),
			},

			Self::Str => Ok(Value::Str(input.to_owned())),
			Self::Bool => {
				let lowercase = input.to_lowercase();

				Ok(Value::Bool(TRUTHY.contains(&lowercase.as_str())))
			},
		}
	}
}

impl Display for ValueKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for ValueKind {
	type Err = ParseKindError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.name() == name)
			.ok_or_else(|| ParseKindError { name: name.to_owned() })
	}
}

/// User input that could not be converted to the requested [kind] of [value].
///
/// [kind]: ValueKind
/// [value]: Value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert '{input}' to {kind}")]
pub struct ParseValueError {
	pub input: String,
	pub kind: ValueKind,
}
