// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: node identifiers, orientation, dataset records, subscriptions.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseOrientationError;
use crate::transform::SvgNumber;

/// Stable identifier of a node, assigned by the dataset owner.
///
/// The identifier addresses a node for every interaction and lifecycle callback
/// and doubles as the `id` of the rendered element. It is cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub struct NodeId(Arc<str>);

impl NodeId {
    /// Create an identifier from any string-like value.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0.to_string()
    }
}

/// Axis convention used to map layout coordinates onto the screen.
///
/// - [`Vertical`](Orientation::Vertical): top-down trees; layout `x` → screen `x`, layout `y` → screen `y`.
/// - [`Horizontal`](Orientation::Horizontal): left-right trees; the axes are swapped.
///
/// Swapping at this stage lets one layout pass serve both drawings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Root at the top, depth grows downwards.
    Vertical,
    /// Root at the left, depth grows rightwards.
    #[default]
    Horizontal,
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            other => Err(ParseOrientationError(other.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        })
    }
}

/// Opaque token for externally tracked state a node depends on.
///
/// Tokens are only compared for equality. Owners hand out a new token whenever
/// that state changes to force a node to recompute its transform.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Subscription(pub u64);

impl Subscription {
    /// Return the token that follows this one.
    #[must_use]
    pub const fn bump(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// A display attribute value attached to a node record.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttributeValue {
    /// Free text.
    String(String),
    /// Numeric value, printed without a trailing `.0`.
    Number(f64),
    /// Boolean flag.
    Bool(bool),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => SvgNumber(*n).fmt(f),
            Self::Bool(b) => b.fmt(f),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Attribute map of a node record; ordered so rendering is deterministic.
pub type Attributes = BTreeMap<String, AttributeValue>;

/// A node record as supplied by callers, before the dataset owner assigns identifiers.
///
/// This is the payload of the add-children interaction.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RawNodeDatum {
    /// Display name.
    pub name: String,
    /// Display attributes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Attributes,
    /// Child records.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<RawNodeDatum>,
}

impl RawNodeDatum {
    /// Create a record with a name and nothing else.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Bookkeeping the dataset owner attaches to every node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeMeta {
    /// Stable identifier.
    pub id: NodeId,
    /// Distance from the root (the root is `0`).
    pub depth: usize,
    /// Whether the owner currently hides this node's children.
    pub collapsed: bool,
}

/// A node record of the owner's dataset.
///
/// Controllers and renderers read it but never mutate it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TreeNodeDatum {
    /// Display name.
    pub name: String,
    /// Display attributes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Attributes,
    /// Child records; `None` marks a leaf.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Option<Vec<TreeNodeDatum>>,
    /// Owner bookkeeping.
    pub meta: NodeMeta,
}

impl TreeNodeDatum {
    /// Create a leaf record at depth `0`.
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            children: None,
            meta: NodeMeta {
                id: id.into(),
                depth: 0,
                collapsed: false,
            },
        }
    }

    /// Attach an attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Attach children, turning the record into a branch.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = Some(children);
        self
    }

    /// The stable identifier.
    pub fn id(&self) -> &NodeId {
        &self.meta.id
    }

    /// Whether the record carries a children list (even an empty one).
    pub fn is_branch(&self) -> bool {
        self.children.is_some()
    }
}
