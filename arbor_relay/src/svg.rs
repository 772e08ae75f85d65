// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG serialization of a node element.

use alloc::format;
use alloc::string::String;
use core::fmt;

use arbor_node::{NodeId, SvgNumber, Translation};

use crate::render::NodeContent;

/// Class of nodes whose record carries a children list.
pub const BRANCH_CLASS: &str = "arbor-node";
/// Class of nodes without a children list.
pub const LEAF_CLASS: &str = "arbor-leaf-node";

/// Escapes `&`, `<`, `>`, `"` and `'` for use in SVG text and attribute values.
#[derive(Copy, Clone, Debug)]
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(i) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..i])?;
            f.write_str(match rest.as_bytes()[i] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#39;",
            })?;
            rest = &rest[i + 1..];
        }
        f.write_str(rest)
    }
}

/// The `<g>` wrapper around a node's content.
#[derive(Copy, Clone, Debug)]
pub struct NodeElement<'a> {
    /// Stable identifier, written as the element `id`.
    pub id: &'a NodeId,
    /// Selects [`BRANCH_CLASS`] or [`LEAF_CLASS`].
    pub is_branch: bool,
    /// Extra class appended after the branch/leaf class.
    pub class_name: Option<&'a str>,
    /// Current translation.
    pub transform: Translation,
    /// Current opacity.
    pub opacity: f64,
}

impl NodeElement<'_> {
    /// The element as SVG markup, with `content` inside it.
    pub fn to_markup(&self, content: &NodeContent) -> String {
        let base = if self.is_branch { BRANCH_CLASS } else { LEAF_CLASS };
        let extra = match self.class_name.map(str::trim).filter(|c| !c.is_empty()) {
            Some(extra) => format!(" {}", Escaped(extra)),
            None => String::new(),
        };
        format!(
            "<g id=\"{}\" class=\"{base}{extra}\" transform=\"{}\" style=\"opacity: {}\">{}</g>",
            Escaped(self.id.as_str()),
            self.transform,
            SvgNumber(self.opacity),
            content.markup,
        )
    }
}
