// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box-constraint layout for Trellis widgets.
//!
//! Every layoutable node implements [`Layout`]: it reports an intrinsic
//! [`BoxConfig`] and, given [`BoxConstraints`], returns a size inside them.
//! [`LayoutNode`] wraps a widget with memoization, so relaying out with
//! unchanged constraints is free until [`LayoutNode::invalidate`] is called.
//!
//! [`Flex`] arranges children in rows or columns with grow factors, wrapping,
//! margins, explicit sizes and cross-axis alignment. [`Block`], [`Label`] and
//! [`Isolated`] are leaf widgets.
//!
//! Malformed constraints (NaN, negative, `min > max`) are rejected with a
//! [`LayoutError`] and propagated to the caller; the algorithms never try to
//! repair them.
//!
//! This crate is `no_std` compatible (with `alloc`).
//!
//! ```
//! use trellis_core::geometry::Size;
//! use trellis_layout::{Block, BoxConstraints, Flex, FlexItem, LayoutNode};
//!
//! let row = Flex::row()
//!     .with_item(FlexItem::new(Block::new(Size::new(10.0, 10.0))).with_grow(1.0))
//!     .with_item(FlexItem::new(Block::new(Size::new(10.0, 10.0))));
//! let mut root = LayoutNode::new(row);
//! let size = root.layout(BoxConstraints::tight(Size::new(100.0, 20.0))).unwrap();
//! assert_eq!(size, Size::new(100.0, 20.0));
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

mod block;
mod constraints;
mod error;
mod flex;
mod isolated;
mod label;
mod node;

pub use block::Block;
pub use constraints::{BoxConfig, BoxConstraints};
pub use error::{Axis, LayoutError};
pub use flex::{CrossAlignment, Flex, FlexItem, FlexValue, Line, WRAP_TOLERANCE};
pub use isolated::{Isolated, Isolation};
pub use label::Label;
pub use node::{Layout, LayoutNode, RenderContent, Widget};
