// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::index::ItemIndex;

/// The content of one place: either an item or empty.
///
/// Instead of using `Option<ItemIndex>`, this type uses a sentinel encoding
/// to avoid the additional discriminant that `Option` typically introduces.
/// Place-content vectors are scanned in the hottest loops of the search, so
/// keeping each entry to a single machine word improves cache locality.
///
/// Encoding:
/// - Values below `usize::MAX` represent the index of the item occupying
///   the place.
/// - `usize::MAX` is reserved to indicate an empty place.
///
/// This convention assumes item counts never reach `usize::MAX`, which is
/// structurally guaranteed by the model builder.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotContent(usize);

impl SlotContent {
    const EMPTY_SENTINEL: usize = usize::MAX;

    /// Creates a `SlotContent` occupied by the given item.
    #[inline]
    pub const fn item(index: ItemIndex) -> Self {
        SlotContent(index.get())
    }

    /// Creates a `SlotContent` representing an empty place.
    #[inline]
    pub const fn empty() -> Self {
        SlotContent(Self::EMPTY_SENTINEL)
    }

    /// Creates a `SlotContent` from an `Option<ItemIndex>`.
    #[inline]
    pub fn from_option(value: Option<ItemIndex>) -> Self {
        match value {
            Some(index) => Self::item(index),
            None => Self::empty(),
        }
    }

    /// Checks if this place content is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == Self::EMPTY_SENTINEL
    }

    /// Checks if this place content holds an item.
    #[inline]
    pub const fn is_item(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the occupying item, or `None` if the place is empty.
    #[inline]
    pub const fn item_index(&self) -> Option<ItemIndex> {
        if self.is_empty() {
            None
        } else {
            Some(ItemIndex::new(self.0))
        }
    }

    /// Returns the raw encoded value, including the sentinel if present.
    #[inline]
    pub const fn raw(&self) -> usize {
        self.0
    }
}

impl From<ItemIndex> for SlotContent {
    #[inline]
    fn from(index: ItemIndex) -> Self {
        Self::item(index)
    }
}

impl From<Option<ItemIndex>> for SlotContent {
    #[inline]
    fn from(value: Option<ItemIndex>) -> Self {
        Self::from_option(value)
    }
}

impl std::fmt::Debug for SlotContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.item_index() {
            Some(index) => write!(f, "SlotContent(Item({}))", index.get()),
            None => write!(f, "SlotContent(Empty)"),
        }
    }
}

impl std::fmt::Display for SlotContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.item_index() {
            Some(index) => write!(f, "{}", index.get()),
            None => write!(f, "-"),
        }
    }
}
