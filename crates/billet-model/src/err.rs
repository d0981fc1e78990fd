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

use crate::index::GroupIndex;

/// Error raised when a group is declared with a maximum occupancy of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroCapacityGroupError {
    group: GroupIndex,
}

impl ZeroCapacityGroupError {
    pub fn new(group: GroupIndex) -> Self {
        Self { group }
    }

    pub fn group(&self) -> GroupIndex {
        self.group
    }
}

impl std::fmt::Display for ZeroCapacityGroupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Group {} has a maximum occupancy of zero and contributes no places",
            self.group
        )
    }
}

impl std::error::Error for ZeroCapacityGroupError {}

/// Error raised when a group's minimum occupancy exceeds its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvertedOccupancyError {
    group: GroupIndex,
    min_occupancy: usize,
    max_occupancy: usize,
}

impl InvertedOccupancyError {
    pub fn new(group: GroupIndex, min_occupancy: usize, max_occupancy: usize) -> Self {
        Self {
            group,
            min_occupancy,
            max_occupancy,
        }
    }

    pub fn group(&self) -> GroupIndex {
        self.group
    }

    pub fn min_occupancy(&self) -> usize {
        self.min_occupancy
    }

    pub fn max_occupancy(&self) -> usize {
        self.max_occupancy
    }
}

impl std::fmt::Display for InvertedOccupancyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Group {} declares minimum occupancy {} above its maximum {}",
            self.group, self.min_occupancy, self.max_occupancy
        )
    }
}

impl std::error::Error for InvertedOccupancyError {}

/// Error raised when a model is built without any group of places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoGroupsError;

impl std::fmt::Display for NoGroupsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The model declares no groups of places")
    }
}

impl std::error::Error for NoGroupsError {}

/// Errors that can occur while building a `Model`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelError {
    ZeroCapacityGroup(ZeroCapacityGroupError),
    InvertedOccupancy(InvertedOccupancyError),
    NoGroups(NoGroupsError),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::ZeroCapacityGroup(e) => write!(f, "{}", e),
            ModelError::InvertedOccupancy(e) => write!(f, "{}", e),
            ModelError::NoGroups(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ModelError {}

impl From<ZeroCapacityGroupError> for ModelError {
    fn from(err: ZeroCapacityGroupError) -> Self {
        ModelError::ZeroCapacityGroup(err)
    }
}

impl From<InvertedOccupancyError> for ModelError {
    fn from(err: InvertedOccupancyError) -> Self {
        ModelError::InvertedOccupancy(err)
    }
}

impl From<NoGroupsError> for ModelError {
    fn from(err: NoGroupsError) -> Self {
        ModelError::NoGroups(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages_name_the_group() {
        let err = ZeroCapacityGroupError::new(GroupIndex::new(2));
        assert!(format!("{}", err).contains("GroupIndex(2)"));

        let err = InvertedOccupancyError::new(GroupIndex::new(0), 3, 1);
        let rendered = format!("{}", err);
        assert!(rendered.contains("minimum occupancy 3"));
        assert!(rendered.contains("maximum 1"));
    }

    #[test]
    fn test_from_conversions() {
        let err: ModelError = ZeroCapacityGroupError::new(GroupIndex::new(1)).into();
        assert!(matches!(err, ModelError::ZeroCapacityGroup(_)));

        let err: ModelError = NoGroupsError.into();
        assert!(matches!(err, ModelError::NoGroups(_)));
    }
}
