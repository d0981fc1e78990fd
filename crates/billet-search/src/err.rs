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

/// Error raised when the total place capacity cannot admit all items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityShortfallError {
    total_capacity: usize,
    num_items: usize,
}

impl CapacityShortfallError {
    pub fn new(total_capacity: usize, num_items: usize) -> Self {
        Self {
            total_capacity,
            num_items,
        }
    }

    pub fn total_capacity(&self) -> usize {
        self.total_capacity
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }
}

impl std::fmt::Display for CapacityShortfallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The groups provide {} places in total, which cannot admit all {} items",
            self.total_capacity, self.num_items
        )
    }
}

impl std::error::Error for CapacityShortfallError {}

/// Error raised when the summed group minima exceed the item count, so the
/// mandatory places can never all be filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MandatoryExcessError {
    total_minimum: usize,
    num_items: usize,
}

impl MandatoryExcessError {
    pub fn new(total_minimum: usize, num_items: usize) -> Self {
        Self {
            total_minimum,
            num_items,
        }
    }

    pub fn total_minimum(&self) -> usize {
        self.total_minimum
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }
}

impl std::fmt::Display for MandatoryExcessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The groups require {} items as minimum occupancy, but only {} items exist",
            self.total_minimum, self.num_items
        )
    }
}

impl std::error::Error for MandatoryExcessError {}

/// Structural infeasibility of a problem configuration.
///
/// Detected when a technique initializes its search state; fatal to that
/// run and never retried automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfeasibleError {
    CapacityShortfall(CapacityShortfallError),
    MandatoryExcess(MandatoryExcessError),
}

impl std::fmt::Display for InfeasibleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InfeasibleError::CapacityShortfall(e) => write!(f, "{}", e),
            InfeasibleError::MandatoryExcess(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for InfeasibleError {}

impl From<CapacityShortfallError> for InfeasibleError {
    fn from(err: CapacityShortfallError) -> Self {
        InfeasibleError::CapacityShortfall(err)
    }
}

impl From<MandatoryExcessError> for InfeasibleError {
    fn from(err: MandatoryExcessError) -> Self {
        InfeasibleError::MandatoryExcess(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_numbers() {
        let err = CapacityShortfallError::new(3, 5);
        let rendered = format!("{}", err);
        assert!(rendered.contains("3 places"));
        assert!(rendered.contains("5 items"));

        let err = MandatoryExcessError::new(4, 2);
        let rendered = format!("{}", err);
        assert!(rendered.contains("4 items as minimum"));
        assert!(rendered.contains("only 2 items"));
    }

    #[test]
    fn test_from_conversions() {
        let err: InfeasibleError = CapacityShortfallError::new(1, 2).into();
        assert!(matches!(err, InfeasibleError::CapacityShortfall(_)));

        let err: InfeasibleError = MandatoryExcessError::new(3, 1).into();
        assert!(matches!(err, InfeasibleError::MandatoryExcess(_)));
    }
}
