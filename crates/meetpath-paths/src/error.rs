use std::collections::TryReserveError;
use std::fmt;

use meetpath_core::Point;

/// Why a search did not produce a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// Both frontiers were exhausted without touching: the endpoints lie in
    /// different connected regions. This is a normal negative result.
    NoPathFound,
    /// A search buffer could not grow.
    OutOfMemory,
    /// The endpoint is outside the grid or on a blocked cell.
    InvalidEndpoint(Point),
    /// The configured step budget ran out before the search finished.
    StepLimit(usize),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPathFound => f.write_str("no path between the endpoints"),
            Self::OutOfMemory => f.write_str("out of memory while searching"),
            Self::InvalidEndpoint(p) => {
                write!(f, "endpoint {p} is out of bounds or not passable")
            }
            Self::StepLimit(n) => write!(f, "search gave up after {n} steps"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<TryReserveError> for PathError {
    fn from(_: TryReserveError) -> Self {
        Self::OutOfMemory
    }
}

/// Push onto `v`, reporting allocation failure instead of aborting.
#[inline]
pub(crate) fn try_push<T>(v: &mut Vec<T>, item: T) -> Result<(), PathError> {
    v.try_reserve(1)?;
    v.push(item);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_failure_maps_to_out_of_memory() {
        let mut v: Vec<u64> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        assert_eq!(PathError::from(err), PathError::OutOfMemory);
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            PathError::InvalidEndpoint(Point::new(3, -1)).to_string(),
            "endpoint (3, -1) is out of bounds or not passable"
        );
        assert_eq!(
            PathError::StepLimit(10).to_string(),
            "search gave up after 10 steps"
        );
    }

    #[test]
    fn try_push_appends() {
        let mut v = Vec::new();
        try_push(&mut v, 1).unwrap();
        try_push(&mut v, 2).unwrap();
        assert_eq!(v, vec![1, 2]);
    }
}
