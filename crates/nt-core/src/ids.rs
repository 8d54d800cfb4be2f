//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` because
//! the movement and scenario file formats carry raw numeric ids; callers that
//! only need a `Vec` index should prefer the `.index()` helper.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the type's MAX.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Id of a waypoint in a movement graph, as written in the movement file.
    pub struct WaypointId(u32);
}

typed_id! {
    /// Handle of a radio node (terminal or base station) registered with a
    /// mobility model.
    pub struct NodeId(u32);
}

typed_id! {
    /// Id of one tracked traffic flow reported by a flow probe.
    pub struct FlowId(u32);
}

typed_id! {
    /// Id of a base-station record in a scenario file.
    pub struct StationId(u32);
}

typed_id! {
    /// Id of a frequency band in a scenario file.
    /// `u16` — a scenario carries at most a handful of bands.
    pub struct BandId(u16);
}

typed_id! {
    /// Slot of a scheduled task inside an event loop.
    pub struct TaskId(u32);
}
