//! Dense integer identifiers.
//!
//! Zones, edges and customers are all numbered `0..n` within their owner
//! (the venue, or one simulated day), so every id doubles as an index into
//! the owner's per-item `Vec`s.  Wrapping the integer keeps a `ZoneId` from
//! ever being used to index a customer table.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $name:ident, $label:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            /// Placeholder for "no id", e.g. the predecessor of a search root.
            pub const INVALID: $name = $name(u32::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// `None` if `index` does not fit, or would collide with `INVALID`.
            #[inline]
            pub fn from_index(index: usize) -> Option<Self> {
                u32::try_from(index).ok().filter(|&i| i != u32::MAX).map($name)
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!($label, " {}"), self.0)
                } else {
                    f.write_str(concat!($label, " <invalid>"))
                }
            }
        }
    };
}

typed_id! {
    /// A zone of the venue (graph node).
    ZoneId, "zone"
}

typed_id! {
    /// A customer within one simulated day.  Customers are numbered in
    /// arrival order, so comparing ids compares arrival order.
    CustomerId, "customer"
}
