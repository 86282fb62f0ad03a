//! Error types for the Kruskal core library.
//!
//! Defines the error enum exposed by the public API and a convenient result
//! alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced while building graphs or computing spanning forests.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum KruskalError {
    /// A disjoint-set operation referenced an element outside `[0, count)`.
    #[error("vertex index {index} is out of range for {count} vertices")]
    InvalidVertexIndex {
        /// The offending vertex index.
        index: usize,
        /// Number of vertices tracked by the structure.
        count: usize,
    },
    /// A graph was requested with a vertex count that cannot be represented.
    #[error("vertex count must be a non-negative integer (got {vertex_count})")]
    InvalidConstruction {
        /// The vertex count supplied by the caller.
        vertex_count: i64,
    },
    /// The running total of accepted edge weights overflowed `i64`.
    #[error("total spanning forest weight overflowed i64")]
    WeightOverflow,
}

define_error_codes! {
    /// Stable codes describing [`KruskalError`] variants.
    enum KruskalErrorCode for KruskalError {
        /// A disjoint-set operation referenced an element outside its range.
        InvalidVertexIndex => InvalidVertexIndex { .. } => "KRUSKAL_INVALID_VERTEX_INDEX",
        /// A graph was requested with an unrepresentable vertex count.
        InvalidConstruction => InvalidConstruction { .. } => "KRUSKAL_INVALID_CONSTRUCTION",
        /// The total weight overflowed.
        WeightOverflow => WeightOverflow => "KRUSKAL_WEIGHT_OVERFLOW",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, KruskalError>;
