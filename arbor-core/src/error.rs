//! Error types for the Arbor core library.
//!
//! Defines the error enums exposed by the public API together with stable,
//! machine-readable codes for logging surfaces.

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
            #[must_use]
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
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while validating a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// An edge referenced a vertex outside `[0, vertex_count)`.
    #[error("edge {edge} references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertex {
        /// Position of the offending edge in the input list.
        edge: usize,
        /// The out-of-range vertex id.
        vertex: usize,
        /// Number of vertices declared for the graph.
        vertex_count: usize,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge {edge} ({left}, {right}) has non-finite weight {weight}")]
    NonFiniteWeight {
        /// Position of the offending edge in the input list.
        edge: usize,
        /// First endpoint as provided.
        left: usize,
        /// Second endpoint as provided.
        right: usize,
        /// The rejected weight.
        weight: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced a vertex outside the graph.
        InvalidVertex => InvalidVertex { .. } => "GRAPH_INVALID_VERTEX",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
    }
}

/// An error produced by checked [`crate::DisjointSet`] queries.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The queried element does not exist in the structure.
    #[error("element {index} is out of bounds for a disjoint-set of {len} elements")]
    OutOfBounds {
        /// The requested element.
        index: usize,
        /// Number of elements tracked by the structure.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The queried element does not exist in the structure.
        OutOfBounds => OutOfBounds { .. } => "DISJOINT_SET_OUT_OF_BOUNDS",
    }
}

/// Error type produced when configuring a [`crate::Verifier`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum VerifyError {
    /// Weight tolerance must be finite and non-negative.
    #[error("weight tolerance must be finite and non-negative (got {tolerance})")]
    InvalidTolerance {
        /// The rejected tolerance.
        tolerance: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`VerifyError`] variants.
    enum VerifyErrorCode for VerifyError {
        /// Weight tolerance must be finite and non-negative.
        InvalidTolerance => InvalidTolerance { .. } => "VERIFY_INVALID_TOLERANCE",
    }
}
