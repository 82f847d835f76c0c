//! # Vertex identifiers
//!
//! ## Description
//! Both built-in containers ([`CsrGraph`][csr] and [`DynamicGraph`][dyn_graph]) index
//! their vertices densely from `0`, so the identifier type only needs  to  be  a  cheap,
//! copyable integer that can be converted to and from `usize`. [`VertexId`] captures that
//! requirement and is implemented for every unsigned integer type in `std`.
//!
//! [csr]: crate::containers::csr::CsrGraph
//! [dyn_graph]: crate::containers::dynamic::DynamicGraph
use std::fmt::{Debug, Display};
use std::hash::Hash;



/// # Vertex/edge identifier trait
///
/// ## Description
/// Types that implement `VertexId` can be used as vertex identifiers  (and,  by  reuse,
/// edge-position identifiers) throughout this crate. Unlike the source this crate is
/// modeled on, identifiers here are always dense, zero-based indices into a `Vec`-backed
/// store, so only the unsigned integer types implement this trait.
pub trait VertexId
where
    Self: Copy + Debug + Display + Eq + Hash + Ord,
{
    /// Convert a `usize` offset into this identifier type. Panics on overflow, which can
    /// only happen if the graph outgrows the identifier's range (e.g. more than 256
    /// vertices with `VId = u8`).
    fn from_usize(value: usize) -> Self;
    /// Convert this identifier back into a `usize` offset.
    fn to_usize(self) -> usize;
}

macro_rules! implement_vertex_id_trait_for {
    ($t: ty) => {
        impl VertexId for $t {
            #[inline]
            fn from_usize(value: usize) -> Self {
                <$t>::try_from(value).expect("vertex id overflowed its integer type")
            }

            #[inline]
            fn to_usize(self) -> usize {
                // Conversion from any of the macro's target types into usize is
                // infallible on every platform this crate supports.
                self.try_into().unwrap()
            }
        }
    };
}

implement_vertex_id_trait_for!(u8);
implement_vertex_id_trait_for!(u16);
implement_vertex_id_trait_for!(u32);
implement_vertex_id_trait_for!(u64);
implement_vertex_id_trait_for!(u128);
implement_vertex_id_trait_for!(usize);
