//! Game vocabulary: vectors, thrust commands, ships and actions.

pub use self::{action::*, ship::*, thrust::*, vector::*};

pub(crate) mod action;
pub(crate) mod ship;
pub(crate) mod thrust;
pub(crate) mod vector;
