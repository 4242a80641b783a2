//! Wire types shared between the store client and the REST backend.

pub mod domain;
pub mod system;
