//! EVM-side primitives of the bridge.

pub mod address;
pub mod checksum;
pub mod codec;
pub mod gas;
pub mod hash;
pub mod keys;
pub mod limits;
