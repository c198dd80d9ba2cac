//! One codec per historical client build.
//!
//! Builds compose by construction: each module's `codec()` starts from the
//! previous build's codec and patches only the supported ids, id remaps,
//! field layouts and decoders that changed in that release.

pub mod b282;
pub mod b291;
pub mod b294;
pub mod b296;
pub mod b298;
pub mod b312;
pub mod b320;
pub mod b323;
