// tests/support/mod.rs
// Shared fixtures for the integration test binaries. Each binary compiles
// this module separately and uses a different subset of it, so dead_code /
// unused_imports are allowed here to keep the build quiet.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(unused_imports)]
pub use mocks::*;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use builders::*;
