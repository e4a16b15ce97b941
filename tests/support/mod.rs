// tests/support/mod.rs
// Shared by several integration test binaries; each binary uses a different
// subset, so allow dead_code / unused_imports at the module level.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(unused_imports)]
pub use mocks::*;

#[allow(unused_imports)]
pub use helpers::*;
