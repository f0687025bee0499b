// The main crate is wasm-only, so the pure-Rust core modules are included
// directly for host-side testing.
#![allow(dead_code)]

pub mod constants {
    include!("../../src/core/constants.rs");
}
pub mod geometry {
    include!("../../src/core/geometry.rs");
}
pub mod evaluator {
    include!("../../src/core/evaluator.rs");
}
pub mod effects {
    include!("../../src/core/effects.rs");
}
pub mod debounce {
    include!("../../src/core/debounce.rs");
}
pub mod config {
    include!("../../src/core/config.rs");
}
pub mod lifecycle {
    include!("../../src/core/lifecycle.rs");
}
