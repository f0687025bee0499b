pub mod config;
pub mod constants;
pub mod debounce;
pub mod effects;
pub mod evaluator;
pub mod geometry;
pub mod lifecycle;

pub use config::{EffectRule, PageConfig};
pub use debounce::Debounce;
pub use effects::{apply_effect, EffectAction, EffectPage, StyleDecl};
pub use evaluator::{Evaluator, Surface};
pub use geometry::{Band, Rule, Viewport};
