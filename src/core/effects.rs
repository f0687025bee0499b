// Named visual presets and their registration against the evaluator.

use super::constants::{
    BLUR_REM_PER_INTENSITY, DEFAULT_INTENSITY, DEFAULT_SPEED_MS, SCALE_PER_INTENSITY,
};
use super::evaluator::{Evaluator, WatchedItem};
use super::geometry::Rule;
use serde::Deserialize;
use smallvec::SmallVec;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown effect preset '{0}'")]
pub struct UnknownPreset(pub String);

/// A single inline style assignment, e.g. `opacity: 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleDecl {
    pub property: &'static str,
    pub value: String,
}

impl StyleDecl {
    fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

pub type Styles = SmallVec<[StyleDecl; 3]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    BlurIn,
    FocusImage,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::BlurIn, Preset::FocusImage];

    pub fn name(self) -> &'static str {
        match self {
            Preset::BlurIn => "blur-in",
            Preset::FocusImage => "focus-image",
        }
    }

    /// Hidden/initial appearance.
    pub fn rewind(self, intensity: f64) -> Styles {
        let blur_rem = css_number(BLUR_REM_PER_INTENSITY * intensity);
        let blur = StyleDecl::new("filter", format!("blur({}rem)", blur_rem));
        let mut out = Styles::new();
        match self {
            Preset::BlurIn => {
                out.push(StyleDecl::new("opacity", "0"));
                out.push(blur);
            }
            Preset::FocusImage => {
                let scale = 1.0 + SCALE_PER_INTENSITY * intensity;
                out.push(StyleDecl::new("transform", format!("scale({})", css_number(scale))));
                out.push(blur);
            }
        }
        out
    }

    /// Visible/final appearance.
    pub fn play(self) -> Styles {
        let mut out = Styles::new();
        match self {
            Preset::BlurIn => {
                out.push(StyleDecl::new("opacity", "1"));
                out.push(StyleDecl::new("filter", "none"));
            }
            Preset::FocusImage => {
                out.push(StyleDecl::new("transform", "none"));
                out.push(StyleDecl::new("filter", "none"));
            }
        }
        out
    }

    /// Transition covering every property this preset animates.
    pub fn transition(self, speed_ms: u32) -> StyleDecl {
        let props: &[&str] = match self {
            Preset::BlurIn => &["opacity", "filter"],
            Preset::FocusImage => &["transform", "filter"],
        };
        let value = props
            .iter()
            .map(|p| format!("{} {}ms ease-in-out", p, speed_ms))
            .collect::<Vec<_>>()
            .join(", ");
        StyleDecl::new("transition", value)
    }
}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

// Up to three decimals, without trailing zeros.
fn css_number(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// What an effect item does when its trigger enters or leaves the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EffectAction {
    Play(Preset),
    Rewind { preset: Preset, intensity: f64 },
}

impl EffectAction {
    pub fn styles(&self) -> Styles {
        match *self {
            EffectAction::Play(preset) => preset.play(),
            EffectAction::Rewind { preset, intensity } => preset.rewind(intensity),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectOptions {
    /// Transition duration in milliseconds.
    pub speed: u32,
    pub intensity: f64,
    /// Rewind again when the trigger scrolls back out.
    pub replay: bool,
}

impl Default for EffectOptions {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED_MS,
            intensity: DEFAULT_INTENSITY,
            replay: false,
        }
    }
}

/// Document operations needed to attach presets to elements.
pub trait EffectPage {
    type Element: Clone;

    fn select_all(&self, selector: &str) -> Vec<Self::Element>;

    /// Nearest ancestor marked as a scroll trigger, or the element itself.
    fn trigger_for(&self, element: &Self::Element) -> Self::Element;

    fn set_styles(&self, element: &Self::Element, styles: &[StyleDecl]);
}

/// Rewind every element matching `selector` and watch it for `preset_name`.
/// Returns the number of watched items created; unknown presets create none.
pub fn apply_effect<P: EffectPage>(
    evaluator: &mut Evaluator<P::Element, EffectAction>,
    page: &P,
    selector: &str,
    preset_name: &str,
    options: &EffectOptions,
    rule: Rule,
) -> usize {
    let preset = match preset_name.parse::<Preset>() {
        Ok(p) => p,
        Err(e) => {
            log::debug!("[effects] skipping '{}': {}", selector, e);
            return 0;
        }
    };
    let rewind = EffectAction::Rewind {
        preset,
        intensity: options.intensity,
    };
    let elements = page.select_all(selector);
    for element in &elements {
        page.set_styles(element, &rewind.styles());
        page.set_styles(element, &[preset.transition(options.speed)]);
        let item = WatchedItem::new(element.clone(), rule, EffectAction::Play(preset))
            .with_trigger(page.trigger_for(element))
            .with_leave(options.replay.then_some(rewind));
        evaluator.register(item);
    }
    log::debug!("[effects] '{}' -> {} x{}", selector, preset.name(), elements.len());
    elements.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_numbers_drop_trailing_zeros() {
        assert_eq!(css_number(1.25), "1.25");
        assert_eq!(css_number(1.0), "1");
        assert_eq!(css_number(1.0 + 0.05 * 3.0), "1.15");
        assert_eq!(css_number(0.0), "0");
    }

    #[test]
    fn transition_lists_animated_properties() {
        let t = Preset::FocusImage.transition(400);
        assert_eq!(t.property, "transition");
        assert_eq!(t.value, "transform 400ms ease-in-out, filter 400ms ease-in-out");
    }
}
