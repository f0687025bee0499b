// Edge-triggered visibility tracking over a list of plain watched records.
//
// The evaluator never touches the DOM itself: measuring elements and running
// enter/leave actions go through a `Surface`, so the same code drives the
// browser and the host-side tests.

use super::geometry::{Band, Rule, Viewport};

/// Capabilities the evaluator needs from its host.
pub trait Surface {
    type Element;
    type Action;

    /// Document band of `element`, or `None` when it cannot be measured.
    fn measure(&self, viewport: &Viewport, element: &Self::Element) -> Option<Band>;

    /// Run `action` against the watched item's target element.
    fn perform(&mut self, target: &Self::Element, action: &Self::Action);
}

/// One registered target/trigger pair.
#[derive(Clone, Debug)]
pub struct WatchedItem<E, A> {
    pub target: E,
    pub trigger: E,
    pub rule: Rule,
    pub state: bool,
    pub enter: A,
    pub leave: Option<A>,
}

impl<E: Clone, A> WatchedItem<E, A> {
    /// Item whose trigger is the target itself.
    pub fn new(target: E, rule: Rule, enter: A) -> Self {
        Self {
            trigger: target.clone(),
            target,
            rule,
            state: false,
            enter,
            leave: None,
        }
    }
}

impl<E, A> WatchedItem<E, A> {
    pub fn with_trigger(mut self, trigger: E) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn with_leave(mut self, leave: Option<A>) -> Self {
        self.leave = leave;
        self
    }
}

/// Which way an item's state flipped during an evaluation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Enter,
    Leave,
}

pub struct Evaluator<E, A> {
    items: Vec<WatchedItem<E, A>>,
}

impl<E, A> Default for Evaluator<E, A> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<E, A> Evaluator<E, A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, item: WatchedItem<E, A>) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[WatchedItem<E, A>] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Recompute every item against `viewport`, running handlers only for
    /// items whose visibility changed. Returns the transitions that occurred
    /// as `(item index, transition)` pairs.
    pub fn evaluate<S>(
        &mut self,
        viewport: &Viewport,
        surface: &mut S,
    ) -> Vec<(usize, Transition)>
    where
        S: Surface<Element = E, Action = A>,
    {
        let mut fired = Vec::new();
        for (index, item) in self.items.iter_mut().enumerate() {
            let Some(band) = surface.measure(viewport, &item.trigger) else {
                continue;
            };
            let visible = item.rule.is_visible(viewport, &band);
            if visible == item.state {
                continue;
            }
            item.state = visible;
            if visible {
                surface.perform(&item.target, &item.enter);
                fired.push((index, Transition::Enter));
            } else {
                if let Some(leave) = &item.leave {
                    surface.perform(&item.target, leave);
                }
                fired.push((index, Transition::Leave));
            }
        }
        if !fired.is_empty() {
            log::debug!(
                "[evaluator] {} transition(s) at scroll {:.0}",
                fired.len(),
                viewport.scroll_top
            );
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Fixed {
        bands: HashMap<u32, Band>,
        log: Vec<(u32, &'static str)>,
    }

    impl Surface for Fixed {
        type Element = u32;
        type Action = &'static str;

        fn measure(&self, _viewport: &Viewport, element: &u32) -> Option<Band> {
            self.bands.get(element).copied()
        }

        fn perform(&mut self, target: &u32, action: &&'static str) {
            self.log.push((*target, *action));
        }
    }

    #[test]
    fn leave_without_handler_still_updates_state() {
        let mut surface = Fixed {
            bands: HashMap::from([(1, Band::new(300.0, 50.0))]),
            log: Vec::new(),
        };
        let mut ev = Evaluator::new();
        ev.register(WatchedItem::new(1, Rule::default(), "play"));
        ev.evaluate(&Viewport::new(0.0, 800.0), &mut surface);
        assert!(ev.items()[0].state);
        let fired = ev.evaluate(&Viewport::new(5000.0, 800.0), &mut surface);
        assert_eq!(fired, vec![(0, Transition::Leave)]);
        assert!(!ev.items()[0].state);
        assert_eq!(surface.log, vec![(1, "play")]);
    }
}
