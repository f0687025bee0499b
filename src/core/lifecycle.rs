// Page lifecycle decisions, kept free of web-sys types.

pub const READY_STATE_LOADING: &str = "loading";

/// True while the parser is still running and `DOMContentLoaded` is pending.
#[inline]
pub fn waits_for_dom(ready_state: &str) -> bool {
    ready_state == READY_STATE_LOADING
}

/// A `pagehide` with `persisted` set sends the page to the back/forward
/// cache, from which it can be shown again with its listeners intact.
#[inline]
pub fn tears_down_on_hide(persisted: bool) -> bool {
    !persisted
}
