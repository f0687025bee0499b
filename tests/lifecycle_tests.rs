// Host-side tests for page lifecycle decisions.

mod common;

use common::lifecycle::*;

#[test]
fn waits_only_while_document_is_loading() {
    // Document.readyState is a plain string
    assert!(waits_for_dom("loading"));
    assert!(!waits_for_dom("interactive"));
    assert!(!waits_for_dom("complete"));
}

#[test]
fn back_forward_cache_keeps_the_session() {
    assert!(!tears_down_on_hide(true));
    assert!(tears_down_on_hide(false));
}
