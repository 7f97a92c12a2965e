use std::cell::Cell;

use futures::executor::block_on;

use super::*;

#[test]
fn feed_state_default_is_loading() {
    let state = FeedState::default();
    assert_eq!(state, FeedState::Loading);
    assert_eq!(state.status_text(), "Loading live robotics updates…");
}

#[test]
fn sample_items_are_the_three_headlines() {
    let items = sample_items();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].title, "Student team builds low-cost line-following robot");
    assert_eq!(items[2].meta(), "Lab Demo • 18 min ago");
}

#[test]
fn load_feed_populates_list_with_timestamp() {
    let source = StaticNewsSource::new(sample_items());
    let state = block_on(load_feed(&source, || format_clock(9, 5)));
    match &state {
        FeedState::Ready { items, updated_at } => {
            assert_eq!(items, &sample_items());
            assert_eq!(updated_at, "09:05");
        }
        other => panic!("expected ready feed, got {other:?}"),
    }
    assert_eq!(state.status_text(), "Last updated at 09:05");
}

#[test]
fn load_feed_empty_renders_no_updates() {
    let source = StaticNewsSource::default();
    let state = block_on(load_feed(&source, || "12:00".to_owned()));
    assert_eq!(state, FeedState::Empty);
    assert_eq!(state.status_text(), "No updates available right now. Try again later.");
}

#[test]
fn clock_is_read_after_source_resolves() {
    let calls = Cell::new(0);
    let source = StaticNewsSource::new(sample_items());
    let fut = load_feed(&source, || {
        calls.set(calls.get() + 1);
        "10:30".to_owned()
    });
    assert_eq!(calls.get(), 0);
    block_on(fut);
    assert_eq!(calls.get(), 1);
}

#[test]
fn format_clock_pads_two_digits() {
    assert_eq!(format_clock(0, 0), "00:00");
    assert_eq!(format_clock(23, 59), "23:59");
}
