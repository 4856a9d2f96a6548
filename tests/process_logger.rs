//! Process-wide logger construction: first caller wins, no re-parsing.

use cronlog::{Logger, Options, Severity};

#[test]
fn the_first_construction_wins_and_is_reused() {
    let first = cronlog::from_options(Options::from_names("info", "none").expect("valid names"));
    let second = cronlog::from_options(Options::from_names("debug", "none").expect("valid names"));

    assert!(
        std::ptr::eq(first, second),
        "later calls must return the same instance"
    );

    // The first configuration (info threshold) is the one in effect.
    assert!(first.enabled(Severity::Info));
    assert!(!second.enabled(Severity::Debug));
}
