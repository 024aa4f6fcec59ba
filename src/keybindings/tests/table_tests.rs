use crate::core::Mode;
use crate::keybindings::{BindingError, BindingTable};
use std::borrow::Cow;

#[test]
fn test_bind_then_get() {
    let mut table = BindingTable::new();
    table.bind("j", "scroll down", Mode::Thumbnail);

    let effective = table.get(Mode::Thumbnail);
    assert_eq!(effective.get("j"), Some("scroll down"));
}

#[test]
fn test_mode_overrides_global() {
    let mut table = BindingTable::new();
    table.bind("j", "pan down", Mode::Global);
    table.bind("j", "scroll down", Mode::Thumbnail);

    assert_eq!(table.get(Mode::Thumbnail).get("j"), Some("scroll down"));
    assert_eq!(table.lookup(Mode::Thumbnail, "j"), Some("scroll down"));

    // Global itself is untouched
    assert_eq!(table.lookup(Mode::Global, "j"), Some("pan down"));
}

#[test]
fn test_fallback_modes_see_global() {
    let mut table = BindingTable::new();
    table.bind("q", "quit", Mode::Global);

    for mode in [Mode::Image, Mode::Thumbnail, Mode::Library] {
        assert_eq!(table.get(mode).get("q"), Some("quit"), "{mode}");
        assert_eq!(table.lookup(mode, "q"), Some("quit"), "{mode}");
    }
}

#[test]
fn test_flat_modes_do_not_see_global() {
    let mut table = BindingTable::new();
    table.bind("q", "quit", Mode::Global);

    assert_eq!(table.get(Mode::Command).get("q"), None);
    assert_eq!(table.lookup(Mode::Manipulate, "q"), None);
}

#[test]
fn test_flat_mode_get_borrows_own_table() {
    let mut table = BindingTable::new();
    table.bind("<escape>", "leave-commandline", Mode::Command);

    assert!(matches!(table.get(Mode::Command), Cow::Borrowed(_)));
    assert!(matches!(table.get(Mode::Image), Cow::Owned(_)));
}

#[test]
fn test_effective_table_is_union() {
    let mut table = BindingTable::new();
    table.bind("q", "quit", Mode::Global);
    table.bind("f", "fullscreen", Mode::Global);
    table.bind("n", "next", Mode::Image);

    let effective = table.get(Mode::Image);
    let keys: Vec<&str> = effective.iter().map(|(keys, _)| keys).collect();
    assert_eq!(keys, vec!["f", "n", "q"]);
}

#[test]
fn test_rebind_overwrites() {
    let mut table = BindingTable::new();
    table.bind("n", "next", Mode::Image);
    table.bind("n", "next --keep-zoom", Mode::Image);

    assert_eq!(table.lookup(Mode::Image, "n"), Some("next --keep-zoom"));
    assert_eq!(table.own(Mode::Image).len(), 1);
}

#[test]
fn test_unbind_own_entry() {
    let mut table = BindingTable::new();
    table.bind("j", "pan down", Mode::Global);
    table.bind("j", "scroll down", Mode::Library);

    table.unbind("j", Mode::Library).unwrap();

    // Own entry gone, global fallback shows through again
    assert_eq!(table.lookup(Mode::Library, "j"), Some("pan down"));
    assert!(table.own(Mode::Global).contains("j"));
}

#[test]
fn test_unbind_via_fallback_removes_global_for_every_mode() {
    let mut table = BindingTable::new();
    table.bind("q", "quit", Mode::Global);

    table.unbind("q", Mode::Image).unwrap();

    assert!(!table.own(Mode::Global).contains("q"));
    for mode in [Mode::Global, Mode::Image, Mode::Thumbnail, Mode::Library] {
        assert_eq!(table.lookup(mode, "q"), None, "{mode}");
    }
}

#[test]
fn test_unbind_flat_mode_ignores_global() {
    let mut table = BindingTable::new();
    table.bind("q", "quit", Mode::Global);

    let result = table.unbind("q", Mode::Command);
    assert_eq!(
        result,
        Err(BindingError::NotFound {
            keys: "q".to_string(),
            mode: Mode::Command,
        })
    );
    assert!(table.own(Mode::Global).contains("q"));
}

#[test]
fn test_unbind_missing_sequence() {
    let mut table = BindingTable::new();
    let result = table.unbind("zz", Mode::Thumbnail);

    assert!(matches!(result, Err(BindingError::NotFound { .. })));
    assert_eq!(
        result.unwrap_err().to_string(),
        "No binding found for 'zz' in THUMBNAIL mode"
    );
}

#[test]
fn test_partial_match_own_table() {
    let mut table = BindingTable::new();
    table.bind("gg", "goto 1", Mode::Image);

    assert!(table.partial_match(Mode::Image, "g"));

    table.unbind("gg", Mode::Image).unwrap();
    assert!(!table.partial_match(Mode::Image, "g"));
}

#[test]
fn test_partial_match_empty_keys() {
    let mut table = BindingTable::new();
    table.bind("gg", "goto 1", Mode::Image);

    assert!(!table.partial_match(Mode::Image, ""));
}

#[test]
fn test_partial_match_ignores_global_fallback() {
    let mut table = BindingTable::new();
    table.bind("gi", "enter image", Mode::Global);

    assert!(table.partial_match(Mode::Global, "g"));
    assert!(!table.partial_match(Mode::Thumbnail, "g"));
}

#[test]
fn test_clear_empties_every_mode() {
    let mut table = BindingTable::new();
    for mode in Mode::ALL {
        table.bind("x", "noop", mode);
    }
    assert_eq!(table.total_bindings(), Mode::ALL.len());

    table.clear();
    assert_eq!(table.total_bindings(), 0);
    assert!(table.iter().all(|(_, bindings)| bindings.is_empty()));
}
