//! Factory keybindings
//!
//! Bound once during startup by `register_all`, after which `keys.conf`
//! may rebind or unbind any of them.

use crate::core::Mode;
use crate::keybindings::BindingTable;

const GLOBAL: &[(&str, &str)] = &[
    (":", "command"),
    ("o", "command --text='open '"),
    ("q", "quit"),
    ("f", "fullscreen"),
    ("b", "set statusbar.show!"),
    ("tt", "toggle thumbnail"),
    ("tl", "toggle library"),
    ("gi", "enter image"),
    ("gt", "enter thumbnail"),
    ("gl", "enter library"),
    ("yy", "copy-name"),
];

const IMAGE: &[(&str, &str)] = &[
    ("n", "next"),
    ("p", "prev"),
    ("h", "scroll left"),
    ("j", "scroll down"),
    ("k", "scroll up"),
    ("l", "scroll right"),
    ("+", "zoom in"),
    ("-", "zoom out"),
    ("w", "scale --level=fit"),
    ("gg", "goto 1"),
    ("G", "goto -1"),
    ("ss", "slideshow"),
];

const THUMBNAIL: &[(&str, &str)] = &[
    ("h", "scroll left"),
    ("j", "scroll down"),
    ("k", "scroll up"),
    ("l", "scroll right"),
    ("gg", "goto 1"),
    ("G", "goto -1"),
    ("+", "zoom in"),
    ("-", "zoom out"),
];

const LIBRARY: &[(&str, &str)] = &[
    ("h", "scroll left"),
    ("j", "scroll down"),
    ("k", "scroll up"),
    ("l", "scroll right"),
    ("n", "scroll down --open-selected"),
    ("p", "scroll up --open-selected"),
    ("gg", "goto 1"),
    ("go", "goto 1 --open-selected"),
    ("G", "goto -1"),
];

const COMMAND: &[(&str, &str)] = &[
    ("<escape>", "leave-commandline"),
    ("<tab>", "complete"),
    ("<shift><tab>", "complete --inverse"),
    ("<ctrl>p", "history next"),
    ("<ctrl>n", "history prev"),
];

const MANIPULATE: &[(&str, &str)] = &[
    ("<escape>", "discard"),
    ("<return>", "accept"),
];

/// Binds every factory keybinding into `table`.
pub fn register_all(table: &mut BindingTable) {
    let modes = [
        (Mode::Global, GLOBAL),
        (Mode::Image, IMAGE),
        (Mode::Thumbnail, THUMBNAIL),
        (Mode::Library, LIBRARY),
        (Mode::Command, COMMAND),
        (Mode::Manipulate, MANIPULATE),
    ];

    for (mode, bindings) in modes {
        for (keys, command) in bindings {
            table.bind(keys, command, mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybindings::validator::validate_key_sequence;

    #[test]
    fn test_factory_sequences_are_valid() {
        let mut table = BindingTable::new();
        register_all(&mut table);

        for (mode, bindings) in table.iter() {
            for (keys, _) in bindings.iter() {
                assert!(
                    validate_key_sequence(keys).is_ok(),
                    "{mode}: '{keys}' should be a valid sequence"
                );
            }
        }
    }

    #[test]
    fn test_factory_library_overrides_global_prefix() {
        let mut table = BindingTable::new();
        register_all(&mut table);

        assert_eq!(table.lookup(Mode::Library, "gg"), Some("goto 1"));
        assert_eq!(table.lookup(Mode::Library, "q"), Some("quit"));
        assert_eq!(table.lookup(Mode::Command, "q"), None);
    }
}
