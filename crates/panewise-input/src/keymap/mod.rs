mod display;
mod parse;
mod types;

pub use parse::{parse_chord, split_sequence, SEQUENCE_DELIMITER};
pub use types::{Key, KeyChord, Modifiers, NamedKey};

#[cfg(test)]
mod tests {
    use super::*;
    use panewise_common::KeyError;

    #[test]
    fn parse_simple_chord() {
        let chord = parse_chord("ctrl+b").unwrap();
        assert_eq!(chord.mods, Modifiers::CTRL);
        assert_eq!(chord.key, Key::Char('b'));
    }

    #[test]
    fn parse_multi_modifier_chord() {
        let chord = parse_chord("ctrl+shift+x").unwrap();
        assert_eq!(chord.mods, Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(chord.key, Key::Char('x'));
        assert_eq!(chord.mods.bits(), 5);
    }

    #[test]
    fn parse_every_modifier() {
        let chord = parse_chord("shift+alt+ctrl+super+hyper+meta+a").unwrap();
        assert_eq!(chord.mods, Modifiers::all());
        assert_eq!(chord.mods.bits(), 63);
    }

    #[test]
    fn parse_modifier_aliases() {
        assert_eq!(parse_chord("control+a").unwrap().mods, Modifiers::CTRL);
        assert_eq!(parse_chord("opt+a").unwrap().mods, Modifiers::ALT);
        assert_eq!(parse_chord("option+a").unwrap().mods, Modifiers::ALT);
        assert_eq!(parse_chord("cmd+a").unwrap().mods, Modifiers::SUPER);
        assert_eq!(parse_chord("⌘+a").unwrap().mods, Modifiers::SUPER);
        assert_eq!(parse_chord("^+a").unwrap().mods, Modifiers::CTRL);
        assert_eq!(parse_chord("CTRL+ALT+a").unwrap().mods, Modifiers::CTRL | Modifiers::ALT);
    }

    #[test]
    fn parse_single_character_keys() {
        assert_eq!(parse_chord("%").unwrap().key, Key::Char('%'));
        assert_eq!(parse_chord("n").unwrap().key, Key::Char('n'));
        assert_eq!(parse_chord("\"").unwrap().key, Key::Char('"'));
        assert!(parse_chord("n").unwrap().mods.is_empty());
    }

    #[test]
    fn uppercase_letter_implies_shift() {
        let chord = parse_chord("ctrl+B").unwrap();
        assert_eq!(chord, parse_chord("ctrl+shift+b").unwrap());
    }

    #[test]
    fn parse_named_keys() {
        assert_eq!(parse_chord("enter").unwrap().key, Key::Named(NamedKey::Enter));
        assert_eq!(parse_chord("Return").unwrap().key, Key::Named(NamedKey::Enter));
        assert_eq!(parse_chord("esc").unwrap().key, Key::Named(NamedKey::Escape));
        assert_eq!(parse_chord("alt+left").unwrap().key, Key::Named(NamedKey::Left));
        assert_eq!(parse_chord("page_down").unwrap().key, Key::Named(NamedKey::PageDown));
        assert_eq!(parse_chord("shift+f5").unwrap().key, Key::Named(NamedKey::F(5)));
        assert_eq!(parse_chord("F12").unwrap().key, Key::Named(NamedKey::F(12)));
    }

    #[test]
    fn parse_punctuation_aliases() {
        assert_eq!(parse_chord("ctrl+plus").unwrap().key, Key::Char('+'));
        assert_eq!(parse_chord("greater").unwrap().key, Key::Char('>'));
        assert_eq!(parse_chord("space").unwrap().key, Key::Char(' '));
        assert_eq!(parse_chord("less").unwrap().key, Key::Char('<'));
        // Sequences have to be split before parsing.
        assert!(parse_chord("ctrl+w>less").is_err());
    }

    #[test]
    fn duplicate_modifiers_collapse() {
        let chord = parse_chord("ctrl+ctrl+a").unwrap();
        assert_eq!(chord.mods, Modifiers::CTRL);
    }

    #[test]
    fn whitespace_is_trimmed() {
        let chord = parse_chord(" ctrl + a ").unwrap();
        assert_eq!(chord, parse_chord("ctrl+a").unwrap());
    }

    #[test]
    fn malformed_chords_rejected() {
        for bad in ["", "   ", "ctrl+", "+a", "ctrl++a", "banana+a", "f13", "f0", "notakey"] {
            let err = parse_chord(bad).unwrap_err();
            assert!(
                matches!(err, KeyError::MalformedChord(_)),
                "{bad:?} should be malformed"
            );
        }
    }

    #[test]
    fn split_sequence_in_order() {
        assert_eq!(split_sequence("ctrl+b>n").unwrap(), vec!["ctrl+b", "n"]);
        assert_eq!(split_sequence("ctrl+w").unwrap(), vec!["ctrl+w"]);
        assert_eq!(
            split_sequence("ctrl+b > shift+5 > enter").unwrap(),
            vec!["ctrl+b", "shift+5", "enter"]
        );
    }

    #[test]
    fn split_sequence_rejects_empty_elements() {
        assert!(split_sequence("").is_err());
        assert!(split_sequence("ctrl+b>>n").is_err());
        assert!(split_sequence("ctrl+b>").is_err());
        assert!(split_sequence(">n").is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for s in ["ctrl+shift+x", "alt+left", "ctrl+b", "%", "super+f5", "ctrl+plus", "greater", "space"] {
            let chord = parse_chord(s).unwrap();
            let shown = chord.to_string();
            assert_eq!(parse_chord(&shown).unwrap(), chord, "display of {s:?} was {shown:?}");
        }
    }

    #[test]
    fn display_orders_modifiers() {
        let chord = parse_chord("shift+ctrl+x").unwrap();
        assert_eq!(chord.to_string(), "ctrl+shift+x");
    }

    #[test]
    fn chord_serialization_roundtrip() {
        let chord = parse_chord("ctrl+alt+pageup").unwrap();
        let json = serde_json::to_string(&chord).unwrap();
        let back: KeyChord = serde_json::from_str(&json).unwrap();
        assert_eq!(chord, back);
    }
}
