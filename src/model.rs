//! Static data model for the touch control overlay.
//! Button identifiers and the key map must match what the emulator's
//! keyboard handler expects; do not edit values without checking it.

/// Association from logical button identifier to the simulated keyboard key.
/// The downstream handler matches on these exact key values.
pub const KEY_MAP: [(&str, &str); 28] = [
    ("start", "Enter"),
    ("select", " "),
    ("l", "e"),
    ("l2", "r"),
    ("r", "p"),
    ("r2", "o"),
    ("a", "h"),
    ("b", "g"),
    ("x", "y"),
    ("y", "t"),
    ("up", "ArrowUp"),
    ("down", "ArrowDown"),
    ("left", "ArrowLeft"),
    ("right", "ArrowRight"),
    ("l_x_minus", "a"),
    ("l_x_plus", "d"),
    ("l_y_minus", "w"),
    ("l_y_plus", "s"),
    ("l3", "x"),
    ("r_x_minus", "j"),
    ("r_x_plus", "l"),
    ("r_y_minus", "i"),
    ("r_y_plus", "k"),
    ("r3", ","),
    ("menu", "F1"),
    ("save_state", "F2"),
    ("load_state", "F3"),
    ("screenshot", "F4"),
];

/// Key value simulated for `button_id`, if the button is mapped.
/// Unmapped buttons still track pressed state but emit no events.
pub fn key_for(button_id: &str) -> Option<&'static str> {
    KEY_MAP
        .iter()
        .find(|(id, _)| *id == button_id)
        .map(|(_, key)| *key)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StickSide {
    Left,
    Right,
}

impl StickSide {
    pub fn id(self) -> &'static str {
        match self {
            StickSide::Left => "l",
            StickSide::Right => "r",
        }
    }
}

/// Derived direction of an analog stick axis past its threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StickDir {
    XMinus,
    XPlus,
    YMinus,
    YPlus,
}

impl StickDir {
    pub const ALL: [StickDir; 4] = [
        StickDir::XMinus,
        StickDir::XPlus,
        StickDir::YMinus,
        StickDir::YPlus,
    ];

    pub fn index(self) -> usize {
        match self {
            StickDir::XMinus => 0,
            StickDir::XPlus => 1,
            StickDir::YMinus => 2,
            StickDir::YPlus => 3,
        }
    }
}

/// Compound button identifier for one stick direction ("l_x_minus" etc.).
/// The control set is closed, so this resolves to static strings instead of
/// formatting at runtime.
pub fn stick_button_id(side: StickSide, dir: StickDir) -> &'static str {
    match (side, dir) {
        (StickSide::Left, StickDir::XMinus) => "l_x_minus",
        (StickSide::Left, StickDir::XPlus) => "l_x_plus",
        (StickSide::Left, StickDir::YMinus) => "l_y_minus",
        (StickSide::Left, StickDir::YPlus) => "l_y_plus",
        (StickSide::Right, StickDir::XMinus) => "r_x_minus",
        (StickSide::Right, StickDir::XPlus) => "r_x_plus",
        (StickSide::Right, StickDir::YMinus) => "r_y_minus",
        (StickSide::Right, StickDir::YPlus) => "r_y_plus",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_map_matches_handler_contract() {
        // Regression pin: the emulator's keyboard handler was built against
        // these exact pairs.
        let expected: [(&str, &str); 28] = [
            ("start", "Enter"),
            ("select", " "),
            ("l", "e"),
            ("l2", "r"),
            ("r", "p"),
            ("r2", "o"),
            ("a", "h"),
            ("b", "g"),
            ("x", "y"),
            ("y", "t"),
            ("up", "ArrowUp"),
            ("down", "ArrowDown"),
            ("left", "ArrowLeft"),
            ("right", "ArrowRight"),
            ("l_x_minus", "a"),
            ("l_x_plus", "d"),
            ("l_y_minus", "w"),
            ("l_y_plus", "s"),
            ("l3", "x"),
            ("r_x_minus", "j"),
            ("r_x_plus", "l"),
            ("r_y_minus", "i"),
            ("r_y_plus", "k"),
            ("r3", ","),
            ("menu", "F1"),
            ("save_state", "F2"),
            ("load_state", "F3"),
            ("screenshot", "F4"),
        ];
        assert_eq!(KEY_MAP, expected);
    }

    #[test]
    fn key_map_ids_are_unique() {
        for (i, (id, _)) in KEY_MAP.iter().enumerate() {
            assert!(
                KEY_MAP.iter().skip(i + 1).all(|(other, _)| other != id),
                "duplicate button id {id}"
            );
        }
    }

    #[test]
    fn key_for_lookup() {
        assert_eq!(key_for("a"), Some("h"));
        assert_eq!(key_for("select"), Some(" "));
        assert_eq!(key_for("screenshot"), Some("F4"));
        assert_eq!(key_for("not_a_button"), None);
    }

    #[test]
    fn every_stick_direction_is_mapped() {
        for side in [StickSide::Left, StickSide::Right] {
            for dir in StickDir::ALL {
                let id = stick_button_id(side, dir);
                assert!(key_for(id).is_some(), "unmapped stick button {id}");
            }
        }
    }
}
