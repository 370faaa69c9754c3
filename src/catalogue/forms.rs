//! Compiled-in life form table
//!
//! Table order is match priority: when two forms could claim the same
//! footprint, the one listed first wins.

use crate::core::types::FormKind;

/// Bumped whenever a mask or the table order changes
pub const CATALOGUE_VERSION: u32 = 1;

/// Canonical description of a life form: one text mask per phase
#[derive(Debug, Clone, Copy)]
pub struct FormSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub kind: FormKind,
    pub phases: &'static [&'static [&'static str]],
}

impl FormSpec {
    pub fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }
}

/// Forms recognised when a run does not configure its own list
pub const DEFAULT_FORMS: &[&str] = &[
    "block",
    "blinker",
    "toad",
    "beacon",
    "glider",
    "light-weight spaceship",
];

pub const STANDARD_FORMS: &[FormSpec] = &[
    FormSpec {
        name: "block",
        aliases: &[],
        kind: FormKind::StillLife,
        phases: &[&["....", ".OO.", ".OO.", "...."]],
    },
    FormSpec {
        name: "blinker",
        aliases: &[],
        kind: FormKind::Oscillator,
        phases: &[
            &[".O.", ".O.", ".O."],
            &["...", "OOO", "..."],
        ],
    },
    FormSpec {
        name: "toad",
        aliases: &[],
        kind: FormKind::Oscillator,
        phases: &[
            &["..O.", "O..O", "O..O", ".O.."],
            &[".OOO", "OOO."],
        ],
    },
    FormSpec {
        name: "beacon",
        aliases: &[],
        kind: FormKind::Oscillator,
        phases: &[
            &["OO..", "OO..", "..OO", "..OO"],
            &["OO..", "O...", "...O", "..OO"],
        ],
    },
    FormSpec {
        name: "glider",
        aliases: &[],
        kind: FormKind::Spaceship,
        phases: &[
            &[".O.", "..O", "OOO"],
            &["O.O", ".OO", ".O."],
            &["..O", "O.O", ".OO"],
            &["O..", ".OO", "OO."],
        ],
    },
    FormSpec {
        name: "light-weight spaceship",
        aliases: &["lwss", "lwspaceship"],
        kind: FormKind::Spaceship,
        phases: &[
            &["O..O.", "....O", "O...O", ".OOOO"],
            &["..OO.", "OO.OO", "OOOO.", ".OO.."],
            &[".OOOO", "O...O", "....O", "O..O."],
            &[".OO..", "OOOO.", "OO.OO", "..OO."],
        ],
    },
    FormSpec {
        name: "beehive",
        aliases: &[],
        kind: FormKind::StillLife,
        phases: &[&[".OO.", "O..O", ".OO."]],
    },
    FormSpec {
        name: "loaf",
        aliases: &[],
        kind: FormKind::StillLife,
        phases: &[&[".OO.", "O..O", ".O.O", "..O."]],
    },
    FormSpec {
        name: "boat",
        aliases: &[],
        kind: FormKind::StillLife,
        phases: &[&["OO.", "O.O", ".O."]],
    },
    FormSpec {
        name: "tub",
        aliases: &[],
        kind: FormKind::StillLife,
        phases: &[&[".O.", "O.O", ".O."]],
    },
];

/// Position of a form in the compiled-in table
pub fn find_spec(name: &str) -> Option<usize> {
    STANDARD_FORMS.iter().position(|spec| spec.answers_to(name))
}
