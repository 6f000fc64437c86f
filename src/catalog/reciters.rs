// Reciter table: select-option value -> CDN audio slug + display name.

#[derive(Debug, PartialEq, Eq)]
pub struct Reciter {
    pub id: &'static str,
    pub audio_slug: &'static str,
    pub display_name: &'static str,
}

pub static RECITERS: [Reciter; 5] = [
    Reciter {
        id: "AbdulBaset_AbdulSamad",
        audio_slug: "ar.abdulbasitmurattal",
        display_name: "AbdulBaset AbdulSamad",
    },
    Reciter {
        id: "Abdul_Basit_Murattal",
        audio_slug: "ar.abdulbasitmurattal",
        display_name: "Abdul Basit Murattal",
    },
    Reciter {
        id: "Abdur_Rahman_as-Sudais",
        audio_slug: "ar.abdurrahmaansudais",
        display_name: "Abdur-Rahman as-Sudais",
    },
    Reciter {
        id: "Mishary_Rashid_Alafasy",
        audio_slug: "ar.alafasy",
        display_name: "Mishary Rashid Alafasy",
    },
    Reciter {
        id: "Sa'ud_ash-Shuraym",
        audio_slug: "ar.shaatree",
        display_name: "Sa'ud ash-Shuraym",
    },
];

/// First option of the reciter select.
pub fn default_reciter() -> &'static Reciter {
    &RECITERS[0]
}

/// The spotlight always plays Alafasy, whatever is selected.
pub fn spotlight_reciter() -> &'static Reciter {
    &RECITERS[3]
}

pub fn find_reciter(id: &str) -> Option<&'static Reciter> {
    RECITERS.iter().find(|r| r.id == id)
}
