//! Per-language name tables.
//!
//! Language names depend on both the reader's language and the grammatical
//! slot they fill, so each use site has its own table keyed by native
//! language, then by target language.

/// A table of `(language code, name)` pairs.
pub type NameTable = &'static [(&'static str, &'static str)];

/// Find `key` in a static table.
pub fn lookup<V: Copy>(table: &[(&'static str, V)], key: &str) -> Option<V> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Name of `target` in the native table, falling back to the English table
/// when `native` has none.
fn name_in(
    tables: &[(&'static str, NameTable)],
    native: &str,
    target: &str,
) -> Option<&'static str> {
    let names = lookup(tables, native).or_else(|| lookup(tables, "en"))?;
    lookup(names, target)
}

/// A language's name for itself (e.g. `de` → `Deutsch`).
pub fn endonym(code: &str) -> Option<&'static str> {
    lookup(ENDONYMS, code)
}

/// Target language name for titles, in the reader's language.
pub fn title_name(native: &str, target: &str) -> Option<&'static str> {
    name_in(TITLE_NAMES, native, target)
}

/// Target language name for meta descriptions, in the reader's language.
pub fn description_name(native: &str, target: &str) -> Option<&'static str> {
    name_in(DESCRIPTION_NAMES, native, target)
}

/// Target language name for call-to-action sentences, in the reader's language.
pub fn cta_name(native: &str, target: &str) -> Option<&'static str> {
    name_in(CTA_NAMES, native, target)
}

/// Each language's name for itself.
pub const ENDONYMS: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Español"),
    ("fr", "Français"),
    ("de", "Deutsch"),
    ("it", "Italiano"),
    ("pt", "Português"),
    ("pl", "Polski"),
    ("ro", "Română"),
    ("nl", "Nederlands"),
    ("ru", "Русский"),
    ("uk", "Українська"),
    ("cs", "Čeština"),
    ("sv", "Svenska"),
    ("da", "Dansk"),
    ("no", "Norsk"),
    ("el", "Ελληνικά"),
    ("hu", "Magyar"),
    ("tr", "Türkçe"),
];

/// Language names as they appear in article titles, keyed by native language.
pub const TITLE_NAMES: &[(&str, NameTable)] = &[
    (
        "en",
        &[
            ("en", "English"),
            ("es", "Spanish"),
            ("fr", "French"),
            ("de", "German"),
            ("it", "Italian"),
            ("pt", "Portuguese"),
            ("pl", "Polish"),
            ("ro", "Romanian"),
            ("nl", "Dutch"),
            ("ru", "Russian"),
            ("uk", "Ukrainian"),
            ("cs", "Czech"),
            ("sv", "Swedish"),
            ("da", "Danish"),
            ("no", "Norwegian"),
            ("el", "Greek"),
            ("hu", "Hungarian"),
            ("tr", "Turkish"),
        ],
    ),
    (
        "es",
        &[
            ("en", "Inglés"),
            ("es", "Español"),
            ("fr", "Francés"),
            ("de", "Alemán"),
            ("it", "Italiano"),
            ("pt", "Portugués"),
            ("pl", "Polaco"),
            ("ro", "Rumano"),
            ("nl", "Neerlandés"),
            ("ru", "Ruso"),
            ("uk", "Ucraniano"),
            ("cs", "Checo"),
            ("sv", "Sueco"),
            ("da", "Danés"),
            ("no", "Noruego"),
            ("el", "Griego"),
            ("hu", "Húngaro"),
            ("tr", "Turco"),
        ],
    ),
    (
        "fr",
        &[
            ("en", "Anglais"),
            ("es", "Espagnol"),
            ("fr", "Français"),
            ("de", "Allemand"),
            ("it", "Italien"),
            ("pt", "Portugais"),
            ("pl", "Polonais"),
            ("ro", "Roumain"),
            ("nl", "Néerlandais"),
            ("ru", "Russe"),
            ("uk", "Ukrainien"),
            ("cs", "Tchèque"),
            ("sv", "Suédois"),
            ("da", "Danois"),
            ("no", "Norvégien"),
            ("el", "Grec"),
            ("hu", "Hongrois"),
            ("tr", "Turc"),
        ],
    ),
    (
        "de",
        &[
            ("en", "Englisch"),
            ("es", "Spanisch"),
            ("fr", "Französisch"),
            ("de", "Deutsch"),
            ("it", "Italienisch"),
            ("pt", "Portugiesisch"),
            ("pl", "Polnisch"),
            ("ro", "Rumänisch"),
            ("nl", "Niederländisch"),
            ("ru", "Russisch"),
            ("uk", "Ukrainisch"),
            ("cs", "Tschechisch"),
            ("sv", "Schwedisch"),
            ("da", "Dänisch"),
            ("no", "Norwegisch"),
            ("el", "Griechisch"),
            ("hu", "Ungarisch"),
            ("tr", "Türkisch"),
        ],
    ),
    (
        "it",
        &[
            ("en", "Inglese"),
            ("es", "Spagnolo"),
            ("fr", "Francese"),
            ("de", "Tedesco"),
            ("it", "Italiano"),
            ("pt", "Portoghese"),
            ("pl", "Polacco"),
            ("ro", "Rumeno"),
            ("nl", "Olandese"),
            ("ru", "Russo"),
            ("uk", "Ucraino"),
            ("cs", "Ceco"),
            ("sv", "Svedese"),
            ("da", "Danese"),
            ("no", "Norvegese"),
            ("el", "Greco"),
            ("hu", "Ungherese"),
            ("tr", "Turco"),
        ],
    ),
    (
        "pt",
        &[
            ("en", "Inglês"),
            ("es", "Espanhol"),
            ("fr", "Francês"),
            ("de", "Alemão"),
            ("it", "Italiano"),
            ("pt", "Português"),
            ("pl", "Polonês"),
            ("ro", "Romeno"),
            ("nl", "Holandês"),
            ("ru", "Russo"),
            ("uk", "Ucraniano"),
            ("cs", "Tcheco"),
            ("sv", "Sueco"),
            ("da", "Dinamarquês"),
            ("no", "Norueguês"),
            ("el", "Grego"),
            ("hu", "Húngaro"),
            ("tr", "Turco"),
        ],
    ),
    (
        "pl",
        &[
            ("en", "angielsku"),
            ("es", "hiszpańsku"),
            ("fr", "francusku"),
            ("de", "niemiecku"),
            ("it", "włosku"),
            ("pt", "portugalsku"),
            ("pl", "polsku"),
            ("ro", "rumuńsku"),
            ("nl", "niderlandzku"),
            ("ru", "rosyjsku"),
            ("uk", "ukraińsku"),
            ("cs", "czesku"),
            ("sv", "szwedzku"),
            ("da", "duńsku"),
            ("no", "norwesku"),
            ("el", "grecku"),
            ("hu", "węgiersku"),
            ("tr", "turecku"),
        ],
    ),
    (
        "ro",
        &[
            ("en", "engleză"),
            ("es", "spaniolă"),
            ("fr", "franceză"),
            ("de", "germană"),
            ("it", "italiană"),
            ("pt", "portugheză"),
            ("pl", "polonă"),
            ("ro", "română"),
            ("nl", "olandeză"),
            ("ru", "rusă"),
            ("uk", "ucraineană"),
            ("cs", "cehă"),
            ("sv", "suedeză"),
            ("da", "daneză"),
            ("no", "norvegiană"),
            ("el", "greacă"),
            ("hu", "maghiară"),
            ("tr", "turcă"),
        ],
    ),
    (
        "nl",
        &[
            ("en", "Engels"),
            ("es", "Spaans"),
            ("fr", "Frans"),
            ("de", "Duits"),
            ("it", "Italiaans"),
            ("pt", "Portugees"),
            ("pl", "Pools"),
            ("ro", "Roemeens"),
            ("nl", "Nederlands"),
            ("ru", "Russisch"),
            ("uk", "Oekraïens"),
            ("cs", "Tsjechisch"),
            ("sv", "Zweeds"),
            ("da", "Deens"),
            ("no", "Noors"),
            ("el", "Grieks"),
            ("hu", "Hongaars"),
            ("tr", "Turks"),
        ],
    ),
    (
        "ru",
        &[
            ("en", "английском"),
            ("es", "испанском"),
            ("fr", "французском"),
            ("de", "немецком"),
            ("it", "итальянском"),
            ("pt", "португальском"),
            ("pl", "польском"),
            ("ro", "румынском"),
            ("nl", "голландском"),
            ("ru", "русском"),
            ("uk", "украинском"),
            ("cs", "чешском"),
            ("sv", "шведском"),
            ("da", "датском"),
            ("no", "норвежском"),
            ("el", "греческом"),
            ("hu", "венгерском"),
            ("tr", "турецком"),
        ],
    ),
    (
        "uk",
        &[
            ("en", "англійської"),
            ("es", "іспанської"),
            ("fr", "французької"),
            ("de", "німецької"),
            ("it", "італійської"),
            ("pt", "португальської"),
            ("pl", "польської"),
            ("ro", "румунської"),
            ("nl", "нідерландської"),
            ("ru", "російської"),
            ("uk", "української"),
            ("cs", "чеської"),
            ("sv", "шведської"),
            ("da", "данської"),
            ("no", "норвезької"),
            ("el", "грецької"),
            ("hu", "угорської"),
            ("tr", "турецької"),
        ],
    ),
    (
        "cs",
        &[
            ("en", "anglicky"),
            ("es", "španělsky"),
            ("fr", "francouzsky"),
            ("de", "německy"),
            ("it", "italsky"),
            ("pt", "portugalsky"),
            ("pl", "polsky"),
            ("ro", "rumunsky"),
            ("nl", "holandsky"),
            ("ru", "rusky"),
            ("uk", "ukrajinsky"),
            ("cs", "česky"),
            ("sv", "švédsky"),
            ("da", "dánsky"),
            ("no", "norsky"),
            ("el", "řecky"),
            ("hu", "maďarsky"),
            ("tr", "turecky"),
        ],
    ),
    (
        "sv",
        &[
            ("en", "engelska"),
            ("es", "spanska"),
            ("fr", "franska"),
            ("de", "tyska"),
            ("it", "italienska"),
            ("pt", "portugisiska"),
            ("pl", "polska"),
            ("ro", "rumänska"),
            ("nl", "nederländska"),
            ("ru", "ryska"),
            ("uk", "ukrainska"),
            ("cs", "tjeckiska"),
            ("sv", "svenska"),
            ("da", "danska"),
            ("no", "norska"),
            ("el", "grekiska"),
            ("hu", "ungerska"),
            ("tr", "turkiska"),
        ],
    ),
    (
        "da",
        &[
            ("en", "engelsk"),
            ("es", "spansk"),
            ("fr", "fransk"),
            ("de", "tysk"),
            ("it", "italiensk"),
            ("pt", "portugisisk"),
            ("pl", "polsk"),
            ("ro", "rumænsk"),
            ("nl", "nederlandsk"),
            ("ru", "russisk"),
            ("uk", "ukrainsk"),
            ("cs", "tjekkisk"),
            ("sv", "svensk"),
            ("da", "dansk"),
            ("no", "norsk"),
            ("el", "græsk"),
            ("hu", "ungarsk"),
            ("tr", "tyrkisk"),
        ],
    ),
    (
        "no",
        &[
            ("en", "engelsk"),
            ("es", "spansk"),
            ("fr", "fransk"),
            ("de", "tysk"),
            ("it", "italiensk"),
            ("pt", "portugisisk"),
            ("pl", "polsk"),
            ("ro", "rumensk"),
            ("nl", "nederlandsk"),
            ("ru", "russisk"),
            ("uk", "ukrainsk"),
            ("cs", "tsjekkisk"),
            ("sv", "svensk"),
            ("da", "dansk"),
            ("no", "norsk"),
            ("el", "gresk"),
            ("hu", "ungarsk"),
            ("tr", "tyrkisk"),
        ],
    ),
    (
        "el",
        &[
            ("en", "αγγλικά"),
            ("es", "ισπανικά"),
            ("fr", "γαλλικά"),
            ("de", "γερμανικά"),
            ("it", "ιταλικά"),
            ("pt", "πορτογαλικά"),
            ("pl", "πολωνικά"),
            ("ro", "ρουμανικά"),
            ("nl", "ολλανδικά"),
            ("ru", "ρωσικά"),
            ("uk", "ουκρανικά"),
            ("cs", "τσεχικά"),
            ("sv", "σουηδικά"),
            ("da", "δανικά"),
            ("no", "νορβηγικά"),
            ("el", "ελληνικά"),
            ("hu", "ουγγρικά"),
            ("tr", "τουρκικά"),
        ],
    ),
    (
        "hu",
        &[
            ("en", "angol"),
            ("es", "spanyol"),
            ("fr", "francia"),
            ("de", "német"),
            ("it", "olasz"),
            ("pt", "portugál"),
            ("pl", "lengyel"),
            ("ro", "román"),
            ("nl", "holland"),
            ("ru", "orosz"),
            ("uk", "ukrán"),
            ("cs", "cseh"),
            ("sv", "svéd"),
            ("da", "dán"),
            ("no", "norvég"),
            ("el", "görög"),
            ("hu", "magyar"),
            ("tr", "török"),
        ],
    ),
    (
        "tr",
        &[
            ("en", "İngilizce"),
            ("es", "İspanyolca"),
            ("fr", "Fransızca"),
            ("de", "Almanca"),
            ("it", "İtalyanca"),
            ("pt", "Portekizce"),
            ("pl", "Lehçe"),
            ("ro", "Rumence"),
            ("nl", "Felemenkçe"),
            ("ru", "Rusça"),
            ("uk", "Ukraynaca"),
            ("cs", "Çekçe"),
            ("sv", "İsveççe"),
            ("da", "Danca"),
            ("no", "Norveççe"),
            ("el", "Yunanca"),
            ("hu", "Macarca"),
            ("tr", "Türkçe"),
        ],
    ),
];

/// Language names as they appear in meta descriptions, keyed by native language.
pub const DESCRIPTION_NAMES: &[(&str, NameTable)] = &[
    (
        "en",
        &[
            ("en", "English"),
            ("es", "Spanish"),
            ("fr", "French"),
            ("de", "German"),
            ("it", "Italian"),
            ("pt", "Portuguese"),
            ("pl", "Polish"),
            ("ro", "Romanian"),
            ("nl", "Dutch"),
            ("ru", "Russian"),
            ("uk", "Ukrainian"),
            ("cs", "Czech"),
            ("sv", "Swedish"),
            ("da", "Danish"),
            ("no", "Norwegian"),
            ("el", "Greek"),
            ("hu", "Hungarian"),
            ("tr", "Turkish"),
        ],
    ),
    (
        "es",
        &[
            ("en", "inglés"),
            ("es", "español"),
            ("fr", "francés"),
            ("de", "alemán"),
            ("it", "italiano"),
            ("pt", "portugués"),
            ("pl", "polaco"),
            ("ro", "rumano"),
            ("nl", "neerlandés"),
            ("ru", "ruso"),
            ("uk", "ucraniano"),
            ("cs", "checo"),
            ("sv", "sueco"),
            ("da", "danés"),
            ("no", "noruego"),
            ("el", "griego"),
            ("hu", "húngaro"),
            ("tr", "turco"),
        ],
    ),
    (
        "fr",
        &[
            ("en", "anglais"),
            ("es", "espagnol"),
            ("fr", "français"),
            ("de", "allemand"),
            ("it", "italien"),
            ("pt", "portugais"),
            ("pl", "polonais"),
            ("ro", "roumain"),
            ("nl", "néerlandais"),
            ("ru", "russe"),
            ("uk", "ukrainien"),
            ("cs", "tchèque"),
            ("sv", "suédois"),
            ("da", "danois"),
            ("no", "norvégien"),
            ("el", "grec"),
            ("hu", "hongrois"),
            ("tr", "turc"),
        ],
    ),
    (
        "de",
        &[
            ("en", "Englisch"),
            ("es", "Spanisch"),
            ("fr", "Französisch"),
            ("de", "Deutsch"),
            ("it", "Italienisch"),
            ("pt", "Portugiesisch"),
            ("pl", "Polnisch"),
            ("ro", "Rumänisch"),
            ("nl", "Niederländisch"),
            ("ru", "Russisch"),
            ("uk", "Ukrainisch"),
            ("cs", "Tschechisch"),
            ("sv", "Schwedisch"),
            ("da", "Dänisch"),
            ("no", "Norwegisch"),
            ("el", "Griechisch"),
            ("hu", "Ungarisch"),
            ("tr", "Türkisch"),
        ],
    ),
    (
        "it",
        &[
            ("en", "inglese"),
            ("es", "spagnolo"),
            ("fr", "francese"),
            ("de", "tedesco"),
            ("it", "italiano"),
            ("pt", "portoghese"),
            ("pl", "polacco"),
            ("ro", "rumeno"),
            ("nl", "olandese"),
            ("ru", "russo"),
            ("uk", "ucraino"),
            ("cs", "ceco"),
            ("sv", "svedese"),
            ("da", "danese"),
            ("no", "norvegese"),
            ("el", "greco"),
            ("hu", "ungherese"),
            ("tr", "turco"),
        ],
    ),
    (
        "pt",
        &[
            ("en", "inglês"),
            ("es", "espanhol"),
            ("fr", "francês"),
            ("de", "alemão"),
            ("it", "italiano"),
            ("pt", "português"),
            ("pl", "polonês"),
            ("ro", "romeno"),
            ("nl", "holandês"),
            ("ru", "russo"),
            ("uk", "ucraniano"),
            ("cs", "tcheco"),
            ("sv", "sueco"),
            ("da", "dinamarquês"),
            ("no", "norueguês"),
            ("el", "grego"),
            ("hu", "húngaro"),
            ("tr", "turco"),
        ],
    ),
    (
        "pl",
        &[
            ("en", "angielsku"),
            ("es", "hiszpańsku"),
            ("fr", "francusku"),
            ("de", "niemiecku"),
            ("it", "włosku"),
            ("pt", "portugalsku"),
            ("pl", "polsku"),
            ("ro", "rumuńsku"),
            ("nl", "niderlandzku"),
            ("ru", "rosyjsku"),
            ("uk", "ukraińsku"),
            ("cs", "czesku"),
            ("sv", "szwedzku"),
            ("da", "duńsku"),
            ("no", "norwesku"),
            ("el", "grecku"),
            ("hu", "węgiersku"),
            ("tr", "turecku"),
        ],
    ),
    (
        "ro",
        &[
            ("en", "engleză"),
            ("es", "spaniolă"),
            ("fr", "franceză"),
            ("de", "germană"),
            ("it", "italiană"),
            ("pt", "portugheză"),
            ("pl", "polonă"),
            ("ro", "română"),
            ("nl", "olandeză"),
            ("ru", "rusă"),
            ("uk", "ucraineană"),
            ("cs", "cehă"),
            ("sv", "suedeză"),
            ("da", "daneză"),
            ("no", "norvegiană"),
            ("el", "greacă"),
            ("hu", "maghiară"),
            ("tr", "turcă"),
        ],
    ),
    (
        "nl",
        &[
            ("en", "Engels"),
            ("es", "Spaans"),
            ("fr", "Frans"),
            ("de", "Duits"),
            ("it", "Italiaans"),
            ("pt", "Portugees"),
            ("pl", "Pools"),
            ("ro", "Roemeens"),
            ("nl", "Nederlands"),
            ("ru", "Russisch"),
            ("uk", "Oekraïens"),
            ("cs", "Tsjechisch"),
            ("sv", "Zweeds"),
            ("da", "Deens"),
            ("no", "Noors"),
            ("el", "Grieks"),
            ("hu", "Hongaars"),
            ("tr", "Turks"),
        ],
    ),
    (
        "ru",
        &[
            ("en", "английском"),
            ("es", "испанском"),
            ("fr", "французском"),
            ("de", "немецком"),
            ("it", "итальянском"),
            ("pt", "португальском"),
            ("pl", "польском"),
            ("ro", "румынском"),
            ("nl", "голландском"),
            ("ru", "русском"),
            ("uk", "украинском"),
            ("cs", "чешском"),
            ("sv", "шведском"),
            ("da", "датском"),
            ("no", "норвежском"),
            ("el", "греческом"),
            ("hu", "венгерском"),
            ("tr", "турецком"),
        ],
    ),
    (
        "uk",
        &[
            ("en", "англійської"),
            ("es", "іспанської"),
            ("fr", "французької"),
            ("de", "німецької"),
            ("it", "італійської"),
            ("pt", "португальської"),
            ("pl", "польської"),
            ("ro", "румунської"),
            ("nl", "нідерландської"),
            ("ru", "російської"),
            ("uk", "української"),
            ("cs", "чеської"),
            ("sv", "шведської"),
            ("da", "данської"),
            ("no", "норвезької"),
            ("el", "грецької"),
            ("hu", "угорської"),
            ("tr", "турецької"),
        ],
    ),
    (
        "cs",
        &[
            ("en", "anglicky"),
            ("es", "španělsky"),
            ("fr", "francouzsky"),
            ("de", "německy"),
            ("it", "italsky"),
            ("pt", "portugalsky"),
            ("pl", "polsky"),
            ("ro", "rumunsky"),
            ("nl", "holandsky"),
            ("ru", "rusky"),
            ("uk", "ukrajinsky"),
            ("cs", "česky"),
            ("sv", "švédsky"),
            ("da", "dánsky"),
            ("no", "norsky"),
            ("el", "řecky"),
            ("hu", "maďarsky"),
            ("tr", "turecky"),
        ],
    ),
    (
        "sv",
        &[
            ("en", "engelska"),
            ("es", "spanska"),
            ("fr", "franska"),
            ("de", "tyska"),
            ("it", "italienska"),
            ("pt", "portugisiska"),
            ("pl", "polska"),
            ("ro", "rumänska"),
            ("nl", "nederländska"),
            ("ru", "ryska"),
            ("uk", "ukrainska"),
            ("cs", "tjeckiska"),
            ("sv", "svenska"),
            ("da", "danska"),
            ("no", "norska"),
            ("el", "grekiska"),
            ("hu", "ungerska"),
            ("tr", "turkiska"),
        ],
    ),
    (
        "da",
        &[
            ("en", "engelsk"),
            ("es", "spansk"),
            ("fr", "fransk"),
            ("de", "tysk"),
            ("it", "italiensk"),
            ("pt", "portugisisk"),
            ("pl", "polsk"),
            ("ro", "rumænsk"),
            ("nl", "nederlandsk"),
            ("ru", "russisk"),
            ("uk", "ukrainsk"),
            ("cs", "tjekkisk"),
            ("sv", "svensk"),
            ("da", "dansk"),
            ("no", "norsk"),
            ("el", "græsk"),
            ("hu", "ungarsk"),
            ("tr", "tyrkisk"),
        ],
    ),
    (
        "no",
        &[
            ("en", "engelsk"),
            ("es", "spansk"),
            ("fr", "fransk"),
            ("de", "tysk"),
            ("it", "italiensk"),
            ("pt", "portugisisk"),
            ("pl", "polsk"),
            ("ro", "rumensk"),
            ("nl", "nederlandsk"),
            ("ru", "russisk"),
            ("uk", "ukrainsk"),
            ("cs", "tsjekkisk"),
            ("sv", "svensk"),
            ("da", "dansk"),
            ("no", "norsk"),
            ("el", "gresk"),
            ("hu", "ungarsk"),
            ("tr", "tyrkisk"),
        ],
    ),
    (
        "el",
        &[
            ("en", "αγγλικά"),
            ("es", "ισπανικά"),
            ("fr", "γαλλικά"),
            ("de", "γερμανικά"),
            ("it", "ιταλικά"),
            ("pt", "πορτογαλικά"),
            ("pl", "πολωνικά"),
            ("ro", "ρουμανικά"),
            ("nl", "ολλανδικά"),
            ("ru", "ρωσικά"),
            ("uk", "ουκρανικά"),
            ("cs", "τσεχικά"),
            ("sv", "σουηδικά"),
            ("da", "δανικά"),
            ("no", "νορβηγικά"),
            ("el", "ελληνικά"),
            ("hu", "ουγγρικά"),
            ("tr", "τουρκικά"),
        ],
    ),
    (
        "hu",
        &[
            ("en", "angol"),
            ("es", "spanyol"),
            ("fr", "francia"),
            ("de", "német"),
            ("it", "olasz"),
            ("pt", "portugál"),
            ("pl", "lengyel"),
            ("ro", "román"),
            ("nl", "holland"),
            ("ru", "orosz"),
            ("uk", "ukrán"),
            ("cs", "cseh"),
            ("sv", "svéd"),
            ("da", "dán"),
            ("no", "norvég"),
            ("el", "görög"),
            ("hu", "magyar"),
            ("tr", "török"),
        ],
    ),
    (
        "tr",
        &[
            ("en", "İngilizce"),
            ("es", "İspanyolca"),
            ("fr", "Fransızca"),
            ("de", "Almanca"),
            ("it", "İtalyanca"),
            ("pt", "Portekizce"),
            ("pl", "Lehçe"),
            ("ro", "Rumence"),
            ("nl", "Felemenkçe"),
            ("ru", "Rusça"),
            ("uk", "Ukraynaca"),
            ("cs", "Çekçe"),
            ("sv", "İsveççe"),
            ("da", "Danca"),
            ("no", "Norveççe"),
            ("el", "Yunanca"),
            ("hu", "Macarca"),
            ("tr", "Türkçe"),
        ],
    ),
];

/// Language names in the grammatical form used by call-to-action sentences.
pub const CTA_NAMES: &[(&str, NameTable)] = &[
    (
        "de",
        &[
            ("cs", "Tschechisch"),
            ("da", "Dänisch"),
            ("el", "Griechisch"),
            ("en", "Englisch"),
            ("es", "Spanisch"),
            ("fr", "Französisch"),
            ("hu", "Ungarisch"),
            ("it", "Italienisch"),
            ("nl", "Niederländisch"),
            ("no", "Norwegisch"),
            ("pl", "Polnisch"),
            ("pt", "Portugiesisch"),
            ("ro", "Rumänisch"),
            ("ru", "Russisch"),
            ("sv", "Schwedisch"),
            ("tr", "Türkisch"),
            ("uk", "Ukrainisch"),
        ],
    ),
    (
        "en",
        &[
            ("cs", "Czech"),
            ("da", "Danish"),
            ("de", "German"),
            ("el", "Greek"),
            ("es", "Spanish"),
            ("fr", "French"),
            ("hu", "Hungarian"),
            ("it", "Italian"),
            ("nl", "Dutch"),
            ("no", "Norwegian"),
            ("pl", "Polish"),
            ("pt", "Portuguese"),
            ("ro", "Romanian"),
            ("ru", "Russian"),
            ("sv", "Swedish"),
            ("tr", "Turkish"),
            ("uk", "Ukrainian"),
        ],
    ),
    (
        "es",
        &[
            ("cs", "checo"),
            ("da", "danés"),
            ("de", "alemán"),
            ("el", "griego"),
            ("en", "inglés"),
            ("fr", "francés"),
            ("hu", "húngaro"),
            ("it", "italiano"),
            ("nl", "neerlandés"),
            ("no", "noruego"),
            ("pl", "polaco"),
            ("pt", "portugués"),
            ("ro", "rumano"),
            ("ru", "ruso"),
            ("sv", "sueco"),
            ("tr", "turco"),
            ("uk", "ucraniano"),
        ],
    ),
    (
        "fr",
        &[
            ("cs", "le tchèque"),
            ("da", "le danois"),
            ("de", "l'allemand"),
            ("el", "le grec"),
            ("en", "l'anglais"),
            ("es", "l'espagnol"),
            ("hu", "le hongrois"),
            ("it", "l'italien"),
            ("nl", "le néerlandais"),
            ("no", "le norvégien"),
            ("pl", "le polonais"),
            ("pt", "le portugais"),
            ("ro", "le roumain"),
            ("ru", "le russe"),
            ("sv", "le suédois"),
            ("tr", "le turc"),
            ("uk", "l'ukrainien"),
        ],
    ),
    (
        "it",
        &[
            ("cs", "il ceco"),
            ("da", "il danese"),
            ("de", "il tedesco"),
            ("el", "il greco"),
            ("en", "l'inglese"),
            ("es", "lo spagnolo"),
            ("fr", "il francese"),
            ("hu", "l'ungherese"),
            ("nl", "l'olandese"),
            ("no", "il norvegese"),
            ("pl", "il polacco"),
            ("pt", "il portoghese"),
            ("ro", "il rumeno"),
            ("ru", "il russo"),
            ("sv", "lo svedese"),
            ("tr", "il turco"),
            ("uk", "l'ucraino"),
        ],
    ),
    (
        "nl",
        &[
            ("cs", "Tsjechisch"),
            ("da", "Deens"),
            ("de", "Duits"),
            ("el", "Grieks"),
            ("en", "Engels"),
            ("es", "Spaans"),
            ("fr", "Frans"),
            ("hu", "Hongaars"),
            ("it", "Italiaans"),
            ("no", "Noors"),
            ("pl", "Pools"),
            ("pt", "Portugees"),
            ("ro", "Roemeens"),
            ("ru", "Russisch"),
            ("sv", "Zweeds"),
            ("tr", "Turks"),
            ("uk", "Oekraïens"),
        ],
    ),
    (
        "pl",
        &[
            ("cs", "czeski"),
            ("da", "duński"),
            ("de", "niemiecki"),
            ("el", "grecki"),
            ("en", "angielski"),
            ("es", "hiszpański"),
            ("fr", "francuski"),
            ("hu", "węgierski"),
            ("it", "włoski"),
            ("nl", "holenderski"),
            ("no", "norweski"),
            ("pt", "portugalski"),
            ("ro", "rumuński"),
            ("ru", "rosyjski"),
            ("sv", "szwedzki"),
            ("tr", "turecki"),
            ("uk", "ukraiński"),
        ],
    ),
    (
        "pt",
        &[
            ("cs", "tcheco"),
            ("da", "dinamarquês"),
            ("de", "alemão"),
            ("el", "grego"),
            ("en", "inglês"),
            ("es", "espanhol"),
            ("fr", "francês"),
            ("hu", "húngaro"),
            ("it", "italiano"),
            ("nl", "holandês"),
            ("no", "norueguês"),
            ("pl", "polonês"),
            ("ro", "romeno"),
            ("ru", "russo"),
            ("sv", "sueco"),
            ("tr", "turco"),
            ("uk", "ucraniano"),
        ],
    ),
    (
        "ro",
        &[
            ("cs", "cehă"),
            ("da", "daneză"),
            ("de", "germană"),
            ("el", "greacă"),
            ("en", "engleză"),
            ("es", "spaniolă"),
            ("fr", "franceză"),
            ("hu", "maghiară"),
            ("it", "italiană"),
            ("nl", "olandeză"),
            ("no", "norvegiană"),
            ("pl", "poloneză"),
            ("pt", "portugheză"),
            ("ru", "rusă"),
            ("sv", "suedeză"),
            ("tr", "turcă"),
            ("uk", "ucraineană"),
        ],
    ),
    (
        "ru",
        &[
            ("cs", "чешский"),
            ("da", "датский"),
            ("de", "немецкий"),
            ("el", "греческий"),
            ("en", "английский"),
            ("es", "испанский"),
            ("fr", "французский"),
            ("hu", "венгерский"),
            ("it", "итальянский"),
            ("nl", "голландский"),
            ("no", "норвежский"),
            ("pl", "польский"),
            ("pt", "португальский"),
            ("ro", "румынский"),
            ("sv", "шведский"),
            ("tr", "турецкий"),
            ("uk", "украинский"),
        ],
    ),
    (
        "tr",
        &[
            ("cs", "Çekçe"),
            ("da", "Danca"),
            ("de", "Almanca"),
            ("el", "Yunanca"),
            ("en", "İngilizce"),
            ("es", "İspanyolca"),
            ("fr", "Fransızca"),
            ("hu", "Macarca"),
            ("it", "İtalyanca"),
            ("nl", "Flemenkçe"),
            ("no", "Norveççe"),
            ("pl", "Lehçe"),
            ("pt", "Portekizce"),
            ("ro", "Rumence"),
            ("ru", "Rusça"),
            ("sv", "İsveççe"),
            ("uk", "Ukraynaca"),
        ],
    ),
    (
        "uk",
        &[
            ("cs", "чеську"),
            ("da", "данську"),
            ("de", "німецьку"),
            ("el", "грецьку"),
            ("en", "англійську"),
            ("es", "іспанську"),
            ("fr", "французьку"),
            ("hu", "угорську"),
            ("it", "італійську"),
            ("nl", "голландську"),
            ("no", "норвезьку"),
            ("pl", "польську"),
            ("pt", "португальську"),
            ("ro", "румунську"),
            ("ru", "російську"),
            ("sv", "шведську"),
            ("tr", "турецьку"),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endonym() {
        assert_eq!(endonym("de"), Some("Deutsch"));
        assert_eq!(endonym("el"), Some("Ελληνικά"));
        assert_eq!(endonym("xx"), None);
    }

    #[test]
    fn test_names_depend_on_slot() {
        assert_eq!(title_name("es", "en"), Some("Inglés"));
        assert_eq!(description_name("es", "en"), Some("inglés"));
        assert_eq!(cta_name("uk", "pl"), Some("польську"));
        assert_eq!(description_name("uk", "pl"), Some("польської"));
    }

    #[test]
    fn test_unknown_native_uses_english_names() {
        assert_eq!(title_name("xx", "de"), Some("German"));
        assert_eq!(cta_name("el", "fr"), Some("French"));
    }

    #[test]
    fn test_unknown_target_has_no_name() {
        assert_eq!(title_name("en", "ja"), None);
        assert_eq!(cta_name("uk", "uk"), None);
    }

    #[test]
    fn test_tables_cover_every_native_language() {
        for (native, names) in TITLE_NAMES {
            assert_eq!(names.len(), ENDONYMS.len(), "title names for {native}");
        }
        for (native, names) in DESCRIPTION_NAMES {
            assert_eq!(names.len(), ENDONYMS.len(), "description names for {native}");
        }
    }
}
