//! Phrase tables for Greek-native articles.

use mdxmend_core::lang::lookup;

/// A language offered to Greek readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetLanguage {
    /// Two-letter code, also the article's target directory.
    pub code: &'static str,
    /// Name in Greek, as used after "στα".
    pub native_name: &'static str,
    /// Lower-case English name, used in slugs.
    pub english_name: &'static str,
    /// "I love you" in the language itself.
    pub love: &'static str,
    /// Greek-script pronunciation of [`Self::love`].
    pub love_pronunciation: &'static str,
}

impl TargetLanguage {
    /// Look up a target by code.
    pub fn by_code(code: &str) -> Option<&'static TargetLanguage> {
        TARGETS.iter().find(|t| t.code == code)
    }
}

/// A word with its Greek translation and pronunciation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub word: &'static str,
    pub translation: &'static str,
    pub pronunciation: &'static str,
}

impl Term {
    pub const fn new(
        word: &'static str,
        translation: &'static str,
        pronunciation: &'static str,
    ) -> Self {
        Self {
            word,
            translation,
            pronunciation,
        }
    }
}

/// Terms for `code` from `table`, or the English list.
pub fn terms(table: &[(&'static str, &'static [Term])], code: &str) -> &'static [Term] {
    lookup(table, code)
        .or_else(|| lookup(table, "en"))
        .unwrap_or_default()
}

/// Target languages offered to Greek readers, in generation order.
pub const TARGETS: &[TargetLanguage] = &[
    TargetLanguage {
        code: "en",
        native_name: "αγγλικά",
        english_name: "english",
        love: "I love you",
        love_pronunciation: "άι λαβ γιου",
    },
    TargetLanguage {
        code: "de",
        native_name: "γερμανικά",
        english_name: "german",
        love: "Ich liebe dich",
        love_pronunciation: "ιχ λίμπε ντιχ",
    },
    TargetLanguage {
        code: "fr",
        native_name: "γαλλικά",
        english_name: "french",
        love: "Je t'aime",
        love_pronunciation: "ζε τεμ",
    },
    TargetLanguage {
        code: "es",
        native_name: "ισπανικά",
        english_name: "spanish",
        love: "Te quiero",
        love_pronunciation: "τε κιέρο",
    },
    TargetLanguage {
        code: "it",
        native_name: "ιταλικά",
        english_name: "italian",
        love: "Ti amo",
        love_pronunciation: "τι άμο",
    },
    TargetLanguage {
        code: "pt",
        native_name: "πορτογαλικά",
        english_name: "portuguese",
        love: "Eu te amo",
        love_pronunciation: "έου τε άμου",
    },
    TargetLanguage {
        code: "pl",
        native_name: "πολωνικά",
        english_name: "polish",
        love: "Kocham cię",
        love_pronunciation: "κόχαμ τσιε",
    },
    TargetLanguage {
        code: "ru",
        native_name: "ρωσικά",
        english_name: "russian",
        love: "Я тебя люблю",
        love_pronunciation: "για τεμπιά λιουμπλιού",
    },
    TargetLanguage {
        code: "uk",
        native_name: "ουκρανικά",
        english_name: "ukrainian",
        love: "Я тебе кохаю",
        love_pronunciation: "για τέμπε κοχάγιου",
    },
    TargetLanguage {
        code: "nl",
        native_name: "ολλανδικά",
        english_name: "dutch",
        love: "Ik hou van je",
        love_pronunciation: "ικ χάου φαν γιε",
    },
    TargetLanguage {
        code: "tr",
        native_name: "τουρκικά",
        english_name: "turkish",
        love: "Seni seviyorum",
        love_pronunciation: "σενί σεβιγιορούμ",
    },
    TargetLanguage {
        code: "ro",
        native_name: "ρουμανικά",
        english_name: "romanian",
        love: "Te iubesc",
        love_pronunciation: "τε γιουμπέσκ",
    },
    TargetLanguage {
        code: "sv",
        native_name: "σουηδικά",
        english_name: "swedish",
        love: "Jag älskar dig",
        love_pronunciation: "γιαγκ έλσκαρ ντέι",
    },
    TargetLanguage {
        code: "no",
        native_name: "νορβηγικά",
        english_name: "norwegian",
        love: "Jeg elsker deg",
        love_pronunciation: "γιάι έλσκερ ντάι",
    },
    TargetLanguage {
        code: "da",
        native_name: "δανικά",
        english_name: "danish",
        love: "Jeg elsker dig",
        love_pronunciation: "γιάι έλσκερ ντάι",
    },
    TargetLanguage {
        code: "cs",
        native_name: "τσέχικα",
        english_name: "czech",
        love: "Miluji tě",
        love_pronunciation: "μίλουγι τιε",
    },
    TargetLanguage {
        code: "hu",
        native_name: "ουγγρικά",
        english_name: "hungarian",
        love: "Szeretlek",
        love_pronunciation: "σέρετλεκ",
    },
];

/// Terms of endearment per target language.
pub const PET_NAMES: &[(&str, &[Term])] = &[
    (
        "en",
        &[
            Term::new("honey", "μέλι μου", "χάνι"),
            Term::new("sweetheart", "γλυκιά μου", "σουίτχαρτ"),
            Term::new("darling", "αγάπη μου", "ντάρλινγκ"),
            Term::new("baby", "μωρό μου", "μπέιμπι"),
        ],
    ),
    (
        "de",
        &[
            Term::new("Schatz", "θησαυρέ μου", "σατς"),
            Term::new("Liebling", "αγάπη μου", "λίμπλινγκ"),
            Term::new("Maus", "ποντικάκι μου", "μάους"),
            Term::new("Süße/r", "γλυκιά/ούλη μου", "ζύσε"),
        ],
    ),
    (
        "fr",
        &[
            Term::new("mon cœur", "καρδιά μου", "μον κερ"),
            Term::new("mon amour", "αγάπη μου", "μον αμούρ"),
            Term::new("chéri/e", "αγαπημένε/η", "σερί"),
            Term::new("mon trésor", "θησαυρέ μου", "μον τρεζόρ"),
        ],
    ),
    (
        "es",
        &[
            Term::new("cariño", "αγάπη μου", "καρίνιο"),
            Term::new("mi amor", "αγάπη μου", "μι αμόρ"),
            Term::new("corazón", "καρδιά μου", "κοραθόν"),
            Term::new("mi vida", "ζωή μου", "μι βίδα"),
        ],
    ),
    (
        "it",
        &[
            Term::new("tesoro", "θησαυρέ μου", "τεζόρο"),
            Term::new("amore", "αγάπη μου", "αμόρε"),
            Term::new("caro/a", "αγαπημένε/η", "κάρο"),
            Term::new("cucciolo/a", "αρκουδάκι μου", "κουτσόλο"),
        ],
    ),
    (
        "pt",
        &[
            Term::new("amor", "αγάπη μου", "αμόρ"),
            Term::new("querido/a", "αγαπημένε/η", "κερίντο"),
            Term::new("meu bem", "καλέ μου", "μέου μπεμ"),
            Term::new("fofo/a", "χνουδωτέ μου", "φόφο"),
        ],
    ),
    (
        "pl",
        &[
            Term::new("kochanie", "αγάπη μου", "κοχάνιε"),
            Term::new("skarbie", "θησαυρέ μου", "σκάρμπιε"),
            Term::new("misiu", "αρκουδάκι μου", "μίσιου"),
            Term::new("słoneczko", "ηλιαχτίδα μου", "σουονέτσκο"),
        ],
    ),
    (
        "ru",
        &[
            Term::new("любимый/ая", "αγαπημένε/η", "λιουμπίμι"),
            Term::new("солнышко", "ηλιαχτίδα μου", "σόλνισκο"),
            Term::new("зайка", "λαγουδάκι μου", "ζάικα"),
            Term::new("милый/ая", "γλυκέ/ιά μου", "μίλι"),
        ],
    ),
    (
        "uk",
        &[
            Term::new("кохання", "αγάπη μου", "κοχάνια"),
            Term::new("сонечко", "ηλιαχτίδα μου", "σονέτσκο"),
            Term::new("зайчик", "λαγουδάκι μου", "ζάιτσικ"),
            Term::new("любий/а", "αγαπημένε/η", "λιούμπι"),
        ],
    ),
    (
        "nl",
        &[
            Term::new("schat", "θησαυρέ μου", "σχατ"),
            Term::new("lieverd", "αγάπη μου", "λίβερτ"),
            Term::new("liefje", "αγαπούλα μου", "λίφιε"),
            Term::new("schatje", "θησαυράκι μου", "σχάτιε"),
        ],
    ),
    (
        "tr",
        &[
            Term::new("aşkım", "αγάπη μου", "ασκίμ"),
            Term::new("canım", "ψυχή μου", "τζανίμ"),
            Term::new("hayatım", "ζωή μου", "χαγιατίμ"),
            Term::new("tatlım", "γλυκιά/ούλη μου", "τατλίμ"),
        ],
    ),
    (
        "ro",
        &[
            Term::new("iubire", "αγάπη μου", "γιουμπίρε"),
            Term::new("dragă", "αγαπημένε/η", "ντράγκα"),
            Term::new("sufletul meu", "ψυχή μου", "σουφλέτουλ μέου"),
            Term::new("scumpule", "πολύτιμε", "σκουμπούλε"),
        ],
    ),
    (
        "sv",
        &[
            Term::new("älskling", "αγάπη μου", "έλσκλινγκ"),
            Term::new("raring", "αγαπούλα μου", "ράρινγκ"),
            Term::new("hjärtat", "καρδιά μου", "γιέρτατ"),
            Term::new("gull", "χρυσέ μου", "γκουλ"),
        ],
    ),
    (
        "no",
        &[
            Term::new("kjæreste", "αγαπημένε/η", "σέρεστε"),
            Term::new("elskling", "αγάπη μου", "έλσκλινγκ"),
            Term::new("skatt", "θησαυρέ μου", "σκατ"),
            Term::new("søtnos", "γλυκούλη μου", "σέτνος"),
        ],
    ),
    (
        "da",
        &[
            Term::new("skat", "θησαυρέ μου", "σκατ"),
            Term::new("elskede", "αγαπημένε/η", "έλσκεδε"),
            Term::new("søde", "γλυκέ μου", "σέδε"),
            Term::new("hjerte", "καρδιά μου", "γιέρτε"),
        ],
    ),
    (
        "cs",
        &[
            Term::new("lásko", "αγάπη μου", "λάσκο"),
            Term::new("miláčku", "αγαπημένε/η", "μιλάτσκου"),
            Term::new("zlatíčko", "χρυσέ μου", "ζλατίτσκο"),
            Term::new("broučku", "ζουζουνάκι μου", "μπρούτσκου"),
        ],
    ),
    (
        "hu",
        &[
            Term::new("édesem", "γλυκέ μου", "έντεσεμ"),
            Term::new("kincsem", "θησαυρέ μου", "κίντσεμ"),
            Term::new("szívem", "καρδιά μου", "σίβεμ"),
            Term::new("drágám", "πολύτιμε", "ντράγκαμ"),
        ],
    ),
];

/// Starter vocabulary per target language.
pub const COMMON_WORDS: &[(&str, &[Term])] = &[
    (
        "en",
        &[
            Term::new("love", "αγάπη", "λαβ"),
            Term::new("heart", "καρδιά", "χαρτ"),
            Term::new("beautiful", "όμορφος/η", "μπιούτιφουλ"),
            Term::new("happy", "χαρούμενος/η", "χάπι"),
        ],
    ),
    (
        "de",
        &[
            Term::new("Liebe", "αγάπη", "λίμπε"),
            Term::new("Herz", "καρδιά", "χερτς"),
            Term::new("schön", "όμορφος/η", "σεν"),
            Term::new("glücklich", "χαρούμενος/η", "γκλύκλιχ"),
        ],
    ),
    (
        "fr",
        &[
            Term::new("amour", "αγάπη", "αμούρ"),
            Term::new("cœur", "καρδιά", "κερ"),
            Term::new("beau/belle", "όμορφος/η", "μπο/μπελ"),
            Term::new("heureux", "χαρούμενος/η", "ερέ"),
        ],
    ),
    (
        "es",
        &[
            Term::new("amor", "αγάπη", "αμόρ"),
            Term::new("corazón", "καρδιά", "κοραθόν"),
            Term::new("hermoso/a", "όμορφος/η", "ερμόσο"),
            Term::new("feliz", "χαρούμενος/η", "φελίθ"),
        ],
    ),
    (
        "it",
        &[
            Term::new("amore", "αγάπη", "αμόρε"),
            Term::new("cuore", "καρδιά", "κουόρε"),
            Term::new("bello/a", "όμορφος/η", "μπέλο"),
            Term::new("felice", "χαρούμενος/η", "φελίτσε"),
        ],
    ),
    (
        "pt",
        &[
            Term::new("amor", "αγάπη", "αμόρ"),
            Term::new("coração", "καρδιά", "κορασάου"),
            Term::new("bonito/a", "όμορφος/η", "μπονίτο"),
            Term::new("feliz", "χαρούμενος/η", "φελίζ"),
        ],
    ),
    (
        "pl",
        &[
            Term::new("miłość", "αγάπη", "μίουοστς"),
            Term::new("serce", "καρδιά", "σέρτσε"),
            Term::new("piękny/a", "όμορφος/η", "πιένκνι"),
            Term::new("szczęśliwy", "χαρούμενος/η", "στσέσλιβι"),
        ],
    ),
    (
        "ru",
        &[
            Term::new("любовь", "αγάπη", "λιουμπόφ"),
            Term::new("сердце", "καρδιά", "σέρτσε"),
            Term::new("красивый", "όμορφος/η", "κρασίβι"),
            Term::new("счастливый", "χαρούμενος/η", "στσασλίβι"),
        ],
    ),
    (
        "uk",
        &[
            Term::new("кохання", "αγάπη", "κοχάνια"),
            Term::new("серце", "καρδιά", "σέρτσε"),
            Term::new("гарний", "όμορφος/η", "γκάρνι"),
            Term::new("щасливий", "χαρούμενος/η", "στσασλίβι"),
        ],
    ),
    (
        "nl",
        &[
            Term::new("liefde", "αγάπη", "λίφντε"),
            Term::new("hart", "καρδιά", "χαρτ"),
            Term::new("mooi", "όμορφος/η", "μόι"),
            Term::new("gelukkig", "χαρούμενος/η", "χελέκιχ"),
        ],
    ),
    (
        "tr",
        &[
            Term::new("aşk", "αγάπη", "ασκ"),
            Term::new("kalp", "καρδιά", "καλπ"),
            Term::new("güzel", "όμορφος/η", "γκιουζέλ"),
            Term::new("mutlu", "χαρούμενος/η", "μουτλού"),
        ],
    ),
    (
        "ro",
        &[
            Term::new("dragoste", "αγάπη", "ντραγκόστε"),
            Term::new("inimă", "καρδιά", "ινίμα"),
            Term::new("frumos", "όμορφος/η", "φρουμός"),
            Term::new("fericit", "χαρούμενος/η", "φεριτσίτ"),
        ],
    ),
    (
        "sv",
        &[
            Term::new("kärlek", "αγάπη", "σέρλεκ"),
            Term::new("hjärta", "καρδιά", "γιέρτα"),
            Term::new("vacker", "όμορφος/η", "βάκερ"),
            Term::new("lycklig", "χαρούμενος/η", "λίκλιγκ"),
        ],
    ),
    (
        "no",
        &[
            Term::new("kjærlighet", "αγάπη", "σέρλιχετ"),
            Term::new("hjerte", "καρδιά", "γιέρτε"),
            Term::new("vakker", "όμορφος/η", "βάκερ"),
            Term::new("lykkelig", "χαρούμενος/η", "λίκελιγκ"),
        ],
    ),
    (
        "da",
        &[
            Term::new("kærlighed", "αγάπη", "κέρλιχεδ"),
            Term::new("hjerte", "καρδιά", "γιέρτε"),
            Term::new("smuk", "όμορφος/η", "σμουκ"),
            Term::new("lykkelig", "χαρούμενος/η", "λίκελι"),
        ],
    ),
    (
        "cs",
        &[
            Term::new("láska", "αγάπη", "λάσκα"),
            Term::new("srdce", "καρδιά", "σρντσε"),
            Term::new("krásný", "όμορφος/η", "κράσνι"),
            Term::new("šťastný", "χαρούμενος/η", "στιάστνι"),
        ],
    ),
    (
        "hu",
        &[
            Term::new("szerelem", "αγάπη", "σέρελεμ"),
            Term::new("szív", "καρδιά", "σιβ"),
            Term::new("szép", "όμορφος/η", "σεπ"),
            Term::new("boldog", "χαρούμενος/η", "μπόλντογκ"),
        ],
    ),
];

/// Greetings and farewells per target language.
pub const GREETINGS: &[(&str, &[Term])] = &[
    (
        "en",
        &[
            Term::new("Hello", "Γεια σου", "χελόου"),
            Term::new("Good morning", "Καλημέρα", "γκουντ μόρνινγκ"),
            Term::new("Goodbye", "Αντίο", "γκουντμπάι"),
            Term::new("Good night", "Καληνύχτα", "γκουντ νάιτ"),
        ],
    ),
    (
        "de",
        &[
            Term::new("Hallo", "Γεια σου", "χάλο"),
            Term::new("Guten Morgen", "Καλημέρα", "γκούτεν μόργκεν"),
            Term::new("Auf Wiedersehen", "Αντίο", "άουφ βίντερζεεν"),
            Term::new("Gute Nacht", "Καληνύχτα", "γκούτε ναχτ"),
        ],
    ),
    (
        "fr",
        &[
            Term::new("Bonjour", "Καλημέρα", "μπονζούρ"),
            Term::new("Salut", "Γεια", "σαλύ"),
            Term::new("Au revoir", "Αντίο", "ο ρεβουάρ"),
            Term::new("Bonne nuit", "Καληνύχτα", "μπον νυί"),
        ],
    ),
    (
        "es",
        &[
            Term::new("Hola", "Γεια σου", "όλα"),
            Term::new("Buenos días", "Καλημέρα", "μπουένος ντίας"),
            Term::new("Adiós", "Αντίο", "αδιός"),
            Term::new("Buenas noches", "Καληνύχτα", "μπουένας νότσες"),
        ],
    ),
    (
        "it",
        &[
            Term::new("Ciao", "Γεια", "τσάο"),
            Term::new("Buongiorno", "Καλημέρα", "μπουοντζόρνο"),
            Term::new("Arrivederci", "Αντίο", "αριβεντέρτσι"),
            Term::new("Buonanotte", "Καληνύχτα", "μπουονανότε"),
        ],
    ),
    (
        "pt",
        &[
            Term::new("Olá", "Γεια σου", "ολά"),
            Term::new("Bom dia", "Καλημέρα", "μπομ ντία"),
            Term::new("Tchau", "Αντίο", "τσάου"),
            Term::new("Boa noite", "Καληνύχτα", "μπόα νόιτε"),
        ],
    ),
    (
        "pl",
        &[
            Term::new("Cześć", "Γεια", "τσεστς"),
            Term::new("Dzień dobry", "Καλημέρα", "τζιεν ντόμπρι"),
            Term::new("Do widzenia", "Αντίο", "ντο βιντζένια"),
            Term::new("Dobranoc", "Καληνύχτα", "ντομπράνοτς"),
        ],
    ),
    (
        "ru",
        &[
            Term::new("Привет", "Γεια", "πριβιέτ"),
            Term::new("Доброе утро", "Καλημέρα", "ντόμπροε ούτρο"),
            Term::new("До свидания", "Αντίο", "ντα σβιντάνια"),
            Term::new("Спокойной ночи", "Καληνύχτα", "σπακόινοι νότσι"),
        ],
    ),
    (
        "uk",
        &[
            Term::new("Привіт", "Γεια", "πριβίτ"),
            Term::new("Доброго ранку", "Καλημέρα", "ντόμπροχο ράνκου"),
            Term::new("До побачення", "Αντίο", "ντο ποπάτσενια"),
            Term::new("На добраніч", "Καληνύχτα", "να ντομπράνιτς"),
        ],
    ),
    (
        "nl",
        &[
            Term::new("Hallo", "Γεια σου", "χάλο"),
            Term::new("Goedemorgen", "Καλημέρα", "χούντεμόρχεν"),
            Term::new("Tot ziens", "Αντίο", "τοτ ζινς"),
            Term::new("Welterusten", "Καληνύχτα", "βέλτερούστεν"),
        ],
    ),
    (
        "tr",
        &[
            Term::new("Merhaba", "Γεια σου", "μερχαμπά"),
            Term::new("Günaydın", "Καλημέρα", "γκιουναϊντίν"),
            Term::new("Hoşça kal", "Αντίο", "χοστσά καλ"),
            Term::new("İyi geceler", "Καληνύχτα", "ιγί γκετζελέρ"),
        ],
    ),
    (
        "ro",
        &[
            Term::new("Bună", "Γεια", "μπούνα"),
            Term::new("Bună dimineața", "Καλημέρα", "μπούνα ντιμινέατσα"),
            Term::new("La revedere", "Αντίο", "λα ρεβεντέρε"),
            Term::new("Noapte bună", "Καληνύχτα", "νοάπτε μπούνα"),
        ],
    ),
    (
        "sv",
        &[
            Term::new("Hej", "Γεια", "χέι"),
            Term::new("God morgon", "Καλημέρα", "γκουντ μόρον"),
            Term::new("Hejdå", "Αντίο", "χέιντο"),
            Term::new("God natt", "Καληνύχτα", "γκουντ νατ"),
        ],
    ),
    (
        "no",
        &[
            Term::new("Hei", "Γεια", "χάι"),
            Term::new("God morgen", "Καλημέρα", "γκου μόρεν"),
            Term::new("Ha det", "Αντίο", "χα ντε"),
            Term::new("God natt", "Καληνύχτα", "γκου νατ"),
        ],
    ),
    (
        "da",
        &[
            Term::new("Hej", "Γεια", "χάι"),
            Term::new("Godmorgen", "Καλημέρα", "γκομόρεν"),
            Term::new("Farvel", "Αντίο", "φαρβέλ"),
            Term::new("Godnat", "Καληνύχτα", "γκονάτ"),
        ],
    ),
    (
        "cs",
        &[
            Term::new("Ahoj", "Γεια", "άχοϊ"),
            Term::new("Dobré ráno", "Καλημέρα", "ντόμπρε ράνο"),
            Term::new("Na shledanou", "Αντίο", "να σχλέντανοου"),
            Term::new("Dobrou noc", "Καληνύχτα", "ντόμπρου νοτς"),
        ],
    ),
    (
        "hu",
        &[
            Term::new("Szia", "Γεια", "σία"),
            Term::new("Jó reggelt", "Καλημέρα", "γιο ρέγκελτ"),
            Term::new("Viszlát", "Αντίο", "βίσλατ"),
            Term::new("Jó éjszakát", "Καληνύχτα", "γιο έισακατ"),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_target_has_terms() {
        assert_eq!(TARGETS.len(), 17);
        for target in TARGETS {
            for table in [PET_NAMES, COMMON_WORDS, GREETINGS] {
                assert!(lookup(table, target.code).is_some(), "{}", target.code);
            }
        }
    }

    #[test]
    fn test_terms_fall_back_to_english() {
        assert_eq!(terms(PET_NAMES, "de")[0].word, "Schatz");
        assert_eq!(terms(PET_NAMES, "ja")[0].word, "honey");
    }

    #[test]
    fn test_by_code() {
        let pl = TargetLanguage::by_code("pl").expect("pl");
        assert_eq!(pl.english_name, "polish");
        assert_eq!(pl.love, "Kocham cię");
        assert!(TargetLanguage::by_code("el").is_none());
    }
}
