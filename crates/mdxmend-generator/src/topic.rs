//! Article topics and their Greek templates.

use crate::tables::{COMMON_WORDS, GREETINGS, PET_NAMES, TargetLanguage, Term, terms};

const IMPORTS: &str = "import VocabCard from '@components/VocabCard.astro';
import CultureTip from '@components/CultureTip.astro';
import PhraseOfDay from '@components/PhraseOfDay.astro';
import CTA from '@components/CTA.astro';
";

const I_LOVE_YOU: &str = "Σ'αγαπώ";

/// The five articles generated per target language, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    CommonWords,
    PetNames,
    ILoveYou,
    Greetings,
    DateNight,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::CommonWords,
        Topic::PetNames,
        Topic::ILoveYou,
        Topic::Greetings,
        Topic::DateNight,
    ];

    pub fn slug(self, lang: &TargetLanguage) -> String {
        let en = lang.english_name;
        match self {
            Self::CommonWords => format!("100-most-common-{en}-words"),
            Self::PetNames => format!("{en}-pet-names-and-endearments"),
            Self::ILoveYou => format!("how-to-say-i-love-you-in-{en}"),
            Self::Greetings => format!("{en}-greetings-and-farewells"),
            Self::DateNight => format!("{en}-date-night-vocabulary"),
        }
    }

    pub fn title(self, lang: &TargetLanguage) -> String {
        let el = lang.native_name;
        match self {
            Self::CommonWords => format!("100 πιο συνηθισμένες λέξεις στα {el}"),
            Self::PetNames => format!("Χαϊδευτικά και τρυφερά ονόματα στα {el}"),
            Self::ILoveYou => format!("Πώς να πεις «{I_LOVE_YOU}» στα {el}"),
            Self::Greetings => format!("Χαιρετισμοί και αποχαιρετισμοί στα {el}"),
            Self::DateNight => format!("Λεξιλόγιο για ραντεβού στα {el}"),
        }
    }

    pub fn description(self, lang: &TargetLanguage) -> String {
        let el = lang.native_name;
        match self {
            Self::CommonWords => format!(
                "Μάθε τις 100 πιο χρήσιμες λέξεις στα {el} για καθημερινή επικοινωνία με τον σύντροφό σου!"
            ),
            Self::PetNames => format!(
                "Ανακάλυψε τα πιο γλυκά χαϊδευτικά στα {el} για τον σύντροφό σου. Ρομαντικά και τρυφερά!"
            ),
            Self::ILoveYou => format!(
                "Μάθε όλους τους τρόπους να εκφράσεις την αγάπη σου στα {el}, από το απλό μέχρι το παθιασμένο!"
            ),
            Self::Greetings => format!(
                "Μάθε πώς να χαιρετάς και να αποχαιρετάς στα {el}, από το τυπικό μέχρι το ανεπίσημο!"
            ),
            Self::DateNight => format!(
                "Ετοιμάσου για το τέλειο ραντεβού με φράσεις στα {el} για εστιατόρια, κοπλιμέντα και ρομαντικές στιγμές!"
            ),
        }
    }

    /// Estimated reading time in minutes.
    pub fn read_time(self) -> u32 {
        match self {
            Self::CommonWords | Self::DateNight => 6,
            Self::PetNames | Self::ILoveYou | Self::Greetings => 5,
        }
    }

    pub fn tags(self, lang: &TargetLanguage) -> Vec<String> {
        let rest: [&str; 3] = match self {
            Self::CommonWords => ["λεξιλόγιο", "αρχάριοι", "βασικές λέξεις"],
            Self::PetNames => ["χαϊδευτικά", "ρομαντικά", "ζευγάρια"],
            Self::ILoveYou => ["σ'αγαπώ", "ρομαντικά", "εκφράσεις αγάπης"],
            Self::Greetings => ["χαιρετισμοί", "αποχαιρετισμοί", "βασικές φράσεις"],
            Self::DateNight => ["ραντεβού", "εστιατόριο", "ρομαντικά"],
        };
        std::iter::once(lang.native_name)
            .chain(rest)
            .map(str::to_string)
            .collect()
    }

    /// The MDX body, imports through the closing `<CTA />`.
    pub fn content(self, lang: &TargetLanguage) -> String {
        match self {
            Self::CommonWords => common_words(lang),
            Self::PetNames => pet_names(lang),
            Self::ILoveYou => i_love_you(lang),
            Self::Greetings => greetings(lang),
            Self::DateNight => date_night(lang),
        }
    }
}

fn vocab_card(term: &Term) -> String {
    format!(
        "<VocabCard\n  word=\"{}\"\n  translation=\"{}\"\n  pronunciation=\"{}\"\n  example=\"\"\n/>",
        term.word, term.translation, term.pronunciation
    )
}

fn vocab_cards(terms: &[Term]) -> String {
    terms.iter().map(vocab_card).collect::<Vec<_>>().join("\n\n")
}

fn phrase_of_day(term: &Term, context: &str) -> String {
    format!(
        "<PhraseOfDay\n  word=\"{}\"\n  translation=\"{}\"\n  pronunciation=\"{}\"\n  context=\"{context}\"\n/>",
        term.word, term.translation, term.pronunciation
    )
}

fn love_term(lang: &TargetLanguage) -> Term {
    Term::new(lang.love, I_LOVE_YOU, lang.love_pronunciation)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn common_words(lang: &TargetLanguage) -> String {
    let el = lang.native_name;
    let cards = vocab_cards(terms(COMMON_WORDS, lang.code));
    let phrase = phrase_of_day(&love_term(lang), "Η πιο σημαντική φράση για κάθε ζευγάρι!");
    let heading = capitalize(lang.english_name);
    let verb = lang.love.split_whitespace().next().unwrap_or(lang.love);

    format!(
        "{IMPORTS}
Αν ξεκινάς να μαθαίνεις {el} με τον σύντροφό σου, αυτές οι 100 λέξεις είναι το τέλειο ξεκίνημα! Καλύπτουν τις πιο συχνές καταστάσεις της καθημερινότητας.

{phrase}

## Βασικές Λέξεις

{cards}

<CultureTip title=\"Πολιτιστική Συμβουλή\">
Τα {el} έχουν πλούσιο λεξιλόγιο για την αγάπη και τα συναισθήματα. Μάθε αυτές τις λέξεις και εντυπωσίασε τον σύντροφό σου!
</CultureTip>

## Χρήσιμα Ρήματα

| {heading} | Ελληνικά |
|---------|----------|
| {verb} | αγαπώ |

<CTA />
"
    )
}

fn pet_names(lang: &TargetLanguage) -> String {
    let el = lang.native_name;
    let names = terms(PET_NAMES, lang.code);
    let cards = vocab_cards(names);
    let phrase = names
        .first()
        .map(|first| {
            phrase_of_day(
                first,
                &format!("Ένα από τα πιο κλασικά χαϊδευτικά στα {el}."),
            )
        })
        .unwrap_or_default();

    format!(
        "{IMPORTS}
Τα χαϊδευτικά ονόματα είναι ένας τρυφερός τρόπος να δείξεις την αγάπη σου. Εδώ θα βρεις τα πιο δημοφιλή χαϊδευτικά στα {el}!

{phrase}

## Δημοφιλή Χαϊδευτικά

{cards}

<CultureTip title=\"Πολιτιστική Συμβουλή\">
Στα {el}, τα χαϊδευτικά χρησιμοποιούνται συχνά και δείχνουν στοργή. Μη διστάσεις να τα χρησιμοποιήσεις με τον σύντροφό σου!
</CultureTip>

<CTA />
"
    )
}

fn i_love_you(lang: &TargetLanguage) -> String {
    let el = lang.native_name;
    let love = lang.love;
    let term = love_term(lang);
    let phrase = phrase_of_day(
        &term,
        &format!("Η κλασική και πιο ισχυρή έκφραση αγάπης στα {el}."),
    );
    let card = vocab_card(&term);

    format!(
        "{IMPORTS}
Το «{I_LOVE_YOU}» είναι μία από τις πιο σημαντικές φράσεις που μπορείς να μάθεις σε οποιαδήποτε γλώσσα. Ας δούμε πώς να το πεις στα {el}!

{phrase}

## Η Βασική Έκφραση

{card}

<CultureTip title=\"Πότε να το πεις\">
Στα {el}, η φράση «{love}» έχει βαθιά συναισθηματική σημασία. Χρησιμοποίησέ την όταν θέλεις να εκφράσεις αληθινή αγάπη.
</CultureTip>

## Τρυφερές Παραλλαγές

Υπάρχουν πολλοί τρόποι να εκφράσεις την αγάπη σου στα {el}. Από πιο ήπιες εκφράσεις μέχρι πιο παθιασμένες δηλώσεις αγάπης.

<CTA />
"
    )
}

fn greetings(lang: &TargetLanguage) -> String {
    let el = lang.native_name;
    let greets = terms(GREETINGS, lang.code);
    let cards = vocab_cards(greets);
    // The second greeting is the morning one.
    let phrase = greets
        .get(1)
        .map(|morning| {
            phrase_of_day(
                morning,
                "Ο τέλειος τρόπος να ξεκινήσεις τη μέρα με τον σύντροφό σου.",
            )
        })
        .unwrap_or_default();

    format!(
        "{IMPORTS}
Οι χαιρετισμοί είναι θεμελιώδεις για κάθε συνομιλία. Μάθε πώς να χαιρετάς τον σύντροφό σου στα {el}!

{phrase}

## Βασικοί Χαιρετισμοί και Αποχαιρετισμοί

{cards}

<CultureTip title=\"Πολιτιστική Συμβουλή\">
Στα {el}, οι χαιρετισμοί συχνά συνοδεύονται από φιλιά στο μάγουλο ή αγκαλιές, ανάλογα με τη σχέση σας.
</CultureTip>

<CTA />
"
    )
}

fn date_night(lang: &TargetLanguage) -> String {
    let el = lang.native_name;
    let phrase = phrase_of_day(
        &love_term(lang),
        "Η τέλεια φράση για να κλείσεις το ραντεβού σου.",
    );

    format!(
        "{IMPORTS}
Ετοιμάζεσαι για ένα ρομαντικό ραντεβού; Αυτές οι φράσεις στα {el} θα σε βοηθήσουν να εντυπωσιάσεις!

{phrase}

## Στο Εστιατόριο

Μάθε βασικές φράσεις για να παραγγείλεις και να απολαύσεις το δείπνο σας.

<CultureTip title=\"Πολιτιστική Συμβουλή\">
Σε ρομαντικά ραντεβού, είναι ωραίο να μάθεις μερικά κομπλιμέντα στα {el} για να εντυπωσιάσεις τον σύντροφό σου.
</CultureTip>

## Κομπλιμέντα

Πες στον σύντροφό σου πόσο όμορφος/η είναι με αυτές τις φράσεις στα {el}.

## Ρομαντικές Φράσεις

Τέλειωσε το ραντεβού σας με τρυφερές λέξεις που θα θυμάται για πάντα.

<CTA />
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn german() -> &'static TargetLanguage {
        TargetLanguage::by_code("de").expect("de")
    }

    #[test]
    fn test_slugs() {
        let de = german();
        let slugs: Vec<_> = Topic::ALL.iter().map(|t| t.slug(de)).collect();
        assert_eq!(
            slugs,
            vec![
                "100-most-common-german-words",
                "german-pet-names-and-endearments",
                "how-to-say-i-love-you-in-german",
                "german-greetings-and-farewells",
                "german-date-night-vocabulary",
            ]
        );
    }

    #[test]
    fn test_titles_and_tags_use_greek_name() {
        let de = german();
        assert_eq!(Topic::ILoveYou.title(de), "Πώς να πεις «Σ'αγαπώ» στα γερμανικά");
        assert_eq!(
            Topic::PetNames.tags(de),
            vec!["γερμανικά", "χαϊδευτικά", "ρομαντικά", "ζευγάρια"]
        );
    }

    #[test]
    fn test_read_times() {
        let times: Vec<_> = Topic::ALL.iter().map(|t| t.read_time()).collect();
        assert_eq!(times, vec![6, 5, 5, 5, 6]);
    }

    #[test]
    fn test_vocab_card_shape() {
        let card = vocab_card(&Term::new("Schatz", "θησαυρέ μου", "σατς"));
        assert_eq!(
            card,
            "<VocabCard\n  word=\"Schatz\"\n  translation=\"θησαυρέ μου\"\n  pronunciation=\"σατς\"\n  example=\"\"\n/>"
        );
    }

    #[test]
    fn test_content_structure() {
        let de = german();
        for topic in Topic::ALL {
            let content = topic.content(de);
            assert!(content.starts_with("import VocabCard from '@components/VocabCard.astro';\n"));
            assert!(content.contains("\n<PhraseOfDay\n"), "{topic:?}");
            assert!(content.contains("<CultureTip title="), "{topic:?}");
            assert!(content.ends_with("\n<CTA />\n"), "{topic:?}");
        }
    }

    #[test]
    fn test_common_words_table_row() {
        let content = Topic::CommonWords.content(german());
        assert!(content.contains("| German | Ελληνικά |"));
        assert!(content.contains("| Ich | αγαπώ |"));
        assert!(content.contains("word=\"Liebe\""));
    }

    #[test]
    fn test_single_word_love_phrase() {
        let hu = TargetLanguage::by_code("hu").expect("hu");
        assert!(Topic::CommonWords.content(hu).contains("| Szeretlek | αγαπώ |"));
    }

    #[test]
    fn test_greetings_feature_morning_phrase() {
        let content = Topic::Greetings.content(german());
        assert!(content.contains("<PhraseOfDay\n  word=\"Guten Morgen\"\n  translation=\"Καλημέρα\""));
        assert_eq!(content.matches("<VocabCard").count(), 4);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("german"), "German");
        assert_eq!(capitalize(""), "");
    }
}
