//! Phrase and template tables for the CTA and SEO fixes.
//!
//! Tables are keyed by two-letter language code. Templates carry `{name}`
//! slots filled by [`fill`].

use mdxmend_core::lang::lookup;

/// Substitute `{key}` slots in `template`.
pub fn fill(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in slots {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

/// The native language's entry in `table`, else the English one.
pub fn localized(table: &[(&'static str, &'static str)], native: &str) -> &'static str {
    lookup(table, native)
        .or_else(|| lookup(table, "en"))
        .unwrap_or_default()
}

/// Romantic-phrases call-to-action, keyed by native language: `(text, button)`.
/// The text carries a `{lang}` slot for the target language name.
pub const ROMANTIC_CTA: &[(&str, (&str, &str))] = &[
    (
        "de",
        (
            "Bereit, {lang} mit deinem Partner zu meistern? Übe mit AI-Sprach-Chat, speichere Phrasen im Love Log, und dein Partner kann dein Tutor sein. Perfekt für bilinguale Paare!",
            "Jetzt Starten",
        ),
    ),
    (
        "en",
        (
            "Ready to master {lang} with your partner? Practice with AI voice chat, save phrases to your Love Log, and your partner can be your tutor. Perfect for bilingual couples!",
            "Start Now",
        ),
    ),
    (
        "es",
        (
            "¿Listo para dominar {lang} con tu pareja? Practica con chat de voz IA, Love Log para guardar frases, y tu pareja puede ser tu tutor. ¡Perfecto para parejas bilingües!",
            "Comenzar Ahora",
        ),
    ),
    (
        "fr",
        (
            "Prêts à maîtriser {lang} ensemble? Pratiquez avec le chat vocal IA, sauvegardez vos phrases préférées dans Love Log, et votre partenaire peut devenir votre tuteur. Parfait pour couples bilingues!",
            "Commencer Maintenant",
        ),
    ),
    (
        "it",
        (
            "Pronti a padroneggiare {lang} con il tuo partner? Esercitati con chat vocale AI, salva frasi nel Love Log, e il tuo partner può essere il tuo tutor. Perfetto per coppie bilingue!",
            "Inizia Ora",
        ),
    ),
    (
        "nl",
        (
            "Klaar om {lang} te beheersen met je partner? Oefen met AI voice chat, bewaar zinnen in je Love Log, en je partner kan je tutor zijn. Perfect voor meertalige stellen!",
            "Begin Nu",
        ),
    ),
    (
        "pl",
        (
            "Gotowy opanować {lang} z partnerem? Ćwicz z czatem głosowym AI, zapisuj frazy w Love Log, a Twój partner może być Twoim korepetytorem. Idealny dla par dwujęzycznych!",
            "Zacznij Teraz",
        ),
    ),
    (
        "pt",
        (
            "Pronto para dominar {lang} com seu parceiro? Pratique com chat de voz IA, salve frases no Love Log, e seu parceiro pode ser seu tutor. Perfeito para casais bilíngues!",
            "Começar Agora",
        ),
    ),
    (
        "ro",
        (
            "Gata să stăpânești {lang} cu partenerul tău? Exersează cu chat vocal AI, salvează fraze în Love Log, iar partenerul tău poate fi tutore. Perfect pentru cupluri bilingve!",
            "Începe Acum",
        ),
    ),
    (
        "ru",
        (
            "Готовы освоить {lang} с партнером? Практикуйтесь с AI голосовым чатом, сохраняйте фразы в Love Log, а партнер может стать вашим учителем. Идеально для двуязычных пар!",
            "Начать Сейчас",
        ),
    ),
    (
        "tr",
        (
            "{lang} partnerinle birlikte öğrenmeye hazır mısın? AI sesli sohbet ile pratik yap, Love Log'a ifadeler kaydet ve partnerin senin öğretmenin olabilir. İki dilli çiftler için mükemmel!",
            "Şimdi Başla",
        ),
    ),
    (
        "uk",
        (
            "Готові опанувати {lang} з партнером? Практикуйте з AI голосовим чатом, зберігайте фрази в Love Log, а партнер може стати вашим вчителем. Ідеально для двомовних пар!",
            "Почати Зараз",
        ),
    ),
];

/// Compliments call-to-action text, keyed by native language.
pub const COMPLIMENTS_CTA: &[(&str, &str)] = &[
    (
        "en",
        "Ready to master these compliments? With Love Languages, your partner can send you Word Gifts with compliments in authentic AI voice. Practice with AI voice chat until you're confident. Your partner becomes your tutor!",
    ),
    (
        "es",
        "¿Listo para dominar estos cumplidos? Con Love Languages, tu pareja puede enviarte Word Gifts con cumplidos en voz AI auténtica. Practica con el chat de voz AI hasta que tengas confianza. ¡Tu pareja se convierte en tu tutor!",
    ),
    (
        "fr",
        "Prêt(e) à maîtriser ces compliments ? Avec Love Languages, votre partenaire peut vous envoyer des Word Gifts avec compliments en voix IA authentique. Pratiquez avec le chat vocal IA jusqu'à ce que vous soyez confiant(e). Votre partenaire devient votre tuteur !",
    ),
    (
        "de",
        "Bereit, diese Komplimente zu meistern? Mit Love Languages kann dein Partner dir Word Gifts mit Komplimenten in authentischer KI-Stimme senden. Übe mit KI-Sprach-Chat, bis du selbstbewusst bist. Dein Partner wird dein Tutor!",
    ),
    (
        "it",
        "Pronto a pronunciare questi complimenti perfettamente? Con Love Languages, il tuo partner può inviarti Word Gifts con complimenti in voce AI autentica. Pratica con la chat vocale AI finché non sarai sicuro. Il tuo partner diventa il tuo tutor!",
    ),
    (
        "pt",
        "Pronto para dominar esses elogios? Com Love Languages, seu parceiro pode enviar Word Gifts com elogios em voz AI autêntica. Pratique com o chat de voz AI até ter confiança. Seu parceiro se torna seu tutor!",
    ),
    (
        "pl",
        "Gotowy, aby opanować te komplimenty? Dzięki Love Languages Twój partner może wysyłać Ci Word Gifts z komplementami w autentycznym głosie AI. Ćwicz wymowę przez czat AI, aż będziesz pewny siebie. Twój partner staje się Twoim tutorem!",
    ),
    (
        "ro",
        "Gata să stăpânești aceste complimente? Cu Love Languages, partenerul tău poate trimite Word Gifts cu complimente în voce AI autentică. Exersează cu chat-ul vocal AI până devii încrezător. Partenerul tău devine tutorele tău!",
    ),
    (
        "nl",
        "Klaar om deze complimenten te beheersen? Met Love Languages kan je partner je Word Gifts sturen met complimenten in authentieke AI-stem. Oefen met AI-spraakchat tot je zelfverzekerd bent. Je partner wordt je tutor!",
    ),
    (
        "ru",
        "Готовы освоить эти комплименты? С Love Languages ваш партнёр может отправлять вам Word Gifts с комплиментами голосом AI. Практикуйте с голосовым чатом AI, пока не обретёте уверенность. Ваш партнёр становится вашим преподавателем!",
    ),
    (
        "uk",
        "Готові опанувати ці компліменти? З Love Languages ваш партнер може надсилати вам Word Gifts з компліментами голосом AI. Практикуйте з голосовим чатом AI, поки не набудете впевненості. Ваш партнер стає вашим викладачем!",
    ),
    (
        "cs",
        "Připraveni zvládnout tyto komplimenty? S Love Languages vám partner může posílat Word Gifts s komplimenty v autentickém AI hlasu. Procvičujte s AI hlasovým chatem, dokud nebudete sebevědomí. Váš partner se stane vaším lektorem!",
    ),
    (
        "sv",
        "Redo att bemästra dessa komplimanger? Med Love Languages kan din partner skicka Word Gifts med komplimanger i autentisk AI-röst. Öva med AI-röstchatt tills du känner dig säker. Din partner blir din lärare!",
    ),
    (
        "da",
        "Klar til at mestre disse komplimenter? Med Love Languages kan din partner sende dig Word Gifts med komplimenter i autentisk AI-stemme. Øv med AI-stemmechat indtil du er selvsikker. Din partner bliver din lærer!",
    ),
    (
        "no",
        "Klar til å mestre disse komplimentene? Med Love Languages kan partneren din sende deg Word Gifts med komplimenter i autentisk AI-stemme. Øv med AI-stemmechat til du er selvsikker. Partneren din blir læreren din!",
    ),
    (
        "el",
        "Έτοιμοι να κατακτήσετε αυτά τα κομπλιμέντα; Με το Love Languages, ο σύντροφός σας μπορεί να σας στείλει Word Gifts με κομπλιμέντα σε αυθεντική φωνή AI. Εξασκηθείτε με φωνητική συνομιλία AI μέχρι να αισθανθείτε σίγουροι. Ο σύντροφός σας γίνεται ο δάσκαλός σας!",
    ),
    (
        "hu",
        "Készen áll ezeket a bókokat elsajátítani? A Love Languages-szel partnere Word Gifts-eket küldhet autentikus AI hanggal. Gyakoroljon AI hangchatttel, amíg magabiztossá nem válik. Partnere tanárává válik!",
    ),
    (
        "tr",
        "Bu iltifatları ustalaştırmaya hazır mısınız? Love Languages ile partneriniz size otantik AI sesiyle iltifatlar içeren Word Gifts gönderebilir. Kendinize güvenene kadar AI sesli sohbetle pratik yapın. Partneriniz öğretmeniniz olur!",
    ),
];

/// Compliments call-to-action button labels, keyed by native language.
pub const COMPLIMENTS_BUTTON: &[(&str, &str)] = &[
    ("en", "Start Learning"),
    ("es", "Comenzar a Aprender"),
    ("fr", "Commencer à Apprendre"),
    ("de", "Jetzt Lernen"),
    ("it", "Inizia a Imparare"),
    ("pt", "Começar a Aprender"),
    ("pl", "Rozpocznij Naukę"),
    ("ro", "Începe să Înveți"),
    ("nl", "Begin met Leren"),
    ("ru", "Начать Обучение"),
    ("uk", "Почати Навчання"),
    ("cs", "Začít se Učit"),
    ("sv", "Börja Lära"),
    ("da", "Begynd at Lære"),
    ("no", "Begynn å Lære"),
    ("el", "Ξεκινήστε τη Μάθηση"),
    ("hu", "Kezdj el Tanulni"),
    ("tr", "Öğrenmeye Başla"),
];

/// Compliments title templates with `{num}` and `{lang}` slots, keyed by native language.
pub const TITLE_TEMPLATES: &[(&str, &str)] = &[
    ("en", "{num} {lang} Compliments for Your Partner"),
    ("es", "{num} Cumplidos en {lang} para Tu Pareja"),
    ("fr", "{num} Compliments en {lang} pour Votre Partenaire"),
    ("de", "{num} {lang} Komplimente für Deinen Partner"),
    ("it", "{num} Complimenti in {lang} per il Tuo Partner"),
    ("pt", "{num} Elogios em {lang} para Seu Parceiro"),
    ("pl", "{num} Komplementów po {lang} dla Partnera"),
    ("ro", "{num} Complimente în {lang} pentru Partenerul Tău"),
    ("nl", "{num} Complimenten in {lang} voor Je Partner"),
    ("ru", "{num} комплиментов на {lang} для партнёра"),
    ("uk", "{num} компліментів {lang} для партнера"),
    ("cs", "{num} komplimentů v {lang} pro partnera"),
    ("sv", "{num} komplimanger på {lang} för din partner"),
    ("da", "{num} komplimenter på {lang} til din partner"),
    ("no", "{num} komplimenter på {lang} til partneren din"),
    ("el", "{num} κομπλιμέντα στα {lang} για τον σύντροφό σας"),
    ("hu", "{num} bók {lang} nyelven a partnerednek"),
    ("tr", "Partneriniz için {num} {lang} İltifat"),
];

/// Compliments description templates with `{phrase}`, `{count}` and `{lang}` slots.
pub const DESCRIPTION_TEMPLATES: &[(&str, &str)] = &[
    ("en", "Master '{phrase}' and {count}+ {lang} compliments. Pronunciation guide included."),
    ("es", "Domina '{phrase}' y más cumplidos en {lang}. Guía de pronunciación incluida."),
    (
        "fr",
        "Maîtrisez '{phrase}' et {count}+ compliments en {lang}. Guide de prononciation inclus.",
    ),
    ("de", "Meistere '{phrase}' und {count}+ {lang} Komplimente. Ausspracheführer enthalten."),
    ("it", "Impara '{phrase}' e {count}+ complimenti in {lang}. Guida alla pronuncia inclusa."),
    ("pt", "Domine '{phrase}' e {count}+ elogios em {lang}. Guia de pronúncia incluído."),
    ("pl", "Opanuj '{phrase}' i {count}+ komplementów po {lang}. Przewodnik wymowy dołączony."),
    ("ro", "Stăpânește '{phrase}' și {count}+ complimente în {lang}. Ghid de pronunție inclus."),
    ("nl", "Beheers '{phrase}' en {count}+ complimenten in {lang}. Uitspraakgids inbegrepen."),
    ("ru", "Освойте '{phrase}' и {count}+ комплиментов на {lang}. Руководство по произношению."),
    ("uk", "Опануйте '{phrase}' та {count}+ компліментів {lang}. Посібник з вимови."),
    ("cs", "Zvládněte '{phrase}' a {count}+ komplimentů v {lang}. Průvodce výslovností."),
    ("sv", "Bemästra '{phrase}' och {count}+ komplimanger på {lang}. Uttalguide inkluderad."),
    ("da", "Mestre '{phrase}' og {count}+ komplimenter på {lang}. Udtalsguide inkluderet."),
    ("no", "Mestre '{phrase}' og {count}+ komplimenter på {lang}. Uttalsguide inkludert."),
    ("el", "Κατακτήστε το '{phrase}' και {count}+ κομπλιμέντα στα {lang}. Οδηγός προφοράς."),
    ("hu", "Sajátítsd el a(z) '{phrase}' és {count}+ bókot {lang} nyelven. Kiejtési útmutató."),
    ("tr", "'{phrase}' ve {count}+ {lang} iltifatı öğrenin. Telaffuz kılavuzu dahil."),
];

/// A signature compliment in each target language, with gendered endings.
pub const GENDERED_PHRASES: &[(&str, &str)] = &[
    ("en", "You look amazing"),
    ("es", "Eres hermosa/o"),
    ("fr", "Tu es belle/beau"),
    ("de", "Du bist wunderschön"),
    ("it", "Sei bellissima/o"),
    ("pt", "Você é linda/o"),
    ("pl", "Jesteś piękna/y"),
    ("ro", "Ești frumoasă"),
    ("nl", "Je bent mooi"),
    ("ru", "Ты прекрасна/ен"),
    ("uk", "Ти прекрасна/ий"),
    ("cs", "Jsi krásná/ý"),
    ("sv", "Du är vacker"),
    ("da", "Du er smuk"),
    ("no", "Du er vakker"),
    ("el", "Είσαι όμορφη/ος"),
    ("hu", "Gyönyörű vagy"),
    ("tr", "Çok güzelsin"),
];

/// A signature compliment in each target language, single form.
pub const PLAIN_PHRASES: &[(&str, &str)] = &[
    ("en", "You look amazing"),
    ("es", "Eres hermosa"),
    ("fr", "Tu es belle"),
    ("de", "Du bist wunderschön"),
    ("it", "Sei bellissima"),
    ("pt", "Você é linda"),
    ("pl", "Jesteś piękna"),
    ("ro", "Ești frumoasă"),
    ("nl", "Je bent mooi"),
    ("ru", "Ты прекрасна"),
    ("uk", "Ти прекрасна"),
    ("cs", "Jsi krásná"),
    ("sv", "Du är vacker"),
    ("da", "Du er smuk"),
    ("no", "Du er vakker"),
    ("el", "Είσαι όμορφη"),
    ("hu", "Gyönyörű vagy"),
    ("tr", "Çok güzelsin"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_every_slot() {
        let out = fill(
            "{num} {lang} Compliments, {num} times",
            &[("num", "50"), ("lang", "German")],
        );
        assert_eq!(out, "50 German Compliments, 50 times");
    }

    #[test]
    fn test_fill_leaves_unknown_slots() {
        assert_eq!(fill("{a} {b}", &[("a", "x")]), "x {b}");
    }

    #[test]
    fn test_localized_falls_back_to_english() {
        assert_eq!(localized(COMPLIMENTS_BUTTON, "de"), "Jetzt Lernen");
        assert_eq!(localized(COMPLIMENTS_BUTTON, "xx"), "Start Learning");
    }

    #[test]
    fn test_romantic_cta_covers_twelve_natives() {
        assert_eq!(ROMANTIC_CTA.len(), 12);
        for (native, (text, button)) in ROMANTIC_CTA {
            assert!(text.contains("{lang}"), "{native} text lacks slot");
            assert!(!button.is_empty());
        }
    }

    #[test]
    fn test_compliment_tables_share_keys() {
        for (code, _) in TITLE_TEMPLATES {
            assert!(lookup(COMPLIMENTS_CTA, code).is_some(), "{code}");
            assert!(lookup(COMPLIMENTS_BUTTON, code).is_some(), "{code}");
            assert!(lookup(DESCRIPTION_TEMPLATES, code).is_some(), "{code}");
            assert!(lookup(GENDERED_PHRASES, code).is_some(), "{code}");
            assert!(lookup(PLAIN_PHRASES, code).is_some(), "{code}");
        }
    }
}
