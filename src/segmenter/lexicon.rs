// Lexicon tables consulted by the segmenter: punctuation classes and word lists

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// All terminal markers, including the ellipsis token the tokenizer keeps whole.
const TERMINALS: &[&str] = &[
    ".", "!", "?", "...", "\u{2026}", "\u{203C}", "\u{203D}", "\u{2047}", "\u{2048}",
    "\u{2049}", "\u{3002}", "\u{FE52}", "\u{FE57}", "\u{FF01}", "\u{FF0E}", "\u{FF1F}",
    "\u{FF61}",
];

const OPENING_BRACKETS: &str = "([{\u{FF5F}\u{FF5B}\u{FF3B}\u{FF08}\u{FE5D}\u{FE5B}\u{FE59}\u{FD3E}\u{301A}\u{3018}\u{2985}\u{2983}\u{2329}";

/// Closing brackets that can follow a terminal and still belong to the sentence.
const CLOSING_BRACKETS: &str = ")]}\u{FF60}\u{FF5D}\u{FF3D}\u{FF09}\u{FE5E}\u{FE5C}\u{FE5A}\u{FD3F}\u{301B}\u{3019}\u{2986}\u{2984}\u{232A}";

const OPENING_QUOTES: &str = "'\"\u{00AB}\u{2018}\u{201C}\u{201E}\u{27E8}\u{27EA}\u{2E28}\u{3008}\u{300A}\u{301D}";

/// Closing quotes that can follow a terminal and still belong to the sentence.
const CLOSING_QUOTES: &str = "'\"\u{00B4}\u{00BB}\u{2019}\u{201D}\u{232A}\u{27E9}\u{27EB}\u{2E29}\u{3009}\u{300B}\u{301E}";

const INNER_SENTENCE_PUNCTUATION: &str = ",;:";

const VOWELS: &str = "aeiou\u{E1}\u{E9}\u{ED}\u{F3}\u{FA}\u{E4}\u{EB}\u{EF}\u{F6}\u{FC}\u{E5}\u{E6}\u{F8}";

const ROMAN_NUMERALS: &[&str] = &[
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV",
    "XV", "XVI", "XVII", "XVIII", "XIX", "XX", "XXI", "XXII", "XXIII", "XXIV", "XXV", "XXVI",
    "XXVII", "XXVIII", "XXIX", "XXX",
];

/// Month abbreviations (English, German, Spanish, Portuguese, French, Italian).
const MONTH_ABBREVIATIONS: &[&str] = &[
    "Jan", "J\u{E4}n", "Ene", "Gen", "Feb", "Fev", "Fév", "M\u{E4}r", "Mar", "Apr", "Abr",
    "Avr", "May", "Mai", "Mag", "Jun", "Giu", "Jul", "Lug", "Aug", "Ago", "Sep", "Sept",
    "Set", "Oct", "Okt", "Out", "Ott", "Nov", "Dic", "Dez", "Dec", "Déc",
];

/// Words that, followed by a period, do not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    // titles and addresses
    "Adm", "Capt", "Col", "Dr", "Dres", "Gen", "Gov", "Hon", "Hr", "Hrn", "Jr", "Lt", "Maj",
    "Messrs", "Mlle", "Mme", "Mr", "Mrs", "Ms", "Mt", "Pres", "Prof", "Rep", "Rev", "Sen",
    "Sgt", "Sr", "Sra", "Srta", "St", "Ave", "Rd", "Str",
    // academic and bibliographic
    "Abb", "Abs", "Abt", "Akad", "Anh", "Anm", "Art", "Aufl", "Bd", "Bde", "Bsp", "Cf",
    "Chr", "Dipl", "Ed", "Eds", "Fig", "Figs", "Hg", "Hrsg", "Jh", "Jhd", "Kap", "Mag",
    "Med", "Nat", "Nr", "Op", "Phil", "Proc", "Reg", "Rer", "Sci", "Tab", "Univ", "Vgl",
    "Vol", "Vs",
    "abb", "abs", "abt", "adm", "ap", "approx", "art", "bspw", "bzw", "ca", "capt", "cf",
    "chap", "col", "ders", "dgl", "ebd", "ed", "eds", "engl", "etc", "evtl", "exkl", "fig",
    "figs", "ff", "gal", "gen", "ggf", "hrsg", "inkl", "insb", "jh", "jhd", "kap", "mag",
    "med", "min", "mos", "mrd", "nat", "nr", "op", "orig", "pag", "phil", "pp", "prof",
    "publ", "ref", "resp", "rer", "sci", "sen", "sog", "spp", "sq", "subsp", "synth",
    "tab", "univ", "usw", "var", "vgl", "viz", "vol", "vs", "wks",
    // units and measures that are commonly abbreviated in running text
    "Min", "Max", "max", "Approx", "Abs", "Dept", "dept", "Corp", "corp", "Inc",
];

/// Capitalized words that strongly indicate the start of a new sentence.
const SENTENCE_STARTERS: &[&str] = &[
    // English
    "A", "About", "Above", "According", "Actually", "Additionally", "After", "Afterwards",
    "Again", "All", "Also", "Although", "Always", "An", "And", "Anyway", "As", "At",
    "Because", "Before", "Being", "Besides", "Both", "But", "By", "Can", "Consequently",
    "Could", "Despite", "Did", "Do", "Does", "During", "Each", "Either", "Even", "Every",
    "Finally", "For", "Furthermore", "Given", "Has", "Have", "He", "Hence", "Her", "Here",
    "His", "How", "However", "If", "In", "Indeed", "Instead", "It", "Its", "Let", "Many",
    "Meanwhile", "Moreover", "Most", "Much", "My", "Neither", "Nevertheless", "Next",
    "Nonetheless", "Nor", "Now", "Of", "On", "Once", "Only", "Or", "Our", "Perhaps",
    "She", "Should", "Since", "So", "Some", "Such", "That", "The", "Their", "Then",
    "There", "Therefore", "These", "They", "This", "Those", "Though", "Thus", "To",
    "Today", "Unfortunately", "Unless", "Until", "We", "Well", "What", "When", "Where",
    "Whereas", "Whether", "Which", "While", "Who", "Whose", "Why", "With", "Within",
    "Without", "Would", "Yes", "Yet", "You", "Your",
    // German
    "Aber", "Als", "Auch", "Da", "Dann", "Das", "Dem", "Den", "Der", "Des", "Die", "Dies",
    "Diese", "Dieser", "Doch", "Ein", "Eine", "Einer", "Er", "Es", "Ich", "Im", "Nach",
    "Sie", "Wenn", "Wir",
    // Spanish, French, Italian
    "El", "Ella", "Ellos", "Las", "Los", "Pero", "Una", "Elle", "Ils", "Les", "Mais",
    "Nous", "Vous", "Gli", "Questo",
];

/// Word-list changes applied on top of (or instead of) the built-in lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexiconOverrides {
    /// Replace the built-in word lists instead of extending them.
    pub replace: bool,
    pub abbreviations: Vec<String>,
    pub month_abbreviations: Vec<String>,
    pub sentence_starters: Vec<String>,
    pub roman_numerals: Vec<String>,
}

impl LexiconOverrides {
    pub fn is_empty(&self) -> bool {
        !self.replace
            && self.abbreviations.is_empty()
            && self.month_abbreviations.is_empty()
            && self.sentence_starters.is_empty()
            && self.roman_numerals.is_empty()
    }
}

/// Read-only membership oracles keyed by exact token text.
///
/// Every predicate is false for an empty token text.
#[derive(Debug, Clone)]
pub struct Lexicon {
    terminals: HashSet<String>,
    opening_brackets: HashSet<char>,
    closing_brackets: HashSet<char>,
    opening_quotes: HashSet<char>,
    closing_quotes: HashSet<char>,
    inner_punctuation: HashSet<char>,
    vowels: HashSet<char>,
    roman_numerals: HashSet<String>,
    month_abbreviations: HashSet<String>,
    abbreviations: HashSet<String>,
    sentence_starters: HashSet<String>,
}

static BUILTIN: OnceLock<Lexicon> = OnceLock::new();

fn words(list: &[&str]) -> HashSet<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn roman_numerals() -> HashSet<String> {
    ROMAN_NUMERALS
        .iter()
        .flat_map(|numeral| [numeral.to_string(), numeral.to_lowercase()])
        .collect()
}

/// The token's only character, if it consists of exactly one.
fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl Lexicon {
    /// Build the lexicon from the built-in tables.
    pub fn new() -> Self {
        Self {
            terminals: words(TERMINALS),
            opening_brackets: OPENING_BRACKETS.chars().collect(),
            closing_brackets: CLOSING_BRACKETS.chars().collect(),
            opening_quotes: OPENING_QUOTES.chars().collect(),
            closing_quotes: CLOSING_QUOTES.chars().collect(),
            inner_punctuation: INNER_SENTENCE_PUNCTUATION.chars().collect(),
            vowels: VOWELS
                .chars()
                .flat_map(|c| std::iter::once(c).chain(c.to_uppercase()))
                .collect(),
            roman_numerals: roman_numerals(),
            month_abbreviations: words(MONTH_ABBREVIATIONS),
            abbreviations: words(ABBREVIATIONS),
            sentence_starters: words(SENTENCE_STARTERS),
        }
    }

    /// Process-wide shared instance of the built-in lexicon.
    pub fn builtin() -> &'static Lexicon {
        BUILTIN.get_or_init(Lexicon::new)
    }

    /// Built-in lexicon with the word lists extended or replaced.
    pub fn with_overrides(overrides: &LexiconOverrides) -> Self {
        let mut lexicon = Self::new();
        if overrides.replace {
            lexicon.abbreviations.clear();
            lexicon.month_abbreviations.clear();
            lexicon.sentence_starters.clear();
            lexicon.roman_numerals.clear();
        }
        lexicon.abbreviations.extend(overrides.abbreviations.iter().cloned());
        lexicon
            .month_abbreviations
            .extend(overrides.month_abbreviations.iter().cloned());
        lexicon
            .sentence_starters
            .extend(overrides.sentence_starters.iter().cloned());
        lexicon
            .roman_numerals
            .extend(overrides.roman_numerals.iter().cloned());
        lexicon
    }

    pub fn is_terminal(&self, text: &str) -> bool {
        self.terminals.contains(text)
    }

    pub fn is_opening_bracket(&self, text: &str) -> bool {
        single_char(text).is_some_and(|c| self.opening_brackets.contains(&c))
    }

    pub fn is_closing_bracket(&self, text: &str) -> bool {
        single_char(text).is_some_and(|c| self.closing_brackets.contains(&c))
    }

    pub fn is_opening_quote(&self, text: &str) -> bool {
        single_char(text).is_some_and(|c| self.opening_quotes.contains(&c))
    }

    pub fn is_closing_quote(&self, text: &str) -> bool {
        single_char(text).is_some_and(|c| self.closing_quotes.contains(&c))
    }

    pub fn is_inner_punctuation(&self, text: &str) -> bool {
        single_char(text).is_some_and(|c| self.inner_punctuation.contains(&c))
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&c)
    }

    pub fn is_roman_numeral(&self, text: &str) -> bool {
        self.roman_numerals.contains(text)
    }

    pub fn is_month_abbreviation(&self, text: &str) -> bool {
        self.month_abbreviations.contains(text)
    }

    pub fn is_abbreviation(&self, text: &str) -> bool {
        self.abbreviations.contains(text)
    }

    /// Capitalized words that open a new sentence after a terminal.
    pub fn is_sentence_starter(&self, text: &str) -> bool {
        text.chars().next().is_some_and(char::is_uppercase) && self.sentence_starters.contains(text)
    }

    /// A single alphanumeric character (`A`, `z`, `1`) or a Roman numeral.
    pub fn is_enumerator(&self, text: &str) -> bool {
        single_char(text).is_some_and(char::is_alphanumeric) || self.is_roman_numeral(text)
    }

    /// A single letter that is not a vowel.
    pub fn is_single_consonant(&self, text: &str) -> bool {
        single_char(text).is_some_and(|c| c.is_alphabetic() && !self.is_vowel(c))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}
