//! Translation catalog: (code, display name) pairs grouped by language.
//!
//! The code is the token accepted in citation text and sent verbatim to the
//! verse API. Codes are unique within a language; a handful repeat across
//! languages and are treated as acceptable duplicates.

/// Translation catalog, scanned in order during resolution.
pub const TRANSLATIONS: &[(&str, &[(&str, &str)])] = &[
    ("afrikaans", &[("aov", "Ou Vertaling")]),
    ("albanian", &[("albanian", "Albanian")]),
    (
        "amharic",
        &[
            ("amharic", "Amharic NT"),
            ("hsab", "Haile Selassie Amharic Bible"),
        ],
    ),
    ("arabic", &[("arabicsv", "Smith and Van Dyke")]),
    ("aramaic", &[("peshitta", "Peshitta NT")]),
    (
        "armenian",
        &[
            ("easternarmenian", "Eastern Genesis Exodus Gospels"),
            ("westernarmenian", "Western NT"),
        ],
    ),
    ("basque", &[("basque", "Navarro Labourdin NT")]),
    ("breton", &[("breton", "Gospels")]),
    ("bulgarian", &[("bulgarian1940", "Bulgarian Bible 1940")]),
    ("chamorro", &[("chamorro", "Psalms Gospels Acts")]),
    (
        "chinese",
        &[
            ("cns", "NCV Simplified"),
            ("cnt", "NCV Traditional"),
            ("cus", "Union Simplified"),
            ("cut", "Union Traditional"),
        ],
    ),
    (
        "coptic",
        &[
            ("bohairic", "Bohairic NT"),
            ("coptic", "New Testament"),
            ("sahidic", "Sahidic NT"),
        ],
    ),
    ("croatian", &[("croatia", "Croatian")]),
    (
        "czech",
        &[
            ("bkr", "Czech BKR"),
            ("cep", "Czech CEP"),
            ("kms", "Czech KMS"),
            ("nkb", "Czech NKB"),
        ],
    ),
    ("danish", &[("danish", "Danish")]),
    ("dutch", &[("statenvertaling", "Dutch Staten Vertaling")]),
    (
        "english",
        &[
            ("kjv", "King James Version"),
            ("akjv", "American King James Version"),
            ("asv", "American Standard Version"),
            ("basicenglish", "Basic English Bible"),
            ("douayrheims", "Douay Rheims"),
            ("wb", "Websters Bible"),
            ("weymouth", "Weymouth NT"),
            ("web", "World English Bible"),
            ("ylt", "Youngs Literal Translation"),
        ],
    ),
    ("esperanto", &[("esperanto", "Esperanto")]),
    ("estonian", &[("estonian", "Estonian")]),
    (
        "finnish",
        &[
            ("finnish1776", "Finnish Bible 1776"),
            ("pyharaamattu1933", "Pyha Raamattu 1933"),
            ("pyharaamattu1992", "Pyha Raamattu 1992"),
        ],
    ),
    (
        "french",
        &[
            ("darby", "Darby"),
            ("ls1910", "Louis Segond 1910"),
            ("martin", "Martin 1744"),
            ("ostervald", "Ostervald 1996 revision"),
        ],
    ),
    ("georgian", &[("Gospels Acts James", "Georgian")]),
    (
        "german",
        &[
            ("elberfelder", "Elberfelder 1871"),
            ("elberfelder1905", "Elberfelder 1905"),
            ("luther1545", "Luther 1545"),
            ("luther1912", "Luther 1912"),
            ("schlachter", "Schlachter 1951"),
        ],
    ),
    ("gothic", &[("gothic", "Gothic Nehemiah NT Portions")]),
    (
        "greek",
        &[
            ("moderngreek", "Greek Modern"),
            ("majoritytext", "NT Byzantine Majority Text 2000 Parsed"),
            ("byzantine", "NT Byzantine Majority Text 2000"),
            ("textusreceptus", "NT Textus Receptus 1550 1894 Parsed"),
            ("text", "Textus Receptus"),
            ("tischendorf", "NT Tischendorf 8th Ed"),
            ("westcotthort", "NT Westcott Hort UBS4 variants Parsed"),
            ("westcott", "NT Westcott Hort UBS4 variants"),
            ("lxxpar", "OT LXX Accented Roots Parsing"),
            ("lxx", "OT LXX Accented"),
            ("lxxunaccentspar", "OT LXX Unaccented Roots Parsing"),
            ("lxxunaccents", "OT LXX Unaccented"),
        ],
    ),
    (
        "hebrew",
        &[
            ("aleppo", "Aleppo Codex"),
            ("modernhebrew", "Hebrew Modern"),
            ("bhsnovowels", "OT BHS Consonants Only"),
            ("bhs", "OT BHS Consonants and Vowels"),
            ("wlcnovowels", "OT WLC Consonants Only"),
            ("wlc", "OT WLC Consonants and Vowels"),
            ("codex", "OT Westminster Leningrad Codex"),
        ],
    ),
    ("hungarian", &[("karoli", "Hungarian Karoli")]),
    (
        "italian",
        &[
            ("giovanni", "Giovanni Diodati Bible 1649"),
            ("riveduta", "Riveduta Bible 1927"),
        ],
    ),
    ("kabyle", &[("kabyle", "Kabyle NT")]),
    ("korean", &[("korean", "Korean")]),
    (
        "latin",
        &[
            ("newvulgate", "Nova Vulgata"),
            ("vulgate", "Vulgata Clementina"),
        ],
    ),
    ("latvian", &[("latvian", "New Testament")]),
    ("lithuanian", &[("lithuanian", "Lithuanian")]),
    (
        "manx_Gaelic",
        &[("manxgaelic", "Manx Gaelic Esther Jonah 4 Gospels")],
    ),
    ("maori", &[("maori", "Maori")]),
    ("myanmar_Burmse", &[("judson", "Judson 1835")]),
    ("norwegian", &[("bibelselskap", "Det Norsk Bibelselskap 1930")]),
    ("portuguese", &[("almeida", "Almeida Atualizada")]),
    (
        "potawatomi",
        &[("potawatomi", "Potawatomi Matthew Acts Lykins 1844")],
    ),
    ("romani", &[("rom", "Romani NT E Lashi Viasta Gypsy")]),
    ("romanian", &[("cornilescu", "Cornilescu")]),
    (
        "russian",
        &[
            ("makarij", "Makarij Translation Pentateuch 1825"),
            ("synodal", "Synodal Translation 1876"),
            ("zhuromsky", "Victor Zhuromsky NT"),
        ],
    ),
    (
        "scottish_Gaelic",
        &[("gaelic", "Scots Gaelic Gospel of Mark")],
    ),
    (
        "spanish",
        &[
            ("valera", "Reina Valera 1909"),
            ("rv1858", "Reina Valera NT 1858"),
            ("sse", "Sagradas Escrituras 1569"),
        ],
    ),
    ("swahili", &[("swahili", "Swahili")]),
    ("swedish", &[("swedish", "Swedish 1917")]),
    ("tagalog", &[("tagalog", "Ang Dating Biblia 1905")]),
    ("tamajaq", &[("tamajaq", "Tamajaq Portions")]),
    ("thai", &[("thai", "Thai from kjv")]),
    (
        "turkish",
        &[("tnt", "NT 1987 1994"), ("turkish", "Turkish")],
    ),
    ("ukrainian", &[("ukranian", "NT P Kulish 1871")]),
    ("uma", &[("uma", "Uma NT")]),
    ("vietnamese", &[("vietnamese", "Vietnamese 1934")]),
    ("wolof", &[("wolof", "Wolof NT")]),
    ("xhosa", &[("xhosa", "Xhosa")]),
];

/// Iterate the known language names in catalog order.
pub fn languages() -> impl Iterator<Item = &'static str> {
    TRANSLATIONS.iter().map(|(language, _)| *language)
}

/// Look up the editions available for a language (case-insensitive).
pub fn editions_for(language: &str) -> Option<&'static [(&'static str, &'static str)]> {
    let wanted = language.trim();
    TRANSLATIONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map(|(_, editions)| *editions)
}

/// Describe the catalog for a reply: the editions of one language as
/// "Display Name (code)" entries, or every known language when no language
/// is given. Returns `None` for an unknown language.
pub fn describe_editions(language: Option<&str>) -> Option<String> {
    match language {
        Some(language) => editions_for(language).map(|editions| {
            editions
                .iter()
                .map(|(code, name)| format!("{name} ({code})"))
                .collect::<Vec<_>>()
                .join(", ")
        }),
        None => Some(languages().collect::<Vec<_>>().join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_unique_within_language() {
        for (language, editions) in TRANSLATIONS {
            let mut seen = HashSet::new();
            for (code, _) in *editions {
                assert!(
                    seen.insert(code.to_lowercase()),
                    "duplicate code '{code}' under language '{language}'"
                );
            }
        }
    }

    #[test]
    fn test_editions_for_is_case_insensitive() {
        assert!(editions_for("English").is_some());
        assert!(editions_for("manx_gaelic").is_some());
        assert!(editions_for("klingon").is_none());
    }

    #[test]
    fn test_describe_editions_for_language() {
        let listing = describe_editions(Some("afrikaans")).unwrap();
        assert_eq!(listing, "Ou Vertaling (aov)");

        let english = describe_editions(Some("english")).unwrap();
        assert!(english.contains("King James Version (kjv)"));
        assert!(english.contains("World English Bible (web)"));
    }

    #[test]
    fn test_describe_editions_lists_languages() {
        let listing = describe_editions(None).unwrap();
        assert!(listing.contains("english"));
        assert!(listing.contains("xhosa"));
    }

    #[test]
    fn test_unknown_language_yields_none() {
        assert!(describe_editions(Some("latin pig")).is_none());
    }
}
