// src/services/normalize.rs

//! Search parameter normalization.
//!
//! Callers type university and program names the way humans do; the portal
//! only matches its official spellings. Normalization is lookup-based:
//! exact match first, then the well-known abbreviations, then substring
//! containment against the official list with Turkish diacritics folded
//! (plain `to_uppercase` maps `i` to `I`, which breaks dotted-İ words).

use crate::models::{ProgramTrack, SearchParams};

/// Well-known university abbreviations, keyed by their folded form.
const UNIVERSITY_ABBREVIATIONS: &[(&str, &str)] = &[
    ("ODTU", "ORTA DOĞU TEKNİK ÜNİVERSİTESİ"),
    ("METU", "ORTA DOĞU TEKNİK ÜNİVERSİTESİ"),
    ("ITU", "İSTANBUL TEKNİK ÜNİVERSİTESİ"),
    ("YTU", "YILDIZ TEKNİK ÜNİVERSİTESİ"),
    ("KTU", "KARADENİZ TEKNİK ÜNİVERSİTESİ"),
    ("DEU", "DOKUZ EYLÜL ÜNİVERSİTESİ"),
    ("IYTE", "İZMİR YÜKSEK TEKNOLOJİ ENSTİTÜSÜ"),
    ("BOUN", "BOĞAZİÇİ ÜNİVERSİTESİ"),
    ("BU", "BOĞAZİÇİ ÜNİVERSİTESİ"),
    ("GTU", "GEBZE TEKNİK ÜNİVERSİTESİ"),
    ("AU", "ANKARA ÜNİVERSİTESİ"),
    ("HU", "HACETTEPE ÜNİVERSİTESİ"),
];

/// Official university names, as the portal spells them.
const UNIVERSITIES: &[&str] = &[
    "ABDULLAH GÜL ÜNİVERSİTESİ",
    "AKDENİZ ÜNİVERSİTESİ",
    "ANADOLU ÜNİVERSİTESİ",
    "ANKARA ÜNİVERSİTESİ",
    "ATATÜRK ÜNİVERSİTESİ",
    "BAHÇEŞEHİR ÜNİVERSİTESİ",
    "BİLKENT ÜNİVERSİTESİ",
    "BOĞAZİÇİ ÜNİVERSİTESİ",
    "BURSA ULUDAĞ ÜNİVERSİTESİ",
    "ÇANAKKALE ONSEKİZ MART ÜNİVERSİTESİ",
    "ÇUKUROVA ÜNİVERSİTESİ",
    "DİCLE ÜNİVERSİTESİ",
    "DOKUZ EYLÜL ÜNİVERSİTESİ",
    "EGE ÜNİVERSİTESİ",
    "ERCİYES ÜNİVERSİTESİ",
    "ESKİŞEHİR OSMANGAZİ ÜNİVERSİTESİ",
    "FIRAT ÜNİVERSİTESİ",
    "GALATASARAY ÜNİVERSİTESİ",
    "GAZİ ÜNİVERSİTESİ",
    "GAZİANTEP ÜNİVERSİTESİ",
    "GEBZE TEKNİK ÜNİVERSİTESİ",
    "HACETTEPE ÜNİVERSİTESİ",
    "İHSAN DOĞRAMACI BİLKENT ÜNİVERSİTESİ",
    "İNÖNÜ ÜNİVERSİTESİ",
    "İSTANBUL AYDIN ÜNİVERSİTESİ",
    "İSTANBUL BİLGİ ÜNİVERSİTESİ",
    "İSTANBUL MEDİPOL ÜNİVERSİTESİ",
    "İSTANBUL TEKNİK ÜNİVERSİTESİ",
    "İSTANBUL ÜNİVERSİTESİ",
    "İSTANBUL ÜNİVERSİTESİ-CERRAHPAŞA",
    "İZMİR YÜKSEK TEKNOLOJİ ENSTİTÜSÜ",
    "KADİR HAS ÜNİVERSİTESİ",
    "KARADENİZ TEKNİK ÜNİVERSİTESİ",
    "KOÇ ÜNİVERSİTESİ",
    "KOCAELİ ÜNİVERSİTESİ",
    "MARMARA ÜNİVERSİTESİ",
    "MERSİN ÜNİVERSİTESİ",
    "ONDOKUZ MAYIS ÜNİVERSİTESİ",
    "ORTA DOĞU TEKNİK ÜNİVERSİTESİ",
    "PAMUKKALE ÜNİVERSİTESİ",
    "SABANCI ÜNİVERSİTESİ",
    "SAKARYA ÜNİVERSİTESİ",
    "SELÇUK ÜNİVERSİTESİ",
    "SÜLEYMAN DEMİREL ÜNİVERSİTESİ",
    "TED ÜNİVERSİTESİ",
    "TOBB EKONOMİ VE TEKNOLOJİ ÜNİVERSİTESİ",
    "TRAKYA ÜNİVERSİTESİ",
    "YAŞAR ÜNİVERSİTESİ",
    "YEDİTEPE ÜNİVERSİTESİ",
    "YILDIZ TEKNİK ÜNİVERSİTESİ",
];

/// Short program names and the full names they commonly stand for.
const PROGRAM_EXPANSIONS: &[(&str, &[&str])] = &[
    (
        "bilgisayar",
        &[
            "Bilgisayar Mühendisliği",
            "Bilgisayar Bilimleri",
            "Bilgisayar Bilimleri ve Mühendisliği",
            "Bilgisayar Mühendisliği (M.T.O.K.)",
        ],
    ),
    (
        "yazılım",
        &[
            "Yazılım Mühendisliği",
            "Yazılım Geliştirme (Fakülte)",
            "Yazılım Mühendisliği (M.T.O.K.)",
        ],
    ),
    (
        "elektrik",
        &[
            "Elektrik Mühendisliği",
            "Elektrik-Elektronik Mühendisliği",
            "Elektrik-Elektronik Mühendisliği (M.T.O.K.)",
        ],
    ),
    (
        "elektronik",
        &[
            "Elektronik Mühendisliği",
            "Elektronik ve Haberleşme Mühendisliği",
            "Elektrik-Elektronik Mühendisliği",
        ],
    ),
    ("makine", &["Makine Mühendisliği", "Makine Mühendisliği (M.T.O.K.)"]),
    (
        "endüstri",
        &["Endüstri Mühendisliği", "Endüstri Yönetimi Mühendisliği"],
    ),
    (
        "endustri",
        &["Endüstri Mühendisliği", "Endüstri Yönetimi Mühendisliği"],
    ),
    ("inşaat", &["İnşaat Mühendisliği", "İnşaat Mühendisliği (M.T.O.K.)"]),
    ("insaat", &["İnşaat Mühendisliği", "İnşaat Mühendisliği (M.T.O.K.)"]),
    ("tıp", &["Tıp"]),
    ("tip", &["Tıp"]),
    ("diş", &["Diş Hekimliği"]),
    ("dis", &["Diş Hekimliği"]),
    ("hemşire", &["Hemşirelik (Fakülte)", "Hemşirelik (Yüksekokul)"]),
    ("hemsire", &["Hemşirelik (Fakülte)", "Hemşirelik (Yüksekokul)"]),
    (
        "mimarlık",
        &["Mimarlık", "İç Mimarlık", "Peyzaj Mimarlığı"],
    ),
];

/// Uppercase with Turkish diacritics folded to their ASCII skeleton, for
/// comparisons only (never for output).
fn fold_turkish(s: &str) -> String {
    s.to_uppercase()
        .chars()
        .map(|c| match c {
            'İ' => 'I',
            'Ü' => 'U',
            'Ö' => 'O',
            'Ş' => 'S',
            'Ç' => 'C',
            'Ğ' => 'G',
            _ => c,
        })
        .collect()
}

/// Resolve a university name to its official spelling.
///
/// Falls back to the uppercased input when nothing matches, which at least
/// matches the portal's own case convention.
pub fn normalize_university(name: &str) -> String {
    let cleaned = name.trim().to_uppercase();
    if cleaned.is_empty() {
        return cleaned;
    }
    if UNIVERSITIES.contains(&cleaned.as_str()) {
        return cleaned;
    }

    let folded = fold_turkish(name.trim());
    if let Some((_, full)) = UNIVERSITY_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| *abbr == folded)
    {
        return (*full).to_string();
    }

    if let Some(hit) = UNIVERSITIES
        .iter()
        .find(|official| fold_turkish(official).contains(&folded))
    {
        return (*hit).to_string();
    }

    cleaned
}

/// Expand a short program name to the full names it may stand for.
pub fn expand_program(name: &str) -> Vec<String> {
    let key = name.trim().to_lowercase();
    if key.is_empty() {
        return Vec::new();
    }

    if let Some((_, expansions)) = PROGRAM_EXPANSIONS.iter().find(|(k, _)| *k == key) {
        return expansions.iter().map(|s| (*s).to_string()).collect();
    }

    vec![name.trim().to_string()]
}

/// Normalize search parameters the way the portal expects them.
///
/// Provinces are uppercased, score types lowercased (the associate track
/// only knows `tyt`, so bachelor score types are mapped over), and the
/// university name resolved against the official list.
pub fn normalize_params(track: ProgramTrack, params: &SearchParams) -> SearchParams {
    let mut out = params.clone();

    if let Some(city) = &out.city {
        out.city = Some(city.trim().to_uppercase());
    }

    if let Some(score) = &out.score_type {
        let mut score = score.trim().to_lowercase();
        if track == ProgramTrack::Associate
            && matches!(score.as_str(), "say" | "ea" | "söz" | "dil")
        {
            score = "tyt".to_string();
        }
        out.score_type = Some(score);
    }

    if let Some(university) = &out.university {
        out.university = Some(normalize_university(university));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_name_passes_through() {
        assert_eq!(
            normalize_university("BOĞAZİÇİ ÜNİVERSİTESİ"),
            "BOĞAZİÇİ ÜNİVERSİTESİ"
        );
    }

    #[test]
    fn abbreviations_resolve() {
        assert_eq!(normalize_university("ODTÜ"), "ORTA DOĞU TEKNİK ÜNİVERSİTESİ");
        assert_eq!(normalize_university("metu"), "ORTA DOĞU TEKNİK ÜNİVERSİTESİ");
        assert_eq!(normalize_university("itü"), "İSTANBUL TEKNİK ÜNİVERSİTESİ");
    }

    #[test]
    fn partial_names_match_despite_dotted_i() {
        assert_eq!(normalize_university("boğaziçi"), "BOĞAZİÇİ ÜNİVERSİTESİ");
        assert_eq!(normalize_university("Hacettepe"), "HACETTEPE ÜNİVERSİTESİ");
    }

    #[test]
    fn unknown_name_uppercased() {
        assert_eq!(normalize_university("Atlantis"), "ATLANTIS");
    }

    #[test]
    fn program_expansion() {
        let expanded = expand_program("bilgisayar");
        assert!(expanded.contains(&"Bilgisayar Mühendisliği".to_string()));
        assert!(expanded.len() > 1);

        assert_eq!(expand_program("Astronomi"), vec!["Astronomi"]);
        assert!(expand_program("  ").is_empty());
    }

    #[test]
    fn params_normalized_per_track() {
        let params = SearchParams {
            city: Some("ankara".to_string()),
            score_type: Some("SAY".to_string()),
            ..SearchParams::default()
        };

        let bachelor = normalize_params(ProgramTrack::Bachelor, &params);
        assert_eq!(bachelor.city.as_deref(), Some("ANKARA"));
        assert_eq!(bachelor.score_type.as_deref(), Some("say"));

        let associate = normalize_params(ProgramTrack::Associate, &params);
        assert_eq!(associate.score_type.as_deref(), Some("tyt"));
    }
}
