//! Problem/Department Translation Lookup
//!
//! Static English/Hindi/Marathi dictionary for complaint departments.
//! English is the canonical storage and aggregation form; this module
//! collapses localized or free-form input into it. Matching cascade:
//!
//! 1. exact match (English case-insensitive, scripts verbatim)
//! 2. case-insensitive exact match on all three languages
//! 3. substring containment, either direction
//! 4. token-level match for Devanagari-script input
//!
//! Unmatched input passes through unchanged, including `None` and the
//! empty string.

/// One department with its translations
#[derive(Debug, Clone, Copy)]
pub struct ProblemTranslation {
    pub english: &'static str,
    pub hindi: &'static str,
    pub marathi: &'static str,
    pub category: &'static str,
}

#[allow(non_snake_case)]
const fn T(
    english: &'static str,
    hindi: &'static str,
    marathi: &'static str,
    category: &'static str,
) -> ProblemTranslation {
    ProblemTranslation {
        english,
        hindi,
        marathi,
        category,
    }
}

/// Department dictionary, including the legacy spelling variants found
/// in historical data. Earlier entries win on ties.
pub const PROBLEM_TRANSLATIONS: &[ProblemTranslation] = &[
    T("Water Supply", "जल आपूर्ति", "जल आपूर्ति", "water"),
    T("Garbage and Cleanliness", "कचरा व स्वच्छता", "घनकचरा व स्वच्छता", "waste"),
    T("Land Encroachment", "भूमि अतिक्रमण", "भूमी अतिक्रमण", "land"),
    T("Property Tax", "मालमत्ता कर", "मालमत्ता कर", "tax"),
    T("Law and Order", "कानून व व्यवस्था", "कायदा व सुव्यवस्था", "law"),
    T("Roads and Traffic", "सड़क व ट्रैफिक", "रस्ते व वाहतूक", "transport"),
    T("City Survey and DPR", "शहर सर्वेक्षण व DPR", "शहर सर्वेक्षण व DPR", "survey"),
    T("Stamp and Registration", "मुहर व नोंदणी", "नोंदणी व मुद्रांक", "registration"),
    T("Slum Rehabilitation", "झोपड़पट्टी पुनर्वसन", "झोपडपट्टी पुनर्वसन", "rehabilitation"),
    T("Electricity Supply", "बिजली आपूर्ति", "वीज वितरण व पुरवठा", "electricity"),
    T("Health Facilities", "स्वास्थ्य सुविधा", "आरोग्य सुविधा", "health"),
    T("PMRDA", "पीएमआरडीए", "पीएमआरडीए", "pmrda"),
    T("PMPL", "पीएमपीएल", "पीएमपीएमएल", "pmpl"),
    T("Social Welfare", "सामाजिक कल्याण", "सामाजिक न्याय विभाग", "welfare"),
    T("MHADA", "म्हाडा", "म्हाडा", "mhada"),
    T("Building Permission", "बांधकाम परवानगी", "बांधकाम परवानगी", "building"),
    T("Police Department", "पुलिस विभाग", "पोलीस विभाग", "police"),
    T("Property Tax Department", "संपत्ति कर विभाग", "मालमत्ता कर विभाग", "tax"),
    T("Cooperative Society Department", "सहकारी समिति विभाग", "सहकारी समिती विभाग", "cooperative"),
    T("Street Light Department", "मार्ग प्रकाश विभाग", "रस्ता प्रकाश विभाग", "streetlight"),
    T("Building Permission Department", "भवन अनुमति विभाग", "भवन परवानगी विभाग", "building"),
    T("Water Supply Department", "जल आपूर्ति विभाग", "जल आपूर्ति विभाग", "water"),
    T("Solid Waste Management", "ठोस अपशिष्ट प्रबंधन", "घनकचरा व्यवस्थापन", "waste"),
    T("Building Permission", "भवन परवानगी", "भवन परवानगी", "building"),
    T("Street Light", "स्ट्रीट लाइट", "रस्ता प्रकाश", "streetlight"),
    T("Revenue Department", "राजस्व विभाग", "राजस्व विभाग", "revenue"),
    T("City Survey Officer", "शहर सर्वेक्षण अधिकारी", "शहर सर्वेक्षण अधिकारी", "survey"),
    T("Stamp and Registration Department", "मुहर व नोंदणी विभाग", "नोंदणी व मुद्रांक विभाग", "registration"),
    T("Electricity Department", "बिजली विभाग", "वीज विभाग", "electricity"),
    T("Health Department", "स्वास्थ्य विभाग", "आरोग्य विभाग", "health"),
    T("Deputy Charity Commissioner", "उप चैरिटी आयुक्त", "उप चैरिटी आयुक्त", "charity"),
    T("RTO Transport Department", "आरटीओ परिवहन विभाग", "आरटीओ परिवहन विभाग", "transport"),
    T("MSEDCL Mahavitran", "एमएसईडीसीएल महावितरण", "एमएसईडीसीएल महावितरण", "electricity"),
    T("Co-op Society Dept.", "सहकारी समिति विभाग", "सहकारी समिती विभाग", "cooperative"),
    T("Building Permission Dept.", "भवन परवानगी विभाग", "भवन परवानगी विभाग", "building"),
    T("Street Light Dept.", "मार्ग प्रकाश विभाग", "रस्ता प्रकाश विभाग", "streetlight"),
    T("Police Dept.", "पुलिस विभाग", "पोलीस विभाग", "police"),
    T("Property Tax Dept.", "संपत्ति कर विभाग", "मालमत्ता कर विभाग", "tax"),
    T("Revenue Dept.", "राजस्व विभाग", "राजस्व विभाग", "revenue"),
    T("Stamp & Reg. Dept.", "मुहर व नोंदणी विभाग", "नोंदणी व मुद्रांक विभाग", "registration"),
    T("Electricity Dept.", "बिजली विभाग", "वीज विभाग", "electricity"),
    T("Health Dept.", "स्वास्थ्य विभाग", "आरोग्य विभाग", "health"),
    T("Dy. Charity Comm.", "उप चैरिटी आयुक्त", "उप चैरिटी आयुक्त", "charity"),
    T("RTO/Transport Dept.", "आरटीओ परिवहन विभाग", "आरटीओ परिवहन विभाग", "transport"),
];

/// Does the text contain any Devanagari-block character?
fn is_devanagari(text: &str) -> bool {
    text.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c))
}

/// Resolve any-language department text to its canonical English form
///
/// Unmatched input is returned unchanged.
pub fn english_problem(problem_text: &str) -> String {
    let clean = problem_text.trim();
    if clean.is_empty() {
        return problem_text.to_string();
    }

    let clean_lower = clean.to_lowercase();

    // Exact match: English case-insensitively, scripts verbatim
    if let Some(t) = PROBLEM_TRANSLATIONS.iter().find(|t| {
        t.english.to_lowercase() == clean_lower || t.hindi == clean || t.marathi == clean
    }) {
        return t.english.to_string();
    }

    // Case-insensitive exact match on all three languages
    if let Some(t) = PROBLEM_TRANSLATIONS.iter().find(|t| {
        t.english.to_lowercase() == clean_lower
            || t.hindi.to_lowercase() == clean_lower
            || t.marathi.to_lowercase() == clean_lower
    }) {
        return t.english.to_string();
    }

    // Substring containment, either direction
    if let Some(t) = PROBLEM_TRANSLATIONS.iter().find(|t| {
        let hindi = t.hindi.to_lowercase();
        let marathi = t.marathi.to_lowercase();
        clean_lower.contains(&t.english.to_lowercase())
            || hindi.contains(&clean_lower)
            || marathi.contains(&clean_lower)
            || clean_lower.contains(&hindi)
            || clean_lower.contains(&marathi)
    }) {
        return t.english.to_string();
    }

    // Reverse containment: translation contains the input
    if let Some(t) = PROBLEM_TRANSLATIONS.iter().find(|t| {
        t.english.to_lowercase().contains(&clean_lower)
            || t.hindi.to_lowercase().contains(&clean_lower)
            || t.marathi.to_lowercase().contains(&clean_lower)
    }) {
        return t.english.to_string();
    }

    // Token-level matching for Devanagari-script input
    if is_devanagari(clean) {
        for word in clean.split_whitespace() {
            if let Some(t) = PROBLEM_TRANSLATIONS.iter().find(|t| {
                t.hindi.contains(word)
                    || t.marathi.contains(word)
                    || word.contains(t.hindi)
                    || word.contains(t.marathi)
            }) {
                return t.english.to_string();
            }
        }
    }

    problem_text.to_string()
}

/// Normalize an optional problem value for storage
///
/// `None` and empty strings pass through as-is.
pub fn normalize_problem(problem: Option<String>) -> Option<String> {
    problem.map(|p| english_problem(&p))
}

/// All canonical English department names, for selection lists
pub fn english_problems() -> Vec<&'static str> {
    PROBLEM_TRANSLATIONS.iter().map(|t| t.english).collect()
}
