//! Formal citation generation.
//!
//! One pattern per jurisdiction, 57 in all (50 states, DC, the five
//! inhabited territories, and federal). There is no shared formula: most
//! jurisdictions are a reporter prefix plus the section number, a handful
//! embed a title in the raw code that must be split and re-rendered,
//! Massachusetts cites chapter and section, Illinois re-routes on a
//! chapter prefix, and CA/NY/TX dispatch on an extracted code class.
//! Lookups outside the key set return `None`, which callers treat as "no
//! citation available".

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::LazyLock;

use shared_types::canonical_jurisdiction;

use super::normalize::{normalize, CodeClass, NormalizedCode};

/// How one jurisdiction renders a citation from a normalized code.
pub enum CitationFormat {
    /// `{reporter}{code}`, the majority family ("Fla. Stat. § 784.03").
    Section { reporter: &'static str },
    /// Raw code embeds a title before the last dash; rendered with an
    /// infix "tit." ("Me. Rev. Stat. Ann. tit. 17-A, § 207").
    TitleSection { reporter: &'static str },
    /// Raw code embeds a title before the last dash; rendered title-first
    /// ("18 Pa. Cons. Stat. § 2701", "18 U.S.C. § 1343").
    TitlePrefixed { reporter: &'static str },
    /// Chapter-and-section rendering ("Mass. Gen. Laws ch. 265, § 13A").
    ChapterSection { reporter: &'static str },
    /// Genuinely jurisdiction-specific grammar.
    Custom(fn(&NormalizedCode) -> Option<String>),
}

/// Citation rule for one jurisdiction, with the official statute site when
/// one backs the URL strategy, and a sample code exercised by the link
/// audit tool.
pub struct CitationPattern {
    pub format: CitationFormat,
    pub official_site: Option<&'static str>,
    pub sample_code: &'static str,
}

/// Generate a formal citation, or `None` when the jurisdiction has no
/// pattern or the code does not fit it. Never panics: formatting runs
/// behind a boundary that converts defects into `None` with a diagnostic.
pub fn generate_citation(jurisdiction: &str, code: &str) -> Option<String> {
    let canonical = canonical_jurisdiction(jurisdiction);
    let Some(pattern) = citation_patterns().get(canonical.as_str()) else {
        tracing::warn!(jurisdiction = %canonical, "no citation pattern for jurisdiction");
        return None;
    };

    let normalized = normalize(&canonical, code);
    match catch_unwind(AssertUnwindSafe(|| format_citation(&pattern.format, &normalized))) {
        Ok(citation) => citation,
        Err(_) => {
            tracing::warn!(
                jurisdiction = %canonical,
                code = %code,
                "citation formatting panicked; returning no citation"
            );
            None
        }
    }
}

/// The citation pattern registry keyed by canonical jurisdiction.
pub fn citation_patterns() -> &'static HashMap<&'static str, CitationPattern> {
    &CITATION_PATTERNS
}

fn format_citation(format: &CitationFormat, code: &NormalizedCode) -> Option<String> {
    match format {
        CitationFormat::Section { reporter } => Some(format!("{}{}", reporter, code.code)),
        CitationFormat::TitleSection { reporter } => {
            let (title, section) = code.code.rsplit_once('-')?;
            Some(format!("{} tit. {}, § {}", reporter, title, section))
        }
        CitationFormat::TitlePrefixed { reporter } => {
            let (title, section) = code.code.rsplit_once('-')?;
            Some(format!("{} {} § {}", title, reporter, section))
        }
        CitationFormat::ChapterSection { reporter } => {
            let (chapter, section) = code.code.rsplit_once('-')?;
            Some(format!("{} ch. {}, § {}", reporter, chapter, section))
        }
        CitationFormat::Custom(build) => build(code),
    }
}

// ---------------------------------------------------------------------------
// Custom grammars
// ---------------------------------------------------------------------------

/// California routes on the extracted class token; bare codes are Penal
/// Code sections.
fn citation_ca(code: &NormalizedCode) -> Option<String> {
    let reporter = match code.class {
        Some(CodeClass::Vehicle) => "Cal. Veh. Code",
        Some(CodeClass::Health) => "Cal. Health & Safety Code",
        _ => "Cal. Penal Code",
    };
    Some(format!("{} § {}", reporter, code.code))
}

fn citation_ny(code: &NormalizedCode) -> Option<String> {
    let reporter = match code.class {
        Some(CodeClass::Vehicle) => "N.Y. Veh. & Traf. Law",
        Some(CodeClass::Health) => "N.Y. Pub. Health Law",
        _ => "N.Y. Penal Law",
    };
    Some(format!("{} § {}", reporter, code.code))
}

fn citation_tx(code: &NormalizedCode) -> Option<String> {
    let reporter = match code.class {
        Some(CodeClass::Vehicle) => "Tex. Transp. Code Ann.",
        Some(CodeClass::Health) => "Tex. Health & Safety Code Ann.",
        _ => "Tex. Penal Code Ann.",
    };
    Some(format!("{} § {}", reporter, code.code))
}

/// Illinois compiled statutes: "720-5/16-25" is chapter 720, act 5,
/// section 16-25, cited without a section symbol. The 3-digit chapter
/// prefix selects the outer statute class (720 criminal, 625 vehicles),
/// so it must be split off and re-rendered, never repeated.
fn citation_il(code: &NormalizedCode) -> Option<String> {
    let (chapter, act_and_section) = code.code.split_once('-')?;
    if chapter.len() != 3 || !chapter.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("{} Ill. Comp. Stat. {}", chapter, act_and_section))
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

fn section(
    reporter: &'static str,
    official_site: Option<&'static str>,
    sample_code: &'static str,
) -> CitationPattern {
    CitationPattern {
        format: CitationFormat::Section { reporter },
        official_site,
        sample_code,
    }
}

fn title_section(
    reporter: &'static str,
    official_site: Option<&'static str>,
    sample_code: &'static str,
) -> CitationPattern {
    CitationPattern {
        format: CitationFormat::TitleSection { reporter },
        official_site,
        sample_code,
    }
}

fn title_prefixed(
    reporter: &'static str,
    official_site: Option<&'static str>,
    sample_code: &'static str,
) -> CitationPattern {
    CitationPattern {
        format: CitationFormat::TitlePrefixed { reporter },
        official_site,
        sample_code,
    }
}

fn chapter_section(
    reporter: &'static str,
    official_site: Option<&'static str>,
    sample_code: &'static str,
) -> CitationPattern {
    CitationPattern {
        format: CitationFormat::ChapterSection { reporter },
        official_site,
        sample_code,
    }
}

fn custom(
    build: fn(&NormalizedCode) -> Option<String>,
    official_site: Option<&'static str>,
    sample_code: &'static str,
) -> CitationPattern {
    CitationPattern {
        format: CitationFormat::Custom(build),
        official_site,
        sample_code,
    }
}

static CITATION_PATTERNS: LazyLock<HashMap<&'static str, CitationPattern>> = LazyLock::new(|| {
    HashMap::from([
        ("AL", section("Ala. Code § ", None, "13A-6-22")),
        ("AK", section("Alaska Stat. § ", Some("https://www.akleg.gov"), "11.41.230")),
        ("AZ", section("Ariz. Rev. Stat. § ", Some("https://www.azleg.gov"), "13-1203")),
        ("AR", section("Ark. Code Ann. § ", None, "5-13-203")),
        (
            "CA",
            custom(citation_ca, Some("https://leginfo.legislature.ca.gov"), "242"),
        ),
        ("CO", section("Colo. Rev. Stat. § ", None, "18-3-204")),
        ("CT", section("Conn. Gen. Stat. § ", None, "53a-61")),
        ("DE", title_section("Del. Code Ann.", None, "11-611")),
        (
            "DC",
            section("D.C. Code § ", Some("https://code.dccouncil.gov"), "22-404"),
        ),
        (
            "FL",
            section("Fla. Stat. § ", Some("https://www.leg.state.fl.us"), "784.03"),
        ),
        ("GA", section("Ga. Code Ann. § ", None, "16-5-23")),
        ("HI", section("Haw. Rev. Stat. § ", None, "707-712")),
        (
            "ID",
            section("Idaho Code § ", Some("https://legislature.idaho.gov"), "18-903"),
        ),
        ("IL", custom(citation_il, Some("https://www.ilga.gov"), "720-5/12-3")),
        ("IN", section("Ind. Code § ", None, "35-42-2-1")),
        ("IA", section("Iowa Code § ", None, "708.2")),
        ("KS", section("Kan. Stat. Ann. § ", None, "21-5413")),
        ("KY", section("Ky. Rev. Stat. Ann. § ", None, "508.030")),
        ("LA", section("La. Rev. Stat. Ann. § ", None, "14:35")),
        (
            "ME",
            title_section(
                "Me. Rev. Stat. Ann.",
                Some("https://www.mainelegislature.org"),
                "17-A-207",
            ),
        ),
        ("MD", section("Md. Code Ann., Crim. Law § ", None, "3-203")),
        ("MA", chapter_section("Mass. Gen. Laws", None, "265-13A")),
        (
            "MI",
            section(
                "Mich. Comp. Laws § ",
                Some("https://www.legislature.mi.gov"),
                "750.81",
            ),
        ),
        (
            "MN",
            section("Minn. Stat. § ", Some("https://www.revisor.mn.gov"), "609.224"),
        ),
        ("MS", section("Miss. Code Ann. § ", None, "97-3-7")),
        (
            "MO",
            section("Mo. Rev. Stat. § ", Some("https://revisor.mo.gov"), "565.056"),
        ),
        ("MT", section("Mont. Code Ann. § ", None, "45-5-201")),
        ("NE", section("Neb. Rev. Stat. § ", None, "28-310")),
        (
            "NV",
            section("Nev. Rev. Stat. § ", Some("https://www.leg.state.nv.us"), "200.481"),
        ),
        ("NH", section("N.H. Rev. Stat. Ann. § ", None, "631:2-a")),
        ("NJ", section("N.J. Stat. Ann. § ", None, "2C:12-1")),
        ("NM", section("N.M. Stat. Ann. § ", None, "30-3-4")),
        (
            "NY",
            custom(citation_ny, Some("https://www.nysenate.gov"), "120.00"),
        ),
        (
            "NC",
            section("N.C. Gen. Stat. § ", Some("https://www.ncleg.gov"), "14-33"),
        ),
        ("ND", section("N.D. Cent. Code § ", None, "12.1-17-01")),
        (
            "OH",
            section("Ohio Rev. Code Ann. § ", Some("https://codes.ohio.gov"), "2903.13"),
        ),
        ("OK", title_section("Okla. Stat.", None, "21-644")),
        (
            "OR",
            section(
                "Or. Rev. Stat. § ",
                Some("https://www.oregonlegislature.gov"),
                "163.160",
            ),
        ),
        (
            "PA",
            title_prefixed(
                "Pa. Cons. Stat.",
                Some("https://www.legis.state.pa.us"),
                "18-2701",
            ),
        ),
        ("RI", section("R.I. Gen. Laws § ", None, "11-5-3")),
        ("SC", section("S.C. Code Ann. § ", None, "16-3-600")),
        ("SD", section("S.D. Codified Laws § ", None, "22-18-1")),
        ("TN", section("Tenn. Code Ann. § ", None, "39-13-101")),
        (
            "TX",
            custom(citation_tx, Some("https://statutes.capitol.texas.gov"), "22.01"),
        ),
        (
            "UT",
            section("Utah Code Ann. § ", Some("https://le.utah.gov"), "76-5-102"),
        ),
        ("VT", title_section("Vt. Stat. Ann.", None, "13-1023")),
        (
            "VA",
            section("Va. Code Ann. § ", Some("https://law.lis.virginia.gov"), "18.2-57"),
        ),
        (
            "WA",
            section("Wash. Rev. Code § ", Some("https://app.leg.wa.gov"), "9A.36.041"),
        ),
        ("WV", section("W. Va. Code § ", None, "61-2-9")),
        ("WI", section("Wis. Stat. § ", Some("https://docs.legis.wisconsin.gov"), "940.19")),
        ("WY", section("Wyo. Stat. Ann. § ", None, "6-2-501")),
        ("PR", title_section("P.R. Laws Ann.", None, "33-4748")),
        ("GU", title_prefixed("Guam Code Ann.", None, "9-16.30")),
        ("VI", title_prefixed("V.I.C.", None, "14-292")),
        ("AS", title_section("Am. Samoa Code Ann.", None, "46-3520")),
        ("MP", title_prefixed("N. Mar. I. Code", None, "6-1201")),
        (
            "US",
            title_prefixed("U.S.C.", Some("https://www.law.cornell.edu"), "18-1343"),
        ),
    ])
});
