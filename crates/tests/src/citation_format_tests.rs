//! Citation output across the jurisdiction grammar families.

use guidance::statutes::{citation_patterns, generate_citation, statute_reference};

fn citation(jurisdiction: &str, code: &str) -> String {
    generate_citation(jurisdiction, code)
        .unwrap_or_else(|| panic!("no citation for {jurisdiction} {code}"))
}

#[test]
fn section_family_renders_reporter_and_code() {
    assert_eq!(citation("FL", "784.03"), "Fla. Stat. § 784.03");
    assert_eq!(citation("WA", "9A.56.050"), "Wash. Rev. Code § 9A.56.050");
    assert_eq!(citation("NJ", "2C:12-1"), "N.J. Stat. Ann. § 2C:12-1");
    assert_eq!(citation("LA", "14:35"), "La. Rev. Stat. Ann. § 14:35");
}

#[test]
fn california_class_tokens_select_the_code() {
    assert_eq!(citation("CA", "242"), "Cal. Penal Code § 242");
    assert_eq!(citation("CA", "23152 VC"), "Cal. Veh. Code § 23152");
    assert_eq!(citation("CA", "PC 242"), "Cal. Penal Code § 242");
    assert_eq!(citation("CA", "11350 HS"), "Cal. Health & Safety Code § 11350");
}

#[test]
fn new_york_and_texas_route_on_class_tokens() {
    assert_eq!(citation("NY", "120.00"), "N.Y. Penal Law § 120.00");
    assert_eq!(citation("NY", "1192 VTL"), "N.Y. Veh. & Traf. Law § 1192");
    assert_eq!(citation("TX", "49.04"), "Tex. Penal Code Ann. § 49.04");
    assert_eq!(citation("TX", "545.401 TN"), "Tex. Transp. Code Ann. § 545.401");
}

/// The embedded title renders once, in front of the reporter.
#[test]
fn pennsylvania_and_federal_prefix_the_title() {
    assert_eq!(citation("PA", "18-2701"), "18 Pa. Cons. Stat. § 2701");
    assert_eq!(citation("US", "18-1343"), "18 U.S.C. § 1343");
}

#[test]
fn title_infix_family_renders_tit() {
    assert_eq!(citation("ME", "17-A-207"), "Me. Rev. Stat. Ann. tit. 17-A, § 207");
    assert_eq!(citation("DE", "11-611"), "Del. Code Ann. tit. 11, § 611");
    assert_eq!(citation("VT", "13-1023"), "Vt. Stat. Ann. tit. 13, § 1023");
}

#[test]
fn massachusetts_cites_chapter_and_section() {
    assert_eq!(citation("MA", "265-13A"), "Mass. Gen. Laws ch. 265, § 13A");
}

#[test]
fn illinois_cites_without_a_section_symbol() {
    let rendered = citation("IL", "720-5/16-25");
    assert_eq!(rendered, "720 Ill. Comp. Stat. 5/16-25");
    assert!(!rendered.contains('§'));
}

#[test]
fn territories_have_citations() {
    assert_eq!(citation("PR", "33-4748"), "P.R. Laws Ann. tit. 33, § 4748");
    assert_eq!(citation("GU", "9-16.30"), "9 Guam Code Ann. § 16.30");
    assert_eq!(citation("VI", "14-292"), "14 V.I.C. § 292");
    assert_eq!(citation("AS", "46-3520"), "Am. Samoa Code Ann. tit. 46, § 3520");
    assert_eq!(citation("MP", "6-1201"), "6 N. Mar. I. Code § 1201");
}

/// 50 states, DC, the five inhabited territories, and federal: every key
/// in the fixed set carries a pattern.
#[test]
fn the_fixed_key_set_is_fully_covered() {
    let patterns = citation_patterns();
    assert_eq!(patterns.len(), 57);
    for key in ["DC", "PR", "GU", "VI", "AS", "MP", "US"] {
        assert!(patterns.contains_key(key), "{key} has no citation pattern");
    }
}

#[test]
fn jurisdiction_lookup_is_case_insensitive() {
    assert_eq!(citation("ca", "242"), citation("CA", "242"));
    assert_eq!(citation("  pa ", "18-2701"), citation("PA", "18-2701"));
}

#[test]
fn federal_aliases_share_one_pattern() {
    assert_eq!(citation("US", "18-1343"), citation("usa", "18-1343"));
    assert_eq!(citation("US", "18-1343"), citation("federal", "18-1343"));
}

#[test]
fn unknown_jurisdictions_return_none() {
    assert_eq!(generate_citation("XX", "242"), None);
    assert_eq!(generate_citation("ZZ", "1-1"), None);
    assert_eq!(generate_citation("", "242"), None);
}

#[test]
fn codes_that_do_not_fit_the_grammar_return_none() {
    assert_eq!(generate_citation("PA", "2701"), None);
    assert_eq!(generate_citation("MA", "265"), None);
    assert_eq!(generate_citation("IL", "simple assault"), None);
}

/// Every registered pattern renders its own sample code.
#[test]
fn all_samples_render() {
    for (jurisdiction, pattern) in citation_patterns() {
        assert!(
            generate_citation(jurisdiction, pattern.sample_code).is_some(),
            "{jurisdiction} failed on its sample {:?}",
            pattern.sample_code
        );
    }
}

#[test]
fn statute_reference_canonicalizes_the_jurisdiction() {
    let reference = statute_reference("usa", " 18-1343 ");
    assert_eq!(reference.jurisdiction, "US");
    assert_eq!(reference.code, "18-1343");
    assert_eq!(reference.citation.as_deref(), Some("18 U.S.C. § 1343"));
}
