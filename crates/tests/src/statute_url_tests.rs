//! Reading-link resolution across the URL strategy registry.

use guidance::statutes::{citation_patterns, resolve_url, statute_reference, url_strategies};

fn url(jurisdiction: &str, code: &str) -> String {
    resolve_url(jurisdiction, code)
        .unwrap_or_else(|| panic!("no url for {jurisdiction} {code}"))
}

#[test]
fn california_links_carry_section_and_law_code() {
    let link = url("CA", "242");
    assert!(link.contains("sectionNum=242"));
    assert!(link.contains("lawCode=PEN"));
    assert!(url("CA", "23152 VC").contains("lawCode=VEH"));
    assert!(url("CA", "11350 HS").contains("lawCode=HSC"));
}

#[test]
fn new_york_links_route_to_the_consolidated_law() {
    assert!(url("NY", "120.00").ends_with("/laws/PEN/120.00"));
    assert!(url("NY", "1192 VTL").ends_with("/laws/VAT/1192"));
}

#[test]
fn texas_links_anchor_into_the_chapter_file() {
    assert_eq!(
        url("TX", "49.04"),
        "https://statutes.capitol.texas.gov/Docs/PE/htm/PE.49.htm#49.04"
    );
}

#[test]
fn florida_links_bucket_chapters_into_hundred_blocks() {
    assert!(url("FL", "812.014").contains("0800-0899/0812/Sections/0812.014.html"));
    assert!(url("FL", "90.803").contains("0000-0099/0090/Sections/0090.803.html"));
}

#[test]
fn illinois_links_zero_pad_the_document_name() {
    assert!(url("IL", "720-5/16-25").contains("DocName=072000050K16-25"));
    assert!(url("IL", "625-5/11-501").contains("DocName=062500050K11-501"));
}

#[test]
fn pennsylvania_links_decompose_the_section_number() {
    let link = url("PA", "18-2701");
    assert!(link.contains("ttl=18"));
    assert!(link.contains("chpt=27"));
    assert!(link.contains("sctn=1"));
}

#[test]
fn federal_links_go_to_cornell() {
    assert_eq!(url("US", "18-1343"), "https://www.law.cornell.edu/uscode/text/18/1343");
    assert_eq!(url("federal", "18-1343"), url("US", "18-1343"));
}

#[test]
fn washington_links_cite_directly() {
    assert!(url("WA", "9A.56.050").ends_with("cite=9A.56.050"));
}

#[test]
fn utah_links_rebuild_the_title_chapter_path() {
    assert_eq!(
        url("UT", "76-5-102"),
        "https://le.utah.gov/xcode/Title76/Chapter5/76-5-S102.html"
    );
}

#[test]
fn justia_states_get_deep_links() {
    assert_eq!(
        url("CO", "18-3-204"),
        "https://law.justia.com/codes/colorado/title-18/section-18-3-204/"
    );
    assert_eq!(
        url("LA", "14:35"),
        "https://law.justia.com/codes/louisiana/revised-statutes/title-14/rs-14-35/"
    );
    assert_eq!(
        url("MA", "265-13A"),
        "https://law.justia.com/codes/massachusetts/chapter-265/section-265-13a/"
    );
}

#[test]
fn territories_resolve_no_url() {
    assert_eq!(resolve_url("PR", "33-4748"), None);
    assert_eq!(resolve_url("GU", "9-16.30"), None);
    assert_eq!(resolve_url("VI", "14-292"), None);
}

#[test]
fn unknown_jurisdictions_resolve_no_url() {
    assert_eq!(resolve_url("ZZ", "1-1"), None);
    assert_eq!(resolve_url("", "242"), None);
}

#[test]
fn malformed_codes_resolve_no_url() {
    assert_eq!(resolve_url("TX", "no-dots-here"), None);
    assert_eq!(resolve_url("FL", "battery"), None);
    assert_eq!(resolve_url("UT", "76"), None);
    assert_eq!(resolve_url("IL", "720"), None);
}

/// Every URL the registry can produce is absolute.
#[test]
fn every_resolvable_url_starts_with_http() {
    for (jurisdiction, pattern) in citation_patterns() {
        if let Some(link) = resolve_url(jurisdiction, pattern.sample_code) {
            assert!(
                link.starts_with("http"),
                "{jurisdiction}: {link}"
            );
        }
    }
}

/// Jurisdictions that advertise a URL strategy must produce one for their
/// own citation sample.
#[test]
fn url_strategies_cover_their_samples() {
    for (jurisdiction, pattern) in citation_patterns() {
        if url_strategies().contains_key(jurisdiction) {
            assert!(
                resolve_url(jurisdiction, pattern.sample_code).is_some(),
                "{jurisdiction} failed on its sample {:?}",
                pattern.sample_code
            );
        }
    }
}

#[test]
fn reference_for_territory_keeps_citation_without_url() {
    let reference = statute_reference("GU", "9-16.30");
    assert!(reference.citation.is_some());
    assert_eq!(reference.url, None);
}
