//! Statute URL resolution.
//!
//! An independent per-jurisdiction registry, larger and more irregular than
//! the citation table: URL path grammars do not follow citation prose. Each
//! jurisdiction is one named strategy function that algorithmically derives
//! the publication path — chapter files with section anchors, zero-padded
//! document names, hundred-block range directories, title/chapter/section
//! query strings — so new jurisdictions can be added without touching
//! existing ones. States without a derivable official layout get a Justia
//! deep link built from the same code decomposition.
//!
//! Every result starts with "http"; a malformed intermediate value degrades
//! to `None`, never to a broken partial URL.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::LazyLock;

use shared_types::canonical_jurisdiction;

use super::normalize::{normalize, CodeClass, NormalizedCode};

/// URL construction rule for one jurisdiction.
pub struct UrlStrategy {
    pub build: fn(&NormalizedCode) -> Option<String>,
}

/// Resolve a reading link for a statute code, or `None` when no strategy is
/// registered or the code does not decompose. Never panics; never returns a
/// value that does not start with "http".
pub fn resolve_url(jurisdiction: &str, code: &str) -> Option<String> {
    let canonical = canonical_jurisdiction(jurisdiction);
    let Some(strategy) = url_strategies().get(canonical.as_str()) else {
        tracing::warn!(jurisdiction = %canonical, "no url strategy for jurisdiction");
        return None;
    };

    let normalized = normalize(&canonical, code);
    match catch_unwind(AssertUnwindSafe(|| (strategy.build)(&normalized))) {
        Ok(url) => url.filter(|u| u.starts_with("http")),
        Err(_) => {
            tracing::warn!(
                jurisdiction = %canonical,
                code = %code,
                "url building panicked; returning no url"
            );
            None
        }
    }
}

/// The URL strategy registry keyed by canonical jurisdiction.
pub fn url_strategies() -> &'static HashMap<&'static str, UrlStrategy> {
    &URL_STRATEGIES
}

// ---------------------------------------------------------------------------
// Official publication layouts
// ---------------------------------------------------------------------------

/// California: leginfo section display, law code from the class token.
fn url_ca(code: &NormalizedCode) -> Option<String> {
    if code.code.is_empty() {
        return None;
    }
    let law_code = match code.class {
        Some(CodeClass::Vehicle) => "VEH",
        Some(CodeClass::Health) => "HSC",
        _ => "PEN",
    };
    Some(format!(
        "https://leginfo.legislature.ca.gov/faces/codes_displaySection.xhtml?sectionNum={}&lawCode={}",
        urlencoding::encode(&code.code),
        law_code
    ))
}

/// New York: senate law browser, consolidated-law id from the class token.
fn url_ny(code: &NormalizedCode) -> Option<String> {
    if code.code.is_empty() {
        return None;
    }
    let law = match code.class {
        Some(CodeClass::Vehicle) => "VAT",
        Some(CodeClass::Health) => "PBH",
        _ => "PEN",
    };
    Some(format!(
        "https://www.nysenate.gov/legislation/laws/{}/{}",
        law, code.code
    ))
}

/// Texas: chapter html file with a section anchor ("49.04" lives in
/// PE.49.htm).
fn url_tx(code: &NormalizedCode) -> Option<String> {
    let class = match code.class {
        Some(CodeClass::Vehicle) => "TN",
        Some(CodeClass::Health) => "HS",
        _ => "PE",
    };
    let (chapter, _) = code.code.split_once('.')?;
    if chapter.is_empty() || !chapter.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!(
        "https://statutes.capitol.texas.gov/Docs/{}/htm/{}.{}.htm#{}",
        class, class, chapter, code.code
    ))
}

/// Florida: hundred-block range directory, zero-padded chapter, section
/// file ("812.014" -> 0800-0899/0812/Sections/0812.014.html).
fn url_fl(code: &NormalizedCode) -> Option<String> {
    let (chapter, tail) = code.code.split_once('.')?;
    let ch: u32 = chapter.parse().ok()?;
    let block = (ch / 100) * 100;
    Some(format!(
        "https://www.leg.state.fl.us/statutes/index.cfm?App_mode=Display_Statute&URL={:04}-{:04}/{:04}/Sections/{:04}.{}.html",
        block,
        block + 99,
        ch,
        ch,
        tail
    ))
}

/// Illinois: ILGA full-text document name, chapter and act zero-padded to
/// four digits ("720-5/16-25" -> DocName=072000050K16-25).
fn url_il(code: &NormalizedCode) -> Option<String> {
    let (chapter, rest) = code.code.split_once('-')?;
    let (act, section) = rest.split_once('/')?;
    let ch: u32 = chapter.parse().ok()?;
    let act_num: u32 = act.parse().ok()?;
    if section.is_empty() {
        return None;
    }
    Some(format!(
        "https://www.ilga.gov/legislation/ilcs/fulltext.asp?DocName={:04}{:04}0K{}",
        ch, act_num, section
    ))
}

/// Pennsylvania: consolidated-statutes check, chapter and section derived
/// from the section number ("18-2701" -> ttl=18, chpt=27, sctn=1).
fn url_pa(code: &NormalizedCode) -> Option<String> {
    let (title, section) = code.code.rsplit_once('-')?;
    let sec: u32 = section.parse().ok()?;
    let chapter = sec / 100;
    if chapter == 0 || title.is_empty() {
        return None;
    }
    Some(format!(
        "https://www.legis.state.pa.us/cfdocs/legis/LI/consCheck.cfm?txtType=HTM&ttl={}&div=0&chpt={}&sctn={}&subsctn=0",
        title,
        chapter,
        sec % 100
    ))
}

/// Federal: Cornell LII ("18-1343" -> /uscode/text/18/1343).
fn url_us(code: &NormalizedCode) -> Option<String> {
    let (title, section) = code.code.rsplit_once('-')?;
    if title.is_empty() || section.is_empty() {
        return None;
    }
    Some(format!(
        "https://www.law.cornell.edu/uscode/text/{}/{}",
        title, section
    ))
}

fn url_wa(code: &NormalizedCode) -> Option<String> {
    if code.code.is_empty() {
        return None;
    }
    Some(format!(
        "https://app.leg.wa.gov/RCW/default.aspx?cite={}",
        code.code
    ))
}

/// Nevada: chapter file with an in-page section anchor ("200.481" ->
/// NRS-200.html#NRS200Sec481).
fn url_nv(code: &NormalizedCode) -> Option<String> {
    let (chapter, section) = code.code.split_once('.')?;
    if chapter.is_empty() || section.is_empty() {
        return None;
    }
    Some(format!(
        "https://www.leg.state.nv.us/NRS/NRS-{}.html#NRS{}Sec{}",
        chapter, chapter, section
    ))
}

/// Arizona: section file zero-padded to five digits ("13-1203" ->
/// /ars/13/01203.htm).
fn url_az(code: &NormalizedCode) -> Option<String> {
    let (title, section) = code.code.split_once('-')?;
    if title.is_empty() || section.is_empty() {
        return None;
    }
    Some(format!(
        "https://www.azleg.gov/ars/{}/{:0>5}.htm",
        title, section
    ))
}

fn url_oh(code: &NormalizedCode) -> Option<String> {
    if code.code.is_empty() {
        return None;
    }
    Some(format!(
        "https://codes.ohio.gov/ohio-revised-code/section-{}",
        code.code
    ))
}

fn url_mi(code: &NormalizedCode) -> Option<String> {
    if !code.code.contains('.') {
        return None;
    }
    Some(format!(
        "https://www.legislature.mi.gov/Laws/MCL?objectName=mcl-{}",
        code.code.replace('.', "-")
    ))
}

fn url_mn(code: &NormalizedCode) -> Option<String> {
    if code.code.is_empty() {
        return None;
    }
    Some(format!(
        "https://www.revisor.mn.gov/statutes/cite/{}",
        code.code
    ))
}

fn url_wi(code: &NormalizedCode) -> Option<String> {
    let (chapter, section) = code.code.split_once('.')?;
    if chapter.is_empty() || section.is_empty() {
        return None;
    }
    Some(format!(
        "https://docs.legis.wisconsin.gov/statutes/statutes/{}/{}",
        chapter, section
    ))
}

fn url_nc(code: &NormalizedCode) -> Option<String> {
    let (chapter, _) = code.code.split_once('-')?;
    if chapter.is_empty() {
        return None;
    }
    Some(format!(
        "https://www.ncleg.gov/EnactedLegislation/Statutes/HTML/BySection/Chapter_{}/GS_{}.html",
        chapter, code.code
    ))
}

/// Virginia: title directory from the text before the dash ("18.2-57" ->
/// /vacode/title18.2/section18.2-57/).
fn url_va(code: &NormalizedCode) -> Option<String> {
    let (title, _) = code.code.split_once('-')?;
    if title.is_empty() {
        return None;
    }
    Some(format!(
        "https://law.lis.virginia.gov/vacode/title{}/section{}/",
        title, code.code
    ))
}

fn url_mo(code: &NormalizedCode) -> Option<String> {
    if code.code.is_empty() {
        return None;
    }
    Some(format!(
        "https://revisor.mo.gov/main/OneSection.aspx?section={}",
        code.code
    ))
}

/// Utah: title/chapter directories plus an S-prefixed section file
/// ("76-5-102" -> Title76/Chapter5/76-5-S102.html).
fn url_ut(code: &NormalizedCode) -> Option<String> {
    let mut parts = code.code.splitn(3, '-');
    let title = parts.next()?;
    let chapter = parts.next()?;
    let section = parts.next()?;
    if title.is_empty() || chapter.is_empty() || section.is_empty() {
        return None;
    }
    Some(format!(
        "https://le.utah.gov/xcode/Title{}/Chapter{}/{}-{}-S{}.html",
        title, chapter, title, chapter, section
    ))
}

/// Maine: letter-suffixed titles are directories of their own ("17-A-207"
/// -> /statutes/17-A/title17-Asec207.html).
fn url_me(code: &NormalizedCode) -> Option<String> {
    let (title, section) = code.code.rsplit_once('-')?;
    if title.is_empty() || section.is_empty() {
        return None;
    }
    Some(format!(
        "https://www.mainelegislature.org/legis/statutes/{}/title{}sec{}.html",
        title, title, section
    ))
}

fn url_ak(code: &NormalizedCode) -> Option<String> {
    if code.code.is_empty() {
        return None;
    }
    Some(format!(
        "https://www.akleg.gov/basis/statutes.asp#{}",
        code.code
    ))
}

/// Oregon: one html file per chapter, zero-padded to three digits.
fn url_or(code: &NormalizedCode) -> Option<String> {
    let (chapter, _) = code.code.split_once('.')?;
    if chapter.is_empty() || !chapter.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!(
        "https://www.oregonlegislature.gov/bills_laws/ors/ors{:0>3}.html",
        chapter
    ))
}

/// Idaho: chapter directory derived from the section's hundreds digit
/// ("18-903" -> Title18/T18CH9/SECT18-903/).
fn url_id(code: &NormalizedCode) -> Option<String> {
    let (title, section) = code.code.split_once('-')?;
    let sec: u32 = section.parse().ok()?;
    let chapter = sec / 100;
    if chapter == 0 || title.is_empty() {
        return None;
    }
    Some(format!(
        "https://legislature.idaho.gov/statutesrules/idstat/Title{}/T{}CH{}/SECT{}/",
        title, title, chapter, code.code
    ))
}

fn url_dc(code: &NormalizedCode) -> Option<String> {
    if !code.code.contains('-') {
        return None;
    }
    Some(format!(
        "https://code.dccouncil.gov/us/dc/council/code/sections/{}",
        code.code
    ))
}

// ---------------------------------------------------------------------------
// Justia layouts for the remainder
// ---------------------------------------------------------------------------

/// Lowercase a code into a Justia path slug (dots and colons become dashes).
fn justia_slug(code: &str) -> String {
    code.to_lowercase().replace(['.', ':'], "-")
}

/// Title-first codes ("13A-6-22"): the first segment is the title.
fn justia_title(state: &str, code: &str) -> Option<String> {
    let (title, _) = code.split_once('-')?;
    Some(format!(
        "https://law.justia.com/codes/{}/title-{}/section-{}/",
        state,
        title.to_lowercase(),
        justia_slug(code)
    ))
}

/// Chapter-first codes ("708.2", "21-5413"): the first segment is the
/// chapter.
fn justia_chapter(state: &str, code: &str, delimiter: char) -> Option<String> {
    let (chapter, _) = code.split_once(delimiter)?;
    Some(format!(
        "https://law.justia.com/codes/{}/chapter-{}/section-{}/",
        state,
        chapter.to_lowercase(),
        justia_slug(code)
    ))
}

fn url_al(code: &NormalizedCode) -> Option<String> {
    justia_title("alabama", &code.code)
}

fn url_ar(code: &NormalizedCode) -> Option<String> {
    justia_title("arkansas", &code.code)
}

fn url_co(code: &NormalizedCode) -> Option<String> {
    justia_title("colorado", &code.code)
}

fn url_ct(code: &NormalizedCode) -> Option<String> {
    justia_title("connecticut", &code.code)
}

/// Delaware embeds the title ("11-611" is title 11, section 611).
fn url_de(code: &NormalizedCode) -> Option<String> {
    let (title, section) = code.code.split_once('-')?;
    Some(format!(
        "https://law.justia.com/codes/delaware/title-{}/section-{}/",
        title.to_lowercase(),
        justia_slug(section)
    ))
}

fn url_ga(code: &NormalizedCode) -> Option<String> {
    justia_title("georgia", &code.code)
}

fn url_hi(code: &NormalizedCode) -> Option<String> {
    justia_chapter("hawaii", &code.code, '-')
}

fn url_in(code: &NormalizedCode) -> Option<String> {
    justia_title("indiana", &code.code)
}

fn url_ia(code: &NormalizedCode) -> Option<String> {
    justia_chapter("iowa", &code.code, '.')
}

fn url_ks(code: &NormalizedCode) -> Option<String> {
    justia_chapter("kansas", &code.code, '-')
}

fn url_ky(code: &NormalizedCode) -> Option<String> {
    justia_chapter("kentucky", &code.code, '.')
}

/// Louisiana revised statutes use colon codes ("14:35" -> title-14/rs-14-35).
fn url_la(code: &NormalizedCode) -> Option<String> {
    let (title, section) = code.code.split_once(':')?;
    Some(format!(
        "https://law.justia.com/codes/louisiana/revised-statutes/title-{}/rs-{}-{}/",
        title,
        title,
        justia_slug(section)
    ))
}

/// Maryland criminal-law article sections ("3-203").
fn url_md(code: &NormalizedCode) -> Option<String> {
    let (title, _) = code.code.split_once('-')?;
    Some(format!(
        "https://law.justia.com/codes/maryland/criminal-law/title-{}/section-{}/",
        title,
        justia_slug(&code.code)
    ))
}

fn url_ma(code: &NormalizedCode) -> Option<String> {
    justia_chapter("massachusetts", &code.code, '-')
}

fn url_ms(code: &NormalizedCode) -> Option<String> {
    justia_title("mississippi", &code.code)
}

fn url_mt(code: &NormalizedCode) -> Option<String> {
    justia_title("montana", &code.code)
}

fn url_ne(code: &NormalizedCode) -> Option<String> {
    let (chapter, _) = code.code.split_once('-')?;
    Some(format!(
        "https://law.justia.com/codes/nebraska/chapter-{}/statute-{}/",
        chapter,
        justia_slug(&code.code)
    ))
}

fn url_nh(code: &NormalizedCode) -> Option<String> {
    justia_chapter("new-hampshire", &code.code, ':')
}

fn url_nj(code: &NormalizedCode) -> Option<String> {
    justia_title("new-jersey", &code.code.replace(':', "-"))
}

fn url_nm(code: &NormalizedCode) -> Option<String> {
    justia_chapter("new-mexico", &code.code, '-')
}

/// North Dakota titles are decimal ("12.1-17-01" is title 12.1).
fn url_nd(code: &NormalizedCode) -> Option<String> {
    let (title, _) = code.code.split_once('-')?;
    Some(format!(
        "https://law.justia.com/codes/north-dakota/title-{}/section-{}/",
        justia_slug(title),
        justia_slug(&code.code)
    ))
}

fn url_ok(code: &NormalizedCode) -> Option<String> {
    justia_title("oklahoma", &code.code)
}

fn url_ri(code: &NormalizedCode) -> Option<String> {
    justia_title("rhode-island", &code.code)
}

fn url_sc(code: &NormalizedCode) -> Option<String> {
    justia_title("south-carolina", &code.code)
}

fn url_sd(code: &NormalizedCode) -> Option<String> {
    justia_title("south-dakota", &code.code)
}

fn url_tn(code: &NormalizedCode) -> Option<String> {
    justia_title("tennessee", &code.code)
}

/// Vermont embeds the title ("13-1023" is title 13, section 1023).
fn url_vt(code: &NormalizedCode) -> Option<String> {
    let (title, section) = code.code.split_once('-')?;
    Some(format!(
        "https://law.justia.com/codes/vermont/title-{}/section-{}/",
        title.to_lowercase(),
        justia_slug(section)
    ))
}

fn url_wv(code: &NormalizedCode) -> Option<String> {
    justia_chapter("west-virginia", &code.code, '-')
}

fn url_wy(code: &NormalizedCode) -> Option<String> {
    justia_title("wyoming", &code.code)
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

static URL_STRATEGIES: LazyLock<HashMap<&'static str, UrlStrategy>> = LazyLock::new(|| {
    let strategy = |build: fn(&NormalizedCode) -> Option<String>| UrlStrategy { build };
    HashMap::from([
        ("AL", strategy(url_al)),
        ("AK", strategy(url_ak)),
        ("AZ", strategy(url_az)),
        ("AR", strategy(url_ar)),
        ("CA", strategy(url_ca)),
        ("CO", strategy(url_co)),
        ("CT", strategy(url_ct)),
        ("DE", strategy(url_de)),
        ("DC", strategy(url_dc)),
        ("FL", strategy(url_fl)),
        ("GA", strategy(url_ga)),
        ("HI", strategy(url_hi)),
        ("ID", strategy(url_id)),
        ("IL", strategy(url_il)),
        ("IN", strategy(url_in)),
        ("IA", strategy(url_ia)),
        ("KS", strategy(url_ks)),
        ("KY", strategy(url_ky)),
        ("LA", strategy(url_la)),
        ("ME", strategy(url_me)),
        ("MD", strategy(url_md)),
        ("MA", strategy(url_ma)),
        ("MI", strategy(url_mi)),
        ("MN", strategy(url_mn)),
        ("MS", strategy(url_ms)),
        ("MO", strategy(url_mo)),
        ("MT", strategy(url_mt)),
        ("NE", strategy(url_ne)),
        ("NV", strategy(url_nv)),
        ("NH", strategy(url_nh)),
        ("NJ", strategy(url_nj)),
        ("NM", strategy(url_nm)),
        ("NY", strategy(url_ny)),
        ("NC", strategy(url_nc)),
        ("ND", strategy(url_nd)),
        ("OH", strategy(url_oh)),
        ("OK", strategy(url_ok)),
        ("OR", strategy(url_or)),
        ("PA", strategy(url_pa)),
        ("RI", strategy(url_ri)),
        ("SC", strategy(url_sc)),
        ("SD", strategy(url_sd)),
        ("TN", strategy(url_tn)),
        ("TX", strategy(url_tx)),
        ("UT", strategy(url_ut)),
        ("VT", strategy(url_vt)),
        ("VA", strategy(url_va)),
        ("WA", strategy(url_wa)),
        ("WV", strategy(url_wv)),
        ("WI", strategy(url_wi)),
        ("WY", strategy(url_wy)),
        ("US", strategy(url_us)),
    ])
});
