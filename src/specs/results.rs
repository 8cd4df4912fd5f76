// src/specs/results.rs
//! Session results fragment: the `table#myTablePrihlasky` returned by
//! `load_result_total_ksismg_art.php`. Headers come back as flat text, data
//! cells as raw inner markup (the athlete cell needs its `<br>` and `<a>`).

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::html::{sel, strip_tags};
use crate::core::net::page_url;

static RESULTS_TABLE: LazyLock<Selector> = LazyLock::new(|| sel("table#myTablePrihlasky"));
static TR: LazyLock<Selector> = LazyLock::new(|| sel("tr"));

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultsTable {
    pub headers: Vec<String>,
    /// One entry per `<tr>` holding `<td>` cells; each cell is inner markup.
    pub rows: Vec<Vec<String>>,
}

pub fn results_url(competition_id: &str, session_token: &str) -> String {
    page_url(&format!(
        "load_result_total_ksismg_art.php?lang=en&id_prop={competition_id}&id_sut={session_token}\
         &rn=null&mn=null&state=-1&age_group=&award=-1&nacinie=undefined"
    ))
}

/// `None` when the fragment has no results table (session not published yet).
pub fn parse(doc: &str) -> Option<ResultsTable> {
    let html = Html::parse_document(doc);
    let table = html.select(&RESULTS_TABLE).next()?;

    let mut out = ResultsTable::default();
    for tr in table.select(&TR) {
        let ths = child_cells(tr, "th");
        let tds = child_cells(tr, "td");

        if out.headers.is_empty() && !ths.is_empty() && tds.is_empty() {
            out.headers = ths.iter().map(|th| strip_tags(th.inner_html())).collect();
            continue;
        }
        if !tds.is_empty() {
            out.rows.push(tds.iter().map(|td| td.inner_html()).collect());
        }
    }
    logd!("results table: {} headers, {} rows", out.headers.len(), out.rows.len());
    Some(out)
}

/// Direct children with the given tag name (nested tables stay untouched).
fn child_cells<'a>(tr: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    tr.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == tag)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAGMENT: &str = r##"
        <table id="myTablePrihlasky" class="table">
          <thead><tr><th>Rank</th><th>Bib</th><th>Name</th><th>Born</th><th>SV</th></tr></thead>
          <tbody>
            <tr><td>1</td><td>12</td><td><a href="#">DOE Jane</a><br/>Gym Club Inc. ON</td><td>2011</td><td>51.200</td></tr>
            <tr><td colspan="5">Level 6</td></tr>
          </tbody>
        </table>
    "##;

    #[test]
    fn reads_headers_and_raw_cells() {
        let t = parse(FRAGMENT).unwrap();
        assert_eq!(t.headers, vec!["Rank", "Bib", "Name", "Born", "SV"]);
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[0].len(), 5);
        assert!(t.rows[0][2].contains("<br>"));
        assert!(t.rows[0][2].contains("<a href=\"#\">DOE Jane</a>"));
        assert_eq!(t.rows[1], vec!["Level 6"]);
    }

    #[test]
    fn missing_table_is_none() {
        assert_eq!(parse("<div>Session in progress</div>"), None);
        assert_eq!(parse(r#"<table id="other"><tr><td>x</td></tr></table>"#), None);
    }

    #[test]
    fn empty_table_has_no_rows() {
        let t = parse(r#"<table id="myTablePrihlasky"><tr><th>Name</th></tr></table>"#).unwrap();
        assert_eq!(t.headers, vec!["Name"]);
        assert!(t.rows.is_empty());
    }

    #[test]
    fn url_carries_both_ids() {
        let url = results_url("8819", "101");
        assert!(url.contains("id_prop=8819&id_sut=101&rn=null"));
    }
}
