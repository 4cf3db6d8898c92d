//! Table extraction with scraper
//!
//! Every `<table>` element becomes a [`VoteTable`], nested tables included,
//! in document order. A table's own rows are the `<tr>` elements directly
//! under it or under its `<thead>`/`<tbody>`/`<tfoot>`; rows of nested tables
//! are not counted, but their `<td>` text still lands in `descendant_cells`.

use scraper::{ElementRef, Html};
use statehouse_application::TableExtractor;
use statehouse_domain::{TableRow, VoteTable};

/// Row groups whose `<tr>` children belong to the enclosing table
const ROW_GROUPS: [&str; 3] = ["thead", "tbody", "tfoot"];

/// [`TableExtractor`] backed by the `scraper` HTML parser
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperTableExtractor;

impl ScraperTableExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TableExtractor for ScraperTableExtractor {
    fn extract_tables(&self, html: &str) -> Vec<VoteTable> {
        let document = Html::parse_document(html);
        document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "table")
            .map(read_table)
            .collect()
    }
}

fn read_table(table: ElementRef) -> VoteTable {
    let rows = own_rows(table).map(read_row).collect();
    let descendant_cells = table
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "td")
        .map(element_text)
        .collect();
    VoteTable {
        rows,
        descendant_cells,
    }
}

fn own_rows(table: ElementRef) -> impl Iterator<Item = ElementRef> {
    child_elements(table).flat_map(|child| {
        let name = child.value().name();
        let rows: Vec<ElementRef> = if name == "tr" {
            vec![child]
        } else if ROW_GROUPS.contains(&name) {
            child_elements(child)
                .filter(|el| el.value().name() == "tr")
                .collect()
        } else {
            Vec::new()
        };
        rows
    })
}

fn read_row(row: ElementRef) -> TableRow {
    let mut headers = Vec::new();
    let mut cells = Vec::new();
    for cell in child_elements(row) {
        match cell.value().name() {
            "th" => headers.push(element_text(cell)),
            "td" => cells.push(element_text(cell)),
            _ => {}
        }
    }
    TableRow::new(headers, cells)
}

fn child_elements(element: ElementRef) -> impl Iterator<Item = ElementRef> {
    element.children().filter_map(ElementRef::wrap)
}

/// Concatenated text of an element and its descendants
fn element_text(element: ElementRef) -> String {
    element.text().collect()
}
