//! Reads generated workbooks back for assertions.

use std::io::{Cursor, Read};

pub struct ParsedValidation {
    pub kind: String,
    pub sqref: String,
    pub values: Vec<String>,
}

pub struct ParsedSheet {
    pub name: String,
    pub header: Vec<String>,
    pub validations: Vec<ParsedValidation>,
}

impl ParsedSheet {
    /// The validation whose range starts in column `letter`.
    pub fn validation_for(&self, letter: &str) -> Option<&ParsedValidation> {
        self.validations.iter().find(|v| {
            let start = v.sqref.split(':').next().unwrap_or_default();
            start.trim_end_matches(|c: char| c.is_ascii_digit()) == letter
        })
    }
}

/// A1-style letters for a zero-based column index.
pub fn column_letter(index: u16) -> String {
    let mut n = index as u32 + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

fn column_index(cell_ref: &str) -> usize {
    cell_ref
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .fold(0, |acc, c| acc * 26 + (c as usize - 'A' as usize + 1))
        - 1
}

fn read_part(bytes: &[u8], name: &str) -> Option<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("xlsx is a zip archive");
    let mut file = archive.by_name(name).ok()?;
    let mut xml = String::new();
    file.read_to_string(&mut xml).expect("part is utf-8");
    Some(xml)
}

fn shared_strings(bytes: &[u8]) -> Vec<String> {
    let Some(xml) = read_part(bytes, "xl/sharedStrings.xml") else {
        return Vec::new();
    };
    let doc = roxmltree::Document::parse(&xml).expect("parse sharedStrings.xml");
    doc.descendants()
        .filter(|n| n.tag_name().name() == "si")
        .map(|si| {
            si.descendants()
                .filter(|n| n.tag_name().name() == "t")
                .filter_map(|t| t.text())
                .collect::<String>()
        })
        .collect()
}

fn parse_list_formula(formula: &str) -> Vec<String> {
    let inner = formula
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .expect("inline list formula is quoted");
    inner.split(',').map(str::to_string).collect()
}

pub fn parse_workbook(bytes: &[u8]) -> ParsedSheet {
    let workbook_xml = read_part(bytes, "xl/workbook.xml").expect("xl/workbook.xml");
    let workbook = roxmltree::Document::parse(&workbook_xml).expect("parse workbook.xml");
    let sheets: Vec<_> = workbook
        .descendants()
        .filter(|n| n.tag_name().name() == "sheet")
        .collect();
    assert_eq!(sheets.len(), 1, "expected a single worksheet");
    let name = sheets[0].attribute("name").unwrap_or_default().to_string();

    let strings = shared_strings(bytes);
    let sheet_xml = read_part(bytes, "xl/worksheets/sheet1.xml").expect("sheet1.xml");
    let sheet = roxmltree::Document::parse(&sheet_xml).expect("parse sheet1.xml");

    let mut header = Vec::new();
    if let Some(row) = sheet
        .descendants()
        .find(|n| n.tag_name().name() == "row" && n.attribute("r") == Some("1"))
    {
        for cell in row.children().filter(|n| n.tag_name().name() == "c") {
            let index = column_index(cell.attribute("r").expect("cell reference"));
            let value = cell
                .children()
                .find(|n| n.tag_name().name() == "v")
                .and_then(|v| v.text())
                .unwrap_or_default();
            let text = match cell.attribute("t") {
                Some("s") => strings[value.parse::<usize>().expect("shared string index")].clone(),
                _ => value.to_string(),
            };
            if header.len() <= index {
                header.resize(index + 1, String::new());
            }
            header[index] = text;
        }
    }

    let validations = sheet
        .descendants()
        .filter(|n| n.tag_name().name() == "dataValidation")
        .map(|dv| {
            let formula = dv
                .children()
                .find(|n| n.tag_name().name() == "formula1")
                .and_then(|f| f.text())
                .unwrap_or_default();
            ParsedValidation {
                kind: dv.attribute("type").unwrap_or_default().to_string(),
                sqref: dv.attribute("sqref").unwrap_or_default().to_string(),
                values: parse_list_formula(formula),
            }
        })
        .collect();

    ParsedSheet {
        name,
        header,
        validations,
    }
}

#[test]
fn column_letters() {
    assert_eq!(column_letter(0), "A");
    assert_eq!(column_letter(4), "E");
    assert_eq!(column_letter(25), "Z");
    assert_eq!(column_letter(26), "AA");
    assert_eq!(column_letter(16_383), "XFD");
    assert_eq!(column_index("XFD1"), 16_383);
}
