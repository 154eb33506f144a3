use crate::error::ConverterError;
use crate::error::ResultMessage;
use crate::helpers::reader::SourceReader;
use crate::helpers::xml::XmlNodeHelper;
use crate::helpers::xml::XmlReader;
use crate::helpers::xml::XmlTextContextHelper;
use crate::helpers::zip::ZipHelper;
use crate::match_xml_events;
use crate::spreadsheet::cell::Cell;
use crate::spreadsheet::cell::CellType;
use crate::spreadsheet::criteria::Criteria;
use crate::spreadsheet::reference::reference_to_index;
use crate::spreadsheet::sheet::Sheet;
use crate::spreadsheet::SpreadsheetError;
use crate::table::RawTable;
use quick_xml::events::Event;
use quick_xml::name::QName;
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;
use zip::ZipArchive;

// XML tag names for parsing Excel XLSX format
const TAG_RELATIONSHIP: &[u8] = b"Relationship";         // Package relationship
const TAG_CUSTOM_FORMATS: QName = QName(b"numFmts");      // Custom number formats container
const TAG_CUSTOM_FORMAT: QName = QName(b"numFmt");        // Individual custom number format
const TAG_FORMAT_INDEXES: QName = QName(b"cellXfs");      // Cell format indexes container
const TAG_FORMAT_INDEX: QName = QName(b"xf");             // Individual cell format index
const TAG_SHARED_STRING_ITEM: QName = QName(b"si");       // Shared string table item
const TAG_PHONETIC_TEXT: QName = QName(b"rPh");           // Phonetic text for Asian languages
const TAG_TEXT: QName = QName(b"t");                      // Text content within strings
const TAG_WORKBOOK_PROPERTIES: QName = QName(b"workbookPr"); // Workbook properties
const TAG_SHEET: QName = QName(b"sheet");                 // Worksheet definition
const TAG_ROW: QName = QName(b"row");                     // Row in worksheet
const TAG_CELL: QName = QName(b"c");                      // Cell in worksheet
const TAG_INLINE_STRING: QName = QName(b"is");            // Inline string value
const TAG_VALUE: QName = QName(b"v");                     // Cell value content

const WORKBOOK_PATH: &str = "xl/workbook.xml";
const WORKBOOK_RELATIONSHIPS_PATH: &str = "xl/_rels/workbook.xml.rels";
const STYLES_PATH: &str = "xl/styles.xml";
const SHARED_STRINGS_PATH: &str = "xl/sharedStrings.xml";

/// An Excel XLSX workbook opened for reading
pub(crate) struct XlsxSpreadsheet {
    /// File name of the workbook
    pub(crate) name: String,
    /// ZIP archive containing the package parts
    zip: ZipArchive<SourceReader>,
    /// Cell type per style index, for date detection
    number_formats: Vec<CellType>,
    /// Worksheets as (name, zip_path) pairs in workbook order
    pub(crate) sheets: Vec<(String, String)>,
    /// Shared string table, loaded on first sheet read
    shared_strings: Option<Vec<String>>,
}

impl XlsxSpreadsheet {
    pub(crate) fn open(path: &Path) -> Result<XlsxSpreadsheet, ConverterError> {
        let name = path.display().to_string();
        let reader = SourceReader::open(path).with_prefix(&name)?;
        Self::load(name, reader)
    }

    pub(crate) fn from_bytes(name: &str, bytes: Vec<u8>) -> Result<XlsxSpreadsheet, ConverterError> {
        Self::load(name.to_owned(), SourceReader::from_bytes(bytes))
    }

    /// Parses the package structure; every failure here means the document
    /// is not a usable workbook.
    fn load(name: String, reader: SourceReader) -> Result<XlsxSpreadsheet, ConverterError> {
        let malformed = |error: ConverterError| SpreadsheetError::MalformedDocument {
            file: name.to_owned(),
            reason: error.to_string(),
        };

        let mut zip = ZipArchive::new(reader).map_err(|error| malformed(error.into()))?;
        let (sheets, is_1904) = load_workbook(&mut zip).map_err(malformed)?;
        let number_formats = load_number_formats(&mut zip, is_1904).map_err(malformed)?;
        Ok(XlsxSpreadsheet {
            name,
            zip,
            number_formats,
            sheets,
            shared_strings: None,
        })
    }

    /// Reads the worksheet at `index` of [`Self::sheets`].
    pub(crate) fn read_sheet(&mut self, index: usize, criteria: &Criteria) -> Result<RawTable, ConverterError> {
        if self.shared_strings.is_none() {
            let shared_strings = load_shared_strings(&mut self.zip).map_err(|error| SpreadsheetError::MalformedDocument {
                file: self.name.to_owned(),
                reason: format!("{SHARED_STRINGS_PATH}: {error}"),
            })?;
            self.shared_strings = Some(shared_strings);
        }

        let (sheet_name, zip_path) = &self.sheets[index];
        let sheet = read_cells(&mut self.zip, &self.number_formats, &self.name, sheet_name, zip_path, criteria.blank_rows)
            .map_err(|error| SpreadsheetError::MalformedDocument {
                file: self.name.to_owned(),
                reason: format!("{zip_path}: {error}"),
            })?;
        let shared_strings = self.shared_strings.as_deref().unwrap_or_default();
        Ok(sheet.into_raw_table(shared_strings, criteria.skip_rows)?)
    }
}

/// Collects the non-empty cells of one worksheet part. With `blank_rows`,
/// `<row>` elements and value-less cells also widen the data range.
fn read_cells(
    zip: &mut ZipArchive<SourceReader>,
    number_formats: &[CellType],
    file_name: &str,
    sheet_name: &str,
    zip_path: &str,
    blank_rows: bool,
) -> Result<Sheet, ConverterError> {
    let mut sheet = Sheet::new(file_name, sheet_name);
    let mut row_count = 0usize;
    let mut col_count = 0usize;
    let mut row = 0usize;
    let mut col = 0usize;
    let mut kind = CellType::default();
    let mut value = String::new();
    let mut reader = zip
        .xml_reader(zip_path)?
        .ok_or_else(|| ConverterError::WithContextError(format!("missing worksheet part '{zip_path}'")))?;
    match_xml_events!(reader => {
        Event::Start(event) if event.name() == TAG_ROW => {
            if let Some(reference) = event.get_attribute_value("r")? {
                row_count = reference.parse::<usize>()?.saturating_sub(1);
            }
            if blank_rows {
                sheet.mark_row(row_count);
            }
            col_count = 0;
        }
        Event::End(event) if event.name() == TAG_ROW => {
            row_count += 1;
        }
        Event::Start(event) if event.name() == TAG_CELL => {
            (row, col) = event.get_attribute_value("r")?
                .and_then(|reference| reference_to_index(&reference))
                .unwrap_or((row_count, col_count));
            col_count = col + 1;
            value.clear();
            kind = event.get_attribute_value("t")?.map(|t| {
                match t.as_ref() {
                    "inlineStr" | "str" => CellType::InlineString,
                    "s" => CellType::SharedString,
                    "d" => CellType::IsoDateTime,
                    "b" => CellType::Boolean,
                    // error values (#N/A, #DIV/0!, ...) read as empty
                    "e" => CellType::Empty,
                    _ => CellType::Number,
                }
            }).unwrap_or(CellType::Number);
            if kind == CellType::Number {
                if let Some(format_id) = event.get_attribute_value("s")? {
                    if !format_id.is_empty() {
                        let index = format_id.parse::<usize>()?;
                        kind = number_formats.get(index).copied().unwrap_or(CellType::Number);
                    }
                }
            }
        }
        Event::Start(event) if kind != CellType::Empty && event.name() == TAG_INLINE_STRING => {
            value = read_string_value(&mut reader, TAG_INLINE_STRING, false)?;
        }
        Event::Start(event) if kind != CellType::Empty && event.name() == TAG_VALUE => {
            value = read_string_value(&mut reader, TAG_VALUE, true)?;
        }
        Event::End(event) if event.name() == TAG_CELL => {
            if kind != CellType::Empty && !value.is_empty() {
                sheet.push(Cell {
                    row,
                    col,
                    kind,
                    value: value.to_owned(),
                });
            } else if blank_rows {
                sheet.push(Cell {
                    row,
                    col,
                    kind: CellType::Empty,
                    value: String::new(),
                });
            }
            value.clear();
        }
    });
    Ok(sheet)
}

/// Loads worksheet names with their part paths, and the date system
/// (1900 vs 1904) used in the file.
fn load_workbook(zip: &mut ZipArchive<SourceReader>) -> Result<(Vec<(String, String)>, bool), ConverterError> {
    let relationships = load_relationships(zip, WORKBOOK_RELATIONSHIPS_PATH)?;
    let mut reader = zip
        .xml_reader(WORKBOOK_PATH)?
        .ok_or_else(|| ConverterError::WithContextError(format!("missing '{WORKBOOK_PATH}'")))?;
    let mut sheets: Vec<(String, String)> = Vec::new();
    let mut is_1904 = false;
    match_xml_events!(reader => {
        Event::Start(event) if event.name() == TAG_SHEET => {
            let name = event.get_attribute_value("name")?;
            let id = event.get_local_attribute_value("id")?;
            if let Some((name, id)) = name.zip(id) {
                if let Some(path) = relationships.get(&*id) {
                    sheets.push((name.to_string(), path.to_owned()));
                }
            }
        }
        Event::Start(event) if event.name() == TAG_WORKBOOK_PROPERTIES => {
            is_1904 = event.get_attribute_value("date1904")?
                .map(|value| value.eq("1") || value.eq("true"))
                .unwrap_or(false);
        }
    });
    Ok((sheets, is_1904))
}

/// Loads worksheet relationships as a mapping of relationship IDs to part paths.
fn load_relationships(zip: &mut ZipArchive<SourceReader>, path: &str) -> Result<HashMap<String, String>, ConverterError> {
    let mut reader = zip
        .xml_reader(path)?
        .ok_or_else(|| ConverterError::WithContextError(format!("missing '{path}'")))?;
    let mut relationships: HashMap<String, String> = HashMap::new();
    match_xml_events!(reader => {
        Event::Start(event) if event.local_name().as_ref() == TAG_RELATIONSHIP => {
            let id = event.get_attribute_value("Id")?;
            let kind = event.get_attribute_value("Type")?;
            let target = event.get_attribute_value("Target")?;
            if kind.map(|it| it.ends_with("/worksheet")).unwrap_or(true) {
                if let Some((id, target)) = id.zip(target) {
                    relationships.insert(id.to_string(), to_zip_path(&target));
                }
            }
        }
    });
    Ok(relationships)
}

/// Normalizes a relationship target to a path inside the archive.
fn to_zip_path(path: &str) -> String {
    if let Some(path) = path.strip_prefix('/') {
        path.to_owned()
    } else if path.starts_with("xl/") {
        path.to_owned()
    } else {
        format!("xl/{path}")
    }
}

/// Loads the cell type of every style index from the styles part.
///
/// A style resolves through its `numFmtId` to either a custom format code,
/// classified by [`CellType::parse_custom_number_format`], or a built-in id.
fn load_number_formats(zip: &mut ZipArchive<SourceReader>, is_1904: bool) -> Result<Vec<CellType>, ConverterError> {
    let mut reader = match zip.xml_reader(STYLES_PATH)? {
        Some(reader) => reader,
        None => return Ok(Vec::new()),
    };

    let mut custom_formats_context = false;
    let mut custom_formats = HashMap::<String, CellType>::new();
    let mut format_indexes_context = false;
    let mut format_indexes = Vec::<String>::new();

    match_xml_events!(reader => {
        Event::Start(event) if event.name() == TAG_CUSTOM_FORMATS => custom_formats_context = true,
        Event::End(event) if event.name() == TAG_CUSTOM_FORMATS => custom_formats_context = false,
        Event::Start(event) if custom_formats_context && event.name() == TAG_CUSTOM_FORMAT => {
            let id = event.get_attribute_value("numFmtId")?;
            let format = event.get_attribute_value("formatCode")?;
            if let Some((id, format)) = id.zip(format) {
                custom_formats.insert(id.to_string(), CellType::parse_custom_number_format(&format, is_1904));
            }
        }
        Event::Start(event) if event.name() == TAG_FORMAT_INDEXES => format_indexes_context = true,
        Event::End(event) if event.name() == TAG_FORMAT_INDEXES => break,
        Event::Start(event) if format_indexes_context && event.name() == TAG_FORMAT_INDEX => {
            let id = event.get_attribute_value("numFmtId")?.unwrap_or_default();
            format_indexes.push(id.to_string());
        }
    });

    Ok(format_indexes
        .iter()
        .map(|id| {
            custom_formats
                .get(id)
                .copied()
                .or_else(|| CellType::parse_builtin_number_format_id(id, is_1904))
                .unwrap_or(CellType::Number)
        })
        .collect())
}

fn load_shared_strings(zip: &mut ZipArchive<SourceReader>) -> Result<Vec<String>, ConverterError> {
    let mut shared_strings = Vec::<String>::new();
    let mut reader = match zip.xml_reader(SHARED_STRINGS_PATH)? {
        Some(reader) => reader,
        None => return Ok(shared_strings),
    };
    match_xml_events!(reader => {
        Event::Start(event) if event.name() == TAG_SHARED_STRING_ITEM => {
            shared_strings.push(read_string_value(&mut reader, TAG_SHARED_STRING_ITEM, false)?);
        }
    });
    Ok(shared_strings)
}

/// Reads the text of a string element up to `end_tag`, skipping phonetic
/// annotations. With `is_text_content` the element's own text counts,
/// otherwise only nested `<t>` runs do.
fn read_string_value<R: BufRead>(reader: &mut XmlReader<R>, end_tag: QName, is_text_content: bool) -> Result<String, ConverterError> {
    let mut is_phonetic_text = false;
    let mut is_text = is_text_content;
    let mut text = String::new();
    match_xml_events!(reader => {
        Event::End(event) if event.name() == end_tag => break,
        Event::Start(event) if event.name() == TAG_PHONETIC_TEXT => is_phonetic_text = true,
        Event::End(event) if event.name() == TAG_PHONETIC_TEXT => is_phonetic_text = false,
        Event::Start(event) if !is_phonetic_text && event.name() == TAG_TEXT => is_text = true,
        Event::End(event) if is_text && event.name() == TAG_TEXT => is_text = false,
        Event::Text(event) if is_text => text.push_str(&event.xml_content()?),
        Event::CData(event) if is_text => text.push_str(&event.xml_content()?),
        Event::GeneralRef(event) if is_text => text.push_bytes_ref(&event)?,
    });
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;
    use chrono::NaiveDate;
    use std::io::Cursor;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<workbookPr date1904="0"/>
<sheets><sheet name="Plantilla" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#;

    const RELATIONSHIPS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="/xl/worksheets/sheet1.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

    const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<numFmts count="1"><numFmt numFmtId="164" formatCode="dd/mm/yyyy"/></numFmts>
<cellXfs count="3"><xf numFmtId="0"/><xf numFmtId="164"/><xf numFmtId="22"/></cellXfs>
</styleSheet>"#;

    const SHARED_STRINGS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="2" uniqueCount="2">
<si><t>Lab &amp; Co</t></si>
<si><r><t>Rich</t></r><r><t xml:space="preserve"> text</t></r><rPh><t>ignored</t></rPh></si>
</sst>"#;

    const WORKSHEET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<sheetData>
<row r="2"><c r="B2" t="s"><v>0</v></c><c r="D2" t="s"><v>1</v></c></row>
<row r="3"><c r="A3" s="1"><v>45356</v></c><c r="B3" s="2"><v>45356.5</v></c><c r="C3" t="e"><v>#N/A</v></c></row>
<row r="4"><c r="A4" t="inlineStr"><is><t>inline</t></is></c><c r="B4" t="b"><v>0</v></c><c r="C4"><v>7</v></c></row>
<row><c t="str"><f>A1</f><v>formula</v></c></row>
</sheetData>
</worksheet>"#;

    fn package(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in parts {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    fn spreadsheet() -> XlsxSpreadsheet {
        let bytes = package(&[
            ("xl/workbook.xml", WORKBOOK),
            ("xl/_rels/workbook.xml.rels", RELATIONSHIPS),
            ("xl/styles.xml", STYLES),
            ("xl/sharedStrings.xml", SHARED_STRINGS),
            ("xl/worksheets/sheet1.xml", WORKSHEET),
        ]);
        XlsxSpreadsheet::from_bytes("test.xlsx", bytes).unwrap()
    }

    #[test]
    fn zip_paths() {
        assert_eq!(to_zip_path("/xl/worksheets/sheet1.xml"), "xl/worksheets/sheet1.xml");
        assert_eq!(to_zip_path("xl/worksheets/sheet1.xml"), "xl/worksheets/sheet1.xml");
        assert_eq!(to_zip_path("worksheets/sheet1.xml"), "xl/worksheets/sheet1.xml");
    }

    #[test]
    fn workbook_structure() {
        let spreadsheet = spreadsheet();
        assert_eq!(spreadsheet.sheets, vec![("Plantilla".to_owned(), "xl/worksheets/sheet1.xml".to_owned())]);
        assert_eq!(
            spreadsheet.number_formats,
            vec![CellType::Number, CellType::NumberDate1900, CellType::NumberDateTime1900]
        );
    }

    #[test]
    fn sheet_cells() {
        let mut spreadsheet = spreadsheet();
        let table = spreadsheet.read_sheet(0, &Criteria::new("Plantilla", 0)).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

        // starts at the first non-empty row, columns stay absolute
        assert_eq!(table.row_count(), 4);
        assert_eq!(table.width(), 4);
        assert_eq!(table.get(0, 0), &Value::Empty);
        assert_eq!(table.get(0, 1), &Value::from("Lab & Co"));
        assert_eq!(table.get(0, 3), &Value::from("Rich text"));
        assert_eq!(table.get(1, 0), &Value::Date(date));
        assert_eq!(table.get(1, 1), &Value::DateTime(date.and_hms_opt(12, 0, 0).unwrap()));
        assert_eq!(table.get(1, 2), &Value::Empty);
        assert_eq!(table.get(2, 0), &Value::from("inline"));
        assert_eq!(table.get(2, 1), &Value::Boolean(false));
        assert_eq!(table.get(2, 2), &Value::Number(7.0));
        assert_eq!(table.get(3, 0), &Value::from("formula"));
    }

    #[test]
    fn blank_rows_only_on_request() {
        let worksheet = r#"<worksheet><sheetData>
<row r="1"><c r="A1" t="inlineStr"><is><t>Name</t></is></c></row>
<row r="2"><c r="A2" s="1"/><c r="C2" s="1"/></row>
<row r="3"></row>
</sheetData></worksheet>"#;
        let bytes = package(&[
            ("xl/workbook.xml", WORKBOOK),
            ("xl/_rels/workbook.xml.rels", RELATIONSHIPS),
            ("xl/styles.xml", STYLES),
            ("xl/worksheets/sheet1.xml", worksheet),
        ]);
        let mut spreadsheet = XlsxSpreadsheet::from_bytes("blank.xlsx", bytes).unwrap();

        let table = spreadsheet.read_sheet(0, &Criteria::new("Plantilla", 0)).unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.width(), 1);

        let table = spreadsheet.read_sheet(0, &Criteria::new("Plantilla", 0).with_blank_rows()).unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.width(), 3);
        assert_eq!(table.get(0, 0), &Value::from("Name"));
        assert_eq!(table.get(1, 2), &Value::Empty);
    }

    #[test]
    fn missing_workbook_part() {
        let bytes = package(&[("xl/_rels/workbook.xml.rels", RELATIONSHIPS)]);
        let error = XlsxSpreadsheet::from_bytes("broken.xlsx", bytes).err().unwrap();
        assert!(matches!(
            error,
            ConverterError::SpreadsheetError(SpreadsheetError::MalformedDocument { ref file, .. }) if file == "broken.xlsx"
        ));
    }

    #[test]
    fn malformed_worksheet() {
        let bytes = package(&[
            ("xl/workbook.xml", WORKBOOK),
            ("xl/_rels/workbook.xml.rels", RELATIONSHIPS),
            ("xl/worksheets/sheet1.xml", "<worksheet><sheetData><row r=\"x\"></row></sheetData></worksheet>"),
        ]);
        let mut spreadsheet = XlsxSpreadsheet::from_bytes("broken.xlsx", bytes).unwrap();
        let error = spreadsheet.read_sheet(0, &Criteria::new("Plantilla", 0)).err().unwrap();
        assert!(matches!(error, ConverterError::SpreadsheetError(SpreadsheetError::MalformedDocument { .. })));
    }
}
