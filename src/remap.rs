//! Column remapping engine.

use crate::convert::Warning;
use crate::layout::Layout;
use crate::table::RawTable;
use crate::table::Table;
use crate::table::Value;
use tracing::warn;

/// Moves the input's columns into the layout's destination positions and
/// names them with the layout's headers.
///
/// The result always has exactly `layout.headers().len()` columns. A rule
/// whose source column lies beyond the input's width is skipped with a
/// [`Warning::SourceColumnMissing`]; its destination stays empty.
pub fn remap(input: &RawTable, layout: &Layout) -> (Table, Vec<Warning>) {
    let mut warnings = Vec::<Warning>::new();
    let working_width = layout
        .rules()
        .iter()
        .map(|rule| rule.destination + 1)
        .max()
        .unwrap_or(0);
    let mut rows = vec![vec![Value::Empty; working_width]; input.row_count()];

    for rule in layout.rules() {
        if rule.source < input.width() {
            for (index, row) in rows.iter_mut().enumerate() {
                row[rule.destination] = input.get(index, rule.source).clone();
            }
        } else {
            warn!(
                source = %rule.source_address,
                destination = %rule.destination_address,
                width = input.width(),
                "source column not found in input, destination left empty"
            );
            warnings.push(Warning::SourceColumnMissing {
                source: rule.source_address.to_owned(),
                destination: rule.destination_address.to_owned(),
            });
        }
    }

    // Table::new truncates or pads every row to the header count
    (Table::new(layout.headers().to_vec(), rows), warnings)
}
