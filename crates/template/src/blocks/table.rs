//! Repeating table
//!
//! The row binding selects the repeated row elements. A column binding whose
//! path continues the row path (`/Case/Debts/Debt/Amount` under rows at
//! `/Case/Debts/Debt`) is resolved inside each matched row; any other column
//! path is resolved against the whole payload, so every row shows the same value.

use super::{escape, or_fallback, pt, RenderBlock};
use crate::schema::{TableColumn, TableComponent};
use crate::Result;
use xml_tools::{path_segments, resolve, resolve_all, XmlNode};

/// Where a column reads its cell values from
enum CellSource<'a> {
    /// Path relative to the matched row element
    Row(String),
    /// Absolute path into the payload
    Document(&'a str),
}

impl<'a> CellSource<'a> {
    fn for_column(column: &'a TableColumn, row_segments: &[&str]) -> Result<Self> {
        let segments = path_segments(&column.binding.path)?;
        if segments.starts_with(row_segments) {
            let rest = segments[row_segments.len()..].join("/");
            Ok(CellSource::Row(format!("/{rest}")))
        } else {
            Ok(CellSource::Document(&column.binding.path))
        }
    }

    fn value(&self, row: &XmlNode, payload: &XmlNode) -> Result<String> {
        Ok(match self {
            CellSource::Row(path) => resolve(row, path)?,
            CellSource::Document(path) => resolve(payload, path)?,
        })
    }
}

impl RenderBlock for TableComponent {
    fn render_content(&self, payload: &XmlNode) -> Result<String> {
        let row_segments = path_segments(&self.row_binding.path)?;
        let sources = self
            .columns
            .iter()
            .map(|column| CellSource::for_column(column, &row_segments))
            .collect::<Result<Vec<_>>>()?;

        let rows = resolve_all(payload, &self.row_binding.path)?;
        log::trace!("table '{}': {} row(s)", self.id, rows.len());

        let mut out = String::from(r#"<fo:table table-layout="fixed" width="100%">"#);
        for column in &self.columns {
            out.push_str(&format!(
                r#"<fo:table-column column-width="{}"/>"#,
                pt(column.width)
            ));
        }
        out.push_str("<fo:table-body>");

        // header row, declared column order
        out.push_str("<fo:table-row>");
        for column in &self.columns {
            out.push_str(&format!(
                r#"<fo:table-cell padding="2pt"><fo:block font-weight="bold">{}</fo:block></fo:table-cell>"#,
                escape(&column.header)
            ));
        }
        out.push_str("</fo:table-row>");

        for row in rows {
            out.push_str("<fo:table-row>");
            for (column, source) in self.columns.iter().zip(&sources) {
                let value = or_fallback(source.value(row, payload)?, &column.binding);
                out.push_str(&format!(
                    r#"<fo:table-cell padding="2pt"><fo:block>{}</fo:block></fo:table-cell>"#,
                    escape(&value)
                ));
            }
            out.push_str("</fo:table-row>");
        }

        out.push_str("</fo:table-body></fo:table>");
        Ok(out)
    }
}
