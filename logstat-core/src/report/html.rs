use crate::assets::Templates;
use crate::report::error::RenderError;
use crate::report::row::ReportRow;
use std::fs;
use std::path::Path;

pub const TABLE_PLACEHOLDER: &str = "$table_json";

const EMBEDDED_REPORT_TEMPLATE: &str = "report.html";

/// Load the HTML report template: the given file, or the built-in one.
pub fn load_template(path: Option<&Path>) -> Result<String, RenderError> {
    let (origin, template) = match path {
        Some(path) => {
            let template = fs::read_to_string(path).map_err(|e| RenderError::ReadTemplate {
                path: path.to_path_buf(),
                source: e,
            })?;
            (path.display().to_string(), template)
        }
        None => {
            let template = Templates::text(EMBEDDED_REPORT_TEMPLATE).ok_or_else(|| {
                RenderError::MissingEmbeddedTemplate {
                    name: EMBEDDED_REPORT_TEMPLATE.to_string(),
                }
            })?;
            (format!("<embedded {EMBEDDED_REPORT_TEMPLATE}>"), template)
        }
    };

    if !template.contains(TABLE_PLACEHOLDER) {
        return Err(RenderError::MissingPlaceholder {
            origin,
            placeholder: TABLE_PLACEHOLDER,
        });
    }

    Ok(template)
}

/// JSON array of rows, safe to inline inside a `<script>` element.
pub fn table_json(rows: &[ReportRow]) -> Result<String, RenderError> {
    let json = serde_json::to_string(rows)?;
    Ok(json.replace("</", "<\\/"))
}

/// Substitute the table into every `$table_json` placeholder. Any other `$`
/// text in the template is left untouched.
pub fn render_html(template: &str, rows: &[ReportRow]) -> Result<String, RenderError> {
    Ok(template.replace(TABLE_PLACEHOLDER, &table_json(rows)?))
}

pub fn render_json(rows: &[ReportRow]) -> Result<String, RenderError> {
    let mut json = serde_json::to_string_pretty(rows)?;
    json.push('\n');
    Ok(json)
}
