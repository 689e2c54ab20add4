//! DTOs for the export endpoint.

use serde::Deserialize;

use crate::api::dto::domain_list::DomainQueryParams;

/// Export file format. Unknown values coerce to CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "domains.csv",
            ExportFormat::Json => "domains.json",
        }
    }
}

/// Raw query parameters for `GET /api/domains/export`: the listing filters
/// plus a `format` selector.
#[derive(Debug, Default, Deserialize)]
pub struct ExportParams {
    pub format: Option<String>,

    #[serde(flatten)]
    pub query: DomainQueryParams,
}

impl ExportParams {
    pub fn format(&self) -> ExportFormat {
        match self.format.as_deref().map(str::trim) {
            Some("json") => ExportFormat::Json,
            _ => ExportFormat::Csv,
        }
    }
}
