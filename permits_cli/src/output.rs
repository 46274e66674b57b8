use anyhow::Result;
use permits_lib::{PermitBlock, ResultsView, NO_RESULTS};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to text.
    pub fn parse(name: &str) -> Self {
        match name {
            "table" => OutputFormat::Table,
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Text,
        }
    }
}

#[derive(Tabled, Serialize)]
struct PermitRow {
    #[tabled(rename = "Permit Number")]
    #[serde(rename = "Permit Number")]
    permit_number: String,
    #[tabled(rename = "Issue Date")]
    #[serde(rename = "Issue Date")]
    issue_date: String,
    #[tabled(rename = "Permit Type")]
    #[serde(rename = "Permit Type")]
    permit_type: String,
    #[tabled(rename = "Work Type")]
    #[serde(rename = "Work Type")]
    work_type: String,
    #[tabled(rename = "Neighbourhood")]
    #[serde(rename = "Neighbourhood")]
    neighbourhood: String,
    #[tabled(rename = "Community")]
    #[serde(rename = "Community")]
    community: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Final Date")]
    #[serde(rename = "Final Date")]
    final_date: String,
}

fn build_permit_rows(blocks: &[PermitBlock]) -> Vec<PermitRow> {
    blocks
        .iter()
        .map(|b| PermitRow {
            permit_number: b.permit_number.clone(),
            issue_date: b.issue_date.clone(),
            permit_type: b.permit_type.clone(),
            work_type: b.work_type.clone(),
            neighbourhood: b.neighbourhood_name.clone(),
            community: b.community.clone(),
            status: b.status.clone(),
            final_date: b.final_date.clone(),
        })
        .collect()
}

/// Renders the whole result list in the chosen format.
pub fn render(view: &ResultsView, format: &OutputFormat) -> Result<String> {
    if let OutputFormat::Json = format {
        return Ok(serde_json::to_string_pretty(view.blocks())?);
    }
    if view.is_empty() {
        return Ok(NO_RESULTS.to_string());
    }
    Ok(match format {
        OutputFormat::Table => Table::new(build_permit_rows(view.blocks())).to_string(),
        OutputFormat::Markdown => {
            let mut table = Table::new(build_permit_rows(view.blocks()));
            table.with(Style::markdown());
            table.to_string()
        }
        OutputFormat::Csv => to_csv(view.blocks())?,
        OutputFormat::Text | OutputFormat::Json => view.to_string(),
    })
}

fn to_csv(blocks: &[PermitBlock]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in build_permit_rows(blocks) {
        wtr.serialize(row)?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Prints the rendered list to stdout in a single write.
pub fn print_results(view: &ResultsView, format: &OutputFormat) -> Result<()> {
    println!("{}", render(view, format)?);
    Ok(())
}
