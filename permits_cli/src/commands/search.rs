use anyhow::Result;
use clap::Args;
use permits_lib::{SearchParams, SearchPipeline};

use crate::output::{print_results, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Permit type to search for (e.g. multi, housing, personal). Case-insensitive substring
    #[arg(long, default_value = "")]
    pub permit_type: String,

    /// Order by issue date: asc or desc
    #[arg(long, default_value = "asc")]
    pub order: String,

    /// Limit results (1-100). Blank or out-of-range values use 100
    #[arg(long, default_value = "")]
    pub limit: String,
}

impl SearchArgs {
    pub fn params(&self) -> SearchParams {
        SearchParams::new(&self.permit_type, &self.order, &self.limit)
    }
}

pub async fn run(args: &SearchArgs, pipeline: &SearchPipeline, format: &OutputFormat) -> Result<()> {
    let report = pipeline.search(&args.params()).await;
    eprintln!("{} permits", report.count);
    print_results(&pipeline.view(), format)
}

pub fn print_url(args: &SearchArgs, pipeline: &SearchPipeline) -> Result<()> {
    println!("{}", pipeline.url(&args.params())?);
    Ok(())
}
