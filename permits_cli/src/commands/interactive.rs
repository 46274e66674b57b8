use std::sync::Arc;

use anyhow::Result;
use permits_lib::{SearchParams, SearchPipeline};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

use crate::output::{print_results, OutputFormat};

/// Treats every stdin line as a form submission. Searches run concurrently;
/// the results are re-rendered each time a search is applied.
pub async fn run(pipeline: Arc<SearchPipeline>, format: OutputFormat) -> Result<()> {
    let format = Arc::new(format);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut searches = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let params = SearchParams::parse_line(&line);
        let pipeline = Arc::clone(&pipeline);
        let format = Arc::clone(&format);
        searches.spawn(async move {
            let report = pipeline.search(&params).await;
            if !report.applied {
                return Ok(());
            }
            let (shown, view) = pipeline.current();
            if let Some(shown) = shown {
                eprintln!("Search #{}: {} permits", shown.seq(), view.blocks().len());
            }
            print_results(&view, &format)
        });
    }

    while let Some(joined) = searches.join_next().await {
        joined??;
    }
    Ok(())
}
