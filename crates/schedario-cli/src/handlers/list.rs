use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::types::DatasetArg;
use anyhow::Result;
use schedario_runtime::{empty_state_message, visible_entries};

pub fn handle(
    ctx: &ExecutionContext,
    dataset: Option<DatasetArg>,
    query: Option<&str>,
    hctx: &HandlerContext,
) -> Result<()> {
    let catalog = ctx.catalog()?;
    let dataset = ctx.dataset(dataset)?;

    let Some(records) = catalog.records(dataset) else {
        return hctx.render(presenters::present_empty_state(dataset, empty_state_message(dataset)));
    };

    let query = query.map(str::trim).unwrap_or_default();
    let entries = visible_entries(catalog, dataset, query, None);
    hctx.render(presenters::present_record_list(dataset, query, entries, records.len()))
}
