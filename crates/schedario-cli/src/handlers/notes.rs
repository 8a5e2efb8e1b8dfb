use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, hctx: &HandlerContext) -> Result<()> {
    let catalog = ctx.catalog()?;
    hctx.render(presenters::present_notes(catalog))
}
