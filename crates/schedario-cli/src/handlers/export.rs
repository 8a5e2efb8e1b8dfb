use super::{HandlerContext, open_record};
use crate::args::RecordArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::types::ExportFormatArg;
use anyhow::{Context, Result, bail};
use schedario_runtime::{Error, ExportFormat, Notification, Session, SessionEvent, writer_for};
use std::path::PathBuf;

pub fn handle(
    ctx: &ExecutionContext,
    record: &RecordArgs,
    to: Option<ExportFormatArg>,
    output: Option<PathBuf>,
    hctx: &HandlerContext,
) -> Result<()> {
    let catalog = ctx.catalog()?;
    let dataset = ctx.dataset(record.dataset)?;
    let mut session = Session::new(catalog, dataset);

    // An empty dataset leaves nothing selected; the export below reports it.
    open_record(&mut session, dataset, record.index)?;

    let notifications = session.apply(SessionEvent::ExportCurrent);
    let document = match notifications.into_iter().next() {
        Some(Notification::ExportReady { document }) => document,
        Some(Notification::Alert { message }) => bail!(Error::ExportPrecondition(message)),
        _ => bail!("Export produced no document"),
    };

    let format: ExportFormat = match to {
        Some(arg) => arg.into(),
        None => ctx.config()?.export.format,
    };
    let dir = ctx.export_dir(output)?;
    let path = writer_for(format)
        .write(&document, &dir)
        .with_context(|| format!("Failed to export into {}", dir.display()))?;

    hctx.render(presenters::present_export(&document, &path, format))
}
