use super::{HandlerContext, open_record};
use crate::args::RecordArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::{Context, Result, bail};
use chrono::Local;
use schedario_runtime::{Notification, PrintPage, Session, SessionEvent, print_all};
use std::io::Write;
use std::path::PathBuf;

const ALL_TITLE: &str = "Schede";

pub fn handle(
    ctx: &ExecutionContext,
    all: bool,
    record: &RecordArgs,
    output: Option<PathBuf>,
    hctx: &HandlerContext,
) -> Result<()> {
    let catalog = ctx.catalog()?;

    let cards = if all {
        print_all(catalog)
    } else {
        let dataset = ctx.dataset(record.dataset)?;
        let mut session = Session::new(catalog, dataset);
        if let Some(message) = open_record(&mut session, dataset, record.index)? {
            bail!("{}", message);
        }
        session
            .apply(SessionEvent::PrintCurrent)
            .into_iter()
            .find_map(|n| match n {
                Notification::PrintReady { cards } => Some(cards),
                _ => None,
            })
            .unwrap_or_default()
    };

    if cards.is_empty() {
        bail!("No records available to print");
    }

    let title = match (all, cards.first()) {
        (false, Some(card)) => card.header.title.clone(),
        _ => ALL_TITLE.to_string(),
    };
    let html = PrintPage::new(title, &cards)
        .generated_at(Local::now())
        .render();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), cards = cards.len(), "print page written");
            hctx.render(presenters::present_print(cards.len(), Some(&path), None))
        }
        None if hctx.json_mode() => {
            hctx.render(presenters::present_print(cards.len(), None, Some(html)))
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(html.as_bytes())?;
            out.flush()?;
            Ok(())
        }
    }
}
