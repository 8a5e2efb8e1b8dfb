use super::{HandlerContext, open_record};
use crate::args::RecordArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use schedario_runtime::{Session, SessionEvent};

pub fn handle(
    ctx: &ExecutionContext,
    record: &RecordArgs,
    expand: &[String],
    hctx: &HandlerContext,
) -> Result<()> {
    let catalog = ctx.catalog()?;
    let dataset = ctx.dataset(record.dataset)?;
    let mut session = Session::new(catalog, dataset);

    if let Some(message) = open_record(&mut session, dataset, record.index)? {
        return hctx.render(presenters::present_empty_state(dataset, message));
    }

    for requested in expand {
        let (child, key) = parse_expand(requested);
        let toggled = session.apply(SessionEvent::ToggleField {
            key: key.to_string(),
            child,
        });
        if toggled.is_empty() {
            tracing::warn!(
                field = requested.as_str(),
                "not a truncated field of this record"
            );
        }
    }

    let card = session.card().context("No card selected")?;
    hctx.render(presenters::present_card(card, session.expansion()))
}

/// `KEY` targets the record itself, `N:KEY` its child at position N.
pub(crate) fn parse_expand(arg: &str) -> (Option<usize>, &str) {
    if let Some((prefix, key)) = arg.split_once(':')
        && let Ok(position) = prefix.trim().parse::<usize>()
    {
        return (Some(position), key);
    }
    (None, arg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expand() {
        assert_eq!(parse_expand("Note (CTN)"), (None, "Note (CTN)"));
        assert_eq!(parse_expand("2:Note (CTN)"), (Some(2), "Note (CTN)"));
        assert_eq!(parse_expand("Nota: libera"), (None, "Nota: libera"));
    }
}
