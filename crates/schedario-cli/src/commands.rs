use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use crate::context::ExecutionContext;
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let ctx = ExecutionContext::new(cli.data_dir.as_deref(), cli.config.as_deref())?;
    let plain = HandlerContext::plain(cli.format);

    let Some(command) = cli.command else {
        return handlers::datasets::handle(&ctx, &plain);
    };

    match command {
        Commands::List {
            dataset,
            query,
            view_mode,
        } => handlers::list::handle(
            &ctx,
            dataset,
            query.as_deref(),
            &HandlerContext::new(cli.format, &view_mode),
        ),

        Commands::Show {
            record,
            expand,
            view_mode,
        } => handlers::show::handle(
            &ctx,
            &record,
            &expand,
            &HandlerContext::new(cli.format, &view_mode),
        ),

        Commands::Print {
            all,
            record,
            output,
        } => handlers::print::handle(&ctx, all, &record, output, &plain),

        Commands::Export { record, to, output } => {
            handlers::export::handle(&ctx, &record, to, output, &plain)
        }

        Commands::Browse { dataset } => handlers::browse::handle(&ctx, dataset, &plain),

        Commands::Notes => handlers::notes::handle(&ctx, &plain),

        Commands::Datasets => handlers::datasets::handle(&ctx, &plain),
    }
}
