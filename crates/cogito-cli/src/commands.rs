use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::config::{self, Config};
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let source = config::resolve_source(cli.source.as_deref(), &config);
    let pacing = config.pacing.to_pacing();
    let theme = cli.theme.or(config.display.theme).unwrap_or_default();
    let locale = cli.locale.or(config.display.locale).unwrap_or_default();

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => handlers::browse::handle(&source, pacing, theme, locale),

        Commands::List {
            search,
            category,
            limit,
            all,
            format,
        } => handlers::list::handle(&source, &search, &category, limit, all, format),

        Commands::Random {
            search,
            category,
            seed,
            format,
        } => handlers::random::handle(&source, &search, &category, seed, format),

        Commands::Categories { format } => handlers::categories::handle(&source, format),
    }
}
