//! Prints the per-league summary table to stdout.

use anyhow::Context;
use betboard::config::{Settings, SETTINGS_FILE};
use betboard::report::TextTable;
use betboard::{DataLoader, LeagueAggregator, SummaryConsumer};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    settings.logging.init();

    let loader = DataLoader::new(settings.skip_rows)?;
    let bets = loader
        .load(&settings.source_url)
        .with_context(|| format!("loading {}", settings.source_url))?;

    let mut view = TextTable::new();
    view.consume(&LeagueAggregator::aggregate(&bets));
    print!("{view}");
    Ok(())
}
