use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use tabview_engine::ViewEngine;
use tabview_ingest::load_records;
use tabview_model::FieldPath;
use tabview_views::ViewRegistry;
use tracing::{debug, info, info_span};

use tabview_cli::logging::redact_value;
use tabview_cli::query::ViewQuery;
use tabview_cli::render::{Styling, render_view, views_table};

use crate::cli::{ShowArgs, ViewsArgs};

pub fn run_views(args: &ViewsArgs, styling: Styling) -> Result<()> {
    let registry = ViewRegistry::load(args.config.as_deref()).context("load view definitions")?;
    println!("{}", views_table(&registry, styling));
    Ok(())
}

pub fn run_show(args: &ShowArgs, styling: Styling) -> Result<()> {
    let span = info_span!("show", view = %args.view);
    let _guard = span.enter();

    let registry = ViewRegistry::load(args.config.as_deref()).context("load view definitions")?;
    let view = registry.get(&args.view)?;

    let fixture = args.data_dir.join(&view.fixture);
    let records = load_records(&fixture)
        .with_context(|| format!("load fixture for view {}", view.name))?;

    let query = ViewQuery {
        search: args.search.clone(),
        filters: args.filters.clone(),
        sorts: args
            .sorts
            .iter()
            .map(|raw| FieldPath::new(raw).with_context(|| format!("invalid sort field {raw:?}")))
            .collect::<Result<Vec<_>>>()?,
        page: args.page,
        page_size: args.page_size,
    };
    if let Some(term) = &query.search {
        debug!(search = redact_value(term), "applying search");
    }
    let state = query.state_for(view);

    let engine = ViewEngine::new(view.searchable.clone());
    let result = engine.compute(&records, &state);
    info!(
        records = records.len(),
        matched = result.total_items,
        page = result.page,
        total_pages = result.total_pages,
        "computed view"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("serialize view")?;
        println!("{json}");
    } else {
        println!("{}", render_view(view, &result, styling));
    }
    Ok(())
}

/// Table styling for the resolved color choice.
pub fn styling_for(color: clap::ColorChoice) -> Styling {
    match color {
        clap::ColorChoice::Always => Styling::Always,
        clap::ColorChoice::Never => Styling::Never,
        clap::ColorChoice::Auto if io::stdout().is_terminal() => Styling::Auto,
        clap::ColorChoice::Auto => Styling::Never,
    }
}
