use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use driveview_router::{LoadError, MemoryHistory, Navigation, Navigator, ViewOutcome, ViewState};

use crate::App;

/// How a deferred view load ended
#[derive(Debug, PartialEq)]
pub struct Settled {
    pub generation: u64,
    pub route: String,
    pub outcome: Result<ViewOutcome, LoadError>,
}

pub async fn execute(app: App, paths: &[String]) -> Result<()> {
    println!("{}", "Navigating...".green().bold());
    println!();

    let settled = run(app, paths, report).await?;
    if settled.is_empty() {
        return Ok(());
    }

    println!();
    println!("{}", "Settling deferred views...".green().bold());
    println!();

    for Settled { generation, route, outcome } in settled {
        match outcome {
            Ok(ViewOutcome::Ready(view)) => {
                println!("  #{generation} {} rendered {}", route.bold(), view.to_string().cyan());
            }
            Ok(ViewOutcome::Superseded) => {
                println!("  #{generation} {} {}", route.bold(), "superseded".yellow());
            }
            Err(err) => {
                println!("  #{generation} {} {}", route.bold(), err.to_string().red());
            }
        }
    }

    Ok(())
}

/// Pushes every path without waiting on view loads, then settles them
///
/// Loads started by earlier pushes are superseded by later ones, so only a
/// pending view of the last navigation can come back ready.
pub async fn run(
    app: App,
    paths: &[String],
    mut on_navigate: impl FnMut(&Navigation),
) -> Result<Vec<Settled>> {
    let base = app.config.base();
    let history = MemoryHistory::new(base.prepend("/"));
    let mut navigator = Navigator::new(Arc::new(app.table), base, history);

    let mut navigations = vec![navigator.start()];
    for path in paths {
        navigations.push(navigator.push(path));
    }

    let mut loads = Vec::new();
    for navigation in navigations {
        on_navigate(&navigation);
        if let ViewState::Pending(pending) = navigation.view {
            let route = pending.route().to_string();
            loads.push((navigation.generation, route, tokio::spawn(pending.resolve())));
        }
    }

    let mut settled = Vec::with_capacity(loads.len());
    for (generation, route, handle) in loads {
        settled.push(Settled {
            generation,
            route,
            outcome: handle.await?,
        });
    }

    Ok(settled)
}

fn report(navigation: &Navigation) {
    let view = match &navigation.view {
        ViewState::Ready(view) => view.to_string().cyan(),
        ViewState::Pending(_) => "<loading>".yellow(),
    };
    println!(
        "  #{} {:<8} {:<28} -> {:<10} {}",
        navigation.generation,
        format!("{:?}", navigation.kind).to_lowercase(),
        navigation.location.path,
        navigation.matched.name.bold(),
        view
    );
}
