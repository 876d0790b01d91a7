use anyhow::Result;
use colored::Colorize;
use driveview_router::ViewRef;

use crate::App;

pub fn execute(app: &App) -> Result<()> {
    println!("{}", "Route table".green().bold());
    println!();
    println!("Base path: {}", app.config.routing.base_path.cyan());
    println!(
        "Matching: {}",
        if app.table.is_case_insensitive() { "case-insensitive" } else { "case-sensitive" }
    );
    println!();

    for route in app.table.routes() {
        let (kind, view) = describe(route.view());
        println!(
            "  {:<12} {:<20} {} {}",
            route.name().bold(),
            route.pattern().as_str().cyan(),
            view,
            kind.dimmed()
        );
    }

    Ok(())
}

/// Load mode and component name of a view reference
fn describe(view: &ViewRef) -> (&'static str, String) {
    let kind = if view.is_lazy() { "(lazy)" } else { "(eager)" };
    let name = view
        .ready()
        .map(ToString::to_string)
        .unwrap_or_else(|| "<deferred>".to_string());
    (kind, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use driveview_router::View;

    #[test]
    fn test_describe() {
        assert_eq!(describe(&ViewRef::eager("FolderView")), ("(eager)", "FolderView".to_string()));

        let lazy = ViewRef::lazy(|| async { Ok(View::new("NotFoundView")) });
        assert_eq!(describe(&lazy), ("(lazy)", "<deferred>".to_string()));
    }
}
