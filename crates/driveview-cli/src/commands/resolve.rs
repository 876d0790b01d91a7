use anyhow::Result;
use driveview_router::{BasePath, Location};
use serde_json::json;

use crate::App;

pub fn execute(app: &App, paths: &[String]) -> Result<()> {
    let base = app.config.base();

    for raw in paths {
        let location = app_location(&base, raw);
        let matched = app.table.resolve(&location.path);
        let output = json!({
            "input": raw,
            "location": location,
            "match": matched,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

/// Splits off query and hash and strips the base path
///
/// A location outside the base path is resolved as given, which lands it on
/// the catch-all route.
pub fn app_location(base: &BasePath, raw: &str) -> Location {
    let mut location = Location::parse(raw);
    match base.strip(&location.path).map(str::to_string) {
        Some(app_path) => location.path = app_path,
        None => tracing::warn!(location = %raw, base = %base.as_str(), "location is outside the base path"),
    }
    location
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_app_location_strips_base() {
        let base = BasePath::new("/drive/");
        let location = app_location(&base, "/drive/list/Music?sort=name#top");
        assert_eq!(location.path, "/list/Music");
        assert_eq!(location.query.as_deref(), Some("sort=name"));
        assert_eq!(location.hash.as_deref(), Some("top"));
    }

    #[test]
    fn test_app_location_outside_base() {
        let base = BasePath::new("/drive");
        assert_eq!(app_location(&base, "/driveway/x").path, "/driveway/x");
        assert_eq!(app_location(&BasePath::root(), "/video/a").path, "/video/a");
    }
}
