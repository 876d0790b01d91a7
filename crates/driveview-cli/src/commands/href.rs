use anyhow::{bail, Result};
use driveview_router::{ParamValue, Params};

use crate::App;

pub fn execute(app: &App, name: &str, args: &[String]) -> Result<()> {
    let params = parse_params(args)?;
    let path = app.table.href(name, &params)?;
    println!("{}", app.config.base().prepend(&path));
    Ok(())
}

/// Parses `KEY=VALUE` arguments
///
/// Values are kept whole. A trailing capture splits `p=movies/2023` into
/// segments when the URL is built; a single-segment capture escapes the
/// slash instead (`id=a/b` becomes `a%2Fb`).
pub fn parse_params(args: &[String]) -> Result<Params> {
    let mut params = Params::new();

    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            bail!("invalid parameter `{arg}`, expected KEY=VALUE");
        };
        if key.is_empty() {
            bail!("invalid parameter `{arg}`, missing name");
        }

        let value = ParamValue::Single(value.to_string());

        if params.insert(key.to_string(), value).is_some() {
            bail!("parameter `{key}` given more than once");
        }
    }

    Ok(params)
}
