// Command line surface: render, match and last-field

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgGroup, ArgMatches};
use serde_json::{Map, Value};
use std::ffi::OsString;
use std::io::Write;
use tracing::{info, warn};

use crate::config::{load_values, parse_assignment, RouteTable};
use crate::domain::template::{last_field, missing_fields, path_parameters, render};
use crate::error::TemplateResultExt;

fn template_args() -> [Arg; 2] {
    [
        Arg::new("template")
            .short('t')
            .long("template")
            .value_name("TEMPLATE")
            .help("Path template, e.g. /transform/role/{name}"),
        Arg::new("route")
            .short('r')
            .long("route")
            .value_name("ALIAS")
            .help("Alias of a template in the route table"),
    ]
}

pub fn build_cli() -> clap::Command {
    clap::Command::new("pathtmpl")
        .about("Render resource path templates and recover their parameters")
        .version(crate::VERSION)
        .subcommand_required(true)
        .arg(
            Arg::new("routes")
                .short('c')
                .long("routes")
                .value_name("ROUTES")
                .global(true)
                .help("Path to a YAML file containing route templates"),
        )
        .subcommand(
            clap::Command::new("render")
                .about("Render a template under a mount prefix")
                .args(template_args())
                .group(
                    ArgGroup::new("source")
                        .args(["template", "route"])
                        .required(true),
                )
                .arg(
                    Arg::new("prefix")
                        .short('p')
                        .long("prefix")
                        .value_name("PREFIX")
                        .help("Mount path replacing the template's first segment"),
                )
                .arg(
                    Arg::new("set")
                        .short('s')
                        .long("set")
                        .value_name("KEY=VALUE")
                        .action(ArgAction::Append)
                        .help("Placeholder value, may be repeated"),
                )
                .arg(
                    Arg::new("values")
                        .short('v')
                        .long("values")
                        .value_name("VALUES")
                        .help("YAML or JSON file of placeholder values"),
                ),
        )
        .subcommand(
            clap::Command::new("match")
                .about("Recover placeholder values from a rendered path")
                .args(template_args())
                .group(ArgGroup::new("source").args(["template", "route"]))
                .arg(
                    Arg::new("path")
                        .long("path")
                        .value_name("PATH")
                        .required(true)
                        .help("Concrete path to match"),
                ),
        )
        .subcommand(
            clap::Command::new("last-field")
                .about("Print the final segment of a path or template")
                .arg(Arg::new("input").value_name("PATH").required(true)),
        )
}

/// Parse `args` and execute the selected subcommand, writing results to `out`
pub fn run<I, T, W>(args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let matches = build_cli().try_get_matches_from(args)?;

    match matches.subcommand() {
        Some(("render", sub)) => run_render(sub, routes_path(sub), out),
        Some(("match", sub)) => run_match(sub, routes_path(sub), out),
        Some(("last-field", sub)) => {
            let input = sub
                .get_one::<String>("input")
                .context("missing PATH argument")?;
            writeln!(out, "{}", last_field(input))?;
            Ok(())
        }
        _ => unreachable!("subcommand is required"),
    }
}

// Global, so present on every subcommand's matches
fn routes_path(sub: &ArgMatches) -> Option<&str> {
    sub.get_one::<String>("routes").map(String::as_str)
}

fn collect_values(sub: &ArgMatches) -> Result<Map<String, Value>> {
    let mut values = match sub.get_one::<String>("values") {
        Some(path) => load_values(path)?,
        None => Map::new(),
    };

    for raw in sub.get_many::<String>("set").into_iter().flatten() {
        let (key, value) = parse_assignment(raw)?;
        values.insert(key, Value::String(value));
    }

    Ok(values)
}

fn run_render<W: Write>(sub: &ArgMatches, routes_path: Option<&str>, out: &mut W) -> Result<()> {
    let values = collect_values(sub)?;
    let prefix = sub.get_one::<String>("prefix").map(String::as_str);

    let (template, rendered) = match sub.get_one::<String>("route") {
        Some(alias) => {
            let table = RouteTable::load(routes_path)?;
            let route = table.require(alias)?;
            (route.template_text().to_string(), route.render(prefix, &values)?)
        }
        None => {
            let template = sub
                .get_one::<String>("template")
                .context("either --template or --route is required")?;
            (template.clone(), render(prefix.unwrap_or_default(), template, &values))
        }
    };

    for field in missing_fields(&template, &values) {
        warn!(field = %field, "no value supplied; placeholder left unrendered");
    }

    writeln!(out, "{}", rendered)?;
    Ok(())
}

fn run_match<W: Write>(sub: &ArgMatches, routes_path: Option<&str>, out: &mut W) -> Result<()> {
    let path = sub
        .get_one::<String>("path")
        .context("missing --path argument")?;

    let params = if let Some(template) = sub.get_one::<String>("template") {
        path_parameters(template, path).template_err(template)?
    } else {
        let table = RouteTable::load(routes_path)?;
        match sub.get_one::<String>("route") {
            Some(alias) => {
                let route = table.require(alias)?;
                route.match_path(path).template_err(route.template_text())?
            }
            None => {
                let (route, params) = table
                    .resolve(path)
                    .with_context(|| format!("No route matches {}", path))?;
                info!(alias = route.alias(), "matched route");
                params
            }
        }
    };

    writeln!(out, "{}", serde_json::to_string_pretty(&params)?)?;
    Ok(())
}
