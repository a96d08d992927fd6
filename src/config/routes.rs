use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::{
    config::route_settings::RouteSettings,
    domain::template::{match_path, render, PathParams, Template, TemplateParser, ValueSource},
    error::{MatchError, TemplateResultExt},
};

const DEFAULT_ROUTES_FILE: &str = "routes.yml";

/// A named resource template, parsed and ready to render or match
#[derive(Debug, Clone)]
pub struct Route {
    alias: String,
    source: String,
    template: Template,
    description: Option<String>,
    mount: Option<String>,
}

impl Route {
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Template text as written in the route file
    pub fn template_text(&self) -> &str {
        &self.source
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn mount(&self) -> Option<&str> {
        self.mount.as_deref()
    }

    /// Render under `prefix`, falling back to the route's configured mount
    pub fn render<S>(&self, prefix: Option<&str>, values: &S) -> Result<String>
    where
        S: ValueSource + ?Sized,
    {
        let prefix = prefix
            .or(self.mount.as_deref())
            .with_context(|| format!("Route '{}' has no mount; a prefix is required", self.alias))?;
        Ok(render(prefix, &self.source, values))
    }

    pub fn match_path(&self, path: &str) -> Result<PathParams, MatchError> {
        match_path(&self.template, path)
    }
}

impl TryFrom<RouteSettings> for Route {
    type Error = anyhow::Error;

    fn try_from(value: RouteSettings) -> Result<Self> {
        let template = TemplateParser::parse(&value.template)
            .template_err(&value.template)
            .with_context(|| format!("Invalid route '{}'", value.alias))?;
        Ok(Self {
            alias: value.alias,
            source: value.template,
            template,
            description: value.description,
            mount: value.mount,
        })
    }
}

/// RouteTable maps aliases to parsed resource templates
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, Route>,
}

impl RouteTable {
    pub fn from_settings(settings: Vec<RouteSettings>) -> Result<Self> {
        let mut routes = HashMap::new();
        for entry in settings {
            let route = Route::try_from(entry)?;
            debug!(alias = route.alias(), template = route.template_text(), "loaded route");
            if routes.contains_key(route.alias()) {
                bail!("Duplicate alias: {}", route.alias());
            }
            routes.insert(route.alias.clone(), route);
        }
        Ok(Self { routes })
    }

    pub fn from_yaml_str(yml: &str) -> Result<Self> {
        let settings: Vec<RouteSettings> =
            serde_yaml::from_str(yml).context("Invalid route table yaml")?;
        Self::from_settings(settings)
    }

    /// Load the route table from `maybe_yml`, or `routes.yml` when absent
    pub fn load(maybe_yml: Option<&str>) -> Result<Self> {
        let path = maybe_yml.unwrap_or(DEFAULT_ROUTES_FILE);
        let yml = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read route table {}", path))?;
        let table = Self::from_yaml_str(&yml).with_context(|| format!("In {}", path))?;
        info!(path, routes = table.len(), "loaded route table");
        Ok(table)
    }

    pub fn get(&self, alias: &str) -> Option<&Route> {
        self.routes.get(alias)
    }

    /// Look up an alias, failing with the list of known aliases
    pub fn require(&self, alias: &str) -> Result<&Route> {
        self.get(alias).with_context(|| {
            format!("Unknown route '{}'. Known routes: {}", alias, self.aliases().join(", "))
        })
    }

    /// Aliases in sorted order
    pub fn aliases(&self) -> Vec<&str> {
        let mut aliases: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        aliases.sort_unstable();
        aliases
    }

    /// First route (by alias) whose template matches `path`
    pub fn resolve(&self, path: &str) -> Option<(&Route, PathParams)> {
        self.aliases().into_iter().find_map(|alias| {
            let route = &self.routes[alias];
            route.match_path(path).ok().map(|params| (route, params))
        })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
