use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{debug, warn};
use serde_json::{Map, Value};

use crate::{
    config::yml_settings::RouteSettings,
    domain::template::{coerce, VarLookup},
    UriTemplate,
};

/// A parsed route template with its default values
#[derive(Debug, Clone)]
pub struct Route {
    name: String,
    template: UriTemplate,
    description: Option<String>,
    defaults: Map<String, Value>,
}

impl Route {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn template(&self) -> &UriTemplate {
        &self.template
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn defaults(&self) -> &Map<String, Value> {
        &self.defaults
    }

    /// Resolve with `vars`, falling back to the route defaults
    pub fn resolve<L>(&self, vars: &L) -> Result<String>
    where
        L: VarLookup + ?Sized,
    {
        let merged = WithDefaults {
            vars,
            defaults: &self.defaults,
        };
        self.template
            .resolve(&merged)
            .with_context(|| format!("Could not resolve route '{}'", self.name))
    }
}

impl TryFrom<RouteSettings> for Route {
    type Error = anyhow::Error;

    fn try_from(value: RouteSettings) -> Result<Self> {
        let template = UriTemplate::new(&value.template)
            .with_context(|| format!("Invalid template for route '{}'", value.name))?;

        let variables: HashSet<&str> = template
            .variables()
            .into_iter()
            .map(|v| v.name.as_str())
            .collect();

        for (name, default) in &value.defaults {
            coerce(name, Some(default))
                .with_context(|| format!("Invalid default for route '{}'", value.name))?;

            if !variables.contains(name.as_str()) {
                warn!(
                    "route '{}' has a default for '{}' which its template never uses",
                    value.name, name
                );
            }
        }

        Ok(Self {
            name: value.name,
            template,
            description: value.description,
            defaults: value.defaults,
        })
    }
}

/// Caller values first, then route defaults
struct WithDefaults<'a, L: ?Sized> {
    vars: &'a L,
    defaults: &'a Map<String, Value>,
}

impl<L: VarLookup + ?Sized> VarLookup for WithDefaults<'_, L> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.vars.lookup(name).or_else(|| self.defaults.get(name))
    }
}

/// Named route templates, usually loaded from a YAML file
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, Route>,
}

impl RouteTable {
    pub fn from_settings(settings: Vec<RouteSettings>) -> Result<Self> {
        let mut routes = HashMap::new();
        for route_settings in settings {
            let route = Route::try_from(route_settings)?;
            if routes.contains_key(route.name()) {
                bail!("Duplicate route: {}", route.name());
            }
            routes.insert(route.name().to_string(), route);
        }
        debug!("loaded {} route templates", routes.len());
        Ok(Self { routes })
    }

    pub fn from_yaml_str(yml: &str) -> Result<Self> {
        let settings: Vec<RouteSettings> =
            serde_yaml::from_str(yml).context("Invalid yaml route configuration")?;
        Self::from_settings(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yml = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read route file {}", path.display()))?;
        Self::from_yaml_str(&yml)
    }

    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.get(name)
    }

    /// Route names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn resolve<L>(&self, name: &str, vars: &L) -> Result<String>
    where
        L: VarLookup + ?Sized,
    {
        let route = self
            .get(name)
            .with_context(|| format!("Unknown route: {}", name))?;
        route.resolve(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ROUTES: &str = r#"
- name: news
  template: "http://example.org/{area}/last-news{?type,count}"
  description: Latest news
  defaults:
    count: "10"
- name: files
  template: "http://example.com{/paths*}"
"#;

    #[test]
    fn test_load_routes() {
        let table = RouteTable::from_yaml_str(ROUTES).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.names(), vec!["files", "news"]);
        assert_eq!(table.get("news").unwrap().description(), Some("Latest news"));
        assert!(table.get("files").unwrap().description().is_none());
    }

    #[test]
    fn test_defaults_fill_missing_values() {
        let table = RouteTable::from_yaml_str(ROUTES).unwrap();
        let uri = table
            .resolve("news", &json!({"area": "world", "type": "actual"}))
            .unwrap();
        assert_eq!(uri, "http://example.org/world/last-news?type=actual&count=10");
    }

    #[test]
    fn test_caller_values_shadow_defaults() {
        let table = RouteTable::from_yaml_str(ROUTES).unwrap();
        let uri = table
            .resolve("news", &json!({"area": "world", "count": "5"}))
            .unwrap();
        assert_eq!(uri, "http://example.org/world/last-news?count=5");
    }

    #[test]
    fn test_unknown_route() {
        let table = RouteTable::from_yaml_str(ROUTES).unwrap();
        let err = table.resolve("nope", &json!({})).unwrap_err();
        assert!(err.to_string().contains("Unknown route: nope"));
    }

    #[test]
    fn test_unused_default_still_loads() {
        let yml = r#"
- name: items
  template: "/items{?page}"
  defaults:
    page: "1"
    unused: "x"
"#;
        let table = RouteTable::from_yaml_str(yml).unwrap();
        assert_eq!(table.resolve("items", &json!({})).unwrap(), "/items?page=1");
    }

    #[test]
    fn test_duplicate_route_fails() {
        let yml = r#"
- name: a
  template: "/a"
- name: a
  template: "/b"
"#;
        let err = RouteTable::from_yaml_str(yml).unwrap_err();
        assert!(err.to_string().contains("Duplicate route: a"));
    }

    #[test]
    fn test_invalid_template_fails_load() {
        let yml = r#"
- name: broken
  template: "/a{b"
"#;
        let err = RouteTable::from_yaml_str(yml).unwrap_err();
        assert!(err.to_string().contains("Invalid template for route 'broken'"));
    }

    #[test]
    fn test_numeric_default_fails_load() {
        let yml = r#"
- name: page
  template: "/items{?page}"
  defaults:
    page: 1
"#;
        let err = RouteTable::from_yaml_str(yml).unwrap_err();
        assert!(err.to_string().contains("Invalid default for route 'page'"));
        let cause = format!("{:#}", err);
        assert!(cause.contains("\"page\""));
    }

    #[test]
    fn test_invalid_value_keeps_route_context() {
        let table = RouteTable::from_yaml_str(ROUTES).unwrap();
        let err = table.resolve("news", &json!({"area": true})).unwrap_err();
        assert!(err.to_string().contains("Could not resolve route 'news'"));
        assert!(err.downcast_ref::<crate::InvalidValueTypeError>().is_some());
    }
}
