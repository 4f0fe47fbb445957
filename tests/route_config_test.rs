// Loading route templates from a YAML file

use std::io::Write;

use serde_json::json;
use uri_templates::RouteTable;

const ROUTES: &str = r#"
- name: news
  template: "http://example.org/{area}/last-news{?type,count}"
  description: Latest news
  defaults:
    count: "10"
- name: search
  template: "https://search.example.com/{?q,tags*}"
  defaults:
    tags: [rust]
"#;

#[test]
fn test_load_routes_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ROUTES.as_bytes()).unwrap();

    let table = RouteTable::from_file(file.path()).unwrap();
    assert_eq!(table.names(), vec!["news", "search"]);

    let uri = table
        .resolve("search", &json!({"q": "uri templates"}))
        .unwrap();
    assert_eq!(uri, "https://search.example.com/?q=uri%20templates&tags=rust");
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yml");
    let err = RouteTable::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Could not read route file"));
    assert!(err.to_string().contains("missing.yml"));
}

#[test]
fn test_invalid_yaml_fails() {
    let err = RouteTable::from_yaml_str("- name: [unterminated").unwrap_err();
    assert!(err.to_string().contains("Invalid yaml route configuration"));
}

#[test]
fn test_route_template_is_exposed() {
    let table = RouteTable::from_yaml_str(ROUTES).unwrap();
    let route = table.get("news").unwrap();
    assert_eq!(route.template().as_str(), "http://example.org/{area}/last-news{?type,count}");
    assert_eq!(route.defaults()["count"], json!("10"));
    assert_eq!(route.name(), "news");
}
