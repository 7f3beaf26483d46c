use crate::registry::Registry;

/// Renders the registered providers, one per line or as a JSON array.
pub fn render(registry: &Registry, json: bool) -> String {
    let providers = registry.list();
    if json {
        return serde_json::to_string_pretty(&providers).unwrap_or_else(|_| "[]".to_string());
    }

    let width = providers.iter().map(|p| p.name.len()).max().unwrap_or(0);
    providers
        .iter()
        .map(|p| format!("{:width$}  {}", p.name, p.description))
        .collect::<Vec<_>>()
        .join("\n")
}
