//! Navigation menus

use serde::{Deserialize, Serialize};

use super::model::Nodes;

/// A navigation menu as exported from the CMS
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WpMenu {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub menu_items: Nodes<MenuItem>,
}

/// A single menu entry with its children
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub child_items: Nodes<MenuItem>,
}

impl WpMenu {
    /// Entries on the third level (top item -> child -> grandchild), in
    /// document order. Only these are rendered as links in the sidebar.
    pub fn leaf_items(&self) -> Vec<&MenuItem> {
        self.menu_items
            .nodes
            .iter()
            .flat_map(|top| top.child_items.nodes.iter())
            .flat_map(|child| child.child_items.nodes.iter())
            .collect()
    }

    /// Whether this menu answers to `name`, either verbatim or by slug
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || slug::slugify(&self.name) == slug::slugify(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(label: &str, children: Vec<MenuItem>) -> MenuItem {
        MenuItem {
            id: label.to_string(),
            label: label.to_string(),
            url: format!("/{}/", slug::slugify(label)),
            child_items: Nodes { nodes: children },
        }
    }

    fn services_menu() -> WpMenu {
        WpMenu {
            name: "Services Menu".to_string(),
            menu_items: Nodes {
                nodes: vec![
                    item(
                        "Services",
                        vec![
                            item("Softscape", vec![item("Sod", vec![]), item("Trees", vec![])]),
                            item("Hardscape", vec![item("Patios", vec![])]),
                        ],
                    ),
                    item("About", vec![item("Team", vec![])]),
                ],
            },
        }
    }

    #[test]
    fn test_leaf_items_depth_three_only() {
        let menu = services_menu();
        let labels: Vec<_> = menu.leaf_items().iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Sod", "Trees", "Patios"]);
    }

    #[test]
    fn test_leaf_items_empty_menu() {
        assert!(WpMenu::default().leaf_items().is_empty());
    }

    #[test]
    fn test_matches_by_slug() {
        let menu = services_menu();
        assert!(menu.matches("Services Menu"));
        assert!(menu.matches("services-menu"));
        assert!(!menu.matches("footer"));
    }

    #[test]
    fn test_deserialize_nested_nodes() {
        let json = r#"{
            "name": "services",
            "menuItems": { "nodes": [
                { "id": "1", "label": "Services", "url": "/services/", "childItems": { "nodes": [
                    { "id": "2", "label": "Lawn", "url": "/lawn/", "childItems": { "nodes": [
                        { "id": "3", "label": "Aeration", "url": "/lawn/aeration/" }
                    ] } }
                ] } }
            ] }
        }"#;
        let menu: WpMenu = serde_json::from_str(json).unwrap();
        let leaves = menu.leaf_items();
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].url, "/lawn/aeration/");
    }
}
