use serde::{Serialize, Deserialize};

/// Display stack shown in a menu slot
///
/// Icons are plain data: a material name, a display name and optional
/// lore lines. The host maps the material to whatever its item system
/// uses; this crate never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemIcon {
    /// Material identifier, e.g. "arrow" or "gray_stained_glass_pane"
    pub material: String,
    /// Name rendered on the stack
    pub display_name: String,
    /// Extra text lines under the name
    #[serde(default)]
    pub lore: Vec<String>,
}

impl ItemIcon {
    /// Create an icon with no lore
    pub fn new(material: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            display_name: display_name.into(),
            lore: Vec::new(),
        }
    }

    /// Append one lore line, returning the icon for chaining
    pub fn with_lore(mut self, line: impl Into<String>) -> Self {
        self.lore.push(line.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_icon_has_no_lore() {
        let icon = ItemIcon::new("arrow", "Back");
        assert_eq!(icon.material, "arrow");
        assert_eq!(icon.display_name, "Back");
        assert!(icon.lore.is_empty());
    }

    #[test]
    fn with_lore_appends_in_order() {
        let icon = ItemIcon::new("book", "Guide")
            .with_lore("First line")
            .with_lore("Second line");
        assert_eq!(icon.lore, vec!["First line", "Second line"]);
    }

    #[test]
    fn lore_defaults_to_empty_when_absent() {
        let icon: ItemIcon = toml::from_str(
            r#"
            material = "arrow"
            display_name = "Back"
            "#,
        )
        .unwrap();
        assert!(icon.lore.is_empty());
    }
}
