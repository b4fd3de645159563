//! JSON output, one compact document per command.

use serde::Serialize;

/// Serializes `value` as compact JSON.
pub fn format_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokecache_core::catalog::Entity;

    #[test]
    fn test_entity_uses_wire_field_names() {
        let entity = Entity::new(25, "pikachu", "electric").with_vitality(35);

        let json = format_json(&entity).unwrap();

        assert_eq!(
            json,
            r#"{"id":25,"name":"pikachu","type":"electric","hp":35,"sprites":[]}"#
        );
    }

    #[test]
    fn test_page_is_a_json_array() {
        let page = vec![
            Entity::new(1, "bulbasaur", "grass"),
            Entity::new(2, "ivysaur", "grass"),
        ];

        let json = format_json(&page).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["name"], "ivysaur");
    }
}
