//! Pretty output formatting.

use pokecache_core::catalog::Entity;

use crate::demo::DemoReport;

/// Format a pokemon for display.
pub fn format_entity(entity: &Entity) -> String {
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  HP: {}",
        entity.name, entity.category, entity.id, entity.vitality
    );
    for image in &entity.images {
        output.push_str(&format!("\n  Sprite: {}", image));
    }
    output
}

/// Format a page of pokemon for display.
pub fn format_entities(entities: &[Entity]) -> String {
    if entities.is_empty() {
        return "No pokemon found.".to_string();
    }
    let mut output = format!("POKEMON ({})\n", entities.len());
    output.push_str(&"-".repeat(40));
    for entity in entities {
        output.push_str(&format!("\n{}", format_entity(entity)));
        output.push('\n');
    }
    output
}

/// Format a demo report as a table of steps.
pub fn format_demo(report: &DemoReport) -> String {
    let width = report
        .steps
        .iter()
        .map(|step| step.action.len())
        .max()
        .unwrap_or(0);

    let mut output = format!("DEMO ({} steps)\n", report.steps.len());
    output.push_str(&"-".repeat(40));
    for step in &report.steps {
        output.push_str(&format!(
            "\n{:<width$}  {:>2} upstream  {}",
            step.action,
            step.upstream_calls,
            step.outcome,
            width = width
        ));
    }
    output.push_str(&format!(
        "\n{}\nTotal upstream calls: {}",
        "-".repeat(40),
        report.total_upstream_calls
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::DemoStep;

    #[test]
    fn test_format_entity_lists_sprites() {
        let entity = Entity::new(1, "bulbasaur", "grass")
            .with_vitality(45)
            .with_images(["front.png", "back.png"]);

        assert_eq!(
            format_entity(&entity),
            "bulbasaur [grass]\n  ID: 1\n  HP: 45\n  Sprite: front.png\n  Sprite: back.png"
        );
    }

    #[test]
    fn test_format_empty_page() {
        assert_eq!(format_entities(&[]), "No pokemon found.");
    }

    #[test]
    fn test_format_page_has_count_header() {
        let entities = vec![
            Entity::new(1, "bulbasaur", "grass"),
            Entity::new(2, "ivysaur", "grass"),
        ];

        let output = format_entities(&entities);

        assert!(output.starts_with("POKEMON (2)\n"));
        assert!(output.contains("ivysaur [grass]"));
    }

    #[test]
    fn test_format_demo_aligns_actions() {
        let report = DemoReport {
            steps: vec![
                DemoStep {
                    action: "get 1".to_string(),
                    outcome: "bulbasaur".to_string(),
                    upstream_calls: 1,
                },
                DemoStep {
                    action: "get 1 again".to_string(),
                    outcome: "bulbasaur".to_string(),
                    upstream_calls: 0,
                },
            ],
            total_upstream_calls: 1,
        };

        let output = format_demo(&report);

        assert!(output.contains("\nget 1         1 upstream  bulbasaur"));
        assert!(output.contains("\nget 1 again   0 upstream  bulbasaur"));
        assert!(output.ends_with("Total upstream calls: 1"));
    }
}
