//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kinship_domain::{GroupSnapshot, Path, RelationshipResult, UserId};
use kinship_resolver::Rule;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the outcome of resolving `ego` to `alter`.
    pub fn format_resolution(
        &self,
        snapshot: &GroupSnapshot,
        ego: UserId,
        alter: UserId,
        result: &RelationshipResult,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "ego": ego.to_string(),
                    "alter": alter.to_string(),
                    "relationship": result.relationship,
                    "path": result.path.as_ref().map(Path::user_ids),
                    "shape": result.path.as_ref().map(|p| p.shape().to_string()),
                    "steps": result.steps,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(result.relationship.clone().unwrap_or_default()),
            OutputFormat::Table => {
                let (Some(label), Some(path)) = (&result.relationship, &result.path) else {
                    return Ok(self.warning(&format!(
                        "{} and {} are not connected",
                        snapshot.display_name(ego),
                        snapshot.display_name(alter)
                    )));
                };

                let mut builder = Builder::default();
                builder.push_record(["Ego", "Alter", "Relationship", "Steps"]);
                builder.push_record([
                    snapshot.display_name(ego),
                    snapshot.display_name(alter),
                    self.colorize(label, "cyan"),
                    result.steps.to_string(),
                ]);

                Ok(format!(
                    "{}\n{}",
                    render(builder),
                    self.format_path(snapshot, path)
                ))
            }
        }
    }

    /// Format members ranked by closeness to `ego`.
    pub fn format_closeness(
        &self,
        snapshot: &GroupSnapshot,
        ego: UserId,
        ranking: &[(UserId, RelationshipResult)],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = ranking
                    .iter()
                    .map(|(user, result)| {
                        serde_json::json!({
                            "user": user.to_string(),
                            "name": snapshot.user(*user).and_then(|u| u.name.clone()),
                            "relationship": result.relationship,
                            "steps": result.is_connected().then_some(result.steps),
                        })
                    })
                    .collect();
                let value = serde_json::json!({
                    "ego": ego.to_string(),
                    "members": rows,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => {
                let lines: Vec<String> = ranking
                    .iter()
                    .filter_map(|(user, result)| {
                        result
                            .relationship
                            .as_ref()
                            .map(|label| format!("{}\t{}", snapshot.display_name(*user), label))
                    })
                    .collect();
                Ok(lines.join("\n"))
            }
            OutputFormat::Table => {
                if ranking.is_empty() {
                    return Ok(self.colorize("No other members in the group.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Member", "Relationship", "Steps"]);
                for (rank, (user, result)) in ranking.iter().enumerate() {
                    let (label, steps) = match &result.relationship {
                        Some(label) => (label.clone(), result.steps.to_string()),
                        None => ("-".to_string(), "-".to_string()),
                    };
                    builder.push_record([
                        (rank + 1).to_string(),
                        snapshot.display_name(*user),
                        label,
                        steps,
                    ]);
                }

                Ok(format!(
                    "{}\n{}",
                    self.info(&format!("Closeness to {}", snapshot.display_name(ego))),
                    render(builder)
                ))
            }
        }
    }

    /// Format catalog rules.
    pub fn format_rules(&self, rules: &[&Rule]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = rules
                    .iter()
                    .map(|rule| {
                        serde_json::json!({
                            "shape": rule.shape.to_string(),
                            "label": rule.label,
                            "gendered_at_step": rule.gendered_at_step,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Quiet => {
                let lines: Vec<String> = rules
                    .iter()
                    .map(|rule| format!("{}\t{}", rule.shape, rule.label))
                    .collect();
                Ok(lines.join("\n"))
            }
            OutputFormat::Table => {
                if rules.is_empty() {
                    return Ok(self.colorize("No matching rules.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Shape", "Label", "Gendered At"]);
                for rule in rules {
                    builder.push_record([
                        rule.shape.to_string(),
                        rule.label.clone(),
                        rule.gendered_at_step
                            .map(|step| step.to_string())
                            .unwrap_or_else(|| "-".to_string()),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format a path as `Ada -[parent]-> Bo -[child]-> Cy`.
    pub fn format_path(&self, snapshot: &GroupSnapshot, path: &Path) -> String {
        let mut out = snapshot.display_name(path.ego());
        for step in &path.steps()[1..] {
            if let Some(via) = step.via {
                let arrow = format!(" -[{}]-> ", via);
                out.push_str(&self.colorize(&arrow, "magenta"));
            }
            out.push_str(&snapshot.display_name(step.user_id));
        }
        out
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinship_domain::{EdgeType, Gender, User};

    fn id(n: u128) -> UserId {
        UserId::from_value(n)
    }

    fn snapshot() -> GroupSnapshot {
        GroupSnapshot {
            users: vec![
                User::new(id(1), Some(Gender::Female)).with_name("Ada"),
                User::new(id(2), None).with_name("Bo"),
            ],
            ..Default::default()
        }
    }

    fn found() -> RelationshipResult {
        let path = Path::start(id(2)).extended(id(1), EdgeType::Parent);
        RelationshipResult::found("Mother", path)
    }

    #[test]
    fn test_resolution_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_resolution(&snapshot(), id(2), id(1), &found())
            .unwrap();
        assert!(output.contains("Relationship"));
        assert!(output.contains("Mother"));
        assert!(output.contains("Bo -[parent]-> Ada"));
    }

    #[test]
    fn test_resolution_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_resolution(&snapshot(), id(2), id(1), &found())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["relationship"], "Mother");
        assert_eq!(value["shape"], "parent");
        assert_eq!(value["steps"], 1);
    }

    #[test]
    fn test_disconnected_resolution() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_resolution(&snapshot(), id(1), id(2), &RelationshipResult::disconnected())
            .unwrap();
        assert!(output.contains("not connected"));

        let quiet = Formatter::new(OutputFormat::Quiet, false);
        let output = quiet
            .format_resolution(&snapshot(), id(1), id(2), &RelationshipResult::disconnected())
            .unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_closeness_quiet_skips_unreachable() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let ranking = vec![
            (id(1), found()),
            (id(3), RelationshipResult::disconnected()),
        ];
        let output = formatter.format_closeness(&snapshot(), id(2), &ranking).unwrap();
        assert_eq!(output, "Ada\tMother");
    }

    #[test]
    fn test_closeness_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let ranking = vec![(id(1), found())];
        let output = formatter.format_closeness(&snapshot(), id(2), &ranking).unwrap();
        assert!(output.contains("Closeness to Bo"));
        assert!(output.contains("Mother"));

        let empty = formatter.format_closeness(&snapshot(), id(2), &[]).unwrap();
        assert!(empty.contains("No other members"));
    }

    #[test]
    fn test_rules_formats() {
        let rule = Rule::new(&[EdgeType::Parent, EdgeType::Child], "Sibling", true);

        let quiet = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(quiet.format_rules(&[&rule]).unwrap(), "parent > child\tSibling");

        let table = Formatter::new(OutputFormat::Table, false);
        let output = table.format_rules(&[&rule]).unwrap();
        assert!(output.contains("Gendered At"));
        assert!(output.contains("Sibling"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.info("test"), "ℹ test");
        assert_eq!(formatter.warning("test"), "⚠ test");
    }
}
