//! Mission configuration loader.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, bail};
use planner_core::{Agent, ResourceKind, Targets};

use crate::formats::MissionFile;
use crate::loaders::{LoadResult, read_file};

/// Typed mission configuration: the agent roster and the resolved targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissionConfig {
    pub agents: Vec<Agent>,
    pub targets: Targets,
}

/// Loader for mission configuration from TOML files.
pub struct MissionLoader;

impl MissionLoader {
    /// Load agents and targets from a mission TOML file.
    ///
    /// Target names are resolved through the optional `[aliases]` table
    /// (demand-side name → survey-side name); names without an alias pass
    /// through unchanged. Two targets resolving to the same survey resource
    /// is a load error, as is any count outside the `u32` range.
    pub fn load(path: &Path) -> LoadResult<MissionConfig> {
        let content = read_file(path)?;
        let file: MissionFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse mission TOML {}", path.display()))?;
        Self::convert(file)
    }

    fn convert(file: MissionFile) -> LoadResult<MissionConfig> {
        let mut agents = Vec::with_capacity(file.agents.len());
        for spec in file.agents {
            let Ok(max_visits) = u32::try_from(spec.max_visits) else {
                bail!(
                    "agent {} has max_visits {} outside the supported range",
                    spec.id,
                    spec.max_visits
                );
            };
            let mut agent = Agent::new(spec.id.as_str(), max_visits);
            for site in spec.banned {
                agent = agent.ban(site.as_str());
            }
            agents.push(agent);
        }

        let mut resolved: BTreeMap<ResourceKind, u32> = BTreeMap::new();
        for (name, units) in file.targets {
            let Ok(units) = u32::try_from(units) else {
                bail!("target {} has unit count {} outside the supported range", name, units);
            };
            let survey_name = file.aliases.get(&name).cloned().unwrap_or_else(|| name.clone());
            let resource = ResourceKind::new(survey_name);
            if resolved.insert(resource.clone(), units).is_some() {
                bail!(
                    "targets {:?} collide: two entries resolve to survey resource {}",
                    name,
                    resource
                );
            }
        }

        Ok(MissionConfig {
            agents,
            targets: Targets(resolved),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MISSION: &str = r#"
        [[agent]]
        id = "Tyler Typical"
        max_visits = 5

        [[agent]]
        id = "Haulen Datore"
        max_visits = 1
        banned = ["J105433 I", "J105433 V"]

        [targets]
        "Water" = 5
        "Bacteria" = 3
        "Base Metals" = 4

        [aliases]
        "Water" = "Aqueous Liquids"
        "Bacteria" = "Microorganisms"
    "#;

    fn parse(content: &str) -> LoadResult<MissionConfig> {
        let file: MissionFile = toml::from_str(content)?;
        MissionLoader::convert(file)
    }

    #[test]
    fn loads_roster_and_resolves_aliases() {
        let config = parse(MISSION).unwrap();
        assert_eq!(config.agents.len(), 2);
        assert_eq!(config.agents[1].max_visits, 1);
        assert!(config.agents[1].is_banned(&"J105433 V".into()));

        // Aliased names land under their survey names; unaliased pass through.
        assert_eq!(config.targets.required(&"Aqueous Liquids".into()), 5);
        assert_eq!(config.targets.required(&"Microorganisms".into()), 3);
        assert_eq!(config.targets.required(&"Base Metals".into()), 4);
        assert_eq!(config.targets.required(&"Water".into()), 0);
    }

    #[test]
    fn rejects_negative_visit_budget() {
        let err = parse(
            r#"
            [[agent]]
            id = "A"
            max_visits = -2
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("max_visits -2 outside the supported range"));
    }

    #[test]
    fn rejects_visit_budget_wider_than_u32() {
        // 2^32: would wrap to 0 under a plain cast, silently grounding the agent.
        let err = parse(
            r#"
            [[agent]]
            id = "A"
            max_visits = 4294967296
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("outside the supported range"));
    }

    #[test]
    fn rejects_negative_target_units() {
        let err = parse(
            r#"
            [targets]
            "Water" = -1
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unit count -1 outside the supported range"));
    }

    #[test]
    fn rejects_target_units_wider_than_u32() {
        let err = parse(
            r#"
            [targets]
            "Water" = 4294967296
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("outside the supported range"));
    }

    #[test]
    fn rejects_colliding_alias_resolution() {
        let err = parse(
            r#"
            [targets]
            "Water" = 2
            "Aqueous Liquids" = 3

            [aliases]
            "Water" = "Aqueous Liquids"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("collide"));
    }

    #[test]
    fn loads_from_a_file_on_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MISSION.as_bytes()).unwrap();

        let config = MissionLoader::load(file.path()).unwrap();
        assert_eq!(config.agents[0].id, "Tyler Typical".into());
    }
}
