//! Skill name to icon mapping.

/// Icon shown next to a skill bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillIcon {
    /// Frontend / JavaScript
    Code,
    /// Python and friends
    Terminal,
    /// Cloud platforms
    Cloud,
    /// Containers
    Package,
    /// Databases
    Database,
    /// Markup and styling
    Layout,
    /// Anything else
    Layers,
}

/// Lower-cased substrings, first match wins.
const SKILL_ICONS: &[(&[&str], SkillIcon)] = &[
    (&["react", "js"], SkillIcon::Code),
    (&["python", "django"], SkillIcon::Terminal),
    (&["aws", "cloud"], SkillIcon::Cloud),
    (&["docker", "container"], SkillIcon::Package),
    (&["sql", "data"], SkillIcon::Database),
    (&["html", "css"], SkillIcon::Layout),
];

/// Pick the icon for a skill name.
pub fn skill_icon(name: &str) -> SkillIcon {
    let lower = name.to_lowercase();
    SKILL_ICONS
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lower.contains(n)))
        .map(|(_, icon)| *icon)
        .unwrap_or(SkillIcon::Layers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_skills() {
        assert_eq!(skill_icon("React"), SkillIcon::Code);
        assert_eq!(skill_icon("Node.js"), SkillIcon::Code);
        assert_eq!(skill_icon("Next.js"), SkillIcon::Code);
        assert_eq!(skill_icon("Django"), SkillIcon::Terminal);
        assert_eq!(skill_icon("AWS"), SkillIcon::Cloud);
        assert_eq!(skill_icon("Docker"), SkillIcon::Package);
        assert_eq!(skill_icon("PostgreSQL"), SkillIcon::Database);
        assert_eq!(skill_icon("CSS Grid"), SkillIcon::Layout);
    }

    #[test]
    fn first_match_wins() {
        // "json data" matches both the js and the data rule
        assert_eq!(skill_icon("JSON Data"), SkillIcon::Code);
        assert_eq!(skill_icon("Cloud SQL"), SkillIcon::Cloud);
    }

    #[test]
    fn match_is_by_substring_not_alias() {
        // "javascript" has no "js" substring
        assert_eq!(skill_icon("JavaScript"), SkillIcon::Layers);
        assert_eq!(skill_icon("TypeScript"), SkillIcon::Layers);
    }

    #[test]
    fn unknown_falls_back_to_layers() {
        assert_eq!(skill_icon("Rust"), SkillIcon::Layers);
        assert_eq!(skill_icon(""), SkillIcon::Layers);
    }
}
