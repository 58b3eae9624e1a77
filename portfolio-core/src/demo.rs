//! Fixed sample dataset shown when the backend is unreachable.

use crate::types::{ExperienceEntry, Project, Skill, TechTag};

fn demo_project(id: u64, title: &str, description: &str, tech: [&str; 3]) -> Project {
    Project {
        id,
        title: title.into(),
        description: description.into(),
        tech: tech.into_iter().map(TechTag::new).collect(),
        repo_url: Some("#".into()),
        live_url: Some("#".into()),
        ..Default::default()
    }
}

/// Three sample projects.
pub fn projects() -> Vec<Project> {
    vec![
        demo_project(
            1,
            "Nexus E-Commerce",
            "Headless commerce solution with high-performance React frontend.",
            ["Next.js", "GraphQL", "AWS"],
        ),
        demo_project(
            2,
            "Sentient AI",
            "Natural Language Processing dashboard for sentiment analysis.",
            ["Python", "FastAPI", "PyTorch"],
        ),
        demo_project(
            3,
            "Crypto Watch",
            "Real-time cryptocurrency tracker with websocket integration.",
            ["Vue", "Firebase", "D3.js"],
        ),
    ]
}

/// Six sample skills.
pub fn skills() -> Vec<Skill> {
    [
        ("Python", 95),
        ("JavaScript", 90),
        ("React", 88),
        ("Django", 92),
        ("AWS", 75),
        ("Docker", 80),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, proficiency), id)| Skill {
        id,
        name: name.into(),
        proficiency,
        ..Default::default()
    })
    .collect()
}

/// Two sample timeline entries, the first one ongoing.
pub fn experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            id: 1,
            title: "Senior Developer".into(),
            company: "TechCorp".into(),
            start_date: "2022".into(),
            end_date: None,
            description: "Leading backend architecture.".into(),
            order: None,
        },
        ExperienceEntry {
            id: 2,
            title: "Full Stack Dev".into(),
            company: "StartupX".into(),
            start_date: "2020".into(),
            end_date: Some("2022".into()),
            description: "Built MVP from scratch.".into(),
            order: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_set_sizes() {
        assert_eq!(projects().len(), 3);
        assert_eq!(skills().len(), 6);
        assert_eq!(experience().len(), 2);
    }

    #[test]
    fn demo_ids_are_sequential() {
        let ids: Vec<u64> = skills().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn demo_is_deterministic() {
        assert_eq!(projects(), projects());
        assert_eq!(experience()[0].period(), "2022 — Present");
    }
}
