//! Static portfolio project records.
//!
//! Everything here is compiled in; the overlay looks records up by index
//! into [`PROJECTS`], so indices double as stable project ids.

use serde::Serialize;

/// Pictogram shown on a project card. Rendered as an inline SVG by the
/// project section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectIcon {
    Rocket,
    HeartPulse,
    Messages,
    Gamepad,
    GraduationCap,
    Storefront,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub icon: ProjectIcon,
    pub title: &'static str,
    pub short_desc: &'static str,
    pub details: &'static str,
    pub stack: &'static [&'static str],
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
}

pub static PROJECTS: &[Project] = &[
    Project {
        icon: ProjectIcon::Rocket,
        title: "Offline Smart Task Manager",
        short_desc: "Cross-platform productivity app with offline support, \
                     AI-based task categorization, and wearable integration.",
        details: "An offline-first task manager for mobile and wearable \
                  devices. Tasks are categorized and prioritized on-device \
                  and sync across devices when a connection returns. I built \
                  the mobile and wearable interfaces, wired up the \
                  classification models, and implemented local storage with \
                  background sync so nothing is lost without a network.",
        stack: &["Kotlin", "Room", "WorkManager", "Python", "scikit-learn"],
        github: None,
        demo: None,
    },
    Project {
        icon: ProjectIcon::HeartPulse,
        title: "Healthcare Management System",
        short_desc: "Platform for managing clients, caregivers, compliance, \
                     and scheduling in a role-based environment.",
        details: "A healthcare operations platform covering client and \
                  caregiver records, scheduling with follow-up tracking, \
                  compliance alerts, and secure messaging. I built the \
                  frontend, the REST API behind it, and the role-based \
                  access layer, and integrated real-time status tracking \
                  for active care assignments.",
        stack: &["React", "Django REST", "Tailwind CSS", "SQL"],
        github: Some("https://github.com/yourusername/healthcare-management"),
        demo: Some("https://your-demo-link.com"),
    },
    Project {
        icon: ProjectIcon::Messages,
        title: "UChat Global",
        short_desc: "Multi-channel platform for bulk messaging across SMS, \
                     email, WhatsApp, MMS, and fax.",
        details: "A unified messaging dashboard that sends campaigns across \
                  five channels in text, PDF, and image formats, with cost \
                  tracking and real-time delivery reporting. I developed the \
                  responsive frontend, the API layer, the message-tracking \
                  schema, and the analytics views.",
        stack: &["React", "Django REST", "PostgreSQL", "Chart.js"],
        github: Some("https://github.com/yourusername/uchat-global"),
        demo: Some("https://your-demo-link.com"),
    },
    Project {
        icon: ProjectIcon::Gamepad,
        title: "Gaming Café Platform",
        short_desc: "Full-stack platform for gaming cafés with slot booking, \
                     loyalty points, and multi-outlet control.",
        details: "A booking and management system for gaming cafés: \
                  real-time PC and console slot booking, a loyalty program, \
                  and an admin panel for pricing and multi-outlet reporting. \
                  I built the booking flows and animations, collaborated on \
                  the backend APIs, and optimized queries for multi-outlet \
                  scale.",
        stack: &["Next.js", "Node.js", "Express", "Knex", "PostgreSQL"],
        github: None,
        demo: None,
    },
    Project {
        icon: ProjectIcon::GraduationCap,
        title: "Param Academy",
        short_desc: "Education management platform for instructors, \
                     classrooms, and student career preparation.",
        details: "An education management system with instructor dashboards, \
                  classroom and module organization, attendance and fee \
                  tracking, and career tools like mock interviews and resume \
                  support. I designed the full-stack architecture, built the \
                  role-based dashboards, and developed the classroom and fee \
                  management APIs.",
        stack: &["React", "Node.js", "MongoDB", "Tailwind CSS"],
        github: None,
        demo: None,
    },
    Project {
        icon: ProjectIcon::Storefront,
        title: "Builder Lobby",
        short_desc: "Marketplace where entrepreneurs list, bid on, and \
                     acquire startups with secure messaging and moderation.",
        details: "A startup marketplace with transparent bidding, \
                  buyer-seller messaging, verified profiles, and admin \
                  moderation of listings. I developed the platform end to \
                  end: the bidding system with offer history and \
                  notifications, the private chat, and the role-based \
                  dashboards for buyers, sellers, and admins.",
        stack: &["React", "Node.js", "Express", "Knex", "PostgreSQL"],
        github: None,
        demo: None,
    },
];

pub fn all() -> &'static [Project] {
    PROJECTS
}

pub fn get(id: usize) -> Option<&'static Project> {
    PROJECTS.get(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn titles_are_unique() {
        let titles: HashSet<_> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(titles.len(), PROJECTS.len());
    }

    #[test]
    fn every_record_is_presentable() {
        for p in PROJECTS {
            assert!(!p.title.is_empty());
            assert!(!p.short_desc.is_empty());
            assert!(!p.details.is_empty());
            assert!(!p.stack.is_empty(), "{} has no stack", p.title);
        }
    }

    #[test]
    fn lookup_by_id_matches_slice_order() {
        assert_eq!(get(0).map(|p| p.title), Some(PROJECTS[0].title));
        assert!(get(PROJECTS.len()).is_none());
    }
}
