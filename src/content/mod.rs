//! Static portfolio content. Pages are rendered from these tables; the
//! project catalog also backs the page-name resolver.

mod sections;

pub use sections::{HOME_SECTIONS, SectionContent, about_page_body};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub year: &'static str,
    pub client: &'static str,
    pub role: &'static str,
    pub summary: &'static str,
    pub technologies: &'static [&'static str],
}

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        id: "mon-cabinet",
        title: "Mon Cabinet",
        category: "Web Application",
        year: "2024",
        client: "IT GATE",
        role: "Full Stack Developer",
        summary: "A platform for managing medical offices with patient scheduling, \
                  role-based access, and real-time notifications.",
        technologies: &["React", "Node.js", "MongoDB", "Express", "JWT", "Socket.io"],
    },
    ProjectEntry {
        id: "hr-platform",
        title: "HR Platform",
        category: "Enterprise System",
        year: "2023",
        client: "Ciments Jbel Oust",
        role: "Web Developer",
        summary: "HR solution with employee management, authentication, attendance \
                  tracking, and CRUD operations.",
        technologies: &["Laravel", "PHP", "MySQL", "Bootstrap", "JavaScript", "jQuery"],
    },
    ProjectEntry {
        id: "service-apv",
        title: "Service APV",
        category: "Management System",
        year: "2024",
        client: "Enterprise Client",
        role: "Full Stack Developer",
        summary: "After-sales service management with real-time tracking, a reporting \
                  dashboard, and customer management.",
        technologies: &[".NET", "React", "SQL Server", "Azure", "SignalR"],
    },
    ProjectEntry {
        id: "portfolio",
        title: "Portfolio",
        category: "Personal Website",
        year: "2024",
        client: "Personal Project",
        role: "Designer & Developer",
        summary: "Portfolio with smooth transitions, scroll-driven navigation, and a \
                  contact form.",
        technologies: &["Rust", "ratatui", "tokio", "crossterm"],
    },
];

pub fn project_by_id(id: &str) -> Option<&'static ProjectEntry> {
    PROJECTS.iter().find(|project| project.id == id)
}
