use crate::scroll::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionContent {
    pub id: SectionId,
    pub label: &'static str,
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub const HOME_SECTIONS: &[SectionContent] = &[
    SectionContent {
        id: SectionId::Home,
        label: "00",
        heading: "Hamza Ben Marouen",
        paragraphs: &[
            "Full stack developer building web platforms end to end.",
            "Based in Sfax, Tunisia. Available for freelance and full-time work.",
        ],
    },
    SectionContent {
        id: SectionId::About,
        label: "01",
        heading: "About",
        paragraphs: &[
            "Turning ideas into products. I care about clean interfaces, \
             predictable backends, and shipping.",
            "3+ internships completed. 10+ projects built. Graduated 2024.",
        ],
    },
    SectionContent {
        id: SectionId::Skills,
        label: "02",
        heading: "Skills",
        paragraphs: &[
            "Frontend: React, JavaScript, Tailwind CSS, Flutter, HTML/CSS.",
            "Backend: Node.js, Laravel, Symfony, Express.js, .NET.",
            "Database: MongoDB, MySQL, PostgreSQL, Oracle DB, SQL.",
            "Tools: Git/GitHub, Figma, VS Code, Android Studio, Odoo.",
        ],
    },
    SectionContent {
        id: SectionId::Projects,
        label: "03",
        heading: "Selected Work",
        paragraphs: &[
            "Mon Cabinet - medical office management (2024).",
            "HR Platform - human resources system (2023).",
            "Service APV - after-sales service management (2024).",
            "Portfolio - this site (2024). Open /work for details.",
        ],
    },
    SectionContent {
        id: SectionId::Experience,
        label: "04",
        heading: "Experience",
        paragraphs: &[
            "End-of-Studies Internship, IT GATE (Feb 2024 - May 2024). \
             Built the Mon Cabinet MERN application.",
            "Improvement Internship, Ciments Jbel Oust (January 2023). \
             Built an HR management platform with Laravel.",
            "Initiation Internship, Institut National de la Statistique (January 2022).",
            "Master - Computer Systems & Networks (DSIR), ISET Sfax, 2024 - present.",
        ],
    },
    SectionContent {
        id: SectionId::Contact,
        label: "05",
        heading: "Contact",
        paragraphs: &[
            "Have a project in mind? Press c to write a message.",
            "hamzabenmarwen@gmail.com | github.com/hamzabenmarwen",
        ],
    },
];

pub fn about_page_body() -> &'static [&'static str] {
    &[
        "I am a full stack developer who enjoys building complete products, \
         from database schema to the last pixel of the interface.",
        "Full Stack Developer - IT GATE (2024).",
        "Web Developer - Ciments Jbel Oust (2023).",
        "Junior Developer - Institut National de la Statistique (2022).",
    ]
}
