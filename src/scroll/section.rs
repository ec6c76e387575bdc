#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Experience,
        Self::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().trim_start_matches('#');
        Self::ALL.into_iter().find(|id| id.anchor() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveSection {
    #[default]
    None,
    Section(SectionId),
}

impl ActiveSection {
    pub fn id(self) -> Option<SectionId> {
        match self {
            Self::None => None,
            Self::Section(id) => Some(id),
        }
    }
}

/// Section position in rows relative to the viewport top. Negative once the
/// section start has scrolled past the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionGeometry {
    pub id: SectionId,
    pub top: i32,
}

/// Sections are given in document order. Walking them bottom-up, the first
/// one whose top edge is at or above `threshold` wins; if none has crossed
/// yet the first section is active.
pub fn compute_active_section(sections: &[SectionGeometry], threshold: i32) -> ActiveSection {
    let Some(first) = sections.first() else {
        return ActiveSection::None;
    };
    sections
        .iter()
        .rev()
        .find(|section| section.top <= threshold)
        .map_or(ActiveSection::Section(first.id), |section| {
            ActiveSection::Section(section.id)
        })
}
