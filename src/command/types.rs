use crate::route::Location;
use crate::scroll::SectionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Navigate { location: Location },
    Back,
    Forward,
    ScrollBy { rows: i32 },
    ScrollToSection { id: SectionId },
    NextSection,
    PrevSection,
    OpenPrompt,
    OpenContact,
    Cancel,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    Navigate,
    Back,
    Forward,
    ScrollBy,
    ScrollToSection,
    NextSection,
    PrevSection,
    OpenPrompt,
    OpenContact,
    Cancel,
    Quit,
    Input,
    SubmitPrompt,
    SubmitContact,
    ContactDelivery,
}

impl ActionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Navigate => "go",
            Self::Back => "back",
            Self::Forward => "forward",
            Self::ScrollBy => "scroll",
            Self::ScrollToSection => "section",
            Self::NextSection => "next-section",
            Self::PrevSection => "prev-section",
            Self::OpenPrompt => "prompt",
            Self::OpenContact => "contact",
            Self::Cancel => "cancel",
            Self::Quit => "quit",
            Self::Input => "input",
            Self::SubmitPrompt => "submit-prompt",
            Self::SubmitContact => "submit-contact",
            Self::ContactDelivery => "contact-delivery",
        }
    }
}

impl Command {
    pub fn action_id(&self) -> ActionId {
        match self {
            Self::Navigate { .. } => ActionId::Navigate,
            Self::Back => ActionId::Back,
            Self::Forward => ActionId::Forward,
            Self::ScrollBy { .. } => ActionId::ScrollBy,
            Self::ScrollToSection { .. } => ActionId::ScrollToSection,
            Self::NextSection => ActionId::NextSection,
            Self::PrevSection => ActionId::PrevSection,
            Self::OpenPrompt => ActionId::OpenPrompt,
            Self::OpenContact => ActionId::OpenContact,
            Self::Cancel => ActionId::Cancel,
            Self::Quit => ActionId::Quit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub usage: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Noop,
    QuitRequested,
}
