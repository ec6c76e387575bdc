use super::types::CommandSpec;

const COMMAND_SPECS: [CommandSpec; 9] = [
    CommandSpec {
        id: "go",
        title: "Go to page",
        usage: "go <path>",
    },
    CommandSpec {
        id: "back",
        title: "History back",
        usage: "back",
    },
    CommandSpec {
        id: "forward",
        title: "History forward",
        usage: "forward",
    },
    CommandSpec {
        id: "scroll",
        title: "Scroll by rows",
        usage: "scroll <rows>",
    },
    CommandSpec {
        id: "section",
        title: "Jump to section",
        usage: "section <home|about|skills|projects|experience|contact>",
    },
    CommandSpec {
        id: "next-section",
        title: "Next section",
        usage: "next-section",
    },
    CommandSpec {
        id: "prev-section",
        title: "Previous section",
        usage: "prev-section",
    },
    CommandSpec {
        id: "contact",
        title: "Write a message",
        usage: "contact",
    },
    CommandSpec {
        id: "quit",
        title: "Quit",
        usage: "quit",
    },
];

pub fn all_command_specs() -> &'static [CommandSpec] {
    &COMMAND_SPECS
}

pub fn command_spec(id: &str) -> Option<&'static CommandSpec> {
    COMMAND_SPECS.iter().find(|spec| spec.id == id)
}
