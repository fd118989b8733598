#[derive(Debug, PartialEq, Eq)]
pub(super) enum Command {
    Start,
    Move { source: String, target: String },
    Status,
    End,
    Unknown(String),
}

impl Command {
    pub(super) fn parse(input: &str) -> Self {
        let parts: Vec<&str> = input.split_whitespace().collect();

        match parts.as_slice() {
            ["start"] => Self::Start,
            ["move", source, target] => Self::Move {
                source: (*source).to_string(),
                target: (*target).to_string(),
            },
            ["status"] => Self::Status,
            ["end"] => Self::End,
            _ => Self::Unknown(input.trim().to_string()),
        }
    }
}
