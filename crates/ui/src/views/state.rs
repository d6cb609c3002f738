#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    LevelNotFound,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::LevelNotFound => "That level does not exist. Pick one from the list.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}
