/// Commands understood by the browse screen.
#[derive(Debug)]
pub enum BrowseCommand {
    /// Resolve a new navigation parameter; `None` or an empty string means
    /// no category.
    Navigate(Option<String>),
    /// Resolve the current parameter again.
    Reload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseReply {
    /// A resolution started in the background under `generation`.
    Started { generation: u64 },
}

impl BrowseReply {
    pub fn generation(&self) -> u64 {
        match self {
            BrowseReply::Started { generation } => *generation,
        }
    }
}
