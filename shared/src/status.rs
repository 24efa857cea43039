/// Steps of the progress narrative shown while a comparison runs.
///
/// Ordering follows the narrative; the status channel refuses to move
/// backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    FetchingSourceA,
    FetchingSourceB,
    Comparing,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::FetchingSourceA, Stage::FetchingSourceB, Stage::Comparing];

    pub fn message(self) -> &'static str {
        match self {
            Stage::FetchingSourceA => "Fetching images from source A...",
            Stage::FetchingSourceB => "Fetching images from source B...",
            Stage::Comparing => "Comparing images...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading(Stage),
    Success(String),
    Error(String),
}

impl Status {
    pub fn is_loading(&self) -> bool {
        matches!(self, Status::Loading(_))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Success(_) | Status::Error(_))
    }

    /// Text for the status line, `None` while idle.
    pub fn message(&self) -> Option<&str> {
        match self {
            Status::Idle => None,
            Status::Loading(stage) => Some(stage.message()),
            Status::Success(message) | Status::Error(message) => Some(message),
        }
    }
}

/// What the orchestrator asks the status channel to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusUpdate {
    Started(Stage),
    Advanced(Stage),
    Succeeded(String),
    Failed(String),
    /// Validation failure; no request was made.
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("a request is already loading")]
    AlreadyLoading,
    #[error("no request is loading")]
    NotLoading,
    #[error("stage {to:?} does not follow {from:?}")]
    StageOutOfOrder { from: Stage, to: Stage },
}

#[derive(Debug, Clone, Default)]
pub struct StatusChannel {
    current: Status,
}

impl StatusChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Status {
        &self.current
    }

    pub fn begin(&mut self, stage: Stage) -> Result<(), TransitionError> {
        if self.current.is_loading() {
            return Err(TransitionError::AlreadyLoading);
        }
        self.current = Status::Loading(stage);
        Ok(())
    }

    pub fn advance(&mut self, stage: Stage) -> Result<(), TransitionError> {
        match self.current {
            Status::Loading(from) if stage > from => {
                self.current = Status::Loading(stage);
                Ok(())
            }
            Status::Loading(from) => Err(TransitionError::StageOutOfOrder { from, to: stage }),
            _ => Err(TransitionError::NotLoading),
        }
    }

    pub fn succeed(&mut self, message: impl Into<String>) -> Result<(), TransitionError> {
        self.settle(Status::Success(message.into()))
    }

    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), TransitionError> {
        self.settle(Status::Error(message.into()))
    }

    pub fn reject(&mut self, message: impl Into<String>) -> Result<(), TransitionError> {
        if self.current.is_loading() {
            return Err(TransitionError::AlreadyLoading);
        }
        self.current = Status::Error(message.into());
        Ok(())
    }

    pub fn apply(&mut self, update: StatusUpdate) -> Result<(), TransitionError> {
        let result = match update {
            StatusUpdate::Started(stage) => self.begin(stage),
            StatusUpdate::Advanced(stage) => self.advance(stage),
            StatusUpdate::Succeeded(message) => self.succeed(message),
            StatusUpdate::Failed(message) => self.fail(message),
            StatusUpdate::Rejected(message) => self.reject(message),
        };
        if let Err(e) = &result {
            log::debug!("status update refused: {}", e);
        }
        result
    }

    fn settle(&mut self, terminal: Status) -> Result<(), TransitionError> {
        if !self.current.is_loading() {
            return Err(TransitionError::NotLoading);
        }
        self.current = terminal;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle() {
        let mut channel = StatusChannel::new();
        assert_eq!(channel.current(), &Status::Idle);

        channel.begin(Stage::FetchingSourceA).unwrap();
        channel.advance(Stage::FetchingSourceB).unwrap();
        channel.advance(Stage::Comparing).unwrap();
        channel.succeed("done").unwrap();
        assert_eq!(channel.current(), &Status::Success("done".into()));

        channel.begin(Stage::FetchingSourceA).unwrap();
        channel.fail("boom").unwrap();
        assert_eq!(channel.current().message(), Some("boom"));
    }

    #[test]
    fn stage_after_terminal_is_refused() {
        let mut channel = StatusChannel::new();
        channel.begin(Stage::FetchingSourceA).unwrap();
        channel.succeed("done").unwrap();

        assert_eq!(
            channel.advance(Stage::Comparing),
            Err(TransitionError::NotLoading)
        );
        assert_eq!(channel.current(), &Status::Success("done".into()));
    }

    #[test]
    fn stages_only_move_forward() {
        let mut channel = StatusChannel::new();
        channel.begin(Stage::FetchingSourceB).unwrap();
        assert_eq!(
            channel.advance(Stage::FetchingSourceA),
            Err(TransitionError::StageOutOfOrder {
                from: Stage::FetchingSourceB,
                to: Stage::FetchingSourceA,
            })
        );
        assert_eq!(channel.current(), &Status::Loading(Stage::FetchingSourceB));
    }

    #[test]
    fn terminal_requires_loading() {
        let mut channel = StatusChannel::new();
        assert_eq!(channel.succeed("early"), Err(TransitionError::NotLoading));
        assert_eq!(channel.fail("early"), Err(TransitionError::NotLoading));
        assert_eq!(channel.current(), &Status::Idle);
    }

    #[test]
    fn rejection_never_interrupts_loading() {
        let mut channel = StatusChannel::new();
        channel.reject("missing id").unwrap();
        assert_eq!(channel.current(), &Status::Error("missing id".into()));

        channel.begin(Stage::FetchingSourceA).unwrap();
        assert_eq!(channel.reject("missing id"), Err(TransitionError::AlreadyLoading));
        assert_eq!(channel.begin(Stage::FetchingSourceA), Err(TransitionError::AlreadyLoading));
        assert!(channel.current().is_loading());
    }
}
