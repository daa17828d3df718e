/// Crawl phase definitions for tracking a crawl's lifecycle
///
/// A crawl starts `Running` and ends `Done`; there is no way back.
use std::fmt;

/// Represents the current phase of a crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlPhase {
    /// Waves are still being dispatched
    Running,

    /// Frontier exhausted or page budget reached
    Done,
}

impl CrawlPhase {
    /// Returns true if this is the terminal phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns true if a transition from this phase to `next` is allowed
    ///
    /// Valid transitions:
    /// - Running → Running (another wave)
    /// - Running → Done
    pub fn can_transition_to(&self, next: CrawlPhase) -> bool {
        matches!((self, next), (Self::Running, Self::Running | Self::Done))
    }

    /// Performs a transition, returning the new phase or the rejected pair
    pub fn transition(self, next: CrawlPhase) -> Result<CrawlPhase, crate::SurveyError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(crate::SurveyError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }

    /// Returns a short lowercase label for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for CrawlPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
