/// Verdict returned by validation and before-hooks.
///
/// `Abort` stops the operation before anything is written; the mapper then
/// resolves with [`Outcome::Aborted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Decision {
    Proceed,
    Abort,
}

/// How a create, update, save or delete call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// Every step ran and the connector was called.
    Done,

    /// Validation or a before-hook declined. Nothing was written.
    Aborted,
}

impl Decision {
    pub fn is_proceed(self) -> bool {
        matches!(self, Self::Proceed)
    }

    pub fn is_abort(self) -> bool {
        matches!(self, Self::Abort)
    }
}

impl From<bool> for Decision {
    fn from(proceed: bool) -> Self {
        if proceed {
            Self::Proceed
        } else {
            Self::Abort
        }
    }
}

impl Outcome {
    pub fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }

    pub fn is_aborted(self) -> bool {
        matches!(self, Self::Aborted)
    }
}
