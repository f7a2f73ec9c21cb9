use ecolearn_types::TransportError;

/// Failure of a submission attempt.
///
/// Both variants leave the answer map and the cursor untouched, so the
/// user can correct or retry without re-answering.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Not every question has an answer yet; nothing was sent.
    #[error("{answered} of {expected} questions answered")]
    Incomplete { answered: usize, expected: usize },

    /// The request was sent but no confirmed success came back.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
