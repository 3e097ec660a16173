// Sequencer error types

/// Result type for sequencer operations
pub type SequencerResult<T> = Result<T, SequencerError>;

/// Errors raised by the sequencer control surface
///
/// Once a sequencer is constructed, stepping and navigation are total and
/// never fail. Errors only come from handing over an unusable event table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequencerError {
    #[error("Event table is empty")]
    EmptyTable,

    #[error("Event table cannot be replaced while the sequencer is active")]
    SequencerActive,

    #[error("Event table cannot be replaced while the sequence is done; reset it first")]
    SequencerDone,
}
