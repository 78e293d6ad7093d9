mod mutation;
mod recording_sink;

pub use mutation::{DOCUMENT_ELEMENT_KEY, DomMutation, MutationBatch};
pub use recording_sink::RecordingSink;

use crate::error::MotionResult;

/// Contract implemented by whatever applies mutations to the page.
///
/// Sinks receive fully decided changes so page behavior stays isolated from
/// DOM access.
pub trait DomSink {
    fn apply(&mut self, mutation: &DomMutation) -> MotionResult<()>;

    fn apply_all<'a, I>(&mut self, mutations: I) -> MotionResult<()>
    where
        I: IntoIterator<Item = &'a DomMutation>,
        Self: Sized,
    {
        mutations
            .into_iter()
            .try_for_each(|mutation| self.apply(mutation))
    }
}
