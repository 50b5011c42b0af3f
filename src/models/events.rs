use crate::models::activity::ActivityCollection;
use crate::models::signup::MutationOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Signup,
    Unregister,
}

/// Completion notices sent from runtime tasks back to the UI thread.
#[derive(Debug)]
pub enum Event {
    ActivitiesLoaded {
        generation: u64,
        result: Result<ActivityCollection, String>,
    },
    MutationFinished {
        kind: Mutation,
        result: Result<MutationOutcome, String>,
    },
    HideMessage { seq: u64 },
}
