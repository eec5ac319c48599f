use crate::actions::{Action, Outcome};
use crate::engine::LoadResult;
use crate::error::ApiError;
use crate::models::auth::Session;
use crate::models::MessageResponse;
use crate::sequencer::Ticket;

/// Results handed from background tasks back to the UI thread.
#[derive(Debug)]
pub enum Event {
    Loaded {
        ticket: Ticket,
        result: Result<LoadResult, ApiError>,
    },
    LoggedIn(Result<Session, ApiError>),
    Registered(Result<MessageResponse, ApiError>),
    /// `epoch` is the session generation the action was sent under.
    Dispatched {
        epoch: u64,
        action: Action,
        result: Result<Outcome, ApiError>,
    },
}
