//! Platform-neutral core of the hotel photo match client.
//!
//! Nothing in this crate touches the DOM or a socket; the frontend plugs a
//! browser transport and clock into [`Orchestrator`] and draws the view data
//! produced by [`render`].

pub mod error;
pub mod evidence;
pub mod method;
pub mod orchestrator;
pub mod panel;
pub mod render;
pub mod status;
pub mod wire;

pub use error::{GENERIC_FAILURE, RequestError, ValidationError};
pub use evidence::{Decision, MatchEvidence};
pub use method::{MatchMethod, MethodFamily, MethodHint};
pub use orchestrator::{Clock, ComparisonTransport, NarrativeTiming, Orchestrator, SubmitOutcome};
pub use panel::{ConfigSnapshot, ConfigurationPanel};
pub use render::{
    render, CardDetail, ImageCell, MatchCard, RenderedResults, ResultsBody, SummaryView,
    NO_MATCHES_GUIDANCE,
};
pub use status::{Stage, Status, StatusChannel, StatusUpdate, TransitionError};
pub use wire::{
    ComparisonRequest, ComparisonResponse, ErrorBody, MatchRecord, COMPARE_PATH, IMAGES_PATH,
};
