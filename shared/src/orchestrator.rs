//! Submit flow: one request at a time, with a scripted progress narrative
//! running beside it.
//!
//! The request and the narrative are two futures driven by a single
//! `select_biased!`. The request is always polled first, and once it settles
//! the narrative future is dropped, which cancels whatever timer it was
//! waiting on. Stage updates therefore can never follow a terminal status.

use std::cell::Cell;
use std::task::Poll;
use std::time::Duration;

use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::error::{RequestError, ValidationError};
use crate::panel::ConfigSnapshot;
use crate::render::{render, RenderedResults};
use crate::status::{Stage, StatusUpdate};
use crate::wire::{ComparisonRequest, ComparisonResponse};

/// Sends a comparison request across the network boundary.
pub trait ComparisonTransport {
    fn compare(
        &self,
        request: ComparisonRequest,
    ) -> LocalBoxFuture<'static, Result<ComparisonResponse, RequestError>>;
}

/// Timer source for the narrative.
pub trait Clock {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrativeTiming {
    pub stage_interval: Duration,
}

impl Default for NarrativeTiming {
    fn default() -> Self {
        Self {
            stage_interval: Duration::from_millis(1000),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another request was still in flight; nothing happened.
    Busy,
    Invalid(ValidationError),
    Rendered(RenderedResults),
    Failed(RequestError),
}

pub struct Orchestrator<T, C> {
    transport: T,
    clock: C,
    timing: NarrativeTiming,
    in_flight: Cell<bool>,
}

struct InFlightGuard<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

impl<T: ComparisonTransport, C: Clock> Orchestrator<T, C> {
    pub fn new(transport: T, clock: C, timing: NarrativeTiming) -> Self {
        Self {
            transport,
            clock,
            timing,
            in_flight: Cell::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    fn try_lock(&self) -> Option<InFlightGuard<'_>> {
        if self.in_flight.replace(true) {
            return None;
        }
        Some(InFlightGuard {
            flag: &self.in_flight,
        })
    }

    /// Runs one comparison end to end, reporting every status change through
    /// `emit`.
    pub async fn submit<F>(&self, snapshot: ConfigSnapshot, mut emit: F) -> SubmitOutcome
    where
        F: FnMut(StatusUpdate),
    {
        let Some(_guard) = self.try_lock() else {
            log::debug!("submit ignored, a comparison is already running");
            return SubmitOutcome::Busy;
        };

        let request = match snapshot.validate() {
            Ok(request) => request,
            Err(e) => {
                emit(StatusUpdate::Rejected(e.to_string()));
                return SubmitOutcome::Invalid(e);
            }
        };
        let method = request.method;

        log::info!(
            "comparing {} with {} using {} (threshold {:.2})",
            request.source_a_id,
            request.source_b_id,
            method,
            request.threshold
        );

        // The first poll dispatches the request; stage 1 is reported after it.
        let mut request = self.transport.compare(request).fuse();
        let first_poll = futures::poll!(&mut request);
        emit(StatusUpdate::Started(Stage::FetchingSourceA));

        let settled = match first_poll {
            Poll::Ready(result) => result,
            Poll::Pending => {
                let narrative = narrate(&self.clock, self.timing, &mut emit).fuse();
                futures::pin_mut!(narrative);

                loop {
                    futures::select_biased! {
                        result = request => break result,
                        () = narrative => log::debug!("narrative finished before the response"),
                    }
                }
            }
        };

        match settled {
            Ok(response) => {
                let rendered = render(&response, method);
                emit(StatusUpdate::Succeeded(completion_message(response.match_count)));
                SubmitOutcome::Rendered(rendered)
            }
            Err(e) => {
                log::error!("comparison failed: {}", e);
                emit(StatusUpdate::Failed(e.user_message()));
                SubmitOutcome::Failed(e)
            }
        }
    }
}

fn completion_message(match_count: u32) -> String {
    let noun = if match_count == 1 { "pair" } else { "pairs" };
    format!("Comparison complete: {} matching {}", match_count, noun)
}

async fn narrate<C, F>(clock: &C, timing: NarrativeTiming, emit: &mut F)
where
    C: Clock,
    F: FnMut(StatusUpdate),
{
    for stage in &Stage::ALL[1..] {
        clock.sleep(timing.stage_interval).await;
        emit(StatusUpdate::Advanced(*stage));
    }
}
