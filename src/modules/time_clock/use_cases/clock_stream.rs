// Steps every time clock command handler shares.
//
// Responsibilities
// - Load an employee's clock stream and fold it into state.
// - Persist accepted events at the loaded version, project every stored event
//   above the projector's watermark, then dispatch intents. Projection failures
//   surface after intents went out, because the events are already stored at
//   that point. The next command on the stream replays what was missed.

use crate::modules::scheduling::core::policy::OrgPolicy;
use crate::modules::time_clock::adapters::outbound::notification_dispatch::dispatch_intents;
use crate::modules::time_clock::core::events::{TimeClockEvent, time_clock_stream_id};
use crate::modules::time_clock::core::evolve::evolve;
use crate::modules::time_clock::core::intents::TimeClockIntent;
use crate::modules::time_clock::core::state::TimeClockState;
use crate::modules::time_clock::ports::TimeClockPorts;
use crate::modules::time_clock::use_cases::application_error::ApplicationError;

pub struct LoadedClock {
    pub stream_id: String,
    pub state: TimeClockState,
    pub version: i64,
    pub events: Vec<TimeClockEvent>,
}

pub async fn load_policy(
    ports: &TimeClockPorts,
    org_id: &str,
) -> Result<OrgPolicy, ApplicationError> {
    ports
        .organizations
        .find_policy(org_id)
        .await
        .map_err(ApplicationError::unexpected)?
        .ok_or_else(|| ApplicationError::NotFound("Organization not found".to_string()))
}

pub async fn load_clock(
    ports: &TimeClockPorts,
    org_id: &str,
    employee_id: &str,
) -> Result<LoadedClock, ApplicationError> {
    let stream_id = time_clock_stream_id(org_id, employee_id);
    let stream = ports
        .event_store
        .load(&stream_id)
        .await
        .map_err(ApplicationError::VersionConflict)?;

    let state = stream
        .events
        .iter()
        .cloned()
        .fold(TimeClockState::default(), evolve);

    Ok(LoadedClock {
        stream_id,
        state,
        version: stream.version,
        events: stream.events,
    })
}

/// Appends `events` and returns the state they lead to.
pub async fn commit(
    ports: &TimeClockPorts,
    loaded: LoadedClock,
    events: Vec<TimeClockEvent>,
    intents: Vec<TimeClockIntent>,
) -> Result<TimeClockState, ApplicationError> {
    ports
        .event_store
        .append(&loaded.stream_id, loaded.version, &events)
        .await
        .map_err(ApplicationError::VersionConflict)?;

    let mut stored = loaded.events;
    stored.extend(events.iter().cloned());
    let projected = ports.projector.catch_up(&loaded.stream_id, &stored).await;
    if let Err(error) = &projected {
        tracing::error!(stream_id = %loaded.stream_id, %error, "projection failed");
    }

    dispatch_intents(&*ports.directory, &*ports.notifications, intents).await;

    projected.map_err(|error| ApplicationError::Projection(error.to_string()))?;
    Ok(events.into_iter().fold(loaded.state, evolve))
}
