use crate::api::client_from_config;
use crate::api::endpoints::{Punch, PunchRequest, describe_response};
use crate::cli::Session;
use crate::cli::parser::{ClockAction, Commands};
use crate::errors::{AppError, AppResult};
use crate::models::location::{LocationProvider, NoLocation, StaticLocation};
use crate::ui::messages::{info, success};
use crate::utils::date::fmt_instant;
use chrono::Utc;

/// `clock in|out`: send a punch, optionally with a position.
pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::Clock {
        action,
        note,
        lat,
        lng,
        place,
    } = cmd
    {
        let location: Box<dyn LocationProvider> = match (lat, lng) {
            (Some(_), Some(_)) => Box::new(StaticLocation::new(*lat, *lng, place.clone())),
            _ => Box::new(NoLocation),
        };

        if lat.is_some() && location.current_fix().is_none() {
            return Err(AppError::InvalidInput(
                "coordinates out of range (lat -90..90, lng -180..180)".to_string(),
            ));
        }

        let kind = match action {
            ClockAction::In => Punch::In,
            ClockAction::Out => Punch::Out,
        };

        let request = PunchRequest::new(note.clone(), location.as_ref());
        let client = client_from_config(&session.cfg)?;
        let response = client.punch(kind, &request)?;

        success(format!(
            "{} recorded at {}",
            kind.label(),
            fmt_instant(&Utc::now(), &session.zone)
        ));
        if let Some(place) = &request.location_name {
            info(format!("Location: {place}"));
        }
        info(describe_response(&response));
    }
    Ok(())
}
