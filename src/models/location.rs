use serde::Serialize;

/// A position fix attached to a punch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoFix {
    pub latitude: f64,
    pub longitude: f64,
    pub place: Option<String>,
}

/// Source of the current position. Injected so punches can be built and
/// tested without any platform geolocation service.
pub trait LocationProvider {
    fn current_fix(&self) -> Option<GeoFix>;
}

/// No position available.
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn current_fix(&self) -> Option<GeoFix> {
        None
    }
}

/// Fixed position supplied by the user (`--lat/--lng/--place`).
pub struct StaticLocation {
    fix: Option<GeoFix>,
}

impl StaticLocation {
    /// Both coordinates are required and must be in range.
    pub fn new(lat: Option<f64>, lng: Option<f64>, place: Option<String>) -> Self {
        let fix = match (lat, lng) {
            (Some(latitude), Some(longitude))
                if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) =>
            {
                Some(GeoFix {
                    latitude,
                    longitude,
                    place,
                })
            }
            _ => None,
        };
        Self { fix }
    }
}

impl LocationProvider for StaticLocation {
    fn current_fix(&self) -> Option<GeoFix> {
        self.fix.clone()
    }
}
