/// Daily adhan alert scheduling on top of the job scheduler
pub mod adhan;
/// Best-effort reverse geocoding for shared device locations
pub mod geocoding;
/// HTTP health endpoints for the hosting platform
pub mod health;
/// Client for the external prayer-timings service
pub mod prayer_times;
