use crate::wire::HealthRes;

/// Simple health service for the REST API and its monitoring probes.
pub struct HealthService;

impl HealthService {
    /// Static method to check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Showcase is alive".into(),
        }
    }
}
