use iceapple_config::{AuthConfig, CorsConfig};

use crate::modules::reservations::store::ReservationStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub reservations: ReservationStore,
    pub auth_config: AuthConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(auth_config: AuthConfig, cors_config: CorsConfig) -> Self {
        Self {
            reservations: ReservationStore::default(),
            auth_config,
            cors_config,
        }
    }
}

pub fn init_app_state() -> AppState {
    AppState::new(AuthConfig::from_env(), CorsConfig::from_env())
}
