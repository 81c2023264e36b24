//! # Backend
//!
//! Wires the domain services to their storage and clock. The host (browser
//! shell, desktop shell or the headless runner) is passed to each operation
//! separately, so one backend can drive any front end.

use anyhow::Result;
use log::info;
use std::sync::Arc;

pub mod domain;
pub mod io;
pub mod storage;

use crate::config::DeskConfig;
use domain::{AssistantService, AttendanceService, Clock, ErpService, KpiService, SystemClock};
use storage::{JsonFileStorage, KeyValueStorage};

/// Main backend struct that owns all services
pub struct Backend {
    pub erp_service: ErpService,
    pub attendance_service: AttendanceService,
    pub assistant_service: AssistantService,
}

impl Backend {
    /// Backend on the system clock with file storage from the configuration
    pub fn new(config: &DeskConfig) -> Result<Self> {
        let storage = Arc::new(JsonFileStorage::new(config.storage_path())?);
        info!("Using key-value storage at {:?}", storage.path());
        Ok(Self::with_parts(config, storage, Arc::new(SystemClock)))
    }

    /// Backend over explicit storage and clock
    pub fn with_parts(config: &DeskConfig, storage: Arc<dyn KeyValueStorage>, clock: Arc<dyn Clock>) -> Self {
        let erp_service = ErpService::new(KpiService::new(&config.currency_symbol), clock.clone());
        let attendance_service = AttendanceService::new(storage, clock.clone());
        let assistant_service =
            AssistantService::new(clock, config.default_lesson_duration, config.default_quiz_count);

        Self {
            erp_service,
            attendance_service,
            assistant_service,
        }
    }
}
