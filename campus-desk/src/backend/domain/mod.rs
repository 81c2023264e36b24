//! # Domain
//!
//! Business logic for the three campus apps. Services own their state and talk
//! to the outside world only through the host capabilities in
//! [`crate::backend::io`] and the key-value store in [`crate::backend::storage`].

pub mod assistant_service;
pub mod attendance_service;
pub mod calendar;
pub mod chat_service;
pub mod erp_service;
pub mod errors;
pub mod export_service;
pub mod keywords;
pub mod kpi_service;
pub mod lesson_planner;
pub mod models;
pub mod quiz_service;
pub mod record_store;
pub mod record_table;
pub mod resource_service;
pub mod values;

pub use assistant_service::AssistantService;
pub use attendance_service::AttendanceService;
pub use calendar::{Clock, FixedClock, SystemClock};
pub use erp_service::ErpService;
pub use errors::DeskError;
pub use export_service::ExportService;
pub use kpi_service::KpiService;
pub use record_store::RecordStore;
pub use record_table::RenderedTable;
