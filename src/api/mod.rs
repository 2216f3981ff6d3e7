//! Host-facing combined chart facade.
//!
//! `CombinedChart` is split across controller files, each adding one
//! `impl<R: Renderer> CombinedChart<R>` block for its concern.

mod animation_controller;
mod chart;
mod chart_config;
mod chart_init;
mod chart_model;
mod chart_snapshot;
mod data_controller;
mod highlight_controller;
mod json_contract;
mod render_frame_builder;
mod viewport_controller;

pub use chart::CombinedChart;
pub use chart_config::CombinedChartConfig;
pub use chart_model::ChartModel;
pub use chart_snapshot::ChartSnapshot;
pub use json_contract::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1};
