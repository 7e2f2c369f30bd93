mod engine;
mod engine_config;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod listener_dispatch;
mod listener_registry;
mod nearest_point_map;
mod nearest_point_resolver;
mod snapshot_controller;

pub use engine::NearestPointEngine;
pub use engine_config::NearestPointEngineConfig;
pub use engine_snapshot::NearestPointSnapshot;
pub use json_contract::{NEAREST_POINT_SNAPSHOT_JSON_SCHEMA_V1, NearestPointSnapshotJsonContractV1};
pub use nearest_point_map::{NearestPoint, NearestPointMap};
