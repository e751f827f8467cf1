//! Message types of the orchestrator's destination protocol.
//!
//! Generated code is checked in. To re-generate from the protobuf sources
//! under `proto/`, build with `--features generate` (requires `protoc`).

pub mod v2 {
    include!("fivetran_sdk.v2.rs");
}
