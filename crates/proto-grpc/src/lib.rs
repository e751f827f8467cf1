//! gRPC service stubs of the orchestrator's destination protocol.
//!
//! Generated code is checked in, with client and server implementations
//! gated behind cargo features. To re-generate, build with
//! `--features generate` (requires `protoc`).

#[cfg(any(feature = "destination_client", feature = "destination_server"))]
pub mod destination {
    include!("destination.rs");
}
