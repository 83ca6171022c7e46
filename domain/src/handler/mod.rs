//! Handler output types.
//!
//! Every domain handler produces a [`result::HandlerResult`]; the
//! synthesizer consumes it immediately and nothing is persisted.

pub mod result;
