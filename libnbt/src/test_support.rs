//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport and SimulatedTag setup so
//! tests across the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::protocol::Response;
use crate::tag::{Active, Tag};
use crate::transport::{self, MockTransport, SentLog, SimulatedTag};
use crate::types::{FileAccessPolicy, StatusWord};
use crate::Result;

/// Build a MockTransport pre-seeded with the given raw responses and
/// return it boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: Vec<Vec<u8>>) -> Box<dyn transport::Transport> {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    Box::new(mock)
}

/// Active Tag backed by a MockTransport pre-seeded with `responses`,
/// together with the transport's sent log.
#[doc(hidden)]
pub fn active_mock_tag(responses: Vec<Vec<u8>>) -> Result<(Tag<Active>, SentLog)> {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    let log = mock.sent_log();
    let tag = Tag::new_with_transport(Box::new(mock)).activate()?;
    Ok((tag, log))
}

/// Active Tag backed by a fresh SimulatedTag, plus a clone of the
/// simulator for inspecting its state.
#[doc(hidden)]
pub fn active_simulated_tag() -> Result<(Tag<Active>, SimulatedTag)> {
    let sim = SimulatedTag::new();
    let tag = Tag::new_with_transport(Box::new(sim.clone())).activate()?;
    Ok((tag, sim))
}

/// Raw bytes of a successful response carrying `data`.
#[doc(hidden)]
pub fn ok_response(data: &[u8]) -> Vec<u8> {
    Response::success(data).encode()
}

/// Raw bytes of a data-less response carrying `sw`.
#[doc(hidden)]
pub fn status_response(sw: u16) -> Vec<u8> {
    StatusWord::new(sw).to_bytes().to_vec()
}

/// Raw bytes of a successful policy read reporting `policies`.
#[doc(hidden)]
pub fn policy_table_response(policies: &[FileAccessPolicy]) -> Vec<u8> {
    let table: Vec<u8> = policies.iter().flat_map(|p| p.encode()).collect();
    ok_response(&table)
}
