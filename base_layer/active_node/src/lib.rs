//  Copyright 2024. The Tari Project
//
//  Redistribution and use in source and binary forms, with or without modification, are permitted provided that the
//  following conditions are met:
//
//  1. Redistributions of source code must retain the above copyright notice, this list of conditions and the following
//  disclaimer.
//
//  2. Redistributions in binary form must reproduce the above copyright notice, this list of conditions and the
//  following disclaimer in the documentation and/or other materials provided with the distribution.
//
//  3. Neither the name of the copyright holder nor the names of its contributors may be used to endorse or promote
//  products derived from this software without specific prior written permission.
//
//  THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES,
//  INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
//  DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL,
//  SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
//  SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY,
//  WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE
//  USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

//! # Active service node
//!
//! A node that wishes to act as a service node must continuously determine its own eligibility, discover and validate
//! its externally reachable address, register that address with the wider peer set and keep that registration alive
//! with periodic signed keep-alive messages.
//!
//! [ActiveNodeManager] implements that lifecycle as a state machine that is re-evaluated from scratch on every call to
//! [ActiveNodeManager::manage_state]. Everything the state machine observes or affects outside of its own context is
//! reached through the collaborator traits in [services], bundled together by a [ServiceSpecification].
//! [ActiveNodeService] drives the state machine on a fixed cadence.

pub mod address;

mod config;
pub use config::ActiveNodeConfig;

mod consensus;
pub use consensus::ActiveNodeConsensus;

pub mod error;

mod identity;
pub use identity::ServiceNodeIdentity;

pub mod manager;
pub use manager::ActiveNodeManager;

pub mod messages;

#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

mod service;
pub use service::{ActiveNodeHandle, ActiveNodeService};

pub mod services;
pub use services::{ActiveNodeServices, ServiceSpecification};

pub mod signing;

mod state;
pub use state::{ActiveNodeState, NodeKind, NotCapableReason, StatusInfo};

pub mod types;

/// The service node protocol version spoken by this build. Registry entries advertising any other version are not
/// started.
pub const SERVICE_NODE_PROTOCOL_VERSION: u32 = 70210;
