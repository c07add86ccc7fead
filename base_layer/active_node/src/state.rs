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

use std::{fmt, net::SocketAddr};

use thiserror::Error;

use crate::{services::ServiceNodeStatus, types::CollateralRef};

/// The lifecycle state of the local service node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveNodeState {
    #[default]
    Initial,
    SyncInProcess,
    InputTooNew {
        confirmations: u64,
        required: u64,
    },
    NotCapable(NotCapableReason),
    Started,
}

impl ActiveNodeState {
    pub fn state_str(&self) -> &'static str {
        match self {
            ActiveNodeState::Initial => "INITIAL",
            ActiveNodeState::SyncInProcess => "SYNC_IN_PROCESS",
            ActiveNodeState::InputTooNew { .. } => "INPUT_TOO_NEW",
            ActiveNodeState::NotCapable(_) => "NOT_CAPABLE",
            ActiveNodeState::Started => "STARTED",
        }
    }

    /// A human readable description of the state
    pub fn status(&self) -> String {
        match self {
            ActiveNodeState::Initial => "Node just started, not yet activated".to_string(),
            ActiveNodeState::SyncInProcess => {
                "Sync in progress. Must wait until sync is complete to start Service Node".to_string()
            },
            ActiveNodeState::InputTooNew { required, .. } => {
                format!("Service Node collateral must have at least {} confirmations", required)
            },
            ActiveNodeState::NotCapable(reason) => format!("Not capable service node: {}", reason),
            ActiveNodeState::Started => "Service Node successfully started".to_string(),
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self, ActiveNodeState::Started)
    }

    pub fn is_not_capable(&self) -> bool {
        matches!(self, ActiveNodeState::NotCapable(_))
    }

    /// The reason the node is not currently eligible, if it is not
    pub fn ineligibility_reason(&self) -> Option<String> {
        match self {
            ActiveNodeState::NotCapable(reason) => Some(reason.to_string()),
            ActiveNodeState::InputTooNew { confirmations, required } => Some(format!(
                "Collateral has {} confirmations, {} required",
                confirmations, required
            )),
            _ => None,
        }
    }
}

impl fmt::Display for ActiveNodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.state_str())
    }
}

/// How this node's identity relates to its collateral. A `Local` node holds the collateral itself and registers
/// on its own behalf, a `Remote` node was registered by a separate collateral holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeKind {
    #[default]
    Unknown,
    Remote,
    Local,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Unknown => "UNKNOWN",
            NodeKind::Remote => "REMOTE",
            NodeKind::Local => "LOCAL",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotCapableReason {
    #[error("Service node must accept connections from outside")]
    InboundDisabled,
    #[error("Can't detect valid external address. Will retry when there are some connections available.")]
    NoConnectionsToInferAddress,
    #[error("Can't detect valid external address. Please consider setting the public address explicitly.")]
    NoValidExternalAddress,
    #[error("Invalid port: {port} - only {expected} is supported on mainnet")]
    MainNetPortMismatch { port: u16, expected: u16 },
    #[error("Invalid port: {port} is only supported on mainnet")]
    MainNetPortReserved { port: u16 },
    #[error("Could not connect to {address}")]
    InboundConnectFailed { address: SocketAddr },
    #[error("Service node not in registry")]
    NotInRegistry,
    #[error("Invalid protocol version {found}, expected {expected}")]
    ProtocolVersionMismatch { expected: u32, found: u32 },
    #[error("Registered address does not match the local service address")]
    AddressMismatch,
    #[error("Registered collateral does not match the local collateral")]
    CollateralMismatch,
    #[error("Service node in {0} state")]
    NotStartableStatus(ServiceNodeStatus),
    #[error("Error preparing registration: {0}")]
    RegistrationFailed(String),
    #[error("Failed to get payee destination for collateral")]
    NoPayeeDestination,
    #[error("Collateral {} is not authorized: {reason}", .collateral.to_short_string())]
    NotAuthorized { collateral: CollateralRef, reason: String },
}

/// A point-in-time summary of the active node, published after every management cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusInfo {
    pub state: ActiveNodeState,
    pub kind: NodeKind,
    pub collateral: Option<CollateralRef>,
    pub service_address: Option<SocketAddr>,
    pub pinger_enabled: bool,
}

impl fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.state, self.kind, self.state.status())?;
        if let Some(addr) = self.service_address {
            write!(f, ", address {}", addr)?;
        }
        if let Some(collateral) = self.collateral {
            write!(f, ", collateral {}", collateral.to_short_string())?;
        }
        Ok(())
    }
}
