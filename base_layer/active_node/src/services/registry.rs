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

use std::{fmt, net::SocketAddr, time::Duration};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    messages::{ServiceNodeKeepAlive, ServiceNodeRegistration},
    types::{CollateralRef, PublicKey},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceNodeStatus {
    PreEnabled,
    Enabled,
    Expired,
    OutpointSpent,
    UpdateRequired,
    WatchdogExpired,
    NewStartRequired,
    PoseBanned,
}

impl ServiceNodeStatus {
    /// Only nodes in these states may be started without a fresh registration
    pub fn is_valid_for_auto_start(self) -> bool {
        matches!(self, ServiceNodeStatus::Enabled | ServiceNodeStatus::WatchdogExpired)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceNodeStatus::PreEnabled => "PRE_ENABLED",
            ServiceNodeStatus::Enabled => "ENABLED",
            ServiceNodeStatus::Expired => "EXPIRED",
            ServiceNodeStatus::OutpointSpent => "OUTPOINT_SPENT",
            ServiceNodeStatus::UpdateRequired => "UPDATE_REQUIRED",
            ServiceNodeStatus::WatchdogExpired => "WATCHDOG_EXPIRED",
            ServiceNodeStatus::NewStartRequired => "NEW_START_REQUIRED",
            ServiceNodeStatus::PoseBanned => "POSE_BAN",
        }
    }
}

impl fmt::Display for ServiceNodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The registry's view of a service node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceNodeRegistryEntry {
    pub public_key: PublicKey,
    pub protocol_version: u32,
    pub address: SocketAddr,
    pub collateral: CollateralRef,
    pub status: ServiceNodeStatus,
}

/// The network-wide list of registered service nodes, as known to this node.
#[async_trait]
pub trait ServiceNodeRegistry: Send + Sync {
    /// Re-check the status of the entry registered to `public_key`
    async fn revalidate(&self, public_key: &PublicKey);

    async fn lookup_by_key(&self, public_key: &PublicKey) -> Option<ServiceNodeRegistryEntry>;

    async fn has_entry(&self, collateral: &CollateralRef) -> bool;

    /// Returns true if a keep-alive for `collateral` was recorded less than `within` before `at`
    async fn recent_keep_alive(&self, collateral: &CollateralRef, within: Duration, at: DateTime<Utc>) -> bool;

    async fn record_keep_alive(&self, keep_alive: &ServiceNodeKeepAlive);

    async fn publish(&self, registration: &ServiceNodeRegistration);

    /// Signal that the registry contents changed and dependent views should refresh
    async fn notify_updated(&self);
}
