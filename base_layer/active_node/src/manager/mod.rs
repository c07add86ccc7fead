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

//! The active node state machine.
//!
//! Every call to [ActiveNodeManager::manage_state] re-derives the node's state from the collaborators:
//!
//! 1. If the chain is not synced the node waits in `SyncInProcess`.
//! 2. An unclassified node discovers and verifies its external address and decides whether it holds its own
//!    collateral (`Local`) or was registered by someone else (`Remote`).
//! 3. Both kinds reconcile themselves against the registry. A `Local` node that is not yet started registers itself.
//! 4. A started node sends a keep-alive, subject to the network's rate limit.

use std::net::SocketAddr;

use log::*;

use crate::{
    messages::LicenseCertificate,
    services::{ActiveNodeServices, ServiceSpecification, SyncOracle},
    state::{ActiveNodeState, NodeKind, NotCapableReason, StatusInfo},
    types::{CollateralRef, PublicKey},
    ActiveNodeConfig,
    ActiveNodeConsensus,
    ServiceNodeIdentity,
};

mod context;
use context::ActiveNodeContext;

mod initial;
mod keep_alive;
mod local;
mod remote;

#[cfg(test)]
mod test;

const LOG_TARGET: &str = "c::an::manager";

pub struct ActiveNodeManager<TSpec: ServiceSpecification> {
    config: ActiveNodeConfig,
    consensus: ActiveNodeConsensus,
    context: ActiveNodeContext,
    services: ActiveNodeServices<TSpec>,
}

impl<TSpec: ServiceSpecification> ActiveNodeManager<TSpec> {
    pub fn new(config: ActiveNodeConfig, identity: ServiceNodeIdentity, services: ActiveNodeServices<TSpec>) -> Self {
        let consensus = config.consensus_constants();
        Self {
            config,
            consensus,
            context: ActiveNodeContext::new(identity),
            services,
        }
    }

    /// Runs one management cycle. Outcomes are recorded in the node's state, nothing is returned.
    pub async fn manage_state(&mut self) {
        if !self.config.enabled {
            trace!(target: LOG_TARGET, "Service node is not enabled");
            return;
        }

        if !self.config.network.is_local() && !self.services.sync_oracle.is_synced().await {
            self.set_state(ActiveNodeState::SyncInProcess);
            return;
        }

        if self.context.state == ActiveNodeState::SyncInProcess {
            self.set_state(ActiveNodeState::Initial);
        }

        if self.context.kind == NodeKind::Unknown {
            self.manage_state_initial().await;
        }

        match self.context.kind {
            NodeKind::Remote => self.manage_state_remote().await,
            NodeKind::Local => {
                // A local collateral may already have been registered, possibly by a previous run
                self.manage_state_remote().await;
                if !self.context.state.is_started() {
                    self.manage_state_local().await;
                }
            },
            NodeKind::Unknown => {},
        }

        if let Err(e) = self.send_keep_alive().await {
            debug!(target: LOG_TARGET, "Keep-alive not sent: {}", e);
        }
    }

    pub fn state(&self) -> &ActiveNodeState {
        &self.context.state
    }

    pub fn kind(&self) -> NodeKind {
        self.context.kind
    }

    pub fn collateral(&self) -> Option<&CollateralRef> {
        self.context.collateral.as_ref()
    }

    pub fn service_address(&self) -> Option<&SocketAddr> {
        self.context.service_address.as_ref()
    }

    pub fn public_key(&self) -> &PublicKey {
        self.context.identity.public_key()
    }

    pub fn is_pinger_enabled(&self) -> bool {
        self.context.pinger_enabled
    }

    pub fn license(&self) -> Option<&LicenseCertificate> {
        self.context.license.as_ref()
    }

    pub fn last_ineligibility_reason(&self) -> Option<String> {
        self.context.state.ineligibility_reason()
    }

    pub fn status_info(&self) -> StatusInfo {
        self.context.status_info()
    }

    pub fn config(&self) -> &ActiveNodeConfig {
        &self.config
    }

    fn set_state(&mut self, state: ActiveNodeState) {
        if self.context.state != state {
            debug!(
                target: LOG_TARGET,
                "Service node state {} -> {}", self.context.state, state
            );
        }
        self.context.state = state;
    }

    fn set_not_capable(&mut self, reason: NotCapableReason) {
        warn!(target: LOG_TARGET, "Not capable service node: {}", reason);
        self.set_state(ActiveNodeState::NotCapable(reason));
    }
}
