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

use std::net::SocketAddr;

use log::*;

use super::{ActiveNodeManager, LOG_TARGET};
use crate::{
    address::{is_valid_service_address, validate_service_port},
    services::{CollateralSource, PeerConnectivity, ServiceSpecification},
    state::{NodeKind, NotCapableReason},
};

impl<TSpec: ServiceSpecification> ActiveNodeManager<TSpec> {
    /// Checks that this node can serve as a service node and classifies it as `Local` or `Remote`.
    pub(super) async fn manage_state_initial(&mut self) {
        debug!(target: LOG_TARGET, "Checking service node capability");

        if !self.config.listening_enabled {
            self.set_not_capable(NotCapableReason::InboundDisabled);
            return;
        }

        let address = match self.discover_service_address().await {
            Ok(address) => address,
            Err(reason) => {
                self.set_not_capable(reason);
                return;
            },
        };

        if let Err(reason) = validate_service_port(self.config.network, &address) {
            self.set_not_capable(reason);
            return;
        }

        debug!(target: LOG_TARGET, "Checking inbound connection to {}", address);
        if !self.services.connectivity.check_inbound_connection(&address).await {
            self.set_not_capable(NotCapableReason::InboundConnectFailed { address });
            return;
        }
        self.context.service_address = Some(address);

        match self.services.collateral_source.resolve_local_collateral().await {
            Some(local) => {
                info!(
                    target: LOG_TARGET,
                    "Local collateral {} found, service node at {} is LOCAL", local.collateral, address
                );
                self.context.collateral = Some(local.collateral);
                self.context.kind = NodeKind::Local;
            },
            None => {
                info!(target: LOG_TARGET, "No local collateral, service node at {} is REMOTE", address);
                self.context.kind = NodeKind::Remote;
            },
        }
    }

    /// Finds an externally reachable address for this node, first from local knowledge and then as seen by each
    /// connected peer.
    async fn discover_service_address(&self) -> Result<SocketAddr, NotCapableReason> {
        let allow_test_addrs = self.config.network.is_local();
        let connectivity = &self.services.connectivity;

        if let Some(address) = connectivity
            .resolve_external_address(None)
            .await
            .filter(|a| is_valid_service_address(a, allow_test_addrs))
        {
            return Ok(address);
        }

        let peers = connectivity.active_peers().await;
        if peers.is_empty() {
            return Err(NotCapableReason::NoConnectionsToInferAddress);
        }

        for peer in peers.iter().filter(|p| p.handshake_complete && p.address.is_ipv4()) {
            let resolved = connectivity
                .resolve_external_address(Some(&peer.address))
                .await
                .filter(|a| is_valid_service_address(a, allow_test_addrs));
            if let Some(address) = resolved {
                trace!(target: LOG_TARGET, "Peer {} sees us at {}", peer.address, address);
                return Ok(address);
            }
        }

        Err(NotCapableReason::NoValidExternalAddress)
    }
}
