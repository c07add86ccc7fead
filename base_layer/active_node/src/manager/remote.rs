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

use log::*;

use super::{ActiveNodeManager, LOG_TARGET};
use crate::{
    services::{ServiceNodeRegistry, ServiceSpecification},
    state::{ActiveNodeState, NotCapableReason},
    SERVICE_NODE_PROTOCOL_VERSION,
};

impl<TSpec: ServiceSpecification> ActiveNodeManager<TSpec> {
    /// Reconciles this node against its registry entry, starting it if the entry matches and is startable.
    pub(super) async fn manage_state_remote(&mut self) {
        let public_key = self.context.identity.public_key().clone();
        debug!(target: LOG_TARGET, "Looking up registry entry for {}", public_key);

        let registry = &self.services.registry;
        registry.revalidate(&public_key).await;
        let entry = match registry.lookup_by_key(&public_key).await {
            Some(entry) => entry,
            None => {
                self.set_not_capable(NotCapableReason::NotInRegistry);
                return;
            },
        };

        if entry.protocol_version != SERVICE_NODE_PROTOCOL_VERSION {
            self.set_not_capable(NotCapableReason::ProtocolVersionMismatch {
                expected: SERVICE_NODE_PROTOCOL_VERSION,
                found: entry.protocol_version,
            });
            return;
        }

        if self.context.service_address != Some(entry.address) {
            self.set_not_capable(NotCapableReason::AddressMismatch);
            return;
        }

        // A known collateral, resolved locally or adopted on an earlier start, must still match the entry
        if let Some(collateral) = self.context.collateral {
            if collateral != entry.collateral {
                self.set_not_capable(NotCapableReason::CollateralMismatch);
                return;
            }
        }

        if !entry.status.is_valid_for_auto_start() {
            self.set_not_capable(NotCapableReason::NotStartableStatus(entry.status));
            return;
        }

        if !self.context.state.is_started() {
            info!(
                target: LOG_TARGET,
                "Service node STARTED at {} with collateral {}", entry.address, entry.collateral
            );
            self.context.collateral = Some(entry.collateral);
            self.context.service_address = Some(entry.address);
            self.context.pinger_enabled = true;
            self.set_state(ActiveNodeState::Started);
        }
    }
}
