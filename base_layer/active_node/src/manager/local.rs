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

use chrono::Utc;
use log::*;

use super::{ActiveNodeManager, LOG_TARGET};
use crate::{
    messages::ServiceNodeRegistration,
    services::{CollateralSource, LicenseAuthority, MessageRelay, ServiceNodeRegistry, ServiceSpecification},
    state::{ActiveNodeState, NotCapableReason},
};

impl<TSpec: ServiceSpecification> ActiveNodeManager<TSpec> {
    /// Registers a node that holds its own collateral and starts it.
    pub(super) async fn manage_state_local(&mut self) {
        if self.context.state.is_started() {
            return;
        }

        let local = match self.services.collateral_source.resolve_local_collateral().await {
            Some(local) => local,
            None => {
                debug!(target: LOG_TARGET, "No local collateral available to register");
                return;
            },
        };
        let collateral = local.collateral;

        let confirmations = self
            .services
            .collateral_source
            .collateral_confirmations(&collateral)
            .await;
        let required = self.consensus.min_collateral_confirmations;
        if confirmations < required {
            warn!(
                target: LOG_TARGET,
                "Collateral {} has {} confirmations, {} required", collateral, confirmations, required
            );
            self.set_state(ActiveNodeState::InputTooNew {
                confirmations,
                required,
            });
            return;
        }

        let address = match self.context.service_address {
            Some(address) => address,
            None => {
                debug!(target: LOG_TARGET, "Service address unknown, not registering");
                return;
            },
        };

        let registration = ServiceNodeRegistration::create(
            collateral,
            local.address,
            address,
            local.payee,
            &self.context.identity,
            &self.services.signer,
            Utc::now(),
        );
        let mut registration = match registration {
            Ok(registration) => registration,
            Err(e) => {
                error!(target: LOG_TARGET, "Could not create service node registration: {}", e);
                self.set_not_capable(NotCapableReason::RegistrationFailed(e.to_string()));
                return;
            },
        };

        if registration.payee_destination().is_none() {
            self.set_not_capable(NotCapableReason::NoPayeeDestination);
            return;
        }

        let license = match self.services.license_authority.authorize(&registration).await {
            Ok(license) => license,
            Err(rejection) => {
                self.set_not_capable(NotCapableReason::NotAuthorized {
                    collateral,
                    reason: rejection.to_string(),
                });
                return;
            },
        };
        registration.attach_license(license.clone());
        self.context.license = Some(license);
        self.context.collateral = Some(collateral);
        self.context.pinger_enabled = true;
        self.set_state(ActiveNodeState::Started);
        info!(
            target: LOG_TARGET,
            "Service node registered at {} with collateral {}, STARTED", address, collateral
        );

        self.services.registry.publish(&registration).await;
        self.services.registry.notify_updated().await;
        self.services.relay.broadcast(registration.into()).await;
    }
}
