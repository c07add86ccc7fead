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
    error::KeepAliveError,
    messages::ServiceNodeKeepAlive,
    services::{MessageRelay, ServiceNodeRegistry, ServiceSpecification},
    state::NotCapableReason,
};

impl<TSpec: ServiceSpecification> ActiveNodeManager<TSpec> {
    /// Signs and relays a keep-alive for the registered collateral, unless one was sent too recently.
    pub async fn send_keep_alive(&mut self) -> Result<(), KeepAliveError> {
        if !self.context.pinger_enabled {
            return Err(KeepAliveError::PingerDisabled);
        }

        let registered = match self.context.collateral {
            Some(collateral) => self.services.registry.has_entry(&collateral).await.then_some(collateral),
            None => None,
        };
        let collateral = match registered {
            Some(collateral) => collateral,
            None => {
                if !self.context.state.is_not_capable() {
                    self.set_not_capable(NotCapableReason::NotInRegistry);
                }
                return Err(KeepAliveError::NotInRegistry);
            },
        };

        let keep_alive = ServiceNodeKeepAlive::create(
            collateral,
            self.context.license.as_ref(),
            &self.context.identity,
            &self.services.signer,
            Utc::now(),
        )
        .map_err(|e| {
            error!(target: LOG_TARGET, "Could not sign keep-alive: {}", e);
            e
        })?;

        if self
            .services
            .registry
            .recent_keep_alive(
                &collateral,
                self.consensus.min_keep_alive_interval,
                keep_alive.timestamp(),
            )
            .await
        {
            trace!(target: LOG_TARGET, "Keep-alive for {} sent recently", collateral);
            return Err(KeepAliveError::TooEarly);
        }

        debug!(target: LOG_TARGET, "Relaying keep-alive for {}", collateral);
        self.services.registry.record_keep_alive(&keep_alive).await;
        self.services.relay.broadcast(keep_alive.into()).await;
        Ok(())
    }
}
