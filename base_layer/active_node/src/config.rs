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

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tari_common::{
    configuration::{
        serializers::{optional_seconds, seconds},
        Network,
    },
    SubConfigPath,
};

use crate::ActiveNodeConsensus;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActiveNodeConfig {
    /// Run the node as a service node. When false every state management cycle is a no-op.
    pub enabled: bool,
    /// The network this node participates in
    pub network: Network,
    /// Whether the node accepts inbound connections. Service nodes must.
    pub listening_enabled: bool,
    /// How often the service node state is re-evaluated
    #[serde(with = "seconds")]
    pub manage_state_interval: Duration,
    /// Override the network's minimum collateral depth. Intended for test networks.
    #[serde(default)]
    pub min_collateral_confirmations: Option<u64>,
    /// Override the network's minimum spacing between keep-alives. Intended for test networks.
    #[serde(default, with = "optional_seconds")]
    pub min_keep_alive_interval: Option<Duration>,
}

impl Default for ActiveNodeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            network: Network::default(),
            listening_enabled: true,
            manage_state_interval: Duration::from_secs(60),
            min_collateral_confirmations: None,
            min_keep_alive_interval: None,
        }
    }
}

impl SubConfigPath for ActiveNodeConfig {
    fn main_key_prefix() -> &'static str {
        "active_node"
    }
}

impl ActiveNodeConfig {
    /// The consensus rules for the configured network with any local overrides applied
    pub fn consensus_constants(&self) -> ActiveNodeConsensus {
        let mut consensus = ActiveNodeConsensus::for_network(self.network);
        if let Some(confirmations) = self.min_collateral_confirmations {
            consensus.min_collateral_confirmations = confirmations;
        }
        if let Some(interval) = self.min_keep_alive_interval {
            consensus.min_keep_alive_interval = interval;
        }
        consensus
    }
}
