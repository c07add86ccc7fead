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

use tari_common::configuration::Network;

/// Network-wide rules that a service node must observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveNodeConsensus {
    /// The number of blocks that must be mined on top of the collateral output before it may back a registration
    pub min_collateral_confirmations: u64,
    /// Keep-alives for the same collateral closer together than this are not recorded or relayed
    pub min_keep_alive_interval: Duration,
}

impl ActiveNodeConsensus {
    pub fn for_network(network: Network) -> Self {
        let min_collateral_confirmations = match network {
            Network::MainNet | Network::StageNet | Network::NextNet => 15,
            Network::Igor | Network::Esmeralda | Network::LocalNet => 1,
        };
        Self {
            min_collateral_confirmations,
            min_keep_alive_interval: Duration::from_secs(10 * 60),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn production_networks_require_deeper_collateral() {
        assert_eq!(ActiveNodeConsensus::for_network(Network::MainNet).min_collateral_confirmations, 15);
        assert_eq!(ActiveNodeConsensus::for_network(Network::NextNet).min_collateral_confirmations, 15);
        assert_eq!(ActiveNodeConsensus::for_network(Network::Esmeralda).min_collateral_confirmations, 1);
        assert_eq!(
            ActiveNodeConsensus::for_network(Network::LocalNet).min_keep_alive_interval,
            Duration::from_secs(600)
        );
    }
}
