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

use config::{Config, File, FileFormat};
use tari_active_node::{ActiveNodeConfig, ActiveNodeConsensus};
use tari_common::{configuration::Network, DefaultConfigLoader};

fn load(toml: &str) -> Result<ActiveNodeConfig, tari_common::ConfigurationError> {
    let config = Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()
        .unwrap();
    ActiveNodeConfig::load_from(&config)
}

#[test]
fn it_loads_defaults_without_a_section() {
    let config = load("").unwrap();
    assert!(!config.enabled);
    assert!(config.listening_enabled);
    assert_eq!(config.network, Network::Esmeralda);
    assert_eq!(config.manage_state_interval, Duration::from_secs(60));
    assert!(config.min_collateral_confirmations.is_none());
    assert!(config.min_keep_alive_interval.is_none());
}

#[test]
fn it_loads_a_mainnet_service_node() {
    let config = load(
        r#"
[active_node]
enabled = true
network = "mainnet"
manage_state_interval = 120
"#,
    )
    .unwrap();
    assert!(config.enabled);
    assert_eq!(config.network, Network::MainNet);
    assert_eq!(config.manage_state_interval, Duration::from_secs(120));
    assert_eq!(
        config.consensus_constants(),
        ActiveNodeConsensus::for_network(Network::MainNet)
    );
}

#[test]
fn it_applies_consensus_overrides() {
    let config = load(
        r#"
[active_node]
network = "localnet"
min_collateral_confirmations = 0
min_keep_alive_interval = 5
"#,
    )
    .unwrap();
    let consensus = config.consensus_constants();
    assert_eq!(consensus.min_collateral_confirmations, 0);
    assert_eq!(consensus.min_keep_alive_interval, Duration::from_secs(5));
}

#[test]
fn it_rejects_an_unknown_network() {
    let err = load(
        r#"
[active_node]
network = "moonnet"
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("moonnet"), "{}", err);
}

#[test]
fn it_rejects_unknown_fields() {
    assert!(load(
        r#"
[active_node]
enabeld = true
"#,
    )
    .is_err());
}
