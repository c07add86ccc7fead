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

use std::{net::SocketAddr, time::Duration};

use tari_common::configuration::Network;

use crate::{
    error::{KeepAliveError, LicenseRejection},
    mocks::{create_mock_services, MockServiceSpecification, MockServicesState},
    services::{LocalCollateral, ServiceNodeRegistryEntry, ServiceNodeStatus},
    state::{ActiveNodeState, NodeKind, NotCapableReason},
    types::{CollateralRef, PayeeDestination, PrivateKey, PublicKey},
    ActiveNodeConfig,
    ActiveNodeManager,
    ServiceNodeIdentity,
    SERVICE_NODE_PROTOCOL_VERSION,
};

type Manager = ActiveNodeManager<MockServiceSpecification>;

fn enabled_config() -> ActiveNodeConfig {
    ActiveNodeConfig {
        enabled: true,
        network: Network::Esmeralda,
        ..Default::default()
    }
}

fn setup_with(config: ActiveNodeConfig) -> (Manager, MockServicesState) {
    let (services, state) = create_mock_services();
    (
        ActiveNodeManager::new(config, ServiceNodeIdentity::random(), services),
        state,
    )
}

fn setup() -> (Manager, MockServicesState) {
    let (manager, state) = setup_with(enabled_config());
    state.connectivity.set_local_address(Some(service_address()));
    (manager, state)
}

fn service_address() -> SocketAddr {
    "8.8.8.8:18150".parse().unwrap()
}

fn collateral() -> CollateralRef {
    CollateralRef::new([0x11; 32], 1)
}

fn collateral_key() -> PublicKey {
    ServiceNodeIdentity::from_secret_key(PrivateKey::from(7u64))
        .public_key()
        .clone()
}

fn registry_entry(manager: &Manager, status: ServiceNodeStatus) -> ServiceNodeRegistryEntry {
    ServiceNodeRegistryEntry {
        public_key: manager.public_key().clone(),
        protocol_version: SERVICE_NODE_PROTOCOL_VERSION,
        address: service_address(),
        collateral: collateral(),
        status,
    }
}

fn give_local_collateral(state: &MockServicesState, confirmations: u64) {
    state.collateral_source.set_local_collateral(Some(LocalCollateral {
        collateral: collateral(),
        address: collateral_key(),
        payee: Some(PayeeDestination::new(vec![0x76, 0xa9, 0x14])),
    }));
    state.collateral_source.set_confirmations(collateral(), confirmations);
}

fn not_capable(reason: NotCapableReason) -> ActiveNodeState {
    ActiveNodeState::NotCapable(reason)
}

mod manage_state {
    use super::*;

    #[tokio::test]
    async fn it_does_nothing_when_disabled() {
        let (mut manager, state) = setup_with(ActiveNodeConfig::default());
        state.connectivity.set_local_address(Some(service_address()));
        give_local_collateral(&state, 100);
        manager.manage_state().await;
        assert_eq!(manager.state(), &ActiveNodeState::Initial);
        assert_eq!(manager.kind(), NodeKind::Unknown);
        assert!(state.connectivity.inbound_checks().is_empty());
        assert_eq!(state.collateral_source.resolve_call_count(), 0);
        assert!(state.relay.messages().is_empty());
    }

    #[tokio::test]
    async fn it_waits_for_sync() {
        let (mut manager, state) = setup();
        state.sync_oracle.set_synced(false);
        manager.manage_state().await;
        assert_eq!(manager.state(), &ActiveNodeState::SyncInProcess);
        assert_eq!(manager.kind(), NodeKind::Unknown);
        assert!(manager.service_address().is_none());
        assert!(manager.collateral().is_none());
        assert!(state.connectivity.inbound_checks().is_empty());
        assert!(manager.last_ineligibility_reason().is_none());
    }

    #[tokio::test]
    async fn it_resumes_after_sync() {
        let (mut manager, state) = setup();
        state.registry.insert_entry(registry_entry(&manager, ServiceNodeStatus::Enabled));
        manager.manage_state().await;
        assert_eq!(manager.state(), &ActiveNodeState::Started);

        state.sync_oracle.set_synced(false);
        manager.manage_state().await;
        assert_eq!(manager.state(), &ActiveNodeState::SyncInProcess);
        assert_eq!(manager.kind(), NodeKind::Remote);
        assert_eq!(manager.service_address(), Some(&service_address()));

        state.sync_oracle.set_synced(true);
        manager.manage_state().await;
        assert_eq!(manager.state(), &ActiveNodeState::Started);
        // Classification is not repeated
        assert_eq!(state.connectivity.inbound_checks().len(), 1);
    }

    #[tokio::test]
    async fn it_ignores_sync_on_localnet() {
        let (mut manager, state) = setup_with(ActiveNodeConfig {
            network: Network::LocalNet,
            ..enabled_config()
        });
        state.sync_oracle.set_synced(false);
        state
            .connectivity
            .set_local_address(Some("127.0.0.1:18199".parse().unwrap()));
        manager.manage_state().await;
        assert_eq!(manager.kind(), NodeKind::Remote);
        assert_eq!(manager.state(), &not_capable(NotCapableReason::NotInRegistry));
    }

    #[tokio::test]
    async fn status_info_reflects_context() {
        let (mut manager, state) = setup();
        state.registry.insert_entry(registry_entry(&manager, ServiceNodeStatus::Enabled));
        manager.manage_state().await;
        let info = manager.status_info();
        assert_eq!(info.state, ActiveNodeState::Started);
        assert_eq!(info.kind, NodeKind::Remote);
        assert_eq!(info.collateral, Some(collateral()));
        assert_eq!(info.service_address, Some(service_address()));
        assert!(info.pinger_enabled);
        assert!(info.to_string().starts_with("STARTED (REMOTE)"));
    }
}

mod initial {
    use super::*;

    #[tokio::test]
    async fn it_requires_inbound_connections() {
        let (mut manager, state) = setup_with(ActiveNodeConfig {
            listening_enabled: false,
            ..enabled_config()
        });
        state.connectivity.set_local_address(Some(service_address()));
        manager.manage_state().await;
        assert_eq!(manager.state(), &not_capable(NotCapableReason::InboundDisabled));
        assert_eq!(manager.kind(), NodeKind::Unknown);
    }

    #[tokio::test]
    async fn it_needs_connections_to_infer_an_address() {
        let (mut manager, state) = setup_with(enabled_config());
        manager.manage_state().await;
        assert_eq!(
            manager.state(),
            &not_capable(NotCapableReason::NoConnectionsToInferAddress)
        );
        assert!(manager.service_address().is_none());
        assert!(state.connectivity.inbound_checks().is_empty());
    }

    #[tokio::test]
    async fn it_reports_no_valid_address_when_no_peer_helps() {
        let (mut manager, state) = setup_with(enabled_config());
        // Private local address is not usable
        state
            .connectivity
            .set_local_address(Some("192.168.1.10:18150".parse().unwrap()));
        // Handshake incomplete, so not asked even though it would help
        state
            .connectivity
            .add_peer("1.1.1.1:18150".parse().unwrap(), false, Some(service_address()));
        // IPv6 peers are skipped
        state
            .connectivity
            .add_peer("[2a00:1450::1]:18150".parse().unwrap(), true, Some(service_address()));
        // Sees a non-routable address
        state.connectivity.add_peer(
            "9.9.9.9:18150".parse().unwrap(),
            true,
            Some("10.0.0.1:18150".parse().unwrap()),
        );
        manager.manage_state().await;
        assert_eq!(manager.state(), &not_capable(NotCapableReason::NoValidExternalAddress));
        assert!(manager.service_address().is_none());
        assert!(state.connectivity.inbound_checks().is_empty());
    }

    #[tokio::test]
    async fn it_infers_the_address_from_a_peer() {
        let (mut manager, state) = setup_with(enabled_config());
        state.connectivity.add_peer("9.9.9.9:18150".parse().unwrap(), true, None);
        state
            .connectivity
            .add_peer("1.1.1.1:18150".parse().unwrap(), true, Some(service_address()));
        manager.manage_state().await;
        assert_eq!(manager.service_address(), Some(&service_address()));
        assert_eq!(manager.kind(), NodeKind::Remote);
        assert_eq!(state.connectivity.inbound_checks(), vec![service_address()]);
    }

    #[tokio::test]
    async fn it_rejects_the_mainnet_port_off_mainnet() {
        let (mut manager, state) = setup_with(enabled_config());
        state
            .connectivity
            .set_local_address(Some("8.8.8.8:18189".parse().unwrap()));
        manager.manage_state().await;
        assert_eq!(
            manager.state(),
            &not_capable(NotCapableReason::MainNetPortReserved { port: 18189 })
        );
        assert!(manager.service_address().is_none());
    }

    #[tokio::test]
    async fn it_requires_the_mainnet_port_on_mainnet() {
        let (mut manager, state) = setup_with(ActiveNodeConfig {
            network: Network::MainNet,
            ..enabled_config()
        });
        state.connectivity.set_local_address(Some(service_address()));
        manager.manage_state().await;
        assert_eq!(
            manager.state(),
            &not_capable(NotCapableReason::MainNetPortMismatch {
                port: 18150,
                expected: 18189
            })
        );
    }

    #[tokio::test]
    async fn it_requires_a_successful_inbound_connection() {
        let (mut manager, state) = setup();
        state.connectivity.set_inbound_fails(true);
        manager.manage_state().await;
        assert_eq!(
            manager.state(),
            &not_capable(NotCapableReason::InboundConnectFailed {
                address: service_address()
            })
        );
        assert!(manager.service_address().is_none());
        assert_eq!(manager.kind(), NodeKind::Unknown);

        // Retried on the next cycle
        state.connectivity.set_inbound_fails(false);
        manager.manage_state().await;
        assert_eq!(manager.kind(), NodeKind::Remote);
        assert_eq!(state.connectivity.inbound_checks().len(), 2);
    }

    #[tokio::test]
    async fn local_collateral_makes_a_local_node() {
        let (mut manager, state) = setup();
        give_local_collateral(&state, 0);
        manager.manage_state().await;
        assert_eq!(manager.kind(), NodeKind::Local);
        assert_eq!(manager.collateral(), Some(&collateral()));
    }

    #[tokio::test]
    async fn classification_is_sticky() {
        let (mut manager, state) = setup();
        give_local_collateral(&state, 0);
        manager.manage_state().await;
        assert_eq!(manager.kind(), NodeKind::Local);

        state.collateral_source.set_local_collateral(None);
        manager.manage_state().await;
        manager.manage_state().await;
        assert_eq!(manager.kind(), NodeKind::Local);
        assert_eq!(state.connectivity.inbound_checks().len(), 1);
    }
}

mod remote {
    use super::*;

    #[tokio::test]
    async fn it_starts_a_matching_registered_node() {
        let (mut manager, state) = setup();
        state.registry.insert_entry(registry_entry(&manager, ServiceNodeStatus::Enabled));
        manager.manage_state().await;
        assert_eq!(manager.state(), &ActiveNodeState::Started);
        assert_eq!(manager.kind(), NodeKind::Remote);
        assert!(manager.is_pinger_enabled());
        assert_eq!(manager.collateral(), Some(&collateral()));
        assert!(manager.last_ineligibility_reason().is_none());
        assert_eq!(state.registry.revalidate_count(), 1);
        // Nothing is published for a remote node
        assert!(state.registry.published().is_empty());
        assert_eq!(state.relay.registration_count(), 0);
        assert_eq!(state.relay.keep_alive_count(), 1);
    }

    #[tokio::test]
    async fn watchdog_expired_is_startable() {
        let (mut manager, state) = setup();
        state
            .registry
            .insert_entry(registry_entry(&manager, ServiceNodeStatus::WatchdogExpired));
        manager.manage_state().await;
        assert_eq!(manager.state(), &ActiveNodeState::Started);
    }

    #[tokio::test]
    async fn it_requires_a_registry_entry() {
        let (mut manager, state) = setup();
        manager.manage_state().await;
        assert_eq!(manager.state(), &not_capable(NotCapableReason::NotInRegistry));
        assert!(!manager.is_pinger_enabled());
        assert_eq!(
            manager.last_ineligibility_reason(),
            Some("Service node not in registry".to_string())
        );
        assert!(state.relay.messages().is_empty());
    }

    #[tokio::test]
    async fn it_rejects_a_protocol_version_mismatch() {
        let (mut manager, state) = setup();
        let mut entry = registry_entry(&manager, ServiceNodeStatus::Enabled);
        entry.protocol_version = SERVICE_NODE_PROTOCOL_VERSION - 1;
        state.registry.insert_entry(entry);
        manager.manage_state().await;
        assert_eq!(
            manager.state(),
            &not_capable(NotCapableReason::ProtocolVersionMismatch {
                expected: SERVICE_NODE_PROTOCOL_VERSION,
                found: SERVICE_NODE_PROTOCOL_VERSION - 1,
            })
        );
        assert!(!manager.is_pinger_enabled());
    }

    #[tokio::test]
    async fn it_rejects_an_address_mismatch() {
        let (mut manager, state) = setup();
        let mut entry = registry_entry(&manager, ServiceNodeStatus::Enabled);
        entry.address = "8.8.4.4:18150".parse().unwrap();
        state.registry.insert_entry(entry);
        manager.manage_state().await;
        assert_eq!(manager.state(), &not_capable(NotCapableReason::AddressMismatch));
    }

    #[tokio::test]
    async fn it_rejects_a_collateral_mismatch_for_a_local_node() {
        let (mut manager, state) = setup();
        give_local_collateral(&state, 100);
        let mut entry = registry_entry(&manager, ServiceNodeStatus::Enabled);
        entry.collateral = CollateralRef::new([0x22; 32], 0);
        state.registry.insert_entry(entry);
        manager.manage_state_initial().await;
        assert_eq!(manager.kind(), NodeKind::Local);
        manager.manage_state_remote().await;
        assert_eq!(manager.state(), &not_capable(NotCapableReason::CollateralMismatch));
    }

    #[tokio::test]
    async fn a_remote_node_adopts_the_registered_collateral() {
        let (mut manager, state) = setup();
        let mut entry = registry_entry(&manager, ServiceNodeStatus::Enabled);
        entry.collateral = CollateralRef::new([0x22; 32], 0);
        state.registry.insert_entry(entry);
        manager.manage_state().await;
        assert_eq!(manager.state(), &ActiveNodeState::Started);
        assert_eq!(manager.collateral(), Some(&CollateralRef::new([0x22; 32], 0)));
    }

    #[tokio::test]
    async fn a_remote_node_rejects_a_changed_registry_collateral() {
        let (mut manager, state) = setup();
        state.registry.insert_entry(registry_entry(&manager, ServiceNodeStatus::Enabled));
        manager.manage_state().await;
        assert_eq!(manager.state(), &ActiveNodeState::Started);
        assert_eq!(manager.kind(), NodeKind::Remote);

        let mut entry = registry_entry(&manager, ServiceNodeStatus::Enabled);
        entry.collateral = CollateralRef::new([0x22; 32], 0);
        state.registry.insert_entry(entry);
        manager.manage_state().await;
        assert_eq!(manager.state(), &not_capable(NotCapableReason::CollateralMismatch));
        assert_eq!(manager.collateral(), Some(&collateral()));
    }

    #[tokio::test]
    async fn it_rejects_a_status_that_cannot_start() {
        let (mut manager, state) = setup();
        state
            .registry
            .insert_entry(registry_entry(&manager, ServiceNodeStatus::PreEnabled));
        manager.manage_state().await;
        assert_eq!(
            manager.state(),
            &not_capable(NotCapableReason::NotStartableStatus(ServiceNodeStatus::PreEnabled))
        );
        assert_eq!(
            manager.last_ineligibility_reason(),
            Some("Service node in PRE_ENABLED state".to_string())
        );
    }

    #[tokio::test]
    async fn a_started_node_stops_when_banned() {
        let (mut manager, state) = setup();
        state.registry.insert_entry(registry_entry(&manager, ServiceNodeStatus::Enabled));
        manager.manage_state().await;
        assert_eq!(manager.state(), &ActiveNodeState::Started);

        state
            .registry
            .set_status(manager.public_key(), ServiceNodeStatus::PoseBanned);
        manager.manage_state().await;
        assert_eq!(
            manager.state(),
            &not_capable(NotCapableReason::NotStartableStatus(ServiceNodeStatus::PoseBanned))
        );
    }
}

mod local {
    use super::*;

    #[tokio::test]
    async fn it_registers_and_starts() {
        let (mut manager, state) = setup();
        give_local_collateral(&state, 100);
        manager.manage_state().await;

        assert_eq!(manager.state(), &ActiveNodeState::Started);
        assert_eq!(manager.kind(), NodeKind::Local);
        assert!(manager.is_pinger_enabled());
        assert!(manager.license().is_some());

        let published = state.registry.published();
        assert_eq!(published.len(), 1);
        let registration = &published[0];
        assert_eq!(registration.collateral(), &collateral());
        assert_eq!(registration.collateral_key(), &collateral_key());
        assert_eq!(registration.service_address(), &service_address());
        assert!(registration.license().is_some());
        assert!(registration.is_valid_signature());
        assert_eq!(state.registry.notify_count(), 1);
        assert_eq!(state.relay.registration_count(), 1);
        assert_eq!(state.license_authority.call_count(), 1);
        // The first keep-alive goes out in the same cycle
        assert_eq!(state.relay.keep_alive_count(), 1);

        // Once started, the registry entry keeps it started without re-registering
        manager.manage_state().await;
        assert_eq!(manager.state(), &ActiveNodeState::Started);
        assert_eq!(state.registry.published().len(), 1);
        assert_eq!(state.relay.registration_count(), 1);
    }

    #[tokio::test]
    async fn it_waits_for_collateral_depth() {
        let (mut manager, state) = setup_with(ActiveNodeConfig {
            min_collateral_confirmations: Some(5),
            ..enabled_config()
        });
        state.connectivity.set_local_address(Some(service_address()));
        give_local_collateral(&state, 4);
        manager.manage_state().await;
        assert_eq!(manager.state(), &ActiveNodeState::InputTooNew {
            confirmations: 4,
            required: 5
        });
        assert!(manager.last_ineligibility_reason().unwrap().contains('4'));
        assert!(state.registry.published().is_empty());
        assert_eq!(state.license_authority.call_count(), 0);

        state.collateral_source.set_confirmations(collateral(), 5);
        manager.manage_state().await;
        assert_eq!(manager.state(), &ActiveNodeState::Started);
    }

    #[tokio::test]
    async fn it_reports_signing_failures() {
        let (mut manager, state) = setup();
        give_local_collateral(&state, 100);
        state.signer.set_fail(true);
        manager.manage_state().await;
        assert!(matches!(
            manager.state(),
            ActiveNodeState::NotCapable(NotCapableReason::RegistrationFailed(_))
        ));
        assert!(state.registry.published().is_empty());
        assert!(state.relay.messages().is_empty());
        assert!(!manager.is_pinger_enabled());
    }

    #[tokio::test]
    async fn it_requires_a_payee() {
        let (mut manager, state) = setup();
        state.collateral_source.set_local_collateral(Some(LocalCollateral {
            collateral: collateral(),
            address: collateral_key(),
            payee: Some(PayeeDestination::new(vec![])),
        }));
        state.collateral_source.set_confirmations(collateral(), 100);
        manager.manage_state().await;
        assert_eq!(manager.state(), &not_capable(NotCapableReason::NoPayeeDestination));
        assert_eq!(state.license_authority.call_count(), 0);
    }

    #[tokio::test]
    async fn it_requires_a_license() {
        let (mut manager, state) = setup();
        give_local_collateral(&state, 100);
        state
            .license_authority
            .set_response(Err(LicenseRejection::Rejected("collateral too small".to_string())));
        manager.manage_state().await;
        assert_eq!(
            manager.state(),
            &not_capable(NotCapableReason::NotAuthorized {
                collateral: collateral(),
                reason: "License rejected: collateral too small".to_string(),
            })
        );
        assert!(manager.license().is_none());
        assert!(!manager.is_pinger_enabled());
        assert!(state.registry.published().is_empty());
        assert!(state.relay.messages().is_empty());
    }

    #[tokio::test]
    async fn an_already_registered_local_node_starts_without_publishing() {
        let (mut manager, state) = setup();
        give_local_collateral(&state, 100);
        state.registry.insert_entry(registry_entry(&manager, ServiceNodeStatus::Enabled));
        manager.manage_state().await;
        assert_eq!(manager.state(), &ActiveNodeState::Started);
        assert_eq!(manager.kind(), NodeKind::Local);
        assert!(state.registry.published().is_empty());
        assert_eq!(state.license_authority.call_count(), 0);
        assert_eq!(state.relay.registration_count(), 0);
    }
}

mod keep_alive {
    use super::*;

    async fn started_remote(config: ActiveNodeConfig) -> (Manager, MockServicesState) {
        let (mut manager, state) = setup_with(config);
        state.connectivity.set_local_address(Some(service_address()));
        state.registry.insert_entry(registry_entry(&manager, ServiceNodeStatus::Enabled));
        manager.manage_state().await;
        assert_eq!(manager.state(), &ActiveNodeState::Started);
        (manager, state)
    }

    #[tokio::test]
    async fn it_requires_the_pinger() {
        let (mut manager, state) = setup();
        let err = manager.send_keep_alive().await.unwrap_err();
        assert!(matches!(err, KeepAliveError::PingerDisabled));
        assert_eq!(manager.state(), &ActiveNodeState::Initial);
        assert!(state.relay.messages().is_empty());
    }

    #[tokio::test]
    async fn it_is_rate_limited() {
        let (mut manager, state) = started_remote(enabled_config()).await;
        assert_eq!(state.registry.keep_alives().len(), 1);

        let err = manager.send_keep_alive().await.unwrap_err();
        assert!(matches!(err, KeepAliveError::TooEarly));
        assert_eq!(state.registry.keep_alives().len(), 1);
        assert_eq!(state.relay.keep_alive_count(), 1);
        assert_eq!(manager.state(), &ActiveNodeState::Started);
    }

    #[tokio::test]
    async fn it_sends_again_once_the_interval_passes() {
        let (mut manager, state) = started_remote(ActiveNodeConfig {
            min_keep_alive_interval: Some(Duration::from_secs(0)),
            ..enabled_config()
        })
        .await;
        manager.send_keep_alive().await.unwrap();
        assert_eq!(state.registry.keep_alives().len(), 2);
        assert_eq!(state.relay.keep_alive_count(), 2);
        assert!(state.relay.messages().iter().all(|m| m.is_valid_signature()));
    }

    #[tokio::test]
    async fn it_stops_when_no_longer_registered() {
        let (mut manager, state) = started_remote(enabled_config()).await;
        state.registry.clear();
        let err = manager.send_keep_alive().await.unwrap_err();
        assert!(matches!(err, KeepAliveError::NotInRegistry));
        assert_eq!(manager.state(), &not_capable(NotCapableReason::NotInRegistry));
    }

    #[tokio::test]
    async fn it_keeps_an_existing_not_capable_reason() {
        let (mut manager, state) = started_remote(enabled_config()).await;
        state
            .registry
            .set_status(manager.public_key(), ServiceNodeStatus::Expired);
        manager.manage_state().await;
        let expected = not_capable(NotCapableReason::NotStartableStatus(ServiceNodeStatus::Expired));
        assert_eq!(manager.state(), &expected);

        state.registry.clear();
        assert!(manager.send_keep_alive().await.is_err());
        assert_eq!(manager.state(), &expected);
    }

    #[tokio::test]
    async fn signing_failures_leave_the_state_alone() {
        let (mut manager, state) = started_remote(ActiveNodeConfig {
            min_keep_alive_interval: Some(Duration::from_secs(0)),
            ..enabled_config()
        })
        .await;
        state.signer.set_fail(true);
        let err = manager.send_keep_alive().await.unwrap_err();
        assert!(matches!(err, KeepAliveError::Signing(_)));
        assert_eq!(manager.state(), &ActiveNodeState::Started);
        assert_eq!(state.registry.keep_alives().len(), 1);
    }

    #[tokio::test]
    async fn it_echoes_the_license_terms() {
        let (mut manager, state) = setup();
        give_local_collateral(&state, 100);
        manager.manage_state().await;
        let license = manager.license().unwrap().terms();
        let keep_alives = state.registry.keep_alives();
        assert_eq!(keep_alives.len(), 1);
        assert_eq!(keep_alives[0].license_terms(), Some(&license));
    }
}
