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

//! In-memory collaborators for exercising the active node state machine without a chain, wallet or network.

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc,
        RwLock,
    },
    time::Duration,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::*;

use crate::{
    error::{LicenseRejection, SigningError},
    messages::{LicenseCertificate, ServiceNodeKeepAlive, ServiceNodeMessage, ServiceNodeRegistration},
    services::{
        ActiveNodeServices,
        ActivePeer,
        CollateralSource,
        LicenseAuthority,
        LocalCollateral,
        MessageRelay,
        PeerConnectivity,
        ServiceNodeRegistry,
        ServiceNodeRegistryEntry,
        ServiceNodeStatus,
        ServiceSpecification,
        SyncOracle,
    },
    signing::{MessageSigner, SchnorrMessageSigner},
    types::{CollateralRef, PrivateKey, PublicKey, Signature},
};

const LOG_TARGET: &str = "c::an::mocks";

pub struct MockServiceSpecification;

impl ServiceSpecification for MockServiceSpecification {
    type CollateralSource = MockCollateralSource;
    type LicenseAuthority = MockLicenseAuthority;
    type MessageRelay = MockMessageRelay;
    type MessageSigner = MockMessageSigner;
    type PeerConnectivity = MockPeerConnectivity;
    type Registry = MockRegistry;
    type SyncOracle = MockSyncOracle;
}

/// Handles onto the shared state of every mock, for driving and inspecting them from a test
#[derive(Clone, Default)]
pub struct MockServicesState {
    pub sync_oracle: MockSyncOracle,
    pub collateral_source: MockCollateralSource,
    pub connectivity: MockPeerConnectivity,
    pub registry: MockRegistry,
    pub license_authority: MockLicenseAuthority,
    pub relay: MockMessageRelay,
    pub signer: MockMessageSigner,
}

pub fn create_mock_services() -> (ActiveNodeServices<MockServiceSpecification>, MockServicesState) {
    let state = MockServicesState::default();
    let services = ActiveNodeServices {
        sync_oracle: state.sync_oracle.clone(),
        collateral_source: state.collateral_source.clone(),
        connectivity: state.connectivity.clone(),
        registry: state.registry.clone(),
        license_authority: state.license_authority.clone(),
        relay: state.relay.clone(),
        signer: state.signer.clone(),
    };
    (services, state)
}

#[derive(Debug, Clone)]
pub struct MockSyncOracle {
    synced: Arc<AtomicBool>,
}

impl Default for MockSyncOracle {
    fn default() -> Self {
        Self {
            synced: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl MockSyncOracle {
    pub fn set_synced(&self, synced: bool) {
        self.synced.store(synced, Ordering::SeqCst);
    }
}

#[async_trait]
impl SyncOracle for MockSyncOracle {
    async fn is_synced(&self) -> bool {
        self.synced.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockCollateralSource {
    local: Arc<RwLock<Option<LocalCollateral>>>,
    confirmations: Arc<RwLock<HashMap<CollateralRef, u64>>>,
    resolve_calls: Arc<AtomicUsize>,
}

impl MockCollateralSource {
    pub fn set_local_collateral(&self, local: Option<LocalCollateral>) {
        *self.local.write().unwrap() = local;
    }

    pub fn set_confirmations(&self, collateral: CollateralRef, confirmations: u64) {
        self.confirmations.write().unwrap().insert(collateral, confirmations);
    }

    pub fn resolve_call_count(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CollateralSource for MockCollateralSource {
    async fn resolve_local_collateral(&self) -> Option<LocalCollateral> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        self.local.read().unwrap().clone()
    }

    async fn collateral_confirmations(&self, collateral: &CollateralRef) -> u64 {
        self.confirmations
            .read()
            .unwrap()
            .get(collateral)
            .copied()
            .unwrap_or_default()
    }
}

#[derive(Debug, Default)]
struct MockConnectivityState {
    peers: Vec<ActivePeer>,
    local_address: Option<SocketAddr>,
    addresses_seen_by_peer: HashMap<SocketAddr, SocketAddr>,
    inbound_fails: bool,
    inbound_checks: Vec<SocketAddr>,
}

#[derive(Debug, Clone, Default)]
pub struct MockPeerConnectivity {
    state: Arc<RwLock<MockConnectivityState>>,
}

impl MockPeerConnectivity {
    pub fn set_local_address(&self, address: Option<SocketAddr>) {
        self.state.write().unwrap().local_address = address;
    }

    /// Adds a connected peer that sees this node at `seen_as`
    pub fn add_peer(&self, peer: SocketAddr, handshake_complete: bool, seen_as: Option<SocketAddr>) {
        let mut lock = self.state.write().unwrap();
        lock.peers.push(ActivePeer {
            address: peer,
            handshake_complete,
        });
        if let Some(addr) = seen_as {
            lock.addresses_seen_by_peer.insert(peer, addr);
        }
    }

    pub fn set_inbound_fails(&self, fails: bool) {
        self.state.write().unwrap().inbound_fails = fails;
    }

    pub fn inbound_checks(&self) -> Vec<SocketAddr> {
        self.state.read().unwrap().inbound_checks.clone()
    }
}

#[async_trait]
impl PeerConnectivity for MockPeerConnectivity {
    async fn active_peers(&self) -> Vec<ActivePeer> {
        self.state.read().unwrap().peers.clone()
    }

    async fn resolve_external_address(&self, peer: Option<&SocketAddr>) -> Option<SocketAddr> {
        let lock = self.state.read().unwrap();
        match peer {
            Some(peer) => lock.addresses_seen_by_peer.get(peer).copied(),
            None => lock.local_address,
        }
    }

    async fn check_inbound_connection(&self, address: &SocketAddr) -> bool {
        let mut lock = self.state.write().unwrap();
        lock.inbound_checks.push(*address);
        !lock.inbound_fails
    }
}

#[derive(Debug, Default)]
struct MockRegistryState {
    entries: Vec<ServiceNodeRegistryEntry>,
    published: Vec<ServiceNodeRegistration>,
    keep_alives: Vec<ServiceNodeKeepAlive>,
    revalidate_count: usize,
    notify_count: usize,
}

/// Published registrations are entered as [ServiceNodeStatus::Enabled].
#[derive(Debug, Clone, Default)]
pub struct MockRegistry {
    state: Arc<RwLock<MockRegistryState>>,
}

impl MockRegistry {
    pub fn insert_entry(&self, entry: ServiceNodeRegistryEntry) {
        let mut lock = self.state.write().unwrap();
        lock.entries.retain(|e| e.public_key != entry.public_key);
        lock.entries.push(entry);
    }

    pub fn set_status(&self, public_key: &PublicKey, status: ServiceNodeStatus) {
        let mut lock = self.state.write().unwrap();
        if let Some(entry) = lock.entries.iter_mut().find(|e| e.public_key == *public_key) {
            entry.status = status;
        }
    }

    pub fn clear(&self) {
        self.state.write().unwrap().entries.clear();
    }

    pub fn published(&self) -> Vec<ServiceNodeRegistration> {
        self.state.read().unwrap().published.clone()
    }

    pub fn keep_alives(&self) -> Vec<ServiceNodeKeepAlive> {
        self.state.read().unwrap().keep_alives.clone()
    }

    pub fn revalidate_count(&self) -> usize {
        self.state.read().unwrap().revalidate_count
    }

    pub fn notify_count(&self) -> usize {
        self.state.read().unwrap().notify_count
    }
}

#[async_trait]
impl ServiceNodeRegistry for MockRegistry {
    async fn revalidate(&self, _public_key: &PublicKey) {
        self.state.write().unwrap().revalidate_count += 1;
    }

    async fn lookup_by_key(&self, public_key: &PublicKey) -> Option<ServiceNodeRegistryEntry> {
        self.state
            .read()
            .unwrap()
            .entries
            .iter()
            .find(|e| e.public_key == *public_key)
            .cloned()
    }

    async fn has_entry(&self, collateral: &CollateralRef) -> bool {
        self.state
            .read()
            .unwrap()
            .entries
            .iter()
            .any(|e| e.collateral == *collateral)
    }

    async fn recent_keep_alive(&self, collateral: &CollateralRef, within: Duration, at: DateTime<Utc>) -> bool {
        self.state
            .read()
            .unwrap()
            .keep_alives
            .iter()
            .filter(|k| k.collateral() == collateral)
            .any(|k| (at - k.timestamp()).to_std().map(|elapsed| elapsed < within).unwrap_or(true))
    }

    async fn record_keep_alive(&self, keep_alive: &ServiceNodeKeepAlive) {
        self.state.write().unwrap().keep_alives.push(keep_alive.clone());
    }

    async fn publish(&self, registration: &ServiceNodeRegistration) {
        debug!(target: LOG_TARGET, "Publishing registration for {}", registration.collateral());
        let entry = ServiceNodeRegistryEntry {
            public_key: registration.public_key().clone(),
            protocol_version: registration.protocol_version(),
            address: *registration.service_address(),
            collateral: *registration.collateral(),
            status: ServiceNodeStatus::Enabled,
        };
        self.insert_entry(entry);
        self.state.write().unwrap().published.push(registration.clone());
    }

    async fn notify_updated(&self) {
        self.state.write().unwrap().notify_count += 1;
    }
}

#[derive(Debug, Clone)]
pub struct MockLicenseAuthority {
    response: Arc<RwLock<Result<LicenseCertificate, LicenseRejection>>>,
    calls: Arc<AtomicUsize>,
}

impl Default for MockLicenseAuthority {
    fn default() -> Self {
        Self {
            response: Arc::new(RwLock::new(Ok(LicenseCertificate::new(1, 1, vec![0xca, 0xfe])))),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl MockLicenseAuthority {
    pub fn set_response(&self, response: Result<LicenseCertificate, LicenseRejection>) {
        *self.response.write().unwrap() = response;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LicenseAuthority for MockLicenseAuthority {
    async fn authorize(&self, _registration: &ServiceNodeRegistration) -> Result<LicenseCertificate, LicenseRejection> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.read().unwrap().clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockMessageRelay {
    messages: Arc<RwLock<Vec<ServiceNodeMessage>>>,
}

impl MockMessageRelay {
    pub fn messages(&self) -> Vec<ServiceNodeMessage> {
        self.messages.read().unwrap().clone()
    }

    pub fn registration_count(&self) -> usize {
        self.messages()
            .iter()
            .filter(|m| matches!(m, ServiceNodeMessage::Registration(_)))
            .count()
    }

    pub fn keep_alive_count(&self) -> usize {
        self.messages()
            .iter()
            .filter(|m| matches!(m, ServiceNodeMessage::KeepAlive(_)))
            .count()
    }
}

#[async_trait]
impl MessageRelay for MockMessageRelay {
    async fn broadcast(&self, message: ServiceNodeMessage) {
        trace!(target: LOG_TARGET, "Relaying {}", message.as_type_str());
        self.messages.write().unwrap().push(message);
    }
}

/// Signs with [SchnorrMessageSigner] unless told to fail
#[derive(Debug, Clone, Default)]
pub struct MockMessageSigner {
    fail: Arc<AtomicBool>,
    calls: Arc<AtomicUsize>,
}

impl MockMessageSigner {
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MessageSigner for MockMessageSigner {
    fn sign(&self, secret_key: &PrivateKey, message: &[u8]) -> Result<Signature, SigningError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(SigningError::SignatureFailed("mock signer failure".to_string()));
        }
        SchnorrMessageSigner.sign(secret_key, message)
    }
}
