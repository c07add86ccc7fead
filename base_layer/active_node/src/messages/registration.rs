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

use chrono::{DateTime, Utc};
use tari_utilities::ByteArray;

use crate::{
    error::RegistrationError,
    messages::LicenseCertificate,
    signing::{verify_signature, MessageSigner},
    types::{CollateralRef, PayeeDestination, PublicKey, Signature},
    ServiceNodeIdentity,
    SERVICE_NODE_PROTOCOL_VERSION,
};

/// Announces that the holder of `collateral`, controlled by `collateral_key`, operates a service node at
/// `service_address`.
///
/// The signature covers every field except the license certificate, which is granted after signing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceNodeRegistration {
    collateral: CollateralRef,
    collateral_key: PublicKey,
    service_address: SocketAddr,
    payee: Option<PayeeDestination>,
    public_key: PublicKey,
    protocol_version: u32,
    timestamp: DateTime<Utc>,
    signature: Signature,
    license: Option<LicenseCertificate>,
}

impl ServiceNodeRegistration {
    pub fn create(
        collateral: CollateralRef,
        collateral_key: PublicKey,
        service_address: SocketAddr,
        payee: Option<PayeeDestination>,
        identity: &ServiceNodeIdentity,
        signer: &dyn MessageSigner,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, RegistrationError> {
        if service_address.ip().is_unspecified() || service_address.port() == 0 {
            return Err(RegistrationError::InvalidServiceAddress(service_address));
        }
        let public_key = identity.public_key().clone();
        let message = Self::signing_message(
            &collateral,
            &collateral_key,
            &service_address,
            payee.as_ref(),
            &public_key,
            SERVICE_NODE_PROTOCOL_VERSION,
            &timestamp,
        );
        let signature = signer.sign(identity.secret_key(), &message)?;
        Ok(Self {
            collateral,
            collateral_key,
            service_address,
            payee,
            public_key,
            protocol_version: SERVICE_NODE_PROTOCOL_VERSION,
            timestamp,
            signature,
            license: None,
        })
    }

    fn signing_message(
        collateral: &CollateralRef,
        collateral_key: &PublicKey,
        service_address: &SocketAddr,
        payee: Option<&PayeeDestination>,
        public_key: &PublicKey,
        protocol_version: u32,
        timestamp: &DateTime<Utc>,
    ) -> Vec<u8> {
        let mut buf = collateral.to_bytes();
        buf.extend_from_slice(collateral_key.as_bytes());
        buf.extend_from_slice(service_address.to_string().as_bytes());
        if let Some(payee) = payee {
            buf.extend_from_slice(payee.as_bytes());
        }
        buf.extend_from_slice(public_key.as_bytes());
        buf.extend_from_slice(&protocol_version.to_le_bytes());
        buf.extend_from_slice(&timestamp.timestamp().to_le_bytes());
        buf
    }

    pub fn is_valid_signature(&self) -> bool {
        let message = Self::signing_message(
            &self.collateral,
            &self.collateral_key,
            &self.service_address,
            self.payee.as_ref(),
            &self.public_key,
            self.protocol_version,
            &self.timestamp,
        );
        verify_signature(&self.public_key, &self.signature, &message)
    }

    pub fn collateral(&self) -> &CollateralRef {
        &self.collateral
    }

    /// The wallet key that controls the collateral output
    pub fn collateral_key(&self) -> &PublicKey {
        &self.collateral_key
    }

    pub fn service_address(&self) -> &SocketAddr {
        &self.service_address
    }

    /// The reward destination, if the collateral transaction provided a usable one
    pub fn payee_destination(&self) -> Option<&PayeeDestination> {
        self.payee.as_ref().filter(|p| p.is_valid())
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn protocol_version(&self) -> u32 {
        self.protocol_version
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn license(&self) -> Option<&LicenseCertificate> {
        self.license.as_ref()
    }

    pub fn attach_license(&mut self, license: LicenseCertificate) {
        self.license = Some(license);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{error::SigningError, signing::SchnorrMessageSigner, types::PrivateKey};

    struct FailingSigner;

    impl MessageSigner for FailingSigner {
        fn sign(&self, _: &PrivateKey, _: &[u8]) -> Result<Signature, SigningError> {
            Err(SigningError::SignatureFailed("no key".to_string()))
        }
    }

    fn create(address: &str, payee: Option<PayeeDestination>) -> Result<ServiceNodeRegistration, RegistrationError> {
        ServiceNodeRegistration::create(
            CollateralRef::new([7u8; 32], 0),
            ServiceNodeIdentity::random().public_key().clone(),
            address.parse().unwrap(),
            payee,
            &ServiceNodeIdentity::random(),
            &SchnorrMessageSigner,
            Utc::now(),
        )
    }

    #[test]
    fn it_creates_a_signed_registration() {
        let registration = create("8.8.8.8:18189", Some(PayeeDestination::new(vec![1, 2, 3]))).unwrap();
        assert!(registration.is_valid_signature());
        assert_eq!(registration.protocol_version(), SERVICE_NODE_PROTOCOL_VERSION);
        assert!(registration.payee_destination().is_some());
        assert!(registration.license().is_none());
    }

    #[test]
    fn license_does_not_affect_signature() {
        let mut registration = create("8.8.8.8:18189", None).unwrap();
        registration.attach_license(LicenseCertificate::new(1, 2, vec![3]));
        assert!(registration.is_valid_signature());
        assert_eq!(registration.license().unwrap().version(), 2);
    }

    #[test]
    fn tampering_invalidates_signature() {
        let mut registration = create("8.8.8.8:18189", None).unwrap();
        registration.service_address = "8.8.4.4:18189".parse().unwrap();
        assert!(!registration.is_valid_signature());
    }

    #[test]
    fn collateral_key_is_signed() {
        let mut registration = create("8.8.8.8:18189", None).unwrap();
        registration.collateral_key = ServiceNodeIdentity::random().public_key().clone();
        assert!(!registration.is_valid_signature());
    }

    #[test]
    fn empty_payee_is_not_a_destination() {
        let registration = create("8.8.8.8:18189", Some(PayeeDestination::new(vec![]))).unwrap();
        assert!(registration.payee_destination().is_none());
        let registration = create("8.8.8.8:18189", None).unwrap();
        assert!(registration.payee_destination().is_none());
    }

    #[test]
    fn it_rejects_unusable_addresses() {
        assert!(matches!(
            create("0.0.0.0:18189", None),
            Err(RegistrationError::InvalidServiceAddress(_))
        ));
        assert!(matches!(
            create("8.8.8.8:0", None),
            Err(RegistrationError::InvalidServiceAddress(_))
        ));
    }

    #[test]
    fn signer_errors_propagate() {
        let err = ServiceNodeRegistration::create(
            CollateralRef::new([7u8; 32], 0),
            ServiceNodeIdentity::random().public_key().clone(),
            "8.8.8.8:18189".parse().unwrap(),
            None,
            &ServiceNodeIdentity::random(),
            &FailingSigner,
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, RegistrationError::Signing(_)));
    }
}
