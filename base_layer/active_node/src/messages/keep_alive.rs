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

use chrono::{DateTime, Utc};
use tari_utilities::ByteArray;

use crate::{
    error::SigningError,
    messages::{LicenseCertificate, LicenseTerms},
    signing::{verify_signature, MessageSigner},
    types::{CollateralRef, PublicKey, Signature},
    ServiceNodeIdentity,
};

/// Periodic proof that a registered service node is still running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceNodeKeepAlive {
    collateral: CollateralRef,
    public_key: PublicKey,
    timestamp: DateTime<Utc>,
    license_terms: Option<LicenseTerms>,
    signature: Signature,
}

impl ServiceNodeKeepAlive {
    pub fn create(
        collateral: CollateralRef,
        license: Option<&LicenseCertificate>,
        identity: &ServiceNodeIdentity,
        signer: &dyn MessageSigner,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, SigningError> {
        let public_key = identity.public_key().clone();
        let license_terms = license.map(LicenseCertificate::terms);
        let message = Self::signing_message(&collateral, &public_key, &timestamp, license_terms.as_ref());
        let signature = signer.sign(identity.secret_key(), &message)?;
        Ok(Self {
            collateral,
            public_key,
            timestamp,
            license_terms,
            signature,
        })
    }

    fn signing_message(
        collateral: &CollateralRef,
        public_key: &PublicKey,
        timestamp: &DateTime<Utc>,
        license_terms: Option<&LicenseTerms>,
    ) -> Vec<u8> {
        let mut buf = collateral.to_bytes();
        buf.extend_from_slice(public_key.as_bytes());
        buf.extend_from_slice(&timestamp.timestamp().to_le_bytes());
        if let Some(terms) = license_terms {
            buf.extend_from_slice(&terms.period.to_le_bytes());
            buf.extend_from_slice(&terms.version.to_le_bytes());
        }
        buf
    }

    pub fn is_valid_signature(&self) -> bool {
        let message = Self::signing_message(
            &self.collateral,
            &self.public_key,
            &self.timestamp,
            self.license_terms.as_ref(),
        );
        verify_signature(&self.public_key, &self.signature, &message)
    }

    pub fn collateral(&self) -> &CollateralRef {
        &self.collateral
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn license_terms(&self) -> Option<&LicenseTerms> {
        self.license_terms.as_ref()
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}
