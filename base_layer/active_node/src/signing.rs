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

//! Signatures over service node messages.
//!
//! Messages are signed with a Schnorr signature over a Blake2b challenge that commits to a domain tag, the signer's
//! public key, the public nonce and the message bytes.

use blake2::{Blake2b512, Digest};
use rand::rngs::OsRng;
use tari_crypto::keys::{PublicKey as PublicKeyTrait, SecretKey as SecretKeyTrait};
use tari_utilities::ByteArray;

use crate::{
    error::SigningError,
    types::{PrivateKey, PublicKey, Signature},
};

const SIGNATURE_DOMAIN: &[u8] = b"com.tari.active_node.message_signature.v1";

/// Produces signatures over serialized service node messages.
pub trait MessageSigner: Send + Sync {
    fn sign(&self, secret_key: &PrivateKey, message: &[u8]) -> Result<Signature, SigningError>;
}

#[derive(Debug, Clone, Default)]
pub struct SchnorrMessageSigner;

impl MessageSigner for SchnorrMessageSigner {
    fn sign(&self, secret_key: &PrivateKey, message: &[u8]) -> Result<Signature, SigningError> {
        let public_key = PublicKey::from_secret_key(secret_key);
        let nonce = PrivateKey::random(&mut OsRng);
        let public_nonce = PublicKey::from_secret_key(&nonce);
        let challenge = signature_challenge(&public_key, &public_nonce, message);
        Signature::sign_raw_uniform(secret_key, nonce, &challenge)
            .map_err(|e| SigningError::SignatureFailed(e.to_string()))
    }
}

/// Verifies a signature produced by [SchnorrMessageSigner]
pub fn verify_signature(public_key: &PublicKey, signature: &Signature, message: &[u8]) -> bool {
    let challenge = signature_challenge(public_key, signature.get_public_nonce(), message);
    signature.verify_raw_uniform(public_key, &challenge)
}

fn signature_challenge(public_key: &PublicKey, public_nonce: &PublicKey, message: &[u8]) -> [u8; 64] {
    let hash = Blake2b512::new()
        .chain_update(SIGNATURE_DOMAIN)
        .chain_update(public_key.as_bytes())
        .chain_update(public_nonce.as_bytes())
        .chain_update(message)
        .finalize();
    let mut challenge = [0u8; 64];
    challenge.copy_from_slice(&hash);
    challenge
}
