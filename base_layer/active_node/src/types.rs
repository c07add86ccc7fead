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

use std::fmt;

use serde::{Deserialize, Serialize};
use tari_crypto::ristretto::{RistrettoPublicKey, RistrettoSchnorr, RistrettoSecretKey};
use tari_utilities::hex::{from_hex, to_hex, HexError};

pub type PublicKey = RistrettoPublicKey;
pub type PrivateKey = RistrettoSecretKey;
pub type Signature = RistrettoSchnorr;

/// Length of a transaction hash in bytes
pub const TX_HASH_LENGTH: usize = 32;

/// A reference to the transaction output that funds a service node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollateralRef {
    tx_hash: [u8; TX_HASH_LENGTH],
    output_index: u32,
}

impl CollateralRef {
    pub fn new(tx_hash: [u8; TX_HASH_LENGTH], output_index: u32) -> Self {
        Self { tx_hash, output_index }
    }

    pub fn from_hex(tx_hash: &str, output_index: u32) -> Result<Self, HexError> {
        let bytes = from_hex(tx_hash)?;
        let tx_hash = <[u8; TX_HASH_LENGTH]>::try_from(bytes.as_slice()).map_err(|_| HexError::LengthError {})?;
        Ok(Self::new(tx_hash, output_index))
    }

    pub fn tx_hash(&self) -> &[u8; TX_HASH_LENGTH] {
        &self.tx_hash
    }

    pub fn output_index(&self) -> u32 {
        self.output_index
    }

    /// Abbreviated form used in diagnostics, e.g. `1f2e3d4c5b6a7988-1`
    pub fn to_short_string(&self) -> String {
        let hex = to_hex(&self.tx_hash);
        format!("{}-{}", &hex[..16], self.output_index)
    }

    pub(crate) fn to_bytes(self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(TX_HASH_LENGTH + 4);
        buf.extend_from_slice(&self.tx_hash);
        buf.extend_from_slice(&self.output_index.to_le_bytes());
        buf
    }
}

impl fmt::Display for CollateralRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", to_hex(&self.tx_hash), self.output_index)
    }
}

/// The destination that service node rewards are paid to. This is the encoded script of the change output of the
/// collateral transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayeeDestination(Vec<u8>);

impl PayeeDestination {
    pub fn new(script: Vec<u8>) -> Self {
        Self(script)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Display for PayeeDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_hex(&self.0))
    }
}
