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

use async_trait::async_trait;

use crate::types::{CollateralRef, PayeeDestination, PublicKey};

/// Reports whether the local chain has caught up with the network.
#[async_trait]
pub trait SyncOracle: Send + Sync {
    async fn is_synced(&self) -> bool;
}

/// A collateral output held by the local wallet that is eligible to back a service node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalCollateral {
    pub collateral: CollateralRef,
    /// The wallet key that controls the collateral output
    pub address: PublicKey,
    /// Rewards destination, taken from the change output of the collateral transaction
    pub payee: Option<PayeeDestination>,
}

/// Access to collateral held by the local wallet and to its depth in the chain.
#[async_trait]
pub trait CollateralSource: Send + Sync {
    /// Returns the local collateral output, if this node holds one
    async fn resolve_local_collateral(&self) -> Option<LocalCollateral>;

    /// The number of blocks mined on top of (and including) the block containing the collateral output. Zero if the
    /// output is unconfirmed or unknown.
    async fn collateral_confirmations(&self, collateral: &CollateralRef) -> u64;
}
