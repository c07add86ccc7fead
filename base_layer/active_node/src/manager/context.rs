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

use crate::{
    messages::LicenseCertificate,
    state::{ActiveNodeState, NodeKind, StatusInfo},
    types::CollateralRef,
    ServiceNodeIdentity,
};

/// Everything the state machine knows about the local service node
#[derive(Debug)]
pub(crate) struct ActiveNodeContext {
    pub state: ActiveNodeState,
    pub kind: NodeKind,
    pub collateral: Option<CollateralRef>,
    pub service_address: Option<SocketAddr>,
    pub identity: ServiceNodeIdentity,
    pub pinger_enabled: bool,
    pub license: Option<LicenseCertificate>,
}

impl ActiveNodeContext {
    pub fn new(identity: ServiceNodeIdentity) -> Self {
        Self {
            state: ActiveNodeState::Initial,
            kind: NodeKind::Unknown,
            collateral: None,
            service_address: None,
            identity,
            pinger_enabled: false,
            license: None,
        }
    }

    pub fn status_info(&self) -> StatusInfo {
        StatusInfo {
            state: self.state.clone(),
            kind: self.kind,
            collateral: self.collateral,
            service_address: self.service_address,
            pinger_enabled: self.pinger_enabled,
        }
    }
}
