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

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("Failed to produce a signature: {0}")]
    SignatureFailed(String),
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Service address {0} cannot be registered")]
    InvalidServiceAddress(SocketAddr),
    #[error("Could not sign registration: {0}")]
    Signing(#[from] SigningError),
}

#[derive(Debug, Error)]
pub enum KeepAliveError {
    #[error("Keep-alive pinger is disabled")]
    PingerDisabled,
    #[error("Service node is not in the registry")]
    NotInRegistry,
    #[error("Could not sign keep-alive: {0}")]
    Signing(#[from] SigningError),
    #[error("Too early to send a keep-alive")]
    TooEarly,
}

/// Returned by a [LicenseAuthority](crate::services::LicenseAuthority) that refuses or is unable to license a
/// registration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LicenseRejection {
    #[error("License rejected: {0}")]
    Rejected(String),
    #[error("Licensing service unavailable: {0}")]
    Unavailable(String),
}
