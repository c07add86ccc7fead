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

mod keep_alive;
pub use keep_alive::ServiceNodeKeepAlive;

mod license;
pub use license::{LicenseCertificate, LicenseTerms};

mod registration;
pub use registration::ServiceNodeRegistration;

/// A message relayed to the wider peer set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceNodeMessage {
    Registration(Box<ServiceNodeRegistration>),
    KeepAlive(ServiceNodeKeepAlive),
}

impl ServiceNodeMessage {
    pub fn as_type_str(&self) -> &'static str {
        match self {
            ServiceNodeMessage::Registration(_) => "Registration",
            ServiceNodeMessage::KeepAlive(_) => "KeepAlive",
        }
    }

    pub fn is_valid_signature(&self) -> bool {
        match self {
            ServiceNodeMessage::Registration(registration) => registration.is_valid_signature(),
            ServiceNodeMessage::KeepAlive(keep_alive) => keep_alive.is_valid_signature(),
        }
    }
}

impl From<ServiceNodeRegistration> for ServiceNodeMessage {
    fn from(registration: ServiceNodeRegistration) -> Self {
        ServiceNodeMessage::Registration(Box::new(registration))
    }
}

impl From<ServiceNodeKeepAlive> for ServiceNodeMessage {
    fn from(keep_alive: ServiceNodeKeepAlive) -> Self {
        ServiceNodeMessage::KeepAlive(keep_alive)
    }
}
