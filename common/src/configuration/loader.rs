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

//! # Application configuration
//!
//! Configuration is read with the `config` crate. A component's configuration struct implements [`SubConfigPath`] to
//! name the table it lives in, and derives `Serialize`, `Deserialize` and `Default` to gain a
//! [`DefaultConfigLoader`] implementation. Values present in the file override the struct's defaults key by key, so a
//! configuration file only needs to mention the settings an operator wants to change.
//!
//! ```toml
//! [active_node]
//!   network = "mainnet"
//!   enabled = true
//! ```

use config::Config;
use serde::{de::DeserializeOwned, Serialize};

use crate::ConfigurationError;

/// Names the configuration table that a struct is loaded from.
pub trait SubConfigPath {
    /// Main configuration section
    fn main_key_prefix() -> &'static str;
}

/// Configuration loader based on [`SubConfigPath`] with defaults.
///
/// Default values are taken from the `Default` impl of the struct, any value set in the supplied `Config` takes
/// precedence.
pub trait DefaultConfigLoader: SubConfigPath + Default + Serialize + DeserializeOwned {
    fn load_from(config: &Config) -> Result<Self, ConfigurationError> {
        let default = <Self as Default>::default();
        let buf = serde_json::to_string(&default)?;
        let value: config::Value = serde_json::from_str(buf.as_str())?;
        let merger = Config::builder()
            .set_default(Self::main_key_prefix(), value)?
            .add_source(config.clone())
            .build()?;
        Ok(merger.get(Self::main_key_prefix())?)
    }
}

impl<C> DefaultConfigLoader for C where C: SubConfigPath + Default + Serialize + DeserializeOwned {}
