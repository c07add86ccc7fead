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

//! # Common network, configuration and logging utilities
//!
//! A single configuration file (usually `~/.tari/config.toml`) is used to manage settings for the service node
//! components running on a single system. Each component reads its own section from that file, with any missing
//! values taken from the component's `Default` implementation.
//!
//! ### Example - loading a section with defaults
//!
//! ```
//! # use config::Config;
//! # use serde::{Deserialize, Serialize};
//! # use tari_common::{DefaultConfigLoader, SubConfigPath};
//! #[derive(Serialize, Deserialize)]
//! struct MyNodeConfig {
//!     welcome_message: String,
//! }
//! impl Default for MyNodeConfig {
//!     fn default() -> Self {
//!         Self {
//!             welcome_message: "welcome to tari".into(),
//!         }
//!     }
//! }
//! impl SubConfigPath for MyNodeConfig {
//!     fn main_key_prefix() -> &'static str {
//!         "my_node"
//!     }
//! }
//!
//! let config = Config::builder().build().unwrap();
//! let my_config = MyNodeConfig::load_from(&config).unwrap();
//! assert_eq!(my_config.welcome_message, "welcome to tari");
//! ```

pub mod configuration;
pub use configuration::{ConfigurationError, DefaultConfigLoader, Network, SubConfigPath};

pub mod logging;

pub const DEFAULT_LOG_CONFIG: &str = "config/log4rs.yml";
