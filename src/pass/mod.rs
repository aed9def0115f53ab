//! Password generation and output.

pub mod charset;
pub mod config;
mod generate;
pub mod output;

pub use charset::{ClassDictionary, DICTIONARY};
pub use config::Config;
pub use generate::Generator;
pub use output::{SecureBufWriter, write_batch};
