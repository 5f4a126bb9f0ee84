//! # User Generator
//!
//! Batch-generates back-office user accounts from a list of email addresses.
//! Each account gets a random salt and a random password; only the salted
//! digest of the password is kept.
//!
//! ## Pipeline
//!
//! - **Options**: flags are parsed into [`Cli`] and validated into [`Config`]
//! - **Reading**: the input file is split into non-empty lines
//! - **Generation**: [`UserGenerator`] builds one [`UserRecord`] per email
//! - **Writing**: records are rendered as a JSON array to stdout or a file
//!
//! ## Example
//!
//! ```no_run
//! use rand::rngs::OsRng;
//! use user_generator::{HashAlgorithm, UserGenerator};
//!
//! let mut generator = UserGenerator::new(HashAlgorithm::Sha256, OsRng);
//! let records = generator.generate_all(&["a@x.com", "b@x.com"][..]).unwrap();
//! println!("{}", user_generator::render(&records, true).unwrap());
//! ```

pub mod config;
pub mod error;
pub mod hash;
pub mod reader;
pub mod record;
pub mod writer;

pub use config::{Cli, Config, Output};
pub use error::{GeneratorError, Result};
pub use hash::HashAlgorithm;
pub use reader::{read_emails, split_emails};
pub use record::{random_token, UserGenerator, UserRecord};
pub use writer::{render, write_output, write_records};
