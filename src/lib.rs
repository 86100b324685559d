//! # play_resume
//!
//! Resume a halted staged rollout of an Android release on Google Play.
//!
//! The whole job is one edit transaction against the Android Publisher API:
//! open an edit, read the track, flip the named release from `halted` to
//! `inProgress` (when a `userFraction` is set) or `completed`, write the track
//! back and commit.
//!
//! ## Usage
//!
//! ```bash
//! play_resume --package-name com.example.app --version-name 1.2.3 \
//!             --google-account-json-file-path key.json --track production
//! ```
//!
//! As a library, implement [`play::PlayPublisher`] (or use
//! [`play::AndroidPublisherClient`]) and call [`resume::resume_release`].

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod credentials;
pub mod error;
pub mod play;
pub mod resume;

pub use cli::Args;
pub use credentials::{CredentialSource, CredentialSources, Credentials};
pub use error::{CredentialsError, PlayApiError, ResumeError, Result};
pub use play::{AndroidPublisherClient, PlayPublisher, Release, ReleaseStatus, Track};
pub use resume::{ResumeOutcome, ResumeRequest, resume_release};
