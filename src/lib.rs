//! Password strength analysis library
//!
//! This library scores a candidate password, explains its weaknesses,
//! estimates how long a brute-force attack would take and suggests a
//! stronger variant of the same password.
//!
//! # Features
//!
//! - `async` (default): Enables [`analyze_tx`] to deliver reports over a tokio channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_COMMON_PASSWORDS_PATH`: Custom path to the common password file
//!   read by [`CommonPasswords::from_env`]
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_analyzer::{Analyzer, CommonPasswords};
//! use secrecy::SecretString;
//!
//! // Load the common password list (once at startup)
//! let common = CommonPasswords::from_env().expect("Failed to load common passwords");
//! let analyzer = Analyzer::new().with_common_passwords(&common);
//!
//! // Analyze a password, requiring at least one day to crack
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = analyzer.analyze(&password, Some(86_400.0)).expect("valid input");
//!
//! println!("Score: {}", report.score);
//! println!("Strength: {}", report.strength);
//! println!("Time to crack: {}", report.crack_time.formatted);
//! ```

// Internal modules
mod classifier;
mod corpus;
mod evaluator;
mod sections;
mod types;

pub mod advice;

// Public API
pub use classifier::{
    ClassifierError, ClassifierOutcome, FeatureVector, StrengthClassifier, ML_BOOST_POINTS,
};
pub use corpus::{CommonPasswords, CorpusError, CORPUS_PATH_ENV};
pub use evaluator::{analyze_password_strength, parse_min_crack_seconds, AnalysisError, Analyzer};
pub use sections::{format_duration, GUESSES_PER_SECOND};
pub use types::{
    AnalysisReport, CharacterProfile, CrackTimeEstimate, PasswordStrength, WeaknessFlags,
    WeaknessReason,
};

#[cfg(feature = "async")]
pub use evaluator::analyze_tx;
