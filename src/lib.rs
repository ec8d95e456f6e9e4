//! langprofile - character n-gram language identification
//!
//! Learns one frequency profile per language from labeled reference corpora
//! and classifies short samples by nearest profile. Distances are computed
//! only over the n-grams the sample actually contains, which keeps short
//! queries from being dominated by agreement on absent n-grams.
//!
//! ```rust,ignore
//! use langprofile::classifier::Model;
//! use langprofile::models::Language;
//!
//! let corpora = vec![
//!     (Language::new("en"), english_text),
//!     (Language::new("de"), german_text),
//! ];
//! let model = Model::build(3, &corpora)?;
//! match model.classify("the cat sat on the mat") {
//!     Ok(language) => println!("{language}"),
//!     Err(undecidable) => eprintln!("{undecidable}"),
//! }
//! ```

pub mod classifier;
pub mod config;
pub mod corpus;
pub mod evaluate;
pub mod models;
pub mod ngram;
pub mod preprocess;
pub mod profile;
pub mod reporters;
