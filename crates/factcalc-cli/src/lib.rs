//! # factcalc-cli
//!
//! Interactive prompt, result presentation, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod prompt;

pub use presenter::CLIResultPresenter;
pub use prompt::{read_n, PromptError};
