//! Operator consent prompts.

use inquire::Confirm;
use log::info;

use crate::error::SetupError;

/// Yes/no consent source for the stages.
///
/// The default answer is always No: anything other than an explicit yes is a
/// decline, and a decline is not an error.
pub trait Prompter {
    fn confirm(&self, message: &str) -> Result<bool, SetupError>;
}

/// Interactive prompt on the controlling terminal.
pub struct InteractivePrompter;

impl Prompter for InteractivePrompter {
    fn confirm(&self, message: &str) -> Result<bool, SetupError> {
        Ok(Confirm::new(message).with_default(false).prompt()?)
    }
}

/// Consents to everything without asking (`--assume-yes`).
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&self, message: &str) -> Result<bool, SetupError> {
        info!("--assume-yes: {message} -> yes");
        Ok(true)
    }
}
