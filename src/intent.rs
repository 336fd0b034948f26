//! User Intents
//!
//! Every UI event handler turns into one of these and hands it to the client.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    /// Signup form submitted
    RequestSignup { activity: String, email: String },
    /// Remove button on a roster row clicked
    RequestRemoval { activity: String, email: String },
}
