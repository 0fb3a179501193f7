pub mod category;
pub mod credentials;
pub mod document;
pub mod submission;
pub mod tech;
