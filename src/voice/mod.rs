pub mod vapi;

pub use vapi::VapiClient;
