mod email_port;

pub use email_port::EmailMatcher;
