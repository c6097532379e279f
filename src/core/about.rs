pub const APP_NAME: &str = "SigPloit";
pub const TAGLINE: &str = "Signaling Exploitation Framework";
pub const VERSION: &str = "BETA 1.1";
pub const AUTHOR: &str = "Loay AbdelRazek (@sigploit)";
pub const CONTRIBUTORS: &[&str] = &["Rosalia D'Alessandro", "Ilario Dal Grande"];
pub const PROMPT: &str = "sigploit>";
