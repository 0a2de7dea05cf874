//! Static registry of the options the CLI knows how to resolve.
//!
//! The table is closed: options are defined at compile time and looked up by
//! their `(section, name)` pair. Each descriptor records where a value may
//! come from besides the persisted config file.

/// Metadata for a single registered option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDescriptor {
    /// Section the option belongs to.
    pub section: &'static str,
    /// Option name within the section.
    pub name: &'static str,
    /// Environment variable consulted before the persisted config file.
    pub env: Option<&'static str>,
}

/// All options the CLI recognises.
const REGISTERED_OPTIONS: &[OptionDescriptor] = &[OptionDescriptor {
    section: "api",
    name: "url",
    env: Some("LANLORDS_API_URL"),
}];

/// Look up the descriptor for `(section, name)`, if registered.
#[must_use]
pub fn lookup(section: &str, name: &str) -> Option<&'static OptionDescriptor> {
    REGISTERED_OPTIONS
        .iter()
        .find(|descriptor| descriptor.section == section && descriptor.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_is_registered() {
        let descriptor = lookup("api", "url").expect("api.url should be registered");
        assert_eq!(descriptor.env, Some("LANLORDS_API_URL"));
    }

    #[test]
    fn unknown_pairs_are_absent() {
        assert!(lookup("api", "token").is_none());
        assert!(lookup("", "url").is_none());
        assert!(lookup("api", "").is_none());
    }
}
