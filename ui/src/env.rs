//! Compile-time configuration.
//!
//! The member list lives at one fixed, unauthenticated URL; there is no
//! runtime configuration. Tests construct [`crate::RosterApp`] and
//! [`crate::api::Fetcher`] with their own URL instead.

/// The remote member list: one JSON array of flat objects, fetched in a
/// single response.
pub const MEMBERS_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_url_is_well_formed() {
        assert!(MEMBERS_URL.starts_with("https://"));
        assert!(MEMBERS_URL.ends_with(".json"));
    }
}
