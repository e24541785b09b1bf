//! Version identifier resolution.

/// Version string for the module.
///
/// Resolved at compile time: a build-supplied `EXAMPLE_MODULE_VERSION`
/// value is used verbatim, otherwise the fallback is `"dev"`.
pub const VERSION: &str = match option_env!("EXAMPLE_MODULE_VERSION") {
    Some(version) => version,
    None => "dev",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_non_empty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_version_default_is_dev() {
        if option_env!("EXAMPLE_MODULE_VERSION").is_none() {
            assert_eq!(VERSION, "dev");
        }
    }
}
