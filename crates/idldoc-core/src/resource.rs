//! Resource names of the form `package/kind/Name`

use crate::ast::{InterfaceId, InterfaceKind};
use crate::error::DocError;

/// Split a resource name into `(package, kind, name)`.
///
/// A single token without slashes is shorthand for a bare name and yields
/// empty package and kind. Anything other than one or three tokens is
/// malformed.
pub fn resource_name(resource: &str) -> Result<(&str, &str, &str), DocError> {
    if !resource.contains('/') {
        return Ok(("", "", resource));
    }

    let mut parts = resource.split('/');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(package), Some(kind), Some(name), None) => Ok((package, kind, name)),
        _ => Err(DocError::MalformedIdentifier(resource.to_string())),
    }
}

impl InterfaceId {
    /// Parse `package/kind/Name`, where kind is `msg`, `srv` or `action`
    pub fn parse(resource: &str) -> Result<Self, DocError> {
        let malformed = || DocError::MalformedIdentifier(resource.to_string());
        let (package, kind, name) = resource_name(resource)?;
        if package.is_empty() || name.is_empty() {
            return Err(malformed());
        }
        let kind = InterfaceKind::from_dir_name(kind).ok_or_else(malformed)?;
        Ok(InterfaceId::new(package, kind, name))
    }
}

impl std::str::FromStr for InterfaceId {
    type Err = DocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InterfaceId::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_tokens_split() {
        assert_eq!(
            resource_name("std_msgs/msg/Bool").unwrap(),
            ("std_msgs", "msg", "Bool")
        );
    }

    #[test]
    fn single_token_is_bare_name() {
        assert_eq!(resource_name("foo").unwrap(), ("", "", "foo"));
    }

    #[test]
    fn two_or_four_tokens_are_malformed() {
        assert!(matches!(
            resource_name("a/b"),
            Err(DocError::MalformedIdentifier(ref s)) if s == "a/b"
        ));
        assert!(resource_name("a/b/c/d").is_err());
    }

    #[test]
    fn parse_interface_id() {
        let id: InterfaceId = "example_interfaces/srv/AddTwoInts".parse().unwrap();
        assert_eq!(id.kind, InterfaceKind::Service);
        assert_eq!(id.name, "AddTwoInts");
        assert!(InterfaceId::parse("pkg/thing/Name").is_err());
        assert!(InterfaceId::parse("Name").is_err());
    }
}
