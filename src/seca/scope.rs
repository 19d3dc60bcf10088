//! Addressing scope for hierarchical resources
//!
//! Resources live under tenant / region / workspace / network. A
//! [`ResourceScope`] is filled in field by field and validated once against
//! the fields an operation needs.

use crate::error::{Result, SecaError};

/// Fields of a [`ResourceScope`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeField {
    Tenant,
    Region,
    Workspace,
    Name,
}

impl ScopeField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeField::Tenant => "tenant",
            ScopeField::Region => "region",
            ScopeField::Workspace => "workspace",
            ScopeField::Name => "name",
        }
    }
}

impl std::fmt::Display for ScopeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a resource lives and what it is called
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceScope {
    pub tenant: Option<String>,
    pub region: Option<String>,
    pub workspace: Option<String>,
    pub network: Option<String>,
    pub kind: Option<String>,
    pub name: Option<String>,
}

impl ResourceScope {
    /// Scope for tenant-level resources
    pub fn tenant(tenant: impl Into<String>) -> Self {
        Self {
            tenant: Some(tenant.into()),
            ..Default::default()
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    fn field(&self, field: ScopeField) -> Option<&str> {
        let value = match field {
            ScopeField::Tenant => &self.tenant,
            ScopeField::Region => &self.region,
            ScopeField::Workspace => &self.workspace,
            ScopeField::Name => &self.name,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Get a field, failing if it is unset or empty
    pub fn require(&self, field: ScopeField) -> Result<&str> {
        self.field(field)
            .ok_or(SecaError::MissingRequiredField(field.as_str()))
    }

    /// Check that every field in `required` is set
    ///
    /// Reports the first missing field in the order given.
    pub fn validate(&self, required: &[ScopeField]) -> Result<()> {
        for field in required {
            self.require(*field)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_present_field() {
        let scope = ResourceScope::tenant("acme");
        assert_eq!(scope.require(ScopeField::Tenant).unwrap(), "acme");
    }

    #[test]
    fn test_require_missing_field() {
        let scope = ResourceScope::default();
        match scope.require(ScopeField::Tenant) {
            Err(SecaError::MissingRequiredField(field)) => assert_eq!(field, "tenant"),
            other => panic!("Expected MissingRequiredField, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let scope = ResourceScope::tenant("");
        assert!(scope.require(ScopeField::Tenant).is_err());
    }

    #[test]
    fn test_validate_reports_first_missing_in_order() {
        let scope = ResourceScope::tenant("acme");
        let err = scope
            .validate(&[ScopeField::Tenant, ScopeField::Workspace, ScopeField::Name])
            .unwrap_err();
        assert!(matches!(err, SecaError::MissingRequiredField("workspace")));
    }

    #[test]
    fn test_validate_complete_scope() {
        let scope = ResourceScope {
            workspace: Some("dev".to_string()),
            ..ResourceScope::tenant("acme")
        }
        .with_region("eu-central-1")
        .with_name("vm-1");
        assert!(scope
            .validate(&[
                ScopeField::Tenant,
                ScopeField::Region,
                ScopeField::Workspace,
                ScopeField::Name
            ])
            .is_ok());
        assert!(ResourceScope::tenant("acme")
            .validate(&[ScopeField::Region])
            .is_err());
    }

    #[test]
    fn test_scope_field_display() {
        assert_eq!(ScopeField::Workspace.to_string(), "workspace");
        assert_eq!(ScopeField::Name.as_str(), "name");
    }
}
