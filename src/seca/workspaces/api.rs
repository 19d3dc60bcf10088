//! Workspace API operations

use crate::config::{api, providers};
use crate::error::Result;
use crate::seca::iterator::PagingIterator;
use crate::seca::regional::RegionalClient;
use crate::seca::scope::{ResourceScope, ScopeField};

use super::models::Workspace;

/// Path of the workspace collection of a tenant
fn workspaces_path(tenant: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        api::VERSION_PREFIX,
        api::TENANTS,
        urlencoding::encode(tenant),
        api::WORKSPACES
    )
}

impl RegionalClient {
    /// List workspaces of the scope's tenant, fetching pages lazily
    pub async fn list_workspaces(&self, scope: &ResourceScope) -> Result<PagingIterator<Workspace>> {
        let tenant = scope.require(ScopeField::Tenant)?;
        let workspace_api = self.provider_client(providers::WORKSPACE).await?;

        Ok(workspace_api.paginate(
            workspaces_path(tenant),
            format!("workspaces for tenant '{}'", tenant),
        ))
    }

    /// Get all workspaces of the scope's tenant
    pub async fn get_workspaces(&self, scope: &ResourceScope) -> Result<Vec<Workspace>> {
        self.list_workspaces(scope).await?.all().await
    }

    /// Get a single workspace by tenant and name
    pub async fn get_workspace(&self, scope: &ResourceScope) -> Result<Option<Workspace>> {
        scope.validate(&[ScopeField::Tenant, ScopeField::Name])?;
        let tenant = scope.require(ScopeField::Tenant)?;
        let name = scope.require(ScopeField::Name)?;
        let workspace_api = self.provider_client(providers::WORKSPACE).await?;

        let path = format!("{}/{}", workspaces_path(tenant), urlencoding::encode(name));
        workspace_api
            .fetch_resource(&path, &format!("workspace '{}'", name))
            .await
    }

    /// Delete a workspace; returns `false` if it did not exist
    pub async fn delete_workspace(&self, scope: &ResourceScope) -> Result<bool> {
        scope.validate(&[ScopeField::Tenant, ScopeField::Name])?;
        let tenant = scope.require(ScopeField::Tenant)?;
        let name = scope.require(ScopeField::Name)?;
        let workspace_api = self.provider_client(providers::WORKSPACE).await?;

        let path = format!("{}/{}", workspaces_path(tenant), urlencoding::encode(name));
        workspace_api
            .delete_resource(&path, &format!("workspace '{}'", name))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SecaError;
    use crate::seca::client::build_http_client;
    use crate::seca::regions::{Provider, Region};
    use crate::seca::traits::SecaResource;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn regional_client(server: &MockServer) -> RegionalClient {
        let region = Region::new(
            "eu-central-1",
            vec![Provider::new(
                providers::WORKSPACE,
                &format!("{}/providers/seca.workspace", server.uri()),
                "v1",
            )],
        );
        RegionalClient::new(build_http_client(), "t", region)
    }

    fn workspace_json(name: &str) -> serde_json::Value {
        serde_json::json!({
            "metadata": { "name": name, "tenant": "acme" },
            "status": { "state": "active" }
        })
    }

    #[test]
    fn test_workspaces_path_encodes_tenant() {
        assert_eq!(workspaces_path("acme"), "/v1/tenants/acme/workspaces");
        assert_eq!(
            workspaces_path("a b"),
            "/v1/tenants/a%20b/workspaces"
        );
    }

    #[tokio::test]
    async fn test_list_workspaces_requires_tenant() {
        let mock_server = MockServer::start().await;
        let client = regional_client(&mock_server);

        let result = client.list_workspaces(&ResourceScope::default()).await;
        assert!(matches!(
            result,
            Err(SecaError::MissingRequiredField("tenant"))
        ));
    }

    #[tokio::test]
    async fn test_get_workspaces_paginated() {
        let mock_server = MockServer::start().await;
        let client = regional_client(&mock_server);

        Mock::given(method("GET"))
            .and(path("/providers/seca.workspace/v1/tenants/acme/workspaces"))
            .and(query_param("skipToken", "next"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [workspace_json("prod")]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/providers/seca.workspace/v1/tenants/acme/workspaces"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [workspace_json("dev"), workspace_json("test")],
                "metadata": { "skipToken": "next" }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let workspaces = client
            .get_workspaces(&ResourceScope::tenant("acme"))
            .await
            .unwrap();
        let names: Vec<&str> = workspaces.iter().map(|w| w.name()).collect();
        assert_eq!(names, vec!["dev", "test", "prod"]);
    }

    #[tokio::test]
    async fn test_get_workspace_by_name() {
        let mock_server = MockServer::start().await;
        let client = regional_client(&mock_server);

        Mock::given(method("GET"))
            .and(path("/providers/seca.workspace/v1/tenants/acme/workspaces/dev"))
            .respond_with(ResponseTemplate::new(200).set_body_json(workspace_json("dev")))
            .mount(&mock_server)
            .await;

        let ws = client
            .get_workspace(&ResourceScope::tenant("acme").with_name("dev"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(ws.name(), "dev");
        assert_eq!(ws.state(), "active");
    }

    #[tokio::test]
    async fn test_get_workspace_requires_name() {
        let mock_server = MockServer::start().await;
        let client = regional_client(&mock_server);

        let result = client.get_workspace(&ResourceScope::tenant("acme")).await;
        assert!(matches!(result, Err(SecaError::MissingRequiredField("name"))));
    }

    #[tokio::test]
    async fn test_delete_workspace() {
        let mock_server = MockServer::start().await;
        let client = regional_client(&mock_server);

        Mock::given(method("DELETE"))
            .and(path("/providers/seca.workspace/v1/tenants/acme/workspaces/dev"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/providers/seca.workspace/v1/tenants/acme/workspaces/old"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        assert!(client
            .delete_workspace(&ResourceScope::tenant("acme").with_name("dev"))
            .await
            .unwrap());
        assert!(!client
            .delete_workspace(&ResourceScope::tenant("acme").with_name("old"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_workspace_provider_missing_from_region() {
        let client = RegionalClient::new(
            build_http_client(),
            "t",
            Region::new("bare", vec![]),
        );

        let result = client.list_workspaces(&ResourceScope::tenant("acme")).await;
        match result {
            Err(SecaError::ProviderNotFound { provider, region }) => {
                assert_eq!(provider, providers::WORKSPACE);
                assert_eq!(region, "bare");
            }
            Err(e) => panic!("Expected ProviderNotFound, got {:?}", e),
            Ok(_) => panic!("Expected an error"),
        }
    }
}
