// SatelliteClient - facade for entity CRUD and content workflow operations

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::debug;

use capataz_client::{CapatazHttpClient, RawResponse};

use crate::catalog;
use crate::config::SatelliteConfig;
use crate::constants::api_path;
use crate::descriptor::{EntityDescriptor, PathScope, pluralize};
use crate::error::{EntityError, Result};
use crate::factory::EntityFactory;
use crate::fields::FieldKind;
use crate::model::{
    ContentView, Organization, Permission, PingStatus, Product, Repository, RepositorySet,
    SearchResults, Subscription, SyncPlan, TaskInfo,
};
use crate::search::search_eq;
use crate::task::{PollSettings, poll_task};

/// Facade client for a Foreman/Katello-style management server
pub struct SatelliteClient {
    http: CapatazHttpClient,
    config: SatelliteConfig,
}

impl SatelliteClient {
    /// Create a new client with the given configuration
    pub fn new(config: SatelliteConfig) -> Result<Self> {
        let http = CapatazHttpClient::new(config.http_config())?;
        Ok(Self { http, config })
    }

    /// Create a new client from a base URL and credentials
    pub fn from_base_url(base_url: &str, username: &str, password: &str) -> Result<Self> {
        Self::new(SatelliteConfig::new(base_url).with_auth(username, password))
    }

    /// Get the underlying HTTP client
    pub fn http_client(&self) -> &CapatazHttpClient {
        &self.http
    }

    /// The configuration this client was built from
    pub fn config(&self) -> &SatelliteConfig {
        &self.config
    }

    /// Fixture factory bound to this client
    pub fn factory(&self) -> EntityFactory<'_> {
        EntityFactory::new(self)
    }

    /// Names of the catalog entities available in the configured server mode
    pub fn available_entities(&self) -> Vec<&'static str> {
        catalog::CATALOG
            .iter()
            .filter(|d| d.available_in(self.config.server_mode))
            .map(|d| d.name)
            .collect()
    }

    fn poll_settings(&self) -> PollSettings {
        PollSettings::new(
            std::time::Duration::from_millis(self.config.task_poll_interval_ms),
            std::time::Duration::from_millis(self.config.task_poll_timeout_ms),
        )
    }

    // ============================================================================
    // Generic entity operations (descriptor-driven)
    // ============================================================================

    /// Create an entity from an already-assembled payload.
    ///
    /// The payload is nested under the entity's payload root when its
    /// declaration requires one.
    pub async fn entity_create(
        &self,
        entity: &str,
        scope: &PathScope,
        payload: Map<String, Value>,
    ) -> Result<Value> {
        let desc = catalog::descriptor(entity)?;
        let body = match desc.payload_root {
            Some(root) => {
                let mut wrapper = Map::new();
                wrapper.insert(root.to_string(), Value::Object(payload));
                Value::Object(wrapper)
            }
            None => Value::Object(payload),
        };
        let path = desc.base_path(scope)?;
        debug!(entity, %path, "creating entity");
        Ok(self.http.post_json(&path, &body).await?)
    }

    /// Read an entity, normalizing nested reference hashes into id lists
    pub async fn entity_read(&self, entity: &str, scope: &PathScope, id: u64) -> Result<Value> {
        let desc = catalog::descriptor(entity)?;
        let mut attrs: Value = self.http.get(&desc.instance_path(scope, id)?).await?;
        normalize_references(desc, &mut attrs);
        Ok(attrs)
    }

    /// Delete an entity. Returns a task id when the server queues the
    /// deletion asynchronously.
    pub async fn entity_delete(
        &self,
        entity: &str,
        scope: &PathScope,
        id: u64,
    ) -> Result<Option<String>> {
        let desc = catalog::descriptor(entity)?;
        let reply = self
            .http
            .delete_accepting(&desc.instance_path(scope, id)?)
            .await?;
        accepted_task(&reply)
    }

    /// Search an entity collection, returning the raw result hashes
    pub async fn entity_search(
        &self,
        entity: &str,
        scope: &PathScope,
        query: &[(&str, String)],
    ) -> Result<Vec<Value>> {
        let desc = catalog::descriptor(entity)?;
        let found: SearchResults<Value> = self
            .http
            .get_with_query(&desc.base_path(scope)?, query)
            .await?;
        Ok(found.results)
    }

    /// Search an entity collection, insisting on exactly one match
    pub async fn entity_find_unique(
        &self,
        entity: &str,
        scope: &PathScope,
        query: &[(&str, String)],
    ) -> Result<Value> {
        let mut results = self.entity_search(entity, scope, query).await?;
        if results.len() != 1 {
            return Err(EntityError::UnexpectedResponse(format!(
                "expected exactly one '{}' match, got {}",
                entity,
                results.len()
            )));
        }
        Ok(results.remove(0))
    }

    // ============================================================================
    // Server health
    // ============================================================================

    pub async fn ping(&self) -> Result<PingStatus> {
        Ok(self.http.get(api_path::PING).await?)
    }

    // ============================================================================
    // Organization APIs
    // ============================================================================

    pub async fn organization_get(&self, id: u64) -> Result<Organization> {
        Ok(self
            .http
            .get(&format!("{}/{}", api_path::ORGANIZATIONS, id))
            .await?)
    }

    pub async fn organization_list(&self) -> Result<Vec<Organization>> {
        let found: SearchResults<Organization> = self.http.get(api_path::ORGANIZATIONS).await?;
        Ok(found.results)
    }

    /// List the organization's subscriptions
    pub async fn organization_subscriptions(&self, org_id: u64) -> Result<Vec<Subscription>> {
        let found: SearchResults<Subscription> = self
            .http
            .get(&format!(
                "{}/{}/subscriptions",
                api_path::ORGANIZATIONS,
                org_id
            ))
            .await?;
        Ok(found.results)
    }

    /// List the products visible in an organization (populated by a manifest
    /// import for vendor products)
    pub async fn organization_products(
        &self,
        org_id: u64,
        per_page: Option<u64>,
    ) -> Result<Vec<Product>> {
        #[derive(Serialize)]
        struct Query {
            #[serde(skip_serializing_if = "Option::is_none")]
            per_page: Option<u64>,
        }

        let found: SearchResults<Product> = self
            .http
            .get_with_query(
                &format!("{}/{}/products", api_path::ORGANIZATIONS, org_id),
                &Query { per_page },
            )
            .await?;
        Ok(found.results)
    }

    /// Fetch the id of the product with the given name.
    ///
    /// Vendor product ids vary between deployments, so tests look products up
    /// by name and insist on an unambiguous answer.
    pub async fn organization_product_id(&self, org_id: u64, name: &str) -> Result<u64> {
        #[derive(Serialize)]
        struct Query {
            search: String,
        }

        let found: SearchResults<Product> = self
            .http
            .get_with_query(
                &format!("{}/{}/products", api_path::ORGANIZATIONS, org_id),
                &Query {
                    search: search_eq("name", name),
                },
            )
            .await?;
        unique_id("product", name, found.results.iter().map(|p| p.id))
    }

    /// Create a synchronization plan starting now
    pub async fn organization_sync_plan_create(
        &self,
        org_id: u64,
        name: &str,
        interval: &str,
    ) -> Result<SyncPlan> {
        let sync_date = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let body = json!({
            "name": name,
            "interval": interval,
            "sync_date": sync_date,
        });
        Ok(self
            .http
            .post_json(
                &format!("{}/{}/sync_plans", api_path::ORGANIZATIONS, org_id),
                &body,
            )
            .await?)
    }

    /// Upload a subscription manifest file.
    ///
    /// Returns the queued task id when the server answers HTTP 202.
    pub async fn organization_manifest_upload(
        &self,
        org_id: u64,
        manifest: Vec<u8>,
        repository_url: Option<&str>,
    ) -> Result<Option<String>> {
        let mut form = reqwest::multipart::Form::new().part(
            "content",
            reqwest::multipart::Part::bytes(manifest).file_name("manifest.zip"),
        );
        if let Some(url) = repository_url {
            form = form.text("repository_url", url.to_string());
        }

        let reply = self
            .http
            .post_multipart(
                &format!(
                    "{}/{}/subscriptions/upload",
                    api_path::ORGANIZATIONS,
                    org_id
                ),
                form,
            )
            .await?;
        accepted_task(&reply)
    }

    /// Delete the organization's subscription manifest
    pub async fn organization_manifest_delete(&self, org_id: u64) -> Result<Option<String>> {
        let reply = self
            .http
            .post_accepting(
                &format!(
                    "{}/{}/subscriptions/delete_manifest",
                    api_path::ORGANIZATIONS,
                    org_id
                ),
                &json!({}),
            )
            .await?;
        accepted_task(&reply)
    }

    /// Refresh the organization's subscription manifest
    pub async fn organization_manifest_refresh(&self, org_id: u64) -> Result<Option<String>> {
        let reply = self
            .http
            .put_accepting(
                &format!(
                    "{}/{}/subscriptions/refresh_manifest",
                    api_path::ORGANIZATIONS,
                    org_id
                ),
                &json!({}),
            )
            .await?;
        accepted_task(&reply)
    }

    // ============================================================================
    // Product / repository set APIs
    // ============================================================================

    pub async fn product_get(&self, id: u64) -> Result<Product> {
        Ok(self
            .http
            .get(&format!("{}/{}", api_path::PRODUCTS, id))
            .await?)
    }

    /// List the repository sets shipped within a product
    pub async fn product_repository_sets(
        &self,
        product_id: u64,
        per_page: Option<u64>,
    ) -> Result<Vec<RepositorySet>> {
        #[derive(Serialize)]
        struct Query {
            #[serde(skip_serializing_if = "Option::is_none")]
            per_page: Option<u64>,
        }

        let found: SearchResults<RepositorySet> = self
            .http
            .get_with_query(
                &format!("{}/{}/repository_sets", api_path::PRODUCTS, product_id),
                &Query { per_page },
            )
            .await?;
        Ok(found.results)
    }

    /// Fetch the id of the repository set with the given name
    pub async fn product_repository_set_id(&self, product_id: u64, name: &str) -> Result<u64> {
        #[derive(Serialize)]
        struct Query<'a> {
            name: &'a str,
        }

        let found: SearchResults<RepositorySet> = self
            .http
            .get_with_query(
                &format!("{}/{}/repository_sets", api_path::PRODUCTS, product_id),
                &Query { name },
            )
            .await?;
        unique_id("repository set", name, found.results.iter().map(|r| r.id))
    }

    /// Enable a vendor repository so it can be synchronized
    pub async fn repository_set_enable(
        &self,
        product_id: u64,
        reposet_id: u64,
        basearch: &str,
        releasever: Option<&str>,
    ) -> Result<Option<String>> {
        #[derive(Serialize)]
        struct Form<'a> {
            basearch: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            releasever: Option<&'a str>,
        }

        let reply = self
            .http
            .put_accepting(
                &format!(
                    "{}/{}/repository_sets/{}/enable",
                    api_path::PRODUCTS,
                    product_id,
                    reposet_id
                ),
                &Form {
                    basearch,
                    releasever,
                },
            )
            .await?;
        accepted_task(&reply)
    }

    /// Disable a previously enabled vendor repository
    pub async fn repository_set_disable(
        &self,
        product_id: u64,
        reposet_id: u64,
        basearch: &str,
        releasever: Option<&str>,
    ) -> Result<Option<String>> {
        #[derive(Serialize)]
        struct Form<'a> {
            basearch: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            releasever: Option<&'a str>,
        }

        let reply = self
            .http
            .put_accepting(
                &format!(
                    "{}/{}/repository_sets/{}/disable",
                    api_path::PRODUCTS,
                    product_id,
                    reposet_id
                ),
                &Form {
                    basearch,
                    releasever,
                },
            )
            .await?;
        accepted_task(&reply)
    }

    // ============================================================================
    // Repository APIs
    // ============================================================================

    pub async fn repository_get(&self, id: u64) -> Result<Repository> {
        Ok(self
            .http
            .get(&format!("{}/{}", api_path::REPOSITORIES, id))
            .await?)
    }

    /// Start synchronizing a repository
    pub async fn repository_sync(&self, repository_id: u64) -> Result<Option<String>> {
        let reply = self
            .http
            .post_accepting(
                &format!("{}/{}/sync", api_path::REPOSITORIES, repository_id),
                &json!({}),
            )
            .await?;
        accepted_task(&reply)
    }

    /// Fetch the id of the repository with the given name in an organization.
    ///
    /// Vendor repositories are populated automatically by a manifest import,
    /// so their ids can only be discovered by name.
    pub async fn repository_id_by_name(&self, org_id: u64, name: &str) -> Result<u64> {
        #[derive(Serialize)]
        struct Query {
            organization_id: u64,
            search: String,
        }

        let found: SearchResults<Repository> = self
            .http
            .get_with_query(
                api_path::REPOSITORIES,
                &Query {
                    organization_id: org_id,
                    search: search_eq("name", name),
                },
            )
            .await?;
        unique_id("repository", name, found.results.iter().map(|r| r.id))
    }

    // ============================================================================
    // Content view APIs
    // ============================================================================

    pub async fn content_view_get(&self, id: u64) -> Result<ContentView> {
        Ok(self
            .http
            .get(&format!("{}/{}", api_path::CONTENT_VIEWS, id))
            .await?)
    }

    /// Publish a new version of a content view
    pub async fn content_view_publish(&self, content_view_id: u64) -> Result<Option<String>> {
        let reply = self
            .http
            .post_accepting(
                &format!("{}/{}/publish", api_path::CONTENT_VIEWS, content_view_id),
                &json!({ "id": content_view_id }),
            )
            .await?;
        accepted_task(&reply)
    }

    /// Promote a published content view version into an environment
    pub async fn content_view_version_promote(
        &self,
        version_id: u64,
        environment_id: u64,
    ) -> Result<Option<String>> {
        let reply = self
            .http
            .post_accepting(
                &format!(
                    "{}/{}/promote",
                    api_path::CONTENT_VIEW_VERSIONS,
                    version_id
                ),
                &json!({ "environment_id": environment_id }),
            )
            .await?;
        accepted_task(&reply)
    }

    // ============================================================================
    // Lifecycle environment APIs
    // ============================================================================

    /// Fetch the id of an organization's "Library" lifecycle environment.
    ///
    /// Every organization owns exactly one environment named Library, the
    /// root of its promotion tree; new environments point at it as prior.
    pub async fn lifecycle_environment_library_id(&self, org_id: u64) -> Result<u64> {
        #[derive(Serialize)]
        struct Query {
            name: &'static str,
            organization_id: u64,
        }

        let found: SearchResults<Value> = self
            .http
            .get_with_query(
                api_path::LIFECYCLE_ENVIRONMENTS,
                &Query {
                    name: "Library",
                    organization_id: org_id,
                },
            )
            .await?;
        if found.results.len() != 1 {
            return Err(EntityError::UnexpectedResponse(format!(
                "expected exactly one 'Library' environment in organization {}, got {}",
                org_id,
                found.results.len()
            )));
        }
        found.results[0]["id"].as_u64().ok_or_else(|| {
            EntityError::UnexpectedResponse("environment result is missing an id".to_string())
        })
    }

    // ============================================================================
    // Activation key APIs
    // ============================================================================

    /// Attach a subscription to an activation key
    pub async fn activation_key_add_subscription(
        &self,
        activation_key_id: u64,
        subscription_id: &str,
        quantity: i64,
    ) -> Result<Value> {
        Ok(self
            .http
            .post_json(
                &format!(
                    "{}/{}/subscriptions",
                    api_path::ACTIVATION_KEYS,
                    activation_key_id
                ),
                &json!({ "id": subscription_id, "quantity": quantity }),
            )
            .await?)
    }

    // ============================================================================
    // Permission APIs
    // ============================================================================

    /// Search permissions by name and/or resource type.
    ///
    /// When both are given the server searches by resource type.
    pub async fn permission_search(
        &self,
        name: Option<&str>,
        resource_type: Option<&str>,
        per_page: Option<u64>,
    ) -> Result<Vec<Permission>> {
        #[derive(Serialize)]
        struct Query<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            resource_type: Option<&'a str>,
            per_page: u64,
        }

        let found: SearchResults<Permission> = self
            .http
            .get_with_query(
                api_path::PERMISSIONS,
                &Query {
                    name,
                    resource_type,
                    per_page: per_page.unwrap_or(10_000),
                },
            )
            .await?;
        Ok(found.results)
    }

    // ============================================================================
    // Task APIs
    // ============================================================================

    pub async fn task_get(&self, id: &str) -> Result<TaskInfo> {
        Ok(self
            .http
            .get(&format!("{}/{}", api_path::TASKS, id))
            .await?)
    }

    /// Poll a task to completion using the configured cadence and deadline
    pub async fn task_wait(&self, id: &str) -> Result<TaskInfo> {
        poll_task(&self.http, id, self.poll_settings()).await
    }

    /// Poll a task to completion with explicit settings
    pub async fn task_wait_with(&self, id: &str, settings: PollSettings) -> Result<TaskInfo> {
        poll_task(&self.http, id, settings).await
    }

    /// Wait for the task an action handed back, if it handed back one
    pub async fn wait_if_accepted(&self, task_id: Option<String>) -> Result<Option<TaskInfo>> {
        match task_id {
            Some(id) => Ok(Some(self.task_wait(&id).await?)),
            None => Ok(None),
        }
    }
}

/// Interpret an action reply: HTTP 202 means the server queued a task and the
/// body carries its id.
fn accepted_task(reply: &RawResponse) -> Result<Option<String>> {
    if reply.status != StatusCode::ACCEPTED {
        return Ok(None);
    }
    match &reply.body["id"] {
        Value::String(id) => Ok(Some(id.clone())),
        Value::Number(id) => Ok(Some(id.to_string())),
        _ => Err(EntityError::UnexpectedResponse(
            "202 response is missing a task id".to_string(),
        )),
    }
}

fn unique_id(kind: &str, name: &str, ids: impl Iterator<Item = u64>) -> Result<u64> {
    let ids: Vec<u64> = ids.collect();
    if ids.len() != 1 {
        return Err(EntityError::UnexpectedResponse(format!(
            "expected exactly one {kind} named '{name}', got {}",
            ids.len()
        )));
    }
    Ok(ids[0])
}

/// Rewrite nested reference hashes in a read response into plain id lists.
///
/// The server reports a one-to-many reference named `operatingsystem` as
/// `"operatingsystems": [{"id": 1, ...}, ...]`; callers want
/// `"operatingsystem_ids": [1, ...]`. One-to-one references come back as a
/// nested hash under the field name and are flattened to `<name>_id`.
fn normalize_references(desc: &EntityDescriptor, attrs: &mut Value) {
    let Some(obj) = attrs.as_object_mut() else {
        return;
    };
    for field in desc.fields {
        // renamed fields keep whatever shape the server chose
        if field.wire_name.is_some() {
            continue;
        }
        match field.kind {
            FieldKind::OneToMany(_) => {
                let plural = pluralize(field.name);
                let ids: Option<Vec<Value>> = obj.get(&plural).and_then(|v| v.as_array()).map(
                    |items| items.iter().filter_map(|i| i.get("id").cloned()).collect(),
                );
                if let Some(ids) = ids {
                    obj.remove(&plural);
                    obj.insert(format!("{}_ids", field.name), Value::Array(ids));
                }
            }
            FieldKind::OneToOne(_) => {
                let id = obj.get(field.name).and_then(|v| v.get("id")).cloned();
                if let Some(id) = id {
                    obj.remove(field.name);
                    obj.insert(format!("{}_id", field.name), id);
                }
            }
            _ => {}
        }
    }
}
