//! Kubernetes client wrapper for integration tests

use std::fmt::Debug;
use std::path::Path;

use k8s_openapi::api::apps::v1::{DaemonSet, Deployment};
use k8s_openapi::api::core::v1::{Namespace, Node, Pod};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::{ClusterResourceScope, NamespaceResourceScope};
use kube::api::{Api, DeleteParams, ListParams, PostParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config, Resource, ResourceExt};
use log::{debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::HarnessConfig;
use crate::context::TestContext;
use crate::error::{HarnessError, HarnessResult, is_not_found};
use crate::poll::poll_until;

/// Holds one client for the whole test run
#[derive(Clone)]
pub struct Harness {
    client: Client,
    config: HarnessConfig,
}

impl Harness {
    /// Connect using the kubeconfig resolved from `config`
    pub async fn connect(config: HarnessConfig) -> HarnessResult<Self> {
        let path = config.kubeconfig_path().ok_or(HarnessError::NoKubeconfig)?;
        let kubeconfig = Kubeconfig::read_from(&path).map_err(|source| HarnessError::Kubeconfig {
            path: path.clone(),
            source,
        })?;

        let options = KubeConfigOptions {
            context: config.context.clone(),
            cluster: None,
            user: None,
        };
        let kube_config = Config::from_custom_kubeconfig(kubeconfig, &options)
            .await
            .map_err(|source| HarnessError::Kubeconfig {
                path: path.clone(),
                source,
            })?;
        let client = Client::try_from(kube_config)
            .map_err(|e| HarnessError::kube("Failed to create Kubernetes client", e))?;

        info!("Connected to cluster using {}", path.display());
        Ok(Self::from_client(client, config))
    }

    pub fn from_client(client: Client, config: HarnessConfig) -> Self {
        Self { client, config }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Start a test: create its namespace and queue the namespace deletion
    pub async fn begin_test(&self, name: &str) -> HarnessResult<TestContext> {
        let mut ctx = TestContext::new(name);
        self.create_namespace(&ctx.namespace).await?;

        let harness = self.clone();
        let namespace = ctx.namespace.clone();
        ctx.add_finalizer(format!("namespace {}", namespace), async move {
            harness.delete_namespace(&namespace).await?;
            harness.wait_for_namespace_deleted(&namespace).await
        });
        Ok(ctx)
    }

    // Namespaces

    pub async fn create_namespace(&self, name: &str) -> HarnessResult<Namespace> {
        let namespace = Namespace {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        self.create_cluster(&namespace).await
    }

    pub async fn delete_namespace(&self, name: &str) -> HarnessResult<()> {
        self.delete_cluster::<Namespace>(name).await
    }

    pub async fn wait_for_namespace_deleted(&self, name: &str) -> HarnessResult<()> {
        let api: Api<Namespace> = Api::all(self.client.clone());
        self.wait_until_gone(api, name).await
    }

    // Namespaced objects

    pub async fn create<K>(&self, namespace: &str, object: &K) -> HarnessResult<K>
    where
        K: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
            + Clone
            + Debug
            + Serialize
            + DeserializeOwned,
    {
        let api: Api<K> = Api::namespaced(self.client.clone(), namespace);
        let created = api.create(&PostParams::default(), object).await.map_err(|e| {
            HarnessError::kube(
                format!("Failed to create {} {}/{}", K::kind(&()), namespace, object.name_any()),
                e,
            )
        })?;
        info!("Created {} {}/{}", K::kind(&()), namespace, created.name_any());
        Ok(created)
    }

    pub async fn get<K>(&self, namespace: &str, name: &str) -> HarnessResult<K>
    where
        K: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
            + Clone
            + Debug
            + DeserializeOwned,
    {
        let api: Api<K> = Api::namespaced(self.client.clone(), namespace);
        api.get(name).await.map_err(|e| {
            HarnessError::kube(format!("Failed to get {} {}/{}", K::kind(&()), namespace, name), e)
        })
    }

    /// Delete an object; an object that is already gone counts as deleted
    pub async fn delete<K>(&self, namespace: &str, name: &str) -> HarnessResult<()>
    where
        K: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
            + Clone
            + Debug
            + DeserializeOwned,
    {
        let api: Api<K> = Api::namespaced(self.client.clone(), namespace);
        let what = format!("{} {}/{}", K::kind(&()), namespace, name);
        Self::delete_with(api, name, &what).await
    }

    /// Create the object described by a YAML manifest in `namespace`
    pub async fn create_from_file<K>(&self, namespace: &str, path: impl AsRef<Path>) -> HarnessResult<K>
    where
        K: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
            + Clone
            + Debug
            + Serialize
            + DeserializeOwned,
    {
        let mut object: K = read_manifest(path.as_ref())?;
        object.meta_mut().namespace = Some(namespace.to_string());
        self.create(namespace, &object).await
    }

    pub async fn wait_for_deleted<K>(&self, namespace: &str, name: &str) -> HarnessResult<()>
    where
        K: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
            + Clone
            + Debug
            + DeserializeOwned,
    {
        let api: Api<K> = Api::namespaced(self.client.clone(), namespace);
        self.wait_until_gone(api, name).await
    }

    // Cluster-scoped objects

    pub async fn create_cluster<K>(&self, object: &K) -> HarnessResult<K>
    where
        K: Resource<Scope = ClusterResourceScope, DynamicType = ()>
            + Clone
            + Debug
            + Serialize
            + DeserializeOwned,
    {
        let api: Api<K> = Api::all(self.client.clone());
        let created = api.create(&PostParams::default(), object).await.map_err(|e| {
            HarnessError::kube(format!("Failed to create {} {}", K::kind(&()), object.name_any()), e)
        })?;
        info!("Created {} {}", K::kind(&()), created.name_any());
        Ok(created)
    }

    pub async fn get_cluster<K>(&self, name: &str) -> HarnessResult<K>
    where
        K: Resource<Scope = ClusterResourceScope, DynamicType = ()>
            + Clone
            + Debug
            + DeserializeOwned,
    {
        let api: Api<K> = Api::all(self.client.clone());
        api.get(name)
            .await
            .map_err(|e| HarnessError::kube(format!("Failed to get {} {}", K::kind(&()), name), e))
    }

    pub async fn delete_cluster<K>(&self, name: &str) -> HarnessResult<()>
    where
        K: Resource<Scope = ClusterResourceScope, DynamicType = ()>
            + Clone
            + Debug
            + DeserializeOwned,
    {
        let api: Api<K> = Api::all(self.client.clone());
        let what = format!("{} {}", K::kind(&()), name);
        Self::delete_with(api, name, &what).await
    }

    // Listing

    pub async fn list_pods(&self, namespace: &str, label_selector: Option<&str>) -> HarnessResult<Vec<Pod>> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        list_with(&api, label_selector)
            .await
            .map_err(|e| HarnessError::kube(format!("Failed to list pods in {}", namespace), e))
    }

    pub async fn list_nodes(&self) -> HarnessResult<Vec<Node>> {
        let api: Api<Node> = Api::all(self.client.clone());
        list_with(&api, None)
            .await
            .map_err(|e| HarnessError::kube("Failed to list nodes", e))
    }

    // Readiness

    pub async fn wait_for_deployment_ready(&self, namespace: &str, name: &str) -> HarnessResult<()> {
        let api: Api<Deployment> = Api::namespaced(self.client.clone(), namespace);
        let what = format!("Deployment {}/{} to be ready", namespace, name);
        self.wait_until_ready(api, name, &what, deployment_ready).await
    }

    pub async fn wait_for_daemonset_ready(&self, namespace: &str, name: &str) -> HarnessResult<()> {
        let api: Api<DaemonSet> = Api::namespaced(self.client.clone(), namespace);
        let what = format!("DaemonSet {}/{} to be ready", namespace, name);
        self.wait_until_ready(api, name, &what, daemonset_ready).await
    }

    /// Wait until at least one pod matches `label_selector` and all matching pods are ready
    pub async fn wait_for_pods_ready(&self, namespace: &str, label_selector: &str) -> HarnessResult<()> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let what = format!("pods {} in {} to be ready", label_selector, namespace);
        poll_until(&what, self.config.poll_interval, self.config.timeout, move || {
            let api = api.clone();
            async move {
                let pods = list_with(&api, Some(label_selector)).await.map_err(|e| {
                    HarnessError::kube(format!("Failed to list pods in {}", namespace), e)
                })?;
                Ok(!pods.is_empty() && pods.iter().all(pod_ready))
            }
        })
        .await
    }

    async fn wait_until_ready<K>(
        &self,
        api: Api<K>,
        name: &str,
        what: &str,
        ready: fn(&K) -> bool,
    ) -> HarnessResult<()>
    where
        K: Resource<DynamicType = ()> + Clone + Debug + DeserializeOwned,
    {
        poll_until(what, self.config.poll_interval, self.config.timeout, move || {
            let api = api.clone();
            async move {
                match api.get(name).await {
                    Ok(object) => Ok(ready(&object)),
                    Err(e) if is_not_found(&e) => Ok(false),
                    Err(e) => Err(HarnessError::kube(
                        format!("Error checking {} {} status", K::kind(&()), name),
                        e,
                    )),
                }
            }
        })
        .await
    }

    async fn wait_until_gone<K>(&self, api: Api<K>, name: &str) -> HarnessResult<()>
    where
        K: Resource<DynamicType = ()> + Clone + Debug + DeserializeOwned,
    {
        let what = format!("{} {} to be deleted", K::kind(&()), name);
        poll_until(&what, self.config.poll_interval, self.config.timeout, move || {
            let api = api.clone();
            async move {
                match api.get(name).await {
                    Ok(_) => Ok(false),
                    Err(e) if is_not_found(&e) => Ok(true),
                    Err(e) => Err(HarnessError::kube(
                        format!("Error checking {} {}", K::kind(&()), name),
                        e,
                    )),
                }
            }
        })
        .await
    }

    async fn delete_with<K>(api: Api<K>, name: &str, what: &str) -> HarnessResult<()>
    where
        K: Resource<DynamicType = ()> + Clone + Debug + DeserializeOwned,
    {
        match api.delete(name, &DeleteParams::default()).await {
            Ok(_) => {
                info!("Deleted {}", what);
                Ok(())
            }
            Err(e) if is_not_found(&e) => {
                debug!("{} already deleted", what);
                Ok(())
            }
            Err(e) => Err(HarnessError::kube(format!("Failed to delete {}", what), e)),
        }
    }
}

impl Debug for Harness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Harness").field("config", &self.config).finish()
    }
}

async fn list_with<K>(api: &Api<K>, label_selector: Option<&str>) -> Result<Vec<K>, kube::Error>
where
    K: Resource + Clone + Debug + DeserializeOwned,
{
    let mut params = ListParams::default();
    if let Some(selector) = label_selector {
        params = params.labels(selector);
    }
    Ok(api.list(&params).await?.items)
}

/// Decode a single-object YAML manifest
pub fn read_manifest<K: DeserializeOwned>(path: &Path) -> HarnessResult<K> {
    let text = std::fs::read_to_string(path).map_err(|e| HarnessError::manifest(path, e))?;
    serde_yaml::from_str(&text).map_err(|e| HarnessError::manifest(path, e))
}

/// Ready replicas cover the desired count and the rollout is observed
pub fn deployment_ready(deployment: &Deployment) -> bool {
    let Some(status) = &deployment.status else {
        return false;
    };
    let desired = deployment
        .spec
        .as_ref()
        .and_then(|s| s.replicas)
        .unwrap_or(1);
    let observed = match (deployment.metadata.generation, status.observed_generation) {
        (Some(generation), Some(observed)) => observed >= generation,
        _ => true,
    };
    observed
        && status.ready_replicas.unwrap_or(0) >= desired
        && status.updated_replicas.unwrap_or(0) >= desired
}

pub fn daemonset_ready(daemonset: &DaemonSet) -> bool {
    let Some(status) = &daemonset.status else {
        return false;
    };
    status.number_ready >= status.desired_number_scheduled
        && status.updated_number_scheduled.unwrap_or(0) >= status.desired_number_scheduled
        && status.number_unavailable.unwrap_or(0) == 0
}

pub fn pod_ready(pod: &Pod) -> bool {
    pod.status
        .as_ref()
        .and_then(|s| s.conditions.as_ref())
        .is_some_and(|conditions| {
            conditions
                .iter()
                .any(|c| c.type_ == "Ready" && c.status == "True")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::apps::v1::{DaemonSetStatus, DeploymentSpec, DeploymentStatus};
    use k8s_openapi::api::core::v1::{ConfigMap, PodCondition, PodStatus};
    use std::io::Write;

    fn deployment(replicas: Option<i32>, ready: i32, updated: i32) -> Deployment {
        Deployment {
            metadata: ObjectMeta {
                generation: Some(2),
                ..Default::default()
            },
            spec: Some(DeploymentSpec {
                replicas,
                ..Default::default()
            }),
            status: Some(DeploymentStatus {
                observed_generation: Some(2),
                ready_replicas: Some(ready),
                updated_replicas: Some(updated),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_deployment_ready() {
        assert!(deployment_ready(&deployment(Some(3), 3, 3)));
        assert!(!deployment_ready(&deployment(Some(3), 2, 3)));
        assert!(!deployment_ready(&deployment(Some(3), 3, 1)));
        // Replicas default to 1
        assert!(deployment_ready(&deployment(None, 1, 1)));
        assert!(!deployment_ready(&Deployment::default()));
    }

    #[test]
    fn test_deployment_waits_for_observed_generation() {
        let mut d = deployment(Some(1), 1, 1);
        d.metadata.generation = Some(3);
        assert!(!deployment_ready(&d));
    }

    #[test]
    fn test_daemonset_ready() {
        let mut ds = DaemonSet {
            status: Some(DaemonSetStatus {
                desired_number_scheduled: 3,
                number_ready: 3,
                updated_number_scheduled: Some(3),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(daemonset_ready(&ds));

        if let Some(status) = ds.status.as_mut() {
            status.number_unavailable = Some(1);
        }
        assert!(!daemonset_ready(&ds));
        assert!(!daemonset_ready(&DaemonSet::default()));
    }

    #[test]
    fn test_pod_ready() {
        let pod = |status: &str| Pod {
            status: Some(PodStatus {
                conditions: Some(vec![PodCondition {
                    type_: "Ready".to_string(),
                    status: status.to_string(),
                    ..Default::default()
                }]),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(pod_ready(&pod("True")));
        assert!(!pod_ready(&pod("False")));
        assert!(!pod_ready(&Pod::default()));
    }

    #[test]
    fn test_read_manifest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: settings\ndata:\n  mode: test"
        )
        .unwrap();

        let config_map: ConfigMap = read_manifest(file.path()).unwrap();
        assert_eq!(config_map.name_any(), "settings");
        assert_eq!(
            config_map.data.unwrap().get("mode").map(String::as_str),
            Some("test")
        );
    }

    #[test]
    fn test_read_manifest_errors() {
        let err = read_manifest::<ConfigMap>(Path::new("/nonexistent/manifest.yaml")).unwrap_err();
        assert!(matches!(err, HarnessError::Manifest { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "metadata: [not, a, map]").unwrap();
        let err = read_manifest::<ConfigMap>(file.path()).unwrap_err();
        assert!(matches!(err, HarnessError::Manifest { .. }));
    }
}
