//! REST client for the iKanban task API
//!
//! Every endpoint lives under `{base_url}/api`. Responses use the
//! `{"success", "data", "error"}` envelope from [`ApiResponse`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::aliases::{is_uuid_shaped, AliasTables, ProjectLookup};
use crate::config::ApiConfig;
use crate::error::{IkanbanError, IkanbanResult};
use crate::issue_key::Lookup;
use crate::requests::{CreateTask, LinkDocuments, MoveTask, NewComment, UpdateTask};
use crate::types::{
    ApiResponse, Comment, Document, DocumentLink, Project, Task, Team, UploadSummary,
};
use crate::vocab::TaskStatus;

/// HTTP client bound to one backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    upload_timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> IkanbanResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("ikanban/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()?;

        if config.token.is_none() {
            warn!("VIBE_API_TOKEN is not set, requests will be unauthenticated");
        }

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            upload_timeout: config.upload_timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/api{}", self.base_url, endpoint)
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(endpoint));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and unwrap the envelope. An empty 2xx body is `None`.
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> IkanbanResult<Option<T>> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(IkanbanError::Http {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        if body.trim().is_empty() {
            return Ok(None);
        }

        let envelope: ApiResponse<T> = serde_json::from_str(&body)?;
        envelope.into_result()
    }

    /// Like [`send`](Self::send) but the envelope must carry data
    async fn fetch<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        endpoint: &str,
    ) -> IkanbanResult<T> {
        self.send(builder)
            .await?
            .ok_or_else(|| IkanbanError::MissingData(endpoint.to_string()))
    }

    /// List endpoints treat a missing `data` as empty
    async fn list<T: DeserializeOwned>(&self, builder: RequestBuilder) -> IkanbanResult<Vec<T>> {
        Ok(self.send(builder).await?.unwrap_or_default())
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> IkanbanResult<T> {
        self.fetch(self.request(Method::GET, endpoint), endpoint).await
    }

    async fn send_json<B, T>(&self, method: Method, endpoint: &str, body: &B) -> IkanbanResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.fetch(self.request(method, endpoint).json(body), endpoint)
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_teams(&self) -> IkanbanResult<Vec<Team>> {
        self.list(self.request(Method::GET, "/teams")).await
    }

    #[instrument(skip(self))]
    pub async fn list_projects(&self) -> IkanbanResult<Vec<Project>> {
        self.list(self.request(Method::GET, "/projects")).await
    }

    #[instrument(skip(self))]
    pub async fn team_issues(&self, team_id: &str) -> IkanbanResult<Vec<Task>> {
        self.list(self.request(Method::GET, &format!("/teams/{}/issues", team_id)))
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_tasks(
        &self,
        project_id: &str,
        status: Option<TaskStatus>,
    ) -> IkanbanResult<Vec<Task>> {
        let mut query = vec![("project_id", project_id.to_string())];
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        self.list(self.request(Method::GET, "/tasks").query(&query))
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_task(&self, task_id: &str) -> IkanbanResult<Task> {
        self.get_json(&format!("/tasks/{}", task_id)).await
    }

    #[instrument(skip(self, body), fields(title = %body.title))]
    pub async fn create_task(&self, body: &CreateTask) -> IkanbanResult<Task> {
        self.send_json(Method::POST, "/tasks", body).await
    }

    #[instrument(skip(self, body))]
    pub async fn update_task(&self, task_id: &str, body: &UpdateTask) -> IkanbanResult<Task> {
        self.send_json(Method::PUT, &format!("/tasks/{}", task_id), body)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_task(&self, task_id: &str) -> IkanbanResult<()> {
        self.send::<Value>(self.request(Method::DELETE, &format!("/tasks/{}", task_id)))
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn move_task(&self, task_id: &str, project_id: &str) -> IkanbanResult<Task> {
        let body = MoveTask {
            project_id: project_id.to_string(),
        };
        self.send_json(Method::POST, &format!("/tasks/{}/move", task_id), &body)
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_comments(&self, task_id: &str) -> IkanbanResult<Vec<Comment>> {
        self.list(self.request(Method::GET, &format!("/tasks/{}/comments", task_id)))
            .await
    }

    #[instrument(skip(self, body))]
    pub async fn add_comment(&self, task_id: &str, body: &NewComment) -> IkanbanResult<Comment> {
        self.send_json(Method::POST, &format!("/tasks/{}/comments", task_id), body)
            .await
    }

    /// Search a team's documents by title, or list them all when `query` is `None`
    #[instrument(skip(self))]
    pub async fn search_documents(
        &self,
        team_id: &str,
        query: Option<&str>,
    ) -> IkanbanResult<Vec<Document>> {
        let params = match query.filter(|q| !q.trim().is_empty()) {
            Some(q) => [("search", q)],
            None => [("all", "true")],
        };
        let endpoint = format!("/teams/{}/documents", team_id);
        self.list(self.request(Method::GET, &endpoint).query(&params))
            .await
    }

    #[instrument(skip(self))]
    pub async fn task_documents(&self, task_id: &str) -> IkanbanResult<Vec<DocumentLink>> {
        self.list(self.request(Method::GET, &format!("/tasks/{}/links", task_id)))
            .await
    }

    #[instrument(skip(self))]
    pub async fn link_documents(
        &self,
        task_id: &str,
        document_ids: &[String],
    ) -> IkanbanResult<Vec<DocumentLink>> {
        let body = LinkDocuments {
            document_ids: document_ids.to_vec(),
        };
        let builder = self
            .request(Method::POST, &format!("/tasks/{}/links", task_id))
            .json(&body);
        self.list(builder).await
    }

    #[instrument(skip(self))]
    pub async fn unlink_document(&self, task_id: &str, document_id: &str) -> IkanbanResult<()> {
        let endpoint = format!("/tasks/{}/links/{}", task_id, document_id);
        self.send::<Value>(self.request(Method::DELETE, &endpoint))
            .await?;
        Ok(())
    }

    /// Upload files as multipart `files[]`. All paths are checked before
    /// anything is read or sent.
    #[instrument(skip(self, files), fields(count = files.len()))]
    pub async fn upload_documents(
        &self,
        team_id: &str,
        files: &[PathBuf],
        folder_id: Option<&str>,
    ) -> IkanbanResult<UploadSummary> {
        if let Some(missing) = files.iter().find(|path| !path.exists()) {
            return Err(IkanbanError::FileNotFound(missing.clone()));
        }

        let mut form = Form::new();
        if let Some(folder_id) = folder_id {
            form = form.text("folder_id", folder_id.to_string());
        }
        for path in files {
            form = form.part("files[]", file_part(path).await?);
        }

        let endpoint = format!("/teams/{}/documents/upload", team_id);
        let builder = self
            .request(Method::POST, &endpoint)
            .timeout(self.upload_timeout)
            .multipart(form);
        Ok(self.send(builder).await?.unwrap_or_default())
    }

    /// Turn document references into ids. UUID-shaped references pass
    /// through; anything else is searched by title within `team_id`.
    /// References that match nothing are skipped with a warning.
    #[instrument(skip(self, references))]
    pub async fn resolve_document_ids(
        &self,
        team_id: Option<&str>,
        references: &[String],
    ) -> IkanbanResult<Vec<String>> {
        let mut ids = Vec::with_capacity(references.len());

        for reference in references {
            if is_uuid_shaped(reference) {
                ids.push(reference.clone());
                continue;
            }

            let team_id = team_id.ok_or(IkanbanError::MissingReference(
                "team (to search documents by title)",
            ))?;
            let documents = self.search_documents(team_id, Some(reference)).await?;
            match pick_document(&documents, reference, true) {
                Some(id) => ids.push(id.to_string()),
                None => warn!("document not found: {}", reference),
            }
        }

        if ids.is_empty() {
            return Err(IkanbanError::NoDocuments);
        }
        Ok(ids)
    }

    /// Find ids for freshly uploaded titles; only exact title matches count
    #[instrument(skip(self, titles))]
    pub async fn find_uploaded_documents(
        &self,
        team_id: &str,
        titles: &[String],
    ) -> IkanbanResult<Vec<String>> {
        let mut ids = Vec::new();
        for title in titles {
            let documents = self.search_documents(team_id, Some(title)).await?;
            if let Some(id) = pick_document(&documents, title, false) {
                ids.push(id.to_string());
            }
        }
        debug!(found = ids.len(), wanted = titles.len(), "matched uploaded titles");
        Ok(ids)
    }
}

#[async_trait]
impl Lookup for ApiClient {
    async fn team_issues(&self, team_id: &str) -> IkanbanResult<Vec<Task>> {
        ApiClient::team_issues(self, team_id).await
    }

    async fn projects(&self) -> IkanbanResult<Vec<Project>> {
        self.list_projects().await
    }

    async fn task(&self, task_id: &str) -> IkanbanResult<Task> {
        self.get_task(task_id).await
    }
}

async fn file_part(path: &Path) -> IkanbanResult<Part> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Ok(Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime.as_ref())?)
}

/// Pull a human-readable message out of an error body: the JSON `message`
/// (or `error`) field if present, otherwise the raw body.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("message")
                .or_else(|| json.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

/// Case-insensitive title match, optionally falling back to the first hit
fn pick_document<'a>(documents: &'a [Document], title: &str, first_hit: bool) -> Option<&'a str> {
    documents
        .iter()
        .find(|doc| {
            doc.title
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case(title))
        })
        .or_else(|| documents.first().filter(|_| first_hit))
        .map(|doc| doc.id.as_str())
}

/// Resolve a project reference for a team, consulting the live project list
/// when the alias is dynamic.
#[instrument(skip(lookup, aliases))]
pub async fn resolve_project_id<L>(
    lookup: &L,
    aliases: &AliasTables,
    reference: Option<&str>,
    team_id: Option<&str>,
) -> IkanbanResult<String>
where
    L: Lookup + ?Sized,
{
    match aliases.lookup_project(reference, team_id) {
        ProjectLookup::Id(id) => Ok(id),
        ProjectLookup::NoDefault => Err(IkanbanError::NoDefaultProject {
            team: team_id
                .map(|id| aliases.team_identifier(id).unwrap_or(id).to_string())
                .unwrap_or_else(|| "(none)".to_string()),
        }),
        ProjectLookup::Dynamic { name } => {
            let projects = lookup.projects().await?;
            debug!(count = projects.len(), "matching dynamic project '{}'", name);
            projects
                .into_iter()
                .find(|project| project.name == name)
                .map(|project| project.id)
                .ok_or(IkanbanError::ProjectNotFound { name })
        }
    }
}

/// Resolve the destination project of a move.
///
/// Project aliases are team scoped. Without an explicit `team_id` the alias
/// is looked up in the task's own team, which costs one task fetch unless
/// the project is already a UUID.
#[instrument(skip(lookup, aliases))]
pub async fn resolve_move_project<L>(
    lookup: &L,
    aliases: &AliasTables,
    task_id: &str,
    project: &str,
    team_id: Option<&str>,
) -> IkanbanResult<String>
where
    L: Lookup + ?Sized,
{
    let team_id = match team_id {
        Some(team_id) => Some(team_id.to_string()),
        None if is_uuid_shaped(project) => None,
        None => lookup.task(task_id).await?.team_id,
    };
    resolve_project_id(lookup, aliases, Some(project), team_id.as_deref()).await
}
