// School REST API provider implementation
use crate::application::schedule_provider::{
    ProviderError, ProviderResult, ScheduleProvider, TeacherRef,
};
use crate::domain::schedule::ScheduleEntry;
use crate::domain::school::{ClassInfo, Profile, TeacherInfo};
use crate::infrastructure::config::{prepare_path, EndpointSettings};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ApiScheduleProvider {
    base_url: String,
    endpoints: EndpointSettings,
    client: reqwest::Client,
}

impl ApiScheduleProvider {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        endpoints: EndpointSettings,
    ) -> ProviderResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoints,
            client,
        })
    }

    fn build_url(&self, template: &str, id: Option<&str>) -> String {
        let mut vars = HashMap::new();
        if let Some(id) = id {
            vars.insert("id".to_string(), urlencoding::encode(id).into_owned());
        }
        let path = prepare_path(template, &vars);
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        token: Option<&str>,
    ) -> ProviderResult<T> {
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(url).header("Accept", "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound {
                path: url.to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ProviderError::Decode {
            message: format!("{}: {}", url, e),
        })
    }
}

#[async_trait]
impl ScheduleProvider for ApiScheduleProvider {
    async fn list_classes(&self, token: Option<&str>) -> ProviderResult<Vec<ClassInfo>> {
        let url = self.build_url(&self.endpoints.classes, None);
        self.get_json(&url, token).await
    }

    async fn get_class(&self, class_id: i64, token: Option<&str>) -> ProviderResult<ClassInfo> {
        let url = self.build_url(&self.endpoints.class, Some(&class_id.to_string()));
        self.get_json(&url, token).await
    }

    async fn get_teacher(
        &self,
        teacher_id: i64,
        token: Option<&str>,
    ) -> ProviderResult<TeacherInfo> {
        let url = self.build_url(&self.endpoints.teacher, Some(&teacher_id.to_string()));
        self.get_json(&url, token).await
    }

    async fn get_profile(&self, token: Option<&str>) -> ProviderResult<Profile> {
        let url = self.build_url(&self.endpoints.profile, None);
        self.get_json(&url, token).await
    }

    async fn fetch_schedule_for_class(
        &self,
        class_id: i64,
        token: Option<&str>,
    ) -> ProviderResult<Vec<ScheduleEntry>> {
        let url = self.build_url(&self.endpoints.class_schedule, Some(&class_id.to_string()));
        let entries: Vec<ScheduleEntry> = self.get_json(&url, token).await?;
        tracing::debug!("Fetched {} entries for class {}", entries.len(), class_id);
        Ok(entries)
    }

    async fn fetch_schedule_for_teacher(
        &self,
        teacher: TeacherRef,
        token: Option<&str>,
    ) -> ProviderResult<Vec<ScheduleEntry>> {
        let url = self.build_url(
            &self.endpoints.teacher_schedule,
            Some(&teacher.to_string()),
        );
        let entries: Vec<ScheduleEntry> = self.get_json(&url, token).await?;
        tracing::debug!("Fetched {} entries for teacher {}", entries.len(), teacher);
        Ok(entries)
    }
}
