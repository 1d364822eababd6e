use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    pub backend: BackendSettings,
    #[serde(default)]
    pub grid: GridSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    /// School REST API root, e.g. `https://school.example/api/`
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub endpoints: EndpointSettings,
}

/// Backend paths, relative to `base_url`. `${id}` is replaced per request.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EndpointSettings {
    pub classes: String,
    pub class: String,
    pub teacher: String,
    pub profile: String,
    pub class_schedule: String,
    pub teacher_schedule: String,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            classes: "/classes/".to_string(),
            class: "/classes/${id}/".to_string(),
            teacher: "/teachers/${id}/".to_string(),
            profile: "/auth/me/".to_string(),
            class_schedule: "/schedule/class/${id}/".to_string(),
            teacher_schedule: "/schedule/teacher/${id}/".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct GridSettings {
    /// Minimum rows for the public class and teacher pages.
    #[serde(default)]
    pub public_min_rows: usize,
    /// Minimum rows for the editable operator page.
    #[serde(default = "default_operator_min_rows")]
    pub operator_min_rows: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            public_min_rows: 0,
            operator_min_rows: default_operator_min_rows(),
        }
    }
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_operator_min_rows() -> usize {
    8
}

/// Loads `config/timetable.*`, overlaid by `TIMETABLE__SECTION__KEY` variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    build_app_config(
        config::File::with_name("config/timetable").required(false),
        environment(),
    )
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("TIMETABLE").separator("__")
}

fn build_app_config<S>(file: S, env: config::Environment) -> anyhow::Result<AppConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Replace `${key}` variables in an endpoint template
pub fn prepare_path(template: &str, vars: &HashMap<String, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_path() {
        let mut vars = HashMap::new();
        vars.insert("id".to_string(), "12".to_string());

        assert_eq!(prepare_path("/schedule/class/${id}/", &vars), "/schedule/class/12/");
        assert_eq!(prepare_path("/auth/me/", &vars), "/auth/me/");
        assert_eq!(prepare_path("/teachers/${other}/", &vars), "/teachers/${other}/");
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = config::File::from_str(
            r#"
            [server]
            listen_addr = "127.0.0.1:9000"

            [backend]
            base_url = "http://localhost:8000/api/"
            "#,
            config::FileFormat::Toml,
        );
        let env = environment().source(Some(
            [(
                "TIMETABLE__BACKEND__BASE_URL".to_string(),
                "https://maktab.example/api/".to_string(),
            )]
            .into_iter()
            .collect(),
        ));

        let config = build_app_config(file, env).unwrap();

        assert_eq!(config.backend.base_url, "https://maktab.example/api/");
        assert_eq!(config.server.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.grid.operator_min_rows, 8);
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [backend]
            base_url = "http://localhost:8000/api/"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.backend.timeout_secs, 10);
        assert_eq!(config.backend.endpoints, EndpointSettings::default());
        assert_eq!(config.grid.public_min_rows, 0);
        assert_eq!(config.grid.operator_min_rows, 8);
    }

    #[test]
    fn test_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            listen_addr = "127.0.0.1:9000"

            [backend]
            base_url = "https://maktab.example/api"
            timeout_secs = 3

            [backend.endpoints]
            teacher_schedule = "/v2/schedule/teacher/${id}/"

            [grid]
            public_min_rows = 6
            operator_min_rows = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.server.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.backend.timeout_secs, 3);
        assert_eq!(
            config.backend.endpoints.teacher_schedule,
            "/v2/schedule/teacher/${id}/"
        );
        assert_eq!(config.backend.endpoints.class, "/classes/${id}/");
        assert_eq!(config.grid.public_min_rows, 6);
        assert_eq!(config.grid.operator_min_rows, 10);
    }
}
