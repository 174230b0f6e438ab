// ABOUTME: Integration tests for settings discovery and definition file parsing.
// ABOUTME: Tests JSON/YAML container definitions, device overrides, and env overrides.

use netfield::api::ContainerForm;
use netfield::config::*;
use netfield::error::Error;
use serde_json::json;
use std::fs;
use std::path::Path;
use std::time::Duration;

mod definitions {
    use super::*;

    #[test]
    fn parse_minimal_json_definition() {
        let json = r#"{ "displayName": "edge app", "imageUri": "registry.example.com/edge" }"#;
        let def = ContainerDefinition::from_json(json).unwrap();

        assert_eq!(def.display_name.as_str(), "edge app");
        assert!(def.restart_policy.is_none());
        assert_eq!(def.container_create_options, json!({}));
        assert_eq!(def.environment_variables, json!([]));
        assert!(def.tag_name.is_none());
    }

    #[test]
    fn parse_full_json_definition() {
        let json = r#"{
          "displayName": "Edge App",
          "imageUri": "registry.example.com/edge",
          "version": "2.1.0",
          "restartPolicy": "unless-stopped",
          "type": "docker",
          "desiredStatus": "running",
          "category": "analytics",
          "processorArchitecture": "amd64",
          "shortDescription": "edge analytics",
          "description": "Runs analytics at the edge",
          "containerCreateOptions": { "HostConfig": { "Privileged": true } },
          "containerTwinDesiredOptions": { "interval": 5 },
          "environmentVariables": [{ "name": "MODE", "value": "edge" }],
          "containerType": "private",
          "organisationId": "org-1",
          "registryType": "custom",
          "credentials": { "username": "u", "password": "p" }
        }"#;
        let def = ContainerDefinition::from_json(json).unwrap();

        assert_eq!(def.restart_policy.as_deref(), Some("unless-stopped"));
        assert_eq!(def.runtime_type.as_deref(), Some("docker"));
        assert_eq!(def.container_type, Some(ContainerType::Private));
        assert_eq!(def.credentials["username"], "u");
        assert_eq!(def.container_twin_desired_options["interval"], 5);
    }

    #[test]
    fn parse_yaml_definition() {
        let yaml = r#"
displayName: edge app
imageUri: registry.example.com/edge
restartPolicy: on-failure
containerCreateOptions:
  HostConfig:
    Privileged: true
"#;
        let def = ContainerDefinition::from_yaml(yaml).unwrap();

        assert_eq!(def.restart_policy.as_deref(), Some("on-failure"));
        assert_eq!(
            def.container_create_options,
            json!({ "HostConfig": { "Privileged": true } })
        );
    }

    #[test]
    fn missing_display_name_is_error() {
        let result = ContainerDefinition::from_json(r#"{ "imageUri": "x" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn blank_display_name_is_error() {
        let result = ContainerDefinition::from_json(r#"{ "displayName": "  ", "imageUri": "x" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn restart_policy_is_passed_through_verbatim() {
        let json = r#"{ "displayName": "a", "imageUri": "x", "restartPolicy": "on-failure:3" }"#;
        let def = ContainerDefinition::from_json(json).unwrap();

        let form = ContainerForm::from_definition(&def);
        assert_eq!(form.restart_policy.as_deref(), Some("on-failure:3"));
    }

    #[test]
    fn absent_restart_policy_is_left_out_of_the_form() {
        let def = ContainerDefinition::from_json(r#"{ "displayName": "a", "imageUri": "x" }"#)
            .unwrap();

        let form = ContainerForm::from_definition(&def);
        assert!(form.restart_policy.is_none());
    }

    #[test]
    fn tag_is_merged_into_image() {
        let def = ContainerDefinition::from_json(
            r#"{ "displayName": "a", "imageUri": "www.uritotheimage.com", "tagName": "old" }"#,
        )
        .unwrap()
        .with_tag("tag-1");

        assert_eq!(def.tag_name.as_deref(), Some("tag-1"));
        assert_eq!(def.tagged_image(), "www.uritotheimage.com:tag-1");
    }
}

mod files {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn extension_picks_the_parser() {
        let dir = tempfile::tempdir().unwrap();
        let json = write(
            dir.path(),
            "container.json",
            r#"{ "displayName": "a", "imageUri": "x" }"#,
        );
        let yaml = write(dir.path(), "container.yml", "displayName: a\nimageUri: x\n");

        let roots = SearchRoots::default();
        assert_eq!(
            load_definition(&json, &roots).unwrap(),
            load_definition(&yaml, &roots).unwrap()
        );
    }

    #[test]
    fn relative_path_resolves_against_process_root() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "container.json",
            r#"{ "displayName": "a", "imageUri": "x" }"#,
        );
        let roots = SearchRoots {
            package: None,
            process: Some(dir.path().to_path_buf()),
        };

        let def = load_definition(Path::new("container.json"), &roots).unwrap();
        assert_eq!(def.image_uri, "x");
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let err = load_definition(Path::new("no/such/file.json"), &SearchRoots::default())
            .unwrap_err();

        assert!(matches!(err, Error::ConfigNotFound(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn malformed_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "broken.json", "{ not json");

        let err = load_definition(&path, &SearchRoots::default()).unwrap_err();

        assert!(matches!(err, Error::InvalidConfig { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn absent_device_override_is_empty_object() {
        let options = load_device_override(None, &SearchRoots::default()).unwrap();
        assert_eq!(options.as_value(), &json!({}));
    }

    #[test]
    fn device_override_loads_json_and_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let json = write(dir.path(), "device.json", r#"{ "env": { "MODE": "edge" } }"#);
        let yaml = write(dir.path(), "device.yaml", "env:\n  MODE: edge\n");

        let roots = SearchRoots::default();
        let from_json = load_device_override(Some(json.as_path()), &roots).unwrap();
        let from_yaml = load_device_override(Some(yaml.as_path()), &roots).unwrap();

        assert_eq!(from_json.as_value(), &json!({ "env": { "MODE": "edge" } }));
        assert_eq!(from_json, from_yaml);
    }

    #[test]
    fn device_override_must_be_an_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "device.json", "[1, 2, 3]");

        let err = load_device_override(Some(path.as_path()), &SearchRoots::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }
}

mod settings {
    use super::*;

    #[test]
    fn defaults_without_a_settings_file() {
        let dir = tempfile::tempdir().unwrap();

        temp_env::with_var_unset(API_URL_ENV, || {
            let settings = Settings::discover(dir.path()).unwrap();
            assert_eq!(settings, Settings::default());
            assert_eq!(settings.base_url(), "https://api.netfield.io/v1");
        });
    }

    #[test]
    fn settings_file_is_discovered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILENAME),
            "api_url: https://staging.example.com\napi_version: v2\ntimeout: 30s\n",
        )
        .unwrap();

        temp_env::with_var_unset(API_URL_ENV, || {
            let settings = Settings::discover(dir.path()).unwrap();
            assert_eq!(settings.api_url, "https://staging.example.com");
            assert_eq!(settings.timeout, Some(Duration::from_secs(30)));
            assert_eq!(settings.base_url(), "https://staging.example.com/v2");
        });
    }

    #[test]
    fn settings_directory_variant_is_discovered() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".netfield")).unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILENAME_DIR),
            "api_version: v3\n",
        )
        .unwrap();

        temp_env::with_var_unset(API_URL_ENV, || {
            let settings = Settings::discover(dir.path()).unwrap();
            assert_eq!(settings.api_url, DEFAULT_API_URL);
            assert_eq!(settings.api_version, "v3");
        });
    }

    #[test]
    fn environment_overrides_api_url() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILENAME),
            "api_url: https://staging.example.com\n",
        )
        .unwrap();

        temp_env::with_var(API_URL_ENV, Some("http://127.0.0.1:9999"), || {
            let settings = Settings::discover(dir.path()).unwrap();
            assert_eq!(settings.api_url, "http://127.0.0.1:9999");
        });
    }

    #[test]
    fn invalid_timeout_is_error() {
        let result = Settings::from_yaml("timeout: soon\n");
        assert!(result.is_err());
    }
}
