use figment::Jail;
use kanban_config::{CredentialsFile, KanbanConfig};

#[test]
fn env_vars_fill_store_section() {
    Jail::expect_with(|jail| {
        jail.set_env("KANBAN_STORE__URI", "env.db");
        jail.set_env("KANBAN_STORE__NAMESPACE", "kanban");
        jail.set_env("KANBAN_STORE__COLLECTION", "showcase");

        let config = KanbanConfig::load().expect("config loads");
        assert!(config.store.is_configured());

        let store = config
            .store_or_fallback(&CredentialsFile::new("missing.txt"))
            .expect("env config should not need the credentials file");
        assert_eq!(store.uri, "env.db");
        Ok(())
    });
}

#[test]
fn partial_env_falls_back_to_credentials_file() {
    Jail::expect_with(|jail| {
        jail.set_env("KANBAN_STORE__URI", "env.db");
        jail.create_dir("resources")?;
        jail.create_file(
            "resources/credentials.txt",
            "uri=file.db\ndbcontext=kanban\ncollection=showcase\n",
        )?;

        let config = KanbanConfig::load().expect("config loads");
        let store = config
            .store_or_fallback(&CredentialsFile::default())
            .expect("credentials file should load");
        assert_eq!(store.uri, "file.db");
        Ok(())
    });
}

#[test]
fn no_sources_is_a_hard_failure() {
    Jail::expect_with(|_jail| {
        let config = KanbanConfig::load().expect("config loads");
        let result = config.store_or_fallback(&CredentialsFile::default());
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn general_section_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("KANBAN_GENERAL__RECORD_HISTORY", "false");
        jail.set_env("KANBAN_GENERAL__DEFAULT_TYPE", "Subtask");

        let config = KanbanConfig::load().expect("config loads");
        assert!(!config.general.record_history);
        assert_eq!(config.general.default_type, kanban_core::TaskType::Subtask);
        Ok(())
    });
}
