use std::path::PathBuf;

use figment::Jail;
use irr_config::IrrConfig;

#[test]
fn env_overrides_output_dir() {
    Jail::expect_with(|jail| {
        jail.set_env("IRR_OUTPUT__DIR", "from-env");
        let config = IrrConfig::load(None).expect("config loads");
        assert_eq!(config.output.dir, PathBuf::from("from-env"));
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file("irr.toml", "[output]\ntext_file = \"from-file.csv\"\n")?;
        jail.set_env("IRR_OUTPUT__TEXT_FILE", "from-env.csv");

        let config = IrrConfig::load(None).expect("config loads");
        assert_eq!(config.output.text_file, "from-env.csv");
        Ok(())
    });
}

#[test]
fn unrelated_prefixed_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("IRR_LOG", "debug");
        let config = IrrConfig::load(None).expect("config loads");
        assert!(config.inputs.coder1.is_empty());
        Ok(())
    });
}
