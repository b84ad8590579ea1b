use anyhow::Context;
use irr_config::IrrConfig;

use crate::cli::Cli;

/// Load the layered config, then let command-line flags override it.
pub fn load_config(cli: &Cli) -> anyhow::Result<IrrConfig> {
    let config = IrrConfig::load_with_dotenv(cli.config.as_deref())
        .context("failed to load irr configuration")?;
    let config = apply_overrides(config, cli);
    config
        .validate()
        .context("no usable export pairs configured (set [inputs] in irr.toml or pass --coder1/--coder2)")?;
    Ok(config)
}

fn apply_overrides(mut config: IrrConfig, cli: &Cli) -> IrrConfig {
    if !cli.coder1.is_empty() || !cli.coder2.is_empty() {
        tracing::debug!(
            coder1 = cli.coder1.len(),
            coder2 = cli.coder2.len(),
            "export files taken from command line"
        );
        config.inputs.coder1.clone_from(&cli.coder1);
        config.inputs.coder2.clone_from(&cli.coder2);
    }
    if let Some(dir) = &cli.output_dir {
        config.output.dir.clone_from(dir);
    }
    config
}
