//! `storefront` binary: load the dataset, apply criteria, print the view.

use anyhow::Context;
use clap::Parser;

use storefront_browser::{BrowserSession, CliArgs, Settings, load_catalog, render};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let settings = Settings::from_env().with_overrides(&args);

    storefront_observability::init(settings.log_format);

    let catalog = load_catalog(&settings.dataset_path)
        .with_context(|| format!("loading dataset {}", settings.dataset_path.display()))?;
    let mut session = BrowserSession::new(catalog);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.list_options {
        return render::write_options(&mut out, args.json, session.categories());
    }

    args.apply(&mut session).context("invalid criteria")?;
    render::write_view(&mut out, args.json, session.view(), session.catalog().len())
}
