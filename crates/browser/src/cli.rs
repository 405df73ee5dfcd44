use std::path::PathBuf;

use clap::Parser;

use storefront_core::DomainResult;
use storefront_observability::LogFormat;

use crate::session::BrowserSession;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "storefront",
    version,
    about = "Browse a product catalog: search, filter by category and price, sort.",
    long_about = "Loads a JSON product dataset and prints the products matching the given criteria.\n\nExamples:\n  storefront --dataset products.json --search mug\n  storefront --category Electronics --price \"1000 - 5000\" --sort price-asc\n  storefront --price 0,2500 --json\n  storefront --list-options"
)]
pub struct CliArgs {
    #[arg(
        short = 'd',
        long = "dataset",
        value_name = "PATH",
        help_heading = "Input",
        help = "Product dataset (JSON array). Overrides STOREFRONT_DATASET."
    )]
    pub dataset: Option<PathBuf>,

    #[arg(
        short = 's',
        long = "search",
        value_name = "TEXT",
        default_value = "",
        help_heading = "Criteria",
        help = "Case-insensitive substring of the product name."
    )]
    pub search: String,

    #[arg(
        short = 'c',
        long = "category",
        value_name = "LABEL",
        default_value = "all",
        help_heading = "Criteria",
        help = "Exact category label; \"all\" or empty shows every category."
    )]
    pub category: String,

    #[arg(
        short = 'p',
        long = "price",
        value_name = "BUCKET|MIN,MAX",
        help_heading = "Criteria",
        help = "Price bucket label (e.g. \"Under 1000\") or an inclusive \"min,max\" range."
    )]
    pub price: Option<String>,

    #[arg(
        long = "sort",
        value_name = "ORDER",
        default_value = "default",
        help_heading = "Criteria",
        help = "default, price-asc, price-desc, name-az or rating."
    )]
    pub sort: String,

    #[arg(long = "json", help_heading = "Output", help = "Print JSON instead of text cards.")]
    pub json: bool,

    #[arg(
        long = "list-options",
        help_heading = "Output",
        help = "Print the category, price and sort choices and exit."
    )]
    pub list_options: bool,

    #[arg(
        long = "log-format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Log line format on stderr: json or text. Overrides STOREFRONT_LOG_FORMAT."
    )]
    pub log_format: Option<LogFormat>,
}

impl CliArgs {
    /// Feed the requested criteria through the session, one selection at a time.
    pub fn apply(&self, session: &mut BrowserSession) -> DomainResult<()> {
        session.set_search(self.search.as_str());
        session.select_category(&self.category);
        if let Some(price) = &self.price {
            session.select_price(price)?;
        }
        session.select_sort(&self.sort);
        Ok(())
    }
}
