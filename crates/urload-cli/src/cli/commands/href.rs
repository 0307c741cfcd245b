//! `href` – replace each page with the links it contains.

use super::extract::scrape;
use super::{no_args, Command, CommandResult, Env};
use urload_core::html::extract_links;
use urload_core::UrlRecord;

pub struct HrefCommand;

impl Command for HrefCommand {
    fn name(&self) -> &'static str {
        "href"
    }

    fn description(&self) -> &'static str {
        "href - Extract anchor links from each URL.

Fetches each page in the list, extracts every <a href> link, resolves it
against the page URL and adds it with the page as its referrer. The pages
themselves are removed from the list."
    }

    fn run(&self, args: &[String], records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult {
        no_args(self.name(), args)?;
        scrape(records, env, extract_links)
    }
}
