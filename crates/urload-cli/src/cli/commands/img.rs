//! `img` – replace each page with the images it embeds.

use super::extract::scrape;
use super::{no_args, Command, CommandResult, Env};
use urload_core::html::extract_images;
use urload_core::UrlRecord;

pub struct ImgCommand;

impl Command for ImgCommand {
    fn name(&self) -> &'static str {
        "img"
    }

    fn description(&self) -> &'static str {
        "img - Extract image sources from each URL.

Fetches each page in the list, extracts every <img src>, resolves it against
the page URL and adds it with the page as its referrer. The pages themselves
are removed from the list."
    }

    fn run(&self, args: &[String], records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult {
        no_args(self.name(), args)?;
        scrape(records, env, extract_images)
    }
}
