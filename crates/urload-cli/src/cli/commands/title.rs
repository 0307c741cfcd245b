//! `title [<range>]` – fetch pages and print their HTML titles.

use super::{Command, CommandResult, Env};
use urload_core::fetch::Response;
use urload_core::html::extract_title;
use urload_core::range::resolve_range;
use urload_core::UrlRecord;

pub struct TitleCommand;

impl Command for TitleCommand {
    fn name(&self) -> &'static str {
        "title"
    }

    fn description(&self) -> &'static str {
        "title [<range>] - Retrieve and display HTML titles from URLs in the list.

Fetches each selected URL (with its headers) and prints the page title next
to its index. Takes the same ranges as `list`. A failed fetch is reported on
its own line and the remaining URLs are still processed."
    }

    fn run(&self, args: &[String], records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult {
        let Some(range) = resolve_range(args.first().map(String::as_str), records.len())? else {
            return Ok(records.to_vec());
        };
        for idx in range.indices() {
            let record = &records[idx];
            match env
                .fetcher
                .get(&record.url, &record.headers)
                .and_then(Response::error_for_status)
            {
                Ok(resp) => match extract_title(&resp.text()) {
                    Some(title) => writeln!(env.out, "{}: {}", idx, title)?,
                    None => writeln!(env.out, "{}: No title found", idx)?,
                },
                Err(e) => {
                    tracing::warn!(url = %record.url, "title fetch failed: {}", e);
                    writeln!(env.out, "{}: Error fetching title - {}", idx, e)?
                }
            }
        }
        Ok(records.to_vec())
    }
}
