//! `get [-n]` – download every URL into the session directory.

use super::{Command, CommandError, CommandResult, Env};
use anyhow::Context;
use chrono::Local;
use std::fs;
use std::path::Path;
use urload_core::fetch::Fetcher;
use urload_core::timestamp::format_timestamp;
use urload_core::url_model::build_filename;
use urload_core::UrlRecord;

pub struct GetCommand;

impl Command for GetCommand {
    fn name(&self) -> &'static str {
        "get"
    }

    fn description(&self) -> &'static str {
        "get [-n] - Download each URL in the list into the session directory.

Files are named by the filename template (see `fileformat`) and written under
the numbered session directory. The list is replaced by the URLs that failed,
so `get` can simply be repeated.
With -n, perform a dry run: print the index, URL and filename for each URL
without downloading anything."
    }

    fn run(&self, args: &[String], records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult {
        let dry_run = match args {
            [] => false,
            [flag] if flag == "-n" => true,
            _ => return Err(CommandError::usage("Usage: get [-n]")),
        };
        let template = env.settings.template()?;
        let timestamp = format_timestamp(&Local::now(), &env.settings.time_format)
            .map_err(|e| CommandError::usage(format!("Invalid time format: {}", e)))?;

        if dry_run {
            for (offset, record) in (0u64..).zip(records) {
                let index = env.session.next_index() + offset;
                let name = build_filename(&template, &timestamp, &record.url, index);
                writeln!(env.out, "[{}] {} {}", index, record.url, name)?;
            }
            return Ok(records.to_vec());
        }

        let dir = env.session.dir();
        let mut failed = Vec::new();
        for record in records {
            let index = env.session.take_index();
            let name = build_filename(&template, &timestamp, &record.url, index);
            let path = dir.join(&name);
            write!(env.out, "[{}] {} -> {}", index, record.url, path.display())?;
            env.out.flush()?;
            match download(env.fetcher, record, &path) {
                Ok(bytes) => {
                    tracing::info!(url = %record.url, path = %path.display(), bytes, "downloaded");
                    writeln!(env.out, " [ok]")?;
                }
                Err(e) => {
                    tracing::warn!(url = %record.url, "download failed: {:#}", e);
                    writeln!(env.out, " [FAILED]")?;
                    writeln!(env.out, "Failed to download {}: {:#}", record.url, e)?;
                    failed.push(record.clone());
                }
            }
        }
        Ok(failed)
    }
}

/// Fetches `record` and writes the body to `path`, creating parent directories.
fn download(fetcher: &dyn Fetcher, record: &UrlRecord, path: &Path) -> anyhow::Result<usize> {
    let resp = fetcher.get(&record.url, &record.headers)?.error_for_status()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, &resp.body).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(resp.body.len())
}
