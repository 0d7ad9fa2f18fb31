//! Shell completions and man pages for the `gitlist` binary.
//!
//! The man set is the main page plus one page per user-facing subcommand.
//! `completions` and `man` only produce these artifacts and get no page of
//! their own.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::CommandFactory;

use crate::Cli;

const BIN_NAME: &str = "gitlist";
const MANUAL: &str = "Gitlist Manual";

/// Subcommands with their own man page, with the page name.
const PAGED_SUBCOMMANDS: &[(&str, &str)] = &[("audit", "gitlist-audit")];

fn completion_script(shell: clap_complete::Shell) -> Vec<u8> {
    let mut cmd = Cli::command();
    let mut out = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut out);
    out
}

fn render(cmd: clap::Command) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    clap_mangen::Man::new(cmd).manual(MANUAL).render(&mut out)?;
    Ok(out)
}

/// Render every man page as `(file name, roff source)`.
fn man_pages() -> io::Result<Vec<(String, Vec<u8>)>> {
    let root = Cli::command();
    let mut pages = vec![(format!("{BIN_NAME}.1"), render(root.clone())?)];

    for (subcommand, page) in PAGED_SUBCOMMANDS {
        if let Some(cmd) = root.find_subcommand(subcommand) {
            let cmd = cmd
                .clone()
                .name(*page)
                .bin_name(format!("{BIN_NAME} {subcommand}"));
            pages.push((format!("{page}.1"), render(cmd)?));
        }
    }

    Ok(pages)
}

fn write_man_pages(dir: &Path) -> io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    man_pages()?
        .into_iter()
        .map(|(name, page)| {
            let path = dir.join(name);
            std::fs::write(&path, page)?;
            Ok(path)
        })
        .collect()
}

pub(crate) fn handle_completions(
    shell: clap_complete::Shell,
) -> Result<(), Box<dyn std::error::Error>> {
    io::stdout().write_all(&completion_script(shell))?;
    Ok(())
}

pub(crate) fn handle_man(output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(dir) => {
            for path in write_man_pages(&dir)? {
                println!("Wrote {}", path.display());
            }
        }
        None => {
            let pages = man_pages()?;
            if let Some((_, main_page)) = pages.first() {
                io::stdout().write_all(main_page)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(name: &str) -> String {
        let (_, page) = man_pages()
            .expect("man rendering should succeed")
            .into_iter()
            .find(|(file, _)| file == name)
            .expect("page should be rendered");
        String::from_utf8(page).expect("man output should be UTF-8")
    }

    #[test]
    fn completions_offer_audit_flags_in_every_shell() {
        for shell in [
            clap_complete::Shell::Bash,
            clap_complete::Shell::Zsh,
            clap_complete::Shell::Fish,
        ] {
            let script = String::from_utf8(completion_script(shell)).unwrap();
            for flag in ["orgs", "outputcsv", "rawjson"] {
                assert!(script.contains(flag), "{shell} completion lacks {flag}");
            }
        }
    }

    #[test]
    fn main_page_documents_config_and_environment() {
        let page = page("gitlist.1");

        assert!(page.to_lowercase().contains(".th gitlist"));
        assert!(page.contains("GITLIST_GITHUB__TOKEN"));
        assert!(page.contains("GITHUB_TOKEN"));
        assert!(page.contains("config.toml"));
    }

    #[test]
    fn audit_page_documents_flags_and_exit_status() {
        let page = page("gitlist-audit.1");

        for flag in ["orgs", "outputcsv", "rawjson"] {
            assert!(page.contains(flag), "audit page lacks {flag}");
        }
        assert!(page.contains("EXIT STATUS"));
        assert!(page.contains("130"));
    }

    #[test]
    fn meta_subcommands_get_no_page() {
        let names: Vec<String> = man_pages().unwrap().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["gitlist.1", "gitlist-audit.1"]);
    }

    #[test]
    fn write_man_pages_creates_one_file_per_page() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("man1");

        let written = write_man_pages(&out).unwrap();

        assert_eq!(written.len(), 2);
        assert!(out.join("gitlist.1").is_file());
        assert!(out.join("gitlist-audit.1").is_file());
    }
}
