//! 会话命令
//!
//! 对应编辑器上的用户操作，命令行里以字符串形式给出：
//! `first:<版式>`、`last:<版式>`、`sections:<页眉>,<页脚>`、`goto:first`、`goto:last`、
//! `focus:<区域>`、`write:<区域>=<内容>`、`save`、`clear`

use std::fmt;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::infrastructure::ContentStore;
use crate::models::RegionName;
use crate::workflow::editor_session::EditorSession;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FirstPage(String),
    LastPage(String),
    Sections { header: bool, footer: bool },
    GotoFirst,
    GotoLast,
    Focus(RegionName),
    Write { region: RegionName, html: String },
    Save,
    Clear,
}

impl Command {
    pub fn parse(input: &str) -> AppResult<Self> {
        let input = input.trim();
        let (verb, arg) = match input.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (input, None),
        };

        let command = match (verb, arg) {
            ("first", Some(name)) => Command::FirstPage(name.to_string()),
            ("last", Some(name)) => Command::LastPage(name.to_string()),
            ("sections", Some(flags)) => {
                let (header, footer) = flags
                    .split_once(',')
                    .ok_or_else(|| unknown_command(input))?;
                Command::Sections {
                    header: parse_flag(header).ok_or_else(|| unknown_command(input))?,
                    footer: parse_flag(footer).ok_or_else(|| unknown_command(input))?,
                }
            }
            ("goto", Some("first")) => Command::GotoFirst,
            ("goto", Some("last")) => Command::GotoLast,
            ("focus", Some(name)) => Command::Focus(parse_region(name, input)?),
            ("write", Some(body)) => {
                let (name, html) = body.split_once('=').ok_or_else(|| unknown_command(input))?;
                Command::Write {
                    region: parse_region(name, input)?,
                    html: html.to_string(),
                }
            }
            ("save", None) => Command::Save,
            ("clear", None) => Command::Clear,
            _ => return Err(unknown_command(input)),
        };

        Ok(command)
    }

    /// 在会话上执行命令
    pub fn apply<S: ContentStore>(&self, session: &mut EditorSession<S>) -> AppResult<()> {
        info!("▶ {}", self);
        match self {
            Command::FirstPage(name) => {
                session.change_first_page_layout(name)?;
            }
            Command::LastPage(name) => {
                session.change_last_page_layout(name)?;
            }
            Command::Sections { header, footer } => {
                session.change_page_sections(*header, *footer)?;
            }
            Command::GotoFirst => {
                session.go_to_first_page()?;
            }
            Command::GotoLast => {
                session.go_to_last_page()?;
            }
            Command::Focus(region) => session.focus(*region)?,
            Command::Write { region, html } => session.write(*region, html.as_str())?,
            Command::Save => {
                session.save()?;
            }
            Command::Clear => {
                session.clear_all()?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::FirstPage(name) => write!(f, "first:{}", name),
            Command::LastPage(name) => write!(f, "last:{}", name),
            Command::Sections { header, footer } => write!(f, "sections:{},{}", header, footer),
            Command::GotoFirst => write!(f, "goto:first"),
            Command::GotoLast => write!(f, "goto:last"),
            Command::Focus(region) => write!(f, "focus:{}", region),
            Command::Write { region, .. } => write!(f, "write:{}", region),
            Command::Save => write!(f, "save"),
            Command::Clear => write!(f, "clear"),
        }
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim() {
        "true" | "on" | "1" => Some(true),
        "false" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn parse_region(name: &str, input: &str) -> AppResult<RegionName> {
    RegionName::from_name(name.trim()).ok_or_else(|| unknown_command(input))
}

fn unknown_command(input: &str) -> AppError {
    AppError::Other(format!("无法识别的命令: {}", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("first:report-page-header").unwrap(),
            Command::FirstPage("report-page-header".to_string())
        );
        assert_eq!(Command::parse("goto:last").unwrap(), Command::GotoLast);
        assert_eq!(
            Command::parse("sections:on,false").unwrap(),
            Command::Sections {
                header: true,
                footer: false
            }
        );
        assert_eq!(
            Command::parse("write:reportFooter=<p>a=b</p>").unwrap(),
            Command::Write {
                region: RegionName::ReportFooter,
                html: "<p>a=b</p>".to_string()
            }
        );
        assert_eq!(Command::parse(" save ").unwrap(), Command::Save);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["goto:middle", "focus:sidebar", "sections:yes", "save:now", "jump"] {
            assert!(Command::parse(input).is_err(), "{}", input);
        }
    }
}
